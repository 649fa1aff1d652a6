//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use linkdrop_api::{AppState, build_router};
use linkdrop_core::config::AppConfig;
use linkdrop_registry::{MemoryEntryRegistry, TokioExpiryScheduler};

/// In-process application with a scratch filesystem tree.
///
/// Layout under `root`:
/// - `disk1/docs/report.txt`, `disk1/docs/notes.md`, `disk1/docs/sub/deep.txt`
/// - `disk1/media/`, `disk2/backup/`
/// - `secret.txt` (outside every shared directory)
pub struct TestApp {
    /// The Axum router under test
    pub router: Router,
    /// Backing registry, for direct inspection
    pub registry: Arc<MemoryEntryRegistry>,
    /// Scratch tree, removed on drop
    pub root: TempDir,
}

impl TestApp {
    /// Builds the app with default settings and roots under the scratch tree.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let base = root.path();
        std::fs::create_dir_all(base.join("disk1/docs/sub")).unwrap();
        std::fs::create_dir_all(base.join("disk1/media")).unwrap();
        std::fs::create_dir_all(base.join("disk2/backup")).unwrap();
        std::fs::write(base.join("disk1/docs/report.txt"), b"quarterly numbers").unwrap();
        std::fs::write(base.join("disk1/docs/notes.md"), b"# notes").unwrap();
        std::fs::write(base.join("disk1/docs/sub/deep.txt"), b"deep").unwrap();
        std::fs::write(base.join("secret.txt"), b"do not serve").unwrap();

        let mut config = AppConfig::default();
        config.share.public_base_url = "http://share.test".to_string();
        config.share.roots_base = base.to_string_lossy().into_owned();

        let registry = Arc::new(MemoryEntryRegistry::new());
        let scheduler = Arc::new(TokioExpiryScheduler::new(registry.clone()));
        let state = AppState::new(config, registry.clone(), scheduler);

        Self {
            router: build_router(state),
            registry,
            root,
        }
    }

    /// Absolute path of `relative` inside the scratch tree, as a string.
    pub fn path(&self, relative: &str) -> String {
        self.root.path().join(relative).to_string_lossy().into_owned()
    }

    /// Sends a request and collects the full response.
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                req = req.header("Content-Type", "application/json");
                Body::from(serde_json::to_vec(&json).expect("Failed to serialize body"))
            }
            None => Body::empty(),
        };
        let req = req.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            bytes: bytes.to_vec(),
        }
    }

    /// Sends a raw body to `/addEntry`.
    pub async fn add_entry_raw(&self, body: &str) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri("/addEntry")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        TestResponse {
            status,
            headers,
            bytes: bytes.to_vec(),
        }
    }

    /// Registers a share and returns its token.
    pub async fn share(&self, kind: &str, relative: &str, ttl: u32, max: u32) -> String {
        let response = self
            .request(
                "POST",
                "/addEntry",
                Some(serde_json::json!({
                    "type": kind,
                    "path": self.path(relative),
                    "ttl": ttl,
                    "maxDownloads": max,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "addEntry failed: {}", response.text());

        let url = response.json()["path"]
            .as_str()
            .expect("path missing from response")
            .to_string();
        url.strip_prefix("http://share.test/")
            .expect("unexpected share url")
            .to_string()
    }
}

/// Collected response.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub bytes: Vec<u8>,
}

impl TestResponse {
    /// Body parsed as JSON, or `Null`.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap_or(Value::Null)
    }

    /// Body as lossy UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Header value as a string, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
