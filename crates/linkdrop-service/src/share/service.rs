//! Share registration service.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use linkdrop_core::config::ShareConfig;
use linkdrop_core::error::{AppError, ErrorKind};
use linkdrop_core::traits::{EntryRegistry, ExpiryScheduler};
use linkdrop_core::types::{EntryKind, ShareEntry};

use super::link::LinkService;

/// Attempts at finding an unused token before giving up.
const MAX_TOKEN_ATTEMPTS: usize = 3;

/// Request to register a new share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterShare {
    /// File or directory.
    pub kind: EntryKind,
    /// Absolute path of the target.
    pub path: PathBuf,
    /// TTL in minutes (`None` = configured default).
    pub ttl_minutes: Option<u32>,
    /// Download quota (`None` = configured default).
    pub max_downloads: Option<u32>,
}

/// A successfully registered share.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredShare {
    /// The stored entry as of registration.
    pub entry: ShareEntry,
    /// Public share URL embedding the token.
    pub url: String,
}

/// Registers share entries and arms their expiry.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Entry registry.
    registry: Arc<dyn EntryRegistry>,
    /// TTL scheduler.
    scheduler: Arc<dyn ExpiryScheduler>,
    /// Token generator.
    link_service: Arc<LinkService>,
    /// Share settings (defaults, bounds, public URL).
    config: ShareConfig,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        registry: Arc<dyn EntryRegistry>,
        scheduler: Arc<dyn ExpiryScheduler>,
        link_service: Arc<LinkService>,
        config: ShareConfig,
    ) -> Self {
        Self {
            registry,
            scheduler,
            link_service,
            config,
        }
    }

    /// Validates the request, stores a fresh entry, and arms its TTL.
    pub async fn register(&self, req: RegisterShare) -> Result<RegisteredShare, AppError> {
        let ttl_minutes = req.ttl_minutes.unwrap_or(self.config.default_ttl_minutes);
        let max_downloads = req
            .max_downloads
            .unwrap_or(self.config.default_max_downloads);

        if ttl_minutes == 0 {
            return Err(AppError::validation("ttl must be at least 1 minute"));
        }
        if ttl_minutes > self.config.max_ttl_minutes {
            return Err(AppError::validation(format!(
                "ttl must not exceed {} minutes",
                self.config.max_ttl_minutes
            )));
        }
        if max_downloads == 0 {
            return Err(AppError::validation("maxDownloads must be at least 1"));
        }
        if !req.path.is_absolute() {
            return Err(AppError::validation(format!(
                "Path must be absolute: {}",
                req.path.display()
            )));
        }

        self.check_target(req.kind, &req.path).await?;

        let mut attempts = 0;
        let entry = loop {
            attempts += 1;
            let token = self.link_service.generate_token();
            let entry = ShareEntry::new(
                token,
                req.kind,
                req.path.clone(),
                ttl_minutes,
                max_downloads,
            );
            match self.registry.insert(entry.clone()) {
                Ok(()) => break entry,
                Err(e) if e.is(ErrorKind::Conflict) && attempts < MAX_TOKEN_ATTEMPTS => {
                    warn!(attempt = attempts, "Token collision, generating a new one");
                }
                Err(e) if e.is(ErrorKind::Conflict) => {
                    return Err(AppError::internal("Could not allocate a unique share token"));
                }
                Err(e) => return Err(e),
            }
        };

        self.scheduler.arm(&entry.token, entry.ttl());

        info!(
            token = %entry.log_id(),
            kind = %entry.kind,
            ttl_minutes = entry.ttl_minutes,
            max_downloads = entry.max_downloads,
            expires_at = %entry.expires_at(),
            "Share registered"
        );

        let url = self.config.share_url(&entry.token);
        Ok(RegisteredShare { entry, url })
    }

    async fn check_target(&self, kind: EntryKind, path: &std::path::Path) -> Result<(), AppError> {
        let missing = || match kind {
            EntryKind::File => {
                AppError::validation(format!("File does not exist: {}", path.display()))
            }
            EntryKind::Directory => {
                AppError::validation(format!("Directory does not exist: {}", path.display()))
            }
        };

        let meta = match tokio::fs::metadata(path).await {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(missing()),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Validation,
                    format!("Cannot access {}: {e}", path.display()),
                    e,
                ));
            }
        };

        let matches = match kind {
            EntryKind::File => meta.is_file(),
            EntryKind::Directory => meta.is_dir(),
        };
        if matches { Ok(()) } else { Err(missing()) }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use linkdrop_registry::MemoryEntryRegistry;

    #[derive(Debug, Default)]
    struct RecordingScheduler {
        armed: Mutex<Vec<(String, Duration)>>,
    }

    impl ExpiryScheduler for RecordingScheduler {
        fn arm(&self, token: &str, ttl: Duration) {
            self.armed.lock().unwrap().push((token.to_string(), ttl));
        }
    }

    struct Fixture {
        registry: Arc<MemoryEntryRegistry>,
        scheduler: Arc<RecordingScheduler>,
        service: ShareService,
        dir: tempfile::TempDir,
    }

    fn fixture() -> Fixture {
        let registry = Arc::new(MemoryEntryRegistry::new());
        let scheduler = Arc::new(RecordingScheduler::default());
        let service = ShareService::new(
            registry.clone(),
            scheduler.clone(),
            Arc::new(LinkService::default()),
            ShareConfig {
                public_base_url: "http://share.test:8080".to_string(),
                ..ShareConfig::default()
            },
        );
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        Fixture {
            registry,
            scheduler,
            service,
            dir,
        }
    }

    #[tokio::test]
    async fn test_register_file() {
        let f = fixture();
        let path = f.dir.path().join("notes.txt");

        let share = f
            .service
            .register(RegisterShare {
                kind: EntryKind::File,
                path: path.clone(),
                ttl_minutes: Some(5),
                max_downloads: Some(2),
            })
            .await
            .unwrap();

        let stored = f.registry.get(&share.entry.token).unwrap();
        assert_eq!(stored.kind, EntryKind::File);
        assert_eq!(stored.target_path, path);
        assert_eq!(stored.max_downloads, 2);
        assert_eq!(share.url, format!("http://share.test:8080/{}", share.entry.token));

        let armed = f.scheduler.armed.lock().unwrap();
        assert_eq!(armed.as_slice(), &[(share.entry.token.clone(), Duration::from_secs(300))]);
    }

    #[tokio::test]
    async fn test_register_directory_uses_defaults() {
        let f = fixture();

        let share = f
            .service
            .register(RegisterShare {
                kind: EntryKind::Directory,
                path: f.dir.path().to_path_buf(),
                ttl_minutes: None,
                max_downloads: None,
            })
            .await
            .unwrap();

        assert_eq!(share.entry.kind, EntryKind::Directory);
        assert_eq!(share.entry.ttl_minutes, 20);
        assert_eq!(share.entry.max_downloads, 1);
        assert_eq!(f.registry.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_path_is_rejected() {
        let f = fixture();

        let err = f
            .service
            .register(RegisterShare {
                kind: EntryKind::File,
                path: f.dir.path().join("absent.txt"),
                ttl_minutes: None,
                max_downloads: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("File does not exist"));
        assert!(f.registry.is_empty());
        assert!(f.scheduler.armed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_kind_mismatch_is_rejected() {
        let f = fixture();

        let err = f
            .service
            .register(RegisterShare {
                kind: EntryKind::Directory,
                path: f.dir.path().join("notes.txt"),
                ttl_minutes: None,
                max_downloads: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(f.registry.is_empty());
    }

    #[tokio::test]
    async fn test_bounds_are_enforced() {
        let f = fixture();
        let path = f.dir.path().join("notes.txt");

        for (ttl, max) in [(Some(0), Some(1)), (Some(1), Some(0)), (Some(u32::MAX), Some(1))] {
            let err = f
                .service
                .register(RegisterShare {
                    kind: EntryKind::File,
                    path: path.clone(),
                    ttl_minutes: ttl,
                    max_downloads: max,
                })
                .await
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }

        let err = f
            .service
            .register(RegisterShare {
                kind: EntryKind::File,
                path: PathBuf::from("relative/notes.txt"),
                ttl_minutes: None,
                max_downloads: None,
            })
            .await
            .unwrap_err();
        assert!(err.message.contains("absolute"));
        assert!(f.registry.is_empty());
    }
}
