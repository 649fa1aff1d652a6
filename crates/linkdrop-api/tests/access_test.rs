//! Integration tests for public token access.

mod helpers;

use std::time::Duration;

use axum::http::StatusCode;
use linkdrop_core::traits::EntryRegistry;

#[tokio::test]
async fn test_file_download_quota() {
    let app = helpers::TestApp::new();
    let token = app.share("file", "disk1/docs/report.txt", 5, 2).await;
    let uri = format!("/{token}");

    for _ in 0..2 {
        let response = app.request("GET", &uri, None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.bytes, b"quarterly numbers");
        assert_eq!(response.header("content-type"), Some("text/plain"));
        assert_eq!(response.header("content-length"), Some("17"));
        assert!(
            response
                .header("content-disposition")
                .unwrap()
                .starts_with("attachment; filename=\"report.txt\"")
        );
    }

    let response = app.request("GET", &uri, None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.json()["error"], "FORBIDDEN");

    let response = app.request("GET", &uri, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_token() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/NoSuchToken", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/NoSuchToken/report.txt", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_directory_listing_is_free() {
    let app = helpers::TestApp::new();
    let token = app.share("directory", "disk1/docs", 5, 1).await;

    for _ in 0..3 {
        let response = app.request("GET", &format!("/{token}"), None).await;
        assert_eq!(response.status, StatusCode::OK);
        let page = response.text();
        assert!(page.contains(&format!("href=\"/{token}/notes.md\"")));
        assert!(page.contains(&format!("href=\"/{token}/report.txt\"")));
        assert!(page.contains(&format!("href=\"/{token}/sub\"")));
        assert!(page.find("notes.md").unwrap() < page.find("report.txt").unwrap());
    }

    assert_eq!(app.registry.get(&token).unwrap().download_count, 0);
}

#[tokio::test]
async fn test_directory_shared_quota() {
    let app = helpers::TestApp::new();
    let token = app.share("directory", "disk1/docs", 5, 2).await;

    let first = app.request("GET", &format!("/{token}/report.txt"), None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.bytes, b"quarterly numbers");

    let last = app.request("GET", &format!("/{token}/sub/deep.txt"), None).await;
    assert_eq!(last.status, StatusCode::OK);
    assert_eq!(last.bytes, b"deep");

    let after = app.request("GET", &format!("/{token}/notes.md"), None).await;
    assert_eq!(after.status, StatusCode::NOT_FOUND);
    let listing = app.request("GET", &format!("/{token}"), None).await;
    assert_eq!(listing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_directory_child_misses_do_not_count() {
    let app = helpers::TestApp::new();
    let token = app.share("directory", "disk1/docs", 5, 1).await;

    for sub in ["missing.txt", "sub", "..%2F..%2Fsecret.txt", "sub/..%2F..%2F..%2Fsecret.txt"] {
        let response = app.request("GET", &format!("/{token}/{sub}"), None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{sub} was served");
    }
    assert_eq!(app.registry.get(&token).unwrap().download_count, 0);

    let response = app.request("GET", &format!("/{token}/notes.md"), None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_file_share_has_no_children() {
    let app = helpers::TestApp::new();
    let token = app.share("file", "disk1/docs/report.txt", 5, 3).await;

    let response = app.request("GET", &format!("/{token}/report.txt"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.registry.get(&token).unwrap().download_count, 0);
}

#[tokio::test(start_paused = true)]
async fn test_entry_expires_after_ttl() {
    let app = helpers::TestApp::new();
    let token = app.share("directory", "disk1/media", 1, 5).await;

    let health = app.request("GET", "/health", None).await;
    assert_eq!(health.json()["active_entries"], 1);

    tokio::time::sleep(Duration::from_secs(61)).await;

    assert!(!app.registry.contains(&token));
    let response = app.request("GET", &format!("/{token}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
