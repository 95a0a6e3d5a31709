//! Tests for the media fetcher against a mocked CDN.

use mockito::Server;
use std::time::Duration;
use vermeer_core::MediaKind;
use vermeer_error::FetchErrorKind;
use vermeer_social::MediaFetcher;

fn fetcher() -> MediaFetcher {
    MediaFetcher::new(Duration::from_secs(5), 1024).unwrap()
}

#[tokio::test]
async fn downloads_payload_with_declared_kind() {
    let mut server = Server::new_async().await;
    let body = vec![0xFFu8; 200];
    server
        .mock("GET", "/img.jpg")
        .with_status(200)
        .with_header("content-type", "image/jpeg")
        .with_body(body.clone())
        .create_async()
        .await;

    let payload = fetcher()
        .download(&format!("{}/img.jpg", server.url()), MediaKind::Image)
        .await
        .unwrap();

    assert_eq!(payload.bytes, body);
    assert_eq!(payload.kind, MediaKind::Image);
    assert_eq!(payload.len(), 200);
}

#[tokio::test]
async fn kind_comes_from_upstream_not_from_bytes() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/clip.mp4")
        .with_status(200)
        // Wrong content type on the wire; the declared kind wins.
        .with_header("content-type", "application/octet-stream")
        .with_body("not really video bytes")
        .create_async()
        .await;

    let payload = fetcher()
        .download(&format!("{}/clip.mp4", server.url()), MediaKind::Video)
        .await
        .unwrap();

    assert_eq!(payload.kind, MediaKind::Video);
    assert_eq!(payload.kind.mime_type(), "video/mp4");
}

#[tokio::test]
async fn non_success_status_fails_the_download() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/img.jpg")
        .with_status(404)
        .create_async()
        .await;

    let err = fetcher()
        .download(&format!("{}/img.jpg", server.url()), MediaKind::Image)
        .await
        .unwrap_err();

    assert!(matches!(err.kind, FetchErrorKind::DownloadFailed(_)));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/huge.jpg")
        .with_status(200)
        .with_body(vec![0u8; 4096])
        .create_async()
        .await;

    let err = fetcher()
        .download(&format!("{}/huge.jpg", server.url()), MediaKind::Image)
        .await
        .unwrap_err();

    assert!(matches!(err.kind, FetchErrorKind::TooLarge(_)));
}

#[tokio::test]
async fn unreachable_host_fails_the_download() {
    // Nothing listens here.
    let err = fetcher()
        .download("http://127.0.0.1:1/img.jpg", MediaKind::Image)
        .await
        .unwrap_err();

    assert!(matches!(err.kind, FetchErrorKind::DownloadFailed(_)));
}
