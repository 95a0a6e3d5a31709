//! End-to-end tests of the HTTP surface with faked services.

use mockito::Server;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use vermeer_core::{MediaPayload, PostMetadata, StorageKey};
use vermeer_error::StorageError;
use vermeer_server::{AppState, FetchPipeline, build_app};
use vermeer_social::{InstagramError, InstagramErrorKind, MediaFetcher, PostSource};
use vermeer_storage::{BlobStore, UploadResult};

/// Post source fake returning a canned result.
struct FakeSource {
    result: Result<PostMetadata, InstagramErrorKind>,
}

#[async_trait::async_trait]
impl PostSource for FakeSource {
    async fn fetch_post(&self, _shortcode: &str) -> Result<PostMetadata, InstagramError> {
        match &self.result {
            Ok(metadata) => Ok(metadata.clone()),
            Err(kind) => Err(InstagramError::new(kind.clone())),
        }
    }
}

/// Blob store fake echoing a public URL for the key.
struct FakeStore;

#[async_trait::async_trait]
impl BlobStore for FakeStore {
    async fn put(
        &self,
        key: &StorageKey,
        _payload: MediaPayload,
    ) -> Result<UploadResult, StorageError> {
        Ok(UploadResult {
            public_url: format!("https://acct.blob.core.windows.net/instagram/{key}"),
        })
    }
}

/// Bind the app on an ephemeral port and return its origin.
async fn spawn_app(source: FakeSource) -> String {
    let fetcher = MediaFetcher::new(Duration::from_secs(5), 1024 * 1024).unwrap();
    let pipeline = FetchPipeline::new(Arc::new(source), fetcher, Arc::new(FakeStore));
    let state = AppState::new(Arc::new(pipeline));
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn fetch_post_returns_the_success_envelope() {
    let mut cdn = Server::new_async().await;
    cdn.mock("GET", "/img.jpg")
        .with_status(200)
        .with_body(vec![0xFFu8; 200])
        .create_async()
        .await;

    let origin = spawn_app(FakeSource {
        result: Ok(PostMetadata {
            caption: "hello".to_string(),
            like_count: 10,
            comment_count: 2,
            is_video: false,
            media_source_url: format!("{}/img.jpg", cdn.url()),
        }),
    })
    .await;

    let response = reqwest::Client::new()
        .post(format!("{origin}/api/fetch-post"))
        .json(&json!({"url": "https://instagram.com/p/ABC123/?utm=1"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["caption"], "hello");
    assert_eq!(body["likes"], 10);
    assert_eq!(body["comments"], 2);
    assert_eq!(body["is_video"], false);

    let media_url = body["media_url"].as_str().unwrap();
    assert!(media_url.starts_with("https://acct.blob.core.windows.net/instagram/ABC123_"));
    assert!(media_url.ends_with(".jpg"));
}

#[tokio::test]
async fn invalid_url_is_a_400_with_the_fixed_message() {
    let origin = spawn_app(FakeSource {
        result: Err(InstagramErrorKind::Unavailable(
            "should never be called".to_string(),
        )),
    })
    .await;

    let response = reqwest::Client::new()
        .post(format!("{origin}/api/fetch-post"))
        .json(&json!({"url": "not a url"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "URL is invalid");
}

#[tokio::test]
async fn missing_post_is_a_500_naming_the_stage() {
    let origin = spawn_app(FakeSource {
        result: Err(InstagramErrorKind::PostNotFound("GONE".to_string())),
    })
    .await;

    let response = reqwest::Client::new()
        .post(format!("{origin}/api/fetch-post"))
        .json(&json!({"url": "https://instagram.com/p/GONE/"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("not found"));
}

#[tokio::test]
async fn private_post_is_a_500() {
    let origin = spawn_app(FakeSource {
        result: Err(InstagramErrorKind::PrivatePost("SECRET".to_string())),
    })
    .await;

    let response = reqwest::Client::new()
        .post(format!("{origin}/api/fetch-post"))
        .json(&json!({"url": "https://instagram.com/p/SECRET/"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("private"));
}

#[tokio::test]
async fn hello_endpoint_answers() {
    let origin = spawn_app(FakeSource {
        result: Err(InstagramErrorKind::Unavailable("unused".to_string())),
    })
    .await;

    let response = reqwest::Client::new()
        .get(format!("{origin}/api/hello"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Hello World");
}
