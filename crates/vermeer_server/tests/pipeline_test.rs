//! Tests for the fetch pipeline with substitutable service fakes.

use mockito::Server;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use vermeer_core::{MediaPayload, PostMetadata, StorageKey};
use vermeer_error::{FailureKind, StorageError, StorageErrorKind};
use vermeer_server::FetchPipeline;
use vermeer_social::{InstagramError, InstagramErrorKind, MediaFetcher, PostSource};
use vermeer_storage::{BlobStore, UploadResult};

/// Post source fake returning a canned result and counting calls.
struct FakeSource {
    result: Result<PostMetadata, InstagramErrorKind>,
    calls: AtomicUsize,
}

impl FakeSource {
    fn returning(metadata: PostMetadata) -> Self {
        Self {
            result: Ok(metadata),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(kind: InstagramErrorKind) -> Self {
        Self {
            result: Err(kind),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PostSource for FakeSource {
    async fn fetch_post(&self, _shortcode: &str) -> Result<PostMetadata, InstagramError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.result {
            Ok(metadata) => Ok(metadata.clone()),
            Err(kind) => Err(InstagramError::new(kind.clone())),
        }
    }
}

/// Blob store fake recording stored keys.
#[derive(Default)]
struct FakeStore {
    keys: Mutex<Vec<String>>,
}

impl FakeStore {
    fn stored_keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl BlobStore for FakeStore {
    async fn put(
        &self,
        key: &StorageKey,
        _payload: MediaPayload,
    ) -> Result<UploadResult, StorageError> {
        self.keys.lock().unwrap().push(key.to_string());
        Ok(UploadResult {
            public_url: format!("https://acct.blob.core.windows.net/instagram/{key}"),
        })
    }
}

/// Blob store fake that always reports a quota limit.
struct QuotaStore;

#[async_trait::async_trait]
impl BlobStore for QuotaStore {
    async fn put(
        &self,
        _key: &StorageKey,
        _payload: MediaPayload,
    ) -> Result<UploadResult, StorageError> {
        Err(StorageError::new(StorageErrorKind::QuotaExceeded(
            "account is full".to_string(),
        )))
    }
}

fn metadata_pointing_at(media_url: &str, is_video: bool) -> PostMetadata {
    PostMetadata {
        caption: "hello".to_string(),
        like_count: 10,
        comment_count: 2,
        is_video,
        media_source_url: media_url.to_string(),
    }
}

fn fetcher() -> MediaFetcher {
    MediaFetcher::new(Duration::from_secs(5), 1024 * 1024).unwrap()
}

#[tokio::test]
async fn successful_run_assembles_the_full_result() {
    let mut cdn = Server::new_async().await;
    cdn.mock("GET", "/img.jpg")
        .with_status(200)
        .with_body(vec![0xFFu8; 200])
        .create_async()
        .await;

    let source = Arc::new(FakeSource::returning(metadata_pointing_at(
        &format!("{}/img.jpg", cdn.url()),
        false,
    )));
    let store = Arc::new(FakeStore::default());
    let pipeline = FetchPipeline::new(source.clone(), fetcher(), store.clone());

    let fetched = pipeline
        .run("https://instagram.com/p/ABC123/?utm=1")
        .await
        .unwrap();

    assert_eq!(fetched.metadata.caption, "hello");
    assert_eq!(fetched.metadata.like_count, 10);
    assert_eq!(fetched.metadata.comment_count, 2);
    assert!(!fetched.metadata.is_video);

    let keys = store.stored_keys();
    assert_eq!(keys.len(), 1);
    assert!(keys[0].starts_with("ABC123_"));
    assert!(keys[0].ends_with(".jpg"));
    assert_eq!(
        fetched.media_url,
        format!("https://acct.blob.core.windows.net/instagram/{}", keys[0])
    );
}

#[tokio::test]
async fn video_posts_store_mp4_keys() {
    let mut cdn = Server::new_async().await;
    cdn.mock("GET", "/clip.mp4")
        .with_status(200)
        .with_body(vec![1u8; 64])
        .create_async()
        .await;

    let source = Arc::new(FakeSource::returning(metadata_pointing_at(
        &format!("{}/clip.mp4", cdn.url()),
        true,
    )));
    let store = Arc::new(FakeStore::default());
    let pipeline = FetchPipeline::new(source, fetcher(), store.clone());

    let fetched = pipeline
        .run("https://instagram.com/reel/VID999/")
        .await
        .unwrap();

    assert!(fetched.metadata.is_video);
    assert!(store.stored_keys()[0].ends_with(".mp4"));
}

#[tokio::test]
async fn invalid_url_fails_before_the_source_is_called() {
    let source = Arc::new(FakeSource::returning(metadata_pointing_at(
        "https://cdn.example/img.jpg",
        false,
    )));
    let store = Arc::new(FakeStore::default());
    let pipeline = FetchPipeline::new(source.clone(), fetcher(), store.clone());

    let err = pipeline.run("not a url").await.unwrap_err();

    assert_eq!(*err.kind(), FailureKind::InvalidUrl);
    assert_eq!(source.call_count(), 0);
    assert!(store.stored_keys().is_empty());
}

#[tokio::test]
async fn missing_post_never_touches_storage() {
    let source = Arc::new(FakeSource::failing(InstagramErrorKind::PostNotFound(
        "GONE".to_string(),
    )));
    let store = Arc::new(FakeStore::default());
    let pipeline = FetchPipeline::new(source, fetcher(), store.clone());

    let err = pipeline
        .run("https://instagram.com/p/GONE/")
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), FailureKind::PostNotFound);
    assert!(err.message().contains("not found"));
    assert!(store.stored_keys().is_empty());
}

#[tokio::test]
async fn failed_download_never_touches_storage() {
    let mut cdn = Server::new_async().await;
    cdn.mock("GET", "/img.jpg")
        .with_status(404)
        .create_async()
        .await;

    let source = Arc::new(FakeSource::returning(metadata_pointing_at(
        &format!("{}/img.jpg", cdn.url()),
        false,
    )));
    let store = Arc::new(FakeStore::default());
    let pipeline = FetchPipeline::new(source, fetcher(), store.clone());

    let err = pipeline
        .run("https://instagram.com/p/ABC123/")
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), FailureKind::MediaDownloadFailed);
    assert!(store.stored_keys().is_empty());
}

#[tokio::test]
async fn quota_failures_surface_as_quota_exceeded() {
    let mut cdn = Server::new_async().await;
    cdn.mock("GET", "/img.jpg")
        .with_status(200)
        .with_body(vec![0u8; 16])
        .create_async()
        .await;

    let source = Arc::new(FakeSource::returning(metadata_pointing_at(
        &format!("{}/img.jpg", cdn.url()),
        false,
    )));
    let pipeline = FetchPipeline::new(source, fetcher(), Arc::new(QuotaStore));

    let err = pipeline
        .run("https://instagram.com/p/ABC123/")
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), FailureKind::StorageQuotaExceeded);
}

#[tokio::test]
async fn repeated_runs_store_distinct_objects() {
    let mut cdn = Server::new_async().await;
    cdn.mock("GET", "/img.jpg")
        .with_status(200)
        .with_body(vec![0u8; 16])
        .expect(2)
        .create_async()
        .await;

    let source = Arc::new(FakeSource::returning(metadata_pointing_at(
        &format!("{}/img.jpg", cdn.url()),
        false,
    )));
    let store = Arc::new(FakeStore::default());
    let pipeline = FetchPipeline::new(source, fetcher(), store.clone());

    let first = pipeline
        .run("https://instagram.com/p/SAME/")
        .await
        .unwrap();
    let second = pipeline
        .run("https://instagram.com/p/SAME/")
        .await
        .unwrap();

    let keys = store.stored_keys();
    assert_eq!(keys.len(), 2);
    assert_ne!(keys[0], keys[1]);
    assert_ne!(first.media_url, second.media_url);
}
