//! Vermeer server binary.
//!
//! Loads configuration, constructs the service object graph, attempts the
//! optional Instagram login, and serves the API.

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vermeer_error::{PipelineError, VermeerResult};
use vermeer_server::{AppState, FetchPipeline, ServerConfig, serve};
use vermeer_social::{
    DEFAULT_FETCH_TIMEOUT, DEFAULT_MAX_BYTES, InstagramClient, InstagramConfig, MediaFetcher,
};
use vermeer_storage::AzureBlobStore;

#[tokio::main]
async fn main() -> VermeerResult<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let mut instagram_config = InstagramConfig::new(&config.instagram_base_url);
    if let (Some(username), Some(password)) = (
        config.instagram_username.clone(),
        config.instagram_password.clone(),
    ) {
        instagram_config = instagram_config.with_credentials(username, password);
    }

    let mut instagram =
        InstagramClient::new(instagram_config).map_err(PipelineError::from)?;
    let auth_mode = instagram.login().await;
    info!(auth_mode = %auth_mode, "Instagram session ready");

    let fetcher = MediaFetcher::new(DEFAULT_FETCH_TIMEOUT, DEFAULT_MAX_BYTES)?;
    let store = AzureBlobStore::new(config.storage_connection.clone(), &config.container)?;
    info!(
        account = %config.storage_connection.account_name,
        container = %config.container,
        "Azure Blob Storage ready"
    );

    let pipeline = FetchPipeline::new(Arc::new(instagram), fetcher, Arc::new(store));
    let state = AppState::new(Arc::new(pipeline));

    serve(state, &format!("0.0.0.0:{}", config.port)).await?;

    Ok(())
}
