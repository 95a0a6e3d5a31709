//! HTTP surface and fetch pipeline for the Vermeer media relay service.
//!
//! Wires the domain crates together: one [`FetchPipeline`] built from
//! injected service objects, exposed over a thin axum router. The routing
//! layer only dispatches; every decision lives in the pipeline and the
//! crates below it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod pipeline;
mod request;
mod response;
mod server;

pub use config::ServerConfig;
pub use pipeline::{FetchPipeline, FetchedPost};
pub use request::FetchPostRequest;
pub use response::{ErrorResponse, FetchPostResponse, status_for};
pub use server::{AppState, build_app, serve};
