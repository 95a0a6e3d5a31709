//! Instagram integration for the Vermeer media relay service.
//!
//! This crate owns the two network stages that face the upstream provider:
//!
//! - [`InstagramClient`] resolves a shortcode to [`vermeer_core::PostMetadata`],
//!   optionally authenticating first and degrading to anonymous access when
//!   login fails (public posts remain fetchable without a session).
//! - [`MediaFetcher`] downloads the binary payload the metadata points at,
//!   under a bounded timeout and size limit.
//!
//! The [`PostSource`] trait is the seam the pipeline depends on, so tests can
//! substitute a fake provider without touching the network.

#![warn(missing_docs)]

mod fetch;
mod instagram;
mod source;

pub use fetch::{DEFAULT_FETCH_TIMEOUT, DEFAULT_MAX_BYTES, MediaFetcher};
pub use instagram::{
    DEFAULT_BASE_URL, InstagramClient, InstagramConfig, InstagramError, InstagramErrorKind,
    InstagramResult, SessionMode,
};
pub use source::PostSource;
