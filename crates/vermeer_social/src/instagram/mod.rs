//! Instagram provider integration.
//!
//! Speaks the Instagram web API: an optional session login followed by
//! per-shortcode post-info lookups. Login failure is recovered locally by
//! degrading to anonymous access; every other failure maps onto the
//! pipeline's failure taxonomy.

mod client;
mod config;
mod error;
mod models;

pub use client::{InstagramClient, SessionMode};
pub use config::{DEFAULT_BASE_URL, InstagramConfig};
pub use error::{InstagramError, InstagramErrorKind, InstagramResult};
