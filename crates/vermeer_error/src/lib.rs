//! Error types for the Vermeer media relay service.
//!
//! This crate provides the foundation error types used throughout the Vermeer
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The request pipeline collapses every stage failure into a [`PipelineError`]
//! carrying a [`FailureKind`], which the HTTP layer pattern-matches to choose
//! a status code and caller-visible message.
//!
//! # Examples
//!
//! ```
//! use vermeer_error::{VermeerResult, ConfigError};
//!
//! fn load_setting() -> VermeerResult<String> {
//!     Err(ConfigError::new("PORT is not a number"))?
//! }
//!
//! match load_setting() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod fetch;
mod pipeline;
mod resolver;
mod server;
mod storage;

pub use config::ConfigError;
pub use error::{VermeerError, VermeerErrorKind, VermeerResult};
pub use fetch::{FetchError, FetchErrorKind};
pub use pipeline::{FailureKind, PipelineError};
pub use resolver::{ResolverError, ResolverErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
