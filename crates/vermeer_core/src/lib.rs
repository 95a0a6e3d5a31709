//! Core data types for the Vermeer media relay service.
//!
//! This crate provides the request-scoped domain model shared across the
//! Vermeer workspace, plus the two pure stages of the fetch pipeline: the
//! URL resolver and the asset namer. Nothing here performs I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod naming;
mod post;
mod resolver;

pub use media::{MediaKind, MediaPayload};
pub use naming::StorageKey;
pub use post::{PostMetadata, PostReference};
pub use resolver::ShortcodeResolver;
