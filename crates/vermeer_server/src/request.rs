//! Request body types.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/fetch-post`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchPostRequest {
    /// The post URL to fetch and re-host
    pub url: String,
}
