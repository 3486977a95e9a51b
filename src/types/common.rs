//! Shapes shared by every resource.

use serde::{Deserialize, Serialize};

/// Free-form key/value data attached to most resources.
///
/// Keys are arbitrary strings chosen by the integrator; values are untyped
/// JSON.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// One page of a list endpoint.
///
/// `data` keeps the provider's order. `next_cursor` is an opaque token:
/// pass it back verbatim in [`PaginationParams::cursor`] to fetch the
/// following page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Items on this page, in provider order
    pub data: Vec<T>,
    /// Whether more items exist after this page
    pub has_more: bool,
    /// Continuation token, `None` on the last page
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Cursor pagination shared by every list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaginationParams {
    /// Cursor returned by a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Maximum number of items to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Creates empty pagination (first page, provider default size).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cursor: None,
            limit: None,
        }
    }

    /// Continues from a cursor returned by an earlier page.
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Limits the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
