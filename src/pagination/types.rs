//! Pagination types and traits
//!
//! Defines the list request parameters, the fetcher seam and the
//! bookkeeping shared by pages and pagers.

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Largest page size the API accepts
pub const MAX_LIMIT: u32 = 100;

/// Result of inspecting a page's cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available after this cursor
    Continue {
        /// Opaque cursor for the next request
        cursor: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Build from a raw `next_cursor` value; null and empty both end the list
    pub fn from_cursor(cursor: Option<&str>) -> Self {
        match cursor {
            Some(cursor) if !cursor.is_empty() => Self::Continue {
                cursor: cursor.to_string(),
            },
            _ => Self::Done,
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }

    /// The cursor to continue from
    pub fn cursor(&self) -> Option<&str> {
        match self {
            Self::Continue { cursor } => Some(cursor),
            Self::Done => None,
        }
    }
}

/// Parameters of one list request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    /// Cursor returned by the previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListParams {
    /// Parameters for the first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cursor
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query string pairs for the list request
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Configuration for pagination behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size sent with every list request
    pub limit: Option<u32>,
    /// Stop after this many pages
    pub max_pages: Option<u32>,
}

impl PaginationConfig {
    /// Check the values against what the API accepts
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit {
            if limit == 0 || limit > MAX_LIMIT {
                return Err(Error::invalid_config(
                    "pagination.limit",
                    format!("must be between 1 and {MAX_LIMIT}, got {limit}"),
                ));
            }
        }
        if self.max_pages == Some(0) {
            return Err(Error::invalid_config(
                "pagination.max_pages",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Pages fetched so far
    pub pages: u32,
    /// Items fetched so far
    pub total_fetched: u64,
    /// Cursor for the next request
    pub cursor: Option<String>,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state that resumes from a cursor
    pub fn with_cursor(cursor: impl Into<String>) -> Self {
        Self {
            cursor: Some(cursor.into()),
            ..Default::default()
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.cursor = None;
        self.done = true;
    }

    /// Record a fetched page
    pub fn record_page(&mut self, items: u64) {
        self.pages += 1;
        self.total_fetched += items;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }

    /// Apply the outcome of a page
    pub fn advance(&mut self, next: NextPage) {
        match next {
            NextPage::Continue { cursor } => self.set_cursor(cursor),
            NextPage::Done => self.mark_done(),
        }
    }
}

/// Issues list requests on behalf of pages and pagers.
///
/// Implementations own transport, authentication and retries; they return
/// the raw response body of the list endpoint.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the list page described by `params`
    async fn fetch_page(&self, params: &ListParams) -> Result<Vec<u8>>;
}

#[async_trait]
impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    async fn fetch_page(&self, params: &ListParams) -> Result<Vec<u8>> {
        (**self).fetch_page(params).await
    }
}

#[async_trait]
impl<F: PageFetcher + ?Sized> PageFetcher for Arc<F> {
    async fn fetch_page(&self, params: &ListParams) -> Result<Vec<u8>> {
        (**self).fetch_page(params).await
    }
}
