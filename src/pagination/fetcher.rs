//! In-memory page fetcher
//!
//! Serves recorded list response bodies keyed by cursor. Handy for replaying
//! captured API responses and for tests.

use super::types::{ListParams, PageFetcher};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Fetcher backed by recorded response bodies
#[derive(Debug, Default)]
pub struct StaticPages {
    pages: HashMap<Option<String>, Vec<u8>>,
    requests: Mutex<Vec<ListParams>>,
}

impl StaticPages {
    /// Create an empty fetcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Body served for the first request (no cursor)
    #[must_use]
    pub fn first(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(None, body.into());
        self
    }

    /// Body served for a request carrying `cursor`
    #[must_use]
    pub fn after(mut self, cursor: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(Some(cursor.into()), body.into());
        self
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<ListParams> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PageFetcher for StaticPages {
    async fn fetch_page(&self, params: &ListParams) -> Result<Vec<u8>> {
        self.requests
            .lock()
            .map_err(|_| Error::fetch("request log poisoned"))?
            .push(params.clone());

        self.pages.get(&params.cursor).cloned().ok_or_else(|| {
            Error::fetch(format!(
                "no page recorded for cursor {}",
                params.cursor.as_deref().unwrap_or("<first>")
            ))
        })
    }
}
