//! Cursor-following pager
//!
//! Walks a list endpoint page by page, or item by item as a stream.
//! Forward-only; resumable from any cursor.

use super::page::Page;
use super::types::{ListParams, PageFetcher, PaginationConfig, PaginationState};
use crate::decode::{Decoder, Resource};
use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};
use std::marker::PhantomData;
use tracing::debug;

/// Cursor-based pager over a list endpoint
///
/// Each request carries the cursor returned by the previous page. The walk
/// ends when a page comes back with a null or empty `next_cursor`.
pub struct Pager<T, F> {
    fetcher: F,
    decoder: Decoder,
    limit: Option<u32>,
    max_pages: Option<u32>,
    state: PaginationState,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource, F: PageFetcher> Pager<T, F> {
    /// Create a pager starting at the first page
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            decoder: Decoder::default(),
            limit: None,
            max_pages: None,
            state: PaginationState::new(),
            _marker: PhantomData,
        }
    }

    /// Decode pages with this decoder
    #[must_use]
    pub fn with_decoder(mut self, decoder: Decoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Apply page size and page cap from config
    #[must_use]
    pub fn with_config(mut self, config: &PaginationConfig) -> Self {
        self.limit = config.limit;
        self.max_pages = config.max_pages;
        self
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Stop after this many pages
    #[must_use]
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Resume from a cursor returned by an earlier walk
    #[must_use]
    pub fn starting_at(mut self, cursor: impl Into<String>) -> Self {
        self.state = PaginationState::with_cursor(cursor);
        self
    }

    /// Progress so far
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Cursor the next request will carry
    pub fn cursor(&self) -> Option<&str> {
        self.state.cursor.as_deref()
    }

    /// Fetch and decode the next page, or `None` once the list is exhausted
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>> {
        if self.state.done {
            return Ok(None);
        }

        if let Some(max_pages) = self.max_pages {
            if self.state.pages >= max_pages {
                debug!(model = T::NAME, max_pages, "page cap reached");
                self.state.done = true;
                return Ok(None);
            }
        }

        let params = ListParams {
            cursor: self.state.cursor.clone(),
            limit: self.limit,
        };
        debug!(
            model = T::NAME,
            cursor = ?params.cursor,
            page = self.state.pages + 1,
            "fetching page"
        );

        let body = self.fetcher.fetch_page(&params).await?;
        let page = self.decoder.decode_page::<T>(&body)?;

        self.state.record_page(page.len() as u64);
        self.state.advance(page.next());
        Ok(Some(page))
    }

    /// Lazily yield every item across all remaining pages
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        stream::try_unfold(self, |mut pager| async move {
            Ok::<_, Error>(pager.next_page().await?.map(|page| (page.data, pager)))
        })
        .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, Error>)))
        .try_flatten()
    }

    /// Collect every item across all remaining pages
    pub async fn collect_all(self) -> Result<Vec<T>> {
        self.into_stream().try_collect().await
    }
}

impl<T, F> std::fmt::Debug for Pager<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("decoder", &self.decoder)
            .field("limit", &self.limit)
            .field("max_pages", &self.max_pages)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
