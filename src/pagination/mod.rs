//! Pagination module
//!
//! # Overview
//!
//! List endpoints return a `data` array and a `next_cursor` that is null on
//! the last page. [`Page`] wraps one decoded response; [`Pager`] follows
//! cursors across pages. Requests go through a caller-supplied
//! [`PageFetcher`], which owns transport, authentication and retries.

mod fetcher;
mod page;
mod pager;
mod types;

pub use fetcher::StaticPages;
pub use page::{Page, PageJson};
pub use pager::Pager;
pub use types::{
    ListParams, NextPage, PageFetcher, PaginationConfig, PaginationState, MAX_LIMIT,
};

#[cfg(test)]
mod tests;
