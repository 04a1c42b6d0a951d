// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Increase API response models
//!
//! Typed models for Increase API payloads, decoded through one shared
//! metadata-aware JSON decoder.
//!
//! ## Features
//!
//! - **Response Models**: Accounts, transfers, transactions, cards, entities and more
//! - **Metadata Sidecar**: Per-field presence and raw bytes on every decoded value
//! - **Extras**: Unrecognized keys are kept, never dropped
//! - **Open Enumerations**: Unknown enum values decode into `Unknown(String)`
//! - **Cursor Pagination**: Page wrapper and a lazy item stream
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use increase::decode::{decode, ResourceJson};
//! use increase::models::AccountBalance;
//!
//! let body = br#"{"id":"acc_1","current_balance":500,"unexpected_field":"x"}"#;
//! let balance: AccountBalance = decode(body)?;
//!
//! assert_eq!(balance.current_balance, 500);
//! assert!(balance.json.available_balance.is_missing());
//! assert_eq!(balance.json.extras()["unexpected_field"], "\"x\"");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  bytes ──► Decoder ──► ObjectReader ──► Model + ModelJson    │
//! │                           │                 (fields, raw,    │
//! │                           │                  extras)         │
//! └───────────────────────────┼──────────────────────────────────┘
//!                             │
//! ┌──────────────┬────────────┴───────┬─────────────────────────┐
//! │    Models    │     Pagination     │         Config          │
//! ├──────────────┼────────────────────┼─────────────────────────┤
//! │ resource!    │ Page<T>            │ DecoderConfig           │
//! │ open_enum!   │ Pager<T, F>        │ PaginationConfig        │
//! │ Inspection   │ PageFetcher        │ YAML / JSON files       │
//! └──────────────┴────────────────────┴─────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

#[macro_use]
mod macros;

/// Error types for the crate
pub mod error;

/// Common types and shared enumerations
pub mod types;

/// Metadata-aware JSON decoding
pub mod decode;

/// Cursor pagination
pub mod pagination;

/// Response models
pub mod models;

/// Configuration loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::ClientConfig;
pub use decode::{decode, decode_page, Decoder, DecoderConfig, Field, Resource, ResourceJson};
pub use pagination::{Page, PageFetcher, Pager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
