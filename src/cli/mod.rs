//! CLI module
//!
//! Command-line interface for inspecting API payloads.
//!
//! # Commands
//!
//! - `inspect` - Decode one object and report field presence and extras
//! - `page` - Decode a list response and report on each item
//! - `resources` - List supported resource names

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{render_inspection, render_page, Runner};
