//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::decode::{Decoder, FieldState, Inspection, PageInspection, RequiredFields};
use crate::error::{Result, ResultExt};
use crate::models;
use std::fmt::Write as _;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Inspect { resource, file } => {
                let body = read_input(file).await?;
                let report = models::inspect(resource, &body, &self.decoder()?)?;
                println!("{}", self.render(&report, render_inspection)?);
                Ok(())
            }
            Commands::Page { resource, file } => {
                let body = read_input(file).await?;
                let report = models::inspect_page(resource, &body, &self.decoder()?)?;
                println!("{}", self.render(&report, render_page)?);
                Ok(())
            }
            Commands::Resources => {
                for name in models::RESOURCES {
                    println!("{name}");
                }
                Ok(())
            }
        }
    }

    /// Build the decoder from the config file and flags
    fn decoder(&self) -> Result<Decoder> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        if self.cli.strict {
            config.decoder.required_fields = RequiredFields::Strict;
        }
        debug!(config = ?config.decoder, "decoder configured");
        Ok(config.decoder())
    }

    fn render<T: serde::Serialize>(&self, report: &T, pretty: fn(&T) -> String) -> Result<String> {
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Pretty => Ok(pretty(report)),
        }
    }
}

/// Read a payload from a file, or stdin for `-`
async fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut body = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut body)
            .await
            .context("Failed to read payload from stdin")?;
        return Ok(body);
    }
    tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            crate::Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            e.into()
        }
    })
}

/// Human-readable report for one decoded object
pub fn render_inspection(report: &Inspection) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.model);

    for field in &report.fields {
        let state = match field.state {
            FieldState::Present => "present",
            FieldState::Null => "null",
            FieldState::Missing => "missing",
        };
        let detail = match (&field.raw, field.state) {
            (Some(raw), FieldState::Present) => raw.to_string(),
            (_, FieldState::Missing) if field.required => "(required)".to_string(),
            _ => String::new(),
        };
        let line = format!("  {:<32} {:<8} {}", field.key, state, detail);
        let _ = writeln!(out, "{}", line.trim_end());
    }

    if !report.extras.is_empty() {
        let _ = writeln!(out, "extras:");
        for (key, raw) in &report.extras {
            let _ = writeln!(out, "  {key} = {raw}");
        }
    }

    let missing = report.missing_required();
    if !missing.is_empty() {
        let _ = writeln!(out, "missing required: {}", missing.join(", "));
    }

    out.trim_end().to_string()
}

/// Human-readable report for a decoded list response
pub fn render_page(report: &PageInspection) -> String {
    let mut out = String::new();
    for (index, item) in report.items.iter().enumerate() {
        let _ = writeln!(out, "[{index}] {}\n", render_inspection(item));
    }
    if !report.extras.is_empty() {
        let _ = writeln!(out, "envelope extras:");
        for (key, raw) in &report.extras {
            let _ = writeln!(out, "  {key} = {raw}");
        }
    }
    match &report.next_cursor {
        Some(cursor) => {
            let _ = writeln!(out, "next_cursor: {cursor}");
        }
        None => {
            let _ = writeln!(out, "next_cursor: none (last page)");
        }
    }
    out.trim_end().to_string()
}
