//! Decode entry points
//!
//! Every model decodes through [`Decoder::decode_str`], which parses the
//! object once and lets the model's field table pull its fields out.

use super::reader::ObjectReader;
use super::types::{DecoderConfig, Resource};
use crate::error::{Error, Result};
use crate::pagination::Page;
use serde::{Deserialize, Deserializer};

/// Metadata-aware JSON decoder
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with the given configuration
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Create a decoder that rejects payloads missing required keys
    pub fn strict() -> Self {
        Self::new(DecoderConfig::strict())
    }

    /// The active configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a single object payload
    pub fn decode<T: Resource>(&self, bytes: &[u8]) -> Result<T> {
        self.decode_str(utf8(bytes)?)
    }

    /// Decode a single object payload from text
    pub fn decode_str<T: Resource>(&self, json: &str) -> Result<T> {
        let reader = ObjectReader::parse(T::NAME, json, &self.config)?;
        T::from_reader(reader)
    }

    /// Decode a list response (`data` plus `next_cursor`)
    pub fn decode_page<T: Resource>(&self, bytes: &[u8]) -> Result<Page<T>> {
        self.decode_page_str(utf8(bytes)?)
    }

    /// Decode a list response from text
    pub fn decode_page_str<T: Resource>(&self, json: &str) -> Result<Page<T>> {
        let reader = ObjectReader::parse("Page", json, &self.config)?;
        Page::from_reader(reader, self)
    }
}

/// Decode a single object payload with the default configuration
pub fn decode<T: Resource>(bytes: &[u8]) -> Result<T> {
    Decoder::default().decode(bytes)
}

/// Decode a list response with the default configuration
pub fn decode_page<T: Resource>(bytes: &[u8]) -> Result<Page<T>> {
    Decoder::default().decode_page(bytes)
}

/// `serde::Deserialize` body shared by all models.
///
/// Nested models decode through here with the default configuration.
/// Only works with `serde_json` deserializers.
pub fn deserialize_resource<'de, T, D>(deserializer: D) -> std::result::Result<T, D::Error>
where
    T: Resource,
    D: Deserializer<'de>,
{
    let raw = super::types::RawJson::deserialize(deserializer)?;
    Decoder::default()
        .decode_str(raw.as_str())
        .map_err(serde::de::Error::custom)
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| Error::malformed(format!("invalid UTF-8: {e}")))
}
