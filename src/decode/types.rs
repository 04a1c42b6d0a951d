//! Decoder types and traits
//!
//! Defines the metadata sidecar building blocks and the `Resource` trait
//! every response model implements.

use super::reader::ObjectReader;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Raw JSON
// ============================================================================

/// An unparsed JSON value, kept byte-for-byte as it appeared in the payload
#[derive(Clone)]
pub struct RawJson(Box<RawValue>);

impl RawJson {
    /// Wrap a JSON text, validating its syntax
    pub fn from_string(json: impl Into<String>) -> serde_json::Result<Self> {
        RawValue::from_string(json.into()).map(Self)
    }

    /// The raw JSON text
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    /// The raw JSON bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.get().as_bytes()
    }

    /// Whether the value is the JSON literal `null`
    pub fn is_null(&self) -> bool {
        self.as_str() == "null"
    }

    /// Parse the raw value into a concrete type
    pub fn parse<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(self.as_str())
    }
}

impl PartialEq for RawJson {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for RawJson {}

impl PartialEq<str> for RawJson {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for RawJson {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for RawJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawJson({})", self.as_str())
    }
}

impl fmt::Display for RawJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RawJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Box::<RawValue>::deserialize(deserializer).map(Self)
    }
}

/// Undeclared keys found in a payload, mapped to their raw values
pub type Extras = BTreeMap<String, RawJson>;

// ============================================================================
// Field Metadata
// ============================================================================

/// How a declared field appeared in the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    /// The key was absent
    #[default]
    Missing,
    /// The key was present with a `null` value
    Null,
    /// The key was present with a non-null value
    Present,
}

/// Per-field decode metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    state: FieldState,
    raw: Option<RawJson>,
}

impl Field {
    /// Metadata for an absent key
    pub fn missing() -> Self {
        Self::default()
    }

    /// Metadata for a key present with the given raw value
    pub fn from_raw(raw: RawJson) -> Self {
        let state = if raw.is_null() {
            FieldState::Null
        } else {
            FieldState::Present
        };
        Self {
            state,
            raw: Some(raw),
        }
    }

    /// How the field appeared
    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Whether the key existed in the payload, `null` included
    pub fn is_present(&self) -> bool {
        self.state != FieldState::Missing
    }

    /// Whether the key was absent
    pub fn is_missing(&self) -> bool {
        self.state == FieldState::Missing
    }

    /// Whether the key was present with a `null` value
    pub fn is_null(&self) -> bool {
        self.state == FieldState::Null
    }

    /// The raw value, if the key was present
    pub fn raw(&self) -> Option<&RawJson> {
        self.raw.as_ref()
    }
}

/// Descriptor for one declared field of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key
    pub key: &'static str,
    /// Whether the API always sends this key
    pub required: bool,
}

impl FieldSpec {
    /// Create a field descriptor
    pub const fn new(key: &'static str, required: bool) -> Self {
        Self { key, required }
    }
}

// ============================================================================
// Decoder Configuration
// ============================================================================

/// What to do when a required key is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredFields {
    /// Decode anyway; absence is visible through the field metadata
    #[default]
    Lenient,
    /// Fail with `Error::MissingField`
    Strict,
}

/// Configuration for decoding payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Handling of absent required keys
    pub required_fields: RequiredFields,
    /// Emit a debug event when a payload carries unrecognized keys
    pub log_extras: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            required_fields: RequiredFields::Lenient,
            log_extras: true,
        }
    }
}

impl DecoderConfig {
    /// Lenient config (the default)
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Config that rejects payloads missing required keys
    pub fn strict() -> Self {
        Self {
            required_fields: RequiredFields::Strict,
            ..Default::default()
        }
    }

    /// Set whether unrecognized keys are logged
    #[must_use]
    pub fn with_log_extras(mut self, log_extras: bool) -> Self {
        self.log_extras = log_extras;
        self
    }

    /// Whether absent required keys are rejected
    pub fn is_strict(&self) -> bool {
        self.required_fields == RequiredFields::Strict
    }
}

// ============================================================================
// Resource Traits
// ============================================================================

/// A response model decoded through the shared metadata-aware decoder
pub trait Resource: Sized + Default {
    /// The metadata sidecar type
    type Json: ResourceJson;

    /// Model name, used in error messages
    const NAME: &'static str;

    /// Declared fields, in declaration order
    const FIELDS: &'static [FieldSpec];

    /// Build the model from a parsed object, consuming the reader
    fn from_reader(reader: ObjectReader<'_>) -> Result<Self>;

    /// The metadata sidecar
    fn json(&self) -> &Self::Json;
}

/// Read access to a metadata sidecar
pub trait ResourceJson {
    /// Metadata for a declared field, by JSON key
    fn field(&self, key: &str) -> Option<&Field>;

    /// The complete payload, as received
    fn raw(&self) -> &str;

    /// Keys present in the payload with no declared field
    fn extras(&self) -> &Extras;
}
