//! Object reader walked by every model's decode entry point
//!
//! The reader parses a JSON object once into key → raw value entries.
//! Each declared field takes its entry out; whatever remains at the end
//! becomes the extras map.

use super::types::{DecoderConfig, Extras, Field, RawJson};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, trace};

/// A parsed JSON object being consumed field by field
#[derive(Debug)]
pub struct ObjectReader<'a> {
    model: &'static str,
    raw: &'a str,
    entries: Extras,
    missing_required: Vec<&'static str>,
    config: &'a DecoderConfig,
}

impl<'a> ObjectReader<'a> {
    /// Parse `raw` as a JSON object destined for `model`
    pub fn parse(model: &'static str, raw: &'a str, config: &'a DecoderConfig) -> Result<Self> {
        let entries: Extras = serde_json::from_str(raw).map_err(|e| match e.classify() {
            Category::Data => Error::NotAnObject {
                model: model.to_string(),
                found: json_kind(raw).to_string(),
            },
            _ => Error::malformed(e.to_string()),
        })?;

        Ok(Self {
            model,
            raw,
            entries,
            missing_required: Vec::new(),
            config,
        })
    }

    /// Take a declared field out of the object.
    ///
    /// Absent keys and `null` values decode to `T::default()`; the returned
    /// `Field` tells them apart.
    pub fn field<T>(&mut self, key: &'static str, required: bool) -> Result<(T, Field)>
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.entries.remove(key) else {
            trace!(model = self.model, field = key, "field missing");
            if required {
                self.missing_required.push(key);
            }
            return Ok((T::default(), Field::missing()));
        };

        if raw.is_null() {
            return Ok((T::default(), Field::from_raw(raw)));
        }

        let value = raw
            .parse::<T>()
            .map_err(|e| Error::field_type(self.model, key, e.to_string()))?;
        Ok((value, Field::from_raw(raw)))
    }

    /// Required keys found absent so far
    pub fn missing_required(&self) -> &[&'static str] {
        &self.missing_required
    }

    /// Finish decoding, yielding the full payload and the extras map.
    ///
    /// Fails in strict mode if any required key was absent.
    pub fn finish(self) -> Result<(String, Extras)> {
        if self.config.is_strict() {
            if let Some(field) = self.missing_required.first() {
                return Err(Error::missing_field(self.model, *field));
            }
        }

        if self.config.log_extras && !self.entries.is_empty() {
            debug!(
                model = self.model,
                keys = ?self.entries.keys().collect::<Vec<_>>(),
                "payload has unrecognized fields"
            );
        }

        Ok((self.raw.to_string(), self.entries))
    }
}

/// Name of the JSON type a (syntactically valid) text starts with
fn json_kind(raw: &str) -> &'static str {
    match raw.trim_start().as_bytes().first() {
        Some(b'[') => "array",
        Some(b'"') => "string",
        Some(b't' | b'f') => "boolean",
        Some(b'n') => "null",
        Some(b'{') => "object",
        _ => "number",
    }
}
