//! Type-erased view of a decoded model and its metadata
//!
//! Used by the inspection CLI to report presence and extras for any
//! resource without knowing its concrete type.

use super::types::{Extras, FieldState, RawJson, Resource, ResourceJson};
use crate::error::Result;
use crate::pagination::Page;
use serde::Serialize;

/// Decode report for one declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    /// JSON key
    pub key: &'static str,
    /// Whether the API always sends this key
    pub required: bool,
    /// How the key appeared in the payload
    pub state: FieldState,
    /// Raw value, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawJson>,
}

/// Decode report for one model instance
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    /// Model name
    pub model: &'static str,
    /// Per-field reports, in declaration order
    pub fields: Vec<FieldReport>,
    /// Unrecognized keys
    pub extras: Extras,
    /// The typed value, re-encoded
    pub value: serde_json::Value,
}

impl Inspection {
    /// Build a report from a decoded model
    pub fn of<T: Resource + Serialize>(value: &T) -> Result<Self> {
        let json = value.json();
        let fields = T::FIELDS
            .iter()
            .map(|spec| {
                let field = json.field(spec.key);
                FieldReport {
                    key: spec.key,
                    required: spec.required,
                    state: field.map(|f| f.state()).unwrap_or_default(),
                    raw: field.and_then(|f| f.raw().cloned()),
                }
            })
            .collect();

        Ok(Self {
            model: T::NAME,
            fields,
            extras: json.extras().clone(),
            value: serde_json::to_value(value)?,
        })
    }

    /// Required keys absent from the payload
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required && f.state == FieldState::Missing)
            .map(|f| f.key)
            .collect()
    }
}

/// Decode report for a list response
#[derive(Debug, Clone, Serialize)]
pub struct PageInspection {
    /// Reports for each item
    pub items: Vec<Inspection>,
    /// Cursor for the next page, if any
    pub next_cursor: Option<String>,
    /// Unrecognized keys on the list envelope
    pub extras: Extras,
}

impl PageInspection {
    /// Build a report from a decoded page
    pub fn of<T: Resource + Serialize>(page: &Page<T>) -> Result<Self> {
        Ok(Self {
            items: page
                .data
                .iter()
                .map(Inspection::of)
                .collect::<Result<Vec<_>>>()?,
            next_cursor: page.next_cursor().map(str::to_string),
            extras: page.json.extras.clone(),
        })
    }
}
