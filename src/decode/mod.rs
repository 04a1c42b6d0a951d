//! Response decoder module
//!
//! # Overview
//!
//! The decode module turns a JSON payload into a typed model plus a
//! metadata sidecar recording, for every declared field, whether the key
//! was present and its raw bytes. Keys the model does not declare are kept
//! in an extras map so payloads from newer API versions lose nothing.

mod decoder;
mod inspect;
mod reader;
mod types;

pub use decoder::{decode, decode_page, deserialize_resource, Decoder};
pub use inspect::{FieldReport, Inspection, PageInspection};
pub use reader::ObjectReader;
pub use types::{
    DecoderConfig, Extras, Field, FieldSpec, FieldState, RawJson, RequiredFields, Resource,
    ResourceJson,
};

#[cfg(test)]
mod tests;
