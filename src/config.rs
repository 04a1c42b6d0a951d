//! Configuration for decoding and pagination
//!
//! Loaded from YAML or JSON:
//!
//! ```yaml
//! decoder:
//!   required_fields: strict
//!   log_extras: false
//! pagination:
//!   limit: 100
//!   max_pages: 10
//! ```

use crate::decode::{Decoder, DecoderConfig};
use crate::error::{Error, Result};
use crate::pagination::PaginationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete client-side configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Decoder settings
    pub decoder: DecoderConfig,
    /// Pagination settings
    pub pagination: PaginationConfig,
}

impl ClientConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` files are parsed as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Check every section
    pub fn validate(&self) -> Result<()> {
        self.pagination.validate()
    }

    /// A decoder using this configuration
    pub fn decoder(&self) -> Decoder {
        Decoder::new(self.decoder.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::RequiredFields;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.decoder.required_fields, RequiredFields::Lenient);
        assert!(config.decoder.log_extras);
        assert_eq!(config.pagination.limit, None);
        assert_eq!(config.pagination.max_pages, None);
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r"
decoder:
  required_fields: strict
  log_extras: false
pagination:
  limit: 25
  max_pages: 4
";
        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.decoder.required_fields, RequiredFields::Strict);
        assert!(!config.decoder.log_extras);
        assert_eq!(config.pagination.limit, Some(25));
        assert_eq!(config.pagination.max_pages, Some(4));
        assert!(config.decoder().config().is_strict());
    }

    #[test]
    fn test_from_yaml_partial_sections_use_defaults() {
        let config = ClientConfig::from_yaml_str("pagination:\n  limit: 10\n").unwrap();
        assert_eq!(config.decoder, DecoderConfig::default());
        assert_eq!(config.pagination.limit, Some(10));
    }

    #[test]
    fn test_from_json_str() {
        let config =
            ClientConfig::from_json_str(r#"{"decoder": {"required_fields": "lenient"}}"#).unwrap();
        assert_eq!(config.decoder.required_fields, RequiredFields::Lenient);
    }

    #[test]
    fn test_rejects_out_of_range_limit() {
        let err = ClientConfig::from_yaml_str("pagination:\n  limit: 500\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "pagination.limit"));

        let err = ClientConfig::from_yaml_str("pagination:\n  max_pages: 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_rejects_unknown_section() {
        let err = ClientConfig::from_yaml_str("transport:\n  retries: 3\n").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("increase.yaml");
        let mut file = std::fs::File::create(&yaml_path).unwrap();
        writeln!(file, "decoder:\n  required_fields: strict").unwrap();
        let config = ClientConfig::from_file(&yaml_path).unwrap();
        assert!(config.decoder.is_strict());

        let json_path = dir.path().join("increase.json");
        std::fs::write(&json_path, r#"{"pagination": {"limit": 50}}"#).unwrap();
        let config = ClientConfig::from_file(&json_path).unwrap();
        assert_eq!(config.pagination.limit, Some(50));
    }

    #[test]
    fn test_from_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
