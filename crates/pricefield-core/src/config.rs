//! Price field configuration
//!
//! Every key is optional in the JSON document; missing keys take the
//! defaults of the admin unit-price field.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Settings for one price field and its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// `name` attribute of the price `<input>`
    pub field_name: String,
    /// Symbol placed before labelled amounts
    pub currency_symbol: String,
    /// Code placed after labelled amounts
    pub currency_code: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            field_name: "precio_unitario".into(),
            currency_symbol: "$".into(),
            currency_code: "COP".into(),
        }
    }
}

impl FieldConfig {
    /// Parse and validate a JSON configuration document
    ///
    /// # Errors
    /// Returns `Config` for malformed JSON and `InvalidConfig` when the
    /// field name is blank or contains a double quote.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: FieldConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// CSS selector matching the price input by name
    pub fn input_selector(&self) -> String {
        format!("input[name=\"{}\"]", self.field_name)
    }

    fn validate(&self) -> Result<()> {
        if self.field_name.trim().is_empty() {
            return Err(Error::InvalidConfig {
                field: "field_name".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.field_name.contains('"') {
            return Err(Error::InvalidConfig {
                field: "field_name".into(),
                reason: "must not contain '\"'".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FieldConfig::default();
        assert_eq!(config.field_name, "precio_unitario");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.currency_code, "COP");
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = FieldConfig::from_json(r#"{"currency_code": "USD"}"#).unwrap();
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.field_name, "precio_unitario");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(FieldConfig::from_json("{}").unwrap(), FieldConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = FieldConfig::from_json("{ field_name: ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_blank_field_name_rejected() {
        let err = FieldConfig::from_json(r#"{"field_name": "  "}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_quoted_field_name_rejected() {
        let err = FieldConfig::from_json(r#"{"field_name": "a\"b"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_input_selector() {
        assert_eq!(
            FieldConfig::default().input_selector(),
            r#"input[name="precio_unitario"]"#
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = FieldConfig::load("/nonexistent/pricefield.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("pricefield_config_load_test.json");
        std::fs::write(&path, r#"{"currency_symbol": "€", "currency_code": "EUR"}"#)
            .expect("write temp");
        let config = FieldConfig::load(&path).unwrap();
        assert_eq!(config.currency_symbol, "€");
        let _ = std::fs::remove_file(&path);
    }
}
