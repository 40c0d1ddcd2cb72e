//! core::config::schema
//!
//! Model configuration schema types.
//!
//! # Example
//!
//! ```toml
//! [attributes]
//! order = "name"
//! ```
//!
//! Every section and key is optional; omitted values take their defaults.

use serde::{Deserialize, Serialize};

/// Order in which attribute snapshots are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeOrder {
    /// Order of the most recent `set_attribute` per name.
    #[default]
    Insertion,
    /// Sorted by qualified name.
    Name,
}

/// Configuration for a metadata document model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Attribute handling settings
    pub attributes: AttributeSettings,
}

/// `[attributes]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AttributeSettings {
    /// Snapshot order for attribute listings
    pub order: AttributeOrder,
}

impl ModelConfig {
    /// The configured attribute snapshot order.
    pub fn attribute_order(&self) -> AttributeOrder {
        self.attributes.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_insertion_order() {
        assert_eq!(ModelConfig::default().attribute_order(), AttributeOrder::Insertion);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config: ModelConfig = toml::from_str("").unwrap();
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn order_is_lowercase() {
        let config: ModelConfig = toml::from_str("[attributes]\norder = \"name\"\n").unwrap();
        assert_eq!(config.attribute_order(), AttributeOrder::Name);
    }

    #[test]
    fn unknown_order_rejected() {
        let result: Result<ModelConfig, _> = toml::from_str("[attributes]\norder = \"random\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<ModelConfig, _> = toml::from_str("[attributes]\nsort = true\n");
        assert!(result.is_err());

        let result: Result<ModelConfig, _> = toml::from_str("[schemas]\n");
        assert!(result.is_err());
    }

    #[test]
    fn toml_roundtrip() {
        let config = ModelConfig {
            attributes: AttributeSettings {
                order: AttributeOrder::Name,
            },
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: ModelConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, parsed);
    }
}
