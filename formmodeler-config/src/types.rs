//! Configuration values for the field registry

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Code of the provider used for single-entity relations no basic provider takes.
pub const DEFAULT_SINGLE_ENTITY: &str = "SubForm";

/// Code of the provider used for list-valued relations no basic provider takes.
pub const DEFAULT_MULTIPLE_ENTITY: &str = "MultipleSubForm";

/// Settings consumed when building a field registry.
///
/// Every key is optional in configuration files; missing keys take the
/// values from [`FieldsConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    /// Fallback provider code for scalar relation types.
    pub default_single_entity: String,
    /// Fallback provider code for list relation types.
    pub default_multiple_entity: String,
    /// Whether the stock providers are registered.
    pub builtin_providers: bool,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            default_single_entity: DEFAULT_SINGLE_ENTITY.to_string(),
            default_multiple_entity: DEFAULT_MULTIPLE_ENTITY.to_string(),
            builtin_providers: true,
        }
    }
}

impl FieldsConfig {
    /// Reject blank provider codes.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_single_entity.trim().is_empty() {
            return Err(ConfigError::validation(
                "default_single_entity cannot be empty",
            ));
        }
        if self.default_multiple_entity.trim().is_empty() {
            return Err(ConfigError::validation(
                "default_multiple_entity cannot be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FieldsConfig::default();
        assert_eq!(config.default_single_entity, "SubForm");
        assert_eq!(config.default_multiple_entity, "MultipleSubForm");
        assert!(config.builtin_providers);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config: FieldsConfig =
            serde_json::from_str(r#"{"default_multiple_entity":"Table"}"#).unwrap();
        assert_eq!(config.default_single_entity, DEFAULT_SINGLE_ENTITY);
        assert_eq!(config.default_multiple_entity, "Table");
    }

    #[test]
    fn test_blank_codes_fail_validation() {
        let config = FieldsConfig {
            default_single_entity: "  ".into(),
            ..FieldsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));

        let config = FieldsConfig {
            default_multiple_entity: String::new(),
            ..FieldsConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
