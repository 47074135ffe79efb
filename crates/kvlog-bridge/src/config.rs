// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

use crate::error::AdapterError;

/// Key the message is extracted from unless configured otherwise.
pub const DEFAULT_MESSAGE_KEY: &str = "message";
/// Key the level is extracted from unless configured otherwise.
pub const DEFAULT_LEVEL_KEY: &str = "level";

/// Reserved key names used by an [`crate::adapter::Adapter`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Key whose value becomes the entry's message
    pub message_key: String,
    /// Key whose value selects the entry's severity
    pub level_key: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            message_key: DEFAULT_MESSAGE_KEY.to_string(),
            level_key: DEFAULT_LEVEL_KEY.to_string(),
        }
    }
}

impl AdapterConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AdapterError> {
        if self.message_key.is_empty() {
            return Err(AdapterError::InvalidConfig(
                "message key cannot be empty".to_string(),
            ));
        }

        if self.level_key.is_empty() {
            return Err(AdapterError::InvalidConfig(
                "level key cannot be empty".to_string(),
            ));
        }

        if self.message_key == self.level_key {
            return Err(AdapterError::InvalidConfig(format!(
                "message key and level key must differ, both are '{}'",
                self.message_key
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AdapterConfig::default();
        assert_eq!(config.message_key, "message");
        assert_eq!(config.level_key, "level");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_keys() {
        let config = AdapterConfig {
            message_key: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AdapterError::InvalidConfig(msg)) if msg.contains("message key")
        ));

        let config = AdapterConfig {
            level_key: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AdapterError::InvalidConfig(msg)) if msg.contains("level key")
        ));
    }

    #[test]
    fn test_validate_identical_keys() {
        let config = AdapterConfig {
            message_key: "k".to_string(),
            level_key: "k".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: AdapterConfig = serde_json::from_str(r#"{"message_key": "msg"}"#).unwrap();
        assert_eq!(config.message_key, "msg");
        assert_eq!(config.level_key, DEFAULT_LEVEL_KEY);

        let config: AdapterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AdapterConfig::default());
    }
}
