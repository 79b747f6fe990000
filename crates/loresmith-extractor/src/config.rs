//! Configuration for chat sessions

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a [`ChatSession`](crate::ChatSession)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum user message length (characters)
    pub max_message_length: usize,

    /// Maximum time to wait for one generation call (seconds)
    pub generation_timeout_secs: u64,

    /// Send the sheet drafted so far along with each message
    pub include_record_context: bool,
}

impl SessionConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_message_length == 0 {
            return Err("max_message_length must be greater than 0".to_string());
        }
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_message_length: 4_000,
            generation_timeout_secs: 120,
            include_record_context: true,
        }
    }
}

impl SessionConfig {
    /// Strict preset: short messages, short timeout, no sheet context
    pub fn strict() -> Self {
        Self {
            max_message_length: 1_000,
            generation_timeout_secs: 30,
            include_record_context: false,
        }
    }

    /// Lenient preset: long messages, slow models
    pub fn lenient() -> Self {
        Self {
            max_message_length: 20_000,
            generation_timeout_secs: 600,
            include_record_context: true,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
