//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments and environment variables.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API client configuration section
    #[serde(default)]
    pub client: ClientSection,
}

/// API client configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    /// API key sent as a bearer credential
    pub api_key: Option<String>,

    /// Environment name: "production" or "sandbox"
    pub environment: Option<String>,

    /// Base URL overriding the environment's default
    pub base_url: Option<String>,

    /// Request timeout in milliseconds
    pub timeout_ms: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# FetcherPay CLI Configuration File

[client]
# API key (required unless --api-key or FETCHERPAY_API_KEY is set)
# api_key = "fp_test_..."

# Environment: "production" or "sandbox" (default: sandbox)
# Any value other than "production" selects the sandbox.
environment = "sandbox"

# Base URL overriding the environment's default
# base_url = "https://sandbox.fetcherpay.com/v1"

# Request timeout in milliseconds (default: 30000)
# timeout_ms = 30000
"#
    .to_string()
}
