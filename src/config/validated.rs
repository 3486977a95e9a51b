//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::client::{ClientConfig, Environment};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// Environment variables are already folded into [`Cli`] by clap.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Settings for the API client
    pub client: ClientConfig,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_url = self
            .client
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.client.environment.base_url());

        write!(
            f,
            "Config {{ environment: {}, base_url: {}, timeout: {}ms }}",
            self.client.environment,
            base_url,
            self.client.timeout.as_millis(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments (and their environment variables) take precedence over
    /// TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API key is missing or empty
    /// - The base URL is invalid
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let api_key = Self::resolve_api_key(cli, toml)?;
        let environment = Self::resolve_environment(cli, toml);
        let base_url = Self::resolve_base_url(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;

        let mut client = ClientConfig::new(api_key)
            .with_environment(environment)
            .with_timeout(timeout);
        client.base_url = base_url;

        Ok(Self {
            client,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_api_key(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.api_key
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.api_key.as_deref()))
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                ConfigError::missing(
                    field::API_KEY,
                    "Use --api-key, set FETCHERPAY_API_KEY, or set client.api_key in config file",
                )
            })
    }

    fn resolve_environment(cli: &Cli, toml: Option<&TomlConfig>) -> Environment {
        let name = cli
            .environment
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.environment.as_deref()))
            .unwrap_or(defaults::ENVIRONMENT);

        Environment::from_name(name)
    }

    fn resolve_base_url(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<String>, ConfigError> {
        let Some(raw) = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.base_url.as_deref()))
        else {
            return Ok(None);
        };

        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: raw.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Some(raw.to_string()))
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        let millis = cli
            .timeout_ms
            .or_else(|| toml.and_then(|t| t.client.timeout_ms))
            .unwrap_or(defaults::TIMEOUT_MS);

        if millis == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT_MS,
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Duration::from_millis(millis))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
