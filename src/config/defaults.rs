//! Default values for configuration options.

use crate::client::ClientConfig;

/// Default environment name.
pub const ENVIRONMENT: &str = "sandbox";

/// Default request timeout in milliseconds.
pub const TIMEOUT_MS: u64 = ClientConfig::DEFAULT_TIMEOUT_MS;

/// Default path written by `fetcherpay init`.
pub const CONFIG_FILE: &str = "fetcherpay.toml";
