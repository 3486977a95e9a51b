//! Configuration layer for the `fetcherpay` command-line tool.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **Environment variables** - `FETCHERPAY_API_KEY`, `FETCHERPAY_ENVIRONMENT`,
//!    `FETCHERPAY_BASE_URL`
//! 3. **TOML config file** - Values from the `[client]` section
//! 4. **Built-in defaults** - Hardcoded default values
//!
//! The API key has no default and must come from one of the first three
//! sources. A base URL from any source overrides the environment's URL.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{
    Cli, Command, LedgerCommand, PageArgs, PaymentMethodsCommand, PaymentsCommand,
    WebhooksCommand,
};
pub use error::{ConfigError, field};
pub use toml::{ClientSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
