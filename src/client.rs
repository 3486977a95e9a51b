//! Client construction and configuration.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::api::{Ledger, PaymentMethods, Payments, Webhooks};
use crate::dispatch::Dispatcher;
use crate::error::Error;
use crate::signature;
use crate::transport::{HttpClient, ReqwestClient};

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

/// Base URL of the production API.
pub const PRODUCTION_BASE_URL: &str = "https://api.fetcherpay.com/v1";

/// Base URL of the sandbox API.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.fetcherpay.com/v1";

/// Provider environment, selecting the default base URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Test environment; no real money moves
    #[default]
    Sandbox,
    /// Live environment
    Production,
}

impl Environment {
    /// Parses an environment name.
    ///
    /// Only `"production"` selects [`Environment::Production`]; any other
    /// value, including typos, selects the sandbox.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "production" {
            Self::Production
        } else {
            Self::Sandbox
        }
    }

    /// Returns the default base URL for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => write!(f, "sandbox"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Settings fixed for the lifetime of a [`FetcherPay`] client.
///
/// # Defaults
///
/// - `environment`: [`Environment::Sandbox`]
/// - `base_url`: none (derived from `environment`)
/// - `timeout`: 30 seconds
///
/// # Example
///
/// ```
/// use fetcherpay::{ClientConfig, Environment};
/// use std::time::Duration;
///
/// let config = ClientConfig::new("fp_live_key")
///     .with_environment(Environment::Production)
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.resolve_base_url().unwrap().as_str(), "https://api.fetcherpay.com/v1");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Bearer credential sent on every request
    pub api_key: String,

    /// Environment used when no `base_url` override is set
    pub environment: Environment,

    /// Explicit base URL, taking precedence over `environment`
    pub base_url: Option<String>,

    /// Timeout applied uniformly to every request
    pub timeout: Duration,
}

impl ClientConfig {
    /// Default request timeout in milliseconds.
    pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(Self::DEFAULT_TIMEOUT_MS);

    /// Creates a configuration with defaults for everything but the key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            environment: Environment::default(),
            base_url: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the environment.
    #[must_use]
    pub const fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL: the override if set, else the environment's.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if the override does not parse.
    pub fn resolve_base_url(&self) -> Result<Url, Error> {
        let raw = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url());

        Url::parse(raw).map_err(|e| Error::InvalidBaseUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Client for the FetcherPay API.
///
/// Each resource accessor borrows the client and issues exactly one HTTP
/// call per operation. The client holds no mutable state, so `&FetcherPay`
/// can be shared freely across tasks.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use fetcherpay::{ClientConfig, FetcherPay};
/// use fetcherpay::types::{CreatePaymentRequest, Rail};
///
/// # async fn example() -> Result<(), fetcherpay::Error> {
/// let client = FetcherPay::new(&ClientConfig::new("fp_test_key"))?;
///
/// let request = CreatePaymentRequest::new(10_000, "pm_bank_123", "pm_merchant_456")
///     .with_currency("USD")
///     .with_rail(Rail::Auto);
/// let payment = client.payments().create(&request, Some("order-42")).await?;
/// println!("{} is {}", payment.id, payment.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FetcherPay<H = ReqwestClient> {
    dispatcher: Dispatcher<H>,
}

impl FetcherPay<ReqwestClient> {
    /// Creates a client backed by reqwest with the configured timeout.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBaseUrl`] if the base URL override is unusable
    /// - [`Error::InvalidApiKey`] if the key cannot be sent as a header
    /// - [`Error::Transport`] if the HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let http = ReqwestClient::with_timeout(config.timeout)?;
        Self::with_http_client(config, http)
    }
}

impl<H: HttpClient> FetcherPay<H> {
    /// Creates a client on top of any [`HttpClient`].
    ///
    /// `config.timeout` is not applied here; it is the HTTP client's job.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBaseUrl`] if the base URL override is unusable
    /// - [`Error::InvalidApiKey`] if the key cannot be sent as a header
    pub fn with_http_client(config: &ClientConfig, http: H) -> Result<Self, Error> {
        let base_url = config.resolve_base_url()?;
        tracing::debug!(base_url = %base_url, "Creating FetcherPay client");

        Ok(Self {
            dispatcher: Dispatcher::new(http, base_url, &config.api_key)?,
        })
    }

    /// Returns the base URL all requests go to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        self.dispatcher.base_url()
    }

    /// Payments API.
    #[must_use]
    pub const fn payments(&self) -> Payments<'_, H> {
        Payments::new(&self.dispatcher)
    }

    /// Payment methods API.
    #[must_use]
    pub const fn payment_methods(&self) -> PaymentMethods<'_, H> {
        PaymentMethods::new(&self.dispatcher)
    }

    /// Ledger API.
    #[must_use]
    pub const fn ledger(&self) -> Ledger<'_, H> {
        Ledger::new(&self.dispatcher)
    }

    /// Webhook endpoints API.
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'_, H> {
        Webhooks::new(&self.dispatcher)
    }

    /// Checks a webhook signature; see [`signature::verify_signature`].
    #[must_use]
    pub fn verify_webhook_signature(&self, payload: &[u8], signature: &str, secret: &str) -> bool {
        signature::verify_signature(payload, signature, secret)
    }
}
