//! FetcherPay: async client for the FetcherPay payments API.
//!
//! Typed access to payments, payment methods, the ledger and webhook
//! endpoints, plus HMAC-SHA256 verification of webhook deliveries.
//!
//! ```no_run
//! use fetcherpay::{ClientConfig, Environment, FetcherPay};
//! use fetcherpay::types::PaymentListParams;
//!
//! # async fn example() -> Result<(), fetcherpay::Error> {
//! let config = ClientConfig::new("fp_test_key").with_environment(Environment::Sandbox);
//! let client = FetcherPay::new(&config)?;
//!
//! let page = client.payments().list(&PaymentListParams::default()).await?;
//! for payment in &page.data {
//!     println!("{} {} {}", payment.id, payment.amount, payment.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod signature;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_fixtures;

pub use client::{ClientConfig, Environment, FetcherPay};
pub use error::Error;
