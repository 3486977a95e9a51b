//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::types::{
    EntryType, LedgerAccountType, PaginationParams, PaymentMethodType, PaymentStatus, Rail,
};

/// FetcherPay command-line client
///
/// Inspects payments, payment methods, the ledger and webhook endpoints,
/// and verifies webhook signatures offline.
#[derive(Debug, Parser)]
#[command(name = "fetcherpay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// API key sent as a bearer credential
    #[arg(long = "api-key", env = "FETCHERPAY_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Environment: "production" or "sandbox"
    #[arg(long, env = "FETCHERPAY_ENVIRONMENT", global = true)]
    pub environment: Option<String>,

    /// Base URL overriding the environment's default
    #[arg(long = "base-url", env = "FETCHERPAY_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long = "timeout-ms", global = true)]
    pub timeout_ms: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for fetcherpay
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Verify a webhook delivery signature without contacting the API
    Verify {
        /// File holding the raw request body exactly as received
        payload: PathBuf,

        /// Webhook endpoint secret
        #[arg(long, env = "FETCHERPAY_WEBHOOK_SECRET", hide_env_values = true)]
        secret: String,

        /// Value of the X-FetcherPay-Signature header
        #[arg(long)]
        signature: String,
    },

    /// Payments
    Payments {
        #[command(subcommand)]
        command: PaymentsCommand,
    },

    /// Payment methods
    PaymentMethods {
        #[command(subcommand)]
        command: PaymentMethodsCommand,
    },

    /// Ledger accounts and entries
    Ledger {
        #[command(subcommand)]
        command: LedgerCommand,
    },

    /// Webhook endpoints
    Webhooks {
        #[command(subcommand)]
        command: WebhooksCommand,
    },
}

/// Cursor pagination flags shared by list commands.
#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    /// Maximum number of items to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Cursor from a previous page's `next_cursor`
    #[arg(long)]
    pub cursor: Option<String>,
}

impl From<PageArgs> for PaginationParams {
    fn from(args: PageArgs) -> Self {
        Self {
            cursor: args.cursor,
            limit: args.limit,
        }
    }
}

/// Payments subcommands
#[derive(Debug, Subcommand)]
pub enum PaymentsCommand {
    /// Retrieve one payment
    Get {
        /// Payment id
        id: String,
    },

    /// List payments
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Only payments in this status
        #[arg(long, value_parser = wire_value::<PaymentStatus>)]
        status: Option<PaymentStatus>,

        /// Only payments on this rail
        #[arg(long, value_parser = wire_value::<Rail>)]
        rail: Option<Rail>,

        /// Only payments created after this RFC 3339 instant
        #[arg(long = "created-after")]
        created_after: Option<String>,

        /// Only payments created before this RFC 3339 instant
        #[arg(long = "created-before")]
        created_before: Option<String>,
    },

    /// Cancel a payment that has not settled
    Cancel {
        /// Payment id
        id: String,

        /// Reason recorded with the cancellation
        #[arg(long)]
        reason: Option<String>,

        /// Idempotency key for safe retries
        #[arg(long = "idempotency-key")]
        idempotency_key: Option<String>,
    },

    /// Refund a payment in full or in part
    Refund {
        /// Payment id
        id: String,

        /// Partial amount in minor currency units (default: full refund)
        #[arg(long)]
        amount: Option<u64>,

        /// Reason recorded with the refund
        #[arg(long)]
        reason: Option<String>,

        /// Idempotency key for safe retries
        #[arg(long = "idempotency-key")]
        idempotency_key: Option<String>,
    },
}

/// Payment methods subcommands
#[derive(Debug, Subcommand)]
pub enum PaymentMethodsCommand {
    /// Retrieve one payment method
    Get {
        /// Payment method id
        id: String,
    },

    /// List payment methods
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Only methods of this type (bank_account, card, usdc_wallet)
        #[arg(long = "type", value_parser = wire_value::<PaymentMethodType>)]
        method_type: Option<PaymentMethodType>,
    },

    /// Delete a payment method
    Delete {
        /// Payment method id
        id: String,
    },
}

/// Ledger subcommands
#[derive(Debug, Subcommand)]
pub enum LedgerCommand {
    /// List ledger accounts
    Accounts {
        #[command(flatten)]
        page: PageArgs,

        /// Only accounts of this type
        #[arg(long = "type", value_parser = wire_value::<LedgerAccountType>)]
        account_type: Option<LedgerAccountType>,
    },

    /// Retrieve one ledger account
    Account {
        /// Ledger account id
        id: String,
    },

    /// List ledger entries
    Entries {
        #[command(flatten)]
        page: PageArgs,

        /// Only entries posted to this account
        #[arg(long = "account-id")]
        account_id: Option<String>,

        /// Only entries created by this payment
        #[arg(long = "payment-id")]
        payment_id: Option<String>,

        /// Only debit or credit entries
        #[arg(long = "entry-type", value_parser = wire_value::<EntryType>)]
        entry_type: Option<EntryType>,
    },

    /// Retrieve one ledger entry
    Entry {
        /// Ledger entry id
        id: String,
    },
}

/// Webhook endpoint subcommands
#[derive(Debug, Subcommand)]
pub enum WebhooksCommand {
    /// Retrieve one webhook endpoint
    Get {
        /// Webhook endpoint id
        id: String,
    },

    /// List webhook endpoints
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Delete a webhook endpoint
    Delete {
        /// Webhook endpoint id
        id: String,
    },
}

/// Parses a provider enumeration; unknown values pass through as `Other`.
#[allow(clippy::unnecessary_wraps)] // clap value parsers must return Result
fn wire_value<T: for<'a> From<&'a str>>(s: &str) -> Result<T, Infallible> {
    Ok(T::from(s))
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true for commands that run without an API key.
    #[must_use]
    pub const fn is_offline(&self) -> bool {
        matches!(self.command, Command::Init { .. } | Command::Verify { .. })
    }
}
