//! Command execution logic.
//!
//! This module maps each API subcommand onto one client call and renders
//! the result as JSON. Offline commands (`init`, `verify`) are handled by
//! the entry point without building a client.

use std::path::Path;

use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use fetcherpay::FetcherPay;
use fetcherpay::config::{
    Command, LedgerCommand, PaymentMethodsCommand, PaymentsCommand, ValidatedConfig,
    WebhooksCommand,
};
use fetcherpay::signature;
use fetcherpay::transport::HttpClient;
use fetcherpay::types::{
    LedgerAccountListParams, LedgerEntryListParams, PaymentListParams, PaymentMethodListParams,
    RefundPaymentRequest,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The API call failed.
    #[error(transparent)]
    Api(#[from] fetcherpay::Error),

    /// A result could not be rendered as JSON.
    #[error("Failed to render output: {0}")]
    Render(#[source] serde_json::Error),

    /// The webhook payload file could not be read.
    #[error("Failed to read payload file '{}': {source}", path.display())]
    PayloadRead {
        /// Path to the payload file
        path: std::path::PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An offline command reached the API runner.
    #[error("Command does not call the API")]
    Offline,
}

/// Builds a client from `config`, runs `command` and prints the result.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the call fails.
pub async fn execute(config: ValidatedConfig, command: Command) -> Result<(), RunError> {
    let client = FetcherPay::new(&config.client)?;
    tracing::debug!(base_url = %client.base_url(), "Client ready");

    let output = run_command(&client, command).await?;
    let rendered = serde_json::to_string_pretty(&output).map_err(RunError::Render)?;
    println!("{rendered}");
    Ok(())
}

/// Runs one API subcommand and returns its JSON rendering.
///
/// Deletes, which return no body, render as `{"id": ..., "deleted": true}`.
pub async fn run_command<H: HttpClient>(
    client: &FetcherPay<H>,
    command: Command,
) -> Result<Value, RunError> {
    match command {
        Command::Payments { command } => run_payments(client, command).await,
        Command::PaymentMethods { command } => run_payment_methods(client, command).await,
        Command::Ledger { command } => run_ledger(client, command).await,
        Command::Webhooks { command } => run_webhooks(client, command).await,
        Command::Init { .. } | Command::Verify { .. } => Err(RunError::Offline),
    }
}

async fn run_payments<H: HttpClient>(
    client: &FetcherPay<H>,
    command: PaymentsCommand,
) -> Result<Value, RunError> {
    let payments = client.payments();

    match command {
        PaymentsCommand::Get { id } => render(&payments.retrieve(&id).await?),
        PaymentsCommand::List {
            page,
            status,
            rail,
            created_after,
            created_before,
        } => {
            let params = PaymentListParams {
                page: page.into(),
                status,
                rail,
                created_after,
                created_before,
            };
            render(&payments.list(&params).await?)
        }
        PaymentsCommand::Cancel {
            id,
            reason,
            idempotency_key,
        } => render(
            &payments
                .cancel(&id, reason.as_deref(), idempotency_key.as_deref())
                .await?,
        ),
        PaymentsCommand::Refund {
            id,
            amount,
            reason,
            idempotency_key,
        } => {
            let request = RefundPaymentRequest { amount, reason };
            render(
                &payments
                    .refund(&id, &request, idempotency_key.as_deref())
                    .await?,
            )
        }
    }
}

async fn run_payment_methods<H: HttpClient>(
    client: &FetcherPay<H>,
    command: PaymentMethodsCommand,
) -> Result<Value, RunError> {
    let methods = client.payment_methods();

    match command {
        PaymentMethodsCommand::Get { id } => render(&methods.retrieve(&id).await?),
        PaymentMethodsCommand::List { page, method_type } => {
            let params = PaymentMethodListParams {
                page: page.into(),
                method_type,
            };
            render(&methods.list(&params).await?)
        }
        PaymentMethodsCommand::Delete { id } => {
            methods.delete(&id).await?;
            Ok(deleted(&id))
        }
    }
}

async fn run_ledger<H: HttpClient>(
    client: &FetcherPay<H>,
    command: LedgerCommand,
) -> Result<Value, RunError> {
    let ledger = client.ledger();

    match command {
        LedgerCommand::Accounts { page, account_type } => {
            let params = LedgerAccountListParams {
                page: page.into(),
                account_type,
            };
            render(&ledger.list_accounts(&params).await?)
        }
        LedgerCommand::Account { id } => render(&ledger.retrieve_account(&id).await?),
        LedgerCommand::Entries {
            page,
            account_id,
            payment_id,
            entry_type,
        } => {
            let params = LedgerEntryListParams {
                page: page.into(),
                account_id,
                payment_id,
                entry_type,
            };
            render(&ledger.list_entries(&params).await?)
        }
        LedgerCommand::Entry { id } => render(&ledger.retrieve_entry(&id).await?),
    }
}

async fn run_webhooks<H: HttpClient>(
    client: &FetcherPay<H>,
    command: WebhooksCommand,
) -> Result<Value, RunError> {
    let webhooks = client.webhooks();

    match command {
        WebhooksCommand::Get { id } => render(&webhooks.retrieve(&id).await?),
        WebhooksCommand::List { page } => render(&webhooks.list(&page.into()).await?),
        WebhooksCommand::Delete { id } => {
            webhooks.delete(&id).await?;
            Ok(deleted(&id))
        }
    }
}

/// Checks a saved webhook body against its signature.
///
/// # Errors
///
/// Returns an error only if the payload file cannot be read; a bad
/// signature is `Ok(false)`.
pub fn verify_payload(payload: &Path, secret: &str, signature: &str) -> Result<bool, RunError> {
    let body = std::fs::read(payload).map_err(|e| RunError::PayloadRead {
        path: payload.to_path_buf(),
        source: e,
    })?;

    Ok(signature::verify_signature(&body, signature.trim(), secret))
}

fn render<T: Serialize>(value: &T) -> Result<Value, RunError> {
    serde_json::to_value(value).map_err(RunError::Render)
}

fn deleted(id: &str) -> Value {
    json!({ "id": id, "deleted": true })
}
