//! Ledger accounts and entries. Read-only from the client's side.

use serde::{Deserialize, Serialize};

use super::{Metadata, PaginationParams};

string_enum! {
    /// Bookkeeping classification of an account.
    LedgerAccountType {
        Asset => "asset",
        Liability => "liability",
        Revenue => "revenue",
        Expense => "expense",
        Equity => "equity",
    }
}

string_enum! {
    /// Side of a ledger entry.
    EntryType {
        Debit => "debit",
        Credit => "credit",
    }
}

string_enum! {
    /// Posting state of a ledger entry.
    EntryStatus {
        Pending => "pending",
        Posted => "posted",
    }
}

/// Balances of a ledger account in minor currency units.
///
/// The provider guarantees `available <= posted`; the client does not
/// check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerBalance {
    pub pending: i64,
    pub posted: i64,
    pub available: i64,
}

/// A ledger account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerAccount {
    pub id: String,
    /// Always `"ledger_account"`
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: LedgerAccountType,
    pub currency: String,
    pub balance: LedgerBalance,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    /// Fields this client version does not model, kept as received
    #[serde(flatten)]
    pub extra: Metadata,
}

/// One side of a journal posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    /// Always `"ledger_entry"`
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub journal_id: String,
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    pub entry_type: EntryType,
    /// Amount in minor currency units
    pub amount: u64,
    pub currency: String,
    pub status: EntryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub created_at: String,
    /// Fields this client version does not model, kept as received
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Filters for `GET /ledger/accounts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerAccountListParams {
    #[serde(flatten)]
    pub page: PaginationParams,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<LedgerAccountType>,
}

/// Filters for `GET /ledger/entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerEntryListParams {
    #[serde(flatten)]
    pub page: PaginationParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<EntryType>,
}
