//! Ledger endpoints. All read-only.

use crate::dispatch::Dispatcher;
use crate::error::Error;
use crate::transport::HttpClient;
use crate::types::{
    LedgerAccount, LedgerAccountListParams, LedgerEntry, LedgerEntryListParams, ListResponse,
};

const LEDGER: &str = "ledger";
const ACCOUNTS: &str = "accounts";
const ENTRIES: &str = "entries";

/// Ledger API, obtained from [`FetcherPay::ledger`](crate::FetcherPay::ledger).
#[derive(Debug, Clone, Copy)]
pub struct Ledger<'a, H> {
    dispatcher: &'a Dispatcher<H>,
}

impl<'a, H: HttpClient> Ledger<'a, H> {
    pub(crate) const fn new(dispatcher: &'a Dispatcher<H>) -> Self {
        Self { dispatcher }
    }

    /// Lists ledger accounts, optionally of a single type.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn list_accounts(
        &self,
        params: &LedgerAccountListParams,
    ) -> Result<ListResponse<LedgerAccount>, Error> {
        self.dispatcher
            .get_with_query(&[LEDGER, ACCOUNTS], params)
            .await
    }

    /// Retrieves a ledger account by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for unknown ids, or any other [`Error`].
    pub async fn retrieve_account(&self, account_id: &str) -> Result<LedgerAccount, Error> {
        self.dispatcher.get(&[LEDGER, ACCOUNTS, account_id]).await
    }

    /// Lists ledger entries filtered by account, payment or side.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn list_entries(
        &self,
        params: &LedgerEntryListParams,
    ) -> Result<ListResponse<LedgerEntry>, Error> {
        self.dispatcher
            .get_with_query(&[LEDGER, ENTRIES], params)
            .await
    }

    /// Retrieves a ledger entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for unknown ids, or any other [`Error`].
    pub async fn retrieve_entry(&self, entry_id: &str) -> Result<LedgerEntry, Error> {
        self.dispatcher.get(&[LEDGER, ENTRIES, entry_id]).await
    }
}
