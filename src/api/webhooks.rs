//! Webhook endpoint management.

use crate::dispatch::Dispatcher;
use crate::error::Error;
use crate::transport::HttpClient;
use crate::types::{
    CreateWebhookRequest, ListResponse, PaginationParams, UpdateWebhookRequest, WebhookEndpoint,
};

const WEBHOOKS: &str = "webhooks";

/// Webhook endpoints API, obtained from
/// [`FetcherPay::webhooks`](crate::FetcherPay::webhooks).
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a, H> {
    dispatcher: &'a Dispatcher<H>,
}

impl<'a, H: HttpClient> Webhooks<'a, H> {
    pub(crate) const fn new(dispatcher: &'a Dispatcher<H>) -> Self {
        Self { dispatcher }
    }

    /// Registers a webhook endpoint. The response carries its signing secret.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn create(
        &self,
        request: &CreateWebhookRequest,
        idempotency_key: Option<&str>,
    ) -> Result<WebhookEndpoint, Error> {
        self.dispatcher
            .post(&[WEBHOOKS], request, idempotency_key)
            .await
    }

    /// Retrieves a webhook endpoint by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for unknown ids, or any other [`Error`].
    pub async fn retrieve(&self, webhook_id: &str) -> Result<WebhookEndpoint, Error> {
        self.dispatcher.get(&[WEBHOOKS, webhook_id]).await
    }

    /// Lists webhook endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn list(
        &self,
        params: &PaginationParams,
    ) -> Result<ListResponse<WebhookEndpoint>, Error> {
        self.dispatcher.get_with_query(&[WEBHOOKS], params).await
    }

    /// Updates the fields set in `request`, leaving the rest unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn update(
        &self,
        webhook_id: &str,
        request: &UpdateWebhookRequest,
    ) -> Result<WebhookEndpoint, Error> {
        self.dispatcher.put(&[WEBHOOKS, webhook_id], request).await
    }

    /// Deletes a webhook endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn delete(&self, webhook_id: &str) -> Result<(), Error> {
        self.dispatcher.delete(&[WEBHOOKS, webhook_id]).await
    }
}
