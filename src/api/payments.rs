//! Payments endpoints.

use crate::dispatch::Dispatcher;
use crate::error::Error;
use crate::transport::HttpClient;
use crate::types::{
    CancelPaymentRequest, CreatePaymentRequest, ListResponse, Payment, PaymentListParams,
    RefundPaymentRequest,
};

const PAYMENTS: &str = "payments";

/// Payments API, obtained from [`FetcherPay::payments`](crate::FetcherPay::payments).
#[derive(Debug, Clone, Copy)]
pub struct Payments<'a, H> {
    dispatcher: &'a Dispatcher<H>,
}

impl<'a, H: HttpClient> Payments<'a, H> {
    pub(crate) const fn new(dispatcher: &'a Dispatcher<H>) -> Self {
        Self { dispatcher }
    }

    /// Creates a payment.
    ///
    /// Without an idempotency key the provider treats the call as a new
    /// submission every time.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn create(
        &self,
        request: &CreatePaymentRequest,
        idempotency_key: Option<&str>,
    ) -> Result<Payment, Error> {
        self.dispatcher
            .post(&[PAYMENTS], request, idempotency_key)
            .await
    }

    /// Retrieves a payment by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for unknown ids, or any other [`Error`].
    pub async fn retrieve(&self, payment_id: &str) -> Result<Payment, Error> {
        self.dispatcher.get(&[PAYMENTS, payment_id]).await
    }

    /// Lists payments matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn list(&self, params: &PaymentListParams) -> Result<ListResponse<Payment>, Error> {
        self.dispatcher.get_with_query(&[PAYMENTS], params).await
    }

    /// Cancels a payment that has not settled yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn cancel(
        &self,
        payment_id: &str,
        reason: Option<&str>,
        idempotency_key: Option<&str>,
    ) -> Result<Payment, Error> {
        let body = CancelPaymentRequest {
            reason: reason.map(str::to_string),
        };
        self.dispatcher
            .post(&[PAYMENTS, payment_id, "cancel"], &body, idempotency_key)
            .await
    }

    /// Refunds a settled payment, in full or in part.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn refund(
        &self,
        payment_id: &str,
        request: &RefundPaymentRequest,
        idempotency_key: Option<&str>,
    ) -> Result<Payment, Error> {
        self.dispatcher
            .post(&[PAYMENTS, payment_id, "refund"], request, idempotency_key)
            .await
    }
}
