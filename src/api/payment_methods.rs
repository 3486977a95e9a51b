//! Payment method endpoints.

use crate::dispatch::Dispatcher;
use crate::error::Error;
use crate::transport::HttpClient;
use crate::types::{
    CreatePaymentMethodRequest, ListResponse, PaymentMethod, PaymentMethodListParams,
};

const PAYMENT_METHODS: &str = "payment-methods";

/// Payment methods API, obtained from
/// [`FetcherPay::payment_methods`](crate::FetcherPay::payment_methods).
#[derive(Debug, Clone, Copy)]
pub struct PaymentMethods<'a, H> {
    dispatcher: &'a Dispatcher<H>,
}

impl<'a, H: HttpClient> PaymentMethods<'a, H> {
    pub(crate) const fn new(dispatcher: &'a Dispatcher<H>) -> Self {
        Self { dispatcher }
    }

    /// Registers a payment method.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn create(
        &self,
        request: &CreatePaymentMethodRequest,
        idempotency_key: Option<&str>,
    ) -> Result<PaymentMethod, Error> {
        self.dispatcher
            .post(&[PAYMENT_METHODS], request, idempotency_key)
            .await
    }

    /// Retrieves a payment method by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for unknown ids, or any other [`Error`].
    pub async fn retrieve(&self, payment_method_id: &str) -> Result<PaymentMethod, Error> {
        self.dispatcher.get(&[PAYMENT_METHODS, payment_method_id]).await
    }

    /// Lists payment methods, optionally of a single type.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn list(
        &self,
        params: &PaymentMethodListParams,
    ) -> Result<ListResponse<PaymentMethod>, Error> {
        self.dispatcher
            .get_with_query(&[PAYMENT_METHODS], params)
            .await
    }

    /// Deletes a payment method.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the provider rejects it.
    pub async fn delete(&self, payment_method_id: &str) -> Result<(), Error> {
        self.dispatcher
            .delete(&[PAYMENT_METHODS, payment_method_id])
            .await
    }
}
