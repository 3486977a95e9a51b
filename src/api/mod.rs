//! Resource clients.
//!
//! Each type borrows the client's [`Dispatcher`](crate::dispatch::Dispatcher)
//! and maps one method to one endpoint. Obtain them through the accessors on
//! [`FetcherPay`](crate::FetcherPay).

mod ledger;
mod payment_methods;
mod payments;
mod webhooks;


pub use ledger::Ledger;
pub use payment_methods::PaymentMethods;
pub use payments::Payments;
pub use webhooks::Webhooks;
