//! Request and response shapes for the FetcherPay API.
//!
//! Every response type is a snapshot of a provider-owned resource. The
//! client never mutates and re-sends a decoded value; every write is a
//! fresh request struct.
//!
//! Provider enumerations (statuses, rails, type discriminators) are
//! string-backed: values this client does not know decode into an
//! `Other(String)` variant and serialize back unchanged.

/// Declares a string-backed enum with a catch-all `Other` variant.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this client version does not recognize.
            Other(String),
        }

        impl $name {
            /// Returns the wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(value) => value,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $value => Self::$variant, )+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod common;
mod ledger;
mod payment;
mod payment_method;
mod webhook;


pub use common::{ListResponse, Metadata, PaginationParams};
pub use ledger::{
    EntryStatus, EntryType, LedgerAccount, LedgerAccountListParams, LedgerAccountType,
    LedgerBalance, LedgerEntry, LedgerEntryListParams,
};
pub use payment::{
    CancelPaymentRequest, CreatePaymentRequest, Fee, Payment, PaymentListParams, PaymentParty,
    PaymentStatus, Rail, Refund, RefundPaymentRequest, TimelineEvent,
};
pub use payment_method::{
    BankAccount, BankAccountType, Card, CreatePaymentMethodRequest, NewBankAccount, NewCard,
    NewPaymentMethod, NewUsdcWallet, PaymentMethod, PaymentMethodDetails,
    PaymentMethodListParams, PaymentMethodStatus, PaymentMethodType, UsdcWallet,
};
pub use webhook::{
    CreateWebhookRequest, UpdateWebhookRequest, WebhookEndpoint, WebhookEvent, WebhookStatus,
};
