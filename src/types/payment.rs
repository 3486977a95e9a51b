//! Payments and their request shapes.

use serde::{Deserialize, Serialize};

use super::{Metadata, PaginationParams};

string_enum! {
    /// Lifecycle status of a payment, assigned by the provider.
    PaymentStatus {
        /// Created, not yet authorized
        Pending => "pending",
        /// Funds authorized at the source
        Authorized => "authorized",
        /// In flight on the selected rail
        Processing => "processing",
        /// Funds delivered
        Settled => "settled",
        /// Terminal failure
        Failed => "failed",
        /// Cancelled before settlement
        Cancelled => "cancelled",
        /// Fully refunded
        Refunded => "refunded",
        /// Refunded in part
        PartiallyRefunded => "partially_refunded",
    }
}

string_enum! {
    /// Transport mechanism used to move funds.
    Rail {
        /// Let the provider pick the rail
        Auto => "auto",
        /// Automated Clearing House
        Ach => "ach",
        /// Real-Time Payments
        Rtp => "rtp",
        /// Card networks
        Card => "card",
        /// Crypto networks
        Crypto => "crypto",
    }
}

/// One side of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentParty {
    /// Payment method funds are drawn from or delivered to
    pub payment_method_id: String,
    /// Display name of the party
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Payment method type, echoed by the provider
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub method_type: Option<String>,
}

impl PaymentParty {
    /// References a payment method by id.
    #[must_use]
    pub fn new(payment_method_id: impl Into<String>) -> Self {
        Self {
            payment_method_id: payment_method_id.into(),
            name: None,
            method_type: None,
        }
    }
}

/// Fee charged by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// Fee in minor currency units
    pub amount: u64,
    /// Human-readable rate, e.g. `"0.5%"`
    pub rate: String,
}

/// A status change recorded on a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Status entered
    pub status: String,
    /// When the status was entered (RFC 3339)
    #[serde(default)]
    pub timestamp: String,
    /// Provider explanation
    #[serde(default)]
    pub detail: String,
}

/// Refund issued against a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    pub id: String,
    pub payment_id: String,
    /// Refunded amount in minor currency units
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

/// A payment as reported by the provider.
///
/// `timeline` is append-only and chronologically ordered by the provider;
/// it is exposed exactly in the order received. Only `id` and the
/// fields that give the payment its meaning are required; stamped and
/// echoed fields default when the provider leaves them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    /// Always `"payment"`
    #[serde(default)]
    pub object: String,
    pub status: PaymentStatus,
    /// Amount in minor currency units
    pub amount: u64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Rail requested at creation
    pub rail: Rail,
    /// Rail the provider actually used, once it has picked one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rail_selected: Option<Rail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: PaymentParty,
    pub destination: PaymentParty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub ledger_entry_ids: Vec<String>,
    #[serde(default)]
    pub refunds: Vec<Refund>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
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

/// Body of `POST /payments`.
///
/// # Example
///
/// ```
/// use fetcherpay::types::{CreatePaymentRequest, Rail};
///
/// let request = CreatePaymentRequest::new(10_000, "pm_bank_123", "pm_merchant_456")
///     .with_currency("USD")
///     .with_rail(Rail::Auto);
/// assert_eq!(request.amount, 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePaymentRequest {
    /// Amount in minor currency units
    pub amount: u64,
    /// ISO 4217 currency code; the provider applies its default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rail: Option<Rail>,
    /// Rails to try, in order, if the first choice is unavailable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rail_fallback_order: Option<Vec<Rail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: PaymentParty,
    pub destination: PaymentParty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreatePaymentRequest {
    /// Creates a request moving `amount` between two payment methods.
    #[must_use]
    pub fn new(
        amount: u64,
        source_payment_method_id: impl Into<String>,
        destination_payment_method_id: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: None,
            rail: None,
            rail_fallback_order: None,
            description: None,
            source: PaymentParty::new(source_payment_method_id),
            destination: PaymentParty::new(destination_payment_method_id),
            metadata: None,
        }
    }

    /// Sets the currency code.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Requests a specific rail.
    #[must_use]
    pub fn with_rail(mut self, rail: Rail) -> Self {
        self.rail = Some(rail);
        self
    }

    /// Sets the fallback rail order.
    #[must_use]
    pub fn with_rail_fallback_order(mut self, rails: Vec<Rail>) -> Self {
        self.rail_fallback_order = Some(rails);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Body of `POST /payments/{id}/cancel`. Serializes to `{}` without a reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CancelPaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Body of `POST /payments/{id}/refund`.
///
/// An absent `amount` refunds the remaining balance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefundPaymentRequest {
    /// Partial amount in minor currency units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Filters for `GET /payments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentListParams {
    #[serde(flatten)]
    pub page: PaginationParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rail: Option<Rail>,
    /// Only payments created after this instant (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<String>,
    /// Only payments created before this instant (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<String>,
}
