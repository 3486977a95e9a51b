//! Payment methods: bank accounts, cards and USDC wallets.

use serde::{Deserialize, Serialize};

use super::{Metadata, PaginationParams};

string_enum! {
    /// Discriminator selecting which details payload is populated.
    PaymentMethodType {
        BankAccount => "bank_account",
        Card => "card",
        UsdcWallet => "usdc_wallet",
    }
}

string_enum! {
    /// Usability of a payment method.
    PaymentMethodStatus {
        Active => "active",
        Inactive => "inactive",
        /// The holder must complete verification first
        VerificationRequired => "verification_required",
    }
}

string_enum! {
    /// Kind of bank account.
    BankAccountType {
        Checking => "checking",
        Savings => "savings",
    }
}

/// Masked bank account details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub account_type: BankAccountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    pub routing_number_last4: String,
    pub account_number_last4: String,
}

/// Masked card details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub brand: String,
    pub last4: String,
    pub exp_month: u8,
    pub exp_year: u16,
}

/// A USDC wallet on a supported chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsdcWallet {
    pub address: String,
    /// Chain name, e.g. `"ethereum"` or `"polygon"`
    pub network: String,
}

/// A payment method as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    /// Always `"payment_method"`
    #[serde(default)]
    pub object: String,
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    pub status: PaymentMethodStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usdc_wallet: Option<UsdcWallet>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub created_at: String,
    /// Fields this client version does not model, kept as received
    #[serde(flatten)]
    pub extra: Metadata,
}

/// The details payload selected by a payment method's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethodDetails<'a> {
    BankAccount(&'a BankAccount),
    Card(&'a Card),
    UsdcWallet(&'a UsdcWallet),
}

impl PaymentMethod {
    /// Returns the payload matching `method_type`.
    ///
    /// `None` when the type is unknown to this client or the matching
    /// payload is missing; payloads for other types are never returned.
    #[must_use]
    pub fn details(&self) -> Option<PaymentMethodDetails<'_>> {
        match self.method_type {
            PaymentMethodType::BankAccount => {
                self.bank_account.as_ref().map(PaymentMethodDetails::BankAccount)
            }
            PaymentMethodType::Card => self.card.as_ref().map(PaymentMethodDetails::Card),
            PaymentMethodType::UsdcWallet => {
                self.usdc_wallet.as_ref().map(PaymentMethodDetails::UsdcWallet)
            }
            PaymentMethodType::Other(_) => None,
        }
    }
}

/// Raw bank account details for registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBankAccount {
    pub account_number: String,
    pub routing_number: String,
    pub account_type: BankAccountType,
}

/// Raw card details for registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCard {
    pub number: String,
    pub exp_month: u8,
    pub exp_year: u16,
    pub cvc: String,
}

/// Wallet details for registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUsdcWallet {
    pub address: String,
    pub network: String,
}

/// The payment method to register; exactly one payload is sent, keyed by
/// its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NewPaymentMethod {
    BankAccount { bank_account: NewBankAccount },
    Card { card: NewCard },
    UsdcWallet { usdc_wallet: NewUsdcWallet },
}

/// Body of `POST /payment-methods`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePaymentMethodRequest {
    #[serde(flatten)]
    pub method: NewPaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreatePaymentMethodRequest {
    /// Creates a request without metadata.
    #[must_use]
    pub const fn new(method: NewPaymentMethod) -> Self {
        Self {
            method,
            metadata: None,
        }
    }

    /// Attaches metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Filters for `GET /payment-methods`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentMethodListParams {
    #[serde(flatten)]
    pub page: PaginationParams,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub method_type: Option<PaymentMethodType>,
}
