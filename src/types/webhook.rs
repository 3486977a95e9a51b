//! Webhook endpoints and the events delivered to them.

use serde::{Deserialize, Serialize};

use super::Metadata;

string_enum! {
    /// Delivery state of a webhook endpoint.
    WebhookStatus {
        Active => "active",
        Disabled => "disabled",
    }
}

/// A registered webhook endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEndpoint {
    pub id: String,
    /// Always `"webhook_endpoint"`
    #[serde(default)]
    pub object: String,
    /// Target URL deliveries are posted to
    pub url: String,
    /// Subscribed event types, e.g. `"payment.settled"`
    #[serde(default)]
    pub events: Vec<String>,
    pub status: WebhookStatus,
    /// Shared secret used to sign deliveries to this endpoint, when the
    /// response includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub created_at: String,
    /// Fields this client version does not model, kept as received
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Body of `POST /webhooks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateWebhookRequest {
    pub url: String,
    /// Event types to subscribe to; the provider default applies when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateWebhookRequest {
    /// Creates a request for `url` with default subscriptions.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            events: None,
            metadata: None,
        }
    }

    /// Subscribes to the given event types.
    #[must_use]
    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = Some(events.into_iter().map(Into::into).collect());
        self
    }
}

/// Body of `PUT /webhooks/{id}`. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateWebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// An event delivered to a webhook endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    /// Always `"event"`
    #[serde(default)]
    pub object: String,
    /// Event type, e.g. `"payment.settled"`
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub created_at: String,
    /// The resource snapshot the event refers to
    #[serde(default)]
    pub data: serde_json::Value,
}
