//! Shared fixtures for unit tests: a recording mock transport and canned
//! provider payloads.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use crate::client::{ClientConfig, FetcherPay};
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client returning a queue of canned results.
///
/// Clones share state, so a test can keep one handle and give the other to
/// the client under test.
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, HttpError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::default(),
        }
    }

    /// A client answering once with `status` and a JSON body.
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(vec![Ok(response(status, body))])
    }

    /// A client whose only call fails without a response.
    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests()
            .pop()
            .expect("no request was sent through the mock")
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Connection("mock exhausted".into())))
    }
}

/// Builds a response with a JSON body.
pub fn response(status: u16, body: &Value) -> HttpResponse {
    HttpResponse::with_status(
        http::StatusCode::from_u16(status).unwrap(),
        serde_json::to_vec(body).unwrap(),
    )
}

/// Sandbox client over `mock`.
pub fn client(mock: MockClient) -> FetcherPay<MockClient> {
    FetcherPay::with_http_client(&ClientConfig::new("fp_test_key"), mock).unwrap()
}

/// Decodes the JSON body of a recorded request.
pub fn request_json(req: &HttpRequest) -> Value {
    serde_json::from_slice(req.body.as_deref().expect("request has no body")).unwrap()
}

/// Returns the query string pairs of a recorded request.
pub fn query_pairs(req: &HttpRequest) -> Vec<(String, String)> {
    req.url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn list_json(items: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "data": items,
        "has_more": next_cursor.is_some(),
        "next_cursor": next_cursor,
    })
}

pub fn payment_json(id: &str) -> Value {
    json!({
        "id": id,
        "object": "payment",
        "status": "pending",
        "amount": 10000,
        "currency": "USD",
        "rail": "auto",
        "rail_selected": "ach",
        "description": "Invoice 1042",
        "source": { "payment_method_id": "pm_bank_123", "name": "Acme Corp", "type": "bank_account" },
        "destination": { "payment_method_id": "pm_merchant_456" },
        "fee": { "amount": 50, "rate": "0.5%" },
        "timeline": [
            { "status": "pending", "timestamp": "2026-02-18T20:00:00Z", "detail": "Payment created" },
            { "status": "authorized", "timestamp": "2026-02-18T20:00:02Z", "detail": "Funds authorized" }
        ],
        "ledger_entry_ids": ["le_1", "le_2"],
        "refunds": [],
        "idempotency_key": "order-42",
        "metadata": { "order_id": "1042", "tags": ["b2b"] },
        "created_at": "2026-02-18T20:00:00Z",
        "updated_at": "2026-02-18T20:00:02Z"
    })
}

pub fn payment_method_json(id: &str) -> Value {
    json!({
        "id": id,
        "object": "payment_method",
        "type": "bank_account",
        "status": "active",
        "bank_account": {
            "account_type": "checking",
            "bank_name": "First Bank",
            "routing_number_last4": "0021",
            "account_number_last4": "6789"
        },
        "metadata": {},
        "created_at": "2026-02-18T19:00:00Z"
    })
}

pub fn ledger_account_json(id: &str) -> Value {
    json!({
        "id": id,
        "object": "ledger_account",
        "name": "Operating Cash",
        "type": "asset",
        "currency": "USD",
        "balance": { "pending": 2500, "posted": 100000, "available": 97500 },
        "metadata": {},
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-02-18T20:00:02Z"
    })
}

pub fn ledger_entry_json(id: &str) -> Value {
    json!({
        "id": id,
        "object": "ledger_entry",
        "journal_id": "jrnl_1",
        "account_id": "la_cash",
        "payment_id": "pay_1",
        "entry_type": "debit",
        "amount": 10000,
        "currency": "USD",
        "status": "posted",
        "metadata": {},
        "created_at": "2026-02-18T20:00:02Z"
    })
}

pub fn webhook_endpoint_json(id: &str) -> Value {
    json!({
        "id": id,
        "object": "webhook_endpoint",
        "url": "https://merchant.example.com/hooks/fetcherpay",
        "events": ["payment.settled", "payment.failed"],
        "status": "active",
        "secret": "whsec_abc123",
        "metadata": {},
        "created_at": "2026-02-18T19:30:00Z"
    })
}

pub fn error_json(message: &str, param: &str, code: &str, error_type: &str) -> Value {
    json!({
        "error": { "message": message, "param": param, "code": code, "type": error_type }
    })
}
