//! Tests for the run module.

use std::sync::{Arc, Mutex};

use fetcherpay::ClientConfig;
use fetcherpay::config::PageArgs;
use fetcherpay::transport::{HttpError, HttpRequest, HttpResponse};
use http::{Method, StatusCode};

use super::*;

/// Answers every request with one canned response and records the requests.
#[derive(Clone)]
struct CannedClient {
    status: StatusCode,
    body: Vec<u8>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl CannedClient {
    fn new(status: u16, body: &Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: serde_json::to_vec(body).unwrap(),
            requests: Arc::default(),
        }
    }

    fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl HttpClient for CannedClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        Ok(HttpResponse::with_status(self.status, self.body.clone()))
    }
}

fn client(http: CannedClient) -> FetcherPay<CannedClient> {
    FetcherPay::with_http_client(&ClientConfig::new("fp_test_key"), http).unwrap()
}

mod run_command {
    use super::*;

    #[tokio::test]
    async fn payments_get_renders_provider_json() {
        let payment = json!({
            "id": "pay_1",
            "object": "payment",
            "status": "settled",
            "amount": 100,
            "currency": "USD",
            "rail": "auto",
            "rail_selected": "rtp",
            "source": { "payment_method_id": "pm_a" },
            "destination": { "payment_method_id": "pm_b" },
            "created_at": "2026-02-18T20:00:00Z",
            "updated_at": "2026-02-18T20:00:01Z"
        });
        let http = CannedClient::new(200, &payment);
        let fp = client(http.clone());
        let command = Command::Payments {
            command: PaymentsCommand::Get { id: "pay_1".to_string() },
        };

        let output = run_command(&fp, command).await.unwrap();

        assert_eq!(output["id"], "pay_1");
        assert_eq!(output["rail_selected"], "rtp");
        assert_eq!(http.last_request().url.path(), "/v1/payments/pay_1");
    }

    #[tokio::test]
    async fn delete_renders_confirmation() {
        let http = CannedClient::new(200, &json!({}));
        let fp = client(http.clone());
        let command = Command::Webhooks {
            command: WebhooksCommand::Delete { id: "we_1".to_string() },
        };

        let output = run_command(&fp, command).await.unwrap();

        assert_eq!(output, json!({ "id": "we_1", "deleted": true }));
        assert_eq!(http.last_request().method, Method::DELETE);
    }

    #[tokio::test]
    async fn list_passes_page_flags_through() {
        let http = CannedClient::new(200, &json!({ "data": [], "has_more": false }));
        let fp = client(http.clone());
        let command = Command::Ledger {
            command: LedgerCommand::Accounts {
                page: PageArgs {
                    limit: Some(3),
                    cursor: None,
                },
                account_type: None,
            },
        };

        let output = run_command(&fp, command).await.unwrap();

        assert_eq!(output["has_more"], false);
        assert_eq!(http.last_request().url.query(), Some("limit=3"));
    }

    #[tokio::test]
    async fn api_error_is_propagated() {
        let http = CannedClient::new(404, &json!({ "error": { "message": "No such entry" } }));
        let fp = client(http);
        let command = Command::Ledger {
            command: LedgerCommand::Entry { id: "le_missing".to_string() },
        };

        let err = run_command(&fp, command).await.unwrap_err();

        assert!(matches!(err, RunError::Api(fetcherpay::Error::NotFound { .. })));
        assert_eq!(err.to_string(), "No such entry");
    }

    #[tokio::test]
    async fn offline_commands_are_refused() {
        let http = CannedClient::new(200, &json!({}));
        let fp = client(http.clone());
        let command = Command::Init {
            output: "fetcherpay.toml".into(),
        };

        let result = run_command(&fp, command).await;

        assert!(matches!(result, Err(RunError::Offline)));
        assert!(http.requests.lock().unwrap().is_empty());
    }
}

mod verify_payload {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const BODY: &[u8] = br#"{"id":"evt_1","type":"payment.settled"}"#;

    fn payload_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(BODY).unwrap();
        file
    }

    #[test]
    fn accepts_matching_signature() {
        let file = payload_file();
        let sig = signature::compute_signature(BODY, "whsec_abc");

        assert!(verify_payload(file.path(), "whsec_abc", &sig).unwrap());
    }

    #[test]
    fn rejects_wrong_secret() {
        let file = payload_file();
        let sig = signature::compute_signature(BODY, "whsec_abc");

        assert!(!verify_payload(file.path(), "whsec_other", &sig).unwrap());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = verify_payload(Path::new("no_such_payload_12345.json"), "s", "sig");

        assert!(matches!(result, Err(RunError::PayloadRead { .. })));
    }
}
