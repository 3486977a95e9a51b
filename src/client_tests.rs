use serde_json::json;

use super::*;
use crate::test_fixtures::{MockClient, client, payment_json};
use crate::types::{CreatePaymentRequest, PaymentStatus, Rail};

mod environment {
    use super::*;

    #[test]
    fn defaults_to_sandbox() {
        assert_eq!(Environment::default(), Environment::Sandbox);
        assert_eq!(Environment::default().base_url(), SANDBOX_BASE_URL);
    }

    #[test]
    fn production_selects_live_url() {
        assert_eq!(
            Environment::Production.base_url(),
            "https://api.fetcherpay.com/v1"
        );
    }

    #[test]
    fn only_exact_production_name_selects_production() {
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("sandbox"), Environment::Sandbox);
        assert_eq!(Environment::from_name("Production"), Environment::Sandbox);
        assert_eq!(Environment::from_name("prod"), Environment::Sandbox);
        assert_eq!(Environment::from_name(""), Environment::Sandbox);
    }

    #[test]
    fn display_round_trips_through_from_name() {
        for env in [Environment::Sandbox, Environment::Production] {
            assert_eq!(Environment::from_name(&env.to_string()), env);
        }
    }
}

mod config {
    use super::*;

    #[test]
    fn new_applies_defaults() {
        let config = ClientConfig::new("fp_test_key");

        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.base_url, None);
        assert_eq!(config.timeout, Duration::from_millis(30_000));
    }

    #[test]
    fn base_url_follows_environment() {
        let config = ClientConfig::new("key").with_environment(Environment::Production);

        assert_eq!(
            config.resolve_base_url().unwrap().as_str(),
            PRODUCTION_BASE_URL
        );
    }

    #[test]
    fn override_takes_precedence_over_environment() {
        let config = ClientConfig::new("key")
            .with_environment(Environment::Production)
            .with_base_url("http://localhost:4010/v1");

        assert_eq!(
            config.resolve_base_url().unwrap().as_str(),
            "http://localhost:4010/v1"
        );
    }

    #[test]
    fn unparseable_override_is_rejected() {
        let config = ClientConfig::new("key").with_base_url("not a url");

        let err = config.resolve_base_url().unwrap_err();

        assert!(matches!(err, Error::InvalidBaseUrl { url, .. } if url == "not a url"));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = ClientConfig::new("fp_live_very_secret");

        let debug = format!("{config:?}");

        assert!(!debug.contains("fp_live_very_secret"));
        assert!(debug.contains("<redacted>"));
    }
}

mod construction {
    use super::*;

    #[test]
    fn reqwest_backed_client_uses_configured_base_url() {
        let config = ClientConfig::new("key").with_environment(Environment::Production);

        let fp = FetcherPay::new(&config).unwrap();

        assert_eq!(fp.base_url().as_str(), PRODUCTION_BASE_URL);
    }

    #[test]
    fn invalid_override_fails_construction() {
        let config = ClientConfig::new("key").with_base_url("::");

        let result = FetcherPay::with_http_client(&config, MockClient::default());

        assert!(matches!(result, Err(Error::InvalidBaseUrl { .. })));
    }

    #[test]
    fn unusable_api_key_fails_construction() {
        let config = ClientConfig::new("key\r\nX-Injected: 1");

        let result = FetcherPay::with_http_client(&config, MockClient::default());

        assert!(matches!(result, Err(Error::InvalidApiKey)));
    }

    #[tokio::test]
    async fn requests_go_to_override_url() {
        let mock = MockClient::json(200, &payment_json("pay_1"));
        let config = ClientConfig::new("key").with_base_url("http://localhost:4010/v1");
        let fp = FetcherPay::with_http_client(&config, mock.clone()).unwrap();

        fp.payments().retrieve("pay_1").await.unwrap();

        assert_eq!(
            mock.last_request().url.as_str(),
            "http://localhost:4010/v1/payments/pay_1"
        );
    }
}

mod scenarios {
    use super::*;

    #[tokio::test]
    async fn create_payment_in_sandbox() {
        let mock = MockClient::json(201, &payment_json("pay_1"));
        let fp = client(mock.clone());
        let request = CreatePaymentRequest::new(10_000, "pm_bank_123", "pm_merchant_456")
            .with_currency("USD")
            .with_rail(Rail::Auto);

        let payment = fp.payments().create(&request, Some("order-42")).await.unwrap();

        assert!(!payment.id.is_empty());
        assert!(!matches!(payment.status, PaymentStatus::Other(_)));
        assert!(!payment.timeline.is_empty());
        assert!(
            mock.last_request()
                .url
                .as_str()
                .starts_with(SANDBOX_BASE_URL)
        );
    }

    #[tokio::test]
    async fn retrieve_missing_payment_reports_not_found() {
        let mock = MockClient::json(404, &json!({ "error": { "message": "Payment not found" } }));
        let fp = client(mock);

        let err = fp.payments().retrieve("pay_nope").await.unwrap_err();

        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn rejected_key_reports_authentication() {
        let mock = MockClient::json(401, &json!({ "error": { "message": "Invalid API key" } }));
        let fp = client(mock);

        let err = fp.ledger().retrieve_account("la_cash").await.unwrap_err();

        assert!(matches!(err, Error::Authentication { .. }));
    }

    #[test]
    fn verify_webhook_signature_delegates_to_hmac_check() {
        let fp = client(MockClient::default());
        let payload = br#"{"id":"evt_1"}"#;
        let signature = signature::compute_signature(payload, "whsec_abc123");

        assert!(fp.verify_webhook_signature(payload, &signature, "whsec_abc123"));
        assert!(!fp.verify_webhook_signature(payload, &signature, "whsec_other"));
    }
}
