//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::{
    Cli, Command, LedgerCommand, PaymentMethodsCommand, PaymentsCommand, WebhooksCommand,
};
use crate::types::{EntryType, PaginationParams, PaymentMethodType, PaymentStatus, Rail};

#[test]
fn command_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

mod global_options {
    use super::*;

    #[test]
    fn parse_client_options() {
        let cli = Cli::parse_from_iter([
            "fetcherpay",
            "--api-key",
            "fp_test_key",
            "--environment",
            "production",
            "--base-url",
            "http://localhost:4010/v1",
            "--timeout-ms",
            "5000",
            "payments",
            "get",
            "pay_1",
        ]);

        assert_eq!(cli.api_key.as_deref(), Some("fp_test_key"));
        assert_eq!(cli.environment.as_deref(), Some("production"));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:4010/v1"));
        assert_eq!(cli.timeout_ms, Some(5000));
    }

    #[test]
    fn global_options_accepted_after_subcommand() {
        let cli = Cli::parse_from_iter([
            "fetcherpay",
            "webhooks",
            "list",
            "--api-key",
            "fp_test_key",
            "-v",
            "-c",
            "/etc/fetcherpay.toml",
        ]);

        assert_eq!(cli.api_key.as_deref(), Some("fp_test_key"));
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/fetcherpay.toml")));
    }

    #[test]
    fn defaults_when_not_specified() {
        let cli = Cli::parse_from_iter(["fetcherpay", "ledger", "accounts"]);

        assert!(cli.timeout_ms.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }
}

mod init_command {
    use super::*;

    #[test]
    fn parse_init_with_default_output() {
        let cli = Cli::parse_from_iter(["fetcherpay", "init"]);

        assert!(cli.is_offline());
        match cli.command {
            Command::Init { output } => {
                assert_eq!(output, PathBuf::from("fetcherpay.toml"));
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn parse_init_with_custom_output() {
        let cli = Cli::parse_from_iter(["fetcherpay", "init", "-o", "/custom/path/config.toml"]);

        match cli.command {
            Command::Init { output } => {
                assert_eq!(output, PathBuf::from("/custom/path/config.toml"));
            }
            _ => panic!("Expected Init command"),
        }
    }
}

mod verify_command {
    use super::*;

    #[test]
    fn parse_verify() {
        let cli = Cli::parse_from_iter([
            "fetcherpay",
            "verify",
            "body.json",
            "--secret",
            "whsec_abc",
            "--signature",
            "deadbeef",
        ]);

        assert!(cli.is_offline());
        match cli.command {
            Command::Verify {
                payload,
                secret,
                signature,
            } => {
                assert_eq!(payload, PathBuf::from("body.json"));
                assert_eq!(secret, "whsec_abc");
                assert_eq!(signature, "deadbeef");
            }
            _ => panic!("Expected Verify command"),
        }
    }

    #[test]
    fn api_commands_are_not_offline() {
        let cli = Cli::parse_from_iter(["fetcherpay", "payments", "get", "pay_1"]);

        assert!(!cli.is_offline());
    }
}

mod payments_command {
    use super::*;

    #[test]
    fn parse_list_filters() {
        let cli = Cli::parse_from_iter([
            "fetcherpay",
            "payments",
            "list",
            "--limit",
            "10",
            "--cursor",
            "cur_abc",
            "--status",
            "settled",
            "--rail",
            "fednow",
            "--created-after",
            "2026-01-01T00:00:00Z",
        ]);

        match cli.command {
            Command::Payments {
                command:
                    PaymentsCommand::List {
                        page,
                        status,
                        rail,
                        created_after,
                        created_before,
                    },
            } => {
                assert_eq!(
                    PaginationParams::from(page),
                    PaginationParams::new().with_limit(10).with_cursor("cur_abc")
                );
                assert_eq!(status, Some(PaymentStatus::Settled));
                assert_eq!(rail, Some(Rail::Other("fednow".to_string())));
                assert_eq!(created_after.as_deref(), Some("2026-01-01T00:00:00Z"));
                assert!(created_before.is_none());
            }
            other => panic!("Expected payments list, got {other:?}"),
        }
    }

    #[test]
    fn parse_refund() {
        let cli = Cli::parse_from_iter([
            "fetcherpay",
            "payments",
            "refund",
            "pay_1",
            "--amount",
            "2500",
            "--idempotency-key",
            "refund-1",
        ]);

        match cli.command {
            Command::Payments {
                command:
                    PaymentsCommand::Refund {
                        id,
                        amount,
                        reason,
                        idempotency_key,
                    },
            } => {
                assert_eq!(id, "pay_1");
                assert_eq!(amount, Some(2500));
                assert!(reason.is_none());
                assert_eq!(idempotency_key.as_deref(), Some("refund-1"));
            }
            other => panic!("Expected payments refund, got {other:?}"),
        }
    }

    #[test]
    fn parse_cancel_with_reason() {
        let cli = Cli::parse_from_iter([
            "fetcherpay",
            "payments",
            "cancel",
            "pay_1",
            "--reason",
            "duplicate",
        ]);

        assert!(matches!(
            cli.command,
            Command::Payments {
                command: PaymentsCommand::Cancel { ref reason, .. }
            } if reason.as_deref() == Some("duplicate")
        ));
    }
}

mod resource_commands {
    use super::*;

    #[test]
    fn parse_payment_methods_list_type() {
        let cli = Cli::parse_from_iter(["fetcherpay", "payment-methods", "list", "--type", "card"]);

        assert!(matches!(
            cli.command,
            Command::PaymentMethods {
                command: PaymentMethodsCommand::List {
                    method_type: Some(PaymentMethodType::Card),
                    ..
                }
            }
        ));
    }

    #[test]
    fn parse_ledger_entries_filters() {
        let cli = Cli::parse_from_iter([
            "fetcherpay",
            "ledger",
            "entries",
            "--account-id",
            "la_cash",
            "--entry-type",
            "credit",
        ]);

        match cli.command {
            Command::Ledger {
                command:
                    LedgerCommand::Entries {
                        account_id,
                        payment_id,
                        entry_type,
                        ..
                    },
            } => {
                assert_eq!(account_id.as_deref(), Some("la_cash"));
                assert!(payment_id.is_none());
                assert_eq!(entry_type, Some(EntryType::Credit));
            }
            other => panic!("Expected ledger entries, got {other:?}"),
        }
    }

    #[test]
    fn parse_ledger_entry() {
        let cli = Cli::parse_from_iter(["fetcherpay", "ledger", "entry", "le_1"]);

        assert!(matches!(
            cli.command,
            Command::Ledger { command: LedgerCommand::Entry { ref id } } if id == "le_1"
        ));
    }

    #[test]
    fn parse_webhooks_delete() {
        let cli = Cli::parse_from_iter(["fetcherpay", "webhooks", "delete", "we_1"]);

        assert!(matches!(
            cli.command,
            Command::Webhooks { command: WebhooksCommand::Delete { ref id } } if id == "we_1"
        ));
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        let result = <Cli as clap::Parser>::try_parse_from(["fetcherpay", "payments"]);

        assert!(result.is_err());
    }
}
