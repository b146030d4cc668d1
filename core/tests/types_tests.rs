/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for types and data structures

use clap::Parser;
use gloex_core::types::*;
use sea_orm::{DatabaseBackend, MockDatabase};

fn create_mock_cli() -> Cli {
    Cli::try_parse_from(["gloex-server", "--jwt-secret-file", "test_jwt"]).unwrap()
}

#[test]
fn test_cli_defaults() {
    let cli = create_mock_cli();

    assert_eq!(cli.log_level, "info");
    assert!(!cli.log_json);
    assert_eq!(cli.ip, "127.0.0.1");
    assert_eq!(cli.port, 3000);
    assert_eq!(cli.serve_url, "http://127.0.0.1:3000");
    assert_eq!(cli.session_ttl_hours, 336);
    assert_eq!(cli.media_root, "./media");
    assert_eq!(cli.max_upload_size, 5 * 1024 * 1024);
    assert!(cli.cors_origin.is_empty());
    assert!(!cli.disable_registration);
    assert!(cli.admin_username.is_none());
    assert_eq!(cli.jwt_secret_file, "test_jwt");
}

#[test]
fn test_cli_rejects_invalid_values() {
    assert!(Cli::try_parse_from(["gloex-server"]).is_err());
    assert!(
        Cli::try_parse_from(["gloex-server", "--jwt-secret-file", "s", "--port", "0"]).is_err()
    );
    assert!(
        Cli::try_parse_from([
            "gloex-server",
            "--jwt-secret-file",
            "s",
            "--session-ttl-hours",
            "0"
        ])
        .is_err()
    );
}

#[test]
fn test_cli_cors_origins() {
    let cli = Cli::try_parse_from([
        "gloex-server",
        "--jwt-secret-file",
        "s",
        "--cors-origin",
        "http://localhost:5173,https://gloex.example",
    ])
    .unwrap();

    assert_eq!(
        cli.cors_origin,
        vec!["http://localhost:5173", "https://gloex.example"]
    );
}

#[test]
fn test_server_state_creation() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::tariff::Model>::new()])
        .into_connection();

    let state = ServerState {
        db,
        cli: create_mock_cli(),
        jwt_secret: "secret".to_string(),
    };

    assert_eq!(state.cli.port, 3000);
    assert_eq!(state.jwt_secret, "secret");
    assert!(!state.cli.debug);
}

#[test]
fn test_message_response_serialization() {
    let response = MessageResponse::new("Successfully logged out.");
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value, serde_json::json!({"message": "Successfully logged out."}));

    let error: ErrorResponse = serde_json::from_str(r#"{"error": "Invalid JSON data."}"#).unwrap();
    assert_eq!(error.error, "Invalid JSON data.");
}
