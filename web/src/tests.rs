/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::*;
use crate::endpoints::auth::{CurrentUserResponse, MakeUserRequest};
use crate::endpoints::service_requests::parse_service_request;
use crate::error::WebError;
use axum::body::to_bytes;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use clap::Parser;
use gloex_core::policy::Decision;
use gloex_core::types::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};

fn create_mock_cli(debug: bool) -> Cli {
    let mut args = vec!["gloex-server", "--jwt-secret-file", "test_jwt"];
    if debug {
        args.push("--debug");
    }
    Cli::try_parse_from(args).unwrap()
}

fn create_mock_state() -> ServerState {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::user::Model>::new()])
        .into_connection();

    ServerState {
        db,
        cli: create_mock_cli(true),
        jwt_secret: "unit-test-secret".to_string(),
    }
}

async fn error_body(err: WebError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn valid_service_request() -> serde_json::Map<String, Value> {
    json!({
        "service_type": "build_website",
        "country": "Rwanda",
        "city": "Kigali",
        "organization_type": "company",
        "organization_name": "Acme Ltd",
        "preferred_language": "English",
        "job_description": "A shop with online payments.",
        "primary_phone": "+250788000000",
        "primary_email": "client@example.com",
        "budget_range": "50k_100k",
        "terms_accepted": true
    })
    .as_object()
    .unwrap()
    .clone()
}

#[tokio::test]
async fn test_error_status_mapping() {
    let (status, body) = error_body(WebError::AuthenticationRequired).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({"error": "Authentication required."}));

    let (status, body) = error_body(WebError::InvalidCredentials).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials.");

    let (status, _) = error_body(WebError::username_taken()).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = error_body(WebError::method_not_allowed("Only POST allowed")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Only POST allowed");

    let (status, body) =
        error_body(WebError::Internal(anyhow::anyhow!("disk on fire"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "An unexpected error occurred.");
}

#[test]
fn test_check_maps_decisions() {
    assert!(WebError::check(Decision::Allow, "denied", "hidden").is_ok());

    match WebError::check(Decision::AuthenticationRequired, "denied", "hidden") {
        Err(WebError::AuthenticationRequired) => {}
        other => panic!("unexpected result: {:?}", other),
    }

    match WebError::check(Decision::Deny, "denied", "hidden") {
        Err(WebError::Forbidden(msg)) => assert_eq!(msg, "denied"),
        other => panic!("unexpected result: {:?}", other),
    }

    match WebError::check(Decision::Hidden, "denied", "hidden") {
        Err(WebError::NotFound(msg)) => assert_eq!(msg, "hidden"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_session_token_sources() {
    let mut headers = HeaderMap::new();
    assert_eq!(session_token(&headers), None);

    headers.insert(
        COOKIE,
        HeaderValue::from_static("theme=dark; gloex_session=abc.def.ghi; other=1"),
    );
    assert_eq!(session_token(&headers).as_deref(), Some("abc.def.ghi"));

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
    assert_eq!(session_token(&headers).as_deref(), Some("tok"));

    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static("gloex_session="));
    assert_eq!(session_token(&headers), None);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
    assert_eq!(session_token(&headers), None);
}

#[test]
fn test_jwt_roundtrip() {
    let state = create_mock_state();

    let token = encode_jwt(&state, 42).unwrap();
    let data = decode_jwt(&state, &token).unwrap();
    assert_eq!(data.claims.id, 42);
    assert!(data.claims.exp > data.claims.iat);

    let other = ServerState {
        jwt_secret: "another-secret".to_string(),
        ..create_mock_state()
    };
    assert!(decode_jwt(&other, &token).is_err());
    assert!(decode_jwt(&state, "not-a-token").is_err());
}

#[test]
fn test_session_cookies() {
    let state = create_mock_state();

    let cookie = session_cookie(&state, "tok");
    assert!(cookie.starts_with("gloex_session=tok;"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains(&format!("Max-Age={}", 336 * 3600)));
    assert!(!cookie.contains("Secure"));

    let expired = expired_session_cookie();
    assert!(expired.starts_with("gloex_session=;"));
    assert!(expired.contains("Max-Age=0"));
}

#[test]
fn test_caller_user() {
    assert!(matches!(
        Caller::anonymous().user(),
        Err(WebError::AuthenticationRequired)
    ));

    let user = entity::user::Model {
        id: 7,
        username: "alice".to_string(),
        email: String::new(),
        password: "hash".to_string(),
        is_staff: false,
        last_login_at: None,
        created_at: chrono::Utc::now().naive_utc(),
    };
    let caller = Caller::from_user(user);
    assert_eq!(caller.user().unwrap().id, 7);

    let detached = Caller {
        actor: gloex_core::policy::Actor::Anonymous,
        ..caller
    };
    assert!(detached.user().is_err());
}

#[test]
fn test_cors_layer_configuration() {
    let state = create_mock_state();
    let _ = crate::cors_layer(&state);

    let state = ServerState {
        cli: create_mock_cli(false),
        ..create_mock_state()
    };
    let _ = crate::cors_layer(&state);
}

#[test]
fn test_register_request_defaults() {
    let request: MakeUserRequest = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
    assert_eq!(request.username.as_deref(), Some("alice"));
    assert!(request.password.is_none());
    assert!(request.email.is_none());
}

#[test]
fn test_anonymous_user_response() {
    let res = CurrentUserResponse::Anonymous {
        is_authenticated: false,
    };
    assert_eq!(
        serde_json::to_value(res).unwrap(),
        json!({"is_authenticated": false})
    );
}

fn service_request_error(data: &serde_json::Map<String, Value>) -> String {
    match parse_service_request(data) {
        Err(WebError::BadRequest(msg)) => msg,
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected a validation error"),
    }
}

#[test]
fn test_service_request_required_fields() {
    assert!(parse_service_request(&valid_service_request()).is_ok());

    let mut data = valid_service_request();
    data.remove("primary_email");
    assert_eq!(
        service_request_error(&data),
        "Missing required field: primary_email"
    );

    let mut data = valid_service_request();
    data.insert("country".to_string(), json!(""));
    data.insert("city".to_string(), json!(null));
    assert_eq!(service_request_error(&data), "Missing required field: country");

    let mut data = valid_service_request();
    data.insert("terms_accepted".to_string(), json!(false));
    assert_eq!(
        service_request_error(&data),
        "Missing required field: terms_accepted"
    );

    let mut data = valid_service_request();
    data.insert("terms_accepted".to_string(), json!("false"));
    assert_eq!(
        service_request_error(&data),
        "You must accept the terms and conditions."
    );

    for accepted in [json!(true), json!("true"), json!(1), json!("on")] {
        let mut data = valid_service_request();
        data.insert("terms_accepted".to_string(), accepted);
        assert!(parse_service_request(&data).is_ok());
    }
}

#[test]
fn test_service_request_field_validation() {
    let mut data = valid_service_request();
    data.insert("budget_range".to_string(), json!("a_lot"));
    assert_eq!(
        service_request_error(&data),
        "`a_lot` is not a valid choice for budget_range."
    );

    let mut data = valid_service_request();
    data.insert("primary_email".to_string(), json!("nope"));
    assert_eq!(
        service_request_error(&data),
        "Enter a valid email address for primary_email."
    );

    let mut data = valid_service_request();
    data.insert("due_date".to_string(), json!("next week"));
    assert!(service_request_error(&data).contains("due_date"));

    let mut data = valid_service_request();
    data.insert("primary_phone".to_string(), json!("1".repeat(21)));
    assert!(service_request_error(&data).contains("primary_phone"));

    let mut data = valid_service_request();
    data.insert("due_date".to_string(), json!("2026-12-24"));
    data.insert(
        "job_attachment_url".to_string(),
        json!("https://drive.example.com/brief.pdf"),
    );
    assert!(parse_service_request(&data).is_ok());
}

#[tokio::test]
async fn test_cors_preflight_allows_credentials() {
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    let router = crate::create_router(Arc::new(create_mock_state()));
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/projects/")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
}
