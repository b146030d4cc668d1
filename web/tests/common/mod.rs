/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::TestServer;
use axum_test::multipart::MultipartForm;
use chrono::Utc;
use clap::Parser;
use gloex_core::database::prepare_db;
use gloex_core::types::*;
use password_auth::generate_hash;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use web::create_router;

pub const PASSWORD: &str = "correct-horse-battery";

pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<ServerState>,
    pub media: TempDir,
}

pub fn create_test_cli(media_root: &str) -> Cli {
    Cli::try_parse_from([
        "gloex-server",
        "--jwt-secret-file",
        "unused",
        "--media-root",
        media_root,
        "--serve-url",
        "http://testserver",
    ])
    .unwrap()
}

/// Router backed by a migrated in-memory SQLite database.
pub async fn create_test_app() -> TestApp {
    let media = tempfile::tempdir().unwrap();
    let cli = create_test_cli(media.path().to_str().unwrap());

    // one connection, otherwise every pooled connection sees its own empty database
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    prepare_db(&db, &cli).await.unwrap();

    let state = Arc::new(ServerState {
        db,
        cli,
        jwt_secret: "integration-secret".to_string(),
    });

    let server = TestServer::new(create_router(Arc::clone(&state))).unwrap();

    TestApp {
        server,
        state,
        media,
    }
}

/// Registers `username` and returns its id and session token.
pub async fn register(app: &TestApp, username: &str) -> (i32, String) {
    let response = app
        .server
        .post("/api/register/")
        .json(&json!({
            "username": username,
            "password": PASSWORD,
            "email": format!("{}@example.com", username),
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let token = response.cookie("gloex_session").value().to_string();
    let body = response.json::<Value>();

    (body["id"].as_i64().unwrap() as i32, token)
}

pub async fn create_staff(app: &TestApp, username: &str) -> String {
    let now = Utc::now().naive_utc();
    AUser {
        username: Set(username.to_string()),
        email: Set(format!("{}@gloex.example", username)),
        password: Set(generate_hash(PASSWORD)),
        is_staff: Set(true),
        last_login_at: Set(None),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&app.state.db)
    .await
    .unwrap();

    let response = app
        .server
        .post("/api/login/")
        .json(&json!({"username": username, "password": PASSWORD}))
        .await;
    response.assert_status_ok();

    response.cookie("gloex_session").value().to_string()
}

pub async fn create_project(app: &TestApp, token: &str, title: &str, is_public: bool) -> Value {
    let mut form = MultipartForm::new()
        .add_text("title", title)
        .add_text("description", format!("About {}", title))
        .add_text("project_url", "https://example.com/demo")
        .add_text("project_type", "backend");

    if is_public {
        form = form.add_text("is_public", "on");
    }

    let response = app
        .server
        .post("/api/projects/")
        .authorization_bearer(token)
        .multipart(form)
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}
