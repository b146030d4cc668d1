/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::*;
use gloex_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, SqlErr};
use serde_json::{Value, json};
use web::endpoints::likes::insert_like;

#[tokio::test]
async fn test_like_toggle() {
    let app = create_test_app().await;
    let (_, owner) = register(&app, "alice").await;
    let (_, fan) = register(&app, "bob").await;
    let project = create_project(&app, &owner, "Likeable", true).await;
    let url = format!("/api/projects/{}/like/", project["id"]);

    let response = app.server.post(&url).authorization_bearer(&fan).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"action": "liked", "likes_count": 1})
    );

    let response = app.server.post(&url).authorization_bearer(&owner).await;
    assert_eq!(response.json::<Value>()["likes_count"], 2);

    let detail = app
        .server
        .get(&format!("/api/projects/{}/", project["id"]))
        .authorization_bearer(&fan)
        .await
        .json::<Value>();
    assert_eq!(detail["likes_count"], 2);
    assert_eq!(detail["user_has_liked"], true);

    let response = app.server.post(&url).authorization_bearer(&fan).await;
    assert_eq!(
        response.json::<Value>(),
        json!({"action": "unliked", "likes_count": 1})
    );

    let listed = app.server.get("/api/projects/").await.json::<Vec<Value>>();
    assert_eq!(listed[0]["likes_count"], 1);
}

#[tokio::test]
async fn test_like_requires_login_and_post() {
    let app = create_test_app().await;
    let (_, owner) = register(&app, "alice").await;
    let project = create_project(&app, &owner, "Likeable", true).await;
    let url = format!("/api/projects/{}/like/", project["id"]);

    app.server
        .post(&url)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let response = app.server.get(&url).authorization_bearer(&owner).await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.json::<Value>(), json!({"error": "Only POST allowed"}));

    app.server
        .post("/api/projects/999/like/")
        .authorization_bearer(&owner)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_like_private_project_hidden() {
    let app = create_test_app().await;
    let (_, owner) = register(&app, "alice").await;
    let (_, other) = register(&app, "bob").await;
    let project = create_project(&app, &owner, "Private", false).await;
    let url = format!("/api/projects/{}/like/", project["id"]);

    app.server
        .post(&url)
        .authorization_bearer(&other)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    app.server
        .post(&url)
        .authorization_bearer(&owner)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_comments() {
    let app = create_test_app().await;
    let (_, owner) = register(&app, "alice").await;
    let (bob_id, bob) = register(&app, "bob").await;
    let project = create_project(&app, &owner, "Discussed", true).await;
    let url = format!("/api/projects/{}/comments/", project["id"]);

    app.server
        .post(&url)
        .json(&json!({"content": "anonymous"}))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let response = app
        .server
        .post(&url)
        .authorization_bearer(&bob)
        .json(&json!({"content": "   "}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Comment content is required."
    );

    let response = app
        .server
        .post(&url)
        .authorization_bearer(&bob)
        .json(&json!({"content": "First!"}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let first = response.json::<Value>();
    assert_eq!(first["username"], "bob");
    assert_eq!(first["user_id"], bob_id);

    app.server
        .post(&url)
        .authorization_bearer(&owner)
        .json(&json!({"content": "Thanks"}))
        .await
        .assert_status(StatusCode::CREATED);

    let comments = app.server.get(&url).await.json::<Vec<Value>>();
    let contents: Vec<&str> = comments
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["First!", "Thanks"]);

    let detail = app
        .server
        .get(&format!("/api/projects/{}/", project["id"]))
        .await
        .json::<Value>();
    assert_eq!(detail["comments"][0]["content"], "Thanks");
}

#[tokio::test]
async fn test_delete_comment_permissions() {
    let app = create_test_app().await;
    let (_, owner) = register(&app, "alice").await;
    let (_, author) = register(&app, "bob").await;
    let (_, stranger) = register(&app, "carol").await;
    let project = create_project(&app, &owner, "Discussed", true).await;
    let other_project = create_project(&app, &owner, "Elsewhere", true).await;

    let comments_url = format!("/api/projects/{}/comments/", project["id"]);
    let mut ids = Vec::new();
    for content in ["one", "two"] {
        let comment = app
            .server
            .post(&comments_url)
            .authorization_bearer(&author)
            .json(&json!({"content": content}))
            .await
            .json::<Value>();
        ids.push(comment["id"].clone());
    }

    let wrong_project = format!(
        "/api/projects/{}/comments/{}/",
        other_project["id"], ids[0]
    );
    let response = app
        .server
        .delete(&wrong_project)
        .authorization_bearer(&author)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Comment not found.");

    let first = format!("/api/projects/{}/comments/{}/", project["id"], ids[0]);
    let second = format!("/api/projects/{}/comments/{}/", project["id"], ids[1]);

    let response = app
        .server
        .delete(&first)
        .authorization_bearer(&stranger)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<Value>()["error"],
        "You do not have permission to delete this comment."
    );

    let response = app.server.get(&first).authorization_bearer(&author).await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.json::<Value>()["error"],
        "Only DELETE method allowed."
    );

    app.server
        .delete(&first)
        .authorization_bearer(&author)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server
        .delete(&second)
        .authorization_bearer(&owner)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let remaining = app.server.get(&comments_url).await.json::<Vec<Value>>();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_resources() {
    let app = create_test_app().await;
    let (_, owner) = register(&app, "alice").await;
    let (_, other) = register(&app, "bob").await;
    let project = create_project(&app, &owner, "Documented", true).await;
    let url = format!("/api/projects/{}/resources/", project["id"]);

    let response = app
        .server
        .post(&url)
        .authorization_bearer(&other)
        .json(&json!({"name": "Docs", "resource_url": "https://docs.example.com"}))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["error"], "Permission denied.");

    let response = app
        .server
        .post(&url)
        .authorization_bearer(&owner)
        .json(&json!({"name": "Docs"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Missing required field: resource_url"
    );

    let response = app
        .server
        .post(&url)
        .authorization_bearer(&owner)
        .json(&json!({"name": "Docs", "resource_url": "ftp://docs"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = app
        .server
        .post(&url)
        .authorization_bearer(&owner)
        .json(&json!({"name": "Docs", "resource_url": "https://docs.example.com"}))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["name"], "Docs");

    let resources = app.server.get(&url).await.json::<Vec<Value>>();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0]["resource_url"], "https://docs.example.com");
}

#[tokio::test]
async fn test_duplicate_likes_store_one_row() {
    let app = create_test_app().await;
    let (_, owner) = register(&app, "alice").await;
    let (fan_id, _) = register(&app, "bob").await;
    let project = create_project(&app, &owner, "Popular", true).await;
    let project_id = project["id"].as_i64().unwrap() as i32;
    let db = &app.state.db;

    let (first, second) = tokio::join!(
        insert_like(db, project_id, fan_id),
        insert_like(db, project_id, fan_id)
    );
    let written = [first.unwrap(), second.unwrap()];
    assert_eq!(written.iter().filter(|w| **w).count(), 1);

    assert!(!insert_like(db, project_id, fan_id).await.unwrap());

    let duplicate = ALike {
        project: Set(project_id),
        user: Set(fan_id),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap_err();
    assert!(matches!(
        duplicate.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let stored = ELike::find()
        .filter(CLike::Project.eq(project_id))
        .filter(CLike::User.eq(fan_id))
        .count(db)
        .await
        .unwrap();
    assert_eq!(stored, 1);
}
