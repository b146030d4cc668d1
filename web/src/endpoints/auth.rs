/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::{
    Caller, encode_jwt, expired_session_cookie, session_cookie, update_last_login,
};
use crate::error::{WebError, WebResult};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::http::header::{HeaderName, SET_COOKIE};
use axum::{Extension, Json};
use chrono::Utc;
use gloex_core::input::{validate_email, validate_username};
use gloex_core::types::*;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, SqlErr};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MakeUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MakeLoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub is_authenticated: bool,
}

impl From<&MUser> for UserResponse {
    fn from(user: &MUser) -> Self {
        UserResponse {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_staff: user.is_staff,
            is_authenticated: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum CurrentUserResponse {
    User(UserResponse),
    Anonymous { is_authenticated: bool },
}

type SessionResponse = (StatusCode, [(HeaderName, String); 1], Json<UserResponse>);

fn start_session(state: &ServerState, status: StatusCode, user: &MUser) -> WebResult<SessionResponse> {
    let token = encode_jwt(state, user.id)?;

    Ok((
        status,
        [(SET_COOKIE, session_cookie(state, &token))],
        Json(UserResponse::from(user)),
    ))
}

pub async fn post_register(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeUserRequest>, JsonRejection>,
) -> WebResult<SessionResponse> {
    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    let Json(body) = payload?;

    let (username, password) = match (body.username, body.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => {
            return Err(WebError::bad_request(
                "Username and password are required.",
            ));
        }
    };

    validate_username(&username).map_err(WebError::BadRequest)?;

    let email = body.email.unwrap_or_default().trim().to_string();
    if !email.is_empty() {
        validate_email("email", &email).map_err(WebError::BadRequest)?;
    }

    let existing = EUser::find()
        .filter(CUser::Username.eq(username.as_str()))
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(WebError::username_taken());
    }

    let now = Utc::now().naive_utc();
    let auser = AUser {
        username: Set(username),
        email: Set(email),
        password: Set(generate_hash(password)),
        is_staff: Set(false),
        last_login_at: Set(Some(now)),
        created_at: Set(now),
        ..Default::default()
    };

    let user = match auser.insert(&state.db).await {
        Ok(user) => user,
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            return Err(WebError::username_taken());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user = user.id, "Registered user {}", user.username);
    start_session(&state, StatusCode::CREATED, &user)
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeLoginRequest>, JsonRejection>,
) -> WebResult<SessionResponse> {
    let Json(body) = payload?;

    let (username, password) = match (body.username, body.password) {
        (Some(u), Some(p)) => (u, p),
        _ => return Err(WebError::InvalidCredentials),
    };

    let user = EUser::find()
        .filter(CUser::Username.eq(username))
        .one(&state.db)
        .await?
        .ok_or(WebError::InvalidCredentials)?;

    verify_password(password, &user.password).map_err(|_| WebError::InvalidCredentials)?;

    let user = update_last_login(&state.db, user).await?;
    start_session(&state, StatusCode::OK, &user)
}

pub async fn post_logout(
    Extension(caller): Extension<Caller>,
) -> WebResult<([(HeaderName, String); 1], Json<MessageResponse>)> {
    caller.user()?;

    Ok((
        [(SET_COOKIE, expired_session_cookie())],
        Json(MessageResponse::new("Successfully logged out.")),
    ))
}

pub async fn get_user(Extension(caller): Extension<Caller>) -> Json<CurrentUserResponse> {
    let res = match &caller.user {
        Some(user) => CurrentUserResponse::User(UserResponse::from(user)),
        None => CurrentUserResponse::Anonymous {
            is_authenticated: false,
        },
    };

    Json(res)
}
