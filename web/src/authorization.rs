/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use anyhow::{Context, Result};
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use gloex_core::consts::SESSION_COOKIE;
use gloex_core::policy::{Actor, Decision, require_authenticated};
use gloex_core::types::*;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: i32,
}

/// The resolved caller of a request, inserted as an extension by [`identify`].
#[derive(Clone, Debug)]
pub struct Caller {
    pub actor: Actor,
    pub user: Option<MUser>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Caller {
            actor: Actor::Anonymous,
            user: None,
        }
    }

    pub fn from_user(user: MUser) -> Self {
        Caller {
            actor: Actor::from(&user),
            user: Some(user),
        }
    }

    /// The signed-in user, or `AuthenticationRequired`.
    pub fn user(&self) -> WebResult<&MUser> {
        match (require_authenticated(&self.actor), &self.user) {
            (Decision::Allow, Some(user)) => Ok(user),
            _ => Err(WebError::AuthenticationRequired),
        }
    }
}

/// Resolves the session token, if any, into a [`Caller`]. Invalid or
/// expired tokens and deleted users resolve to an anonymous caller.
pub async fn identify(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> WebResult<Response> {
    let caller = match session_token(req.headers()) {
        Some(token) => match decode_jwt(&state, &token) {
            Ok(data) => EUser::find_by_id(data.claims.id)
                .one(&state.db)
                .await?
                .map(Caller::from_user)
                .unwrap_or_else(Caller::anonymous),
            Err(e) => {
                tracing::debug!("Ignoring invalid session token: {}", e);
                Caller::anonymous()
            }
        },
        None => Caller::anonymous(),
    };

    req.extensions_mut().insert(caller);
    Ok(next.run(req).await)
}

/// Reads a bearer token from the `Authorization` header, falling back to the session cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(header) = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        let mut parts = header.split_whitespace();
        if let (Some("Bearer"), Some(token)) = (parts.next(), parts.next()) {
            return Some(token.to_string());
        }
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

pub fn encode_jwt(state: &ServerState, id: i32) -> Result<String> {
    let now = Utc::now();
    let expire = Duration::hours(state.cli.session_ttl_hours);
    let exp = (now + expire).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claim = Claims { iat, exp, id };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(state.jwt_secret.as_ref()),
    )
    .context("Failed to generate token")
}

pub fn decode_jwt(
    state: &ServerState,
    jwt: &str,
) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    decode(
        jwt,
        &DecodingKey::from_secret(state.jwt_secret.as_ref()),
        &Validation::default(),
    )
}

pub fn session_cookie(state: &ServerState, token: &str) -> String {
    let secure = if state.cli.serve_url.starts_with("https://") {
        "; Secure"
    } else {
        ""
    };

    format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}{}",
        SESSION_COOKIE,
        token,
        state.cli.session_ttl_hours * 3600,
        secure
    )
}

pub fn expired_session_cookie() -> String {
    format!(
        "{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0",
        SESSION_COOKIE
    )
}

pub async fn update_last_login(db: &DatabaseConnection, user: MUser) -> Result<MUser> {
    let mut auser: AUser = user.into();

    auser.last_login_at = Set(Some(Utc::now().naive_utc()));
    auser
        .update(db)
        .await
        .context("Failed to update user last login")
}
