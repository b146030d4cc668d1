/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Error as AnyhowError;
use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gloex_core::policy::Decision;
use gloex_core::types::ErrorResponse;
use sea_orm::DbErr;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    AuthenticationRequired,
    InvalidCredentials,
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    MethodNotAllowed(String),
    PayloadTooLarge,
    Database(DbErr),
    JsonParsing(JsonRejection),
    Multipart(String),
    Internal(AnyhowError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::AuthenticationRequired => write!(f, "Authentication required"),
            WebError::InvalidCredentials => write!(f, "Invalid credentials"),
            WebError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            WebError::MethodNotAllowed(msg) => write!(f, "Method Not Allowed: {}", msg),
            WebError::PayloadTooLarge => write!(f, "Payload too large"),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::Multipart(msg) => write!(f, "Multipart error: {}", msg),
            WebError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::Internal(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<QueryRejection> for WebError {
    fn from(err: QueryRejection) -> Self {
        WebError::BadRequest(err.body_text())
    }
}

impl From<PathRejection> for WebError {
    fn from(err: PathRejection) -> Self {
        tracing::debug!("Rejected path: {}", err.body_text());
        WebError::not_found("Not Found")
    }
}

impl From<MultipartRejection> for WebError {
    fn from(err: MultipartRejection) -> Self {
        WebError::Multipart(err.body_text())
    }
}

impl From<MultipartError> for WebError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            WebError::PayloadTooLarge
        } else {
            WebError::Multipart(err.body_text())
        }
    }
}

impl From<AnyhowError> for WebError {
    fn from(err: AnyhowError) -> Self {
        WebError::Internal(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            WebError::AuthenticationRequired => (
                StatusCode::FORBIDDEN,
                "Authentication required.".to_string(),
            ),
            WebError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials.".to_string())
            }
            WebError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            WebError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg),
            WebError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Uploaded data is too large.".to_string(),
            ),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
            WebError::JsonParsing(err) => {
                tracing::debug!("Rejected JSON body: {}", err);
                (StatusCode::BAD_REQUEST, "Invalid JSON data.".to_string())
            }
            WebError::Multipart(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid form data: {}", msg),
            ),
            WebError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn not_found(msg: &str) -> Self {
        WebError::NotFound(msg.to_string())
    }

    pub fn forbidden(msg: &str) -> Self {
        WebError::Forbidden(msg.to_string())
    }

    pub fn bad_request(msg: &str) -> Self {
        WebError::BadRequest(msg.to_string())
    }

    pub fn method_not_allowed(msg: &str) -> Self {
        WebError::MethodNotAllowed(msg.to_string())
    }

    pub fn project_not_found() -> Self {
        WebError::not_found("Project not found or you do not have permission.")
    }

    pub fn registration_disabled() -> Self {
        WebError::bad_request("Registration is disabled.")
    }

    pub fn username_taken() -> Self {
        WebError::Conflict("This username is already taken.".to_string())
    }

    /// Maps a policy decision, using `denied` for a known but unauthorized caller
    /// and `hidden` when the resource must appear absent.
    pub fn check(decision: Decision, denied: &str, hidden: &str) -> WebResult<()> {
        match decision {
            Decision::Allow => Ok(()),
            Decision::AuthenticationRequired => Err(WebError::AuthenticationRequired),
            Decision::Deny => Err(WebError::forbidden(denied)),
            Decision::Hidden => Err(WebError::not_found(hidden)),
        }
    }
}
