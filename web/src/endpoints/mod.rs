/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod admin;
pub mod auth;
pub mod comments;
pub mod likes;
pub mod portfolio;
pub mod projects;
pub mod resources;
pub mod search;
pub mod service_requests;
pub mod tariffs;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use gloex_core::types::MessageResponse;

pub async fn handle_404() -> WebError {
    WebError::not_found("Not Found")
}

pub async fn get_health() -> WebResult<Json<MessageResponse>> {
    Ok(Json(MessageResponse::new("200 ALIVE")))
}

pub async fn only_post() -> WebError {
    WebError::method_not_allowed("Only POST requests allowed")
}

pub async fn only_get() -> WebError {
    WebError::method_not_allowed("Only GET requests are allowed.")
}

pub async fn only_delete() -> WebError {
    WebError::method_not_allowed("Only DELETE method allowed.")
}

pub async fn method_not_allowed() -> WebError {
    WebError::method_not_allowed("Method not allowed.")
}
