/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::projects::{ProjectResponse, project_responses};
use crate::authorization::Caller;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use gloex_core::policy::can_see_private_portfolio;
use gloex_core::types::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

pub async fn get_portfolio(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<String>, PathRejection>,
) -> WebResult<Json<Vec<ProjectResponse>>> {
    let Path(username) = path?;

    let owner = EUser::find()
        .filter(CUser::Username.eq(username))
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("User not found."))?;

    let mut projects = EProjectPost::find().filter(CProjectPost::User.eq(owner.id));

    if !can_see_private_portfolio(&caller.actor, owner.id) {
        projects = projects.filter(CProjectPost::IsPublic.eq(true));
    }

    let projects = projects
        .order_by_desc(CProjectPost::CreatedAt)
        .order_by_desc(CProjectPost::Id)
        .all(&state.db)
        .await?
        .into_iter()
        .map(|p| (p, Some(owner.clone())))
        .collect();

    Ok(Json(project_responses(&state, projects).await?))
}
