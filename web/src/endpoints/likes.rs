/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::projects::find_visible_project;
use crate::authorization::Caller;
use crate::error::WebResult;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use gloex_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LikeAction {
    Liked,
    Unliked,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LikeResponse {
    pub action: LikeAction,
    pub likes_count: u64,
}

/// Stores a like unless the (project, user) pair already has one.
/// Returns whether a row was written.
pub async fn insert_like(db: &DatabaseConnection, project: i32, user: i32) -> WebResult<bool> {
    let alike = ALike {
        project: Set(project),
        user: Set(user),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    let inserted = ELike::insert(alike)
        .on_conflict(
            OnConflict::columns([CLike::Project, CLike::User])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await;

    match inserted {
        Ok(rows) => Ok(rows > 0),
        Err(DbErr::RecordNotInserted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Removes the caller's like if present, otherwise adds one. A concurrent
/// duplicate insert is absorbed by the unique (project, user) index.
pub async fn post_like(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<i32>, PathRejection>,
) -> WebResult<Json<LikeResponse>> {
    let user = caller.user()?;
    let Path(id) = path?;
    let (project, _) = find_visible_project(&state, &caller, id).await?;

    let removed = ELike::delete_many()
        .filter(CLike::Project.eq(project.id))
        .filter(CLike::User.eq(user.id))
        .exec(&state.db)
        .await?;

    let action = if removed.rows_affected > 0 {
        LikeAction::Unliked
    } else {
        insert_like(&state.db, project.id, user.id).await?;
        LikeAction::Liked
    };

    let likes_count = ELike::find()
        .filter(CLike::Project.eq(project.id))
        .count(&state.db)
        .await?;

    Ok(Json(LikeResponse {
        action,
        likes_count,
    }))
}
