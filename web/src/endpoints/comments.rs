/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::projects::{find_project, find_visible_project};
use crate::authorization::Caller;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use gloex_core::policy::can_delete_comment;
use gloex_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MakeCommentRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommentResponse {
    pub id: i32,
    pub content: String,
    pub username: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

impl CommentResponse {
    pub fn new(comment: MComment, author: Option<MUser>) -> Self {
        CommentResponse {
            id: comment.id,
            content: comment.content,
            username: author.map(|u| u.username).unwrap_or_default(),
            user_id: comment.user,
            created_at: comment.created_at.and_utc(),
        }
    }
}

pub async fn get_comments(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<i32>, PathRejection>,
) -> WebResult<Json<Vec<CommentResponse>>> {
    let Path(id) = path?;
    let (project, _) = find_visible_project(&state, &caller, id).await?;

    let comments = EComment::find()
        .filter(CComment::Project.eq(project.id))
        .order_by_asc(CComment::CreatedAt)
        .order_by_asc(CComment::Id)
        .find_also_related(entity::user::Entity)
        .all(&state.db)
        .await?;

    Ok(Json(
        comments
            .into_iter()
            .map(|(comment, author)| CommentResponse::new(comment, author))
            .collect(),
    ))
}

pub async fn post_comment(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<MakeCommentRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<CommentResponse>)> {
    let user = caller.user()?;
    let Path(id) = path?;
    let (project, _) = find_visible_project(&state, &caller, id).await?;

    let Json(body) = payload?;
    let content = body
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| WebError::bad_request("Comment content is required."))?;

    let acomment = AComment {
        project: Set(project.id),
        user: Set(user.id),
        content: Set(content),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    let comment = acomment.insert(&state.db).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse::new(comment, Some(user.clone()))),
    ))
}

pub async fn delete_comment(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> WebResult<StatusCode> {
    caller.user()?;
    let Path((project_id, comment_id)) = path?;

    let comment = EComment::find_by_id(comment_id)
        .filter(CComment::Project.eq(project_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Comment not found."))?;

    let (project, _) = find_project(&state, project_id).await?;

    WebError::check(
        can_delete_comment(&caller.actor, comment.user, project.user),
        "You do not have permission to delete this comment.",
        "Comment not found.",
    )?;

    EComment::delete_by_id(comment.id).exec(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
