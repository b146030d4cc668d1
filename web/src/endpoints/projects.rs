/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::comments::CommentResponse;
use super::resources::ResourceResponse;
use crate::authorization::Caller;
use crate::error::{WebError, WebResult};
use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use entity::project_post::ProjectType;
use gloex_core::consts::*;
use gloex_core::input::{check_max_len, parse_checkbox, parse_choice, validate_http_url};
use gloex_core::media::{media_url, remove_media, screenshot_extension, store_screenshot};
use gloex_core::policy::{can_modify_project, can_view_project};
use gloex_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

pub(crate) const PROJECT_MODIFY_DENIED: &str = "You do not have permission to modify this project.";
pub(crate) const PROJECT_HIDDEN: &str = "Project not found or you do not have permission.";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub project_url: String,
    pub project_type: String,
    pub project_type_code: String,
    pub screenshot_url: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub user_id: i32,
    pub likes_count: i64,
    pub source_code_url: Option<String>,
    pub custom_field_name: Option<String>,
    pub custom_field_value: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectDetailResponse {
    #[serde(flatten)]
    pub project: ProjectResponse,
    pub resources: Vec<ResourceResponse>,
    pub comments: Vec<CommentResponse>,
    pub user_has_liked: bool,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_url: Option<String>,
    pub project_type: Option<String>,
    pub is_public: Option<bool>,
    pub source_code_url: Option<String>,
    pub custom_field_name: Option<String>,
    pub custom_field_value: Option<String>,
    pub screenshot_url_fallback: Option<String>,
}

/// Text fields and the optional screenshot of a multipart project form.
#[derive(Debug, Default)]
pub struct ProjectForm {
    pub fields: HashMap<String, String>,
    pub screenshot: Option<(String, Bytes)>,
}

fn screenshot_url(state: &ServerState, project: &MProjectPost) -> Option<String> {
    match &project.screenshot {
        Some(path) if !path.is_empty() => Some(media_url(&state.cli.serve_url, path)),
        _ => project
            .screenshot_url_fallback
            .clone()
            .filter(|url| !url.is_empty()),
    }
}

pub(crate) fn project_response(
    state: &ServerState,
    project: MProjectPost,
    username: String,
    likes_count: i64,
) -> ProjectResponse {
    ProjectResponse {
        screenshot_url: screenshot_url(state, &project),
        id: project.id,
        title: project.title,
        description: project.description,
        project_url: project.project_url,
        project_type: project.project_type.label().to_string(),
        project_type_code: project.project_type.code().to_string(),
        is_public: project.is_public,
        created_at: project.created_at.and_utc(),
        username,
        user_id: project.user,
        likes_count,
        source_code_url: project.source_code_url,
        custom_field_name: project.custom_field_name,
        custom_field_value: project.custom_field_value,
    }
}

async fn like_counts(db: &DatabaseConnection, ids: &[i32]) -> WebResult<HashMap<i32, i64>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let counts: Vec<(i32, i64)> = ELike::find()
        .select_only()
        .column(CLike::Project)
        .column_as(CLike::Id.count(), "likes_count")
        .filter(CLike::Project.is_in(ids.iter().copied()))
        .group_by(CLike::Project)
        .into_tuple()
        .all(db)
        .await?;

    Ok(counts.into_iter().collect())
}

/// Serializes a page of projects, fetching all like counts in one query.
pub(crate) async fn project_responses(
    state: &ServerState,
    projects: Vec<(MProjectPost, Option<MUser>)>,
) -> WebResult<Vec<ProjectResponse>> {
    let ids = projects.iter().map(|(p, _)| p.id).collect::<Vec<i32>>();
    let counts = like_counts(&state.db, &ids).await?;

    Ok(projects
        .into_iter()
        .map(|(project, owner)| {
            let likes_count = counts.get(&project.id).copied().unwrap_or(0);
            let username = owner.map(|u| u.username).unwrap_or_default();
            project_response(state, project, username, likes_count)
        })
        .collect())
}

pub(crate) async fn find_project(
    state: &ServerState,
    id: i32,
) -> WebResult<(MProjectPost, Option<MUser>)> {
    EProjectPost::find_by_id(id)
        .find_also_related(entity::user::Entity)
        .one(&state.db)
        .await?
        .ok_or_else(WebError::project_not_found)
}

/// Looks up a project, hiding private projects from everyone but their owner.
pub(crate) async fn find_visible_project(
    state: &ServerState,
    caller: &Caller,
    id: i32,
) -> WebResult<(MProjectPost, Option<MUser>)> {
    let (project, owner) = find_project(state, id).await?;
    WebError::check(
        can_view_project(&caller.actor, project.user, project.is_public),
        PROJECT_HIDDEN,
        PROJECT_HIDDEN,
    )?;

    Ok((project, owner))
}

async fn project_detail(
    state: &ServerState,
    caller: &Caller,
    project: MProjectPost,
    owner: Option<MUser>,
) -> WebResult<ProjectDetailResponse> {
    let resources = EProjectResource::find()
        .filter(CProjectResource::Project.eq(project.id))
        .order_by_asc(CProjectResource::Id)
        .all(&state.db)
        .await?;

    let comments = EComment::find()
        .filter(CComment::Project.eq(project.id))
        .order_by_desc(CComment::CreatedAt)
        .order_by_desc(CComment::Id)
        .find_also_related(entity::user::Entity)
        .all(&state.db)
        .await?;

    let likes_count = ELike::find()
        .filter(CLike::Project.eq(project.id))
        .count(&state.db)
        .await? as i64;

    let user_has_liked = match caller.actor.id() {
        Some(user_id) => {
            ELike::find()
                .filter(CLike::Project.eq(project.id))
                .filter(CLike::User.eq(user_id))
                .count(&state.db)
                .await?
                > 0
        }
        None => false,
    };

    let username = owner.map(|u| u.username).unwrap_or_default();

    Ok(ProjectDetailResponse {
        project: project_response(state, project, username, likes_count),
        resources: resources.into_iter().map(ResourceResponse::from).collect(),
        comments: comments
            .into_iter()
            .map(|(comment, author)| CommentResponse::new(comment, author))
            .collect(),
        user_has_liked,
    })
}

pub(crate) async fn discard_media(state: &ServerState, relative: &str) {
    if let Err(e) = remove_media(&state.cli.media_root, relative).await {
        tracing::warn!("Failed to remove media: {:#}", e);
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(fields: &mut HashMap<String, String>, name: &str) -> WebResult<String> {
    optional(fields.remove(name))
        .ok_or_else(|| WebError::BadRequest(format!("Missing required field: {}", name)))
}

fn check_title(title: &str) -> WebResult<()> {
    check_max_len("title", title, MAX_TITLE_LENGTH).map_err(WebError::BadRequest)
}

fn check_url(field: &str, value: &str) -> WebResult<()> {
    validate_http_url(field, value).map_err(WebError::BadRequest)
}

fn check_optional_url(field: &str, value: &Option<String>) -> WebResult<()> {
    match value {
        Some(url) => check_url(field, url),
        None => Ok(()),
    }
}

fn check_custom_field_name(value: &Option<String>) -> WebResult<()> {
    match value {
        Some(name) => check_max_len("custom_field_name", name, MAX_CUSTOM_FIELD_NAME_LENGTH)
            .map_err(WebError::BadRequest),
        None => Ok(()),
    }
}

fn parse_project_type(value: &str) -> WebResult<ProjectType> {
    parse_choice::<ProjectType>("project_type", value).map_err(WebError::BadRequest)
}

pub async fn read_project_form(mut multipart: Multipart) -> WebResult<ProjectForm> {
    let mut form = ProjectForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "screenshot" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;

            // browsers submit an empty part for an untouched file input
            if file_name.is_empty() && data.is_empty() {
                continue;
            }

            let extension = screenshot_extension(&file_name).ok_or_else(|| {
                WebError::BadRequest(format!(
                    "Upload a valid image. Allowed formats: {}.",
                    SCREENSHOT_EXTENSIONS.join(", ")
                ))
            })?;
            form.screenshot = Some((extension, data));
        } else {
            let value = field.text().await?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

pub async fn get_projects(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<ProjectResponse>>> {
    let projects = EProjectPost::find()
        .filter(CProjectPost::IsPublic.eq(true))
        .order_by_desc(CProjectPost::CreatedAt)
        .order_by_desc(CProjectPost::Id)
        .find_also_related(entity::user::Entity)
        .all(&state.db)
        .await?;

    Ok(Json(project_responses(&state, projects).await?))
}

pub async fn post_projects(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    multipart: Result<Multipart, MultipartRejection>,
) -> WebResult<(StatusCode, Json<ProjectResponse>)> {
    let user = caller.user()?;
    let mut form = read_project_form(multipart?).await?;

    let title = required(&mut form.fields, "title")?;
    check_title(&title)?;

    let project_url = required(&mut form.fields, "project_url")?;
    check_url("project_url", &project_url)?;

    let project_type = match optional(form.fields.remove("project_type")) {
        Some(code) => parse_project_type(&code)?,
        None => ProjectType::default(),
    };

    let screenshot_url_fallback = optional(form.fields.remove("screenshot_url_fallback"));
    check_optional_url("screenshot_url_fallback", &screenshot_url_fallback)?;

    let source_code_url = optional(form.fields.remove("source_code_url"));
    check_optional_url("source_code_url", &source_code_url)?;

    let custom_field_name = optional(form.fields.remove("custom_field_name"));
    check_custom_field_name(&custom_field_name)?;

    let custom_field_value = optional(form.fields.remove("custom_field_value"));
    let description = form.fields.remove("description").unwrap_or_default();
    let is_public = parse_checkbox(form.fields.get("is_public").map(String::as_str));

    let screenshot = match form.screenshot {
        Some((extension, data)) => {
            Some(store_screenshot(&state.cli.media_root, &extension, &data).await?)
        }
        None => None,
    };

    let now = Utc::now().naive_utc();
    let aproject = AProjectPost {
        user: Set(user.id),
        title: Set(title),
        description: Set(description),
        project_url: Set(project_url),
        project_type: Set(project_type),
        screenshot: Set(screenshot.clone()),
        screenshot_url_fallback: Set(screenshot_url_fallback),
        source_code_url: Set(source_code_url),
        custom_field_name: Set(custom_field_name),
        custom_field_value: Set(custom_field_value),
        is_public: Set(is_public),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let project = match aproject.insert(&state.db).await {
        Ok(project) => project,
        Err(e) => {
            if let Some(path) = &screenshot {
                discard_media(&state, path).await;
            }
            return Err(e.into());
        }
    };

    tracing::info!(project = project.id, user = user.id, "Created project");

    let res = project_response(&state, project, user.username.clone(), 0);
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get_project(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<i32>, PathRejection>,
) -> WebResult<Json<ProjectDetailResponse>> {
    let Path(id) = path?;
    let (project, owner) = find_visible_project(&state, &caller, id).await?;

    Ok(Json(project_detail(&state, &caller, project, owner).await?))
}

pub async fn put_project(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PatchProjectRequest>, JsonRejection>,
) -> WebResult<Json<ProjectDetailResponse>> {
    let Path(id) = path?;
    let (project, owner) = find_project(&state, id).await?;
    WebError::check(
        can_modify_project(&caller.actor, project.user),
        PROJECT_MODIFY_DENIED,
        PROJECT_HIDDEN,
    )?;

    let Json(body) = payload?;
    let mut aproject: AProjectPost = project.into();

    if let Some(title) = body.title {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(WebError::bad_request("Missing required field: title"));
        }
        check_title(&title)?;
        aproject.title = Set(title);
    }

    if let Some(description) = body.description {
        aproject.description = Set(description);
    }

    if let Some(project_url) = body.project_url {
        let project_url = project_url.trim().to_string();
        check_url("project_url", &project_url)?;
        aproject.project_url = Set(project_url);
    }

    if let Some(project_type) = body.project_type {
        aproject.project_type = Set(parse_project_type(project_type.trim())?);
    }

    if let Some(is_public) = body.is_public {
        aproject.is_public = Set(is_public);
    }

    if body.source_code_url.is_some() {
        let source_code_url = optional(body.source_code_url);
        check_optional_url("source_code_url", &source_code_url)?;
        aproject.source_code_url = Set(source_code_url);
    }

    if body.screenshot_url_fallback.is_some() {
        let fallback = optional(body.screenshot_url_fallback);
        check_optional_url("screenshot_url_fallback", &fallback)?;
        aproject.screenshot_url_fallback = Set(fallback);
    }

    if body.custom_field_name.is_some() {
        let custom_field_name = optional(body.custom_field_name);
        check_custom_field_name(&custom_field_name)?;
        aproject.custom_field_name = Set(custom_field_name);
    }

    if body.custom_field_value.is_some() {
        aproject.custom_field_value = Set(optional(body.custom_field_value));
    }

    aproject.updated_at = Set(Utc::now().naive_utc());
    let project = aproject.update(&state.db).await?;

    Ok(Json(project_detail(&state, &caller, project, owner).await?))
}

pub async fn delete_project(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<i32>, PathRejection>,
) -> WebResult<StatusCode> {
    let Path(id) = path?;
    let (project, _) = find_project(&state, id).await?;
    WebError::check(
        can_modify_project(&caller.actor, project.user),
        PROJECT_MODIFY_DENIED,
        PROJECT_HIDDEN,
    )?;

    EProjectPost::delete_by_id(project.id)
        .exec(&state.db)
        .await?;

    tracing::info!(project = project.id, "Deleted project");

    if let Some(path) = project.screenshot.as_deref().filter(|p| !p.is_empty()) {
        discard_media(&state, path).await;
    }

    Ok(StatusCode::NO_CONTENT)
}
