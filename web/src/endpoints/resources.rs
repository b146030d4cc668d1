/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::projects::{PROJECT_HIDDEN, find_project, find_visible_project};
use crate::authorization::Caller;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use gloex_core::consts::MAX_RESOURCE_NAME_LENGTH;
use gloex_core::input::{check_max_len, validate_http_url};
use gloex_core::policy::can_manage_resources;
use gloex_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MakeResourceRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResourceResponse {
    pub id: i32,
    pub name: String,
    pub resource_url: String,
}

impl From<MProjectResource> for ResourceResponse {
    fn from(resource: MProjectResource) -> Self {
        ResourceResponse {
            id: resource.id,
            name: resource.name,
            resource_url: resource.resource_url,
        }
    }
}

pub async fn get_resources(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<i32>, PathRejection>,
) -> WebResult<Json<Vec<ResourceResponse>>> {
    let Path(id) = path?;
    let (project, _) = find_visible_project(&state, &caller, id).await?;

    let resources = EProjectResource::find()
        .filter(CProjectResource::Project.eq(project.id))
        .order_by_asc(CProjectResource::Id)
        .all(&state.db)
        .await?;

    Ok(Json(
        resources.into_iter().map(ResourceResponse::from).collect(),
    ))
}

pub async fn post_resource(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<MakeResourceRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<ResourceResponse>)> {
    let Path(id) = path?;
    let (project, _) = find_project(&state, id).await?;
    WebError::check(
        can_manage_resources(&caller.actor, project.user),
        "Permission denied.",
        PROJECT_HIDDEN,
    )?;

    let Json(body) = payload?;

    let name = body
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| WebError::bad_request("Missing required field: name"))?;
    check_max_len("name", &name, MAX_RESOURCE_NAME_LENGTH).map_err(WebError::BadRequest)?;

    let resource_url = body
        .resource_url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .ok_or_else(|| WebError::bad_request("Missing required field: resource_url"))?;
    validate_http_url("resource_url", &resource_url).map_err(WebError::BadRequest)?;

    let aresource = AProjectResource {
        project: Set(project.id),
        name: Set(name),
        resource_url: Set(resource_url),
        ..Default::default()
    };

    let resource = aresource.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(ResourceResponse::from(resource))))
}
