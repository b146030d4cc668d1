/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Staff-only management of intake requests and tariffs.

use super::search::contains_ci;
use super::service_requests::{ReviewResponse, find_by_code};
use super::tariffs::{TariffResponse, ordered_tariffs};
use crate::authorization::Caller;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{DateTime, NaiveDate, Utc};
use entity::service_request::{BudgetRange, OrganizationType, ServiceType};
use gloex_core::consts::*;
use gloex_core::input::{
    check_max_len, like_pattern, normalize_request_code, parse_choice, validate_hex_color,
    validate_http_url,
};
use gloex_core::policy::can_administer;
use gloex_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SiteResponse {
    pub site_header: String,
    pub site_title: String,
    pub index_title: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ServiceRequestFilter {
    pub q: Option<String>,
    pub service_type: Option<String>,
    pub budget_range: Option<String>,
    pub organization_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceRequestSummary {
    pub id: i32,
    pub request_code: String,
    pub service_type: String,
    pub organization_type: String,
    pub organization_name: String,
    pub country: String,
    pub city: String,
    pub primary_email: String,
    pub budget_range: String,
    pub due_date: Option<NaiveDate>,
    pub user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<MServiceRequest> for ServiceRequestSummary {
    fn from(request: MServiceRequest) -> Self {
        ServiceRequestSummary {
            id: request.id,
            request_code: request.request_code,
            service_type: request.service_type.label().to_string(),
            organization_type: request.organization_type.label().to_string(),
            organization_name: request.organization_name,
            country: request.country,
            city: request.city,
            primary_email: request.primary_email,
            budget_range: request.budget_range.label().to_string(),
            due_date: request.due_date,
            user_id: request.user,
            created_at: request.created_at.and_utc(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MakeReviewRequest {
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MakeTariffRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    pub redirect_url: String,
    pub color: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchTariffRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub redirect_url: Option<String>,
    pub color: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdminTariffResponse {
    #[serde(flatten)]
    pub tariff: TariffResponse,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<MTariff> for AdminTariffResponse {
    fn from(tariff: MTariff) -> Self {
        AdminTariffResponse {
            is_active: tariff.is_active,
            created_at: tariff.created_at.and_utc(),
            tariff: TariffResponse::from(tariff),
        }
    }
}

fn require_staff(caller: &Caller) -> WebResult<&MUser> {
    WebError::check(
        can_administer(&caller.actor),
        "Staff access required.",
        "Not Found",
    )?;
    caller.user()
}

fn check_tariff_title(title: &str) -> WebResult<()> {
    if title.is_empty() {
        return Err(WebError::bad_request("Missing required field: title"));
    }
    check_max_len("title", title, MAX_TITLE_LENGTH).map_err(WebError::BadRequest)
}

fn check_tariff_price(price: &str) -> WebResult<()> {
    if price.is_empty() {
        return Err(WebError::bad_request("Missing required field: price"));
    }
    check_max_len("price", price, MAX_PRICE_LENGTH).map_err(WebError::BadRequest)
}

fn check_redirect_url(url: &str) -> WebResult<()> {
    validate_http_url("redirect_url", url).map_err(WebError::BadRequest)
}

fn check_color(color: &str) -> WebResult<()> {
    validate_hex_color(color).map_err(WebError::BadRequest)
}

pub async fn get_site(Extension(caller): Extension<Caller>) -> WebResult<Json<SiteResponse>> {
    require_staff(&caller)?;

    Ok(Json(SiteResponse {
        site_header: SITE_HEADER.to_string(),
        site_title: SITE_TITLE.to_string(),
        index_title: INDEX_TITLE.to_string(),
    }))
}

pub async fn get_service_requests(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    query: Result<Query<ServiceRequestFilter>, QueryRejection>,
) -> WebResult<Json<Vec<ServiceRequestSummary>>> {
    require_staff(&caller)?;
    let Query(filter) = query?;

    let mut requests = EServiceRequest::find();

    if let Some(service_type) = filter.service_type.filter(|s| !s.is_empty()) {
        let service_type: ServiceType =
            parse_choice("service_type", &service_type).map_err(WebError::BadRequest)?;
        requests = requests.filter(CServiceRequest::ServiceType.eq(service_type));
    }

    if let Some(budget_range) = filter.budget_range.filter(|s| !s.is_empty()) {
        let budget_range: BudgetRange =
            parse_choice("budget_range", &budget_range).map_err(WebError::BadRequest)?;
        requests = requests.filter(CServiceRequest::BudgetRange.eq(budget_range));
    }

    if let Some(organization_type) = filter.organization_type.filter(|s| !s.is_empty()) {
        let organization_type: OrganizationType =
            parse_choice("organization_type", &organization_type)
                .map_err(WebError::BadRequest)?;
        requests = requests.filter(CServiceRequest::OrganizationType.eq(organization_type));
    }

    if let Some(q) = filter.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        let pattern = like_pattern(q);
        requests = requests.filter(
            Condition::any()
                .add(contains_ci(
                    entity::service_request::Entity,
                    CServiceRequest::RequestCode,
                    &pattern,
                ))
                .add(contains_ci(
                    entity::service_request::Entity,
                    CServiceRequest::OrganizationName,
                    &pattern,
                ))
                .add(contains_ci(
                    entity::service_request::Entity,
                    CServiceRequest::PrimaryEmail,
                    &pattern,
                ))
                .add(contains_ci(
                    entity::service_request::Entity,
                    CServiceRequest::JobDescription,
                    &pattern,
                )),
        );
    }

    let requests = requests
        .order_by_desc(CServiceRequest::CreatedAt)
        .order_by_desc(CServiceRequest::Id)
        .all(&state.db)
        .await?;

    Ok(Json(
        requests
            .into_iter()
            .map(ServiceRequestSummary::from)
            .collect(),
    ))
}

pub async fn post_review(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<MakeReviewRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<ReviewResponse>)> {
    let admin = require_staff(&caller)?;
    let Path(code) = path?;
    let request = find_by_code(&state.db, &normalize_request_code(&code)).await?;

    let Json(body) = payload?;
    let comment = body
        .comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| WebError::bad_request("Review comment is required."))?;

    let areview = AAdminReview {
        service_request: Set(request.id),
        admin_user: Set(admin.id),
        comment: Set(comment),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    let review = areview.insert(&state.db).await?;
    tracing::info!(
        request = request.id,
        admin = admin.id,
        "Review added to {}",
        request.request_code
    );

    Ok((
        StatusCode::CREATED,
        Json(ReviewResponse::new(review, Some(admin.clone()))),
    ))
}

pub async fn get_tariffs(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
) -> WebResult<Json<Vec<AdminTariffResponse>>> {
    require_staff(&caller)?;

    let tariffs = ordered_tariffs().all(&state.db).await?;

    Ok(Json(
        tariffs.into_iter().map(AdminTariffResponse::from).collect(),
    ))
}

pub async fn post_tariff(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    payload: Result<Json<MakeTariffRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<AdminTariffResponse>)> {
    require_staff(&caller)?;
    let Json(body) = payload?;

    let title = body.title.trim().to_string();
    check_tariff_title(&title)?;

    let price = body.price.trim().to_string();
    check_tariff_price(&price)?;

    let redirect_url = body.redirect_url.trim().to_string();
    check_redirect_url(&redirect_url)?;

    let color = body
        .color
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_TARIFF_COLOR.to_string());
    check_color(&color)?;

    let atariff = ATariff {
        title: Set(title),
        description: Set(body.description),
        price: Set(price),
        redirect_url: Set(redirect_url),
        color: Set(color),
        order: Set(body.order.unwrap_or(0)),
        is_active: Set(body.is_active.unwrap_or(true)),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    let tariff = atariff.insert(&state.db).await?;
    tracing::info!(tariff = tariff.id, "Created tariff {}", tariff.title);

    Ok((StatusCode::CREATED, Json(AdminTariffResponse::from(tariff))))
}

pub async fn put_tariff(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PatchTariffRequest>, JsonRejection>,
) -> WebResult<Json<AdminTariffResponse>> {
    require_staff(&caller)?;
    let Path(id) = path?;

    let tariff = ETariff::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Tariff not found."))?;

    let Json(body) = payload?;
    let mut atariff: ATariff = tariff.clone().into();

    if let Some(title) = body.title {
        let title = title.trim().to_string();
        check_tariff_title(&title)?;
        atariff.title = Set(title);
    }

    if let Some(description) = body.description {
        atariff.description = Set(description);
    }

    if let Some(price) = body.price {
        let price = price.trim().to_string();
        check_tariff_price(&price)?;
        atariff.price = Set(price);
    }

    if let Some(redirect_url) = body.redirect_url {
        let redirect_url = redirect_url.trim().to_string();
        check_redirect_url(&redirect_url)?;
        atariff.redirect_url = Set(redirect_url);
    }

    if let Some(color) = body.color {
        let color = color.trim().to_string();
        check_color(&color)?;
        atariff.color = Set(color);
    }

    if let Some(order) = body.order {
        atariff.order = Set(order);
    }

    if let Some(is_active) = body.is_active {
        atariff.is_active = Set(is_active);
    }

    let tariff = if atariff.is_changed() {
        atariff.update(&state.db).await?
    } else {
        tariff
    };

    Ok(Json(AdminTariffResponse::from(tariff)))
}

pub async fn delete_tariff(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    path: Result<Path<i32>, PathRejection>,
) -> WebResult<StatusCode> {
    require_staff(&caller)?;
    let Path(id) = path?;

    let result = ETariff::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(WebError::not_found("Tariff not found."));
    }

    tracing::info!(tariff = id, "Deleted tariff");
    Ok(StatusCode::NO_CONTENT)
}
