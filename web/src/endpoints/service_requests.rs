/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::Caller;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{DateTime, NaiveDate, Utc};
use entity::service_request::{BudgetRange, OrganizationType, ServiceType};
use gloex_core::consts::*;
use gloex_core::input::{
    check_max_len, generate_request_code, is_affirmative, is_truthy, normalize_request_code,
    parse_choice, parse_due_date, validate_email, validate_http_url,
};
use gloex_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use std::sync::Arc;

/// Checked in order; the first falsy one is reported.
pub const REQUIRED_FIELDS: [&str; 11] = [
    "service_type",
    "country",
    "city",
    "organization_type",
    "organization_name",
    "preferred_language",
    "job_description",
    "primary_phone",
    "primary_email",
    "budget_range",
    "terms_accepted",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedServiceRequestResponse {
    pub message: String,
    pub request_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewResponse {
    pub id: i32,
    pub admin_username: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewResponse {
    pub fn new(review: MAdminReview, admin: Option<MUser>) -> Self {
        ReviewResponse {
            id: review.id,
            admin_username: admin.map(|u| u.username).unwrap_or_default(),
            comment: review.comment,
            created_at: review.created_at.and_utc(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceRequestResponse {
    pub request_code: String,
    pub service_type: String,
    pub country: String,
    pub city: String,
    pub organization_type: String,
    pub organization_name: String,
    pub preferred_language: String,
    pub job_category: String,
    pub job_description: String,
    pub job_attachment_url: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub primary_phone: String,
    pub secondary_phone: String,
    pub primary_email: String,
    pub budget_range: String,
    pub created_at: DateTime<Utc>,
    pub reviews: Vec<ReviewResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RequestCodeQuery {
    #[serde(default)]
    pub code: Option<String>,
}

fn text_field(data: &Map<String, Value>, name: &str) -> WebResult<String> {
    match data.get(name) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(WebError::BadRequest(format!("Invalid value for {}.", name))),
    }
}

fn required_text(data: &Map<String, Value>, name: &str, max: usize) -> WebResult<String> {
    let value = text_field(data, name)?;
    if value.is_empty() {
        return Err(WebError::BadRequest(format!(
            "Missing required field: {}",
            name
        )));
    }

    check_max_len(name, &value, max).map_err(WebError::BadRequest)?;
    Ok(value)
}

fn optional_text(data: &Map<String, Value>, name: &str, max: usize) -> WebResult<String> {
    let value = text_field(data, name)?;
    check_max_len(name, &value, max).map_err(WebError::BadRequest)?;
    Ok(value)
}

fn choice<T: FromStr>(data: &Map<String, Value>, name: &str) -> WebResult<T> {
    let value = text_field(data, name)?;
    parse_choice(name, &value).map_err(WebError::BadRequest)
}

/// Validates a submitted intake form into an unsaved record without code, owner or timestamps.
pub fn parse_service_request(data: &Map<String, Value>) -> WebResult<AServiceRequest> {
    for field in REQUIRED_FIELDS {
        if !is_truthy(data.get(field)) {
            return Err(WebError::BadRequest(format!(
                "Missing required field: {}",
                field
            )));
        }
    }

    if !is_affirmative(data.get("terms_accepted")) {
        return Err(WebError::bad_request(
            "You must accept the terms and conditions.",
        ));
    }

    let service_type: ServiceType = choice(data, "service_type")?;
    let organization_type: OrganizationType = choice(data, "organization_type")?;
    let budget_range: BudgetRange = choice(data, "budget_range")?;

    let primary_email = required_text(data, "primary_email", MAX_EMAIL_LENGTH)?;
    validate_email("primary_email", &primary_email).map_err(WebError::BadRequest)?;

    let job_attachment_url = text_field(data, "job_attachment_url")?;
    let job_attachment_url = if job_attachment_url.is_empty() {
        None
    } else {
        validate_http_url("job_attachment_url", &job_attachment_url)
            .map_err(WebError::BadRequest)?;
        Some(job_attachment_url)
    };

    let due_date = text_field(data, "due_date")?;
    let due_date = if due_date.is_empty() {
        None
    } else {
        Some(parse_due_date(&due_date).map_err(WebError::BadRequest)?)
    };

    Ok(AServiceRequest {
        service_type: Set(service_type),
        country: Set(required_text(data, "country", MAX_LOCATION_LENGTH)?),
        city: Set(required_text(data, "city", MAX_LOCATION_LENGTH)?),
        organization_type: Set(organization_type),
        organization_name: Set(required_text(
            data,
            "organization_name",
            MAX_ORGANIZATION_NAME_LENGTH,
        )?),
        preferred_language: Set(required_text(
            data,
            "preferred_language",
            MAX_LANGUAGE_LENGTH,
        )?),
        job_category: Set(optional_text(data, "job_category", MAX_JOB_CATEGORY_LENGTH)?),
        job_description: Set(required_text(data, "job_description", usize::MAX)?),
        job_attachment_url: Set(job_attachment_url),
        due_date: Set(due_date),
        primary_phone: Set(required_text(data, "primary_phone", MAX_PHONE_LENGTH)?),
        secondary_phone: Set(optional_text(data, "secondary_phone", MAX_PHONE_LENGTH)?),
        primary_email: Set(primary_email),
        budget_range: Set(budget_range),
        terms_accepted: Set(true),
        ..Default::default()
    })
}

pub(crate) async fn find_by_code(
    db: &DatabaseConnection,
    code: &str,
) -> WebResult<MServiceRequest> {
    EServiceRequest::find()
        .filter(CServiceRequest::RequestCode.eq(code))
        .one(db)
        .await?
        .ok_or_else(|| WebError::not_found("Invalid request code."))
}

pub(crate) async fn load_reviews(
    db: &DatabaseConnection,
    service_request: i32,
) -> WebResult<Vec<ReviewResponse>> {
    let reviews = EAdminReview::find()
        .filter(CAdminReview::ServiceRequest.eq(service_request))
        .order_by_desc(CAdminReview::CreatedAt)
        .order_by_desc(CAdminReview::Id)
        .find_also_related(entity::user::Entity)
        .all(db)
        .await?;

    Ok(reviews
        .into_iter()
        .map(|(review, admin)| ReviewResponse::new(review, admin))
        .collect())
}

pub async fn post_service_request(
    state: State<Arc<ServerState>>,
    Extension(caller): Extension<Caller>,
    payload: Result<Json<Value>, JsonRejection>,
) -> WebResult<(StatusCode, Json<CreatedServiceRequestResponse>)> {
    let Json(payload) = payload?;
    let Value::Object(data) = payload else {
        return Err(WebError::bad_request("Invalid JSON data."));
    };

    let mut arequest = parse_service_request(&data)?;
    let now = Utc::now().naive_utc();
    arequest.user = Set(caller.actor.id());
    arequest.created_at = Set(now);
    arequest.updated_at = Set(now);

    for attempt in 1..=REQUEST_CODE_ATTEMPTS {
        let mut candidate = arequest.clone();
        candidate.request_code = Set(generate_request_code());

        match candidate.insert(&state.db).await {
            Ok(request) => {
                tracing::info!(request = request.id, "Service request {} submitted", request.request_code);
                return Ok((
                    StatusCode::CREATED,
                    Json(CreatedServiceRequestResponse {
                        message: "Request submitted successfully.".to_string(),
                        request_code: request.request_code,
                    }),
                ));
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::warn!("Request code collision on attempt {}", attempt);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(anyhow::anyhow!(
        "Failed to allocate a unique request code after {} attempts",
        REQUEST_CODE_ATTEMPTS
    )
    .into())
}

pub async fn get_service_request(
    state: State<Arc<ServerState>>,
    query: Result<Query<RequestCodeQuery>, QueryRejection>,
) -> WebResult<Json<ServiceRequestResponse>> {
    let Query(query) = query?;
    let code = normalize_request_code(&query.code.unwrap_or_default());

    if code.is_empty() {
        return Err(WebError::bad_request("A request code is required."));
    }

    let request = find_by_code(&state.db, &code).await?;
    let reviews = load_reviews(&state.db, request.id).await?;

    let username = match request.user {
        Some(user_id) => EUser::find_by_id(user_id)
            .one(&state.db)
            .await?
            .map(|u| u.username),
        None => None,
    };

    Ok(Json(ServiceRequestResponse {
        request_code: request.request_code,
        service_type: request.service_type.label().to_string(),
        country: request.country,
        city: request.city,
        organization_type: request.organization_type.label().to_string(),
        organization_name: request.organization_name,
        preferred_language: request.preferred_language,
        job_category: request.job_category,
        job_description: request.job_description,
        job_attachment_url: request.job_attachment_url,
        due_date: request.due_date,
        primary_phone: request.primary_phone,
        secondary_phone: request.secondary_phone,
        primary_email: request.primary_email,
        budget_range: request.budget_range.label().to_string(),
        created_at: request.created_at.and_utc(),
        reviews,
        username,
    }))
}
