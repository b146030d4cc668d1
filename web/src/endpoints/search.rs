/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::projects::{ProjectResponse, project_responses};
use crate::error::WebResult;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use gloex_core::input::like_pattern;
use gloex_core::types::*;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ColumnTrait, Condition, EntityTrait, IdenStatic, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// `LOWER(<table>.<column>) LIKE LOWER(<pattern>) ESCAPE '\'`
///
/// Both sides are folded by the database so the comparison stays consistent
/// on backends whose `LOWER` only folds ASCII.
pub(crate) fn contains_ci<E, C>(entity: E, column: C, pattern: &str) -> SimpleExpr
where
    E: IdenStatic,
    C: IdenStatic,
{
    Expr::cust_with_exprs(
        "LOWER($1) LIKE LOWER($2) ESCAPE '\\'",
        [
            SimpleExpr::from(Expr::col((entity, column))),
            Expr::val(pattern).into(),
        ],
    )
}

pub async fn get_search(
    state: State<Arc<ServerState>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> WebResult<Json<Vec<ProjectResponse>>> {
    let Query(query) = query?;
    let q = query.q.unwrap_or_default();
    let q = q.trim();

    if q.is_empty() {
        return Ok(Json(vec![]));
    }

    let pattern = like_pattern(q);

    let projects = EProjectPost::find()
        .find_also_related(entity::user::Entity)
        .filter(CProjectPost::IsPublic.eq(true))
        .filter(
            Condition::any()
                .add(contains_ci(entity::project_post::Entity, CProjectPost::Title, &pattern))
                .add(contains_ci(entity::project_post::Entity, CProjectPost::Description, &pattern))
                .add(contains_ci(entity::user::Entity, CUser::Username, &pattern)),
        )
        .order_by_desc(CProjectPost::CreatedAt)
        .order_by_desc(CProjectPost::Id)
        .all(&state.db)
        .await?;

    Ok(Json(project_responses(&state, projects).await?))
}
