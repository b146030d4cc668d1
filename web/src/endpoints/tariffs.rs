/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::Json;
use axum::extract::State;
use gloex_core::types::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TariffResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: String,
    pub redirect_url: String,
    pub color: String,
    pub order: i32,
}

impl From<MTariff> for TariffResponse {
    fn from(tariff: MTariff) -> Self {
        TariffResponse {
            id: tariff.id,
            title: tariff.title,
            description: tariff.description,
            price: tariff.price,
            redirect_url: tariff.redirect_url,
            color: tariff.color,
            order: tariff.order,
        }
    }
}

/// Display order: `order` ascending, then oldest first.
pub(crate) fn ordered_tariffs() -> Select<ETariff> {
    ETariff::find()
        .order_by_asc(CTariff::Order)
        .order_by_asc(CTariff::CreatedAt)
        .order_by_asc(CTariff::Id)
}

pub async fn get_tariffs(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<TariffResponse>>> {
    let tariffs = ordered_tariffs()
        .filter(CTariff::IsActive.eq(true))
        .all(&state.db)
        .await?;

    Ok(Json(tariffs.into_iter().map(TariffResponse::from).collect()))
}
