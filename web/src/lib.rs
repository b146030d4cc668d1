/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

#[cfg(test)]
mod tests;

use axum::extract::DefaultBodyLimit;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, post, put};
use axum::{Router, middleware};
use endpoints::*;
use gloex_core::types::ServerState;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn cors_layer(state: &ServerState) -> CorsLayer {
    let allow_origin = if state.cli.debug {
        AllowOrigin::mirror_request()
    } else {
        let origins = std::iter::once(&state.cli.serve_url)
            .chain(state.cli.cors_origin.iter())
            .filter_map(|origin| match origin.trim_end_matches('/').parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect::<Vec<HeaderValue>>();

        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    let api = Router::new()
        .route(
            "/api/register/",
            post(auth::post_register).fallback(only_post),
        )
        .route("/api/login/", post(auth::post_login).fallback(only_post))
        .route("/api/logout/", post(auth::post_logout).fallback(only_post))
        .route("/api/user/", get(auth::get_user).fallback(method_not_allowed))
        .route(
            "/api/projects/",
            get(projects::get_projects)
                .post(projects::post_projects)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/projects/{id}/",
            get(projects::get_project)
                .put(projects::put_project)
                .delete(projects::delete_project)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/projects/{id}/like/",
            post(likes::post_like).fallback(|| async {
                error::WebError::method_not_allowed("Only POST allowed")
            }),
        )
        .route(
            "/api/projects/{id}/comments/",
            get(comments::get_comments)
                .post(comments::post_comment)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/projects/{id}/comments/{comment_id}/",
            delete(comments::delete_comment).fallback(only_delete),
        )
        .route(
            "/api/projects/{id}/resources/",
            get(resources::get_resources)
                .post(resources::post_resource)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/search/",
            get(search::get_search).fallback(only_get),
        )
        .route(
            "/api/portfolio/{username}/",
            get(portfolio::get_portfolio).fallback(only_get),
        )
        .route(
            "/api/service-request/create/",
            post(service_requests::post_service_request).fallback(only_post),
        )
        .route(
            "/api/service-request/view/",
            get(service_requests::get_service_request).fallback(only_get),
        )
        .route(
            "/api/tariffs/",
            get(tariffs::get_tariffs).fallback(only_get),
        )
        .route("/api/health/", get(get_health).fallback(only_get))
        .route("/api/admin/site/", get(admin::get_site).fallback(only_get))
        .route(
            "/api/admin/service-requests/",
            get(admin::get_service_requests).fallback(only_get),
        )
        .route(
            "/api/admin/service-requests/{code}/reviews/",
            post(admin::post_review).fallback(only_post),
        )
        .route(
            "/api/admin/tariffs/",
            get(admin::get_tariffs)
                .post(admin::post_tariff)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/admin/tariffs/{id}/",
            put(admin::put_tariff)
                .delete(admin::delete_tariff)
                .fallback(method_not_allowed),
        );

    api.nest_service("/media", ServeDir::new(&state.cli.media_root))
        .fallback(handle_404)
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::identify,
        ))
        .layer(DefaultBodyLimit::max(state.cli.max_upload_size))
        .layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, app).await
}
