/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "Gloex", display_name = "Gloex", bin_name = "gloex-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "GLOEX_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "GLOEX_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    #[arg(long, env = "GLOEX_DEBUG", default_value = "false")]
    pub debug: bool,
    #[arg(long, env = "GLOEX_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "GLOEX_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "GLOEX_SERVE_URL", default_value = "http://127.0.0.1:3000")]
    pub serve_url: String,
    #[arg(long, env = "GLOEX_CORS_ORIGIN", value_delimiter = ',')]
    pub cors_origin: Vec<String>,
    #[arg(long, env = "GLOEX_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "GLOEX_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "GLOEX_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "GLOEX_SESSION_TTL_HOURS", value_parser = greater_than_zero::<i64>, default_value = "336")]
    pub session_ttl_hours: i64,
    #[arg(long, env = "GLOEX_MEDIA_ROOT", default_value = "./media")]
    pub media_root: String,
    #[arg(long, env = "GLOEX_MAX_UPLOAD_SIZE", value_parser = greater_than_zero::<usize>, default_value = "5242880")]
    pub max_upload_size: usize,
    #[arg(long, env = "GLOEX_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    #[arg(long, env = "GLOEX_ADMIN_USERNAME")]
    pub admin_username: Option<String>,
    #[arg(long, env = "GLOEX_ADMIN_EMAIL", default_value = "")]
    pub admin_email: String,
    #[arg(long, env = "GLOEX_ADMIN_PASSWORD_FILE")]
    pub admin_password_file: Option<String>,
    #[arg(long, env = "GLOEX_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
    #[arg(long, env = "GLOEX_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub jwt_secret: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

pub type EAdminReview = admin_review::Entity;
pub type EComment = comment::Entity;
pub type ELike = like::Entity;
pub type EProjectPost = project_post::Entity;
pub type EProjectResource = project_resource::Entity;
pub type EServiceRequest = service_request::Entity;
pub type ETariff = tariff::Entity;
pub type EUser = user::Entity;

pub type MAdminReview = admin_review::Model;
pub type MComment = comment::Model;
pub type MLike = like::Model;
pub type MProjectPost = project_post::Model;
pub type MProjectResource = project_resource::Model;
pub type MServiceRequest = service_request::Model;
pub type MTariff = tariff::Model;
pub type MUser = user::Model;

pub type AAdminReview = admin_review::ActiveModel;
pub type AComment = comment::ActiveModel;
pub type ALike = like::ActiveModel;
pub type AProjectPost = project_post::ActiveModel;
pub type AProjectResource = project_resource::ActiveModel;
pub type AServiceRequest = service_request::ActiveModel;
pub type ATariff = tariff::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CAdminReview = admin_review::Column;
pub type CComment = comment::Column;
pub type CLike = like::Column;
pub type CProjectPost = project_post::Column;
pub type CProjectResource = project_resource::Column;
pub type CServiceRequest = service_request::Column;
pub type CTariff = tariff::Column;
pub type CUser = user::Column;

pub type RAdminReview = admin_review::Relation;
pub type RComment = comment::Relation;
pub type RLike = like::Relation;
pub type RProjectPost = project_post::Relation;
pub type RProjectResource = project_resource::Relation;
pub type RServiceRequest = service_request::Relation;
pub type RUser = user::Relation;
