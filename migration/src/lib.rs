/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_table_user;
mod m20260101_000002_create_table_project_post;
mod m20260101_000003_create_table_project_resource;
mod m20260101_000004_create_table_comment;
mod m20260101_000005_create_table_project_like;
mod m20260101_000006_create_table_service_request;
mod m20260101_000007_create_table_admin_review;
mod m20260101_000008_create_table_tariff;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_table_user::Migration),
            Box::new(m20260101_000002_create_table_project_post::Migration),
            Box::new(m20260101_000003_create_table_project_resource::Migration),
            Box::new(m20260101_000004_create_table_comment::Migration),
            Box::new(m20260101_000005_create_table_project_like::Migration),
            Box::new(m20260101_000006_create_table_service_request::Migration),
            Box::new(m20260101_000007_create_table_admin_review::Migration),
            Box::new(m20260101_000008_create_table_tariff::Migration),
        ]
    }
}
