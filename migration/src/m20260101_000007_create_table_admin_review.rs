/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminReview::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminReview::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AdminReview::ServiceRequest)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdminReview::AdminUser).integer().not_null())
                    .col(ColumnDef::new(AdminReview::Comment).text().not_null())
                    .col(ColumnDef::new(AdminReview::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-admin_review-service_request")
                            .from(AdminReview::Table, AdminReview::ServiceRequest)
                            .to(ServiceRequest::Table, ServiceRequest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-admin_review-admin_user")
                            .from(AdminReview::Table, AdminReview::AdminUser)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminReview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdminReview {
    Table,
    Id,
    ServiceRequest,
    AdminUser,
    Comment,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ServiceRequest {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
