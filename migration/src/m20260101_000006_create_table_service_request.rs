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
                    .table(ServiceRequest::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceRequest::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequest::RequestCode)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceRequest::User).integer().null())
                    .col(
                        ColumnDef::new(ServiceRequest::ServiceType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceRequest::Country).string_len(100).not_null())
                    .col(ColumnDef::new(ServiceRequest::City).string_len(100).not_null())
                    .col(
                        ColumnDef::new(ServiceRequest::OrganizationType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequest::OrganizationName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequest::PreferredLanguage)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequest::JobCategory)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(ServiceRequest::JobDescription).text().not_null())
                    .col(
                        ColumnDef::new(ServiceRequest::JobAttachmentUrl)
                            .string_len(500)
                            .null(),
                    )
                    .col(ColumnDef::new(ServiceRequest::DueDate).date().null())
                    .col(
                        ColumnDef::new(ServiceRequest::PrimaryPhone)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequest::SecondaryPhone)
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ServiceRequest::PrimaryEmail)
                            .string_len(254)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequest::BudgetRange)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequest::TermsAccepted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ServiceRequest::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(ServiceRequest::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-service_request-user")
                            .from(ServiceRequest::Table, ServiceRequest::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-service_request-request_code")
                    .table(ServiceRequest::Table)
                    .col(ServiceRequest::RequestCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceRequest {
    Table,
    Id,
    RequestCode,
    User,
    ServiceType,
    Country,
    City,
    OrganizationType,
    OrganizationName,
    PreferredLanguage,
    JobCategory,
    JobDescription,
    JobAttachmentUrl,
    DueDate,
    PrimaryPhone,
    SecondaryPhone,
    PrimaryEmail,
    BudgetRange,
    TermsAccepted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
