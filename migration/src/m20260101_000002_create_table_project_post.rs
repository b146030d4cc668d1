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
                    .table(ProjectPost::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectPost::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectPost::User).integer().not_null())
                    .col(ColumnDef::new(ProjectPost::Title).string_len(100).not_null())
                    .col(
                        ColumnDef::new(ProjectPost::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ProjectPost::ProjectUrl)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectPost::ProjectType)
                            .string_len(20)
                            .not_null()
                            .default("fullstack"),
                    )
                    .col(ColumnDef::new(ProjectPost::Screenshot).string().null())
                    .col(
                        ColumnDef::new(ProjectPost::ScreenshotUrlFallback)
                            .string_len(500)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProjectPost::SourceCodeUrl)
                            .string_len(500)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProjectPost::CustomFieldName)
                            .string_len(50)
                            .null(),
                    )
                    .col(ColumnDef::new(ProjectPost::CustomFieldValue).text().null())
                    .col(
                        ColumnDef::new(ProjectPost::IsPublic)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(ProjectPost::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(ProjectPost::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project_post-user")
                            .from(ProjectPost::Table, ProjectPost::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-project_post-user")
                    .table(ProjectPost::Table)
                    .col(ProjectPost::User)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectPost {
    Table,
    Id,
    User,
    Title,
    Description,
    ProjectUrl,
    ProjectType,
    Screenshot,
    ScreenshotUrlFallback,
    SourceCodeUrl,
    CustomFieldName,
    CustomFieldValue,
    IsPublic,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
