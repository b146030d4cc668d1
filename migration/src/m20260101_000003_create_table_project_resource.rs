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
                    .table(ProjectResource::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectResource::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectResource::Project).integer().not_null())
                    .col(
                        ColumnDef::new(ProjectResource::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectResource::ResourceUrl)
                            .string_len(500)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project_resource-project")
                            .from(ProjectResource::Table, ProjectResource::Project)
                            .to(ProjectPost::Table, ProjectPost::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectResource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectResource {
    Table,
    Id,
    Project,
    Name,
    ResourceUrl,
}

#[derive(DeriveIden)]
enum ProjectPost {
    Table,
    Id,
}
