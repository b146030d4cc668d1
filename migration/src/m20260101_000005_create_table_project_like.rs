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
                    .table(ProjectLike::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectLike::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectLike::Project).integer().not_null())
                    .col(ColumnDef::new(ProjectLike::User).integer().not_null())
                    .col(ColumnDef::new(ProjectLike::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project_like-project")
                            .from(ProjectLike::Table, ProjectLike::Project)
                            .to(ProjectPost::Table, ProjectPost::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project_like-user")
                            .from(ProjectLike::Table, ProjectLike::User)
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
                    .name("idx-like-project-user")
                    .table(ProjectLike::Table)
                    .col(ProjectLike::Project)
                    .col(ProjectLike::User)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectLike {
    Table,
    Id,
    Project,
    User,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProjectPost {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
