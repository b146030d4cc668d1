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
                    .table(Tariff::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tariff::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tariff::Title).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Tariff::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Tariff::Price).string_len(50).not_null())
                    .col(ColumnDef::new(Tariff::RedirectUrl).string_len(500).not_null())
                    .col(
                        ColumnDef::new(Tariff::Color)
                            .string_len(7)
                            .not_null()
                            .default("#6366F1"),
                    )
                    .col(ColumnDef::new(Tariff::Order).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Tariff::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Tariff::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tariff::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tariff {
    Table,
    Id,
    Title,
    Description,
    Price,
    RedirectUrl,
    Color,
    Order,
    IsActive,
    CreatedAt,
}
