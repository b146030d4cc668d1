/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Parser;
use gloex_core::database::prepare_db;
use gloex_core::types::*;
use password_auth::verify_password;
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter,
};
use std::io::Write;

fn cli_with_admin(password_file: &str) -> Cli {
    Cli::try_parse_from([
        "gloex-server",
        "--jwt-secret-file",
        "unused",
        "--admin-username",
        "root",
        "--admin-email",
        "root@gloex.example",
        "--admin-password-file",
        password_file,
    ])
    .unwrap()
}

async fn memory_db() -> DatabaseConnection {
    // a single connection keeps the in-memory database alive for the whole test
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opt).await.unwrap()
}

#[tokio::test]
async fn test_prepare_db_seeds_admin_once() {
    let mut password_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(password_file, "s3cret-Pass").unwrap();
    let cli = cli_with_admin(password_file.path().to_str().unwrap());

    let db = memory_db().await;
    prepare_db(&db, &cli).await.unwrap();
    prepare_db(&db, &cli).await.unwrap();

    let admins = EUser::find()
        .filter(CUser::Username.eq("root"))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(admins.len(), 1);
    assert!(admins[0].is_staff);
    assert_eq!(admins[0].email, "root@gloex.example");
    assert!(verify_password("s3cret-Pass", &admins[0].password).is_ok());
}

#[tokio::test]
async fn test_prepare_db_without_admin() {
    let cli = Cli::try_parse_from(["gloex-server", "--jwt-secret-file", "unused"]).unwrap();

    let db = memory_db().await;
    prepare_db(&db, &cli).await.unwrap();

    assert_eq!(EUser::find().count(&db).await.unwrap(), 0);
    assert_eq!(ETariff::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_prepare_db_rejects_missing_password_file() {
    let cli = Cli::try_parse_from([
        "gloex-server",
        "--jwt-secret-file",
        "unused",
        "--admin-username",
        "root",
    ])
    .unwrap();

    let db = memory_db().await;
    assert!(prepare_db(&db, &cli).await.is_err());
}
