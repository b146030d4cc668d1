/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use migration::Migrator;
use password_auth::generate_hash;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection,
    EntityTrait, QueryFilter,
};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use tracing::log::LevelFilter;

use super::input::{load_secret, validate_username};
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    prepare_db(&db, cli).await?;
    Ok(db)
}

/// Brings the schema up to date and seeds the configured staff account.
pub async fn prepare_db(db: &DatabaseConnection, cli: &Cli) -> Result<()> {
    Migrator::up(db, None)
        .await
        .context("Failed to run database migrations")?;

    if let Some(username) = &cli.admin_username {
        let password_file = cli
            .admin_password_file
            .as_deref()
            .context("An admin password file is required when an admin username is set")?;
        let password = load_secret(password_file);

        if password.is_empty() {
            anyhow::bail!("Admin password file {} is empty", password_file);
        }

        apply_admin(db, username, &cli.admin_email, &password).await?;
    }

    Ok(())
}

async fn apply_admin(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    password: &str,
) -> Result<MUser> {
    validate_username(username).map_err(anyhow::Error::msg)?;

    let existing = EUser::find()
        .filter(CUser::Username.eq(username))
        .one(db)
        .await
        .context("Failed to query admin user")?;

    let user = if let Some(existing) = existing {
        let mut auser: AUser = existing.into();
        auser.email = Set(email.to_string());
        auser.password = Set(generate_hash(password));
        auser.is_staff = Set(true);
        let user = auser
            .update(db)
            .await
            .context("Failed to update admin user")?;
        tracing::info!("Updated managed admin user: {}", username);
        user
    } else {
        let auser = AUser {
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            password: Set(generate_hash(password)),
            is_staff: Set(true),
            last_login_at: Set(None),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        let user = auser
            .insert(db)
            .await
            .context("Failed to insert admin user")?;
        tracing::info!("Created managed admin user: {}", username);
        user
    };

    Ok(user)
}
