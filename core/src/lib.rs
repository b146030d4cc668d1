/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod media;
pub mod policy;
pub mod types;

use anyhow::{Context, Result};
use database::connect_db;
use input::load_secret;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting Gloex Server on {}:{}", cli.ip, cli.port);

    let jwt_secret = load_secret(&cli.jwt_secret_file);
    if jwt_secret.is_empty() {
        anyhow::bail!("JWT secret file {} is empty or unreadable", cli.jwt_secret_file);
    }

    tokio::fs::create_dir_all(&cli.media_root)
        .await
        .with_context(|| format!("Failed to create media root {}", cli.media_root))?;

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState {
        db,
        cli,
        jwt_secret,
    }))
}
