/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Parser;
use gloex_core::init_state;
use gloex_core::types::Cli;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},sqlx=warn", cli.log_level)));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let _guard = match (&cli.report_errors, &cli.sentry_dsn) {
        (true, Some(dsn)) => Some(sentry::init(dsn.as_str())),
        (true, None) => {
            tracing::warn!("Error reporting enabled without GLOEX_SENTRY_DSN, skipping");
            None
        }
        _ => None,
    };

    let state = init_state(cli).await?;
    web::serve_web(state).await?;

    Ok(())
}
