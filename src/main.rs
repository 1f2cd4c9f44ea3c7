// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rideshare-Queries inspection tool
//!
//! Runs the hourly fare statistics report against the configured database
//! and prints the rows as JSON.

use rideshare_queries::{config::Config, db::MongoDb, error::AppError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(database = %config.database, "Starting hourly fare report");

    let db = MongoDb::connect(&config).await?;
    db.ping().await?;

    let rows = db.hourly_fare_stats().await?;
    tracing::info!(count = rows.len(), "Hourly fare report ready");

    let json = serde_json::to_string_pretty(&rows).map_err(anyhow::Error::from)?;
    println!("{}", json);
    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("rideshare_queries=debug,info")
            }),
        )
        .with(format)
        .init();
}
