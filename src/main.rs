// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava Export Database Loader
//!
//! Reads a Strava export JSON document (one athlete plus their activity
//! history) and loads it into MySQL: schema setup, one athlete row, then
//! bounded concurrent activity inserts.

use strava_loader::config::Config;
use strava_loader::Loader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        input = %config.input_json.display(),
        database = %config.db_name,
        "Starting load"
    );

    // Single top-level handler: every fatal error lands here and decides
    // the process exit code.
    match Loader::new(config).run().await {
        Ok(summary) => {
            tracing::info!(
                athlete_id = summary.athlete_id,
                activities = summary.activities_inserted,
                "Load complete"
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "Load failed");
            std::process::exit(1);
        }
    }
}

/// Initialize structured logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("strava_loader=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
