// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Load pipeline.
//!
//! Handles the core workflow:
//! 1. Read and parse the export document
//! 2. Recreate the schema
//! 3. Insert the athlete row
//! 4. Insert all activities through the bounded pool
//!
//! Stages 2–4 are hard barriers (each completes before the next starts) and
//! run under the configured wall-clock deadline.

use crate::config::Config;
use crate::db::MysqlDb;
use crate::error::{LoadError, Result};
use crate::models::StravaExport;
use std::future::Future;
use std::path::Path;
use std::time::Duration;

/// Runs a full load of one export document.
pub struct Loader {
    config: Config,
}

impl Loader {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the load.
    ///
    /// The pool is closed before returning on every path, including timeout,
    /// so no connection outlives the deadline.
    pub async fn run(&self) -> Result<LoadSummary> {
        let export = read_export(&self.config.input_json)?;
        tracing::info!(
            athlete_id = export.athlete.id,
            activities = export.activities.len(),
            "Export document loaded"
        );

        let db = MysqlDb::connect(&self.config).await?;
        let result = with_deadline(self.config.deadline, self.load(&db, &export)).await;
        db.close().await;

        result
    }

    async fn load(&self, db: &MysqlDb, export: &StravaExport) -> Result<LoadSummary> {
        // 1. Recreate both tables in foreign-key order
        db.init_schema().await?;
        tracing::info!("Schema initialized");

        // 2. The athlete row must exist before any activity references it
        db.insert_athlete(&export.athlete).await?;
        tracing::info!(athlete_id = export.athlete.id, "Athlete inserted");

        // 3. Concurrent activity inserts, first error wins
        db.insert_activities(&export.activities).await?;
        tracing::info!(count = export.activities.len(), "Activities inserted");

        Ok(LoadSummary {
            athlete_id: export.athlete.id,
            activities_inserted: export.activities.len(),
        })
    }
}

/// Result of a successful load.
#[derive(Debug)]
pub struct LoadSummary {
    pub athlete_id: i64,
    pub activities_inserted: usize,
}

/// Read and parse the export document.
fn read_export(path: &Path) -> Result<StravaExport> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::InputParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Bound a future by the wall-clock deadline, classifying expiry as
/// [`LoadError::DeadlineExceeded`].
async fn with_deadline<T, F>(deadline: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result,
        Err(_) => Err(LoadError::DeadlineExceeded(deadline)),
    }
}
