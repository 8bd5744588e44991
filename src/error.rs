// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the load pipeline.
//!
//! Every variant is fatal: errors propagate up to the binary's top-level
//! handler, which logs the cause and exits non-zero. Nothing is retried.

use std::path::PathBuf;
use std::time::Duration;

/// Errors surfaced by the loader.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Failed to read input file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed input file {}: {source}", path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to insert activity {id} ({name}): {source}")]
    ActivityInsert {
        id: i64,
        name: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Load deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
}

/// Result type alias for the loader
pub type Result<T> = std::result::Result<T, LoadError>;
