// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Athlete (owner) model for the export document.

use serde::{Deserialize, Serialize};

/// The authenticated athlete whose export is being loaded.
///
/// Field names match the Strava API; PascalCase aliases accept exports
/// written with capitalized keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    /// Strava athlete ID (primary key in the store)
    #[serde(alias = "ID")]
    pub id: i64,
    /// First name
    #[serde(default, alias = "FirstName")]
    pub firstname: String,
    /// Last name
    #[serde(default, alias = "LastName")]
    pub lastname: String,
    /// Home city (may be absent)
    #[serde(default, alias = "City")]
    pub city: Option<String>,
}
