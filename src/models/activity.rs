// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity model for the export document.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Owner reference nested inside an activity (`athlete.id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityAthlete {
    /// Strava athlete ID this activity belongs to
    #[serde(alias = "ID")]
    pub id: i64,
}

/// One recorded activity belonging to an athlete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Strava activity ID (primary key in the store)
    #[serde(alias = "ID")]
    pub id: i64,
    /// Owning athlete reference (foreign key)
    #[serde(alias = "Athlete")]
    pub athlete: ActivityAthlete,
    /// Activity name/title
    #[serde(default, alias = "Name")]
    pub name: String,
    /// Distance in meters (stored in integer units)
    #[serde(default, alias = "Distance")]
    pub distance: f64,
    /// Moving time in seconds
    #[serde(default, alias = "MovingTime")]
    pub moving_time: i32,
    /// Elapsed time in seconds
    #[serde(default, alias = "ElapsedTime")]
    pub elapsed_time: i32,
    /// Total elevation gain in meters
    #[serde(default, alias = "TotalElevationGain")]
    pub total_elevation_gain: f64,
    /// Highest elevation, absent when the activity has no elevation data
    #[serde(default, alias = "ElevHigh")]
    pub elev_high: Option<Decimal>,
    /// Lowest elevation, absent when the activity has no elevation data
    #[serde(default, alias = "ElevLow")]
    pub elev_low: Option<Decimal>,
    /// Sport type (Ride, Run, Hike, etc.)
    #[serde(default, rename = "type", alias = "Type")]
    pub activity_type: String,
    /// Start date/time
    #[serde(alias = "StartDate")]
    pub start_date: DateTime<Utc>,
}
