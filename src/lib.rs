// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava export database loader.
//!
//! Loads a Strava export document (one athlete plus their activity history)
//! into a MySQL database: schema setup, a single athlete insert, then
//! bounded concurrent activity inserts with first-error-wins cancellation.

pub mod config;
pub mod db;
pub mod error;
pub mod loader;
pub mod models;

pub use loader::{LoadSummary, Loader};
