// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the export document.

pub mod activity;
pub mod athlete;
pub mod export;

pub use activity::{Activity, ActivityAthlete};
pub use athlete::Athlete;
pub use export::StravaExport;
