// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! The export document: one athlete and their activity history.

use crate::models::{Activity, Athlete};
use serde::{Deserialize, Serialize};

/// Deserialized form of the exporter's JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StravaExport {
    /// The owner of every activity in the document
    #[serde(alias = "Athlete")]
    pub athlete: Athlete,
    /// Activity history, order not significant
    #[serde(default, alias = "Activities")]
    pub activities: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_two_key_document() {
        let json = r#"{
            "athlete": {"id": 123, "firstname": "Jo", "lastname": "Rider", "city": "Oakland"},
            "activities": [
                {"id": 1, "athlete": {"id": 123}, "name": "Morning Ride",
                 "type": "Ride", "start_date": "2024-01-15T10:00:00Z"}
            ]
        }"#;

        let export: StravaExport = serde_json::from_str(json).unwrap();
        assert_eq!(export.athlete.id, 123);
        assert_eq!(export.activities.len(), 1);
        assert_eq!(export.activities[0].athlete.id, export.athlete.id);
    }

    #[test]
    fn test_missing_activities_defaults_to_empty() {
        let json = r#"{"athlete": {"id": 123}}"#;
        let export: StravaExport = serde_json::from_str(json).unwrap();
        assert!(export.activities.is_empty());
    }
}
