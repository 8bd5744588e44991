// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::path::PathBuf;
use std::time::Duration;
use strava_loader::config::Config;
use strava_loader::db::MysqlDb;
use strava_loader::models::StravaExport;

/// Check if a MySQL server is available via environment variable.
#[allow(dead_code)]
pub fn database_available() -> bool {
    std::env::var("MYSQL_TEST").is_ok()
}

/// Skip test with message if no test database is available.
#[macro_export]
macro_rules! require_database {
    () => {
        if !crate::common::database_available() {
            eprintln!("⚠️  Skipping: MYSQL_TEST not set");
            return;
        }
    };
}

/// Configuration pointing at a per-test database.
///
/// Connection details come from the usual DB_* variables (defaults match a
/// local server); each test gets its own database name so schema resets in
/// one test cannot race another.
#[allow(dead_code)]
pub fn test_config(db_suffix: &str) -> Config {
    let mut config = Config::default();
    if let Ok(host) = std::env::var("DB_HOST") {
        config.db_host = host;
    }
    if let Ok(port) = std::env::var("DB_PORT") {
        config.db_port = port.parse().unwrap_or(3306);
    }
    if let Ok(user) = std::env::var("DB_USER") {
        config.db_user = user;
    }
    if let Ok(password) = std::env::var("DB_PASSWORD") {
        config.db_password = password;
    }
    config.db_name = format!("strava_loader_test_{}", db_suffix);
    config.deadline = Duration::from_secs(60);
    config
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db(db_suffix: &str) -> MysqlDb {
    MysqlDb::connect(&test_config(db_suffix))
        .await
        .expect("Failed to connect to test MySQL server")
}

/// Write an export document to a temp file and return its path.
#[allow(dead_code)]
pub fn write_export(name: &str, export: &StravaExport) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "strava-loader-{}-{}.json",
        name,
        std::process::id()
    ));
    let json = serde_json::to_string(export).expect("export should serialize");
    std::fs::write(&path, json).expect("temp file should be writable");
    path
}
