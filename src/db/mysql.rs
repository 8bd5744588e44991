// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MySQL store for the export loader.
//!
//! Provides the three load stages against one shared connection pool:
//! - schema initialization (drop/create in foreign-key order)
//! - the single athlete insert
//! - the bounded concurrent activity fan-out

use crate::config::Config;
use crate::db::schema;
use crate::error::{LoadError, Result};
use crate::models::{Activity, Athlete};
use futures_util::{stream, StreamExt};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::{ConnectOptions, Connection};
use std::future::Future;

/// Upper bound on concurrently in-flight activity inserts.
pub const MAX_CONCURRENT_INSERTS: usize = 100;

/// MySQL database handle shared by all load stages.
#[derive(Clone)]
pub struct MysqlDb {
    pool: MySqlPool,
}

impl MysqlDb {
    /// Connect to the MySQL server, create the configured database if it
    /// does not exist yet, and open the shared pool against it.
    pub async fn connect(config: &Config) -> Result<Self> {
        let options = MySqlConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_password);

        // Server-level connection first: the target database may not exist.
        let mut conn = options.connect().await?;
        sqlx::query(&format!("create database if not exists {}", config.db_name))
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONCURRENT_INSERTS as u32)
            .connect_with(options.database(&config.db_name))
            .await?;

        tracing::info!(
            host = %config.db_host,
            database = %config.db_name,
            "Connected to MySQL"
        );

        Ok(Self { pool })
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Drop and recreate both tables.
    ///
    /// Activities is dropped before Athletes and created after it, so the
    /// foreign key never dangles. Any DDL failure aborts the load.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(schema::DROP_ACTIVITIES_TABLE)
            .execute(&self.pool)
            .await?;
        sqlx::query(schema::DROP_ATHLETES_TABLE)
            .execute(&self.pool)
            .await?;
        sqlx::query(schema::CREATE_ATHLETES_TABLE)
            .execute(&self.pool)
            .await?;
        sqlx::query(schema::CREATE_ACTIVITIES_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Insert the single athlete row.
    ///
    /// Must complete before any activity insert starts: Activities rows
    /// reference it by foreign key.
    pub async fn insert_athlete(&self, athlete: &Athlete) -> Result<()> {
        sqlx::query(schema::INSERT_ATHLETE)
            .bind(athlete.id)
            .bind(&athlete.firstname)
            .bind(&athlete.lastname)
            .bind(&athlete.city)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Insert every activity with at most [`MAX_CONCURRENT_INSERTS`] inserts
    /// in flight, stopping at the first failure.
    ///
    /// Rows committed before the failure stay in the store; the reported
    /// error carries the identity of the failing record.
    pub async fn insert_activities(&self, activities: &[Activity]) -> Result<()> {
        insert_all(activities, MAX_CONCURRENT_INSERTS, |activity| {
            self.insert_activity(activity)
        })
        .await
    }

    async fn insert_activity(&self, activity: &Activity) -> Result<()> {
        sqlx::query(schema::INSERT_ACTIVITY)
            .bind(activity.id)
            .bind(activity.athlete.id)
            .bind(&activity.name)
            .bind(activity.distance.round() as i64)
            .bind(activity.moving_time)
            .bind(activity.elapsed_time)
            .bind(activity.total_elevation_gain.round() as i32)
            .bind(activity.elev_high)
            .bind(activity.elev_low)
            .bind(&activity.activity_type)
            .bind(activity.start_date)
            .execute(&self.pool)
            .await
            .map_err(|source| LoadError::ActivityInsert {
                id: activity.id,
                name: activity.name.clone(),
                source,
            })?;
        Ok(())
    }

    /// Close the pool, releasing every connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Run one insert per activity with at most `limit` in flight.
///
/// Results funnel back through the buffered stream, so the first failure is
/// observed at a single point: once it surfaces, no further insert is
/// scheduled and in-flight ones are abandoned along with the stream.
async fn insert_all<'a, F, Fut>(activities: &'a [Activity], limit: usize, insert: F) -> Result<()>
where
    F: Fn(&'a Activity) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut inserts = stream::iter(activities).map(insert).buffer_unordered(limit);

    while let Some(result) = inserts.next().await {
        result?;
    }

    Ok(())
}
