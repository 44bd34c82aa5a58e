// common/mod.rs - Shared test utilities for database setup
//
// Every DB test binary calls `setup_test_db` first. The fixture statements
// are idempotent (IF NOT EXISTS / ON CONFLICT DO NOTHING), so test threads
// sharing one database see the same rows without stepping on each other.

#![allow(dead_code)]

use shop_admin::config::AppConfig;
use shop_admin::fixtures::{tables::ManufacturersTable, TestTable};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Create a database connection pool for testing
pub async fn create_test_pool() -> anyhow::Result<PgPool> {
    let config = AppConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections.max(5))
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(60))
        .connect(&config.database_url)
        .await?;

    Ok(pool)
}

/// Create the manufacturers table and load the fixture rows
pub async fn setup_test_db(pool: &PgPool) -> anyhow::Result<()> {
    for sql in ManufacturersTable::setup_sql() {
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}

/// Drop the manufacturers table
pub async fn teardown_test_db(pool: &PgPool) -> anyhow::Result<()> {
    for sql in ManufacturersTable::teardown_sql() {
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}
