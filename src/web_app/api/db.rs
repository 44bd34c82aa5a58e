// web_app/api/db.rs - Database connection pool setup
//
// This module provides database pool initialization and the
// first-run seeding of the manufacturers table.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Mutex;
use std::sync::OnceLock;

use crate::config::AppConfig;
use crate::fixtures::tables::ManufacturersTable;

static POOL: OnceLock<PgPool> = OnceLock::new();
static TEST_POOL_OVERRIDE: Mutex<Option<PgPool>> = Mutex::new(None);

/// Initialize the global database pool
pub fn init_db(pool: PgPool) {
    tracing::info!("Initializing global database pool");
    if POOL.set(pool).is_err() {
        tracing::warn!("Database pool already initialized");
    } else {
        tracing::info!("Global database pool initialized successfully");
    }
}

/// Set a pool override for testing
pub fn set_test_pool(pool: PgPool) {
    let mut guard = TEST_POOL_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(pool);
}

/// Get the global database pool
pub fn get_db() -> Option<PgPool> {
    // Check for test override first
    {
        let guard = TEST_POOL_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref pool) = *guard {
            return Some(pool.clone());
        }
    }

    let pool = POOL.get().cloned();
    if pool.is_none() {
        tracing::warn!("Global pool is empty!");
    }
    pool
}

/// Create a PostgreSQL connection pool from the app configuration
pub async fn create_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        url = %config.redacted_database_url(),
        max_connections = config.max_connections,
        "Connecting to database"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

/// Create the manufacturers table and insert the demo rows if it is empty
///
/// Returns the number of rows present afterwards.
pub async fn seed_manufacturers(pool: &PgPool) -> Result<i64, sqlx::Error> {
    for sql in ManufacturersTable::ddl_sql() {
        sqlx::query(sql).execute(pool).await?;
    }

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shop.manufacturers")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        tracing::info!("Database already contains {} manufacturers, skipping seed.", count);
        return Ok(count);
    }

    tracing::info!("Seeding shop.manufacturers...");
    sqlx::query(ManufacturersTable::seed_sql())
        .execute(pool)
        .await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shop.manufacturers")
        .fetch_one(pool)
        .await?;
    tracing::info!("Database seeded with {} manufacturers.", count);
    Ok(count)
}
