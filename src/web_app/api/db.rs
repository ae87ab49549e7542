// web_app/api/db.rs - Database connection pool setup
//
// The server registers one Database (pool + schema name) at start-up.
// Server functions look it up here; tests can install an override that
// points at their own isolated schema.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Mutex;
use std::sync::OnceLock;

/// Schema holding the application tables unless configured otherwise
pub const DEFAULT_SCHEMA: &str = "crm";

/// A pool together with the schema its queries should target
#[derive(Clone, Debug)]
pub struct Database {
    pub pool: PgPool,
    pub schema: String,
}

impl Database {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }
}

static DATABASE: OnceLock<Database> = OnceLock::new();
static TEST_DATABASE_OVERRIDE: Mutex<Option<Database>> = Mutex::new(None);

/// Initialize the global database handle
pub fn init_db(database: Database) {
    tracing::info!("Initializing global database pool (schema '{}')", database.schema);
    if DATABASE.set(database).is_err() {
        tracing::warn!("Database pool already initialized");
    } else {
        tracing::info!("Global database pool initialized successfully");
    }
}

/// Set a database override for testing
pub fn set_test_db(database: Database) {
    let mut guard = TEST_DATABASE_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(database);
}

/// Get the global database handle
pub fn get_db() -> Option<Database> {
    {
        let guard = TEST_DATABASE_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref database) = *guard {
            return Some(database.clone());
        }
    }

    let database = DATABASE.get().cloned();
    if database.is_none() {
        tracing::warn!("Global pool is empty!");
    }
    database
}

/// Create a PostgreSQL connection pool
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
