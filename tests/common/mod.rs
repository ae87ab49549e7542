// common/mod.rs - Shared test utilities for database setup and teardown
//
// This module provides reusable test fixtures and helpers to ensure:
// 1. Idempotent test execution (tests can run multiple times)
// 2. Clean setup and teardown for each test
// 3. Every test works in its own schema, so tests can run concurrently
#![allow(dead_code)]

use invoice_crm::fixtures;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;
use std::time::Duration;

/// Create a database connection pool for testing
pub async fn create_test_pool() -> anyhow::Result<PgPool> {
    dotenv::dotenv().ok();
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in environment"))?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(60))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// Drops the schema and everything in it
pub async fn teardown_test_db(pool: &PgPool, schema: &str) -> anyhow::Result<()> {
    let query = format!("DROP SCHEMA IF EXISTS {} CASCADE", schema);
    sqlx::query(&query).execute(pool).await?;
    Ok(())
}

/// Recreates `schema` with both tables and the fixed sample data
///
/// Can be called multiple times safely, even concurrently with different
/// schema names.
pub async fn setup_test_db(pool: &PgPool, schema: &str) -> anyhow::Result<()> {
    teardown_test_db(pool, schema).await?;
    fixtures::install(pool, schema).await?;
    fixtures::load_sample_data(pool, schema).await?;
    Ok(())
}

/// Generate a unique schema name for a test
pub fn generate_test_schema_name(test_name: &str) -> String {
    // Sanitize test name to be a valid schema name (alphanumeric + underscore)
    let sanitized = test_name
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect::<String>();

    // Truncate to avoid excessively long names (PostgreSQL limit is 63 chars)
    let truncated = if sanitized.len() > 50 {
        &sanitized[..50]
    } else {
        &sanitized
    };

    format!("test_{}", truncated)
}

/// Full setup and teardown wrapper for tests with isolated schema
///
/// # Arguments
/// * `test_name` - Unique test name (used to generate schema name)
/// * `test_fn` - Test function that receives (pool, schema_name)
pub async fn with_test_db<F, Fut>(test_name: &str, test_fn: F) -> anyhow::Result<()>
where
    F: FnOnce(PgPool, String) -> Fut,
    Fut: std::future::Future<Output = anyhow::Result<()>>,
{
    let pool = create_test_pool().await?;
    let schema_name = generate_test_schema_name(test_name);

    setup_test_db(&pool, &schema_name).await?;

    let result = test_fn(pool.clone(), schema_name.clone()).await;

    // Always cleanup, even if test fails
    teardown_test_db(&pool, &schema_name).await?;

    result
}

/// Id of a sample customer, looked up by email
pub async fn customer_id(pool: &PgPool, schema: &str, email: &str) -> anyhow::Result<i32> {
    let sql = format!("SELECT id FROM {}.customers WHERE email = $1", schema);
    let id: i32 = sqlx::query_scalar(&sql).bind(email).fetch_one(pool).await?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_teardown_idempotent() -> anyhow::Result<()> {
        let pool = create_test_pool().await?;
        let schema = "test_idempotent_schema";

        // Run setup twice - should not fail
        setup_test_db(&pool, schema).await?;
        setup_test_db(&pool, schema).await?;

        let query = "SELECT EXISTS(SELECT 1 FROM information_schema.schemata WHERE schema_name = $1)";
        let exists: bool = sqlx::query_scalar(query).bind(schema).fetch_one(&pool).await?;
        assert!(exists, "Schema should exist after setup");

        teardown_test_db(&pool, schema).await?;

        let exists: bool = sqlx::query_scalar(query).bind(schema).fetch_one(&pool).await?;
        assert!(!exists, "Schema should not exist after teardown");

        Ok(())
    }

    #[test]
    fn test_generate_schema_name() {
        let name1 = generate_test_schema_name("test_foo");
        let name2 = generate_test_schema_name("Test::Bar");
        let name3 = generate_test_schema_name("a".repeat(100).as_str());

        assert_eq!(name1, "test_test_foo");
        assert_eq!(name2, "test_test__bar");
        assert!(name3.len() <= 55); // "test_" + 50 chars
        assert!(name3.starts_with("test_"));
    }
}
