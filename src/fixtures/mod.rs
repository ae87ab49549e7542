// fixtures/mod.rs - Table definitions and sample data
//
// Every table knows how to create itself inside a given schema and how to
// fill itself with a small, fixed data set. Integration tests create a
// throwaway schema per test; the server binary uses the same DDL at start-up
// with its configured schema (see `install`).

pub mod demo;
pub mod tables;

use sqlx::PgPool;

pub use tables::{CustomersTable, InvoicesTable};

/// A table that can be created and populated inside any schema
pub trait TestTable {
    /// Idempotent DDL, executed in order
    fn schema_sql(schema: &str) -> Vec<String>;

    /// Fixed sample rows, executed in order after every table exists
    fn sample_data_sql(schema: &str) -> Vec<String>;
}

/// Creates the schema and every table (no rows)
pub async fn install(pool: &PgPool, schema: &str) -> Result<(), sqlx::Error> {
    let statements = CustomersTable::schema_sql(schema)
        .into_iter()
        .chain(InvoicesTable::schema_sql(schema));

    for sql in statements {
        sqlx::query(&sql).execute(pool).await?;
    }
    tracing::info!("Schema '{}' is ready", schema);
    Ok(())
}

/// Inserts the fixed sample customers and invoices
pub async fn load_sample_data(pool: &PgPool, schema: &str) -> Result<(), sqlx::Error> {
    let statements = CustomersTable::sample_data_sql(schema)
        .into_iter()
        .chain(InvoicesTable::sample_data_sql(schema));

    for sql in statements {
        sqlx::query(&sql).execute(pool).await?;
    }
    Ok(())
}
