// web_app/api/customers.rs - Customer repository
//
// Plain async functions over a pool, like the rest of the api module. The
// schema is a parameter so integration tests can run against their own
// throwaway schema.

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::web_app::model::{ApiError, Customer, CustomerPayload};

/// Postgres error code for foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Clone, sqlx::FromRow)]
struct CustomerRow {
    id: i32,
    first_name: String,
    last_name: String,
    email: String,
    company: Option<String>,
    invoice_ids: Vec<i32>,
    total_amount: Decimal,
    unpaid_amount: Decimal,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            company: row.company,
            invoice_ids: row.invoice_ids,
            total_amount: row.total_amount,
            unpaid_amount: row.unpaid_amount,
        }
    }
}

/// Customers joined with their invoice ids and totals
fn select_sql(schema: &str, filter: &str) -> String {
    format!(
        r#"
        SELECT
            c.id, c.first_name, c.last_name, c.email, c.company,
            COALESCE(
                array_agg(i.id ORDER BY i.id) FILTER (WHERE i.id IS NOT NULL),
                ARRAY[]::int4[]
            ) AS invoice_ids,
            COALESCE(SUM(i.amount), 0)::numeric AS total_amount,
            COALESCE(
                SUM(i.amount) FILTER (WHERE i.status NOT IN ('PAID', 'CANCELLED')),
                0
            )::numeric AS unpaid_amount
        FROM {schema}.customers c
        LEFT JOIN {schema}.invoices i ON i.customer_id = c.id
        {filter}
        GROUP BY c.id
        ORDER BY c.id
        "#,
        schema = schema,
        filter = filter
    )
}

pub async fn find_all_customers(pool: &PgPool, schema: &str) -> Result<Vec<Customer>, ApiError> {
    let rows = sqlx::query_as::<_, CustomerRow>(&select_sql(schema, ""))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Customer::from).collect())
}

pub async fn find_customer(pool: &PgPool, schema: &str, id: i32) -> Result<Customer, ApiError> {
    let row = sqlx::query_as::<_, CustomerRow>(&select_sql(schema, "WHERE c.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(Customer::from)
        .ok_or_else(|| ApiError::not_found("customer", id))
}

pub async fn customer_exists(pool: &PgPool, schema: &str, id: i32) -> Result<bool, ApiError> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {}.customers WHERE id = $1)", schema);
    let (exists,): (bool,) = sqlx::query_as(&sql).bind(id).fetch_one(pool).await?;
    Ok(exists)
}

pub async fn create_customer(
    pool: &PgPool,
    schema: &str,
    payload: CustomerPayload,
) -> Result<Customer, ApiError> {
    let payload = payload.normalized();
    payload.validate()?;

    let sql = format!(
        r#"
        INSERT INTO {}.customers (first_name, last_name, email, company)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
        schema
    );

    let (id,): (i32,) = sqlx::query_as(&sql)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.email)
        .bind(&payload.company)
        .fetch_one(pool)
        .await?;

    tracing::info!("Created customer {} ({})", id, payload.email);
    find_customer(pool, schema, id).await
}

pub async fn update_customer(
    pool: &PgPool,
    schema: &str,
    id: i32,
    payload: CustomerPayload,
) -> Result<Customer, ApiError> {
    let payload = payload.normalized();
    payload.validate()?;

    let sql = format!(
        r#"
        UPDATE {}.customers
        SET first_name = $1, last_name = $2, email = $3, company = $4
        WHERE id = $5
        "#,
        schema
    );

    let result = sqlx::query(&sql)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.email)
        .bind(&payload.company)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("customer", id));
    }

    find_customer(pool, schema, id).await
}

/// Deletes a customer that owns no invoice
pub async fn delete_customer(pool: &PgPool, schema: &str, id: i32) -> Result<(), ApiError> {
    let count_sql = format!("SELECT COUNT(*) FROM {}.invoices WHERE customer_id = $1", schema);
    let (invoice_count,): (i64,) = sqlx::query_as(&count_sql).bind(id).fetch_one(pool).await?;

    if invoice_count > 0 {
        return Err(owns_invoices(id, invoice_count));
    }

    let sql = format!("DELETE FROM {}.customers WHERE id = $1", schema);
    let result = sqlx::query(&sql)
        .bind(id)
        .execute(pool)
        .await
        .map_err(|err| {
            // an invoice was added between the count and the delete
            let fk_violation = matches!(
                &err,
                sqlx::Error::Database(db) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
            );
            if fk_violation {
                owns_invoices(id, 1)
            } else {
                ApiError::from(err)
            }
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("customer", id));
    }

    tracing::info!("Deleted customer {}", id);
    Ok(())
}

fn owns_invoices(id: i32, count: i64) -> ApiError {
    ApiError::Conflict(format!(
        "customer {} still owns {} invoice(s) and cannot be deleted",
        id, count
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sql_uses_schema_and_filter() {
        let sql = select_sql("test_schema", "WHERE c.id = $1");
        assert!(sql.contains("FROM test_schema.customers c"));
        assert!(sql.contains("LEFT JOIN test_schema.invoices i"));
        assert!(sql.contains("WHERE c.id = $1"));
    }

    #[test]
    fn test_conflict_message() {
        assert_eq!(
            owns_invoices(4, 2).to_string(),
            "customer 4 still owns 2 invoice(s) and cannot be deleted"
        );
    }
}
