// web_app/api/invoices.rs - Invoice repository
//
// Invoices are always read together with their customer's name. New
// invoices get the next chrono number inside the INSERT, with the table
// locked against other writers until the transaction commits.

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::customers::customer_exists;
use crate::web_app::model::{ApiError, CustomerRef, Invoice, InvoicePayload};

#[derive(Clone, sqlx::FromRow)]
struct InvoiceRow {
    id: i32,
    chrono: i32,
    customer_id: i32,
    first_name: String,
    last_name: String,
    amount: Decimal,
    status: String,
    sent_at: chrono::NaiveDateTime,
}

impl TryFrom<InvoiceRow> for Invoice {
    type Error = ApiError;

    fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
        let status = row.status.parse().map_err(|_| {
            ApiError::Database(format!("invoice {} has unknown status '{}'", row.id, row.status))
        })?;

        Ok(Invoice {
            id: row.id,
            chrono: row.chrono,
            customer: CustomerRef {
                id: row.customer_id,
                first_name: row.first_name,
                last_name: row.last_name,
            },
            amount: row.amount,
            status,
            sent_at: row.sent_at,
        })
    }
}

fn select_sql(schema: &str, filter: &str) -> String {
    format!(
        r#"
        SELECT
            i.id, i.chrono, i.customer_id, c.first_name, c.last_name,
            i.amount::numeric AS amount, i.status, i.sent_at
        FROM {schema}.invoices i
        JOIN {schema}.customers c ON c.id = i.customer_id
        {filter}
        ORDER BY i.chrono
        "#,
        schema = schema,
        filter = filter
    )
}

pub async fn find_all_invoices(pool: &PgPool, schema: &str) -> Result<Vec<Invoice>, ApiError> {
    let rows = sqlx::query_as::<_, InvoiceRow>(&select_sql(schema, ""))
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(Invoice::try_from).collect()
}

pub async fn find_invoice(pool: &PgPool, schema: &str, id: i32) -> Result<Invoice, ApiError> {
    let row = sqlx::query_as::<_, InvoiceRow>(&select_sql(schema, "WHERE i.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Invoice::try_from(row),
        None => Err(ApiError::not_found("invoice", id)),
    }
}

/// Validates the payload and checks that its customer exists
async fn check_payload(pool: &PgPool, schema: &str, payload: &InvoicePayload) -> Result<(), ApiError> {
    payload.validate()?;
    if !customer_exists(pool, schema, payload.customer_id).await? {
        return Err(ApiError::single_violation("customer_id", "Customer does not exist"));
    }
    Ok(())
}

pub async fn create_invoice(
    pool: &PgPool,
    schema: &str,
    payload: InvoicePayload,
) -> Result<Invoice, ApiError> {
    check_payload(pool, schema, &payload).await?;

    let mut tx = pool.begin().await?;

    // SHARE ROW EXCLUSIVE conflicts with itself, so concurrent creates read MAX one at a time
    let lock = format!("LOCK TABLE {}.invoices IN SHARE ROW EXCLUSIVE MODE", schema);
    sqlx::query(&lock).execute(&mut *tx).await?;

    let sql = format!(
        r#"
        INSERT INTO {schema}.invoices (chrono, customer_id, amount, status, sent_at)
        VALUES (
            (SELECT COALESCE(MAX(chrono), 0) + 1 FROM {schema}.invoices),
            $1, $2, $3, COALESCE($4, LOCALTIMESTAMP)
        )
        RETURNING id, chrono
        "#,
        schema = schema
    );

    let (id, chrono): (i32, i32) = sqlx::query_as(&sql)
        .bind(payload.customer_id)
        .bind(payload.amount)
        .bind(payload.status.as_str())
        .bind(payload.sent_at)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!("Created invoice {} with chrono {}", id, chrono);
    find_invoice(pool, schema, id).await
}

/// Updates an invoice; its chrono never changes and an absent sent date
/// keeps the stored one
pub async fn update_invoice(
    pool: &PgPool,
    schema: &str,
    id: i32,
    payload: InvoicePayload,
) -> Result<Invoice, ApiError> {
    check_payload(pool, schema, &payload).await?;

    let sql = format!(
        r#"
        UPDATE {}.invoices
        SET customer_id = $1, amount = $2, status = $3, sent_at = COALESCE($4, sent_at)
        WHERE id = $5
        "#,
        schema
    );

    let result = sqlx::query(&sql)
        .bind(payload.customer_id)
        .bind(payload.amount)
        .bind(payload.status.as_str())
        .bind(payload.sent_at)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("invoice", id));
    }

    find_invoice(pool, schema, id).await
}

pub async fn delete_invoice(pool: &PgPool, schema: &str, id: i32) -> Result<(), ApiError> {
    let sql = format!("DELETE FROM {}.invoices WHERE id = $1", schema);
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("invoice", id));
    }

    tracing::info!("Deleted invoice {}", id);
    Ok(())
}
