// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// Each function is a thin bridge over `web_app::api`; failures travel back
// to the client as ApiError.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn database() -> Result<crate::web_app::api::db::Database, ApiError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use crate::web_app::api::db::{self, Database};

    // First try to get from context (for testing or if manually set)
    if let Some(database) = use_context::<Database>() {
        return Ok(database);
    }

    // Global handle registered by the server binary
    if let Some(database) = db::get_db() {
        return Ok(database);
    }

    let req_result = extract().await;

    match req_result {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(database) = req.app_data::<Data<Database>>() {
                return Ok(database.as_ref().clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ApiError::Transport("Database pool not available".to_string()))
}

#[cfg(feature = "ssr")]
fn log_outcome<T>(operation: &str, result: &Result<T, ApiError>) {
    match result {
        Ok(_) => tracing::info!("{} succeeded", operation),
        Err(ApiError::Validation { violations }) => {
            tracing::info!("{} rejected: {} violation(s)", operation, violations.len())
        }
        Err(e) => tracing::error!("{} failed: {}", operation, e),
    }
}

/// All customers with their invoice ids and totals
#[server(ListCustomers, "/api")]
pub async fn list_customers() -> Result<Vec<Customer>, ApiError> {
    use crate::web_app::api::customers;

    let db = database().await?;
    let result = customers::find_all_customers(&db.pool, &db.schema).await;
    log_outcome("list_customers", &result);
    result
}

#[server(GetCustomer, "/api")]
pub async fn get_customer(id: i32) -> Result<Customer, ApiError> {
    use crate::web_app::api::customers;

    let db = database().await?;
    let result = customers::find_customer(&db.pool, &db.schema, id).await;
    log_outcome("get_customer", &result);
    result
}

#[server(CreateCustomer, "/api")]
pub async fn create_customer(payload: CustomerPayload) -> Result<Customer, ApiError> {
    use crate::web_app::api::customers;

    let db = database().await?;
    let result = customers::create_customer(&db.pool, &db.schema, payload).await;
    log_outcome("create_customer", &result);
    result
}

#[server(UpdateCustomer, "/api")]
pub async fn update_customer(id: i32, payload: CustomerPayload) -> Result<Customer, ApiError> {
    use crate::web_app::api::customers;

    let db = database().await?;
    let result = customers::update_customer(&db.pool, &db.schema, id, payload).await;
    log_outcome("update_customer", &result);
    result
}

/// Fails with a conflict while the customer still owns invoices
#[server(DeleteCustomer, "/api")]
pub async fn delete_customer(id: i32) -> Result<(), ApiError> {
    use crate::web_app::api::customers;

    let db = database().await?;
    let result = customers::delete_customer(&db.pool, &db.schema, id).await;
    log_outcome("delete_customer", &result);
    result
}

/// All invoices ordered by chrono
#[server(ListInvoices, "/api")]
pub async fn list_invoices() -> Result<Vec<Invoice>, ApiError> {
    use crate::web_app::api::invoices;

    let db = database().await?;
    let result = invoices::find_all_invoices(&db.pool, &db.schema).await;
    log_outcome("list_invoices", &result);
    result
}

#[server(GetInvoice, "/api")]
pub async fn get_invoice(id: i32) -> Result<Invoice, ApiError> {
    use crate::web_app::api::invoices;

    let db = database().await?;
    let result = invoices::find_invoice(&db.pool, &db.schema, id).await;
    log_outcome("get_invoice", &result);
    result
}

#[server(CreateInvoice, "/api")]
pub async fn create_invoice(payload: InvoicePayload) -> Result<Invoice, ApiError> {
    use crate::web_app::api::invoices;

    let db = database().await?;
    let result = invoices::create_invoice(&db.pool, &db.schema, payload).await;
    log_outcome("create_invoice", &result);
    result
}

#[server(UpdateInvoice, "/api")]
pub async fn update_invoice(id: i32, payload: InvoicePayload) -> Result<Invoice, ApiError> {
    use crate::web_app::api::invoices;

    let db = database().await?;
    let result = invoices::update_invoice(&db.pool, &db.schema, id, payload).await;
    log_outcome("update_invoice", &result);
    result
}

#[server(DeleteInvoice, "/api")]
pub async fn delete_invoice(id: i32) -> Result<(), ApiError> {
    use crate::web_app::api::invoices;

    let db = database().await?;
    let result = invoices::delete_invoice(&db.pool, &db.schema, id).await;
    log_outcome("delete_invoice", &result);
    result
}
