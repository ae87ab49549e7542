// tests/customer_repository_tests.rs
// Customer repository against a real database, one schema per test

mod common;

use common::{customer_id, with_test_db};
use invoice_crm::web_app::api::customers;
use invoice_crm::web_app::model::{ApiError, CustomerPayload};
use rust_decimal::Decimal;

fn payload(first: &str, last: &str, email: &str, company: Option<&str>) -> CustomerPayload {
    CustomerPayload {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        company: company.map(str::to_string),
    }
}

#[tokio::test]
async fn test_find_all_returns_sample_customers_with_totals() -> anyhow::Result<()> {
    with_test_db("customers_find_all", |pool, schema| async move {
        let all = customers::find_all_customers(&pool, &schema).await?;
        assert_eq!(all.len(), 4);

        let marie = all.iter().find(|c| c.email == "marie@radium.fr").unwrap();
        assert_eq!(marie.invoice_count(), 2);
        assert_eq!(marie.total_amount, Decimal::new(155050, 2));
        assert_eq!(marie.unpaid_amount, Decimal::new(30000, 2));
        assert_eq!(marie.company.as_deref(), Some("Institut du Radium"));

        // Cancelled invoices are not unpaid
        let alan = all.iter().find(|c| c.email == "alan@bletchley.uk").unwrap();
        assert_eq!(alan.total_amount, Decimal::new(82590, 2));
        assert_eq!(alan.unpaid_amount, Decimal::new(4590, 2));
        assert_eq!(alan.company, None);

        let grace = all.iter().find(|c| c.email == "grace@navy.mil").unwrap();
        assert!(grace.invoice_ids.is_empty());
        assert_eq!(grace.total_amount, Decimal::ZERO);
        assert!(grace.can_be_deleted());

        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_find_missing_customer_is_not_found() -> anyhow::Result<()> {
    with_test_db("customers_find_missing", |pool, schema| async move {
        let err = customers::find_customer(&pool, &schema, 999_999).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(!customers::customer_exists(&pool, &schema, 999_999).await?);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_create_trims_and_stores_customer() -> anyhow::Result<()> {
    with_test_db("customers_create", |pool, schema| async move {
        let created = customers::create_customer(
            &pool,
            &schema,
            payload("  Katherine ", "Johnson", "katherine@nasa.gov", Some("  ")),
        )
        .await?;

        assert_eq!(created.first_name, "Katherine");
        assert_eq!(created.company, None);
        assert!(created.invoice_ids.is_empty());

        let found = customers::find_customer(&pool, &schema, created.id).await?;
        assert_eq!(found, created);
        assert_eq!(customers::find_all_customers(&pool, &schema).await?.len(), 5);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_create_rejects_invalid_payload() -> anyhow::Result<()> {
    with_test_db("customers_create_invalid", |pool, schema| async move {
        let err = customers::create_customer(&pool, &schema, payload("Jo", "", "not-an-email", None))
            .await
            .unwrap_err();

        let violations = err.violations().expect("validation error");
        let paths: Vec<&str> = violations.iter().map(|v| v.property_path.as_str()).collect();
        assert!(paths.contains(&"first_name"));
        assert!(paths.contains(&"last_name"));
        assert!(paths.contains(&"email"));

        // nothing was written
        assert_eq!(customers::find_all_customers(&pool, &schema).await?.len(), 4);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_update_customer() -> anyhow::Result<()> {
    with_test_db("customers_update", |pool, schema| async move {
        let id = customer_id(&pool, &schema, "alan@bletchley.uk").await?;
        let updated = customers::update_customer(
            &pool,
            &schema,
            id,
            payload("Alan", "Turing", "alan@manchester.ac.uk", Some("University of Manchester")),
        )
        .await?;

        assert_eq!(updated.email, "alan@manchester.ac.uk");
        assert_eq!(updated.company.as_deref(), Some("University of Manchester"));
        // invoices are untouched
        assert_eq!(updated.invoice_count(), 2);

        let err = customers::update_customer(&pool, &schema, 999_999, payload("Nobody", "Atall", "n@a.io", None))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_delete_customer_without_invoices() -> anyhow::Result<()> {
    with_test_db("customers_delete", |pool, schema| async move {
        let id = customer_id(&pool, &schema, "grace@navy.mil").await?;
        customers::delete_customer(&pool, &schema, id).await?;

        assert!(!customers::customer_exists(&pool, &schema, id).await?);

        // a second delete finds nothing
        let err = customers::delete_customer(&pool, &schema, id).await.unwrap_err();
        assert!(err.is_not_found());
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_delete_customer_with_invoices_is_a_conflict() -> anyhow::Result<()> {
    with_test_db("customers_delete_conflict", |pool, schema| async move {
        let id = customer_id(&pool, &schema, "marie@radium.fr").await?;
        let err = customers::delete_customer(&pool, &schema, id).await.unwrap_err();

        assert!(matches!(err, ApiError::Conflict(_)), "got {:?}", err);
        assert!(customers::customer_exists(&pool, &schema, id).await?);
        Ok(())
    })
    .await
}
