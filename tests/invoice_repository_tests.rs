// tests/invoice_repository_tests.rs
// Invoice repository against a real database, one schema per test

mod common;

use chrono::NaiveDate;
use common::{customer_id, with_test_db};
use invoice_crm::web_app::api::{customers, invoices};
use invoice_crm::web_app::model::{InvoicePayload, InvoiceStatus};
use rust_decimal::Decimal;

#[tokio::test]
async fn test_find_all_is_ordered_by_chrono() -> anyhow::Result<()> {
    with_test_db("invoices_find_all", |pool, schema| async move {
        let all = invoices::find_all_invoices(&pool, &schema).await?;
        assert_eq!(all.len(), 6);

        let chronos: Vec<i32> = all.iter().map(|i| i.chrono).collect();
        assert_eq!(chronos, vec![1, 2, 3, 4, 5, 6]);

        let first = &all[0];
        assert_eq!(first.customer.full_name(), "Marie Curie");
        assert_eq!(first.amount, Decimal::new(125050, 2));
        assert_eq!(first.status, InvoiceStatus::Paid);
        assert_eq!(first.sent_at.date(), NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());

        assert_eq!(all[2].status, InvoiceStatus::Cancelled);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_create_assigns_next_chrono() -> anyhow::Result<()> {
    with_test_db("invoices_create_chrono", |pool, schema| async move {
        let grace = customer_id(&pool, &schema, "grace@navy.mil").await?;
        let sent_at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

        let created = invoices::create_invoice(
            &pool,
            &schema,
            InvoicePayload {
                customer_id: grace,
                amount: Decimal::new(99999, 2),
                status: InvoiceStatus::Sent,
                sent_at: Some(sent_at),
            },
        )
        .await?;

        assert_eq!(created.chrono, 7);
        assert_eq!(created.customer.id, grace);
        assert_eq!(created.sent_at, sent_at);

        // the customer's totals follow
        let grace = customers::find_customer(&pool, &schema, grace).await?;
        assert_eq!(grace.invoice_ids, vec![created.id]);
        assert_eq!(grace.unpaid_amount, Decimal::new(99999, 2));
        assert!(!grace.can_be_deleted());
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_create_without_date_is_sent_now() -> anyhow::Result<()> {
    with_test_db("invoices_create_now", |pool, schema| async move {
        let ada = customer_id(&pool, &schema, "ada@engine.org").await?;
        let created = invoices::create_invoice(
            &pool,
            &schema,
            InvoicePayload {
                customer_id: ada,
                amount: Decimal::new(1000, 2),
                status: InvoiceStatus::Paid,
                sent_at: None,
            },
        )
        .await?;

        let today = chrono::Local::now().date_naive();
        let age = (today - created.sent_at.date()).num_days().abs();
        assert!(age <= 1, "sent_at {} should be about now", created.sent_at);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_create_rejects_unknown_customer_and_bad_amount() -> anyhow::Result<()> {
    with_test_db("invoices_create_invalid", |pool, schema| async move {
        let err = invoices::create_invoice(
            &pool,
            &schema,
            InvoicePayload {
                customer_id: 999_999,
                amount: Decimal::new(1000, 2),
                status: InvoiceStatus::Sent,
                sent_at: None,
            },
        )
        .await
        .unwrap_err();
        let violations = err.violations().expect("validation error");
        assert_eq!(violations[0].property_path, "customer_id");

        let marie = customer_id(&pool, &schema, "marie@radium.fr").await?;
        let err = invoices::create_invoice(
            &pool,
            &schema,
            InvoicePayload {
                customer_id: marie,
                amount: Decimal::ZERO,
                status: InvoiceStatus::Sent,
                sent_at: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.violations().expect("validation error")[0].property_path, "amount");

        assert_eq!(invoices::find_all_invoices(&pool, &schema).await?.len(), 6);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_update_keeps_chrono_and_date() -> anyhow::Result<()> {
    with_test_db("invoices_update", |pool, schema| async move {
        let original = invoices::find_all_invoices(&pool, &schema).await?.remove(1);
        let ada = customer_id(&pool, &schema, "ada@engine.org").await?;

        let updated = invoices::update_invoice(
            &pool,
            &schema,
            original.id,
            InvoicePayload {
                customer_id: ada,
                amount: Decimal::new(31000, 2),
                status: InvoiceStatus::Paid,
                sent_at: None,
            },
        )
        .await?;

        assert_eq!(updated.chrono, original.chrono);
        assert_eq!(updated.sent_at, original.sent_at);
        assert_eq!(updated.customer.full_name(), "Ada Lovelace");
        assert_eq!(updated.status, InvoiceStatus::Paid);

        let err = invoices::update_invoice(
            &pool,
            &schema,
            999_999,
            InvoicePayload {
                customer_id: ada,
                amount: Decimal::ONE,
                status: InvoiceStatus::Sent,
                sent_at: None,
            },
        )
        .await
        .unwrap_err();
        assert!(err.is_not_found());
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_delete_invoice_frees_customer() -> anyhow::Result<()> {
    with_test_db("invoices_delete", |pool, schema| async move {
        let ada = customer_id(&pool, &schema, "ada@engine.org").await?;
        let owned: Vec<i32> = customers::find_customer(&pool, &schema, ada).await?.invoice_ids;

        for id in &owned {
            invoices::delete_invoice(&pool, &schema, *id).await?;
        }

        let err = invoices::delete_invoice(&pool, &schema, owned[0]).await.unwrap_err();
        assert!(err.is_not_found());

        // with its invoices gone the customer can be deleted
        customers::delete_customer(&pool, &schema, ada).await?;
        assert_eq!(invoices::find_all_invoices(&pool, &schema).await?.len(), 4);
        Ok(())
    })
    .await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_chronos() -> anyhow::Result<()> {
    with_test_db("invoices_concurrent_chrono", |pool, schema| async move {
        let alan = customer_id(&pool, &schema, "alan@bletchley.uk").await?;

        let handles: Vec<_> = (1..=10)
            .map(|n| {
                let pool = pool.clone();
                let schema = schema.clone();
                tokio::spawn(async move {
                    invoices::create_invoice(
                        &pool,
                        &schema,
                        InvoicePayload {
                            customer_id: alan,
                            amount: Decimal::new(n * 100, 2),
                            status: InvoiceStatus::Sent,
                            sent_at: None,
                        },
                    )
                    .await
                })
            })
            .collect();

        let mut chronos = Vec::new();
        for handle in handles {
            chronos.push(handle.await??.chrono);
        }
        chronos.sort_unstable();
        assert_eq!(chronos, (7..=16).collect::<Vec<_>>());

        let all = invoices::find_all_invoices(&pool, &schema).await?;
        let stored: Vec<i32> = all.iter().map(|i| i.chrono).collect();
        assert_eq!(stored, (1..=16).collect::<Vec<_>>());
        Ok(())
    })
    .await
}
