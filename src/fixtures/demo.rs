// fixtures/demo.rs - Random invoices for a fuller demo database
//
// The sample data fits on a single page; the server can top it up with
// random invoices so that search and pagination have something to do.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use rust_decimal::Decimal;

use crate::web_app::model::{InvoicePayload, InvoiceStatus};

/// Builds `count` invoices spread over `customer_ids`, sent within the
/// 365 days before `now`
pub fn random_invoices(customer_ids: &[i32], count: usize, now: NaiveDateTime) -> Vec<InvoicePayload> {
    if customer_ids.is_empty() {
        return Vec::new();
    }

    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let customer_id = customer_ids[rng.gen_range(0..customer_ids.len())];
            let cents: i64 = rng.gen_range(1_000..500_000);
            let status = InvoiceStatus::ALL[rng.gen_range(0..InvoiceStatus::ALL.len())];
            let days_ago: i64 = rng.gen_range(0..365);

            InvoicePayload {
                customer_id,
                amount: Decimal::new(cents, 2),
                status,
                sent_at: Some(now - Duration::days(days_ago)),
            }
        })
        .collect()
}
