// fixtures/tables/invoices.rs
//
// The invoices table plus six sample invoices spread over the first three
// sample customers.

use crate::fixtures::TestTable;

/// (customer email, amount, status, sent date)
pub const SAMPLE_INVOICES: &[(&str, &str, &str, &str)] = &[
    ("marie@radium.fr", "1250.50", "PAID", "2024-01-10"),
    ("marie@radium.fr", "300.00", "SENT", "2024-02-01"),
    ("alan@bletchley.uk", "780.00", "CANCELLED", "2024-02-15"),
    ("alan@bletchley.uk", "45.90", "SENT", "2024-03-03"),
    ("ada@engine.org", "2000.00", "PAID", "2024-03-20"),
    ("ada@engine.org", "125.00", "SENT", "2024-04-02"),
];

pub struct InvoicesTable;

impl TestTable for InvoicesTable {
    fn schema_sql(schema: &str) -> Vec<String> {
        vec![
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS {schema}.invoices (
                    id SERIAL PRIMARY KEY,
                    chrono INTEGER NOT NULL UNIQUE,
                    customer_id INTEGER NOT NULL
                        REFERENCES {schema}.customers (id) ON DELETE RESTRICT,
                    amount NUMERIC(12, 2) NOT NULL,
                    status VARCHAR(16) NOT NULL
                        CHECK (status IN ('PAID', 'SENT', 'CANCELLED')),
                    sent_at TIMESTAMP NOT NULL
                )
                "#,
                schema = schema
            ),
            format!(
                "CREATE INDEX IF NOT EXISTS invoices_customer_idx ON {}.invoices (customer_id)",
                schema
            ),
        ]
    }

    fn sample_data_sql(schema: &str) -> Vec<String> {
        SAMPLE_INVOICES
            .iter()
            .enumerate()
            .map(|(i, (email, amount, status, sent_at))| {
                format!(
                    r#"
                    INSERT INTO {schema}.invoices (chrono, customer_id, amount, status, sent_at)
                    SELECT {chrono}, id, {amount}, '{status}', '{sent_at}'::timestamp
                    FROM {schema}.customers WHERE email = '{email}'
                    "#,
                    schema = schema,
                    chrono = i + 1,
                    amount = amount,
                    status = status,
                    sent_at = sent_at,
                    email = email,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chronos_are_sequential() {
        let sql = InvoicesTable::sample_data_sql("crm");
        assert_eq!(sql.len(), SAMPLE_INVOICES.len());
        assert!(sql[0].contains("SELECT 1, id, 1250.50, 'PAID'"));
        assert!(sql[5].contains("SELECT 6, id, 125.00, 'SENT'"));
    }

    #[test]
    fn test_foreign_key_restricts_delete() {
        let ddl = InvoicesTable::schema_sql("crm").join("");
        assert!(ddl.contains("REFERENCES crm.customers (id) ON DELETE RESTRICT"));
    }
}
