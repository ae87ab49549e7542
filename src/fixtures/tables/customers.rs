// fixtures/tables/customers.rs
//
// The customers table plus four sample customers. Grace Hopper owns no
// invoice, which makes her the only deletable sample customer.

use crate::fixtures::TestTable;

/// (first name, last name, email, company)
pub const SAMPLE_CUSTOMERS: &[(&str, &str, &str, Option<&str>)] = &[
    ("Marie", "Curie", "marie@radium.fr", Some("Institut du Radium")),
    ("Alan", "Turing", "alan@bletchley.uk", None),
    ("Ada", "Lovelace", "ada@engine.org", Some("Analytical Engines")),
    ("Grace", "Hopper", "grace@navy.mil", None),
];

pub struct CustomersTable;

impl TestTable for CustomersTable {
    fn schema_sql(schema: &str) -> Vec<String> {
        vec![
            format!("CREATE SCHEMA IF NOT EXISTS {}", schema),
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS {}.customers (
                    id SERIAL PRIMARY KEY,
                    first_name VARCHAR(255) NOT NULL,
                    last_name VARCHAR(255) NOT NULL,
                    email VARCHAR(255) NOT NULL,
                    company VARCHAR(255),
                    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
                )
                "#,
                schema
            ),
        ]
    }

    fn sample_data_sql(schema: &str) -> Vec<String> {
        let values = SAMPLE_CUSTOMERS
            .iter()
            .map(|(first, last, email, company)| {
                let company = company
                    .map(|c| format!("'{}'", c))
                    .unwrap_or_else(|| "NULL".to_string());
                format!("('{}', '{}', '{}', {})", first, last, email, company)
            })
            .collect::<Vec<_>>()
            .join(",\n");

        vec![format!(
            "INSERT INTO {}.customers (first_name, last_name, email, company) VALUES\n{}",
            schema, values
        )]
    }
}
