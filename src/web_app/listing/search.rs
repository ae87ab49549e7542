// web_app/listing/search.rs - Client-side free-text filtering
//
// A list page keeps the whole collection in memory and narrows it down on
// every keystroke. Matching is a case-insensitive substring test over the
// fields each entity designates.

use crate::web_app::model::{Customer, Invoice};

/// Implemented by entities that can be narrowed down by the search box
pub trait Searchable {
    /// `needle` is already lowercased and never empty
    fn matches(&self, needle: &str) -> bool;
}

/// Keeps the items matching `query`, in their original order
///
/// An empty query keeps everything.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items.iter().filter(|item| item.matches(&needle)).collect()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Searchable for Customer {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.first_name, needle)
            || contains_ci(&self.last_name, needle)
            || contains_ci(&self.email, needle)
            || self
                .company
                .as_deref()
                .is_some_and(|company| contains_ci(company, needle))
    }
}

impl Searchable for Invoice {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.customer.first_name, needle)
            || contains_ci(&self.customer.last_name, needle)
            // amounts match from the start: "12" finds 1250.5 but not 312
            || self.amount.normalize().to_string().starts_with(needle)
            || contains_ci(self.status.label(), needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::{CustomerRef, InvoiceStatus};
    use rust_decimal::Decimal;

    fn customer(first: &str, last: &str, email: &str, company: Option<&str>) -> Customer {
        Customer {
            id: 0,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            company: company.map(str::to_string),
            invoice_ids: vec![],
            total_amount: Decimal::ZERO,
            unpaid_amount: Decimal::ZERO,
        }
    }

    fn invoice(last: &str, amount: Decimal, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: 0,
            chrono: 1,
            customer: CustomerRef {
                id: 1,
                first_name: "Jane".to_string(),
                last_name: last.to_string(),
            },
            amount,
            status,
            sent_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_customer_fields_are_searched() {
        let c = customer("Linus", "Torvalds", "linus@kernel.org", Some("Linux Foundation"));
        for needle in ["lin", "torv", "kernel.org", "foundation"] {
            assert!(c.matches(needle), "should match {}", needle);
        }
        assert!(!c.matches("apple"));
    }

    #[test]
    fn test_missing_company_never_matches() {
        let c = customer("Ann", "Smith", "ann@example.com", None);
        assert!(!c.matches("acme"));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let items = vec![customer("Ann", "SMITH", "a@b.co", None)];
        assert_eq!(filter_items(&items, "sMiTh").len(), 1);
    }

    #[test]
    fn test_invoice_amount_is_a_prefix_match() {
        let inv = invoice("Doe", Decimal::new(125050, 2), InvoiceStatus::Sent);
        assert!(inv.matches("125"));
        assert!(inv.matches("1250.5"));
        assert!(!inv.matches("250"));
    }

    #[test]
    fn test_invoice_status_label_is_searched() {
        let inv = invoice("Doe", Decimal::ONE, InvoiceStatus::Cancelled);
        assert!(inv.matches("cancel"));
        assert!(!inv.matches("paid"));
    }

    #[test]
    fn test_empty_query_keeps_order() {
        let items = vec![
            customer("B", "Two", "b@x.io", None),
            customer("A", "One", "a@x.io", None),
        ];
        let kept = filter_items(&items, "");
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].last_name, "Two");
    }
}
