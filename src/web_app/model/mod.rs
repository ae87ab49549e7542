// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the WASM front end and the Actix server
// through the server functions, so everything here must compile without
// the `ssr` feature.

pub mod error;
pub mod notice;
pub mod payload;

pub use error::{ApiError, Violation};
pub use notice::{Notice, NoticeLevel, NoticeQueue};
pub use payload::{CustomerDraft, CustomerPayload, InvoiceDraft, InvoicePayload};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice status as stored in `invoices.status`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Sent,
    Cancelled,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Paid,
        InvoiceStatus::Sent,
        InvoiceStatus::Cancelled,
    ];

    /// Database and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "PAID",
            InvoiceStatus::Sent => "SENT",
            InvoiceStatus::Cancelled => "CANCELLED",
        }
    }

    /// Human readable label, also used by the invoice search
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }

    /// Badge colour variant
    pub fn badge_variant(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "green",
            InvoiceStatus::Sent => "blue",
            InvoiceStatus::Cancelled => "red",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAID" => Ok(InvoiceStatus::Paid),
            "SENT" => Ok(InvoiceStatus::Sent),
            "CANCELLED" => Ok(InvoiceStatus::Cancelled),
            other => Err(ApiError::single_violation(
                "status",
                format!("unknown invoice status '{}'", other),
            )),
        }
    }
}

/// Customer with its derived invoice figures (matches the customer list query)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    /// Ids of the invoices owned by this customer
    pub invoice_ids: Vec<i32>,
    pub total_amount: Decimal,
    /// Sum of invoices neither paid nor cancelled
    pub unpaid_amount: Decimal,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn invoice_count(&self) -> usize {
        self.invoice_ids.len()
    }

    /// A customer can only be deleted while it owns no invoice
    pub fn can_be_deleted(&self) -> bool {
        self.invoice_ids.is_empty()
    }

    pub fn to_payload(&self) -> CustomerPayload {
        CustomerPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
        }
    }
}

/// The customer side of an invoice
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl CustomerRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i32,
    /// Sequential invoice number
    pub chrono: i32,
    pub customer: CustomerRef,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub sent_at: chrono::NaiveDateTime,
}

impl Invoice {
    pub fn to_payload(&self) -> InvoicePayload {
        InvoicePayload {
            customer_id: self.customer.id,
            amount: self.amount,
            status: self.status,
            sent_at: Some(self.sent_at),
        }
    }
}
