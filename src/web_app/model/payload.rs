// web_app/model/payload.rs - Create/update records and their form drafts
//
// Drafts hold exactly what the user typed. Converting a draft into a
// payload reports parse problems as violations so that the form renders
// them the same way as violations coming back from the server.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ApiError, Customer, Invoice, InvoiceStatus, Violation};

const NAME_MIN_CHARS: usize = 3;
const TEXT_MAX_CHARS: usize = 255;
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

// The amount column is NUMERIC(12, 2)
const AMOUNT_MAX_SCALE: u32 = 2;
const AMOUNT_LIMIT: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

/// Record sent to `create_customer` / `update_customer`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
}

impl CustomerPayload {
    /// Trims every field and turns a blank company into `None`
    pub fn normalized(self) -> Self {
        let company = self
            .company
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            company,
        }
    }

    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        check_name(&mut violations, "first_name", "First name", &self.first_name);
        check_name(&mut violations, "last_name", "Last name", &self.last_name);

        let email = self.email.trim();
        if email.is_empty() {
            violations.push(Violation::new("email", "Email is required"));
        } else if !is_valid_email(email) {
            violations.push(Violation::new("email", "Email address is not valid"));
        }

        if let Some(company) = &self.company {
            if company.chars().count() > TEXT_MAX_CHARS {
                violations.push(Violation::new(
                    "company",
                    format!("Company must be at most {} characters", TEXT_MAX_CHARS),
                ));
            }
        }

        violations
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        into_result(self.violations())
    }
}

/// Record sent to `create_invoice` / `update_invoice`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayload {
    pub customer_id: i32,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    /// Defaults to the creation time when absent
    pub sent_at: Option<NaiveDateTime>,
}

impl InvoicePayload {
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.customer_id <= 0 {
            violations.push(Violation::new("customer_id", "A customer is required"));
        }
        if self.amount <= Decimal::ZERO {
            violations.push(Violation::new("amount", "Amount must be greater than zero"));
        } else if self.amount >= AMOUNT_LIMIT {
            violations.push(Violation::new("amount", "Amount must be less than 10,000,000,000"));
        } else if self.amount.normalize().scale() > AMOUNT_MAX_SCALE {
            violations.push(Violation::new("amount", "Amount must have at most 2 decimals"));
        }
        violations
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        into_result(self.violations())
    }
}

/// Raw customer form state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
}

impl CustomerDraft {
    pub fn to_payload(&self) -> CustomerPayload {
        CustomerPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            company: Some(self.company.clone()),
        }
        .normalized()
    }
}

impl From<&Customer> for CustomerDraft {
    fn from(customer: &Customer) -> Self {
        Self {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            email: customer.email.clone(),
            company: customer.company.clone().unwrap_or_default(),
        }
    }
}

/// Raw invoice form state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvoiceDraft {
    /// Selected customer id, empty when nothing is selected
    pub customer_id: String,
    pub amount: String,
    pub status: InvoiceStatus,
    /// `YYYY-MM-DD`, as produced by a date input
    pub sent_at: String,
}

impl InvoiceDraft {
    pub fn to_payload(&self) -> Result<InvoicePayload, ApiError> {
        let mut violations = Vec::new();

        let customer_id = match self.customer_id.trim().parse::<i32>() {
            Ok(id) => id,
            Err(_) => {
                violations.push(Violation::new("customer_id", "A customer is required"));
                0
            }
        };

        let amount_text = self.amount.trim().replace(',', ".");
        let amount = if amount_text.is_empty() {
            violations.push(Violation::new("amount", "Amount is required"));
            Decimal::ZERO
        } else {
            match amount_text.parse::<Decimal>() {
                Ok(amount) => amount,
                Err(_) => {
                    violations.push(Violation::new("amount", "Amount must be a number"));
                    Decimal::ZERO
                }
            }
        };

        let sent_at = match self.sent_at.trim() {
            "" => None,
            text => match NaiveDate::parse_from_str(text, DATE_INPUT_FORMAT) {
                Ok(date) => date.and_hms_opt(0, 0, 0),
                Err(_) => {
                    violations.push(Violation::new("sent_at", "Sent date must be YYYY-MM-DD"));
                    None
                }
            },
        };

        if !violations.is_empty() {
            return Err(ApiError::Validation { violations });
        }

        let payload = InvoicePayload {
            customer_id,
            amount,
            status: self.status,
            sent_at,
        };
        payload.validate()?;
        Ok(payload)
    }
}

impl From<&Invoice> for InvoiceDraft {
    fn from(invoice: &Invoice) -> Self {
        Self {
            customer_id: invoice.customer.id.to_string(),
            amount: invoice.amount.normalize().to_string(),
            status: invoice.status,
            sent_at: invoice.sent_at.format(DATE_INPUT_FORMAT).to_string(),
        }
    }
}

fn into_result(violations: Vec<Violation>) -> Result<(), ApiError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation { violations })
    }
}

fn check_name(violations: &mut Vec<Violation>, path: &str, label: &str, value: &str) {
    let chars = value.trim().chars().count();
    if chars == 0 {
        violations.push(Violation::new(path, format!("{} is required", label)));
    } else if chars < NAME_MIN_CHARS {
        violations.push(Violation::new(
            path,
            format!("{} must be at least {} characters", label, NAME_MIN_CHARS),
        ));
    } else if chars > TEXT_MAX_CHARS {
        violations.push(Violation::new(
            path,
            format!("{} must be at most {} characters", label, TEXT_MAX_CHARS),
        ));
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
