// web_app/pages/mod.rs - Page components module
//
// Page-level components that compose smaller components into full pages.
// Each page corresponds to a route in the application.

pub mod customer;
pub mod customers;
pub mod invoice;
pub mod invoices;
mod list;

pub use customer::CustomerPage;
pub use customers::CustomersPage;
pub use invoice::InvoicePage;
pub use invoices::InvoicesPage;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::web_app::components::Notices;
use crate::web_app::forms::{FieldErrors, SubmitFailure};
use crate::web_app::model::ApiError;

/// Navigation that replaces the current history entry
pub(crate) fn replace_history() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// Routes a failed save either to the fields or to a notice
pub(crate) fn report_submit_failure(err: &ApiError, errors: RwSignal<FieldErrors>, notices: Notices) {
    match SubmitFailure::from(err) {
        SubmitFailure::Fields(fields) => {
            tracing::debug!("Submit rejected with {} field error(s)", fields.len());
            errors.try_set(fields);
            notices.error("The form contains errors");
        }
        SubmitFailure::Other(message) => {
            tracing::warn!("Submit failed: {}", message);
            notices.error(format!("The changes could not be saved: {}", message));
        }
    }
}

/// Reactive lookup of one field's error message
pub(crate) fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|errors| errors.get(field).map(str::to_string)))
}
