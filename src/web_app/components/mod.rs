// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Loading, Badge, SearchInput, etc.)
// - pagination.rs: Page switcher shared by both lists
// - notice.rs: Notice context handle and the on-screen stack
// - form.rs: Labelled inputs with inline validation errors
// - customer.rs / invoice.rs: List tables

pub mod common;
pub mod customer;
pub mod form;
pub mod invoice;
pub mod notice;
pub mod pagination;

// Re-export commonly used components for convenience
pub use common::*;
pub use customer::*;
pub use form::*;
pub use invoice::*;
pub use notice::*;
pub use pagination::*;
