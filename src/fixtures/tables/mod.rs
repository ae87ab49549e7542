// fixtures/tables/mod.rs
//
// One struct per table, each implementing TestTable. Customers must be
// created before invoices because of the foreign key.

pub mod customers;
pub mod invoices;

pub use customers::CustomersTable;
pub use invoices::InvoicesTable;
