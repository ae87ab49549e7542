// web_app/api/mod.rs - API module for server-side logic
//
// Repository functions for customers and invoices plus the pool handle
// they run on. Server functions in `web_app::server_fns` wrap these.

pub mod customers;
pub mod db;
pub mod invoices;
