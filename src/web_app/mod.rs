// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types and validation (client and server)
// - listing/: Search, pagination and optimistic deletes over loaded lists
// - forms.rs, format.rs, routes.rs: Plain helpers used by pages
// - api/: Database repository functions (server only)
// - server_fns.rs: Server function declarations (both client and server)
// - components/, pages/, app.rs: Leptos UI (both SSR and hydrate)

pub mod format;
pub mod forms;
pub mod listing;
pub mod model;
pub mod routes;

// Repository layer, also used directly by the binaries and db tests
#[cfg(feature = "db-tools")]
pub mod api;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
