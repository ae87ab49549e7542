// web_app/listing/mod.rs - List management shared by the list pages
//
// - search.rs: free-text filter over loaded entities
// - pagination.rs: 1-based page slicing
// - state.rs: ListState and optimistic deletes

pub mod pagination;
pub mod search;
pub mod state;

pub use pagination::{page_count, paginate, ITEMS_PER_PAGE};
pub use search::{filter_items, Searchable};
pub use state::{Keyed, ListState, PendingDelete};
