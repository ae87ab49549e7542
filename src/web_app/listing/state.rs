// web_app/listing/state.rs - View state of a list page
//
// ListState bundles the loaded collection with the search query and the
// current page. Pages keep one ListState inside an RwSignal and derive the
// visible rows from it.
//
// Deletes are optimistic: `begin_delete` removes the row right away and
// hands back a PendingDelete holding that row and the rows after it. If the
// server refuses the delete, `rollback` puts only that row back, so other
// deletes in flight at the same time are left alone.

use super::pagination::{self, ITEMS_PER_PAGE};
use super::search::{filter_items, Searchable};
use crate::web_app::model::{Customer, Invoice};

/// Entities addressed by an id in the list pages
pub trait Keyed {
    fn key(&self) -> i32;
}

impl Keyed for Customer {
    fn key(&self) -> i32 {
        self.id
    }
}

impl Keyed for Invoice {
    fn key(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    query: String,
    current_page: usize,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            current_page: 1,
        }
    }
}

impl<T: Searchable + Keyed + Clone> ListState<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Replaces the collection, e.g. once the loader resolves
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = pagination::clamp_page(self.current_page, self.filtered_len(), ITEMS_PER_PAGE);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Updates the query and jumps back to the first page
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.current_page = 1;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = pagination::clamp_page(page, self.filtered_len(), ITEMS_PER_PAGE);
    }

    pub fn filtered(&self) -> Vec<&T> {
        filter_items(&self.items, &self.query)
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    /// Rows of the current page
    pub fn visible(&self) -> Vec<T> {
        let filtered = self.filtered();
        pagination::paginate(&filtered, self.current_page, ITEMS_PER_PAGE)
            .iter()
            .map(|item| (*item).clone())
            .collect()
    }

    pub fn page_count(&self) -> usize {
        pagination::page_count(self.filtered_len(), ITEMS_PER_PAGE)
    }

    pub fn shows_pagination(&self) -> bool {
        pagination::needs_pagination(self.filtered_len(), ITEMS_PER_PAGE)
    }

    /// Optimistically removes `id` and returns what is needed to undo it
    ///
    /// Removing an id that is not loaded leaves the state untouched, but a
    /// PendingDelete is still returned so callers handle both cases alike.
    pub fn begin_delete(&mut self, id: i32) -> PendingDelete<T> {
        let page = self.current_page;
        let removed = self.items.iter().position(|item| item.key() == id).map(|index| {
            let followers = self.items[index + 1..].iter().map(Keyed::key).collect();
            (self.items.remove(index), followers)
        });
        self.current_page = pagination::clamp_page(self.current_page, self.filtered_len(), ITEMS_PER_PAGE);
        PendingDelete { id, removed, page }
    }

    /// Puts back the row removed by `begin_delete` and the page it was on
    ///
    /// Only that row is restored. Rows removed by other deletes stay removed.
    pub fn rollback(&mut self, pending: PendingDelete<T>) {
        tracing::debug!("Rolling back optimistic delete of {}", pending.id);
        if let Some((item, followers)) = pending.removed {
            if !self.items.iter().any(|existing| existing.key() == pending.id) {
                let index = self
                    .items
                    .iter()
                    .position(|existing| followers.contains(&existing.key()))
                    .unwrap_or(self.items.len());
                self.items.insert(index, item);
            }
        }
        self.current_page = pagination::clamp_page(pending.page, self.filtered_len(), ITEMS_PER_PAGE);
    }
}

/// An optimistic delete waiting for the server's answer
#[must_use = "a pending delete must be committed or rolled back"]
#[derive(Clone, Debug)]
pub struct PendingDelete<T> {
    id: i32,
    /// The removed row and the keys that came after it
    removed: Option<(T, Vec<i32>)>,
    page: usize,
}

impl<T> PendingDelete<T> {
    pub fn id(&self) -> i32 {
        self.id
    }

    /// The server confirmed the delete; the removed row is dropped
    pub fn commit(self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: i32,
        name: String,
    }

    impl Searchable for Row {
        fn matches(&self, needle: &str) -> bool {
            self.name.to_lowercase().contains(needle)
        }
    }

    impl Keyed for Row {
        fn key(&self) -> i32 {
            self.id
        }
    }

    fn rows(n: i32) -> Vec<Row> {
        (1..=n)
            .map(|id| Row {
                id,
                name: format!("row {}", id),
            })
            .collect()
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut state = ListState::new(rows(20));
        state.set_page(3);
        assert_eq!(state.current_page(), 3);

        state.set_query("row 1");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_set_page_is_clamped() {
        let mut state = ListState::new(rows(10));
        state.set_page(7);
        assert_eq!(state.current_page(), 2);
        state.set_page(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_delete_then_rollback_restores_everything() {
        let mut state = ListState::new(rows(9));
        state.set_page(2);
        let before = state.clone();

        let pending = state.begin_delete(9);
        assert_eq!(state.items().len(), 8);
        assert_eq!(state.current_page(), 1, "page 2 no longer exists");

        state.rollback(pending);
        assert_eq!(state, before);
    }

    #[test]
    fn test_rollback_leaves_other_deletes_alone() {
        let mut state = ListState::new(rows(3));
        let first = state.begin_delete(1);
        let second = state.begin_delete(2);

        assert_eq!(second.commit(), 2);
        state.rollback(first);

        let ids: Vec<i32> = state.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_commit_keeps_removal() {
        let mut state = ListState::new(rows(3));
        let pending = state.begin_delete(2);
        assert_eq!(pending.commit(), 2);
        assert!(state.items().iter().all(|r| r.id != 2));
    }

    #[test]
    fn test_set_items_keeps_query() {
        let mut state: ListState<Row> = ListState::default();
        state.set_query("row 2");
        state.set_items(rows(3));
        assert_eq!(state.visible(), vec![Row { id: 2, name: "row 2".to_string() }]);
    }
}
