// web_app/pages/list.rs - Behaviour shared by the list pages
//
// Both lists load everything once, then search, paginate and delete
// locally. Deletes are applied to the list before the server answers and
// undone if it refuses. The pages only differ in the table they render.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::Notices;
use crate::web_app::listing::{Keyed, ListState, Searchable};
use crate::web_app::model::ApiError;

/// Texts a list page shows or logs
#[derive(Clone, Copy)]
pub(crate) struct ListLabels {
    /// Singular name used in logs, e.g. `customer`
    pub entity: &'static str,
    pub load_failed: &'static str,
    pub deleted: &'static str,
    /// Prefix of the notice, the server's error follows
    pub delete_failed: &'static str,
}

pub(crate) struct ListPage<T: Send + Sync + 'static> {
    pub loaded: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    pub query: Signal<String>,
    pub visible: Signal<Vec<T>>,
    pub current_page: Signal<usize>,
    pub page_count: Signal<usize>,
    pub shows_pagination: Signal<bool>,
    pub on_search: Callback<String>,
    pub on_page_change: Callback<usize>,
    pub on_delete: Callback<i32>,
}

/// Wires a ListState to its loader and delete server functions
pub(crate) fn use_list_page<T, L, LoadFut, D, DeleteFut>(
    labels: ListLabels,
    notices: Notices,
    load: L,
    delete: D,
) -> ListPage<T>
where
    T: Searchable + Keyed + Clone + Send + Sync + 'static,
    L: Fn() -> LoadFut + 'static,
    LoadFut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    D: Fn(i32) -> DeleteFut + Copy + Send + Sync + 'static,
    DeleteFut: Future<Output = Result<(), ApiError>> + 'static,
{
    let state = RwSignal::new(ListState::<T>::default());
    let loaded = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);

    let items = LocalResource::new(load);

    Effect::new(move || match items.get() {
        Some(Ok(list)) => {
            tracing::debug!("Loaded {} {}(s)", list.len(), labels.entity);
            state.update(|s| s.set_items(list));
            loaded.set(true);
        }
        Some(Err(e)) => {
            tracing::warn!("Failed to load {}s: {}", labels.entity, e);
            load_error.set(Some(e.to_string()));
            notices.error(labels.load_failed);
            loaded.set(true);
        }
        None => {}
    });

    let on_delete = Callback::new(move |id: i32| {
        let Some(pending) = state.try_update(|s| s.begin_delete(id)) else {
            return;
        };

        spawn_local(async move {
            match delete(id).await {
                Ok(()) => {
                    pending.commit();
                    notices.success(labels.deleted);
                }
                Err(e) => {
                    tracing::warn!("Failed to delete {} {}: {}", labels.entity, id, e);
                    state.try_update(|s| s.rollback(pending));
                    notices.error(format!("{}: {}", labels.delete_failed, e));
                }
            }
        });
    });

    ListPage {
        loaded,
        load_error,
        query: Signal::derive(move || state.with(|s| s.query().to_string())),
        visible: Signal::derive(move || state.with(|s| s.visible())),
        current_page: Signal::derive(move || state.with(|s| s.current_page())),
        page_count: Signal::derive(move || state.with(|s| s.page_count())),
        shows_pagination: Signal::derive(move || state.with(|s| s.shows_pagination())),
        on_search: Callback::new(move |text: String| state.update(|s| s.set_query(text))),
        on_page_change: Callback::new(move |page: usize| state.update(|s| s.set_page(page))),
        on_delete,
    }
}
