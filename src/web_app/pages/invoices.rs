// web_app/pages/invoices.rs - Invoice list page

use leptos::prelude::*;

use super::list::{use_list_page, ListLabels};
use crate::web_app::components::*;
use crate::web_app::routes;
use crate::web_app::server_fns::{delete_invoice, list_invoices};

const LABELS: ListLabels = ListLabels {
    entity: "invoice",
    load_failed: "Invoices could not be loaded",
    deleted: "Invoice deleted",
    delete_failed: "The invoice could not be deleted",
};

#[component]
pub fn InvoicesPage() -> impl IntoView {
    let page = use_list_page(LABELS, use_notices(), list_invoices, delete_invoice);

    view! {
        <section>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Invoices"</h1>
                <a
                    href=routes::new_invoice()
                    class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "New invoice"
                </a>
            </div>

            <SearchInput query=page.query on_input=page.on_search />

            {move || {
                if let Some(error) = page.load_error.get() {
                    view! { <ErrorDisplay error=error /> }.into_any()
                } else if !page.loaded.get() {
                    view! { <Loading message="Loading invoices..." /> }.into_any()
                } else {
                    view! {
                        <InvoiceTable invoices=page.visible on_delete=page.on_delete />
                        <Show when=move || page.shows_pagination.get()>
                            <Pagination
                                current_page=page.current_page
                                page_count=page.page_count
                                on_page_change=page.on_page_change
                            />
                        </Show>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
