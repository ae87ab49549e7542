// web_app/pages/customers.rs - Customer list page

use leptos::prelude::*;

use super::list::{use_list_page, ListLabels};
use crate::web_app::components::*;
use crate::web_app::routes;
use crate::web_app::server_fns::{delete_customer, list_customers};

const LABELS: ListLabels = ListLabels {
    entity: "customer",
    load_failed: "Customers could not be loaded",
    deleted: "Customer deleted",
    delete_failed: "The customer could not be deleted",
};

#[component]
pub fn CustomersPage() -> impl IntoView {
    let page = use_list_page(LABELS, use_notices(), list_customers, delete_customer);

    view! {
        <section>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Customers"</h1>
                <a
                    href=routes::new_customer()
                    class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "New customer"
                </a>
            </div>

            <SearchInput query=page.query on_input=page.on_search />

            {move || {
                if let Some(error) = page.load_error.get() {
                    view! { <ErrorDisplay error=error /> }.into_any()
                } else if !page.loaded.get() {
                    view! { <Loading message="Loading customers..." /> }.into_any()
                } else {
                    view! {
                        <CustomerTable customers=page.visible on_delete=page.on_delete />
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
