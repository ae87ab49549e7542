// web_app/components/pagination.rs - Page switcher under the list tables

use leptos::prelude::*;

const PAGE_BUTTON: &str = "min-w-[2.5rem] px-3 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                           disabled:opacity-50 disabled:cursor-not-allowed \
                           hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700";
const CURRENT_PAGE_BUTTON: &str = "min-w-[2.5rem] px-3 py-2 bg-blue-600 border border-blue-600 rounded-lg \
                                   shadow-sm font-semibold text-white";

/// Previous / numbered pages / next
///
/// The parent decides whether to render it at all; pages are 1-based.
#[component]
pub fn Pagination(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,
    /// Total number of pages
    #[prop(into)]
    page_count: Signal<usize>,
    /// Called with the requested page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let can_go_prev = move || current_page.get() > 1;
    let can_go_next = move || current_page.get() < page_count.get();

    view! {
        <nav class="flex items-center justify-center gap-2 mt-8 mb-8">
            <button
                type="button"
                class=PAGE_BUTTON
                disabled=move || !can_go_prev()
                on:click=move |_| {
                    if can_go_prev() {
                        on_page_change.run(current_page.get() - 1);
                    }
                }
            >
                "«"
            </button>

            {move || {
                (1..=page_count.get())
                    .map(|page| {
                        let class = move || {
                            if current_page.get() == page { CURRENT_PAGE_BUTTON } else { PAGE_BUTTON }
                        };
                        view! {
                            <button
                                type="button"
                                class=class
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect_view()
            }}

            <button
                type="button"
                class=PAGE_BUTTON
                disabled=move || !can_go_next()
                on:click=move |_| {
                    if can_go_next() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
            >
                "»"
            </button>
        </nav>
    }
}
