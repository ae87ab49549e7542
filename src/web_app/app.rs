// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the notice queue, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::{provide_notices, NoticeStack};
use crate::web_app::pages::{CustomerPage, CustomersPage, InvoicePage, InvoicesPage};
use crate::web_app::routes;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The notice queue shared by every page
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    provide_notices();

    view! {
        <Title text="Invoice CRM" />
        <Meta name="description" content="Customers and their invoices" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/invoice_crm.css" />

        <Router>
            <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
                <Header />
                <NoticeStack />
                <main class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=CustomersPage />
                        <Route path=path!("/customers") view=CustomersPage />
                        <Route path=path!("/customers/:id") view=CustomerPage />
                        <Route path=path!("/invoices") view=InvoicesPage />
                        <Route path=path!("/invoices/:id") view=InvoicePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="/" class="flex items-center gap-2">
                    <span class="text-2xl">"🧾"</span>
                    <span class="text-xl font-bold text-blue-700">"Invoice CRM"</span>
                </a>
                <nav class="flex gap-6 text-sm font-medium">
                    <A href=routes::CUSTOMERS>"Customers"</A>
                    <A href=routes::INVOICES>"Invoices"</A>
                </nav>
            </div>
        </header>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="py-24 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href=routes::CUSTOMERS
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to customers"
                </a>
            </div>
        </div>
    }
}
