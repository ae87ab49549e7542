// web_app/components/invoice.rs - Invoice table and status badge

use leptos::prelude::*;

use super::common::{AmountDisplay, Badge};
use crate::web_app::format::format_date;
use crate::web_app::model::{Invoice, InvoiceStatus};
use crate::web_app::routes;

#[component]
pub fn StatusBadge(status: InvoiceStatus) -> impl IntoView {
    view! { <Badge variant=status.badge_variant()>{status.label()}</Badge> }
}

/// One page of invoices
#[component]
pub fn InvoiceTable(
    #[prop(into)]
    invoices: Signal<Vec<Invoice>>,
    /// Called with the id of the invoice to delete
    on_delete: Callback<i32>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden">
            <table class="w-full text-left">
                <thead class="bg-gray-50 text-xs uppercase tracking-wide text-gray-500">
                    <tr>
                        <th class="px-4 py-3">"N°"</th>
                        <th class="px-4 py-3">"Customer"</th>
                        <th class="px-4 py-3">"Sent"</th>
                        <th class="px-4 py-3 text-center">"Status"</th>
                        <th class="px-4 py-3 text-right">"Amount"</th>
                        <th class="px-4 py-3"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    <Show
                        when=move || !invoices.with(|list| list.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="6" class="px-4 py-8 text-center text-gray-500">"No invoices found"</td>
                            </tr>
                        }
                    >
                        <For
                            each=move || invoices.get()
                            key=|invoice| invoice.id
                            children=move |invoice| view! { <InvoiceRow invoice=invoice on_delete=on_delete /> }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn InvoiceRow(invoice: Invoice, on_delete: Callback<i32>) -> impl IntoView {
    let id = invoice.id;
    let customer_id = invoice.customer.id;
    let customer_name = invoice.customer.full_name();

    view! {
        <tr class="hover:bg-gray-50">
            <td class="px-4 py-3 text-gray-500">{invoice.chrono}</td>
            <td class="px-4 py-3">
                <a href=routes::customer(customer_id) class="text-blue-700 hover:underline">{customer_name}</a>
            </td>
            <td class="px-4 py-3 text-gray-700">{format_date(&invoice.sent_at)}</td>
            <td class="px-4 py-3 text-center"><StatusBadge status=invoice.status /></td>
            <td class="px-4 py-3 text-right"><AmountDisplay amount=invoice.amount /></td>
            <td class="px-4 py-3 text-right whitespace-nowrap">
                <a
                    href=routes::invoice(id)
                    class="px-3 py-1 mr-2 text-sm font-medium rounded-lg border border-blue-200 text-blue-700 hover:bg-blue-50"
                >
                    "Edit"
                </a>
                <button
                    type="button"
                    class="px-3 py-1 text-sm font-medium rounded-lg border border-red-200 text-red-700 hover:bg-red-50"
                    on:click=move |_| on_delete.run(id)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
