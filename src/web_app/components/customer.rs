// web_app/components/customer.rs - Customer table

use leptos::prelude::*;

use super::common::{AmountDisplay, Badge};
use crate::web_app::model::Customer;
use crate::web_app::routes;

const DELETE_BUTTON: &str = "px-3 py-1 text-sm font-medium rounded-lg border border-red-200 text-red-700 \
                             hover:bg-red-50 disabled:opacity-40 disabled:cursor-not-allowed transition-colors";

/// One page of customers
#[component]
pub fn CustomerTable(
    #[prop(into)]
    customers: Signal<Vec<Customer>>,
    /// Called with the id of the customer to delete
    on_delete: Callback<i32>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden">
            <table class="w-full text-left">
                <thead class="bg-gray-50 text-xs uppercase tracking-wide text-gray-500">
                    <tr>
                        <th class="px-4 py-3">"Id"</th>
                        <th class="px-4 py-3">"Customer"</th>
                        <th class="px-4 py-3">"Email"</th>
                        <th class="px-4 py-3">"Company"</th>
                        <th class="px-4 py-3 text-center">"Invoices"</th>
                        <th class="px-4 py-3 text-right">"Total"</th>
                        <th class="px-4 py-3 text-right">"Unpaid"</th>
                        <th class="px-4 py-3"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    <Show
                        when=move || !customers.with(|list| list.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="8" class="px-4 py-8 text-center text-gray-500">"No customers found"</td>
                            </tr>
                        }
                    >
                        <For
                            each=move || customers.get()
                            key=|customer| customer.id
                            children=move |customer| view! { <CustomerRow customer=customer on_delete=on_delete /> }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn CustomerRow(customer: Customer, on_delete: Callback<i32>) -> impl IntoView {
    let id = customer.id;
    let deletable = customer.can_be_deleted();
    let invoice_count = customer.invoice_count();
    let full_name = customer.full_name();
    let total = customer.total_amount;
    let unpaid = customer.unpaid_amount;
    let email = customer.email;
    let company = customer.company.unwrap_or_default();
    let delete_title = if deletable {
        "Delete customer"
    } else {
        "Customers with invoices cannot be deleted"
    };

    view! {
        <tr class="hover:bg-gray-50">
            <td class="px-4 py-3 text-gray-500">{id}</td>
            <td class="px-4 py-3">
                <a href=routes::customer(id) class="font-medium text-blue-700 hover:underline">{full_name}</a>
            </td>
            <td class="px-4 py-3 text-gray-700">{email}</td>
            <td class="px-4 py-3 text-gray-700">{company}</td>
            <td class="px-4 py-3 text-center">
                <Badge variant="blue">{invoice_count}</Badge>
            </td>
            <td class="px-4 py-3 text-right"><AmountDisplay amount=total /></td>
            <td class="px-4 py-3 text-right"><AmountDisplay amount=unpaid /></td>
            <td class="px-4 py-3 text-right">
                <button
                    type="button"
                    class=DELETE_BUTTON
                    disabled={!deletable}
                    title=delete_title
                    on:click=move |_| on_delete.run(id)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
