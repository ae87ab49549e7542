// web_app/pages/invoice.rs - Invoice create / edit form

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::SubmitEvent;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::{field_error, replace_history, report_submit_failure};
use crate::web_app::components::*;
use crate::web_app::forms::{load_is_current, FieldErrors, FormMode};
use crate::web_app::model::{Invoice, InvoiceDraft, InvoiceStatus};
use crate::web_app::routes;
use crate::web_app::server_fns::{create_invoice, get_invoice, list_customers, update_invoice};

fn status_options() -> Vec<(String, String)> {
    InvoiceStatus::ALL
        .iter()
        .map(|status| (status.as_str().to_string(), status.label().to_string()))
        .collect()
}

#[component]
pub fn InvoicePage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let notices = use_notices();

    let mode = Memo::new(move |_| {
        let raw = params.with(|p| p.get("id"));
        FormMode::from_param(raw.as_deref())
    });

    let customer_id = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let status = RwSignal::new(InvoiceStatus::default().as_str().to_string());
    let sent_at = RwSignal::new(String::new());
    let invoice = RwSignal::new(None::<Invoice>);
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());

    let fill = move |draft: InvoiceDraft| {
        customer_id.set(draft.customer_id);
        amount.set(draft.amount);
        status.set(draft.status.as_str().to_string());
        sent_at.set(draft.sent_at);
    };

    // Choices for the customer select
    let customers = LocalResource::new(list_customers);
    let customer_options = Signal::derive(move || match customers.get() {
        Some(Ok(list)) => list
            .into_iter()
            .map(|c| (c.id.to_string(), c.full_name()))
            .collect(),
        _ => Vec::new(),
    });

    Effect::new(move || {
        if let Some(Err(e)) = customers.get() {
            tracing::warn!("Failed to load customer choices: {}", e);
            notices.error("Customers could not be loaded");
        }
    });

    let load_navigate = navigate.clone();
    Effect::new(move || {
        errors.set(FieldErrors::new());
        match mode.get() {
            None => {
                notices.error("Unknown invoice");
                load_navigate(routes::INVOICES, replace_history());
            }
            Some(FormMode::Create) => {
                loading.set(false);
                invoice.set(None);
                fill(InvoiceDraft::default());
            }
            Some(FormMode::Edit(id)) => {
                loading.set(true);
                let navigate = load_navigate.clone();
                spawn_local(async move {
                    let result = get_invoice(id).await;
                    if !load_is_current(mode.try_get_untracked().flatten(), id) {
                        tracing::debug!("Dropping stale load of invoice {}", id);
                        return;
                    }
                    match result {
                        Ok(loaded) => {
                            fill(InvoiceDraft::from(&loaded));
                            invoice.try_set(Some(loaded));
                            loading.try_set(false);
                        }
                        Err(e) => {
                            tracing::warn!("Failed to load invoice {}: {}", id, e);
                            notices.error(format!("The invoice could not be loaded: {}", e));
                            navigate(routes::INVOICES, replace_history());
                        }
                    }
                });
            }
        }
    });

    let draft = move || InvoiceDraft {
        customer_id: customer_id.get_untracked(),
        amount: amount.get_untracked(),
        status: status.get_untracked().parse().unwrap_or_default(),
        sent_at: sent_at.get_untracked(),
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        errors.set(FieldErrors::new());

        let Some(mode) = mode.get_untracked() else {
            return;
        };

        // Unparseable input never reaches the server
        let payload = match draft().to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                report_submit_failure(&e, errors, notices);
                return;
            }
        };

        let navigate = navigate.clone();
        saving.set(true);

        spawn_local(async move {
            let result = match mode {
                FormMode::Create => create_invoice(payload).await,
                FormMode::Edit(id) => update_invoice(id, payload).await,
            };
            saving.try_set(false);

            match result {
                Ok(saved) => match mode {
                    FormMode::Create => {
                        notices.success(format!("Invoice n°{} created", saved.chrono));
                        navigate(routes::INVOICES, replace_history());
                    }
                    FormMode::Edit(_) => {
                        notices.success("Invoice updated");
                        invoice.try_set(Some(saved));
                    }
                },
                Err(e) => report_submit_failure(&e, errors, notices),
            }
        });
    };

    let title = move || match (mode.get(), invoice.get()) {
        (Some(FormMode::Edit(_)), Some(loaded)) => format!("Invoice n°{}", loaded.chrono),
        (Some(FormMode::Edit(id)), None) => format!("Invoice #{}", id),
        _ => "New invoice".to_string(),
    };

    view! {
        <section class="max-w-xl">
            <a href=routes::INVOICES class="text-sm text-blue-700 hover:underline">"← Back to invoices"</a>
            <h1 class="text-2xl font-bold text-gray-900 mt-2 mb-6">{title}</h1>

            {move || loading.get().then(|| view! { <Loading message="Loading invoice..." /> })}

            <form
                on:submit=on_submit
                class="bg-white rounded-xl shadow-sm border border-gray-100 p-6"
                class:hidden=move || loading.get()
            >
                <SelectField
                    name="customer_id"
                    label="Customer"
                    placeholder="Choose a customer"
                    value=customer_id
                    options=customer_options
                    error=field_error(errors, "customer_id")
                />
                <Field
                    name="amount"
                    label="Amount (€)"
                    placeholder="0.00"
                    value=amount
                    error=field_error(errors, "amount")
                />
                <SelectField
                    name="status"
                    label="Status"
                    value=status
                    options=Signal::derive(status_options)
                    error=field_error(errors, "status")
                />
                <Field
                    name="sent_at"
                    label="Sent on"
                    input_type="date"
                    value=sent_at
                    error=field_error(errors, "sent_at")
                />
                <button
                    type="submit"
                    class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50 transition-colors"
                    disabled=move || saving.get()
                >
                    "Save"
                </button>
            </form>
        </section>
    }
}
