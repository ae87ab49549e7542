// web_app/pages/customer.rs - Customer create / edit form
//
// `/customers/new` creates, `/customers/:id` edits. Any other id sends the
// user back to the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::SubmitEvent;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::{field_error, replace_history, report_submit_failure};
use crate::web_app::components::*;
use crate::web_app::format::format_amount;
use crate::web_app::forms::{load_is_current, FieldErrors, FormMode};
use crate::web_app::model::{Customer, CustomerDraft};
use crate::web_app::routes;
use crate::web_app::server_fns::{create_customer, get_customer, update_customer};

#[component]
pub fn CustomerPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let notices = use_notices();

    let mode = Memo::new(move |_| {
        let raw = params.with(|p| p.get("id"));
        FormMode::from_param(raw.as_deref())
    });

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let customer = RwSignal::new(None::<Customer>);
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());

    let fill = move |draft: CustomerDraft| {
        first_name.set(draft.first_name);
        last_name.set(draft.last_name);
        email.set(draft.email);
        company.set(draft.company);
    };

    let load_navigate = navigate.clone();
    Effect::new(move || {
        errors.set(FieldErrors::new());
        match mode.get() {
            None => {
                notices.error("Unknown customer");
                load_navigate(routes::CUSTOMERS, replace_history());
            }
            Some(FormMode::Create) => {
                loading.set(false);
                customer.set(None);
                fill(CustomerDraft::default());
            }
            Some(FormMode::Edit(id)) => {
                loading.set(true);
                let navigate = load_navigate.clone();
                spawn_local(async move {
                    let result = get_customer(id).await;
                    if !load_is_current(mode.try_get_untracked().flatten(), id) {
                        tracing::debug!("Dropping stale load of customer {}", id);
                        return;
                    }
                    match result {
                        Ok(loaded) => {
                            fill(CustomerDraft::from(&loaded));
                            customer.try_set(Some(loaded));
                            loading.try_set(false);
                        }
                        Err(e) => {
                            tracing::warn!("Failed to load customer {}: {}", id, e);
                            notices.error(format!("The customer could not be loaded: {}", e));
                            navigate(routes::CUSTOMERS, replace_history());
                        }
                    }
                });
            }
        }
    });

    let draft = move || CustomerDraft {
        first_name: first_name.get_untracked(),
        last_name: last_name.get_untracked(),
        email: email.get_untracked(),
        company: company.get_untracked(),
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        errors.set(FieldErrors::new());

        let Some(mode) = mode.get_untracked() else {
            return;
        };
        let payload = draft().to_payload();
        let navigate = navigate.clone();
        saving.set(true);

        spawn_local(async move {
            let result = match mode {
                FormMode::Create => create_customer(payload).await,
                FormMode::Edit(id) => update_customer(id, payload).await,
            };
            saving.try_set(false);

            match result {
                Ok(saved) => match mode {
                    FormMode::Create => {
                        notices.success(format!("Customer {} created", saved.full_name()));
                        navigate(routes::CUSTOMERS, replace_history());
                    }
                    FormMode::Edit(_) => {
                        notices.success("Customer updated");
                        customer.try_set(Some(saved));
                    }
                },
                Err(e) => report_submit_failure(&e, errors, notices),
            }
        });
    };

    let title = move || match mode.get() {
        Some(FormMode::Edit(id)) => format!("Customer #{}", id),
        _ => "New customer".to_string(),
    };

    view! {
        <section class="max-w-xl">
            <a href=routes::CUSTOMERS class="text-sm text-blue-700 hover:underline">"← Back to customers"</a>
            <h1 class="text-2xl font-bold text-gray-900 mt-2 mb-6">{title}</h1>

            {move || loading.get().then(|| view! { <Loading message="Loading customer..." /> })}

            {move || customer.get().map(|c| view! {
                <div class="flex gap-4 mb-6 text-sm text-gray-600">
                    <span>{format!("{} invoice(s)", c.invoice_count())}</span>
                    <span>{format!("Total {}", format_amount(c.total_amount))}</span>
                    <span>{format!("Unpaid {}", format_amount(c.unpaid_amount))}</span>
                </div>
            })}

            <form
                on:submit=on_submit
                class="bg-white rounded-xl shadow-sm border border-gray-100 p-6"
                class:hidden=move || loading.get()
            >
                <Field name="first_name" label="First name" value=first_name error=field_error(errors, "first_name") />
                <Field name="last_name" label="Last name" value=last_name error=field_error(errors, "last_name") />
                <Field
                    name="email"
                    label="Email"
                    input_type="email"
                    value=email
                    error=field_error(errors, "email")
                />
                <Field
                    name="company"
                    label="Company"
                    placeholder="Optional"
                    value=company
                    error=field_error(errors, "company")
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
