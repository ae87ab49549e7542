// web_app/components/form.rs - Labelled inputs with inline errors

use leptos::prelude::*;

const INPUT: &str = "w-full px-3 py-2 border rounded-lg outline-none transition-shadow \
                     focus:ring-2 focus:ring-blue-500 focus:border-transparent";

fn input_class(has_error: bool) -> String {
    if has_error {
        format!("{} border-red-400 bg-red-50", INPUT)
    } else {
        format!("{} border-gray-300", INPUT)
    }
}

#[component]
fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })
    }
}

/// Text-like input bound to a signal
#[component]
pub fn Field(
    /// Input name, also used as its id
    name: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    /// Message shown under the input
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label for=name class="block text-sm font-semibold text-gray-700 mb-1">{label}</label>
            <input
                id=name
                name=name
                type=input_type
                placeholder=placeholder
                class=move || input_class(error.get().is_some())
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

/// Select bound to a signal holding the selected option's value
///
/// `options` are `(value, label)` pairs. A non-empty placeholder adds a
/// leading option with an empty value.
#[component]
pub fn SelectField(
    name: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label for=name class="block text-sm font-semibold text-gray-700 mb-1">{label}</label>
            <select
                id=name
                name=name
                class=move || input_class(error.get().is_some())
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {(!placeholder.is_empty()).then(|| view! { <option value="">{placeholder}</option> })}
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let is_selected = option_value == selected;
                            view! {
                                <option value=option_value selected=is_selected>{option_label}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <FieldError error=error />
        </div>
    }
}
