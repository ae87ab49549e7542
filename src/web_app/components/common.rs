// web_app/components/common.rs - Reusable UI components
//
// Small, stateless components used by every page. They receive all data
// through props.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::web_app::format::format_amount;

/// Loading spinner component
///
/// Shown in place of a table or form while its data is being fetched.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Replaces a table whose data could not be loaded.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Error Occurred"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

/// Badge component
///
/// Invoice counts and invoice statuses.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

/// Amount in euros, right aligned in tables
#[component]
pub fn AmountDisplay(amount: Decimal) -> impl IntoView {
    view! {
        <span class="text-gray-900 font-medium tabular-nums">
            {format_amount(amount)}
        </span>
    }
}

/// Free-text search box above the list tables
#[component]
pub fn SearchInput(
    /// Current query
    #[prop(into)]
    query: Signal<String>,
    /// Called with the new query on every keystroke
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="relative mb-6">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <span class="text-gray-400">"🔍"</span>
            </div>
            <input
                type="text"
                placeholder="Search..."
                class="w-full pl-10 pr-4 py-2 border border-gray-300 rounded-lg \
                       focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                       outline-none transition-shadow shadow-sm"
                prop:value=move || query.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variants() {
        assert!(badge_class("green").contains("bg-green-100"));
        assert!(badge_class("red").contains("bg-red-100"));
        assert!(badge_class("blue").contains("bg-blue-100"));
        assert!(badge_class("purple").contains("bg-gray-100"));
    }

    #[test]
    fn test_badge_classes_share_shape() {
        for variant in ["green", "red", "blue", "gray"] {
            let class = badge_class(variant);
            assert!(class.contains("rounded-full"), "Rounded for {}", variant);
            assert!(class.contains("text-xs"), "Text size for {}", variant);
        }
    }
}
