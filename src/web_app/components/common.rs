// web_app/components/common.rs - Reusable UI components
//
// Small, stateless components that receive all data via props. Text comes
// from the `Translator` in context.

use leptos::prelude::*;

use crate::web_app::i18n::{Translator, DEFAULT_LOCALE, MANUFACTURERS_PAGE_NAMESPACES};

/// Translator provided by the nearest page or the app root
pub fn use_translator() -> Translator {
    use_context::<Translator>()
        .unwrap_or_else(|| Translator::for_page(DEFAULT_LOCALE, MANUFACTURERS_PAGE_NAMESPACES))
}

/// Loading spinner component
///
/// Displays a centered spinner with a message.
#[component]
pub fn Loader(
    /// Message to display below the spinner
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12" role="status">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-accent"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{text}</span>
        </div>
    }
}

/// Error display component
///
/// Shows the message exactly as reported.
#[component]
pub fn ErrorMessage(
    /// The error message to display
    #[prop(into)]
    message: String,
) -> impl IntoView {
    let title = use_translator().t("common:text-something-wrong");

    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4" role="alert">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">{title}</h3>
                <p class="text-red-600 text-sm">{message}</p>
            </div>
        </div>
    }
}

/// White panel used for page headers and tables
#[component]
pub fn Card(
    children: Children,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("p-5 md:p-8 bg-white shadow rounded {}", class)>
            {children()}
        </div>
    }
}

/// Anchor styled as the primary button
#[component]
pub fn LinkButton(
    children: Children,
    /// Link target
    #[prop(into)]
    href: String,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "inline-flex items-center justify-center flex-shrink-0 font-semibold \
                      leading-none rounded outline-none transition duration-300 ease-in-out \
                      bg-accent text-white border border-transparent hover:bg-accent-hover px-5 py-0";

    view! {
        <a href=href class=format!("{} {}", base_class, class)>
            {children()}
        </a>
    }
}

/// Badge component
///
/// A small badge/tag for displaying labels.
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

pub(crate) fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "yellow" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-yellow-100 text-yellow-800 border border-yellow-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variants() {
        assert!(badge_class("green").contains("bg-green-100"));
        assert!(badge_class("yellow").contains("bg-yellow-100"));
        assert!(badge_class("unknown").contains("bg-gray-100"));
    }

    #[test]
    fn test_translator_fallback_without_context() {
        // Outside a reactive owner there is no context, the bundled catalog is used
        let t = use_translator();
        assert_eq!(t.t("common:text-loading"), "Loading...");
    }
}
