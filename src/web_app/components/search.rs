// web_app/components/search.rs - Search box
//
// Typing only updates the local input; the parent hears about the text when
// the form is submitted.

use leptos::prelude::*;

use super::common::use_translator;

/// Payload of a submitted search
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchValue {
    pub search_text: String,
}

/// Search form with a text input and submit button
#[component]
pub fn Search(
    /// Callback when the form is submitted
    on_search: Callback<SearchValue>,
    /// Text shown in the box when it is first rendered
    #[prop(optional, into)]
    initial: String,
) -> impl IntoView {
    let t = use_translator();
    let placeholder = t.t("common:text-search-placeholder");
    let button_label = t.t("common:text-search");

    // Local state for the input (allows typing without triggering search on every keystroke)
    let local_query = RwSignal::new(initial);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(SearchValue {
            search_text: local_query.get_untracked(),
        });
    };

    view! {
        <form on:submit=on_submit class="relative flex w-full items-center" role="search">
            <input
                type="text"
                name="search"
                placeholder=placeholder
                autocomplete="off"
                class="w-full h-12 ps-4 pe-24 border border-border-base rounded \
                       focus:ring-2 focus:ring-accent focus:border-transparent \
                       outline-none transition-shadow shadow-sm"
                prop:value=move || local_query.get()
                on:input=move |ev| local_query.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="absolute end-1 h-10 px-4 bg-accent text-white rounded \
                       hover:bg-accent-hover transition-colors font-semibold"
            >
                {button_label}
            </button>
        </form>
    }
}
