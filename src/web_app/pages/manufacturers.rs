// web_app/pages/manufacturers.rs - Manufacturer list page
//
// Every user event becomes a `Command` fed to `ManufacturerListState`.
// The state answers with the query to run; the page serves it from the
// cache or the server and feeds the answer back as `Command::Loaded`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::error::QueryError;
use crate::web_app::routes::manufacturer_create_path;
use crate::web_app::server_fns::fetch_manufacturers;
use crate::web_app::state::{Command, FetchStatus, ManufacturerListState, QueryCache};

/// Manufacturers / publications page of a shop
///
/// Renders exactly one of loader, error or the list:
/// - header card with title, search box and create link
/// - manufacturer table with pagination
#[component]
pub fn ManufacturersPage() -> impl IntoView {
    let t = StoredValue::new(use_translator());
    let shop = use_shop_slug();
    let state = RwSignal::new(ManufacturerListState::mounting());
    let cache = StoredValue::new(QueryCache::new());

    // Effects only run in the browser; the server renders the loader
    Effect::new(move |_| dispatch(state, cache, Command::Mount));

    let on_search = Callback::new(move |value: SearchValue| {
        dispatch(state, cache, Command::Search(value.search_text))
    });
    let on_pagination = Callback::new(move |page: u32| dispatch(state, cache, Command::GoToPage(page)));
    let refetch = Callback::new(move |()| dispatch(state, cache, Command::Refetch));

    // Bookkeeping changes (sequence numbers, in-flight flag) must not rebuild the page
    let status = Memo::new(move |_| state.with(|s| s.status().clone()));
    let fetching = Memo::new(move |_| state.with(|s| s.is_fetching()));

    view! {
        {move || match status.get() {
            FetchStatus::Loading => view! {
                <Loader text=t.with_value(|t| t.t("common:text-loading")) />
            }.into_any(),
            FetchStatus::Error(message) => view! {
                <ErrorMessage message=message />
            }.into_any(),
            FetchStatus::Ready(data) => {
                let search_term = state.with_untracked(|s| s.search_term().to_string());
                let shop_slug = shop.get();
                let (title, add_label) = t.with_value(|t| {
                    (
                        t.t("common:text-manufacturers-publications"),
                        t.t("form:button-label-add-manufacturer-publication"),
                    )
                });

                view! {
                    <Card class="mb-8 flex flex-col items-center xl:flex-row">
                        <div class="mb-4 md:w-1/3 xl:mb-0">
                            <h1 class="text-xl font-semibold text-heading">{title}</h1>
                        </div>
                        <div class="flex w-full flex-col items-center space-y-4 ms-auto md:flex-row md:space-y-0 xl:w-2/3">
                            <Search on_search=on_search initial=search_term />
                            <LinkButton
                                href=manufacturer_create_path(&shop_slug)
                                class="h-12 md:ms-6 w-full md:w-auto"
                            >
                                <span>"+ " {add_label}</span>
                            </LinkButton>
                        </div>
                    </Card>

                    <ManufacturerList
                        manufacturers=data
                        shop=shop_slug
                        fetching=fetching
                        on_pagination=on_pagination
                        refetch=refetch
                    />
                }.into_any()
            }
        }}
    }
}

/// Feed one command to the state; run the request it leaves for the network
fn dispatch(
    state: RwSignal<ManufacturerListState>,
    cache: StoredValue<QueryCache>,
    command: Command,
) {
    let pending = cache
        .try_with_value(|cache| state.try_update(|s| s.dispatch(cache, command)))
        .flatten()
        .flatten();
    let Some(request) = pending else {
        return;
    };

    spawn_local(async move {
        let result = fetch_manufacturers(request.variables.clone())
            .await
            .map_err(|e| query_error(e).to_string());
        // The page may be gone by the time a response lands
        cache.try_update_value(|cache| {
            state.try_update(|s| s.settle(cache, &request, result));
        });
    });
}

/// Message the page shows for a failed query
///
/// The text carried by the error is passed on unchanged; only a custom
/// wrapped error falls back to its `Display` form.
fn query_error(e: ServerFnError) -> QueryError {
    match e {
        ServerFnError::Deserialization(message) | ServerFnError::Serialization(message) => {
            QueryError::Decode(message)
        }
        ServerFnError::ServerError(message)
        | ServerFnError::Request(message)
        | ServerFnError::Response(message)
        | ServerFnError::MiddlewareError(message)
        | ServerFnError::Registration(message)
        | ServerFnError::Args(message)
        | ServerFnError::MissingArg(message) => QueryError::Server(message),
        other => QueryError::Server(other.to_string()),
    }
}
