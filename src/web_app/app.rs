// web_app/app.rs - Root application component
//
// Sets up meta tags, the default translator and the shop-scoped routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::hooks::use_query_map;
use leptos_router::path;

use crate::web_app::auth::ADMIN_OWNER_AND_STAFF_ONLY;
use crate::web_app::components::{AuthGate, ShopLayout};
use crate::web_app::i18n::{
    Translator, DEFAULT_LOCALE, LOCALE_PARAM, MANUFACTURERS_PAGE_NAMESPACES,
};
use crate::web_app::pages::ManufacturersPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    provide_context(Translator::for_page(DEFAULT_LOCALE, MANUFACTURERS_PAGE_NAMESPACES));

    view! {
        <Title text="Shop Admin" />
        <Meta name="description" content="Shop administration console" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/shop_admin.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/:shop/manufacturers") view=ShopManufacturers />
            </Routes>
        </Router>
    }
}

/// Manufacturer list route; one translator serves the gate, layout and page
#[component]
fn ShopManufacturers() -> impl IntoView {
    let lang = use_query_map().read_untracked().get(LOCALE_PARAM);
    provide_context(Translator::for_query(lang.as_deref(), MANUFACTURERS_PAGE_NAMESPACES));

    view! {
        <AuthGate permissions=ADMIN_OWNER_AND_STAFF_ONLY>
            <ShopLayout>
                <ManufacturersPage />
            </ShopLayout>
        </AuthGate>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600">"Page not found"</p>
            </div>
        </div>
    }
}
