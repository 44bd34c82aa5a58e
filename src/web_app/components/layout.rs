// web_app/components/layout.rs - Shop chrome and access control
//
// `AuthGate` resolves the session once per render and only shows its
// children to sessions holding one of the required permissions.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::common::{use_translator, Loader};
use crate::web_app::auth::{has_access, Permission};
use crate::web_app::routes::{self, manufacturers_path};
use crate::web_app::server_fns::current_session;

/// Shop slug from the current route, empty when the route has none
pub fn use_shop_slug() -> Signal<String> {
    let params = use_params_map();
    Signal::derive(move || {
        params
            .read()
            .get(routes::SHOP_PARAM)
            .unwrap_or_default()
    })
}

/// Admin layout for pages scoped to one shop
#[component]
pub fn ShopLayout(children: Children) -> impl IntoView {
    let shop = use_shop_slug();
    let t = use_translator();
    let nav_label = t.t("common:text-manufacturers-publications");

    view! {
        <div class="min-h-screen bg-gray-100 text-body">
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="mx-auto px-5 md:px-8 h-16 flex items-center justify-between">
                    <span class="text-lg font-bold text-heading">{move || shop.get()}</span>
                </div>
            </header>
            <div class="flex">
                <aside class="hidden lg:block w-64 shrink-0 bg-white border-e border-gray-200 min-h-screen">
                    <nav class="p-4 flex flex-col gap-1">
                        <a
                            href=move || manufacturers_path(&shop.get())
                            class="px-3 py-2 rounded text-sm font-medium text-heading hover:bg-gray-50"
                        >
                            {nav_label}
                        </a>
                    </nav>
                </aside>
                <main class="flex-1 p-5 md:p-8 min-w-0">{children()}</main>
            </div>
        </div>
    }
}

/// Renders children only for sessions with one of `permissions`
#[component]
pub fn AuthGate(
    /// Permissions that unlock the content; empty means any visitor
    permissions: &'static [Permission],
    children: ChildrenFn,
) -> impl IntoView {
    let t = use_translator();
    let loading = t.t("common:text-loading");
    let denied = t.t("common:text-access-denied");
    let login = t.t("common:text-login");

    let session = Resource::new(|| (), |_| current_session());
    let children = StoredValue::new(children);

    view! {
        <Suspense fallback=move || view! { <Loader text=loading.clone() /> }>
            {move || {
                session.get().map(|result| {
                    let allowed = match result {
                        Ok(Some(session)) => session.can_access(permissions),
                        Ok(None) => has_access(permissions, &[]),
                        Err(e) => {
                            tracing::warn!("Session lookup failed: {}", e);
                            has_access(permissions, &[])
                        }
                    };

                    if allowed {
                        children.with_value(|children| children()).into_any()
                    } else {
                        view! {
                            <div class="min-h-screen flex items-center justify-center bg-gray-100">
                                <div class="text-center">
                                    <p class="text-xl text-gray-600 mb-8">{denied.clone()}</p>
                                    <a
                                        href=routes::LOGIN
                                        class="px-6 py-3 bg-accent text-white rounded hover:bg-accent-hover transition-colors"
                                    >
                                        {login.clone()}
                                    </a>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                })
            }}
        </Suspense>
    }
}
