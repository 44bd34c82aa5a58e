// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - state/: Page view-models driven by command messages
// - i18n, routes, auth, error: framework-free helpers
// - server_fns: Server function declarations (both client and server)
// - api/: Database queries and pool (server side only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod auth;
pub mod error;
pub mod i18n;
pub mod model;
pub mod routes;
pub mod state;

// API module for database queries (needs sqlx, no Leptos)
#[cfg(feature = "db-tools")]
pub mod api;

cfg_if::cfg_if! {
    if #[cfg(any(feature = "ssr", feature = "hydrate"))] {
        // Server function declarations - must be available to both client and server
        // The #[server] macro generates client stubs that call the server via HTTP
        pub mod server_fns;

        pub mod components;
        pub mod pages;
        pub mod app;

        // Re-export main app component for convenience
        pub use app::App;
    }
}
