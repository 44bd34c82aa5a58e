// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - PostgreSQL connection pool
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use leptos_meta::MetaTags;
    use shop_admin::config::AppConfig;
    use shop_admin::web_app::api::db;
    use shop_admin::web_app::app::App as WebApp;
    use std::io::{Error, ErrorKind};
    use tracing_subscriber::EnvFilter;

    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let config = AppConfig::from_env().map_err(|e| Error::new(ErrorKind::InvalidInput, e))?;

    let pool = db::create_pool(&config)
        .await
        .map_err(|e| Error::new(ErrorKind::Other, e))?;

    // Initialize global pool for server functions
    db::init_db(pool.clone());

    if config.seed_data {
        match db::seed_manufacturers(&pool).await {
            Ok(count) => tracing::info!("Manufacturers table ready with {} rows", count),
            Err(e) => tracing::error!("Failed to seed database: {}", e),
        }
    }

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).map_err(|e| Error::new(ErrorKind::Other, e))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();
        let pool_data = web::Data::new(pool.clone());

        App::new()
            // Share database pool across all handlers
            .app_data(pool_data.clone())
            .app_data(pool.clone())
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
    std::process::exit(1);
}
