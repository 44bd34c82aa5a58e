// web_app/server_fns.rs - Server functions used by the admin pages
//
// Compiled for both `ssr` and `hydrate`. On the server the bodies run
// against the pool; in the browser `#[server]` turns each function into a
// POST to `/api`.

use leptos::prelude::*;

use crate::web_app::auth::Session;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn pool() -> Result<sqlx::PgPool, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use sqlx::PgPool;
    use leptos_actix::extract;
    use crate::web_app::api::db;

    // First try to get from context (for testing or if manually set)
    if let Some(pool) = use_context::<PgPool>() {
        return Ok(pool);
    }

    // Try global pool (most reliable fallback)
    if let Some(pool) = db::get_db() {
        return Ok(pool);
    }

    match extract().await {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(pool_data) = req.app_data::<Data<PgPool>>() {
                return Ok(pool_data.as_ref().clone());
            }

            if let Some(pool) = req.app_data::<PgPool>() {
                return Ok(pool.clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Database pool not available"))
}

/// One page of manufacturers for the admin list
#[server(FetchManufacturers, "/api")]
pub async fn fetch_manufacturers(
    variables: ManufacturersQueryVariables,
) -> Result<ManufacturerConnection, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!(
        page = variables.page,
        first = variables.first,
        text = ?variables.text,
        "Manufacturers request"
    );

    let pool = pool().await?;

    let result = queries::fetch_manufacturers(&pool, &variables).await;

    match &result {
        Ok(res) => tracing::info!(
            "Manufacturers loaded: {} of {}",
            res.data.len(),
            res.paginator_info.total
        ),
        Err(e) => tracing::error!("Manufacturers query failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Failed to load manufacturers: {}", e)))
}

/// Session of the current request, read from the auth cookie
#[server(CurrentSession, "/api")]
pub async fn current_session() -> Result<Option<Session>, ServerFnError> {
    use actix_web::HttpRequest;
    use leptos_actix::extract;
    use crate::web_app::auth::AUTH_CRED_COOKIE;

    let req: HttpRequest = extract().await?;
    let session = req
        .cookie(AUTH_CRED_COOKIE)
        .and_then(|cookie| Session::from_cookie(cookie.value()));

    if session.is_none() {
        tracing::debug!("No valid {} cookie on request", AUTH_CRED_COOKIE);
    }
    Ok(session)
}
