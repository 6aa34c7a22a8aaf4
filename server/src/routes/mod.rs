//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This host only renders the Leptos app and serves its hydration bundle.
//! Records live in the data service and identities in the authentication
//! provider, so there are no API routes beyond the health probe.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Routes that exist regardless of the rendered app.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Health probe plus Leptos SSR routes plus the `/pkg` asset directory.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section and no `LEPTOS_*` overrides).
pub fn app() -> Result<(Router, LeptosOptions), RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let router = base_routes()
        .nest_service("/pkg", ServeDir::new(site_root_path.join(leptos_options.site_pkg_dir.as_ref())))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    Ok((router, leptos_options))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
