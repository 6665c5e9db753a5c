//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The clinic UI has no backend API; this router only serves the health probe,
//! the compiled WASM/CSS bundle under `/pkg`, and the Leptos SSR pages.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Non-page routes.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Apply the shared middleware stack to `router`.
fn with_layers(router: Router, config: &ServerConfig) -> Router {
    let router = router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());
    if config.cors_permissive {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}

/// Health probe + Leptos SSR pages + static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(clinic_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || clinic_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let router = base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    Ok(with_layers(router, config))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
