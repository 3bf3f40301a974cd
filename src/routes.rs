//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every client route is server-rendered through Leptos; the browser then
//! hydrates the same `client::app::App`. The compiled WASM/CSS bundle is
//! served from `<site_root>/pkg`, and `/healthz` answers load-balancer health checks.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{Config, ConfigError};

/// Full application router: health check, static bundle, and Leptos SSR.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or malformed `[package.metadata.leptos]`).
pub fn app(config: &Config) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(base_routes(config).merge(leptos_router).layer(TraceLayer::new_for_http()))
}

/// Routes that do not depend on Leptos.
fn base_routes(config: &Config) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(config.site_root.join("pkg")))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
