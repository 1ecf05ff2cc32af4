//! EdaMorph Kernel Library
//!
//! Navigation registry, tabular file import, and the HTTP API the frontend
//! talks to. The `edamorph` binary wires these into a running server.

pub mod config;
pub mod error;
pub mod import;
pub mod menu;
pub mod routes;
pub mod state;

use axum::Router;
use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the full application router.
pub fn app(config: &Config, state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::menu::router())
        .merge(routes::import::router())
        .merge(routes::frontend::router())
        .layer(build_cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    if config.cors_allowed_origins.len() == 1 && config.cors_allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let mut origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        // The dev server calls the API cross-origin
        if config.dev_mode
            && let Ok(dev) = config.frontend_dev_url.parse::<HeaderValue>()
            && !origins.contains(&dev)
        {
            origins.push(dev);
        }

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    }
}
