#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Tests drive the REAL router built by `edamorph_kernel::app`, so they
//! exercise the same handlers and layers as the binary.

#![allow(dead_code)]

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use edamorph_kernel::{AppState, Config, app};

/// Test application wrapper around the real router.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Production-mode app serving the frontend from `frontend_dir`.
    pub fn new(frontend_dir: &Path) -> Self {
        let config = Config {
            frontend_dir: frontend_dir.to_path_buf(),
            ..Config::default()
        };
        Self::with_config(&config)
    }

    /// Dev-mode app redirecting pages to `dev_url`.
    pub fn dev(dev_url: &str) -> Self {
        let config = Config {
            frontend_dev_url: dev_url.to_string(),
            ..Config::default()
        }
        .with_dev_mode(true);
        Self::with_config(&config)
    }

    pub fn with_config(config: &Config) -> Self {
        let state = AppState::new(config);
        let router = app(config, state.clone());
        Self { router, state }
    }

    /// Send a request through the router.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET a path.
    pub async fn get(&self, uri: &str) -> Response {
        self.request(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    /// POST a JSON body.
    pub async fn post_json(&self, uri: &str, body: &Value) -> Response {
        self.request(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

/// Read a response body as JSON.
pub async fn response_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is not JSON")
}

/// Read a response body as text.
pub async fn response_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
