//! Common test utilities for E2E testing.
//!
//! Provides an in-process server with a mock catalog injected, plus a fake
//! TMDB upstream for exercising the real client, so tests run without
//! external infrastructure.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tower::ServiceExt;

use vidora_core::testing::MockMovieCatalog;
use vidora_core::{Config, MovieCatalog};
use vidora_server::api::create_router;
use vidora_server::state::AppState;

/// Re-export fixtures for test convenience
pub use vidora_core::testing::fixtures;

/// Test fixture for in-process API testing with a mock catalog.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog - configure movies, listings and failures
    pub catalog: Arc<MockMovieCatalog>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with a mock catalog and default config.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a test fixture with custom configuration.
    pub fn with_config(config: Config) -> Self {
        let catalog = Arc::new(MockMovieCatalog::new());
        let state = Arc::new(AppState::new(
            config,
            Some(Arc::clone(&catalog) as Arc<dyn MovieCatalog>),
        ));
        Self {
            router: create_router(state),
            catalog,
        }
    }

    /// Create a fixture backed by a specific catalog implementation, e.g.
    /// a real `TmdbClient` pointed at a [`FakeTmdb`].
    pub fn with_catalog(config: Config, catalog: Arc<dyn MovieCatalog>) -> Self {
        let mock = Arc::new(MockMovieCatalog::new());
        let state = Arc::new(AppState::new(config, Some(catalog)));
        Self {
            router: create_router(state),
            catalog: mock,
        }
    }

    /// Create a fixture whose state has no catalog, as when the access
    /// token is missing.
    pub fn unconfigured() -> Self {
        let catalog = Arc::new(MockMovieCatalog::new());
        let state = Arc::new(AppState::new(Config::default(), None));
        Self {
            router: create_router(state),
            catalog,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// A request the fake upstream has seen.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    /// Path without the leading slash, e.g. "discover/movie".
    pub path: String,
    /// Raw query string.
    pub query: String,
    /// Authorization header value, if any.
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct FakeTmdbState {
    requests: Arc<Mutex<Vec<UpstreamRequest>>>,
    responses: Arc<Mutex<HashMap<String, (u16, Value)>>>,
}

/// A fake TMDB upstream bound to a local port.
///
/// Records every request it receives and serves canned JSON per path;
/// unknown paths get an empty listing envelope.
pub struct FakeTmdb {
    /// Base URL to point a `TmdbClient` at.
    pub base_url: String,
    requests: Arc<Mutex<Vec<UpstreamRequest>>>,
    responses: Arc<Mutex<HashMap<String, (u16, Value)>>>,
}

impl FakeTmdb {
    /// Bind the fake upstream on an ephemeral port and start serving.
    pub async fn start() -> Self {
        let requests: Arc<Mutex<Vec<UpstreamRequest>>> = Arc::new(Mutex::new(Vec::new()));
        let responses: Arc<Mutex<HashMap<String, (u16, Value)>>> =
            Arc::new(Mutex::new(HashMap::new()));

        let state = FakeTmdbState {
            requests: Arc::clone(&requests),
            responses: Arc::clone(&responses),
        };

        let router = Router::new().fallback(handle_upstream).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake upstream");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
            responses,
        }
    }

    /// Serve `body` with the given status for the exact path (no leading
    /// slash).
    pub async fn respond(&self, path: &str, status: u16, body: Value) {
        self.responses
            .lock()
            .await
            .insert(path.to_string(), (status, body));
    }

    /// All requests seen so far, in order.
    pub async fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().await.clone()
    }
}

async fn handle_upstream(
    State(state): State<FakeTmdbState>,
    headers: HeaderMap,
    uri: Uri,
) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/').to_string();
    let query = uri.query().unwrap_or_default().to_string();
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    state.requests.lock().await.push(UpstreamRequest {
        path: path.clone(),
        query,
        authorization,
    });

    let canned = state.responses.lock().await.get(&path).cloned();
    match canned {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(body),
        ),
        None => (StatusCode::OK, Json(json!({ "results": [] }))),
    }
}
