//! Common test utilities for API testing.
//!
//! Builds an in-process router over a temporary SQLite database so requests
//! can be driven with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use lotto_core::{
    testing::{fixtures, MockTicketStore},
    LotteryConfig, SqliteTicketStore, TicketStore,
};
use lotto_server::{api::create_router, state::AppState};

/// Test fixture for API testing.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Store backing the router
    pub store: Arc<dyn TicketStore>,
    /// Temporary directory for the test database
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Create a fixture backed by SQLite with default lottery settings.
    pub fn new() -> Self {
        Self::with_lottery(LotteryConfig::default())
    }

    /// Create a fixture backed by SQLite with custom lottery settings.
    pub fn with_lottery(lottery: LotteryConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");

        let store: Arc<dyn TicketStore> = Arc::new(
            SqliteTicketStore::new(&db_path).expect("Failed to create ticket store"),
        );

        let mut config = fixtures::config_with_db(&db_path);
        config.lottery = lottery;

        Self::build(config, store, temp_dir)
    }

    /// Create a fixture backed by a mock store the test can steer.
    pub fn with_mock_store(store: Arc<MockTicketStore>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = fixtures::config_with_db(temp_dir.path().join("unused.db"));
        Self::build(config, store, temp_dir)
    }

    fn build(config: lotto_core::Config, store: Arc<dyn TicketStore>, temp_dir: TempDir) -> Self {
        let state = Arc::new(
            AppState::new(config, Arc::clone(&store)).expect("Failed to create app state"),
        );
        Self {
            router: create_router(state),
            store,
            temp_dir,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request("POST", path, None).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status, $response.status, $response.text
        );
    };
}
