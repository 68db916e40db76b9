//! Common test utilities for in-process API testing.
//!
//! The fixture builds the real router around a real kitchen with short
//! delays, and drives it with `tower::ServiceExt::oneshot` so no socket is
//! needed.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use kitchen_core::{Config, KitchenConfig, KitchenService};
use kitchen_server::{api::create_router, state::AppState};

/// Test fixture for API testing.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// The kitchen behind the router
    pub kitchen: Arc<KitchenService>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture whose donuts finish within a few tens of milliseconds.
    pub fn new() -> Self {
        Self::with_kitchen(
            KitchenConfig::default()
                .with_prep_delay(Duration::from_millis(10))
                .with_fry_delay(Duration::from_millis(20)),
        )
    }

    /// Create a fixture whose donuts never get past `Placed` during a test.
    pub fn slow() -> Self {
        Self::with_kitchen(
            KitchenConfig::default()
                .with_acknowledge_delay(Duration::from_secs(60))
                .with_prep_delay(Duration::from_secs(60))
                .with_fry_delay(Duration::from_secs(60)),
        )
    }

    /// Create a fixture with custom kitchen delays.
    pub fn with_kitchen(kitchen_config: KitchenConfig) -> Self {
        let config = Config {
            kitchen: kitchen_config.clone(),
            ..Config::default()
        };
        let kitchen = Arc::new(KitchenService::new(kitchen_config));
        let state = Arc::new(AppState::new(config, Arc::clone(&kitchen)));

        Self {
            router: create_router(state),
            kitchen,
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

    /// Send a GET request and return the raw body text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
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
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };

        TestResponse { status, body }
    }

    /// Poll the status endpoint until the order reports no remaining time.
    pub async fn wait_for_order(&self, order_id: &str) -> TestResponse {
        let path = format!("/api/v1/orders/{}", order_id);
        let result = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let response = self.get(&path).await;
                if response.body["estimated_delivery_time"] == 0 {
                    return response;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await;
        result.expect("Order did not finish in time")
    }
}
