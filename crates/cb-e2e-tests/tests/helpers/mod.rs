//! Shared test harness for E2E integration tests.
//!
//! Drives the real `cb-api` router in-process and exposes the same fuel
//! table to tests so HTTP results can be checked against direct core calls.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cb_api::routes::build_router;
use cb_api::state::AppState;
use cb_emissions::{EngineParams, FuelTable};

/// End-to-end test harness around an in-memory API server.
pub struct TestHarness {
    /// Application state shared with the router.
    pub state: AppState,
    /// Axum router for HTTP requests via `tower::oneshot`.
    pub router: Router,
}

impl TestHarness {
    /// Harness with the built-in fuel table and default engine geometry.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Harness with a fuel table parsed from TOML.
    pub fn with_fuel_table(toml: &str) -> Self {
        let table = FuelTable::from_toml_str(toml).unwrap();
        Self::with_state(AppState::new(table, EngineParams::default()))
    }

    pub fn with_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { state, router }
    }

    pub fn table(&self) -> &FuelTable {
        &self.state.fuel_table
    }

    /// POST a JSON body. Returns (HTTP status code, response JSON body).
    pub async fn post(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    /// POST raw bytes as JSON, for malformed-body tests.
    pub async fn post_raw(&self, uri: &str, body: &'static str) -> (StatusCode, serde_json::Value) {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    /// Ingest one raw frame (POST /api/v1/obd-data).
    pub async fn ingest_frame(&self, hex: &str) -> (StatusCode, serde_json::Value) {
        self.post("/api/v1/obd-data", serde_json::json!({ "hex_data": hex }))
            .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }
}

/// Float comparison for values that went through JSON.
pub fn assert_close(actual: &serde_json::Value, expected: f64) {
    let actual = actual
        .as_f64()
        .unwrap_or_else(|| panic!("expected a number, got {actual}"));
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
