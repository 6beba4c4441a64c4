//! API route definitions and router builder.

pub mod estimate;
pub mod health;
pub mod obd;
pub mod session;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Frame ingestion and batch decode
        .route("/obd-data", post(obd::ingest_obd_data))
        .route("/decode", post(obd::decode_frames))
        // Aggregation
        .route("/session", post(session::process_session))
        .route("/trip", post(session::summarize_trip))
        // Estimators
        .route("/estimate", post(estimate::estimate))
        .route("/fuels", get(estimate::list_fuels));

    Router::new()
        .route("/health", get(health::health))
        // Bridges post to the bare path
        .route("/obd-data", post(obd::ingest_obd_data))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
