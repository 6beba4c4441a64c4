//! Session and trip aggregation endpoints.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use cb_protocol::{SessionRequest, SessionResponse, TripRequest, TripResponse};

use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/v1/session: average a session's raw frame arrays into one
/// speed-density estimate.
pub async fn process_session(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> ApiResult<Json<SessionResponse>> {
    let Json(req) = payload?;
    let fuel_type = state.fuel_type(req.fuel_type.as_deref());

    let summary =
        cb_emissions::process_session(&state.fuel_table, &req.samples, &state.engine, fuel_type)
            .inspect_err(|err| tracing::info!(error = %err, "session rejected"))?;

    Ok(Json(SessionResponse { ok: true, summary }))
}

/// POST /api/v1/trip: integrate fuel and CO2 over timed samples.
pub async fn summarize_trip(
    State(state): State<AppState>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> ApiResult<Json<TripResponse>> {
    let Json(req) = payload?;
    req.validate()?;
    let fuel_type = state.fuel_type(req.fuel_type.as_deref());

    let totals = cb_emissions::summarize_trip(&state.fuel_table, &req.samples, fuel_type);
    tracing::info!(
        samples = totals.sample_count,
        skipped = totals.skipped,
        total_co2_kg = totals.total_co2_kg,
        "trip summarized"
    );

    Ok(Json(TripResponse { ok: true, totals }))
}
