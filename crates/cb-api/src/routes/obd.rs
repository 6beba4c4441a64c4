//! Raw frame ingestion and batch decode.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use cb_emissions::estimate_for_reading;
use cb_protocol::{DecodeOutcome, DecodeRequest, ObdDataRequest, ObdDataResponse};

use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/v1/obd-data: decode one frame forwarded by a bridge.
///
/// Fuel-rate and air-flow readings also carry an emission estimate.
pub async fn ingest_obd_data(
    State(state): State<AppState>,
    payload: Result<Json<ObdDataRequest>, JsonRejection>,
) -> ApiResult<Json<ObdDataResponse>> {
    let Json(req) = payload?;

    let parsed = cb_obd::decode(&req.hex_data).inspect_err(|err| {
        tracing::debug!(raw = %req.hex_data, error = %err, "frame rejected");
    })?;

    let fuel_type = state.fuel_type(req.fuel_type.as_deref());
    let emissions = estimate_for_reading(&state.fuel_table, &parsed, fuel_type);

    tracing::info!(
        pid_code = %parsed.pid_code,
        value = ?parsed.value,
        timestamp = req.timestamp.as_deref().unwrap_or("-"),
        "frame decoded"
    );

    Ok(Json(ObdDataResponse {
        ok: true,
        raw: req.hex_data,
        parsed,
        emissions,
    }))
}

/// POST /api/v1/decode: decode independent frames. One bad frame does not
/// fail the batch.
pub async fn decode_frames(
    payload: Result<Json<DecodeRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<DecodeOutcome>>> {
    let Json(req) = payload?;
    req.validate()?;

    let outcomes: Vec<DecodeOutcome> = req
        .frames
        .into_iter()
        .map(|frame| match cb_obd::decode(&frame) {
            Ok(reading) => DecodeOutcome::decoded(frame, reading),
            Err(err) => DecodeOutcome::failed(frame, err.to_string()),
        })
        .collect();

    let failed = outcomes.iter().filter(|o| !o.ok).count();
    tracing::debug!(total = outcomes.len(), failed, "batch decoded");

    Ok(Json(outcomes))
}
