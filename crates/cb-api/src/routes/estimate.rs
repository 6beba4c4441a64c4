//! Direct estimator access and the active fuel table.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use cb_emissions::{
    EngineParams, FuelTable, from_electric_energy, from_fuel_rate, from_mass_air_flow,
    from_speed_rpm_load,
};
use cb_protocol::{EstimateOutput, EstimateRequest, EstimateResponse};

use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/v1/estimate: run one estimation model on caller-supplied
/// inputs.
pub async fn estimate(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> ApiResult<Json<EstimateResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    let table = state.fuel_table.as_ref();
    let output = match &req {
        EstimateRequest::MassAirFlow { maf_gps, fuel_type } => EstimateOutput::Combustion(
            from_mass_air_flow(table, *maf_gps, state.fuel_type(fuel_type.as_deref())),
        ),
        EstimateRequest::FuelRate {
            fuel_rate_lph,
            fuel_type,
        } => EstimateOutput::Combustion(from_fuel_rate(
            table,
            *fuel_rate_lph,
            state.fuel_type(fuel_type.as_deref()),
        )),
        EstimateRequest::SpeedRpmLoad {
            speed_kmh,
            rpm,
            load_pct,
            displacement_l,
            air_density,
            fuel_type,
        } => {
            let engine = EngineParams {
                displacement_l: displacement_l.unwrap_or(state.engine.displacement_l),
                air_density: air_density.unwrap_or(state.engine.air_density),
            };
            EstimateOutput::Combustion(from_speed_rpm_load(
                table,
                *speed_kmh,
                *rpm,
                *load_pct,
                &engine,
                state.fuel_type(fuel_type.as_deref()),
            ))
        }
        EstimateRequest::Electric {
            energy_kwh,
            region_factor,
        } => EstimateOutput::Electric(from_electric_energy(
            table,
            *energy_kwh,
            *region_factor,
        )),
    };

    tracing::debug!(?output, "estimate computed");
    Ok(Json(EstimateResponse {
        ok: true,
        estimate: output,
    }))
}

/// GET /api/v1/fuels: the fuel property table in effect.
pub async fn list_fuels(State(state): State<AppState>) -> Json<FuelTable> {
    Json(state.fuel_table.as_ref().clone())
}
