//! Fuel consumption and CO2 estimation models.
//!
//! Every model is a pure function over the fuel table. Nothing here rounds;
//! rounding belongs to whoever presents the numbers.

use serde::{Deserialize, Serialize};

use cb_protocol::{ElectricEstimate, EmissionEstimate, Reading};

use crate::fuel::{FuelProperties, FuelTable};

const GRAMS_PER_KG: f64 = 1000.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// `pidCode` of a Mode 01 engine fuel rate reading.
pub const PID_CODE_FUEL_RATE: &str = "015E";
/// `pidCode` of a Mode 01 mass air flow reading.
pub const PID_CODE_MAF: &str = "0110";

/// Engine geometry used by the speed-density approximation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineParams {
    /// Engine displacement in litres.
    #[serde(default = "default_displacement")]
    pub displacement_l: f64,
    /// Intake air density in kg/m³ (numerically g/L).
    #[serde(default = "default_air_density")]
    pub air_density: f64,
}

fn default_displacement() -> f64 {
    1.5
}

fn default_air_density() -> f64 {
    1.2
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            displacement_l: default_displacement(),
            air_density: default_air_density(),
        }
    }
}

/// Estimate from mass air flow (g/s).
pub fn from_mass_air_flow(table: &FuelTable, maf_gps: f64, fuel_type: &str) -> EmissionEstimate {
    maf_estimate(table.properties(fuel_type), maf_gps)
}

/// Estimate from a directly reported fuel rate (L/h).
pub fn from_fuel_rate(table: &FuelTable, fuel_rate_lph: f64, fuel_type: &str) -> EmissionEstimate {
    fuel_rate_estimate(table.properties(fuel_type), fuel_rate_lph)
}

/// Speed-density estimate from engine speed and load.
///
/// `speed_kmh` is accepted alongside RPM and load but does not enter the
/// formula: air flow depends on the engine only.
pub fn from_speed_rpm_load(
    table: &FuelTable,
    speed_kmh: f64,
    rpm: f64,
    load_pct: f64,
    engine: &EngineParams,
    fuel_type: &str,
) -> EmissionEstimate {
    let _ = speed_kmh;
    let maf_gps = speed_density_maf(rpm, load_pct, engine);
    maf_estimate(table.properties(fuel_type), maf_gps)
}

/// CO2 for an amount of grid energy; `region_factor` overrides the table's
/// grid factor.
pub fn from_electric_energy(
    table: &FuelTable,
    energy_kwh: f64,
    region_factor: Option<f64>,
) -> ElectricEstimate {
    let factor = region_factor.unwrap_or_else(|| table.grid_factor());
    ElectricEstimate {
        energy_kwh,
        co2_kg: energy_kwh * factor,
    }
}

/// Estimate straight from a decoded reading, when it carries a fuel rate or
/// air flow value.
pub fn estimate_for_reading(
    table: &FuelTable,
    reading: &Reading,
    fuel_type: &str,
) -> Option<EmissionEstimate> {
    let value = reading.value?;
    match reading.pid_code.as_str() {
        PID_CODE_FUEL_RATE => Some(from_fuel_rate(table, value, fuel_type)),
        PID_CODE_MAF => Some(from_mass_air_flow(table, value, fuel_type)),
        _ => None,
    }
}

/// Air mass flow (g/s) of a four-stroke engine: it fills its displacement
/// once every two revolutions, scaled by load.
pub fn speed_density_maf(rpm: f64, load_pct: f64, engine: &EngineParams) -> f64 {
    (rpm * (load_pct / 100.0) * engine.displacement_l * engine.air_density) / 120.0
}

pub(crate) fn maf_estimate(props: &FuelProperties, maf_gps: f64) -> EmissionEstimate {
    let fuel_mass_gps = maf_gps / props.afr;
    let fuel_l_per_s = fuel_mass_gps / GRAMS_PER_KG / props.density_kg_per_l;
    let fuel_l_per_hour = fuel_l_per_s * SECONDS_PER_HOUR;
    EmissionEstimate {
        fuel_l_per_hour,
        co2_kg_per_hour: fuel_l_per_hour * props.co2_factor_kg_per_l,
        maf_g_per_s: Some(maf_gps),
    }
}

pub(crate) fn fuel_rate_estimate(props: &FuelProperties, fuel_rate_lph: f64) -> EmissionEstimate {
    EmissionEstimate {
        fuel_l_per_hour: fuel_rate_lph,
        co2_kg_per_hour: fuel_rate_lph * props.co2_factor_kg_per_l,
        maf_g_per_s: None,
    }
}
