use serde::{Deserialize, Serialize};

/// Instantaneous fuel consumption and CO2 emission rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionEstimate {
    #[serde(rename = "fuel_L_per_hour")]
    pub fuel_l_per_hour: f64,
    pub co2_kg_per_hour: f64,
    /// Air mass flow the estimate was derived from, when there was one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maf_g_per_s: Option<f64>,
}

/// CO2 attributed to a quantity of grid electricity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectricEstimate {
    #[serde(rename = "energy_kWh")]
    pub energy_kwh: f64,
    pub co2_kg: f64,
}
