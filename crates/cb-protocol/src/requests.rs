//! Request and response bodies exchanged with the HTTP transport.
//!
//! Every request is a typed record; numeric fields are checked with
//! `validate()` before anything reaches the decoder or the estimators.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, non_negative, positive};
use crate::estimate::{ElectricEstimate, EmissionEstimate};
use crate::reading::Reading;
use crate::session::{SessionSamples, SessionSummary};
use crate::trip::{TripSample, TripTotals};

/// A single raw frame forwarded by the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObdDataRequest {
    /// Space-separated hex tokens (e.g., "41 5E 02 1C").
    pub hex_data: String,
    /// Capture time as reported by the bridge. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
}

/// Result of ingesting one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObdDataResponse {
    pub ok: bool,
    pub raw: String,
    pub parsed: Reading,
    /// Present when the reading carries a fuel-rate or air-flow value.
    pub emissions: Option<EmissionEstimate>,
}

/// Batch decode of independent frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeRequest {
    pub frames: Vec<String>,
}

impl DecodeRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.frames.is_empty() {
            return Err(ValidationError::Empty("frames must not be empty".into()));
        }
        Ok(())
    }
}

/// Outcome of decoding one frame in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeOutcome {
    pub ok: bool,
    pub raw: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<Reading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DecodeOutcome {
    pub fn decoded(raw: impl Into<String>, reading: Reading) -> Self {
        Self {
            ok: true,
            raw: raw.into(),
            reading: Some(reading),
            error: None,
        }
    }

    pub fn failed(raw: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            ok: false,
            raw: raw.into(),
            reading: None,
            error: Some(error.into()),
        }
    }
}

/// Session aggregation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    #[serde(flatten)]
    pub samples: SessionSamples,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub ok: bool,
    pub summary: SessionSummary,
}

/// Continuous trip summarisation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub samples: Vec<TripSample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
}

impl TripRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (i, sample) in self.samples.iter().enumerate() {
            if let Some(rate) = sample.fuel_rate_lph {
                non_negative(format!("samples[{i}].fuelRate_Lph"), rate)?;
            }
            if let Some(maf) = sample.maf_gps {
                non_negative(format!("samples[{i}].maf_gps"), maf)?;
            }
            if let Some(speed) = sample.speed_kph {
                non_negative(format!("samples[{i}].speed_kph"), speed)?;
            }
            non_negative(format!("samples[{i}].dt_seconds"), sample.dt_seconds)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripResponse {
    pub ok: bool,
    pub totals: TripTotals,
}

/// Direct invocation of one estimation model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum EstimateRequest {
    MassAirFlow {
        maf_gps: f64,
        #[serde(default)]
        fuel_type: Option<String>,
    },
    FuelRate {
        #[serde(rename = "fuelRate_Lph", alias = "fuel_rate_Lph")]
        fuel_rate_lph: f64,
        #[serde(default)]
        fuel_type: Option<String>,
    },
    SpeedRpmLoad {
        speed_kmh: f64,
        rpm: f64,
        load_pct: f64,
        #[serde(default)]
        displacement_l: Option<f64>,
        #[serde(default)]
        air_density: Option<f64>,
        #[serde(default)]
        fuel_type: Option<String>,
    },
    Electric {
        #[serde(rename = "energy_kWh", alias = "energy_kwh")]
        energy_kwh: f64,
        #[serde(default)]
        region_factor: Option<f64>,
    },
}

impl EstimateRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            EstimateRequest::MassAirFlow { maf_gps, .. } => non_negative("maf_gps", *maf_gps),
            EstimateRequest::FuelRate { fuel_rate_lph, .. } => {
                non_negative("fuelRate_Lph", *fuel_rate_lph)
            }
            EstimateRequest::SpeedRpmLoad {
                speed_kmh,
                rpm,
                load_pct,
                displacement_l,
                air_density,
                ..
            } => {
                non_negative("speed_kmh", *speed_kmh)?;
                non_negative("rpm", *rpm)?;
                non_negative("load_pct", *load_pct)?;
                if let Some(d) = displacement_l {
                    positive("displacement_l", *d)?;
                }
                if let Some(rho) = air_density {
                    positive("air_density", *rho)?;
                }
                Ok(())
            }
            EstimateRequest::Electric {
                energy_kwh,
                region_factor,
            } => {
                non_negative("energy_kWh", *energy_kwh)?;
                if let Some(factor) = region_factor {
                    non_negative("region_factor", *factor)?;
                }
                Ok(())
            }
        }
    }
}

/// Output of a single estimation model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EstimateOutput {
    Combustion(EmissionEstimate),
    Electric(ElectricEstimate),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub ok: bool,
    pub estimate: EstimateOutput,
}
