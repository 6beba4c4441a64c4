use serde::{Deserialize, Serialize};

fn default_dt() -> f64 {
    1.0
}

/// One tick of continuously logged trip data.
///
/// A sample contributes to the trip totals only when exactly one of
/// `fuel_rate_lph` / `maf_gps` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSample {
    #[serde(
        rename = "fuelRate_Lph",
        alias = "fuel_rate_Lph",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fuel_rate_lph: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maf_gps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_kph: Option<f64>,
    /// Seconds covered by this sample.
    #[serde(default = "default_dt", alias = "dt")]
    pub dt_seconds: f64,
}

/// Where a sample's instantaneous fuel rate comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateSource {
    /// Directly reported fuel rate in L/h.
    FuelRate(f64),
    /// Mass air flow in g/s.
    MassAirFlow(f64),
}

impl TripSample {
    pub fn with_fuel_rate(fuel_rate_lph: f64) -> Self {
        Self {
            fuel_rate_lph: Some(fuel_rate_lph),
            maf_gps: None,
            speed_kph: None,
            dt_seconds: default_dt(),
        }
    }

    pub fn with_maf(maf_gps: f64) -> Self {
        Self {
            fuel_rate_lph: None,
            maf_gps: Some(maf_gps),
            speed_kph: None,
            dt_seconds: default_dt(),
        }
    }

    pub fn speed(mut self, speed_kph: f64) -> Self {
        self.speed_kph = Some(speed_kph);
        self
    }

    pub fn dt(mut self, dt_seconds: f64) -> Self {
        self.dt_seconds = dt_seconds;
        self
    }

    /// The sample's rate source, or `None` unless exactly one is present.
    pub fn rate_source(&self) -> Option<RateSource> {
        match (self.fuel_rate_lph, self.maf_gps) {
            (Some(rate), None) => Some(RateSource::FuelRate(rate)),
            (None, Some(maf)) => Some(RateSource::MassAirFlow(maf)),
            _ => None,
        }
    }
}

/// Time-integrated totals over a sequence of [`TripSample`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TripTotals {
    #[serde(rename = "total_fuel_L")]
    pub total_fuel_l: f64,
    pub total_co2_kg: f64,
    pub trip_time_s: f64,
    pub avg_speed_kph: f64,
    /// Samples that contributed.
    #[serde(rename = "sampleCount")]
    pub sample_count: usize,
    /// Samples without a usable rate source.
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_defaults_to_one_second() {
        let sample: TripSample = serde_json::from_str(r#"{"maf_gps": 10.0}"#).unwrap();
        assert_eq!(sample.dt_seconds, 1.0);
        assert_eq!(sample.rate_source(), Some(RateSource::MassAirFlow(10.0)));
    }

    #[test]
    fn accepts_short_field_aliases() {
        let sample: TripSample =
            serde_json::from_str(r#"{"fuel_rate_Lph": 6.0, "speed_kph": 50, "dt": 2}"#).unwrap();
        assert_eq!(sample.fuel_rate_lph, Some(6.0));
        assert_eq!(sample.speed_kph, Some(50.0));
        assert_eq!(sample.dt_seconds, 2.0);
    }

    #[test]
    fn both_rate_sources_is_ambiguous() {
        let sample = TripSample {
            fuel_rate_lph: Some(5.0),
            maf_gps: Some(10.0),
            speed_kph: None,
            dt_seconds: 1.0,
        };
        assert_eq!(sample.rate_source(), None);
    }

    #[test]
    fn neither_rate_source() {
        let sample: TripSample = serde_json::from_str(r#"{"speed_kph": 30}"#).unwrap();
        assert_eq!(sample.rate_source(), None);
    }
}
