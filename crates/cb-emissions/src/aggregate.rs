//! Session and trip aggregation.
//!
//! Both reductions are one-shot and stateless: every call starts from its
//! input alone.

use chrono::Utc;

use cb_protocol::{
    Channel, ChannelAverages, ChannelStats, RateSource, SessionChannelStats, SessionSamples,
    SessionSummary, TripSample, TripTotals,
};

use crate::error::AggregationError;
use crate::estimate::{self, EngineParams};
use crate::fuel::FuelTable;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Valid values decoded from one channel, plus how every frame was classified.
#[derive(Debug, Clone, Default)]
pub struct ChannelValues {
    pub values: Vec<f64>,
    pub stats: ChannelStats,
}

impl ChannelValues {
    /// Arithmetic mean, or `None` when the channel has no valid values.
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }
}

/// Decode every frame of one channel, keeping only values for that channel's
/// PID.
pub fn decode_channel(frames: &[String], channel: Channel) -> ChannelValues {
    let mut out = ChannelValues::default();

    for frame in frames {
        out.stats.total += 1;
        let reading = match cb_obd::decode(frame) {
            Ok(reading) => reading,
            Err(e) => {
                out.stats.failed += 1;
                tracing::debug!(
                    channel = %channel,
                    frame = %frame,
                    error = %e,
                    "discarding malformed frame"
                );
                continue;
            }
        };

        if reading.is_unsupported() {
            out.stats.unsupported += 1;
            continue;
        }
        if reading.pid_code != channel.pid_code() {
            out.stats.mismatched += 1;
            tracing::debug!(
                channel = %channel,
                pid_code = %reading.pid_code,
                "discarding reading for another PID"
            );
            continue;
        }
        match reading.value {
            Some(value) => {
                out.stats.valid += 1;
                out.values.push(value);
            }
            None => out.stats.unsupported += 1,
        }
    }

    out
}

/// Reduce a session's raw frame arrays to channel means and one
/// speed-density estimate.
///
/// RPM and engine load must each yield at least one valid value; speed may
/// be empty and then averages to 0.
pub fn process_session(
    table: &FuelTable,
    samples: &SessionSamples,
    engine: &EngineParams,
    fuel_type: &str,
) -> Result<SessionSummary, AggregationError> {
    let rpm = decode_channel(samples.frames(Channel::Rpm), Channel::Rpm);
    let load = decode_channel(samples.frames(Channel::EngineLoad), Channel::EngineLoad);
    let speed = decode_channel(samples.frames(Channel::Speed), Channel::Speed);

    let avg_rpm = rpm.mean().ok_or(AggregationError::NoValidSamples {
        channel: Channel::Rpm,
    })?;
    let avg_load = load.mean().ok_or(AggregationError::NoValidSamples {
        channel: Channel::EngineLoad,
    })?;
    let avg_speed = speed.mean().unwrap_or(0.0);

    let estimate =
        estimate::from_speed_rpm_load(table, avg_speed, avg_rpm, avg_load, engine, fuel_type);

    let sample_count = rpm.stats.valid + load.stats.valid + speed.stats.valid;
    tracing::debug!(
        sample_count,
        avg_rpm,
        avg_load,
        avg_speed,
        co2_kg_per_hour = estimate.co2_kg_per_hour,
        "session aggregated"
    );

    Ok(SessionSummary {
        sample_count,
        averages: ChannelAverages {
            rpm: round1(avg_rpm),
            engine_load: round1(avg_load),
            speed: round1(avg_speed),
        },
        estimate,
        timestamp: Utc::now(),
        channels: SessionChannelStats {
            rpm: rpm.stats,
            engine_load: load.stats,
            speed: speed.stats,
        },
    })
}

/// Time-integrate fuel and CO2 over a sequence of trip samples.
///
/// Samples without exactly one rate source are skipped and add nothing to
/// the totals or the trip time. Average speed covers only contributing
/// samples that report a speed.
pub fn summarize_trip(table: &FuelTable, samples: &[TripSample], fuel_type: &str) -> TripTotals {
    let props = table.properties(fuel_type);
    let mut totals = TripTotals::default();
    let mut speed_sum = 0.0;
    let mut speed_count = 0usize;

    for sample in samples {
        let est = match sample.rate_source() {
            Some(RateSource::FuelRate(rate)) => estimate::fuel_rate_estimate(props, rate),
            Some(RateSource::MassAirFlow(maf)) => estimate::maf_estimate(props, maf),
            None => {
                totals.skipped += 1;
                continue;
            }
        };

        let hours = sample.dt_seconds / SECONDS_PER_HOUR;
        totals.total_fuel_l += est.fuel_l_per_hour * hours;
        totals.total_co2_kg += est.co2_kg_per_hour * hours;
        totals.trip_time_s += sample.dt_seconds;
        totals.sample_count += 1;

        if let Some(speed) = sample.speed_kph {
            speed_sum += speed;
            speed_count += 1;
        }
    }

    if speed_count > 0 {
        totals.avg_speed_kph = speed_sum / speed_count as f64;
    }

    tracing::debug!(
        samples = samples.len(),
        skipped = totals.skipped,
        total_fuel_l = totals.total_fuel_l,
        total_co2_kg = totals.total_co2_kg,
        "trip summarized"
    );
    totals
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
