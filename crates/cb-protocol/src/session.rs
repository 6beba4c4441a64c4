use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::estimate::EmissionEstimate;

/// Raw frames collected during a driving session, one array per channel.
///
/// The arrays are independent: index `i` of one channel has no relation to
/// index `i` of another, and lengths may differ.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSamples {
    #[serde(default)]
    pub rpm_hex_array: Vec<String>,
    #[serde(default)]
    pub engine_load_hex_array: Vec<String>,
    #[serde(default)]
    pub speed_hex_array: Vec<String>,
}

impl SessionSamples {
    /// Frames for one channel.
    pub fn frames(&self, channel: Channel) -> &[String] {
        match channel {
            Channel::Rpm => &self.rpm_hex_array,
            Channel::EngineLoad => &self.engine_load_hex_array,
            Channel::Speed => &self.speed_hex_array,
        }
    }
}

/// A session channel and the PID whose readings it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    Rpm,
    EngineLoad,
    Speed,
}

impl Channel {
    /// `pidCode` a reading must carry to count toward this channel.
    pub fn pid_code(self) -> &'static str {
        match self {
            Channel::Rpm => "010C",
            Channel::EngineLoad => "0104",
            Channel::Speed => "010D",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Rpm => "rpm",
            Channel::EngineLoad => "engine_load",
            Channel::Speed => "speed",
        })
    }
}

/// Per-channel mean values, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelAverages {
    pub rpm: f64,
    #[serde(rename = "engineLoad")]
    pub engine_load: f64,
    pub speed: f64,
}

/// How the frames of one channel were classified during aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStats {
    /// Frames received.
    pub total: usize,
    /// Frames that produced a value for this channel.
    pub valid: usize,
    /// Malformed frames.
    pub failed: usize,
    /// Well-formed frames with no known formula.
    pub unsupported: usize,
    /// Decoded frames belonging to another PID.
    pub mismatched: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionChannelStats {
    pub rpm: ChannelStats,
    #[serde(rename = "engineLoad")]
    pub engine_load: ChannelStats,
    pub speed: ChannelStats,
}

/// Result of reducing a [`SessionSamples`] to one estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Valid decoded values across all three channels.
    #[serde(rename = "sampleCount")]
    pub sample_count: usize,
    pub averages: ChannelAverages,
    /// Unrounded estimate computed from the unrounded averages.
    pub estimate: EmissionEstimate,
    pub timestamp: DateTime<Utc>,
    pub channels: SessionChannelStats,
}
