//! Fuel table and aggregation error types.

use std::path::PathBuf;

use cb_protocol::Channel;
use thiserror::Error;

/// Errors loading or validating a fuel property table.
#[derive(Debug, Error)]
pub enum FuelTableError {
    #[error("failed to read fuel table {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid fuel table TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("fuel table has no \"gasoline\" entry to fall back to")]
    MissingGasoline,

    #[error("fuel {fuel:?}: {field} must be a positive finite number, got {value}")]
    InvalidConstant {
        fuel: String,
        field: &'static str,
        value: f64,
    },
}

/// Session aggregation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("no valid samples in {channel} channel")]
    NoValidSamples { channel: Channel },
}
