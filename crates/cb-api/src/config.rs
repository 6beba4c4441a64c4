//! API server configuration.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use cb_emissions::{EngineParams, GASOLINE};

/// Environment variable names read by [`ApiConfig::from_env`].
pub const ENV_HOST: &str = "CARBON_HOST";
pub const ENV_PORT: &str = "CARBON_PORT";
pub const ENV_FUEL_TABLE: &str = "CARBON_FUEL_TABLE";
pub const ENV_FUEL_TYPE: &str = "CARBON_FUEL_TYPE";
pub const ENV_DISPLACEMENT: &str = "CARBON_DISPLACEMENT_L";
pub const ENV_AIR_DENSITY: &str = "CARBON_AIR_DENSITY";

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// TOML fuel property table. None uses the built-in table.
    #[serde(default)]
    pub fuel_table_path: Option<PathBuf>,
    /// Fuel type assumed when a request does not name one.
    #[serde(default = "default_fuel_type")]
    pub default_fuel_type: String,
    /// Engine geometry for speed-density estimates.
    #[serde(default)]
    pub engine: EngineParams,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_fuel_type() -> String {
    GASOLINE.to_string()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl ApiConfig {
    /// Load config from environment variables, defaulting anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load config through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            config.port = parse(ENV_PORT, port)?;
        }
        if let Some(path) = lookup(ENV_FUEL_TABLE) {
            config.fuel_table_path = Some(PathBuf::from(path));
        }
        if let Some(fuel) = lookup(ENV_FUEL_TYPE) {
            config.default_fuel_type = fuel.to_ascii_lowercase();
        }
        if let Some(d) = lookup(ENV_DISPLACEMENT) {
            config.engine.displacement_l = parse_positive(ENV_DISPLACEMENT, d)?;
        }
        if let Some(rho) = lookup(ENV_AIR_DENSITY) {
            config.engine.air_density = parse_positive(ENV_AIR_DENSITY, rho)?;
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}

fn parse_positive(var: &'static str, value: String) -> Result<f64, ConfigError> {
    let parsed: f64 = parse(var, value.clone())?;
    if parsed.is_finite() && parsed > 0.0 {
        Ok(parsed)
    } else {
        Err(ConfigError::Invalid { var, value })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            fuel_table_path: None,
            default_fuel_type: default_fuel_type(),
            engine: EngineParams::default(),
        }
    }
}
