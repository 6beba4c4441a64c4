//! Shared application state for the Axum server.
//!
//! Read-only after startup: the fuel table sits behind an `Arc` and every
//! request works on its own input.

use std::sync::Arc;

use cb_emissions::{EngineParams, FuelTable, FuelTableError, GASOLINE};

use crate::config::ApiConfig;

#[derive(Debug, Clone)]
pub struct AppState {
    pub fuel_table: Arc<FuelTable>,
    pub engine: EngineParams,
    /// Fuel type used when a request does not name one.
    pub default_fuel_type: String,
}

impl AppState {
    pub fn new(fuel_table: FuelTable, engine: EngineParams) -> Self {
        Self {
            fuel_table: Arc::new(fuel_table),
            engine,
            default_fuel_type: GASOLINE.to_string(),
        }
    }

    /// Build state from config, loading the fuel table file if one is set.
    pub fn from_config(config: &ApiConfig) -> Result<Self, FuelTableError> {
        let fuel_table = match &config.fuel_table_path {
            Some(path) => FuelTable::from_file(path)?,
            None => FuelTable::default(),
        };
        Ok(Self {
            fuel_table: Arc::new(fuel_table),
            engine: config.engine,
            default_fuel_type: config.default_fuel_type.clone(),
        })
    }

    /// The requested fuel type, or the configured default.
    pub fn fuel_type<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.default_fuel_type)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FuelTable::default(), EngineParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_uses_builtin_table() {
        let state = AppState::default();
        assert_eq!(state.fuel_type(None), "gasoline");
        assert_eq!(state.fuel_type(Some("diesel")), "diesel");
        assert_eq!(*state.fuel_table, FuelTable::default());
    }

    #[test]
    fn from_config_honours_defaults() {
        let config = ApiConfig {
            default_fuel_type: "ethanol".into(),
            ..ApiConfig::default()
        };
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.fuel_type(None), "ethanol");
    }

    #[test]
    fn from_config_missing_table_file() {
        let config = ApiConfig {
            fuel_table_path: Some("/nonexistent/fuels.toml".into()),
            ..ApiConfig::default()
        };
        assert!(matches!(
            AppState::from_config(&config),
            Err(FuelTableError::Io { .. })
        ));
    }
}
