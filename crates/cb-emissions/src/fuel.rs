//! Fuel property table.
//!
//! One table holds every fuel constant the estimators use. The built-in
//! defaults can be replaced by a TOML file, so changing the fuel model is a
//! data change:
//!
//! ```toml
//! [fuels.gasoline]
//! afr = 14.7
//! density_kg_per_L = 0.745
//! co2_factor_kg_per_L = 2.3477
//!
//! [electric]
//! grid_factor_kg_per_kWh = 0.4
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FuelTableError;

/// Fuel type used when a lookup misses.
pub const GASOLINE: &str = "gasoline";

/// Combustion constants for one liquid fuel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelProperties {
    /// Stoichiometric air-fuel ratio (mass).
    pub afr: f64,
    #[serde(rename = "density_kg_per_L")]
    pub density_kg_per_l: f64,
    #[serde(rename = "co2_factor_kg_per_L")]
    pub co2_factor_kg_per_l: f64,
}

/// Grid emission constants for electric vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectricProperties {
    #[serde(rename = "grid_factor_kg_per_kWh")]
    pub grid_factor_kg_per_kwh: f64,
}

impl Default for ElectricProperties {
    fn default() -> Self {
        // U.S. average grid mix.
        Self {
            grid_factor_kg_per_kwh: 0.4,
        }
    }
}

/// On-disk / wire shape of the table, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelTableFile {
    pub fuels: BTreeMap<String, FuelProperties>,
    #[serde(default)]
    pub electric: ElectricProperties,
}

/// Validated, read-only fuel property table.
///
/// Keys are lower-case. A `gasoline` entry always exists, and unknown fuel
/// types resolve to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FuelTableFile", into = "FuelTableFile")]
pub struct FuelTable {
    fuels: BTreeMap<String, FuelProperties>,
    fallback: FuelProperties,
    electric: ElectricProperties,
}

impl FuelTable {
    /// Load a table from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FuelTableError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| FuelTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, FuelTableError> {
        let file: FuelTableFile = toml::from_str(contents)?;
        Self::try_from(file)
    }

    /// Constants for `fuel_type` (case-insensitive), falling back to gasoline.
    pub fn properties(&self, fuel_type: &str) -> &FuelProperties {
        match self.fuels.get(&fuel_type.to_ascii_lowercase()) {
            Some(props) => props,
            None => {
                tracing::warn!(fuel_type, "unknown fuel type, falling back to gasoline");
                &self.fallback
            }
        }
    }

    /// Whether `fuel_type` has its own entry.
    pub fn contains(&self, fuel_type: &str) -> bool {
        self.fuels.contains_key(&fuel_type.to_ascii_lowercase())
    }

    /// Configured liquid fuel names, sorted.
    pub fn fuel_types(&self) -> impl Iterator<Item = &str> {
        self.fuels.keys().map(String::as_str)
    }

    /// Default grid emission factor (kg CO2 / kWh).
    pub fn grid_factor(&self) -> f64 {
        self.electric.grid_factor_kg_per_kwh
    }
}

impl Default for FuelTable {
    fn default() -> Self {
        let fuels = BTreeMap::from([
            (
                GASOLINE.to_string(),
                FuelProperties {
                    afr: 14.7,
                    density_kg_per_l: 0.745,
                    co2_factor_kg_per_l: 2.3477,
                },
            ),
            (
                "diesel".to_string(),
                FuelProperties {
                    afr: 14.5,
                    density_kg_per_l: 0.832,
                    co2_factor_kg_per_l: 2.6840,
                },
            ),
            (
                "ethanol".to_string(),
                FuelProperties {
                    afr: 9.0,
                    density_kg_per_l: 0.789,
                    co2_factor_kg_per_l: 1.909,
                },
            ),
        ]);
        let fallback = fuels[GASOLINE];
        Self {
            fuels,
            fallback,
            electric: ElectricProperties::default(),
        }
    }
}

impl TryFrom<FuelTableFile> for FuelTable {
    type Error = FuelTableError;

    fn try_from(file: FuelTableFile) -> Result<Self, Self::Error> {
        let mut fuels = BTreeMap::new();
        for (name, props) in file.fuels {
            let name = name.to_ascii_lowercase();
            check_positive(&name, "afr", props.afr)?;
            check_positive(&name, "density_kg_per_L", props.density_kg_per_l)?;
            check_positive(&name, "co2_factor_kg_per_L", props.co2_factor_kg_per_l)?;
            fuels.insert(name, props);
        }

        let grid = file.electric.grid_factor_kg_per_kwh;
        if !grid.is_finite() || grid < 0.0 {
            return Err(FuelTableError::InvalidConstant {
                fuel: "electric".into(),
                field: "grid_factor_kg_per_kWh",
                value: grid,
            });
        }

        let fallback = *fuels.get(GASOLINE).ok_or(FuelTableError::MissingGasoline)?;
        Ok(Self {
            fuels,
            fallback,
            electric: file.electric,
        })
    }
}

impl From<FuelTable> for FuelTableFile {
    fn from(table: FuelTable) -> Self {
        Self {
            fuels: table.fuels,
            electric: table.electric,
        }
    }
}

fn check_positive(fuel: &str, field: &'static str, value: f64) -> Result<(), FuelTableError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FuelTableError::InvalidConstant {
            fuel: fuel.to_string(),
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_constants() {
        let table = FuelTable::default();
        let gas = table.properties("gasoline");
        assert_eq!(gas.afr, 14.7);
        assert_eq!(gas.density_kg_per_l, 0.745);
        assert_eq!(gas.co2_factor_kg_per_l, 2.3477);
        assert_eq!(table.properties("diesel").afr, 14.5);
        assert_eq!(table.properties("ethanol").co2_factor_kg_per_l, 1.909);
        assert_eq!(table.grid_factor(), 0.4);
        assert_eq!(
            table.fuel_types().collect::<Vec<_>>(),
            vec!["diesel", "ethanol", "gasoline"]
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = FuelTable::default();
        assert_eq!(table.properties("DIESEL"), table.properties("diesel"));
        assert!(table.contains("Ethanol"));
    }

    #[test]
    fn unknown_fuel_falls_back_to_gasoline() {
        let table = FuelTable::default();
        assert_eq!(table.properties("hydrogen"), table.properties("gasoline"));
        assert_eq!(table.properties("electric"), table.properties("gasoline"));
        assert!(!table.contains("hydrogen"));
    }

    #[test]
    fn load_from_toml() {
        let toml = r#"
[fuels.Gasoline]
afr = 14.7
density_kg_per_L = 0.72
co2_factor_kg_per_L = 2.31

[fuels.lpg]
afr = 15.5
density_kg_per_L = 0.51
co2_factor_kg_per_L = 1.51

[electric]
grid_factor_kg_per_kWh = 0.25
"#;
        let table = FuelTable::from_toml_str(toml).unwrap();
        assert_eq!(table.properties("gasoline").density_kg_per_l, 0.72);
        assert_eq!(table.properties("lpg").afr, 15.5);
        assert_eq!(table.properties("diesel").density_kg_per_l, 0.72);
        assert_eq!(table.grid_factor(), 0.25);
    }

    #[test]
    fn toml_without_electric_uses_default_grid_factor() {
        let toml = r#"
[fuels.gasoline]
afr = 14.7
density_kg_per_L = 0.745
co2_factor_kg_per_L = 2.3477
"#;
        let table = FuelTable::from_toml_str(toml).unwrap();
        assert_eq!(table.grid_factor(), 0.4);
        assert!(!table.contains("diesel"));
    }

    #[test]
    fn toml_without_gasoline_rejected() {
        let toml = r#"
[fuels.diesel]
afr = 14.5
density_kg_per_L = 0.832
co2_factor_kg_per_L = 2.684

[electric]
grid_factor_kg_per_kWh = 0.4
"#;
        assert!(matches!(
            FuelTable::from_toml_str(toml),
            Err(FuelTableError::MissingGasoline)
        ));
    }

    #[test]
    fn non_positive_constant_rejected() {
        let toml = r#"
[fuels.gasoline]
afr = 0.0
density_kg_per_L = 0.745
co2_factor_kg_per_L = 2.3477

[electric]
grid_factor_kg_per_kWh = 0.4
"#;
        let err = FuelTable::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("afr"));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(matches!(
            FuelTable::from_toml_str("fuels = 3"),
            Err(FuelTableError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FuelTable::from_file("/nonexistent/fuels.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/fuels.toml"));
    }

    #[test]
    fn json_roundtrip_keeps_validation() {
        let table = FuelTable::default();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["fuels"]["gasoline"]["density_kg_per_L"], 0.745);
        assert_eq!(json["electric"]["grid_factor_kg_per_kWh"], 0.4);

        let back: FuelTable = serde_json::from_value(json).unwrap();
        assert_eq!(back, table);
    }
}
