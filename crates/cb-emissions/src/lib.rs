//! Fuel consumption and CO2 estimation for Car-bon.
//!
//! - [`fuel`]: the fuel property table (built-in defaults or TOML).
//! - [`estimate`]: interchangeable estimation models.
//! - [`aggregate`]: session averaging and trip integration over raw frames
//!   and samples.

pub mod aggregate;
pub mod error;
pub mod estimate;
pub mod fuel;

pub use aggregate::{ChannelValues, decode_channel, process_session, summarize_trip};
pub use error::{AggregationError, FuelTableError};
pub use estimate::{
    EngineParams, estimate_for_reading, from_electric_energy, from_fuel_rate, from_mass_air_flow,
    from_speed_rpm_load,
};
pub use fuel::{ElectricProperties, FuelProperties, FuelTable, GASOLINE};
