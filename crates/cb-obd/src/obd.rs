//! OBD-II PID definitions and value decoders.

use crate::error::{DecodeError, DecodeResult};
use crate::types::PID_VIN;

// ---------------------------------------------------------------------------
// Mode 01 PIDs
// ---------------------------------------------------------------------------

/// Mode 01 PIDs with a known decoding formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Pid {
    /// Calculated engine load (0x04)
    EngineLoad = 0x04,
    /// Intake manifold absolute pressure (0x0B)
    IntakeManifoldPressure = 0x0B,
    /// Engine RPM (0x0C)
    Rpm = 0x0C,
    /// Vehicle speed (0x0D)
    Speed = 0x0D,
    /// Mass air flow rate (0x10)
    Maf = 0x10,
    /// Fuel tank level input (0x2F)
    FuelLevel = 0x2F,
    /// Engine fuel rate (0x5E)
    FuelRate = 0x5E,
}

impl Pid {
    pub fn from_u8(pid: u8) -> Option<Self> {
        match pid {
            0x04 => Some(Pid::EngineLoad),
            0x0B => Some(Pid::IntakeManifoldPressure),
            0x0C => Some(Pid::Rpm),
            0x0D => Some(Pid::Speed),
            0x10 => Some(Pid::Maf),
            0x2F => Some(Pid::FuelLevel),
            0x5E => Some(Pid::FuelRate),
            _ => None,
        }
    }

    pub fn as_hex(&self) -> u8 {
        *self as u8
    }

    /// Number of data bytes the formula consumes.
    pub fn response_bytes(&self) -> usize {
        match self {
            Pid::Rpm | Pid::Maf | Pid::FuelRate => 2,
            _ => 1,
        }
    }
}

/// Decoded PID value with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PidValue {
    pub pid: Pid,
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Decode a Mode 01 PID value from the data bytes (after SID and PID echo).
pub fn decode_pid(pid: Pid, data_bytes: &[u8]) -> DecodeResult<PidValue> {
    let need = pid.response_bytes();
    if data_bytes.len() < need {
        return Err(DecodeError::MissingData {
            pid: pid.as_hex(),
            need,
            got: data_bytes.len(),
        });
    }

    let a = data_bytes[0] as f64;
    let ab = || a * 256.0 + data_bytes[1] as f64;

    let (name, value, unit) = match pid {
        Pid::EngineLoad => ("Engine Load", a * 100.0 / 255.0, "%"),
        Pid::IntakeManifoldPressure => ("Intake Manifold Pressure", a, "kPa"),
        Pid::Rpm => ("Engine RPM", ab() / 4.0, "rpm"),
        Pid::Speed => ("Vehicle Speed", a, "km/h"),
        Pid::Maf => ("Mass Air Flow", ab() / 100.0, "g/s"),
        Pid::FuelLevel => ("Fuel Level", a * 100.0 / 255.0, "%"),
        Pid::FuelRate => ("Fuel Rate", ab() / 20.0, "L/h"),
    };

    Ok(PidValue {
        pid,
        name,
        value,
        unit,
    })
}

// ---------------------------------------------------------------------------
// Mode 09 VIN
// ---------------------------------------------------------------------------

/// Decode VIN characters from the data bytes of a Mode 09 PID 02 response.
///
/// Control bytes (the leading message count, NUL padding) are dropped.
pub fn decode_vin(data_bytes: &[u8]) -> DecodeResult<String> {
    if let Some(&byte) = data_bytes.iter().find(|b| !b.is_ascii()) {
        return Err(DecodeError::NonAsciiVin { byte });
    }

    let vin: String = data_bytes
        .iter()
        .filter(|b| b.is_ascii_graphic())
        .map(|&b| b as char)
        .collect();

    if vin.is_empty() {
        return Err(DecodeError::MissingData {
            pid: PID_VIN,
            need: 1,
            got: 0,
        });
    }
    Ok(vin)
}
