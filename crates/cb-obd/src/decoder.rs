//! Frame → [`Reading`] dispatch on response mode and PID.

use cb_protocol::Reading;

use crate::error::DecodeResult;
use crate::frame::RawFrame;
use crate::obd::{self, Pid};
use crate::types::{PID_VIN, RESPONSE_CURRENT_DATA, RESPONSE_VEHICLE_INFO};

/// Decode one response frame such as `"41 0C 1A F8"`.
///
/// Malformed frames return an error. Well-formed frames with a mode or PID
/// that has no formula decode to a placeholder [`Reading`] with a `null`
/// value.
pub fn decode(frame: &str) -> DecodeResult<Reading> {
    let raw = RawFrame::parse(frame)?;
    decode_raw(&raw)
}

/// Decode an already tokenised frame.
pub fn decode_raw(raw: &RawFrame<'_>) -> DecodeResult<Reading> {
    let pid_code = raw.pid_code();

    let reading = match raw.mode {
        RESPONSE_CURRENT_DATA => match Pid::from_u8(raw.pid) {
            Some(pid) => {
                let bytes = raw.data_bytes(pid.response_bytes())?;
                let pv = obd::decode_pid(pid, &bytes)?;
                Reading::numeric(pid_code, pv.name, pv.value, pv.unit)
            }
            None => unsupported_pid(pid_code, raw.pid),
        },
        RESPONSE_VEHICLE_INFO => match raw.pid {
            PID_VIN => {
                let vin = obd::decode_vin(&raw.all_data_bytes()?)?;
                Reading::textual(pid_code, "VIN", vin)
            }
            pid => unsupported_pid(pid_code, pid),
        },
        mode => Reading::unsupported(pid_code, format!("Unsupported mode {mode:02X}")),
    };

    tracing::trace!(pid_code = %reading.pid_code, label = %reading.label, "frame decoded");
    Ok(reading)
}

fn unsupported_pid(pid_code: String, pid: u8) -> Reading {
    Reading::unsupported(pid_code, format!("Unsupported PID {pid:02X}"))
}
