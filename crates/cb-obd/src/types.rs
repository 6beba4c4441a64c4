//! OBD-II mode and PID constants.

// ── OBD-II Modes ────────────────────────────────────────────────

/// Mode 01: Show current data (live PIDs).
pub const MODE_CURRENT_DATA: u8 = 0x01;

/// Mode 09: Request vehicle information (VIN, etc.).
pub const MODE_VEHICLE_INFO: u8 = 0x09;

/// Offset added to request mode to get response SID.
pub const RESPONSE_SID_OFFSET: u8 = 0x40;

/// Positive response to Mode 01.
pub const RESPONSE_CURRENT_DATA: u8 = MODE_CURRENT_DATA + RESPONSE_SID_OFFSET;

/// Positive response to Mode 09.
pub const RESPONSE_VEHICLE_INFO: u8 = MODE_VEHICLE_INFO + RESPONSE_SID_OFFSET;

// ── Mode 09 PIDs ────────────────────────────────────────────────

/// Vehicle Identification Number.
pub const PID_VIN: u8 = 0x02;

/// Map a response SID back to the request mode it answers.
///
/// Bytes below the response offset are passed through unchanged.
pub fn request_mode(response_sid: u8) -> u8 {
    if response_sid >= RESPONSE_SID_OFFSET {
        response_sid - RESPONSE_SID_OFFSET
    } else {
        response_sid
    }
}

/// Four-char code identifying a request (e.g., mode 01 + PID 0C → "010C").
pub fn pid_code(response_sid: u8, pid: u8) -> String {
    format!("{:02X}{pid:02X}", request_mode(response_sid))
}
