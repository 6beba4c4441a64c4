//! Frame decode error types.

use thiserror::Error;

/// A response frame could not be decoded.
///
/// Callers treat this as a per-frame failure: the frame is reported or
/// skipped, never propagated as a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("frame has {found} tokens, need at least 3 (mode, PID, data)")]
    TooFewTokens { found: usize },

    #[error("token {position} is not a 2-digit hex byte: {token:?}")]
    InvalidToken { position: usize, token: String },

    #[error("PID 0x{pid:02X}: need {need} data bytes, got {got}")]
    MissingData { pid: u8, need: usize, got: usize },

    #[error("VIN byte 0x{byte:02X} is not ASCII")]
    NonAsciiVin { byte: u8 },
}

/// Convenience alias for decode results.
pub type DecodeResult<T> = Result<T, DecodeError>;
