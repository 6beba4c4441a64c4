//! OBD-II response frame decoding.
//!
//! Turns whitespace-separated hex frames received from an ELM327-style
//! adapter into typed [`cb_protocol::Reading`]s.

pub mod decoder;
pub mod error;
pub mod frame;
pub mod obd;
pub mod types;

pub use decoder::{decode, decode_raw};
pub use error::{DecodeError, DecodeResult};
pub use frame::RawFrame;
pub use obd::{Pid, PidValue};
