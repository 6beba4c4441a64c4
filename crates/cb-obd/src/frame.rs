//! Tokenisation of ELM-style response frames ("41 0C 1A F8").

use crate::error::{DecodeError, DecodeResult};
use crate::types;

/// A tokenised response frame borrowed from the input string.
///
/// Mode and PID are validated up front. Data tokens are only parsed when a
/// formula asks for them, so trailing junk after the bytes a PID needs is
/// tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame<'a> {
    /// Response SID (e.g., 0x41).
    pub mode: u8,
    pub pid: u8,
    data: Vec<&'a str>,
}

impl<'a> RawFrame<'a> {
    pub fn parse(frame: &'a str) -> DecodeResult<Self> {
        let tokens: Vec<&str> = frame.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(DecodeError::TooFewTokens {
                found: tokens.len(),
            });
        }

        let mode = parse_hex_byte(tokens[0], 0)?;
        let pid = parse_hex_byte(tokens[1], 1)?;

        Ok(Self {
            mode,
            pid,
            data: tokens[2..].to_vec(),
        })
    }

    /// Request mode + PID, e.g. "010C".
    pub fn pid_code(&self) -> String {
        types::pid_code(self.mode, self.pid)
    }

    /// Parse the first `n` data bytes.
    pub fn data_bytes(&self, n: usize) -> DecodeResult<Vec<u8>> {
        if self.data.len() < n {
            return Err(DecodeError::MissingData {
                pid: self.pid,
                need: n,
                got: self.data.len(),
            });
        }
        self.data[..n]
            .iter()
            .enumerate()
            .map(|(i, token)| parse_hex_byte(token, i + 2))
            .collect()
    }

    /// Parse every data byte.
    pub fn all_data_bytes(&self) -> DecodeResult<Vec<u8>> {
        self.data_bytes(self.data.len())
    }
}

/// Parse one token as exactly two hex digits (case-insensitive).
pub fn parse_hex_byte(token: &str, position: usize) -> DecodeResult<u8> {
    let invalid = || DecodeError::InvalidToken {
        position,
        token: token.to_string(),
    };

    if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u8::from_str_radix(token, 16).map_err(|_| invalid())
}
