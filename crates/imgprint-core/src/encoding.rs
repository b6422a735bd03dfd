//! Canonical encodings for 64-bit perceptual hashes.
//!
//! A raw hash is an unsigned 64-bit value in which every bit carries
//! independent meaning for distance purposes. This module renders such a
//! value in one of two wire formats and parses both back losslessly over
//! the full `[0, 2^64 - 1]` range:
//!
//! - [`Mode::Hex`]: minimal-length lower-case hex digits, no `0x` prefix
//!   (`"0"` for zero).
//! - [`Mode::Decimal`]: the value's *signed* 64-bit bit pattern printed in
//!   base 10, so hashes with the top bit set render as negative numbers.
//!
//! Both formats are compatibility surfaces: externally persisted hashes
//! from earlier tooling stored the raw value in a signed 64-bit slot, and
//! the decimal rendering (and the hex decode path for sign-bit-set values)
//! must keep matching what that tooling wrote.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Maximum number of hex digits in a 64-bit hash.
const MAX_HEX_DIGITS: usize = 16;

/// Encoding mode for rendered hashes.
///
/// Fixed at construction time for a hasher or comparator instance; all
/// hashes produced and consumed by one instance use the same mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Lower-case hexadecimal string, natural length.
    #[default]
    Hex,
    /// Base-10 integer using the signed 64-bit bit pattern.
    Decimal,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Hex => write!(f, "hex"),
            Mode::Decimal => write!(f, "decimal"),
        }
    }
}

/// A raw 64-bit hash rendered in one of the two wire formats.
///
/// The variant carries its own mode, so a stored `EncodedHash` can always
/// be decoded without out-of-band context. Callers persist these values
/// (as strings or integers) in their own storage; the core holds them only
/// transiently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum EncodedHash {
    /// Minimal lower-case hex digits of the unsigned value.
    Hex(String),
    /// The unsigned value's signed 64-bit bit pattern.
    Decimal(i64),
}

impl EncodedHash {
    /// The encoding mode this hash was rendered under.
    #[inline]
    pub fn mode(&self) -> Mode {
        match self {
            EncodedHash::Hex(_) => Mode::Hex,
            EncodedHash::Decimal(_) => Mode::Decimal,
        }
    }

    /// Recover the raw unsigned 64-bit value.
    ///
    /// Lossless inverse of [`encode`]: `encode(x, m).decode() == x` for
    /// every `x` and both modes.
    ///
    /// # Errors
    ///
    /// [`CoreError::MalformedHash`] when a hex string contains non-hex
    /// characters, is empty, or is longer than 16 digits.
    pub fn decode(&self) -> CoreResult<u64> {
        match self {
            EncodedHash::Hex(s) => decode_hex(s),
            // The decimal slot stores the bit pattern, not a magnitude:
            // reinterpreting recovers the unsigned value exactly.
            EncodedHash::Decimal(v) => Ok(*v as u64),
        }
    }

    /// Parse an externally persisted hash string under the given mode.
    ///
    /// The result is re-rendered in canonical form, so mixed-case or
    /// zero-padded hex input normalizes to the minimal lower-case digits.
    ///
    /// # Errors
    ///
    /// [`CoreError::MalformedHash`] when the string is not a valid
    /// encoding for `mode`.
    pub fn parse(s: &str, mode: Mode) -> CoreResult<Self> {
        match mode {
            Mode::Hex => decode_hex(s).map(|raw| encode(raw, Mode::Hex)),
            Mode::Decimal => {
                let v: i64 = s.parse().map_err(|e| CoreError::MalformedHash {
                    input: s.to_string(),
                    mode,
                    reason: format!("not a 64-bit integer literal: {}", e),
                })?;
                Ok(EncodedHash::Decimal(v))
            }
        }
    }
}

impl fmt::Display for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodedHash::Hex(s) => f.write_str(s),
            EncodedHash::Decimal(v) => write!(f, "{}", v),
        }
    }
}

/// Render a raw 64-bit hash in the given mode.
///
/// Hex produces the minimal lower-case digit string; decimal reinterprets
/// the bits as a signed 64-bit integer, so values at or above `2^63`
/// render as negative numbers.
pub fn encode(raw: u64, mode: Mode) -> EncodedHash {
    match mode {
        Mode::Hex => EncodedHash::Hex(format!("{:x}", raw)),
        Mode::Decimal => EncodedHash::Decimal(raw as i64),
    }
}

/// Parse a hex hash string into the raw unsigned value.
///
/// A full-width string (exactly 16 digits) whose top nibble exceeds 8 is
/// parsed as two unsigned 32-bit halves reassembled into `(high << 32) |
/// low`. This is the wire-compat decode path: earlier tooling routed such
/// strings around its signed integer parser this way, and the split
/// evaluates identically to a direct unsigned parse, so keeping it keeps
/// the decode algorithm aligned with what produced the stored hashes.
fn decode_hex(s: &str) -> CoreResult<u64> {
    let malformed = |reason: &str| CoreError::MalformedHash {
        input: s.to_string(),
        mode: Mode::Hex,
        reason: reason.to_string(),
    };

    if s.is_empty() {
        return Err(malformed("empty string"));
    }
    if s.len() > MAX_HEX_DIGITS {
        return Err(malformed("more than 16 hex digits"));
    }
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed("non-hex character"));
    }

    if s.len() == MAX_HEX_DIGITS {
        // Top nibble is guaranteed parseable after the charset check above.
        let top = (s.as_bytes()[0] as char).to_digit(16).unwrap_or(0);
        if top > 8 {
            let high = u32::from_str_radix(&s[..8], 16)
                .map_err(|_| malformed("invalid high 32-bit half"))?;
            let low = u32::from_str_radix(&s[8..], 16)
                .map_err(|_| malformed("invalid low 32-bit half"))?;
            return Ok(((high as u64) << 32) | low as u64);
        }
    }

    u64::from_str_radix(s, 16).map_err(|e| malformed(&format!("unparseable hex value: {}", e)))
}
