use std::fmt;

use crate::sample::numeric::{scan_float, scan_int};

/// The field delimiter used by the audio producer.
pub const FIELD_DELIMITER: char = ',';

/// One loudness / pitch measurement, created from a single datagram and discarded after rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Unitless RMS magnitude, expected roughly in `0.0..=1.0`.
    pub loudness: f32,
    /// Detected fundamental frequency in Hz, `0` when no pitch was detected.
    pub pitch_hz: i32,
}

impl Sample {
    /// Creates a new sample from its two measurements.
    #[must_use]
    pub const fn new(loudness: f32, pitch_hz: i32) -> Self {
        Self { loudness, pitch_hz }
    }

    /// Encodes the sample in the `<loudness>,<pitch>` wire format.
    #[must_use]
    pub fn to_payload(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{FIELD_DELIMITER}{}", self.loudness, self.pitch_hz)
    }
}

/// Parses a received payload into a `Sample`.
///
/// The payload ends at the first NUL byte.
/// Empty fields are skipped, so `",340"` reads `340` as the loudness.
/// Only the first two fields are consulted; anything missing or non-numeric becomes zero.
/// Never fails.
#[must_use]
pub fn parse_sample(payload: &[u8]) -> Sample {
    let end = payload.iter().position(|&b| b == 0).unwrap_or(payload.len());
    let text = String::from_utf8_lossy(&payload[..end]);
    let mut fields = text.split(FIELD_DELIMITER).filter(|field| !field.is_empty());

    let loudness = fields.next().map_or(0.0, scan_float);
    let pitch_hz = fields.next().map_or(0, scan_int);

    Sample { loudness, pitch_hz }
}
