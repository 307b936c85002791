//! Time range validation

use crate::error::{CropCutError, CropCutResult};

/// Validated start/end timestamps bounding the output segment
///
/// Timestamps are kept as the strings the user typed and handed to the
/// encoder verbatim; validation only confirms the literal `HH:MM:SS` shape
/// so malformed input fails here instead of deep inside the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    /// Trim start, `HH:MM:SS`
    pub start: String,
    /// Trim end, `HH:MM:SS`
    pub end: String,
}

impl TimeRange {
    /// Validate and build a time range from start and end timestamps
    pub fn new(start: &str, end: &str) -> CropCutResult<Self> {
        let start = validate_timestamp(start)?;
        let end = validate_timestamp(end)?;
        Ok(Self { start, end })
    }
}

/// Validate a single `HH:MM:SS` timestamp, returning the trimmed string
///
/// Requires exactly three two-digit fields with minutes and seconds below
/// 60. Hours above 23 are allowed; long recordings are legitimate.
fn validate_timestamp(time: &str) -> CropCutResult<String> {
    let time = time.trim();
    let invalid = || CropCutError::InvalidTimeFormat {
        time: time.to_string(),
    };

    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    for (index, part) in parts.iter().enumerate() {
        if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u8 = part.parse().map_err(|_| invalid())?;
        if index > 0 && value > 59 {
            return Err(invalid());
        }
    }

    Ok(time.to_string())
}
