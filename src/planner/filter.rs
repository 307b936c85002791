//! Filter chain assembly

use std::fmt;

use crate::error::{CropCutError, CropCutResult};
use crate::planner::CropRectangle;

/// Audio volume multiplier, an integer in `[1, 10]`
///
/// The range is enforced here, at the input boundary; downstream code can
/// rely on the invariant and never re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume(u8);

impl Volume {
    /// The identity multiplier; produces no volume clause
    pub const UNCHANGED: Volume = Volume(1);

    /// Parse a volume multiplier from user input
    ///
    /// Rejects non-integers and anything outside `[1, 10]` with
    /// `InvalidInput`, before any external tool is invoked.
    pub fn parse(input: &str) -> CropCutResult<Self> {
        input
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|v| (1..=10).contains(v))
            .map(Volume)
            .ok_or_else(|| CropCutError::InvalidInput {
                message: format!(
                    "volume multiplier must be an integer between 1 and 10, got {:?}",
                    input.trim()
                ),
            })
    }

    /// The multiplier value
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Render the filter chain for the encoder's filter-graph argument
///
/// The crop clause comes first, then the volume clause; clauses are joined
/// with a comma and applied left-to-right by the encoder. A volume of 1 is
/// a no-op and produces no clause. Returns `None` when no clause applies,
/// in which case the filter argument must be omitted entirely rather than
/// passed as an empty string.
pub fn filter_chain(crop: Option<CropRectangle>, volume: Volume) -> Option<String> {
    let mut clauses = Vec::new();
    if let Some(rect) = crop {
        clauses.push(format!("crop={}:{}", rect.width, rect.height));
    }
    if volume != Volume::UNCHANGED {
        clauses.push(format!("volume={}", volume));
    }

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(","))
    }
}
