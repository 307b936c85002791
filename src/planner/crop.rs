//! Crop geometry calculation

use crate::probe::Dimensions;

/// User-selected aspect-ratio policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropDirective {
    /// Keep the source frame untouched
    Original,
    /// Crop to the largest 1:1 square that fits
    Square,
    /// Crop to the largest 4:3 rectangle that fits
    Standard,
}

impl CropDirective {
    /// Parse a crop directive from user input
    ///
    /// Recognizes `original`, `1:1`, and `4:3`, case-insensitively. Any
    /// other value falls through to `Original` — a deliberate permissive
    /// default, not a validation gap.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "1:1" => CropDirective::Square,
            "4:3" => CropDirective::Standard,
            _ => CropDirective::Original,
        }
    }
}

/// Pixel dimensions of the crop region
///
/// Only the target width and height are computed; the crop offset is left
/// to the encoder's `crop` filter default (centered), so the visual anchor
/// is an encoder convention rather than an invariant of this planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRectangle {
    /// Target width in pixels, never exceeds the source width
    pub width: u32,
    /// Target height in pixels, never exceeds the source height
    pub height: u32,
}

/// Compute the crop rectangle for a directive against the source dimensions
///
/// Returns `None` when no cropping applies. For `Standard`, full width is
/// preserved when possible; otherwise the rectangle is refit against the
/// full height. Widths and heights truncate (integer division), matching
/// the encoder's even-pixel expectations downstream.
pub fn crop_rectangle(directive: CropDirective, source: Dimensions) -> Option<CropRectangle> {
    match directive {
        CropDirective::Original => None,
        CropDirective::Square => {
            let side = source.width.min(source.height);
            Some(CropRectangle {
                width: side,
                height: side,
            })
        }
        CropDirective::Standard => {
            // Intermediates widen to u64 so extreme dimensions cannot
            // overflow the multiply.
            let mut width = source.width;
            let mut height = (u64::from(source.width) * 3 / 4) as u32;
            if height > source.height {
                height = source.height;
                width = (u64::from(source.height) * 4 / 3) as u32;
            }
            Some(CropRectangle { width, height })
        }
    }
}
