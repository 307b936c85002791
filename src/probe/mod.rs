//! Media resolution probing via the external prober tool

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::config::ToolConfig;
use crate::error::{CropCutError, CropCutResult};

/// Pixel dimensions of a decoded video frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions from width and height
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Resolution prober backed by an external media-inspection tool
pub struct ResolutionProber {
    config: ToolConfig,
}

impl ResolutionProber {
    /// Create a new resolution prober using the given tool configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Probe the first video stream of `input` for its pixel dimensions
    ///
    /// Runs the prober with arguments selecting the first video stream and
    /// requesting `width,height` as a single `WxH` line, then parses that
    /// line. Any spawn failure, non-zero exit, or unparseable output is a
    /// `ProbeError`; no fallback resolution is assumed.
    pub fn probe(&self, input: &Path) -> CropCutResult<Dimensions> {
        info!("Probing resolution of {}", input.display());

        let output = Command::new(&self.config.prober)
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=width,height",
                "-of",
                "csv=s=x:p=0",
            ])
            .arg(input)
            .output()
            .map_err(|e| CropCutError::ProbeError {
                message: format!("failed to run {}: {}", self.config.prober, e),
            })?;

        if !output.status.success() {
            return Err(CropCutError::ProbeError {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let dimensions = parse_resolution(stdout.trim())?;
        info!(
            "Source resolution: {}x{}",
            dimensions.width, dimensions.height
        );
        Ok(dimensions)
    }
}

/// Parse a `WxH` resolution line into dimensions
fn parse_resolution(line: &str) -> CropCutResult<Dimensions> {
    let mut fields = line.split('x');
    let (width, height) = match (fields.next(), fields.next()) {
        (Some(w), Some(h)) => (parse_field(line, w)?, parse_field(line, h)?),
        _ => {
            return Err(CropCutError::ProbeError {
                message: format!("expected WxH resolution, got {:?}", line),
            })
        }
    };

    if width == 0 || height == 0 {
        return Err(CropCutError::ProbeError {
            message: format!("non-positive resolution {:?}", line),
        });
    }

    Ok(Dimensions::new(width, height))
}

fn parse_field(line: &str, field: &str) -> CropCutResult<u32> {
    field
        .trim()
        .parse()
        .map_err(|_| CropCutError::ProbeError {
            message: format!("expected WxH resolution, got {:?}", line),
        })
}
