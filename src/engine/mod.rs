//! Encoder command assembly and invocation

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use tracing::info;

use crate::config::ToolConfig;
use crate::error::{CropCutError, CropCutResult};
use crate::utils::TimeRange;

/// A fully planned clipping job, ready to hand to the encoder
#[derive(Debug, Clone)]
pub struct ClipRequest {
    /// Source video path
    pub input: PathBuf,
    /// Destination video path
    pub output: PathBuf,
    /// Trim range bounding the output segment
    pub range: TimeRange,
    /// Rendered filter chain, absent when no filter applies
    pub filter: Option<String>,
}

/// Assemble the encoder argument vector for a clip request
///
/// Fixed skeleton: overwrite flag, input, trim start, trim end, then the
/// filter-graph argument only when a chain exists, then the output path
/// last. Paths are not validated here; existence and writability failures
/// surface from the encoder itself.
pub fn build_args(request: &ClipRequest) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-y".into(),
        "-i".into(),
        request.input.clone().into(),
        "-ss".into(),
        request.range.start.clone().into(),
        "-to".into(),
        request.range.end.clone().into(),
    ];

    if let Some(chain) = &request.filter {
        args.push("-vf".into());
        args.push(chain.clone().into());
    }

    args.push(request.output.clone().into());
    args
}

/// Clipping engine that drives the external encoder
pub struct Encoder {
    config: ToolConfig,
}

impl Encoder {
    /// Create a new encoder using the given tool configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Run the encoder for a clip request, blocking until it exits
    ///
    /// The encoder's stdout and stderr are inherited so its own progress
    /// and diagnostic output reach the user verbatim. A non-zero exit is
    /// an `EncodeError`; no retry, no cleanup of partial output.
    pub fn run(&self, request: &ClipRequest) -> CropCutResult<()> {
        let args = build_args(request);
        info!(
            "Running {} {}",
            self.config.encoder,
            args.iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let status = Command::new(&self.config.encoder).args(&args).status()?;
        if !status.success() {
            return Err(CropCutError::EncodeError {
                status: status.code().unwrap_or(-1),
            });
        }

        info!("Encoding complete: {}", request.output.display());
        Ok(())
    }
}
