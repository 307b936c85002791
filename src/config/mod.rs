//! Tool configuration for CropCut
//!
//! External tool names are carried in an explicit configuration value rather
//! than ambient global state, so the pipeline can be pointed at stub tools
//! in tests.

use tracing::debug;

use crate::error::{CropCutError, CropCutResult};

/// Names (or paths) of the external FFmpeg tools to invoke
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Encoder binary, invoked once per run to perform the trim/crop/volume pass
    pub encoder: String,
    /// Prober binary, invoked once per run to read the source resolution
    pub prober: String,
}

impl ToolConfig {
    /// Create a tool configuration from explicit tool names
    pub fn new(encoder: impl Into<String>, prober: impl Into<String>) -> Self {
        Self {
            encoder: encoder.into(),
            prober: prober.into(),
        }
    }

    /// Verify that both tools are discoverable on the search path
    ///
    /// Tools given as explicit paths are resolved as-is; bare names are
    /// looked up on PATH. Fails with `ToolMissing` naming the first absent
    /// tool.
    pub fn verify(&self) -> CropCutResult<()> {
        for tool in [&self.encoder, &self.prober] {
            let resolved = which::which(tool).map_err(|_| CropCutError::ToolMissing {
                tool: tool.clone(),
            })?;
            debug!("Resolved {} to {}", tool, resolved.display());
        }
        Ok(())
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self::new("ffmpeg", "ffprobe")
    }
}
