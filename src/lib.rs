//! CropCut library
//!
//! A command-line tool that trims a video to a time range, optionally
//! crops it to a fixed aspect ratio, and optionally scales its audio
//! volume. All media processing is delegated to external FFmpeg binaries;
//! this crate only plans the crop geometry and filter chain and drives a
//! single blocking encoder invocation.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod planner;
pub mod probe;
pub mod utils;

// Re-export commonly used types
pub use config::ToolConfig;
pub use engine::{build_args, ClipRequest, Encoder};
pub use error::{CropCutError, CropCutResult};
pub use planner::{crop_rectangle, filter_chain, CropDirective, CropRectangle, Volume};
pub use probe::{Dimensions, ResolutionProber};
pub use utils::TimeRange;
