//! Crop geometry and filter chain planning
//!
//! This module is the pure core of CropCut: given the probed source
//! dimensions and the user's directives it decides the crop rectangle and
//! renders the FFmpeg filter chain. Nothing here touches the filesystem or
//! spawns a process.

pub mod crop;
pub mod filter;

pub use crop::{crop_rectangle, CropDirective, CropRectangle};
pub use filter::{filter_chain, Volume};
