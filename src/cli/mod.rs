//! CLI module for CropCut
//!
//! This module handles command-line argument parsing, interactive
//! prompting, and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod prompt;

/// CropCut CLI
///
/// Trims a video to a time range, optionally crops it to a fixed aspect
/// ratio, and optionally scales its audio volume, delegating the media
/// work to FFmpeg. Every value can be given as a flag; anything left out
/// is prompted for interactively.
#[derive(Parser, Debug)]
#[command(name = "cropcut")]
#[command(about = "Trim, crop, and volume-adjust a video via FFmpeg")]
#[command(version)]
pub struct Cli {
    /// Input video file path
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output video file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Start time (HH:MM:SS)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End time (HH:MM:SS)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Crop option: original, 1:1, or 4:3 (anything else means original)
    #[arg(short, long)]
    pub crop: Option<String>,

    /// Volume multiplier, an integer from 1 to 10
    ///
    /// Hyphen values are accepted here so negative input reaches our own
    /// range validation instead of dying as an unknown flag.
    #[arg(short, long, allow_hyphen_values = true)]
    pub volume: Option<String>,

    /// Encoder binary to invoke
    #[arg(long, default_value = "ffmpeg", env = "CROPCUT_FFMPEG")]
    pub ffmpeg: String,

    /// Prober binary to invoke
    #[arg(long, default_value = "ffprobe", env = "CROPCUT_FFPROBE")]
    pub ffprobe: String,

    /// Logging level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
