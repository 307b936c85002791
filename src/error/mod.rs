//! Error handling module for CropCut

use thiserror::Error;

/// Main error type for CropCut operations
#[derive(Error, Debug)]
pub enum CropCutError {
    /// Required external tool not found on PATH
    #[error("Required tool not found on PATH: {tool}. Is FFmpeg installed?")]
    ToolMissing { tool: String },

    /// Resolution probe error
    #[error("Failed to read video resolution: {message}")]
    ProbeError { message: String },

    /// Invalid user input
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Invalid time format
    #[error("Invalid time format: {time}. Expected HH:MM:SS")]
    InvalidTimeFormat { time: String },

    /// Encoding operation error
    #[error("FFmpeg failed with exit status {status}")]
    EncodeError { status: i32 },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for CropCut operations
pub type CropCutResult<T> = std::result::Result<T, CropCutError>;
