//! Interactive prompting for values not supplied as flags

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::error::CropCutResult;

/// Print a prompt and read one trimmed line from stdin
pub fn prompt(label: &str) -> CropCutResult<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Use the flag value when present, otherwise prompt for one
pub fn resolve(flag: Option<String>, label: &str) -> CropCutResult<String> {
    match flag {
        Some(value) => Ok(value),
        None => prompt(label),
    }
}

/// Use the flag path when present, otherwise prompt for one
pub fn resolve_path(flag: Option<PathBuf>, label: &str) -> CropCutResult<PathBuf> {
    match flag {
        Some(value) => Ok(value),
        None => Ok(PathBuf::from(prompt(label)?)),
    }
}
