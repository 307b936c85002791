//! CropCut CLI entry point
//!
//! Trim a video to a time range, optionally crop it to a fixed aspect
//! ratio, and optionally scale its audio volume, via FFmpeg.
//!
//! # Usage
//!
//! ```bash
//! cropcut --input in.mp4 --output out.mp4 --start 00:01:00 --end 00:02:00 --crop 4:3 --volume 2
//! cropcut    # prompts for every value interactively
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cropcut::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match commands::execute_clip(cli) {
        Ok(output) => {
            println!("Video processing complete: {}", output.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
