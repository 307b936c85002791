//! Command execution
//!
//! Sequences the pipeline: tool check, input gathering, validation,
//! resolution probe, crop/filter planning, and the single encoder run.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::cli::prompt::{resolve, resolve_path};
use crate::cli::Cli;
use crate::config::ToolConfig;
use crate::engine::{ClipRequest, Encoder};
use crate::planner::{crop_rectangle, filter_chain, CropDirective, Volume};
use crate::probe::ResolutionProber;
use crate::utils::TimeRange;

/// Run the clipping pipeline end to end, returning the output path
pub fn execute_clip(cli: Cli) -> Result<PathBuf> {
    let tools = ToolConfig::new(cli.ffmpeg, cli.ffprobe);
    tools.verify()?;

    // Prompt order matches the interactive surface: input, output, start,
    // end, crop, volume.
    let input = resolve_path(cli.input, "Enter input video file")?;
    let output = resolve_path(cli.output, "Enter output video file")?;
    let start = resolve(cli.start, "Enter start time (HH:MM:SS)")?;
    let end = resolve(cli.end, "Enter end time (HH:MM:SS)")?;
    let crop = resolve(cli.crop, "Enter crop option (original, 1:1, 4:3)")?;
    let volume = resolve(cli.volume, "Enter volume multiplier (1-10)")?;

    // Validate everything the core is responsible for before any external
    // invocation.
    let range = TimeRange::new(&start, &end)?;
    let volume = Volume::parse(&volume)?;
    let directive = CropDirective::parse(&crop);

    let source = ResolutionProber::new(tools.clone()).probe(&input)?;
    let rectangle = crop_rectangle(directive, source);
    let filter = filter_chain(rectangle, volume);
    info!("Filter chain: {}", filter.as_deref().unwrap_or("(none)"));

    let request = ClipRequest {
        input,
        output,
        range,
        filter,
    };
    Encoder::new(tools).run(&request)?;

    Ok(request.output)
}
