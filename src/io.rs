//! File I/O around the segmentation core.
//!
//! Paths are resolved against an optional base directory taken from the
//! [`RenderConfig`], so callers never rely on the process working directory
//! implicitly.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Result, TimelineError};
use crate::export;
use crate::location::{LocationHistory, LocationRecord};
use crate::segmentation::{Segmentation, segment_locations};
use crate::RenderConfig;

/// Join `file` onto `base_dir` when one is configured.
///
/// Absolute `file` paths are returned unchanged.
pub fn resolve_path(base_dir: Option<&Path>, file: &Path) -> PathBuf {
    match base_dir {
        Some(base) => base.join(file),
        None => file.to_path_buf(),
    }
}

/// Parse a location-history document held in memory.
///
/// `path` is only used for error reporting.
pub fn parse_location_history(json: &str, path: &Path) -> Result<Vec<LocationRecord>> {
    let history: LocationHistory =
        serde_json::from_str(json).map_err(|source| TimelineError::InputFormat {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(history.locations)
}

/// Read and parse the whole input file.
pub fn read_location_history(path: &Path) -> Result<Vec<LocationRecord>> {
    let json = fs::read_to_string(path).map_err(|source| TimelineError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", json.len(), path.display());

    let locations = parse_location_history(&json, path)?;
    info!("Loaded {} locations from {}", locations.len(), path.display());
    Ok(locations)
}

/// Write a fully rendered document in one go.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| TimelineError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Read `input`, segment it, render it, and write `output`.
///
/// Everything is rendered in memory first; the output file is only created
/// once every earlier step has succeeded.
pub fn convert_file(input: &Path, output: &Path, config: &RenderConfig) -> Result<Segmentation> {
    config.validate()?;

    let input = resolve_path(config.base_dir.as_deref(), input);
    let output = resolve_path(config.base_dir.as_deref(), output);

    info!("Reading input file...");
    let locations = read_location_history(&input)?;

    info!("Analyzing data...");
    let mut segmentation = segment_locations(&locations, config.scale);
    if let Some(window) = &config.canvas {
        segmentation.canvas.apply_override(window);
    }
    info!(
        "Found {} segments from {} fixes ({} unconfirmed skipped)",
        segmentation.stats.segments,
        segmentation.stats.total_fixes,
        segmentation.stats.unconfirmed_fixes
    );

    info!("Rendering output file...");
    let document = export::render(&segmentation.segments, &segmentation.canvas, config)?;
    write_output(&output, &document)?;

    Ok(segmentation)
}
