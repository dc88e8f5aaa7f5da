//! # Map Timeline
//!
//! Converts a location-history export into styled polylines, rendered as SVG
//! for direct viewing or as GeoJSON for mapping applications.
//!
//! This library provides:
//! - Location record parsing with derived facts (time, coordinate, activity)
//! - Path segmentation into runs sharing color (weekday/weekend) and stroke
//!   (walking/vehicle), with opacity fading by age
//! - A bounding canvas, auto-sized or centered on an explicit window
//! - SVG and GeoJSON encoders
//!
//! ## Features
//!
//! - **`synthetic`** - Enable the deterministic location-history generator
//!
//! ## Quick Start
//!
//! ```rust
//! use maptimeline::{export, parse_location_history, segment_locations};
//! use std::path::Path;
//!
//! let json = r#"{"locations": [
//!     {"timestampMs": "1577836800000", "latitudeE7": 488566000, "longitudeE7": 23522000},
//!     {"timestampMs": "1577836860000", "latitudeE7": 488570000, "longitudeE7": 23530000}
//! ]}"#;
//!
//! let locations = parse_location_history(json, Path::new("inline.json")).unwrap();
//! let result = segment_locations(&locations, 100.0);
//! let svg = export::render_svg(&result.segments, &result.canvas, 0.5);
//! assert!(svg.starts_with("<svg"));
//! ```

use std::path::PathBuf;

// Unified error handling
pub mod error;
pub use error::{OptionExt, Result, TimelineError};

// Single-assignment attribute cell
pub mod attribute;
pub use attribute::AttributeCell;

// Location record adapter
pub mod location;
pub use location::{ActivityGroup, ActivityGuess, LocationHistory, LocationRecord};

// Bounding canvas
pub mod canvas;
pub use canvas::{Canvas, CanvasOverride};

// Path segmentation engine
pub mod segmentation;
pub use segmentation::{
    ColorClass, Segment, Segmentation, SegmentationStats, Stroke, opacity_at, segment_locations,
};

// SVG and GeoJSON encoders
pub mod export;

// File I/O collaborators
pub mod io;
pub use io::{convert_file, parse_location_history, read_location_history};

// Synthetic location histories for benchmarks
#[cfg(feature = "synthetic")]
pub mod synthetic;

// ============================================================================
// Configuration
// ============================================================================

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Standalone SVG image.
    #[default]
    Svg,
    /// GeoJSON `FeatureCollection`.
    GeoJson,
}

/// Configuration for one conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output document format. Default: SVG
    pub format: OutputFormat,

    /// Width of the SVG strokes. Default: 0.5
    pub stroke_width: f64,

    /// Scale from degrees to SVG units. Default: 100.0
    pub scale: f64,

    /// Explicit canvas window replacing the auto-sized box. Default: none
    pub canvas: Option<CanvasOverride>,

    /// Directory both input and output paths are resolved against.
    pub base_dir: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Svg,
            stroke_width: 0.5,
            scale: 100.0,
            canvas: None,
            base_dir: None,
        }
    }
}

impl RenderConfig {
    /// Reject scales and stroke widths that cannot produce a drawable image.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(TimelineError::Config(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(TimelineError::Config(format!(
                "stroke width must be a non-negative number, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }
}
