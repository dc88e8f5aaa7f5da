//! Output encoders.
//!
//! Both encoders are pure: they borrow the segment list and return the whole
//! document as a `String`, so nothing touches the filesystem until rendering
//! has succeeded.

pub mod geojson;
pub mod svg;

pub use self::geojson::render_geojson;
pub use self::svg::render_svg;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::segmentation::Segment;
use crate::{OutputFormat, RenderConfig};

/// Render `segments` in the format selected by `config`.
pub fn render(segments: &[Segment], canvas: &Canvas, config: &RenderConfig) -> Result<String> {
    match config.format {
        OutputFormat::Svg => Ok(render_svg(segments, canvas, config.stroke_width)),
        OutputFormat::GeoJson => render_geojson(segments),
    }
}
