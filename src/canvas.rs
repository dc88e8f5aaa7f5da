//! Bounding canvas used to size and position the rendered output.
//!
//! The canvas lives in (longitude, latitude) space. By default it grows to
//! contain every emitted coordinate; an explicit [`CanvasOverride`] replaces
//! the accumulated box with a fixed window around a center point.

use std::str::FromStr;

use geo::{Coord, Rect};

use crate::error::{OptionExt, Result, TimelineError};

/// Round to `decimals` places, half-to-even on the exact binary value.
///
/// Goes through the correctly rounded decimal expansion, so a stored value
/// such as `0.995` (really `0.99499999...`) rounds down to `0.99`.
/// Negative zero is normalized so it never prints as `-0`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let rounded = format!("{value:.decimals$}").parse().unwrap_or(value);
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Round to six decimal places, the precision of every scaled output value.
pub fn round6(value: f64) -> f64 {
    round_to(value, 6)
}

/// Raw box edges in degrees.
///
/// An override with a negative height or width yields `left > right` or
/// `bottom > top`; the edges are kept as given so the scaled metrics follow
/// the center formulas exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Edges {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

/// Mutable axis-aligned bounding box plus the output scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    scale: f64,
    edges: Option<Edges>,
}

impl Canvas {
    /// Create an empty canvas with the given scale factor.
    pub fn new(scale: f64) -> Self {
        Self { scale, edges: None }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The box in degrees, or `None` before the first coordinate.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.edges.map(|e| {
            Rect::new(
                Coord {
                    x: e.left,
                    y: e.bottom,
                },
                Coord {
                    x: e.right,
                    y: e.top,
                },
            )
        })
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_none()
    }

    /// Grow the box so it contains `coord`.
    pub fn add(&mut self, coord: Coord<f64>) {
        self.edges = Some(match self.edges {
            None => Edges {
                left: coord.x,
                right: coord.x,
                top: coord.y,
                bottom: coord.y,
            },
            Some(e) => Edges {
                left: e.left.min(coord.x),
                right: e.right.max(coord.x),
                top: e.top.max(coord.y),
                bottom: e.bottom.min(coord.y),
            },
        });
    }

    /// Replace the box with `width` x `height` degrees centered on (`lat`, `lon`).
    pub fn set_center_dimensions(&mut self, lat: f64, lon: f64, height: f64, width: f64) {
        self.edges = Some(Edges {
            left: lon - width / 2.0,
            right: lon + width / 2.0,
            top: lat + height / 2.0,
            bottom: lat - height / 2.0,
        });
    }

    pub fn apply_override(&mut self, window: &CanvasOverride) {
        self.set_center_dimensions(window.lat, window.lon, window.height, window.width);
    }

    /// Western edge in degrees.
    pub fn west(&self) -> f64 {
        self.edges.map_or(0.0, |e| e.left)
    }

    /// Eastern edge in degrees.
    pub fn east(&self) -> f64 {
        self.edges.map_or(0.0, |e| e.right)
    }

    /// Northern edge in degrees.
    pub fn north(&self) -> f64 {
        self.edges.map_or(0.0, |e| e.top)
    }

    /// Southern edge in degrees.
    pub fn south(&self) -> f64 {
        self.edges.map_or(0.0, |e| e.bottom)
    }

    /// Scaled horizontal extent.
    pub fn width(&self) -> f64 {
        round6((self.east() - self.west()) * self.scale)
    }

    /// Scaled vertical extent.
    pub fn height(&self) -> f64 {
        round6((self.north() - self.south()) * self.scale)
    }

    /// Scaled x origin.
    pub fn left(&self) -> f64 {
        round6(self.west() * self.scale)
    }

    /// Scaled y origin. North is up in degrees but down in image space.
    pub fn top(&self) -> f64 {
        round6(self.north() * -self.scale)
    }
}

/// Explicit canvas window parsed from `"lat,lon,height,width"`.
///
/// # Example
/// ```
/// use maptimeline::CanvasOverride;
///
/// let paris: CanvasOverride = "48.86,2.34,0.05,0.06".parse().unwrap();
/// assert_eq!(paris.lat, 48.86);
/// assert_eq!(paris.width, 0.06);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasOverride {
    pub lat: f64,
    pub lon: f64,
    pub height: f64,
    pub width: f64,
}

impl FromStr for CanvasOverride {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self> {
        let fields = s
            .split(',')
            .map(|field| {
                let field = field.trim();
                field
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_config(format!("canvas field {field:?} is not a number"))
            })
            .collect::<Result<Vec<f64>>>()?;

        match fields.as_slice() {
            &[lat, lon, height, width] => Ok(Self {
                lat,
                lon,
                height,
                width,
            }),
            _ => Err(TimelineError::Config(format!(
                "canvas expects lat,lon,height,width but got {} field(s)",
                fields.len()
            ))),
        }
    }
}
