//! Path segmentation: the core of timeline rendering.
//!
//! Walks the ordered fixes once and groups consecutive confirmed fixes into
//! maximal runs that share a color class (weekday or weekend) and a stroke
//! pattern (walking or vehicle). Each run becomes one [`Segment`] carrying
//! an opacity that fades with the age of the run's first fix.
//!
//! ## Boundaries
//!
//! Attributes are committed into [`AttributeCell`]s in a fixed order:
//! opacity, color, stroke. All three are always attempted. When color or
//! stroke is rejected, the open segment is closed *without* the current
//! coordinate and a fresh segment is opened with it as first member, so the
//! boundary fix belongs only to the newer run.
//!
//! Opacity is never a boundary: its cell keeps the value of the first fix
//! appended to the segment.
//!
//! ## Ordering
//!
//! The finished list is reversed, so the most recent segment comes first and
//! the earliest last. Renderers draw in list order, which puts recent opaque
//! strokes on top of older faded ones.

use chrono::Datelike;
use geo::Coord;
use log::debug;

use crate::attribute::AttributeCell;
use crate::canvas::{Canvas, round_to};
use crate::location::LocationRecord;

/// Day-of-week class of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorClass {
    /// Monday to Friday.
    Weekday,
    /// Saturday and Sunday.
    Weekend,
}

impl ColorClass {
    /// Classify a fix time, Monday = 0 ... Sunday = 6, weekdays 0..=4.
    pub fn from_time<T: Datelike>(time: &T) -> Self {
        if time.weekday().num_days_from_monday() < 5 {
            ColorClass::Weekday
        } else {
            ColorClass::Weekend
        }
    }

    /// Numeric class, 0 for weekday and 1 for weekend.
    pub fn value(self) -> u8 {
        match self {
            ColorClass::Weekday => 0,
            ColorClass::Weekend => 1,
        }
    }

    /// Red channel of the stroke color; the blue channel is `255 - red`.
    pub fn red(self) -> u8 {
        self.value() * 255
    }

    /// Channel triple `"r,0,b"` as used inside `rgb(...)`.
    pub fn rgb(self) -> String {
        let red = self.red();
        format!("{},0,{}", red, 255 - red)
    }
}

/// Stroke pattern of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stroke {
    /// On foot, or no activity data.
    Solid,
    /// In a vehicle.
    Dashed,
}

impl Stroke {
    pub fn for_walking(is_walking: bool) -> Self {
        if is_walking {
            Stroke::Solid
        } else {
            Stroke::Dashed
        }
    }

    /// Value of the `stroke-dasharray` attribute.
    pub fn dasharray(self) -> &'static str {
        match self {
            Stroke::Solid => "0",
            Stroke::Dashed => "0.1,3",
        }
    }
}

/// Opacity for the fix at `index` out of `total` fixes, rounded to 2 decimals.
///
/// Both counts include unconfirmed fixes, so the fade is linear in input
/// position regardless of how many fixes get skipped.
pub fn opacity_at(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    round_to(1.0 - index as f64 / total as f64, 2)
}

/// A finished polyline with its committed style.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Coordinates as `x` = longitude, `y` = latitude, in time order.
    pub coords: Vec<Coord<f64>>,
    pub opacity: f64,
    pub color: ColorClass,
    pub stroke: Stroke,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// `"r,0,b"` channel string for the segment's color class.
    pub fn rgb(&self) -> String {
        self.color.rgb()
    }
}

/// Segment under construction.
#[derive(Debug, Default)]
struct SegmentBuilder {
    coords: Vec<Coord<f64>>,
    opacity: AttributeCell<f64>,
    color: AttributeCell<ColorClass>,
    stroke: AttributeCell<Stroke>,
}

impl SegmentBuilder {
    /// Commit the fix's attributes and append `coord` if color and stroke agree.
    ///
    /// Returns `false` on a boundary; the coordinate is not appended then.
    fn try_extend(
        &mut self,
        coord: Coord<f64>,
        opacity: f64,
        color: ColorClass,
        stroke: Stroke,
    ) -> bool {
        self.opacity.try_commit(opacity);
        let same_color = self.color.try_commit(color);
        let same_stroke = self.stroke.try_commit(stroke);
        if !(same_color && same_stroke) {
            return false;
        }
        self.coords.push(coord);
        true
    }

    fn finish(self) -> Option<Segment> {
        if self.coords.is_empty() {
            return None;
        }
        Some(Segment {
            coords: self.coords,
            opacity: self.opacity.value()?,
            color: self.color.value()?,
            stroke: self.stroke.value()?,
        })
    }
}

/// Counters collected during one segmentation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentationStats {
    /// All fixes in the input, confirmed or not.
    pub total_fixes: usize,
    /// Fixes skipped because their best activity guess is `UNKNOWN`.
    pub unconfirmed_fixes: usize,
    /// Coordinates placed into segments.
    pub emitted_coordinates: usize,
    pub segments: usize,
}

/// Result of segmenting a location history.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    /// Segments, most recent first.
    pub segments: Vec<Segment>,
    /// Bounding box of every emitted coordinate.
    pub canvas: Canvas,
    pub stats: SegmentationStats,
}

/// Segment `locations` (assumed time-ordered) into styled runs.
///
/// # Example
/// ```
/// use maptimeline::{segment_locations, LocationRecord};
///
/// // Wednesday 2020-01-01, no activity data
/// let fixes: Vec<LocationRecord> = (0..3)
///     .filter_map(|i| LocationRecord::new(1_577_836_800_000 + i * 60_000, 480_000_000 + i, 20_000_000, None))
///     .collect();
///
/// let result = segment_locations(&fixes, 100.0);
/// assert_eq!(result.segments.len(), 1);
/// assert_eq!(result.segments[0].coords.len(), 3);
/// assert_eq!(result.segments[0].opacity, 1.0);
/// ```
pub fn segment_locations(locations: &[LocationRecord], scale: f64) -> Segmentation {
    let total = locations.len();
    let mut canvas = Canvas::new(scale);
    let mut segments = Vec::new();
    let mut open = SegmentBuilder::default();
    let mut stats = SegmentationStats {
        total_fixes: total,
        ..Default::default()
    };

    for (index, record) in locations.iter().enumerate() {
        if !record.is_confirmed() {
            stats.unconfirmed_fixes += 1;
            continue;
        }

        let coord = record.coordinate();
        canvas.add(coord);
        stats.emitted_coordinates += 1;

        let opacity = opacity_at(index, total);
        let color = ColorClass::from_time(&record.time());
        let stroke = Stroke::for_walking(record.is_walking());

        if !open.try_extend(coord, opacity, color, stroke) {
            debug!(
                "segment boundary at fix {}: {:?}/{:?}",
                index, color, stroke
            );
            let closed = std::mem::take(&mut open);
            segments.extend(closed.finish());
            // A fresh builder accepts every attribute.
            open.try_extend(coord, opacity, color, stroke);
        }
    }
    segments.extend(open.finish());
    segments.reverse();

    stats.segments = segments.len();
    debug!(
        "segmented {} fixes ({} unconfirmed) into {} segments",
        stats.total_fixes, stats.unconfirmed_fixes, stats.segments
    );

    Segmentation {
        segments,
        canvas,
        stats,
    }
}

impl Segmentation {
    /// Segment `locations` with the given canvas scale.
    pub fn new(locations: &[LocationRecord], scale: f64) -> Self {
        segment_locations(locations, scale)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
