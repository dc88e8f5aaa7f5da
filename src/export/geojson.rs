//! GeoJSON encoder.
//!
//! Each segment becomes a `LineString` feature over the raw, unscaled
//! `[lon, lat]` coordinates. Styling goes into a non-standard top-level
//! `style` member rather than `properties`, which stays empty.

use ::geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::error::Result;
use crate::segmentation::Segment;

/// Build the feature for one segment.
pub fn segment_feature(segment: &Segment) -> Feature {
    let coordinates: Vec<Vec<f64>> = segment.coords.iter().map(|c| vec![c.x, c.y]).collect();

    let mut foreign_members = JsonObject::new();
    foreign_members.insert(
        "style".to_string(),
        json!({
            "stroke": format!("rgb({})", segment.rgb()),
            "stroke-dasharray": segment.stroke.dasharray(),
            "opacity": segment.opacity,
        }),
    );

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(coordinates))),
        id: None,
        properties: Some(JsonObject::new()),
        foreign_members: Some(foreign_members),
    }
}

/// Build the `FeatureCollection` for all segments, in list order.
pub fn feature_collection(segments: &[Segment]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: segments.iter().map(segment_feature).collect(),
        foreign_members: None,
    }
}

/// Serialize all segments as a GeoJSON document.
pub fn render_geojson(segments: &[Segment]) -> Result<String> {
    Ok(serde_json::to_string(&feature_collection(segments))?)
}
