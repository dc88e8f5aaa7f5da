//! SVG encoder.
//!
//! Coordinates are scaled linearly: `x = lon * scale`, `y = lat * -scale`,
//! both rounded to six decimals. The `viewBox` comes from the [`Canvas`].

use geo::Coord;

use crate::canvas::{round6, Canvas};
use crate::segmentation::Segment;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Render all segments as one SVG document, drawn in list order.
pub fn render_svg(segments: &[Segment], canvas: &Canvas, stroke_width: f64) -> String {
    let mut svg = format!(
        r#"<svg width="{w}" height="{h}" viewBox="{l} {t} {w} {h}" xmlns="{SVG_NS}" xmlns:xlink="{XLINK_NS}">"#,
        w = canvas.width(),
        h = canvas.height(),
        l = canvas.left(),
        t = canvas.top(),
    );

    svg.push_str(&format!(
        r#"
    <style>
        path {{
            stroke-linecap: round;
            stroke-width: {stroke_width};
            fill: none;
        }}
    </style>
"#
    ));

    for segment in segments {
        svg.push_str("    ");
        svg.push_str(&svg_path(segment, canvas.scale()));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// One `<path>` element for `segment`.
pub fn svg_path(segment: &Segment, scale: f64) -> String {
    format!(
        r#"<path d="{}" stroke="rgb({})" stroke-dasharray="{}" opacity="{}" />"#,
        path_data(&segment.coords, scale),
        segment.rgb(),
        segment.stroke.dasharray(),
        segment.opacity
    )
}

/// `M x,y L x,y ...` path data.
fn path_data(coords: &[Coord<f64>], scale: f64) -> String {
    let points: Vec<String> = coords.iter().map(|c| scale_coord(c, scale)).collect();
    format!("M {}", points.join(" L "))
}

fn scale_coord(coord: &Coord<f64>, scale: f64) -> String {
    format!("{},{}", round6(coord.x * scale), round6(coord.y * -scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::{ColorClass, Stroke};

    #[test]
    fn test_path_data_scales_and_flips() {
        let coords = vec![Coord { x: 2.0, y: 48.0 }, Coord { x: 2.5, y: 48.5 }];
        assert_eq!(path_data(&coords, 100.0), "M 200,-4800 L 250,-4850");
    }

    #[test]
    fn test_single_point_path() {
        let coords = vec![Coord { x: 1.25, y: -3.5 }];
        assert_eq!(path_data(&coords, 2.0), "M 2.5,7");
    }

    #[test]
    fn test_svg_path_attributes() {
        let segment = Segment {
            coords: vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }],
            opacity: 0.42,
            color: ColorClass::Weekend,
            stroke: Stroke::Dashed,
        };
        let path = svg_path(&segment, 1.0);
        assert!(path.contains(r#"stroke="rgb(255,0,0)""#));
        assert!(path.contains(r#"stroke-dasharray="0.1,3""#));
        assert!(path.contains(r#"opacity="0.42""#));
    }
}
