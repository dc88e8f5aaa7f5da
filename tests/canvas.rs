//! Tests for the bounding canvas

use geo::Coord;
use maptimeline::canvas::{round_to, round6};
use maptimeline::{Canvas, CanvasOverride, TimelineError};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_canvas_grows_with_coordinates() {
    let mut canvas = Canvas::new(1.0);
    assert!(canvas.is_empty());

    canvas.add(Coord { x: 2.0, y: 48.0 });
    canvas.add(Coord { x: 2.5, y: 48.5 });

    assert_eq!(canvas.width(), 0.5);
    assert_eq!(canvas.height(), 0.5);
    assert_eq!(canvas.left(), 2.0);
    assert_eq!(canvas.top(), -48.5);

    let bounds = canvas.bounds().unwrap();
    assert_eq!(bounds.min(), Coord { x: 2.0, y: 48.0 });
    assert_eq!(bounds.max(), Coord { x: 2.5, y: 48.5 });
}

#[test]
fn test_canvas_scale_applies_to_all_extents() {
    let mut canvas = Canvas::new(100.0);
    canvas.add(Coord { x: 2.0, y: 48.0 });
    canvas.add(Coord { x: 2.5, y: 48.5 });
    canvas.add(Coord { x: 2.25, y: 48.25 });

    assert_eq!(canvas.width(), 50.0);
    assert_eq!(canvas.height(), 50.0);
    assert_eq!(canvas.left(), 200.0);
    assert_eq!(canvas.top(), -4850.0);
}

#[test]
fn test_single_point_canvas_has_zero_extent() {
    let mut canvas = Canvas::new(10.0);
    canvas.add(Coord { x: -1.0, y: 1.0 });
    assert_eq!(canvas.width(), 0.0);
    assert_eq!(canvas.height(), 0.0);
    assert_eq!(canvas.left(), -10.0);
    assert_eq!(canvas.top(), -10.0);
}

#[test]
fn test_empty_canvas_reports_zero() {
    let canvas = Canvas::new(100.0);
    assert_eq!(canvas.width(), 0.0);
    assert_eq!(canvas.height(), 0.0);
    assert_eq!(canvas.left(), 0.0);
    assert_eq!(canvas.top(), 0.0);
    assert_eq!(canvas.top().to_string(), "0");
}

#[test]
fn test_override_replaces_accumulated_box() {
    let mut canvas = Canvas::new(1.0);
    canvas.add(Coord { x: -120.0, y: 10.0 });
    canvas.add(Coord { x: 100.0, y: -30.0 });

    let paris: CanvasOverride = "48.86,2.34,0.05,0.06".parse().unwrap();
    canvas.apply_override(&paris);

    assert!(approx_eq(canvas.north(), 48.885));
    assert!(approx_eq(canvas.south(), 48.835));
    assert!(approx_eq(canvas.east(), 2.37));
    assert!(approx_eq(canvas.west(), 2.31));
    assert!(approx_eq(canvas.width(), 0.06));
    assert!(approx_eq(canvas.height(), 0.05));
    assert!(approx_eq(canvas.top(), -48.885));
}

#[test]
fn test_override_on_empty_canvas() {
    let mut canvas = Canvas::new(100.0);
    canvas.set_center_dimensions(0.0, 0.0, 2.0, 4.0);
    assert_eq!(canvas.width(), 400.0);
    assert_eq!(canvas.height(), 200.0);
    assert_eq!(canvas.left(), -200.0);
    assert_eq!(canvas.top(), -100.0);
}

#[test]
fn test_parse_canvas_override() {
    let window: CanvasOverride = " 48.86, 2.34 ,0.05,0.06 ".parse().unwrap();
    assert_eq!(
        window,
        CanvasOverride {
            lat: 48.86,
            lon: 2.34,
            height: 0.05,
            width: 0.06,
        }
    );

    let negative: CanvasOverride = "-33.87,151.21,1,1".parse().unwrap();
    assert_eq!(negative.lat, -33.87);
}

#[test]
fn test_parse_canvas_override_rejects_bad_input() {
    for bad in ["", "48.86,2.34,0.05", "48.86,2.34,0.05,0.06,1", "a,b,c,d", "1,2,3,NaN"] {
        let result = bad.parse::<CanvasOverride>();
        assert!(
            matches!(result, Err(TimelineError::Config(_))),
            "expected config error for {bad:?}"
        );
    }
}

#[test]
fn test_negative_override_extents_follow_center_formulas() {
    let mut canvas = Canvas::new(1.0);
    canvas.set_center_dimensions(10.0, 20.0, -2.0, -4.0);

    assert_eq!(canvas.west(), 22.0);
    assert_eq!(canvas.east(), 18.0);
    assert_eq!(canvas.north(), 9.0);
    assert_eq!(canvas.south(), 11.0);
    assert_eq!(canvas.width(), -4.0);
    assert_eq!(canvas.height(), -2.0);
    assert_eq!(canvas.left(), 22.0);
    assert_eq!(canvas.top(), -9.0);
}

#[test]
fn test_rounding_uses_stored_binary_value() {
    assert_eq!(round_to(0.995, 2), 0.99);
    assert_eq!(round_to(0.625, 2), 0.62);
    assert_eq!(round_to(0.375, 2), 0.38);
    // 2.0000005 is stored just below the half
    assert_eq!(round6(2.0000005), 2.0);
    assert_eq!(round6(-0.0000001), 0.0);
    assert_eq!(round6(-0.0000001).to_string(), "0");
}
