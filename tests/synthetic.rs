//! Property checks over synthetic location histories.
//!
//! Run with: `cargo test --features synthetic --test synthetic`

#![cfg(feature = "synthetic")]

use maptimeline::synthetic::SyntheticHistory;
use maptimeline::{ColorClass, Stroke, opacity_at, segment_locations};

#[test]
fn test_generator_is_deterministic() {
    let scenario = SyntheticHistory {
        fix_count: 200,
        seed: 11,
        ..SyntheticHistory::default()
    };
    let a = scenario.generate();
    let b = scenario.generate();
    assert_eq!(a.len(), 200);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.time(), y.time());
        assert_eq!(x.coordinate(), y.coordinate());
        assert_eq!(x.best_activity_type(), y.best_activity_type());
    }
}

#[test]
fn test_segments_cover_every_confirmed_fix_once() {
    let fixes = SyntheticHistory {
        fix_count: 5_000,
        ..SyntheticHistory::default()
    }
    .generate();

    let confirmed: Vec<_> = fixes.iter().filter(|f| f.is_confirmed()).collect();
    let result = segment_locations(&fixes, 100.0);

    // Reversing back to time order reproduces the confirmed coordinates exactly
    let emitted: Vec<_> = result
        .segments
        .iter()
        .rev()
        .flat_map(|s| s.coords.iter().copied())
        .collect();
    let expected: Vec<_> = confirmed.iter().map(|f| f.coordinate()).collect();
    assert_eq!(emitted, expected);
    assert_eq!(result.stats.emitted_coordinates, confirmed.len());
}

#[test]
fn test_segment_attributes_match_source_fixes() {
    let fixes = SyntheticHistory {
        fix_count: 3_000,
        // One fix per hour so the run crosses weekends
        interval_ms: 60 * 60 * 1000,
        seed: 3,
        ..SyntheticHistory::default()
    }
    .generate();
    let total = fixes.len();

    let indexed: Vec<_> = fixes
        .iter()
        .enumerate()
        .filter(|(_, f)| f.is_confirmed())
        .collect();

    let result = segment_locations(&fixes, 100.0);
    let mut cursor = 0;
    for segment in result.segments.iter().rev() {
        let (first_index, _) = indexed[cursor];
        assert_eq!(segment.opacity, opacity_at(first_index, total));

        for _ in &segment.coords {
            let (_, fix) = indexed[cursor];
            assert_eq!(segment.color, ColorClass::from_time(&fix.time()));
            assert_eq!(segment.stroke, Stroke::for_walking(fix.is_walking()));
            cursor += 1;
        }
    }
    assert_eq!(cursor, indexed.len());
    assert!(result.segments.iter().any(|s| s.color == ColorClass::Weekend));
}
