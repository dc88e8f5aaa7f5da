//! Synthetic location-history generator for stress testing and benchmarking.
//!
//! Produces a time-ordered list of fixes wandering away from an origin, with
//! runs of walking and driving, occasional `UNKNOWN` fixes, and fixes without
//! any activity data. Generation is seeded and fully deterministic.
//!
//! Feature-gated behind `synthetic`, not included in production builds.
//!
//! # Example
//!
//! ```rust
//! use maptimeline::synthetic::SyntheticHistory;
//!
//! let history = SyntheticHistory {
//!     fix_count: 500,
//!     seed: 7,
//!     ..SyntheticHistory::default()
//! };
//!
//! let fixes = history.generate();
//! assert_eq!(fixes.len(), 500);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

use crate::location::{ActivityGroup, IN_VEHICLE, LocationRecord, UNKNOWN};

/// Meters per degree of latitude (approximately constant).
const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// Walking speed in meters per second.
const WALKING_SPEED: f64 = 1.4;

/// Driving speed in meters per second.
const DRIVING_SPEED: f64 = 12.0;

/// Scenario configuration for generating a location history.
#[derive(Debug, Clone)]
pub struct SyntheticHistory {
    /// Start position as (latitude, longitude) in degrees.
    pub origin: (f64, f64),
    /// Number of fixes to generate.
    pub fix_count: usize,
    /// Timestamp of the first fix, milliseconds since epoch.
    pub start_ms: i64,
    /// Time between consecutive fixes in milliseconds.
    pub interval_ms: i64,
    /// Probability that a fix switches between walking and driving.
    pub mode_switch_probability: f64,
    /// Fraction of fixes whose best guess is `UNKNOWN`.
    pub unknown_fraction: f64,
    /// Fraction of fixes carrying no activity data at all.
    pub bare_fraction: f64,
    /// RNG seed for deterministic reproduction.
    pub seed: u64,
}

impl Default for SyntheticHistory {
    fn default() -> Self {
        Self {
            // Paris
            origin: (48.8566, 2.3522),
            fix_count: 1_000,
            // Wednesday 2020-01-01T00:00:00Z
            start_ms: 1_577_836_800_000,
            interval_ms: 5 * 60 * 1000,
            mode_switch_probability: 0.05,
            unknown_fraction: 0.1,
            bare_fraction: 0.2,
            seed: 42,
        }
    }
}

/// Convert meters to degrees of latitude.
fn meters_to_deg_lat(meters: f64) -> f64 {
    meters / METERS_PER_DEG_LAT
}

/// Convert meters to degrees of longitude at a given latitude.
fn meters_to_deg_lng(meters: f64, latitude: f64) -> f64 {
    let meters_per_deg_lng = METERS_PER_DEG_LAT * latitude.to_radians().cos();
    if meters_per_deg_lng.abs() < 1e-10 {
        return 0.0;
    }
    meters / meters_per_deg_lng
}

fn to_e7(degrees: f64) -> i64 {
    (degrees * 1e7).round() as i64
}

impl SyntheticHistory {
    /// Generate the fixes.
    pub fn generate(&self) -> Vec<LocationRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut fixes = Vec::with_capacity(self.fix_count);

        let (mut lat, mut lon) = self.origin;
        let mut heading = rng.gen_range(0.0..2.0 * PI);
        let mut driving = false;
        let seconds_per_fix = self.interval_ms as f64 / 1000.0;

        for i in 0..self.fix_count {
            if rng.r#gen::<f64>() < self.mode_switch_probability {
                driving = !driving;
            }
            heading += rng.gen_range(-0.3..0.3);

            let speed = if driving { DRIVING_SPEED } else { WALKING_SPEED };
            let step = speed * seconds_per_fix;
            lat += meters_to_deg_lat(step * heading.sin());
            lon += meters_to_deg_lng(step * heading.cos(), lat);

            let roll: f64 = rng.r#gen();
            let activity = if roll < self.unknown_fraction {
                Some(vec![ActivityGroup::single(UNKNOWN, rng.gen_range(40..100))])
            } else if roll < self.unknown_fraction + self.bare_fraction {
                None
            } else if driving {
                Some(vec![ActivityGroup::single(IN_VEHICLE, rng.gen_range(50..100))])
            } else {
                Some(vec![ActivityGroup::single("ON_FOOT", rng.gen_range(50..100))])
            };

            let timestamp_ms = self.start_ms + i as i64 * self.interval_ms;
            if let Some(fix) = LocationRecord::new(timestamp_ms, to_e7(lat), to_e7(lon), activity) {
                fixes.push(fix);
            }
        }

        fixes
    }
}
