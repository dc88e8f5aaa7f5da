//! Location-history records and the facts derived from them.
//!
//! Exports store integer fields either as JSON numbers or as decimal
//! strings (`"timestampMs": "1577836800000"`), so both are accepted.
//! Required fields are checked during deserialization: a record without a
//! timestamp or coordinates rejects the whole history.

use chrono::{DateTime, Utc};
use geo::Coord;
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Activity type that marks a fix as travelled by vehicle.
pub const IN_VEHICLE: &str = "IN_VEHICLE";

/// Activity type that marks a fix as unconfirmed.
pub const UNKNOWN: &str = "UNKNOWN";

/// Scale of the `*E7` coordinate fields.
const E7: f64 = 1e7;

/// Top-level structure of a location-history export.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationHistory {
    pub locations: Vec<LocationRecord>,
}

/// One raw fix.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "timestampMs", deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "latitudeE7", deserialize_with = "deserialize_lenient_i64")]
    pub latitude_e7: i64,
    #[serde(rename = "longitudeE7", deserialize_with = "deserialize_lenient_i64")]
    pub longitude_e7: i64,
    /// Activity guesses, best group first.
    #[serde(default)]
    pub activity: Option<Vec<ActivityGroup>>,
}

/// A group of activity guesses recorded at one instant.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityGroup {
    /// Guesses ordered by confidence, highest first.
    #[serde(default)]
    pub activity: Vec<ActivityGuess>,
}

/// A single `{type, confidence}` guess.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityGuess {
    #[serde(rename = "type")]
    pub activity_type: String,
    #[serde(default)]
    pub confidence: i64,
}

impl LocationRecord {
    /// Build a record from already-decoded values.
    ///
    /// Returns `None` when `timestamp_ms` is outside chrono's range.
    pub fn new(
        timestamp_ms: i64,
        latitude_e7: i64,
        longitude_e7: i64,
        activity: Option<Vec<ActivityGroup>>,
    ) -> Option<Self> {
        Some(Self {
            timestamp: DateTime::from_timestamp_millis(timestamp_ms)?,
            latitude_e7,
            longitude_e7,
            activity,
        })
    }

    /// UTC instant of the fix.
    pub fn time(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Position as `x` = longitude, `y` = latitude in degrees.
    pub fn coordinate(&self) -> Coord<f64> {
        Coord {
            x: self.longitude_e7 as f64 / E7,
            y: self.latitude_e7 as f64 / E7,
        }
    }

    /// Type of the highest-confidence guess in the first activity group.
    pub fn best_activity_type(&self) -> Option<&str> {
        self.activity
            .as_ref()?
            .first()?
            .activity
            .first()
            .map(|guess| guess.activity_type.as_str())
    }

    /// Everything except a vehicle fix counts as walking.
    pub fn is_walking(&self) -> bool {
        self.best_activity_type() != Some(IN_VEHICLE)
    }

    /// A fix is confirmed unless its best guess is `UNKNOWN`.
    pub fn is_confirmed(&self) -> bool {
        self.best_activity_type() != Some(UNKNOWN)
    }
}

impl ActivityGroup {
    /// Group with a single guess.
    pub fn single(activity_type: &str, confidence: i64) -> Self {
        Self {
            activity: vec![ActivityGuess {
                activity_type: activity_type.to_string(),
                confidence,
            }],
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Str(String),
}

impl NumberOrString {
    fn into_i64<E: de::Error>(self) -> Result<i64, E> {
        match self {
            NumberOrString::Int(v) => Ok(v),
            NumberOrString::Float(v) if v.is_finite() && v.fract() == 0.0 => Ok(v as i64),
            NumberOrString::Float(v) => Err(E::custom(format!("expected an integer, got {v}"))),
            NumberOrString::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("expected an integer string, got {s:?}"))),
        }
    }
}

fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_i64()
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = deserialize_lenient_i64(deserializer)?;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| de::Error::custom(format!("timestamp {millis} ms is out of range")))
}
