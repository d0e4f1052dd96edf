use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// Identifier of a point of interest. Overpass hands out integers, other
/// sources may use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpotId {
    Numeric(i64),
    Text(String),
}

impl From<i64> for SpotId {
    fn from(id: i64) -> Self {
        SpotId::Numeric(id)
    }
}

impl From<&str> for SpotId {
    fn from(id: &str) -> Self {
        SpotId::Text(id.to_string())
    }
}

impl std::fmt::Display for SpotId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SpotId::Numeric(id) => write!(f, "{}", id),
            SpotId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// A point of interest as received from the data source.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPointOfInterest {
    pub id: SpotId,
    pub coordinate: Option<Coordinate>,
    pub tags: HashMap<String, String>,
}

impl RawPointOfInterest {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

/// A restaurant annotated with its distance from the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSpot {
    pub id: SpotId,
    pub name: String,
    pub category: String,
    pub coordinate: Option<Coordinate>,
    pub address: String,
    /// Illustrative only, does not depict the actual place.
    pub image: String,
    pub distance_miles: f64,
}

/// Travel distance and time to the selected spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub distance: String,
    pub duration: String,
}

impl RouteSummary {
    pub fn new(distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            distance_meters,
            duration_seconds,
            distance: format!("{:.2} km", distance_meters / 1000.0),
            duration: format!("{} minutes", (duration_seconds / 60.0).round()),
        }
    }
}
