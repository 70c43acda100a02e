//! Geographic bounding rectangle derived from two draggable corner markers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Minimal axis-aligned rectangle containing two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsRect {
    south_west: GeoPoint,
    north_east: GeoPoint,
}

impl BoundsRect {
    /// The corners may arrive in any order; the rectangle is normalized so
    /// south-west <= north-east on both axes.
    #[must_use]
    pub fn from_corners(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            south_west: GeoPoint::new(a.lat.min(b.lat), a.lon.min(b.lon)),
            north_east: GeoPoint::new(a.lat.max(b.lat), a.lon.max(b.lon)),
        }
    }

    #[must_use]
    pub const fn south_west(self) -> GeoPoint {
        self.south_west
    }

    #[must_use]
    pub const fn north_east(self) -> GeoPoint {
        self.north_east
    }
}
