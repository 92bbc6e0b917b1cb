use crate::angle::degrees_to_radians;
use std::fmt;

/// A latitude/longitude pair in decimal degrees.
///
/// Values are not range checked; out-of-range input flows through the
/// formulas unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    point: geo::Point,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            point: geo::Point::new(longitude, latitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    pub fn longitude(&self) -> f64 {
        self.point.x()
    }

    /// Returns `(latitude, longitude)` in radians.
    pub fn radians(&self) -> (f64, f64) {
        (
            degrees_to_radians(self.latitude()),
            degrees_to_radians(self.longitude()),
        )
    }
}

impl From<geo::Point> for GeoPoint {
    fn from(point: geo::Point) -> Self {
        Self { point }
    }
}

impl From<GeoPoint> for geo::Point {
    fn from(point: GeoPoint) -> Self {
        point.point
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({:.6}, {:.6})", self.latitude(), self.longitude())
    }
}
