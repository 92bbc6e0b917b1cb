//! Distance formulas.

use crate::angle::degrees_to_radians;
use crate::ellipsoid::EllipsoidParameters;
use crate::point::GeoPoint;

/// Radius of the sphere used by [`trigonometric_distance`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Hubeny's approximation of the distance in metres between two points on
/// the given ellipsoid.
///
/// Uses the meridian and prime-vertical radii of curvature at the mean
/// latitude, so accuracy falls off beyond a few hundred kilometres.
pub fn hubeny_distance(from: GeoPoint, to: GeoPoint, params: &EllipsoidParameters) -> f64 {
    let mean_lat = degrees_to_radians((from.latitude() + to.latitude()) / 2.0);
    let d_lat = degrees_to_radians(from.latitude() - to.latitude());
    let d_lng = degrees_to_radians(from.longitude() - to.longitude());

    let s = mean_lat.sin();
    let w = (1.0 - params.e2 * s * s).sqrt();
    // Only reachable with e2 >= 1.
    if w == 0.0 {
        return 0.0;
    }

    let meridian_radius = params.m / (w * w * w);
    let n = params.a / w;

    let d_north = d_lat * meridian_radius;
    let d_east = d_lng * n * mean_lat.cos();

    (d_north * d_north + d_east * d_east).sqrt()
}

/// Great-circle distance in kilometres on a sphere of radius
/// [`EARTH_RADIUS_KM`], by the spherical law of cosines.
pub fn trigonometric_distance(from: GeoPoint, to: GeoPoint) -> f64 {
    // sin² + cos² can round below 1, which acos turns into a few centimetres.
    if from == to {
        return 0.0;
    }

    let (lat1, lng1) = from.radians();
    let (lat2, lng2) = to.radians();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lng2 - lng1).cos();
    // Rounding can push near-antipodal points just outside acos' domain.
    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}
