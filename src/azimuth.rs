use crate::angle::radians_to_degrees;
use crate::point::GeoPoint;

/// Initial bearing in degrees `[0, 360)`, clockwise from north, from `from`
/// toward `to` on a sphere. Returns `0` when the bearing is undefined.
pub fn azimuth(from: GeoPoint, to: GeoPoint) -> f64 {
    let (lat1, lng1) = from.radians();
    let (lat2, lng2) = to.radians();

    let dy = lat2.cos() * (lng2 - lng1).sin();
    let dx = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (lng2 - lng1).cos();
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    let mut deg = radians_to_degrees(dy.atan2(dx));
    if deg < 0.0 {
        deg += 360.0;
    }
    // A tiny negative angle rounds up to exactly 360 after the shift.
    if deg >= 360.0 {
        deg -= 360.0;
    }
    deg
}
