//! Distance and azimuth between two geographic points.
//!
//! Four calculation methods are available: the spherical law of cosines on a
//! sphere of radius 6378.137 km, and the Hubeny approximation on the Bessel
//! 1841, GRS80 and WGS84 reference ellipsoids. The azimuth is always the
//! spherical initial bearing from the origin toward the target.

pub mod angle;
pub mod azimuth;
pub mod distance;
pub mod ellipsoid;
pub mod error;
pub mod method;
pub mod point;

pub use azimuth::azimuth;
pub use distance::{hubeny_distance, trigonometric_distance, EARTH_RADIUS_KM};
pub use ellipsoid::EllipsoidParameters;
pub use error::GeodesyError;
pub use method::{calc_distance_and_name, calculate, Calculation, CalculationMethod, DistanceUnit};
pub use point::GeoPoint;
