//! Method selection and result packaging.

use crate::azimuth::azimuth;
use crate::distance::{hubeny_distance, trigonometric_distance};
use crate::ellipsoid::{EllipsoidParameters, BESSEL, GRS80, WGS84};
use crate::error::GeodesyError;
use crate::point::GeoPoint;
use std::fmt;
use std::str::FromStr;
use tracing::{trace, warn};

/// Label reported when the selector names no known method.
pub const NO_SELECTION: &str = "No selected";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalculationMethod {
    Trigonometric,
    Wgs84,
    Bessel,
    Grs80,
}

impl CalculationMethod {
    pub const ALL: [CalculationMethod; 4] = [
        CalculationMethod::Grs80,
        CalculationMethod::Wgs84,
        CalculationMethod::Bessel,
        CalculationMethod::Trigonometric,
    ];

    /// The single-character selector used on the command line.
    pub fn token(self) -> &'static str {
        match self {
            CalculationMethod::Trigonometric => "t",
            CalculationMethod::Wgs84 => "w",
            CalculationMethod::Bessel => "b",
            CalculationMethod::Grs80 => "g",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CalculationMethod::Trigonometric => "Spherical trigonometry",
            CalculationMethod::Wgs84 => "Hubeny (WGS84)",
            CalculationMethod::Bessel => "Hubeny (Bessel 1841)",
            CalculationMethod::Grs80 => "Hubeny (GRS80)",
        }
    }

    /// The ellipsoid used by the Hubeny methods, `None` for the sphere.
    pub fn ellipsoid(self) -> Option<&'static EllipsoidParameters> {
        match self {
            CalculationMethod::Trigonometric => None,
            CalculationMethod::Wgs84 => Some(&WGS84),
            CalculationMethod::Bessel => Some(&BESSEL),
            CalculationMethod::Grs80 => Some(&GRS80),
        }
    }

    pub fn unit(self) -> DistanceUnit {
        match self {
            CalculationMethod::Trigonometric => DistanceUnit::Kilometres,
            _ => DistanceUnit::Metres,
        }
    }

    /// Distance between the points, in this method's [`unit`](Self::unit).
    pub fn distance(self, from: GeoPoint, to: GeoPoint) -> f64 {
        match self.ellipsoid() {
            Some(params) => hubeny_distance(from, to, params),
            None => trigonometric_distance(from, to),
        }
    }
}

impl FromStr for CalculationMethod {
    type Err = GeodesyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t" => Ok(CalculationMethod::Trigonometric),
            "w" => Ok(CalculationMethod::Wgs84),
            "b" => Ok(CalculationMethod::Bessel),
            "g" => Ok(CalculationMethod::Grs80),
            _ => Err(GeodesyError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceUnit {
    Metres,
    Kilometres,
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit_str = match self {
            DistanceUnit::Metres => "m",
            DistanceUnit::Kilometres => "km",
        };
        f.write_str(unit_str)
    }
}

/// Distance and azimuth between two points for one method.
///
/// `method` and `unit` are `None` for the permissive fallback produced by an
/// unrecognized selector.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculation {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub method: Option<CalculationMethod>,
    pub label: &'static str,
    pub distance: f64,
    pub unit: Option<DistanceUnit>,
    pub azimuth: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Method: {}", self.label)?;
        writeln!(f, "from {} to {}", self.from, self.to)?;
        match self.unit {
            Some(unit) => write!(
                f,
                "Distance: {:.6} {}, Azimuth: {:.6}",
                self.distance, unit, self.azimuth
            ),
            None => write!(f, "Distance: {:.6}, Azimuth: {:.6}", self.distance, self.azimuth),
        }
    }
}

/// Distance and label for a selector token. Unknown tokens give
/// `(0.0, "No selected")` instead of an error.
pub fn calc_distance_and_name(from: GeoPoint, to: GeoPoint, selector: &str) -> (f64, &'static str) {
    distance_and_name(from, to, selector.parse::<CalculationMethod>().ok())
}

fn distance_and_name(
    from: GeoPoint,
    to: GeoPoint,
    method: Option<CalculationMethod>,
) -> (f64, &'static str) {
    match method {
        Some(m) => (m.distance(from, to), m.label()),
        None => (0.0, NO_SELECTION),
    }
}

/// Compute the full result for a selector token.
///
/// With `strict` set an unknown selector is an error, otherwise it yields a
/// zero-distance result labelled [`NO_SELECTION`].
pub fn calculate(
    from: GeoPoint,
    to: GeoPoint,
    selector: &str,
    strict: bool,
) -> Result<Calculation, GeodesyError> {
    let method = match selector.parse::<CalculationMethod>() {
        Ok(method) => Some(method),
        Err(e) if strict => return Err(e),
        Err(e) => {
            warn!("{e}; falling back to '{NO_SELECTION}'");
            None
        }
    };

    let (distance, label) = distance_and_name(from, to, method);
    let azimuth = azimuth(from, to);
    trace!("{label}: distance = {distance}, azimuth = {azimuth}°");

    Ok(Calculation {
        from,
        to,
        method,
        label,
        distance,
        unit: method.map(CalculationMethod::unit),
        azimuth,
    })
}
