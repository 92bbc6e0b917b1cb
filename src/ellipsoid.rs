//! Reference ellipsoid parameters used by the Hubeny distance formula.

use crate::error::GeodesyError;

/// A reference ellipsoid.
///
/// * `a` - semi-major axis in metres.
/// * `b` - semi-minor axis in metres.
/// * `e2` - squared first eccentricity.
/// * `m` - meridian curvature constant `a * (1 - e2)` in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipsoidParameters {
    pub name: &'static str,
    pub a: f64,
    pub b: f64,
    pub e2: f64,
    pub m: f64,
}

/// Bessel 1841, the ellipsoid of the old Tokyo datum.
pub const BESSEL: EllipsoidParameters = EllipsoidParameters {
    name: "Bessel 1841",
    a: 6_377_397.155,
    b: 6_356_079.0,
    e2: 0.006_674_360_610_282_97,
    m: 6_334_832.106_632_54,
};

pub const GRS80: EllipsoidParameters = EllipsoidParameters {
    name: "GRS80",
    a: 6_378_137.0,
    b: 6_356_752.314_140,
    e2: 0.006_694_380_023_011_88,
    m: 6_335_439.327_083_17,
};

/// WGS84, as used by GPS.
pub const WGS84: EllipsoidParameters = EllipsoidParameters {
    name: "WGS84",
    a: 6_378_137.0,
    b: 6_356_752.314_245,
    e2: 0.006_694_379_990_197_58,
    m: 6_335_439.327_292_46,
};

impl EllipsoidParameters {
    /// Build a custom ellipsoid, rejecting parameters outside
    /// `a > 0`, `0 <= e2 < 1`, `m > 0`.
    pub fn new(
        name: &'static str,
        a: f64,
        b: f64,
        e2: f64,
        m: f64,
    ) -> Result<Self, GeodesyError> {
        let params = Self { name, a, b, e2, m };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), GeodesyError> {
        let invalid = |reason: &str| GeodesyError::InvalidEllipsoid {
            name: self.name.to_string(),
            reason: reason.to_string(),
        };

        if !(self.a > 0.0) {
            return Err(invalid("semi-major axis must be positive"));
        }
        if !(0.0..1.0).contains(&self.e2) {
            return Err(invalid("squared eccentricity must be in [0, 1)"));
        }
        if !(self.m > 0.0) {
            return Err(invalid("meridian curvature constant must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn builtin_ellipsoids_are_valid() {
        for params in [BESSEL, GRS80, WGS84] {
            assert_eq!(params.validate(), Ok(()));
        }
    }

    #[test]
    fn meridian_constant_matches_axis_and_eccentricity() {
        for params in [BESSEL, GRS80, WGS84] {
            assert_relative_eq!(params.m, params.a * (1.0 - params.e2), max_relative = 1e-9);
        }
    }

    #[test]
    fn eccentricity_matches_axes() {
        for params in [BESSEL, GRS80, WGS84] {
            let e2 = (params.a * params.a - params.b * params.b) / (params.a * params.a);
            assert_relative_eq!(params.e2, e2, max_relative = 1e-6);
        }
    }

    #[test]
    fn grs80_close_to_wgs84() {
        assert_eq!(GRS80.a, WGS84.a);
        assert!((GRS80.e2 - WGS84.e2).abs() < 1e-9);
    }

    #[test]
    fn new_rejects_bad_parameters() {
        assert!(EllipsoidParameters::new("sphere", 6_371_000.0, 6_371_000.0, 0.0, 6_371_000.0).is_ok());

        let Err(GeodesyError::InvalidEllipsoid { name, reason }) =
            EllipsoidParameters::new("flat", 6_378_137.0, 0.0, 1.0, 1.0)
        else {
            panic!("expected an invalid ellipsoid error");
        };
        assert_eq!(name, "flat");
        assert!(reason.contains("eccentricity"));

        assert!(EllipsoidParameters::new("neg", -1.0, 1.0, 0.0, 1.0).is_err());
        assert!(EllipsoidParameters::new("zero m", 1.0, 1.0, 0.0, 0.0).is_err());
        assert!(EllipsoidParameters::new("nan", f64::NAN, 1.0, 0.0, 1.0).is_err());
    }
}
