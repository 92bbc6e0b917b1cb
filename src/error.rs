use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GeodesyError {
    #[error("unknown calculation method '{0}' (expected one of: g, w, b, t)")]
    UnknownMethod(String),

    #[error("invalid ellipsoid '{name}': {reason}")]
    InvalidEllipsoid { name: String, reason: String },
}
