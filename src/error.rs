use thiserror::Error;

use crate::math::Point3;

#[derive(Error, Debug)]
pub enum TracerError {
    #[error("attempted to normalize a zero-length vector")]
    ZeroLengthVector,

    /// The camera basis could not be built, i.e. the camera sits on its target
    /// or the up hint is parallel to the view direction.
    #[error("degenerate camera setup: {0}")]
    DegenerateCamera(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A hit point that lies on none of the faces of the cube it was computed
    /// against. Indicates a geometry bug rather than a recoverable condition.
    #[error("hit point {point:?} lies on no face of cube {min_corner:?}..{max_corner:?}")]
    NoMatchingFace {
        point: Point3,
        min_corner: Point3,
        max_corner: Point3,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene description: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TracerError>;
