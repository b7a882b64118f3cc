mod point;
mod ray;
mod vec;

pub use point::*;
pub use ray::*;
pub use vec::*;

/// Tolerance used when matching a hit point against a cube face.
pub const FACE_TOLERANCE: f64 = 1e-3;

/// Offset applied along the surface normal to shadow ray origins.
pub const SHADOW_EPSILON: f64 = 1e-4;

pub fn is_almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < FACE_TOLERANCE
}
