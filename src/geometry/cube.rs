use ordered_float::OrderedFloat;

use crate::error::{Result, TracerError};
use crate::math::{is_almost_equal, Point3, Ray, Vec3};

/// Axis aligned cube. `level` counts down towards the leaves of the sponge,
/// so level 0 cubes are never subdivided.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingCube {
    pub min_corner: Point3,
    pub edge_length: f64,
    pub level: u32,
}

impl BoundingCube {
    pub const fn new(min_corner: Point3, edge_length: f64, level: u32) -> Self {
        BoundingCube {
            min_corner,
            edge_length,
            level,
        }
    }

    pub fn max_corner(&self) -> Point3 {
        self.min_corner + Vec3::new(self.edge_length, self.edge_length, self.edge_length)
    }

    /// Slab test. Returns the ray parameter of the first forward intersection:
    /// the entry point, or the exit point when the ray starts inside the cube.
    /// `r.direction` is expected to be normalized. A ray parallel to a slab
    /// misses unless its origin lies within the slab, faces included.
    pub fn intersect(&self, r: Ray) -> Option<f64> {
        let lower = self.min_corner.as_array();
        let upper = self.max_corner().as_array();
        let origin = r.origin.as_array();
        let direction = r.direction.as_array();

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        for axis in 0..3 {
            // matches both signed zeros
            if direction[axis] == 0.0 {
                if origin[axis] < lower[axis] || origin[axis] > upper[axis] {
                    return None;
                }
                continue;
            }
            let mut t_near = (lower[axis] - origin[axis]) / direction[axis];
            let mut t_far = (upper[axis] - origin[axis]) / direction[axis];
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }
            t_min = t_min.max(t_near);
            t_max = t_max.min(t_far);
        }

        if t_max < 0.0 || t_min > t_max {
            return None;
        }
        if t_min >= 0.0 {
            Some(t_min)
        } else {
            Some(t_max)
        }
    }

    /// Outward normal of the face containing `point`: the face plane nearest to
    /// it, within `FACE_TOLERANCE`. On exact ties, such as edges and corners, z
    /// faces take precedence over y faces, which take precedence over x faces.
    pub fn face_normal(&self, point: Point3) -> Result<Vec3> {
        let lower = self.min_corner;
        let upper = self.max_corner();
        let faces = [
            (point.z, upper.z, Vec3::Z),
            (point.z, lower.z, -Vec3::Z),
            (point.y, upper.y, Vec3::Y),
            (point.y, lower.y, -Vec3::Y),
            (point.x, upper.x, Vec3::X),
            (point.x, lower.x, -Vec3::X),
        ];
        faces
            .iter()
            .filter(|(coordinate, plane, _)| is_almost_equal(*coordinate, *plane))
            .min_by_key(|(coordinate, plane, _)| OrderedFloat((coordinate - plane).abs()))
            .map(|(_, _, normal)| *normal)
            .ok_or(TracerError::NoMatchingFace {
                point,
                min_corner: lower,
                max_corner: upper,
            })
    }
}
