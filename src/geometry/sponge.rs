use std::collections::VecDeque;

use ordered_float::OrderedFloat;

use super::{BoundingCube, Primitive, RayHit};
use crate::error::{Result, TracerError};
use crate::math::{Point3, Ray, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct MengerSponge {
    /// The level of the root cube is the recursion depth.
    pub root: BoundingCube,
}

impl MengerSponge {
    pub fn new(min_corner: Point3, edge_length: f64, depth: u32) -> Result<MengerSponge> {
        if !(edge_length > 0.0 && edge_length.is_finite()) {
            return Err(TracerError::InvalidConfiguration(format!(
                "sponge edge length must be positive, got {}",
                edge_length
            )));
        }
        if !min_corner.is_finite() {
            return Err(TracerError::InvalidConfiguration(format!(
                "sponge corner must be finite, got {:?}",
                min_corner
            )));
        }
        Ok(MengerSponge {
            root: BoundingCube::new(min_corner, edge_length, depth),
        })
    }

    /// The 20 sub-cubes left after removing the center cube and the six face
    /// centers, i.e. every grid cell where at least two indices are 1.
    pub fn subdivide(cube: &BoundingCube) -> impl Iterator<Item = BoundingCube> {
        let step = cube.edge_length / 3.0;
        let corner = cube.min_corner;
        let level = cube.level.saturating_sub(1);
        (0..3u32)
            .flat_map(|y| (0..3u32).flat_map(move |z| (0..3u32).map(move |x| (x, y, z))))
            .filter(|&(x, y, z)| [x, y, z].iter().filter(|&&i| i == 1).count() < 2)
            .map(move |(x, y, z)| {
                let offset = Vec3::new(x as f64 * step, y as f64 * step, z as f64 * step);
                BoundingCube::new(corner + offset, step, level)
            })
    }
}

impl Primitive for MengerSponge {
    fn intersect(&self, r: Ray) -> Result<Option<RayHit>> {
        let mut queue: VecDeque<BoundingCube> = VecDeque::new();
        queue.push_back(self.root);
        let mut leaves: Vec<(BoundingCube, f64)> = Vec::new();

        while let Some(cube) = queue.pop_front() {
            let time = match cube.intersect(r) {
                Some(time) => time,
                None => continue,
            };
            if cube.level == 0 {
                leaves.push((cube, time));
            } else {
                queue.extend(MengerSponge::subdivide(&cube));
            }
        }

        // min_by_key keeps the first of several equal minima, i.e. queue order
        let nearest = leaves
            .into_iter()
            .filter(|(_, time)| *time >= 0.0)
            .min_by_key(|(_, time)| OrderedFloat(*time));

        match nearest {
            Some((cube, time)) => {
                let point = r.point_at_parameter(time);
                let normal = cube.face_normal(point)?;
                Ok(Some(RayHit::new(time, point, normal)))
            }
            None => Ok(None),
        }
    }
}
