use crate::error::Result;
use crate::math::{Point3, Ray, Vec3};

mod cube;
mod sphere;
mod sponge;

pub use cube::BoundingCube;
pub use sphere::Sphere;
pub use sponge::MengerSponge;

/// Nearest surface hit along a ray. `point = origin + time * direction`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub time: f64,
    pub point: Point3,
    pub normal: Vec3,
}

impl RayHit {
    pub fn new(time: f64, point: Point3, normal: Vec3) -> Self {
        RayHit {
            time,
            point,
            normal,
        }
    }
}

pub trait Primitive {
    /// `Ok(None)` is a plain miss. Errors are reserved for geometry that could
    /// not be resolved, such as a hit point lying on no face.
    fn intersect(&self, r: Ray) -> Result<Option<RayHit>>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveEnum {
    MengerSponge(MengerSponge),
    Sphere(Sphere),
}

impl Primitive for PrimitiveEnum {
    fn intersect(&self, r: Ray) -> Result<Option<RayHit>> {
        match self {
            PrimitiveEnum::MengerSponge(inner) => inner.intersect(r),
            PrimitiveEnum::Sphere(inner) => inner.intersect(r),
        }
    }
}

impl From<MengerSponge> for PrimitiveEnum {
    fn from(sponge: MengerSponge) -> Self {
        PrimitiveEnum::MengerSponge(sponge)
    }
}

impl From<Sphere> for PrimitiveEnum {
    fn from(sphere: Sphere) -> Self {
        PrimitiveEnum::Sphere(sphere)
    }
}
