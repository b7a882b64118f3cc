use crate::error::{Result, TracerError};
use crate::geometry::{Primitive, RayHit};
use crate::math::{Point3, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    pub origin: Point3,
}

impl Sphere {
    pub fn new(radius: f64, origin: Point3) -> Result<Sphere> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(TracerError::InvalidConfiguration(format!(
                "sphere radius must be positive, got {}",
                radius
            )));
        }
        Ok(Sphere { radius, origin })
    }
}

impl Primitive for Sphere {
    fn intersect(&self, r: Ray) -> Result<Option<RayHit>> {
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction * r.direction;
        let b = oc * r.direction;
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return Ok(None);
        }
        let discriminant_sqrt = discriminant.sqrt();
        let near = (-b - discriminant_sqrt) / a;
        let far = (-b + discriminant_sqrt) / a;
        // the far root is the exit point for rays starting inside
        let time = if near > 0.0 {
            near
        } else if far > 0.0 {
            far
        } else {
            return Ok(None);
        };
        let point = r.point_at_parameter(time);
        let normal = ((point - self.origin) / self.radius).normalized()?;
        Ok(Some(RayHit::new(time, point, normal)))
    }
}
