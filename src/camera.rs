use std::f64::consts::PI;

use log::debug;

use crate::error::{Result, TracerError};
use crate::math::{Point3, Ray, Vec3};

/// Projection plane positioned at the look-at target, spanning the horizontal
/// field of view as seen from the camera.
#[derive(Copy, Clone, Debug)]
pub struct ViewPlane {
    pub camera: Point3,
    pub origin: Point3,
    pub right: Vec3,
    pub up: Vec3,
    pub width: f64,
    pub height: f64,
}

impl ViewPlane {
    pub fn new(
        camera: Point3,
        look_at: Point3,
        up_hint: Vec3,
        horizontal_fov: f64,
        aspect_ratio: f64,
    ) -> Result<ViewPlane> {
        if !(horizontal_fov > 0.0 && horizontal_fov < PI) {
            return Err(TracerError::InvalidConfiguration(format!(
                "horizontal field of view must be in (0, pi) radians, got {}",
                horizontal_fov
            )));
        }
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(TracerError::InvalidConfiguration(format!(
                "aspect ratio must be positive, got {}",
                aspect_ratio
            )));
        }

        let forward = look_at - camera;
        if forward.norm_squared() == 0.0 {
            return Err(TracerError::DegenerateCamera(format!(
                "camera at {:?} coincides with its look-at target",
                camera
            )));
        }

        let projected_up = up_hint - up_hint.project_onto(forward)?;
        // parallel up hints leave only rounding noise after the projection
        if projected_up.norm() <= 1e-12 * up_hint.norm() {
            return Err(TracerError::DegenerateCamera(format!(
                "up hint {:?} is parallel to the view direction {:?}",
                up_hint, forward
            )));
        }
        let up = projected_up
            .normalized()
            .map_err(|_| TracerError::DegenerateCamera(format!("zero up hint {:?}", up_hint)))?;
        let right = forward.cross(up).normalized()?;

        let width = 2.0 * (horizontal_fov / 2.0).tan() * forward.norm();
        let height = width / aspect_ratio;
        debug!(
            "view plane at {:?}: right {:?}, up {:?}, {}x{}",
            look_at, right, up, width, height
        );

        Ok(ViewPlane {
            camera,
            origin: look_at,
            right,
            up,
            width,
            height,
        })
    }

    /// `u` and `v` range from 0 to 1, in the style of uv coordinates.
    pub fn map_canvas_to_world(&self, u: f64, v: f64) -> Point3 {
        self.origin + self.right * ((u - 0.5) * self.width) + self.up * ((v - 0.5) * self.height)
    }

    /// Normalized ray from the camera through the canvas point `(u, v)`.
    pub fn get_ray(&self, u: f64, v: f64) -> Result<Ray> {
        let direction = (self.map_canvas_to_world(u, v) - self.camera).normalized()?;
        Ok(Ray::new(self.camera, direction))
    }
}
