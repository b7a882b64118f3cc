use serde::{Deserialize, Serialize};

use crate::error::{Result, TracerError};
use crate::math::{Point3, Vec3};

/// Reference point the specular term measures the reflected ray against.
/// The eye vector is `EYE_REFERENCE - normal` regardless of the camera.
pub const EYE_REFERENCE: Vec3 = Vec3::new(0.0, 0.0, 1000.0);

pub const SPECULAR_EXPONENT: f64 = 1.5;

pub const MAX_INTENSITY: f64 = 255.0;

/// Output channel a light source drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightSource {
    pub position: Point3,
    pub ambient: f64,
    pub channel: Channel,
}

impl LightSource {
    pub fn new(position: Point3, ambient: f64, channel: Channel) -> Result<LightSource> {
        if !(0.0..=MAX_INTENSITY).contains(&ambient) {
            return Err(TracerError::InvalidConfiguration(format!(
                "ambient light must be within [0, 255], got {}",
                ambient
            )));
        }
        Ok(LightSource {
            position,
            ambient,
            channel,
        })
    }

    pub fn set_position(&mut self, position: Point3) {
        self.position = position;
    }

    pub fn diffuse(&self, normal: Vec3, light_vector: Vec3) -> Result<f64> {
        let cos = normal.normalized()? * light_vector.normalized()?;
        if cos <= 0.0 {
            return Ok(0.0);
        }
        Ok((MAX_INTENSITY - self.ambient) * cos)
    }

    pub fn specular(&self, normal: Vec3, light_vector: Vec3, diffuse: f64) -> Result<f64> {
        let projection_length = (light_vector * normal) / normal.norm();
        let w = normal.normalized()? * projection_length;
        let reflected = w * 2.0 - light_vector;
        let eye = EYE_REFERENCE - normal;
        let cos = reflected.normalized()? * eye.normalized()?;
        if cos <= 0.0 {
            return Ok(0.0);
        }
        Ok((MAX_INTENSITY - self.ambient - diffuse) * cos.powf(SPECULAR_EXPONENT))
    }

    /// Ambient + diffuse + specular, not clamped.
    pub fn intensity(&self, normal: Vec3, light_vector: Vec3) -> Result<f64> {
        let diffuse = self.diffuse(normal, light_vector)?;
        let specular = self.specular(normal, light_vector, diffuse)?;
        Ok(self.ambient + diffuse + specular)
    }
}
