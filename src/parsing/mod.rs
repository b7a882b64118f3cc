mod lights;
mod primitives;

use std::{fs::File, io::Read, path::Path};

use log::{debug, warn};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use lights::*;
pub use primitives::*;

use crate::{
    error::Result,
    geometry::PrimitiveEnum,
    light::LightSource,
    math::{Point3, Vec3},
    renderer::Renderer,
};

/// Scene description as it appears on disk. Missing fields fall back to the
/// reference scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneData {
    pub camera: [f64; 3],
    pub look_at: [f64; 3],
    pub up: [f64; 3],
    /// Degrees.
    pub horizontal_fov: f64,
    pub resolution: [usize; 2],
    pub primitive: PrimitiveData,
    pub lights: Vec<LightData>,
}

impl Default for SceneData {
    fn default() -> Self {
        SceneData {
            camera: [1400.0, -1200.0, 1600.0],
            look_at: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            horizontal_fov: 90.0,
            resolution: [1400, 1000],
            primitive: PrimitiveData::default(),
            lights: default_lights(),
        }
    }
}

impl SceneData {
    /// Overrides the recursion depth of a sponge. Returns false, leaving the
    /// scene untouched, when the primitive has no depth.
    pub fn set_depth(&mut self, new_depth: u32) -> bool {
        if let PrimitiveData::MengerSponge { depth, .. } = &mut self.primitive {
            *depth = new_depth;
            return true;
        }
        warn!("ignoring depth override for {:?}", self.primitive);
        false
    }
}

pub struct Scene {
    pub camera: Point3,
    pub look_at: Point3,
    pub up: Vec3,
    /// Radians.
    pub horizontal_fov: f64,
    pub width: usize,
    pub height: usize,
    pub primitive: PrimitiveEnum,
    pub lights: Vec<LightSource>,
}

impl TryFrom<SceneData> for Scene {
    type Error = crate::error::TracerError;

    fn try_from(mut data: SceneData) -> Result<Self> {
        let primitive = data.primitive.transform()?;
        let lights = data
            .lights
            .drain(..)
            .map(|e| e.transform())
            .collect::<Result<Vec<_>>>()?;
        debug!("scene with {:?} and {} light(s)", primitive, lights.len());

        Ok(Scene {
            camera: Point3::from(data.camera),
            look_at: Point3::from(data.look_at),
            up: Vec3::from(data.up),
            horizontal_fov: data.horizontal_fov.to_radians(),
            width: data.resolution[0],
            height: data.resolution[1],
            primitive,
            lights,
        })
    }
}

impl Scene {
    pub fn into_renderer(self) -> Result<Renderer<PrimitiveEnum>> {
        Renderer::new(
            self.camera,
            self.look_at,
            self.up,
            self.horizontal_fov,
            self.width,
            self.height,
            self.primitive,
            self.lights,
        )
    }
}

pub fn load_json<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut input = String::new();
    File::open(path)?.read_to_string(&mut input)?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}
