use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    light::{Channel, LightSource},
    math::Point3,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightData {
    pub position: [f64; 3],
    pub ambient: f64,
    pub channel: Channel,
}

impl LightData {
    pub fn transform(self) -> Result<LightSource> {
        LightSource::new(Point3::from(self.position), self.ambient, self.channel)
    }
}

/// The dual light setup: a blue light to the right and a red one to the left.
pub fn default_lights() -> Vec<LightData> {
    vec![
        LightData {
            position: [1000.0, -700.0, 1000.0],
            ambient: 50.0,
            channel: Channel::Blue,
        },
        LightData {
            position: [-1000.0, -1000.0, 1000.0],
            ambient: 50.0,
            channel: Channel::Red,
        },
    ]
}
