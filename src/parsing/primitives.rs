use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    geometry::{MengerSponge, PrimitiveEnum, Sphere},
    math::Point3,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    MengerSponge {
        min_corner: [f64; 3],
        edge_length: f64,
        depth: u32,
    },
    Sphere {
        origin: [f64; 3],
        radius: f64,
    },
}

impl Default for PrimitiveData {
    fn default() -> Self {
        PrimitiveData::MengerSponge {
            min_corner: [-500.0, -500.0, -500.0],
            edge_length: 1000.0,
            depth: 3,
        }
    }
}

impl PrimitiveData {
    pub fn transform(self) -> Result<PrimitiveEnum> {
        match self {
            Self::MengerSponge {
                min_corner,
                edge_length,
                depth,
            } => Ok(MengerSponge::new(Point3::from(min_corner), edge_length, depth)?.into()),
            Self::Sphere { origin, radius } => {
                Ok(Sphere::new(radius, Point3::from(origin))?.into())
            }
        }
    }
}
