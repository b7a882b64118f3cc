pub mod camera;
pub mod error;
pub mod film;
pub mod geometry;
pub mod light;
pub mod math;
pub mod parsing;
pub mod renderer;

pub use camera::ViewPlane;
pub use error::{Result, TracerError};
pub use film::{Film, Rgb};
pub use geometry::{BoundingCube, MengerSponge, Primitive, PrimitiveEnum, RayHit, Sphere};
pub use light::{Channel, LightSource};
pub use renderer::{PixelShade, RenderStats, Renderer};
