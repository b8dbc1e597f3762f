mod camera;
pub mod demo;
mod light;
mod map;
mod raycast;
mod texture;

pub use camera::Camera;

pub use light::{Light, LightingSolver};

pub use map::{EMPTY, Light3, MapError, TileId, TileMap};

pub use raycast::{Axis, RayHit};

pub use texture::{Rgba, Texture, TextureBank, TextureError, TextureId};
