use glam::Vec2;

use crate::world::{Light, Light3, TextureId, TileMap};

/// Map position in tile units; `.1` is the height normalised between floor
/// (0) and ceiling (1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2, pub f32);

/// Per-tic displacement in tile units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity(pub Vec2);

impl Velocity {
    #[inline]
    pub fn zero(&mut self) {
        self.0 = Vec2::ZERO;
    }
}

/// Heading in radians, 0 = +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle(pub f32);

/// Billboard drawn at the entity's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub tex: TextureId,
    /// Size relative to the wall height.
    pub scale: f32,
}

/// A light that follows its entity around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightEmitter {
    pub colour: Light3,
    pub range: u32,
    pub falloff: f32,
}

impl LightEmitter {
    /// Solver input for an emitter standing at `pos`.
    pub fn at(&self, pos: Vec2) -> Light {
        let tile = TileMap::tile_at(pos);
        Light::new(tile.x, tile.y, self.colour, self.range, self.falloff)
    }
}

impl From<&Light> for LightEmitter {
    fn from(l: &Light) -> Self {
        Self {
            colour: l.colour,
            range: l.range,
            falloff: l.falloff,
        }
    }
}

/// What drives an entity each tic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behaviour {
    /// Steered by [`InputCmd`].
    Player,
    /// Walks straight ahead and turns right when blocked.
    Wanderer { step: f32 },
}

/// One tic of player intent, sampled from the keyboard and mouse.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f32, // –1 … +1
    pub strafe: f32,  // –1 … +1  (left / right)
    pub turn: f32,    // –1 … +1  (left / right)
    /// Horizontal mouse travel in pixels since the last sample.
    pub mouse_dx: f32,
}
