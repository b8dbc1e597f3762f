//! Built-in 20×10 test level.

use glam::Vec2;

use super::light::Light;
use super::map::{EMPTY, MapError, TileId, TileMap};

/// Texture names in map-id order: tile id `n` samples `WALL_TEXTURES[n]`.
pub const WALL_TEXTURES: [&str; 8] = [
    "wood",
    "greystone",
    "mossy",
    "bluestone",
    "purplestone",
    "colorstone",
    "redbrick",
    "eagle",
];

/// Sprite used by the wandering barrels; inserted after the wall set.
pub const BARREL_TEXTURE: &str = "barrel";

pub const AMBIENT: [u8; 3] = [0x10, 0x10, 0x10];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThingKind {
    PlayerStart,
    Barrel,
    /// Barrel carrying the level light with this index.
    LitBarrel(usize),
}

/// A spawn point placed by the level.
#[derive(Clone, Copy, Debug)]
pub struct Thing {
    pub pos: Vec2,
    pub z: f32,
    pub yaw: f32,
    pub kind: ThingKind,
}

pub struct DemoLevel {
    pub map: TileMap,
    /// Static lights; an entry referenced by a `LitBarrel` follows that barrel.
    pub lights: Vec<Light>,
    pub things: Vec<Thing>,
}

const W: usize = 20;
const H: usize = 10;
const E: TileId = EMPTY;

#[rustfmt::skip]
const FLOOR: [TileId; W * H] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 4, 4, 4, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1, 0, 0, 4, 4, 4, 0,
    0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 4, 4, 4, 0,
    0, 0, 0, 3, 1, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 4, 0, 0,
    0, 0, 0, 3, 1, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

#[rustfmt::skip]
const WALLS: [TileId; W * H] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 4, 4, 4, 4, 4,
    1, E, E, 1, E, E, E, E, E, E, E, E, 3, 1, 1, 4, E, E, E, 4,
    1, E, E, 1, E, E, E, E, E, E, E, E, E, E, 1, 4, E, E, E, 4,
    1, E, E, 3, E, E, 0, E, E, 0, E, E, 3, E, 1, 4, E, E, E, 4,
    1, E, E, E, E, E, E, E, E, E, E, E, 1, E, 1, 4, 4, E, 4, 4,
    1, E, E, E, E, E, E, E, E, E, E, E, 1, E, 1, 6, 6, E, 6, 6,
    1, E, E, 3, E, E, 0, E, E, 0, E, E, 1, E, 1, 6, E, E, E, 6,
    1, E, E, 1, E, E, E, E, E, E, E, E, 1, E, E, E, E, E, E, 6,
    1, E, E, 1, E, E, E, E, E, E, E, E, 1, 1, 1, 6, E, E, E, 6,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 6, 6, 7, 6, 6,
];

#[rustfmt::skip]
const CEILING: [TileId; W * H] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 4, 4, 4, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1, 0, 0, 4, 4, 4, 0,
    0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 4, 4, 4, 0,
    0, 0, 0, 3, 1, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 4, 0, 0,
    0, 0, 0, 3, 1, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 6, 0, 0,
    0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 6, 6, 6, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 6, 6, 6, 6, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 6, 6, 6, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

impl DemoLevel {
    pub fn new() -> Result<Self, MapError> {
        let map = TileMap::new(W, H, &FLOOR, &WALLS, &CEILING)?;

        let lights = vec![
            Light::new(1, 1, [0xFF, 0x00, 0x00], 10, 5.0),
            Light::new(10, 7, [0x00, 0x60, 0xFF], 10, 5.0),
            Light::new(17, 7, [0x40, 0x40, 0x40], 10, 5.0),
        ];

        let thing = |x: f32, y: f32, kind| Thing {
            pos: Vec2::new(x, y),
            z: 0.5,
            yaw: 0.0,
            kind,
        };
        let things = vec![
            thing(2.5, 2.5, ThingKind::PlayerStart),
            thing(10.5, 7.5, ThingKind::LitBarrel(1)),
            thing(2.5, 2.5, ThingKind::Barrel),
            thing(18.5, 2.5, ThingKind::Barrel),
            thing(7.5, 5.5, ThingKind::Barrel),
            thing(17.5, 5.5, ThingKind::Barrel),
            thing(2.5, 3.5, ThingKind::Barrel),
            thing(13.5, 3.5, ThingKind::Barrel),
        ];

        Ok(Self { map, lights, things })
    }

    pub fn player_start(&self) -> Option<&Thing> {
        self.things
            .iter()
            .find(|t| t.kind == ThingKind::PlayerStart)
    }
}
