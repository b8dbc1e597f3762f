//! Entity simulation on a fixed tic clock.

mod components;
mod lighting;
mod spawn;
mod systems;
mod tic;

pub use components::{Angle, Behaviour, InputCmd, LightEmitter, Position, Sprite, Velocity};
pub use lighting::LightingCache;
pub use spawn::{BARREL_SCALE, spawn_barrel, spawn_level, spawn_player};
pub use systems::{
    MOUSE_SENSITIVITY, PLAYER_ACCEL, PLAYER_DRAG, TURN_SPEED, WANDER_STEP, camera_for,
    collect_lights, collect_sprites, movement, player_input, wander,
};
pub use tic::{SIM_FPS, TicRunner};
