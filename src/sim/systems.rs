use glam::Vec2;
use hecs::{Entity, World};

use super::{Angle, Behaviour, InputCmd, LightEmitter, Position, Sprite, Velocity};
use crate::{
    renderer::SpriteInstance,
    world::{Camera, Light, TileMap},
};

/* ── Tuning (tile units and radians per tic) ─────────────────────── */
pub const PLAYER_ACCEL: f32 = 0.01;
pub const PLAYER_DRAG: f32 = 1.2;
pub const TURN_SPEED: f32 = 0.04;
pub const MOUSE_SENSITIVITY: f32 = 0.01; // rad / pixel
pub const WANDER_STEP: f32 = 0.025;
const WANDER_PROBE: f32 = 0.5;

/* ── Player steering ─────────────────────────────────────────────── */
/// Turn the player and accelerate it along its heading.
pub fn player_input(world: &mut World, player: Entity, cmd: InputCmd) {
    let Ok((ang, vel)) = world.query_one_mut::<(&mut Angle, &mut Velocity)>(player) else {
        return;
    };

    ang.0 += cmd.mouse_dx * MOUSE_SENSITIVITY + cmd.turn * TURN_SPEED;
    ang.0 = ang.0.rem_euclid(std::f32::consts::TAU);

    let (s, c) = ang.0.sin_cos();
    let fwd = Vec2::new(c, s);
    let right = fwd.perp();
    vel.0 += (fwd * cmd.forward + right * cmd.strafe) * PLAYER_ACCEL;
}

/* ── Movement with tile collision ────────────────────────────────── */
/// Apply velocity to every moving entity.
///
/// A move whose destination tile is solid is dropped and the velocity
/// zeroed; otherwise drag is applied before moving.
pub fn movement(world: &mut World, map: &TileMap) {
    for (_, (pos, vel)) in world.query_mut::<(&mut Position, &mut Velocity)>() {
        let dest = TileMap::tile_at(pos.0 + vel.0);
        if map.is_walkable(dest.x, dest.y) {
            vel.0 /= PLAYER_DRAG;
            pos.0 += vel.0;
        } else {
            vel.zero();
        }
    }
}

/* ── Wandering barrels ───────────────────────────────────────────── */
pub fn wander(world: &mut World, map: &TileMap) {
    for (_, (pos, ang, behaviour)) in world.query_mut::<(&mut Position, &mut Angle, &Behaviour)>() {
        let Behaviour::Wanderer { step } = *behaviour else {
            continue;
        };

        let ahead = TileMap::tile_at(pos.0 + heading(ang.0) * WANDER_PROBE);
        if !map.is_walkable(ahead.x, ahead.y) {
            ang.0 = (ang.0 + std::f32::consts::FRAC_PI_2).rem_euclid(std::f32::consts::TAU);
        }
        pos.0 += heading(ang.0) * step;
    }
}

#[inline]
fn heading(angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c, s)
}

/* ── Renderer / solver inputs ────────────────────────────────────── */
pub fn collect_sprites(world: &World) -> Vec<SpriteInstance> {
    world
        .query::<(&Position, &Sprite)>()
        .iter()
        .map(|(_, (pos, spr))| SpriteInstance {
            pos: pos.0,
            z: pos.1,
            scale: spr.scale,
            tex: spr.tex,
        })
        .collect()
}

pub fn collect_lights(world: &World) -> Vec<Light> {
    let mut lights: Vec<(Entity, Light)> = world
        .query::<(&Position, &LightEmitter)>()
        .iter()
        .map(|(e, (pos, emitter))| (e, emitter.at(pos.0)))
        .collect();
    // stable solve order regardless of archetype layout
    lights.sort_by_key(|(e, _)| e.id());
    lights.into_iter().map(|(_, l)| l).collect()
}

/// Viewer pose of `entity`, if it has a position and heading.
pub fn camera_for(world: &World, entity: Entity) -> Option<Camera> {
    let mut q = world.query_one::<(&Position, &Angle)>(entity).ok()?;
    let (pos, ang) = q.get()?;
    Some(Camera::new(pos.0, pos.1, ang.0))
}

/*──────────────────────────────── Tests ───────────────────────────────*/
