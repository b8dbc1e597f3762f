use glam::Vec2;
use hecs::{Entity, World};

use super::{Angle, Behaviour, LightEmitter, Position, Sprite, Velocity, systems::WANDER_STEP};
use crate::world::{
    TextureId,
    demo::{DemoLevel, ThingKind},
};

/// Barrels are drawn at 40 % of the wall height.
pub const BARREL_SCALE: f32 = 0.4;

pub fn spawn_player(world: &mut World, pos: Vec2, z: f32, yaw: f32) -> Entity {
    world.spawn((
        Position(pos, z),
        Angle(yaw),
        Velocity::default(),
        Behaviour::Player,
    ))
}

pub fn spawn_barrel(world: &mut World, pos: Vec2, z: f32, yaw: f32, tex: TextureId) -> Entity {
    world.spawn((
        Position(pos, z),
        Angle(yaw),
        Sprite {
            tex,
            scale: BARREL_SCALE,
        },
        Behaviour::Wanderer { step: WANDER_STEP },
    ))
}

/// Populate `world` from a level. Lights carried by a barrel follow it;
/// the rest become fixed emitters at their tile centre.
///
/// Returns the player entity, if the level has a start.
pub fn spawn_level(world: &mut World, level: &DemoLevel, barrel: TextureId) -> Option<Entity> {
    let mut player = None;
    let mut carried = vec![false; level.lights.len()];

    for thing in &level.things {
        match thing.kind {
            ThingKind::PlayerStart => {
                player = Some(spawn_player(world, thing.pos, thing.z, thing.yaw));
            }
            ThingKind::Barrel => {
                spawn_barrel(world, thing.pos, thing.z, thing.yaw, barrel);
            }
            ThingKind::LitBarrel(i) => {
                let e = spawn_barrel(world, thing.pos, thing.z, thing.yaw, barrel);
                if let Some(light) = level.lights.get(i) {
                    carried[i] = world.insert_one(e, LightEmitter::from(light)).is_ok();
                } else {
                    log::warn!("thing references missing light {i}");
                }
            }
        }
    }

    for (light, _) in level.lights.iter().zip(&carried).filter(|(_, c)| !**c) {
        world.spawn((
            Position(light.pos.as_vec2() + Vec2::splat(0.5), 0.5),
            LightEmitter::from(light),
        ));
    }

    log::debug!(
        "spawned {} entities, player {:?}",
        world.len(),
        player.map(|e| e.id())
    );
    player
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{collect_lights, collect_sprites, movement, wander};
    use crate::world::TileMap;

    #[test]
    fn demo_level_spawns_every_thing() {
        let level = DemoLevel::new().unwrap();
        let mut world = World::new();
        let player = spawn_level(&mut world, &level, 8).unwrap();

        assert_eq!(*world.get::<&Behaviour>(player).unwrap(), Behaviour::Player);
        assert!(world.get::<&Sprite>(player).is_err());

        // seven barrels, no player sprite
        let sprites = collect_sprites(&world);
        assert_eq!(sprites.len(), 7);
        assert!(sprites.iter().all(|s| s.tex == 8));

        // the carried light appears once, at its barrel
        let mut lights = collect_lights(&world);
        lights.sort_by_key(|l| (l.pos.x, l.pos.y));
        let mut expected = level.lights.clone();
        expected.sort_by_key(|l| (l.pos.x, l.pos.y));
        assert_eq!(lights, expected);
    }

    #[test]
    fn carried_light_follows_its_barrel() {
        let level = DemoLevel::new().unwrap();
        let mut world = World::new();
        spawn_level(&mut world, &level, 8);

        let carrier = world
            .query::<(&Sprite, &LightEmitter)>()
            .iter()
            .map(|(e, _)| e)
            .next()
            .unwrap();
        let start = world.get::<&Position>(carrier).unwrap().0;

        for _ in 0..30 {
            wander(&mut world, &level.map);
            movement(&mut world, &level.map);
        }
        let pos = world.get::<&Position>(carrier).unwrap().0;
        assert_ne!(pos, start);

        let colour = level.lights[1].colour;
        let light = collect_lights(&world)
            .into_iter()
            .find(|l| l.colour == colour)
            .unwrap();
        assert_eq!(light.pos, TileMap::tile_at(pos));
    }
}
