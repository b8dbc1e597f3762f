use super::{InputCmd, spawn, systems};
use crate::world::{TextureId, TileMap, demo::DemoLevel};
use hecs::{Entity, World};
use std::time::{Duration, Instant};

pub const SIM_FPS: u32 = 60;
const TIC: Duration = Duration::from_micros(1_000_000 / SIM_FPS as u64);

/// Longest backlog `pump` will try to catch up on before dropping time.
const MAX_CATCH_UP: u32 = 10;

/// Owns the ECS world and drives all game-logic systems.
pub struct TicRunner {
    world: World,
    player: Option<Entity>,
    last: Instant,
    /// Mouse travel sampled on frames that ran no tic.
    pending_mouse: f32,
}

impl Default for TicRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TicRunner {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            player: None,
            last: Instant::now(),
            pending_mouse: 0.0,
        }
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[inline]
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    /// Spawn the level's things and lights; the player start becomes the
    /// entity steered by `tick`'s input.
    pub fn spawn_level(&mut self, level: &DemoLevel, barrel: TextureId) {
        self.player = spawn::spawn_level(&mut self.world, level, barrel);
    }

    /// Advance enough tics to synchronise simulation with real time.
    /// Returns the number of tics run.
    ///
    /// Mouse travel accumulates until a tic runs, then is applied once.
    pub fn pump(&mut self, map: &TileMap, mut cmd: InputCmd) -> u32 {
        self.pending_mouse += cmd.mouse_dx;
        cmd.mouse_dx = self.pending_mouse;
        let mut ran = 0;
        while self.last.elapsed() >= TIC {
            if ran == MAX_CATCH_UP {
                log::debug!("simulation fell behind, skipping {:?}", self.last.elapsed());
                self.last = Instant::now();
                break;
            }
            self.tick(map, cmd);
            cmd.mouse_dx = 0.0;
            self.pending_mouse = 0.0;
            self.last += TIC;
            ran += 1;
        }
        ran
    }

    /// Run exactly one fixed-rate tic.
    pub fn tick(&mut self, map: &TileMap, cmd: InputCmd) {
        if let Some(player) = self.player {
            systems::player_input(&mut self.world, player, cmd);
        }
        systems::wander(&mut self.world, map);
        systems::movement(&mut self.world, map);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Angle, MOUSE_SENSITIVITY, Position, collect_sprites};

    #[test]
    fn ticks_are_deterministic() {
        let level = DemoLevel::new().unwrap();
        let run = || {
            let mut sim = TicRunner::new();
            sim.spawn_level(&level, 8);
            let cmd = InputCmd {
                forward: 1.0,
                turn: 0.5,
                ..Default::default()
            };
            for _ in 0..120 {
                sim.tick(&level.map, cmd);
            }
            collect_sprites(sim.world())
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn player_moves_under_input() {
        let level = DemoLevel::new().unwrap();
        let mut sim = TicRunner::new();
        sim.spawn_level(&level, 8);
        let player = sim.player().unwrap();
        let start = sim.world().get::<&Position>(player).unwrap().0;

        // facing +X from (2.5, 2.5): the wall at x = 3 stops the walk
        let cmd = InputCmd {
            forward: 1.0,
            ..Default::default()
        };
        for _ in 0..60 {
            sim.tick(&level.map, cmd);
        }
        let end = sim.world().get::<&Position>(player).unwrap().0;
        assert!(end.x > start.x);
        assert!(end.x < 3.0);
    }

    #[test]
    fn pump_runs_nothing_before_a_tic_elapses() {
        let level = DemoLevel::new().unwrap();
        let mut sim = TicRunner::new();
        sim.spawn_level(&level, 8);
        sim.last = Instant::now() + Duration::from_secs(60);
        assert_eq!(sim.pump(&level.map, InputCmd::default()), 0);
    }

    #[test]
    fn mouse_travel_waits_for_the_next_tic() {
        let level = DemoLevel::new().unwrap();
        let mut sim = TicRunner::new();
        sim.spawn_level(&level, 8);
        let player = sim.player().unwrap();

        let cmd = InputCmd {
            mouse_dx: 100.0,
            ..Default::default()
        };
        sim.last = Instant::now() + Duration::from_secs(60);
        assert_eq!(sim.pump(&level.map, cmd), 0);
        assert_eq!(sim.world().get::<&Angle>(player).unwrap().0, 0.0);

        sim.last = Instant::now() - TIC;
        assert!(sim.pump(&level.map, InputCmd::default()) >= 1);
        let yaw = sim.world().get::<&Angle>(player).unwrap().0;
        assert!((yaw - 100.0 * MOUSE_SENSITIVITY).abs() < 1e-5, "yaw {yaw}");

        // applied once, not again on later tics
        sim.last = Instant::now() - TIC;
        sim.pump(&level.map, InputCmd::default());
        let again = sim.world().get::<&Angle>(player).unwrap().0;
        assert_eq!(again, yaw);
    }

    #[test]
    fn pump_caps_catch_up() {
        let level = DemoLevel::new().unwrap();
        let mut sim = TicRunner::new();
        sim.last = Instant::now() - Duration::from_secs(1);
        assert_eq!(sim.pump(&level.map, InputCmd::default()), MAX_CATCH_UP);
    }
}
