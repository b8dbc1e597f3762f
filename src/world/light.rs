//! Per-tile coloured lighting.
//!
//! Light spreads from each source by breadth-first flood fill over walkable
//! tiles and is attenuated by *graph* distance, not Euclidean distance.
//! Walls stop it, but there is no line-of-sight test: light happily bends
//! around corners as long as there is an open path within `range` steps.
//!
//! The result is cached in the [`TileMap`]'s lighting buffer and only needs
//! recomputing when a light or the map geometry changes.

use std::collections::VecDeque;

use glam::IVec2;

use super::map::{Light3, TileMap};

/// A point light sitting on one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub pos: IVec2,
    pub colour: Light3,
    /// BFS radius in tiles; `0` disables the light.
    pub range: u32,
    /// Exponent on `(1 - d/range)`; larger values fall off faster.
    pub falloff: f32,
}

impl Light {
    pub fn new(x: i32, y: i32, colour: Light3, range: u32, falloff: f32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            colour,
            range,
            falloff,
        }
    }

    /// Attenuation at BFS distance `d`.
    #[inline]
    pub fn intensity(&self, d: u32) -> f32 {
        if self.range == 0 || d > self.range {
            return 0.0;
        }
        (1.0 - d as f32 / self.range as f32).powf(self.falloff)
    }
}

const NEIGHBOURS: [IVec2; 4] = [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y];

/// Reusable scratch for lighting regeneration.
///
/// Holds the BFS frontier and visited set so repeated solves do not
/// reallocate.
#[derive(Default)]
pub struct LightingSolver {
    queue: VecDeque<IVec2>,
    visited: Vec<bool>,
}

impl LightingSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the whole lighting buffer of `map`: ambient everywhere, then
    /// every enabled light added on top in slice order.
    pub fn solve(&mut self, map: &mut TileMap, ambient: Light3, lights: &[Light]) {
        map.lighting.fill(ambient);

        let (w, h) = map.size();
        self.visited.resize(w * h, false);

        for light in lights {
            if light.range == 0 {
                continue;
            }
            if !map.is_walkable(light.pos.x, light.pos.y) {
                log::debug!(
                    "light at ({}, {}) sits inside a wall or off-map, skipped",
                    light.pos.x,
                    light.pos.y
                );
                continue;
            }
            self.flood(map, light);
        }
        log::debug!("lighting regenerated: {} light(s), {}x{} tiles", lights.len(), w, h);
    }

    /// Distance-layered BFS from one light.
    fn flood(&mut self, map: &mut TileMap, light: &Light) {
        let (w, _) = map.size();
        let idx = |p: IVec2| p.y as usize * w + p.x as usize;

        self.visited.fill(false);
        self.queue.clear();

        self.queue.push_back(light.pos);
        self.visited[idx(light.pos)] = true;

        let mut depth = 0u32;
        let mut left_in_layer = 1usize;
        let mut next_layer = 0usize;

        while let Some(tile) = self.queue.pop_front() {
            let intensity = light.intensity(depth);
            let cell = &mut map.lighting[idx(tile)];
            for (c, add) in cell.iter_mut().zip(light.colour) {
                let lit = (add as f32 * intensity) as u32;
                *c = (*c as u32 + lit).min(255) as u8;
            }

            if depth < light.range {
                for n in NEIGHBOURS.iter().map(|&d| tile + d) {
                    if map.is_walkable(n.x, n.y) && !self.visited[idx(n)] {
                        self.visited[idx(n)] = true;
                        self.queue.push_back(n);
                        next_layer += 1;
                    }
                }
            }

            left_in_layer -= 1;
            if left_in_layer == 0 {
                depth += 1;
                left_in_layer = next_layer;
                next_layer = 0;
            }
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
