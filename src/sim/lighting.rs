use crate::world::{Light, Light3, LightingSolver, TileMap};

/// Keeps a map's lighting buffer in sync with the lights in the world.
///
/// The flood fill is only rerun when the light list, the ambient colour
/// or the map geometry differ from the last solve.
#[derive(Default)]
pub struct LightingCache {
    solver: LightingSolver,
    last: Option<(Vec<Light>, Light3, u64)>,
}

impl LightingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the buffer was recomputed.
    pub fn update(&mut self, map: &mut TileMap, ambient: Light3, lights: Vec<Light>) -> bool {
        if let Some((l, a, rev)) = &self.last {
            if *l == lights && *a == ambient && *rev == map.revision() {
                return false;
            }
        }

        self.solver.solve(map, ambient, &lights);
        log::trace!("lighting re-solved for {} lights", lights.len());
        self.last = Some((lights, ambient, map.revision()));
        true
    }

    /// Forget the last solve; the next `update` always recomputes.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::EMPTY;

    fn strip() -> TileMap {
        TileMap::new(4, 1, &[0; 4], &[EMPTY; 4], &[0; 4]).unwrap()
    }

    #[test]
    fn unchanged_inputs_skip_the_solve() {
        let mut map = strip();
        let mut cache = LightingCache::new();
        let lights = vec![Light::new(0, 0, [255, 0, 0], 3, 1.0)];

        assert!(cache.update(&mut map, [0; 3], lights.clone()));
        assert!(!cache.update(&mut map, [0; 3], lights.clone()));
        assert_eq!(map.lighting(0, 0), [255, 0, 0]);

        // moved light
        let moved = vec![Light::new(3, 0, [255, 0, 0], 3, 1.0)];
        assert!(cache.update(&mut map, [0; 3], moved.clone()));
        assert_eq!(map.lighting(0, 0), [0, 0, 0]);

        // ambient change
        assert!(cache.update(&mut map, [5; 3], moved.clone()));

        // geometry change
        assert!(map.set_wall(1, 0, 0));
        assert!(cache.update(&mut map, [5; 3], moved.clone()));

        cache.invalidate();
        assert!(cache.update(&mut map, [5; 3], moved));
    }
}
