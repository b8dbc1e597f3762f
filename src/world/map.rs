use glam::IVec2;

/// Integer tile value stored in every layer: a texture index, or [`EMPTY`].
pub type TileId = i32;

/// "No tile". On the wall layer it marks a walkable cell; every other
/// value (`>= 0`) is a texture index into the `TextureBank`.
///
/// Also returned for every out-of-bounds query.
pub const EMPTY: TileId = -1;

/// RGB lighting multiplier for one tile, 255 = full brightness.
pub type Light3 = [u8; 3];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map dimensions {0}x{1} must both be non-zero")]
    ZeroSize(usize, usize),

    #[error("{layer} layer has {got} tiles, expected {expected}")]
    LayerSize {
        layer: &'static str,
        got: usize,
        expected: usize,
    },
}

/// Runtime snapshot of one level: three parallel tile layers plus the
/// per-tile lighting cache.
///
/// Geometry is immutable after construction except through [`set_wall`],
/// which bumps [`revision`] so cached lighting can be invalidated.
///
/// [`set_wall`]: TileMap::set_wall
/// [`revision`]: TileMap::revision
#[derive(Clone, Debug)]
pub struct TileMap {
    width: usize,
    height: usize,
    floor: Vec<TileId>,
    walls: Vec<TileId>,
    ceiling: Vec<TileId>,
    pub(crate) lighting: Vec<Light3>,
    revision: u64,
}

impl TileMap {
    /// Copy three row-major layers (`index = y * width + x`).
    ///
    /// Lighting starts fully bright until the solver runs.
    pub fn new(
        width: usize,
        height: usize,
        floor: &[TileId],
        walls: &[TileId],
        ceiling: &[TileId],
    ) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::ZeroSize(width, height));
        }
        let expected = width * height;
        for (layer, data) in [("floor", floor), ("wall", walls), ("ceiling", ceiling)] {
            if data.len() != expected {
                return Err(MapError::LayerSize {
                    layer,
                    got: data.len(),
                    expected,
                });
            }
        }
        Ok(Self {
            width,
            height,
            floor: floor.to_vec(),
            walls: walls.to_vec(),
            ceiling: ceiling.to_vec(),
            lighting: vec![[0xFF; 3]; expected],
            revision: 0,
        })
    }

    /*──────────────────────── dimensions ───────────────────────*/

    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline(always)]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    /*──────────────────────── layer queries ────────────────────*/

    #[inline(always)]
    pub fn floor(&self, x: i32, y: i32) -> TileId {
        self.index(x, y).map_or(EMPTY, |i| self.floor[i])
    }

    #[inline(always)]
    pub fn wall(&self, x: i32, y: i32) -> TileId {
        self.index(x, y).map_or(EMPTY, |i| self.walls[i])
    }

    #[inline(always)]
    pub fn ceiling(&self, x: i32, y: i32) -> TileId {
        self.index(x, y).map_or(EMPTY, |i| self.ceiling[i])
    }

    /// In bounds and no wall. Out-of-map cells are never walkable even though
    /// their `wall()` reads as `EMPTY`.
    #[inline(always)]
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.walls[i] == EMPTY)
    }

    /// Tile containing a continuous map position.
    #[inline(always)]
    pub fn tile_at(p: glam::Vec2) -> IVec2 {
        p.floor().as_ivec2()
    }

    /// Lighting of tile `(x, y)`.
    ///
    /// Rays and sprites routinely graze the border, so out-of-range
    /// coordinates are clamped to the nearest edge tile instead of failing.
    pub fn lighting(&self, x: i32, y: i32) -> Light3 {
        if let Some(i) = self.index(x, y) {
            return self.lighting[i];
        }
        let cx = x.clamp(0, self.width as i32 - 1);
        let cy = y.clamp(0, self.height as i32 - 1);
        log::trace!("lighting lookup ({x}, {y}) outside map, clamped to ({cx}, {cy})");
        self.lighting[cy as usize * self.width + cx as usize]
    }

    /*──────────────────────── mutation ─────────────────────────*/

    /// Replace one wall cell. Returns `false` (and changes nothing) when the
    /// cell is outside the map.
    pub fn set_wall(&mut self, x: i32, y: i32, id: TileId) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        if self.walls[i] != id {
            self.walls[i] = id;
            self.revision += 1;
        }
        true
    }

    /// Geometry revision counter; changes whenever a wall is edited.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TileMap {
        #[rustfmt::skip]
        let walls = [
            0,  0,  0,
            0, -1,  3,
            0,  0,  0,
        ];
        let floor = [1; 9];
        let ceiling = [2; 9];
        TileMap::new(3, 3, &floor, &walls, &ceiling).unwrap()
    }

    #[test]
    fn queries_match_input_inside_bounds() {
        let map = sample();
        assert_eq!(map.wall(1, 1), EMPTY);
        assert_eq!(map.wall(2, 1), 3);
        assert_eq!(map.wall(0, 0), 0);
        assert_eq!(map.floor(2, 2), 1);
        assert_eq!(map.ceiling(0, 2), 2);
    }

    #[test]
    fn out_of_bounds_returns_sentinel() {
        let map = sample();
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX)] {
            assert_eq!(map.wall(x, y), EMPTY);
            assert_eq!(map.floor(x, y), EMPTY);
            assert_eq!(map.ceiling(x, y), EMPTY);
            assert!(!map.is_walkable(x, y));
        }
        assert!(map.is_walkable(1, 1));
    }

    #[test]
    fn mismatched_layers_are_rejected() {
        let err = TileMap::new(2, 2, &[0; 4], &[0; 3], &[0; 4]).unwrap_err();
        assert_eq!(
            err,
            MapError::LayerSize {
                layer: "wall",
                got: 3,
                expected: 4
            }
        );
        assert_eq!(
            TileMap::new(0, 2, &[], &[], &[]).unwrap_err(),
            MapError::ZeroSize(0, 2)
        );
    }

    #[test]
    fn lighting_lookup_clamps_to_edge() {
        let mut map = sample();
        map.lighting[2] = [9, 8, 7]; // (2, 0)
        assert_eq!(map.lighting(2, 0), [9, 8, 7]);
        assert_eq!(map.lighting(5, -4), [9, 8, 7]);
    }

    #[test]
    fn set_wall_bumps_revision_only_on_change() {
        let mut map = sample();
        assert!(map.set_wall(1, 1, EMPTY));
        assert_eq!(map.revision(), 0);
        assert!(map.set_wall(1, 1, 4));
        assert_eq!(map.revision(), 1);
        assert!(!map.set_wall(9, 9, 4));
        assert_eq!(map.wall(1, 1), 4);
    }
}
