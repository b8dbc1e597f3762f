use glam::Vec2;

use crate::{
    renderer::software::Software,
    world::{Camera, EMPTY, TextureBank, TileMap},
};

impl Software {
    /// Floor and ceiling pass, one screen row at a time.
    ///
    /// Every pixel of a row lies at the same perpendicular distance, found by
    /// similar triangles from the eye height and the row's offset from the
    /// horizon. The world position under each column is then a linear walk
    /// across the camera plane scaled by that distance.
    pub(super) fn draw_planes(&mut self, map: &TileMap, cam: &Camera, bank: &TextureBank) {
        let rows = self.rows as f32;
        let cols = self.columns as f32;
        let fwd = cam.forward();
        let right = cam.right();

        let floor_eye = cam.z * self.wall_height;
        let ceiling_eye = (1.0 - cam.z) * self.wall_height;

        for row in 0..self.rows {
            // pixel-centre offset from the horizon, + below
            let offset = (2.0 * row as f32 + 1.0 - rows) / (2.0 * rows);
            if offset == 0.0 {
                continue;
            }
            let ceiling = offset < 0.0;
            let eye = if ceiling { ceiling_eye } else { floor_eye };
            let dist = eye / (self.fov * offset.abs());

            let start = cam.pos + (fwd - right * self.fov) * dist;
            let step = right * (2.0 * self.fov / cols) * dist;

            for col in 0..self.columns {
                let p: Vec2 = start + step * col as f32;
                let tile = TileMap::tile_at(p);
                let id = if ceiling {
                    map.ceiling(tile.x, tile.y)
                } else {
                    map.floor(tile.x, tile.y)
                };
                if id == EMPTY {
                    continue;
                }

                // one texture repeat per tile
                let tex = bank.texture_or_missing(id);
                let (tw, th) = tex.dimensions();
                let texel = tex.sample_wrapped(
                    (p.x * tw as f32).floor() as i32,
                    (p.y * th as f32).floor() as i32,
                );
                self.put(col, row, texel, map.lighting(tile.x, tile.y));
            }
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
