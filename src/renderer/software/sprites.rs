use crate::{
    renderer::{SpriteInstance, software::Software},
    world::{Camera, Light3, TextureBank, TextureId, TileMap},
};

/// A sprite that survived projection, in screen space.
#[derive(Clone, Copy, Debug)]
pub struct VisSprite {
    pub x0: f32, // left edge, columns
    pub y0: f32, // top edge, rows
    pub size: f32, // square side in pixels
    pub depth: f32, // camera-space depth
    pub tex: TextureId,
    pub light: Light3,
}

impl Software {
    /// Project every instance in front of the camera and queue it
    /// far-to-near for painter's order.
    pub(super) fn collect_sprites(&mut self, sprites: &[SpriteInstance], map: &TileMap, cam: &Camera) {
        let rows = self.rows as f32;
        let half_cols = self.columns as f32 * 0.5;
        let (fov, wh) = (self.fov, self.wall_height);

        for s in sprites {
            let rel = cam.to_cam(s.pos);
            let depth = rel.y;
            if depth <= 0.0 {
                continue;
            }

            let size = rows * s.scale * wh / (depth * fov);
            let xc = half_cols * (1.0 + rel.x / (depth * fov));
            let yc = rows * 0.5 - rows * wh * (s.z - cam.z) / (depth * fov);

            // fully off either side
            if xc + size * 0.5 < 0.0 || xc - size * 0.5 > self.columns as f32 {
                continue;
            }

            let tile = TileMap::tile_at(s.pos);
            self.sprites.push(VisSprite {
                x0: xc - size * 0.5,
                y0: yc - size * 0.5,
                size,
                depth,
                tex: s.tex,
                light: map.lighting(tile.x, tile.y),
            });
        }

        self.sprites.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    }

    pub(super) fn draw_sprites(&mut self, bank: &TextureBank) {
        let sprites = std::mem::take(&mut self.sprites);
        for vis in &sprites {
            self.draw_sprite(vis, bank);
        }
        self.sprites = sprites;
    }

    fn draw_sprite(&mut self, vis: &VisSprite, bank: &TextureBank) {
        let tex = bank.texture_or_missing(vis.tex as i32);
        let (w, h) = tex.dimensions();

        let col_lo = vis.x0.floor().max(0.0) as usize;
        let col_hi = ((vis.x0 + vis.size).ceil().max(0.0) as usize).min(self.columns);
        let row_lo = vis.y0.floor().max(0.0) as usize;
        let row_hi = ((vis.y0 + vis.size).ceil().max(0.0) as usize).min(self.rows);

        for col in col_lo..col_hi {
            if vis.depth > self.depth[col] {
                continue; // behind the wall in this column
            }
            let u = (col as f32 + 0.5 - vis.x0) / vis.size;
            if !(0.0..1.0).contains(&u) {
                continue;
            }
            let tx = ((u * w as f32) as usize).min(w - 1);

            for row in row_lo..row_hi {
                let v = (row as f32 + 0.5 - vis.y0) / vis.size;
                if !(0.0..1.0).contains(&v) {
                    continue;
                }
                let ty = ((v * h as f32) as usize).min(h - 1);
                let texel = tex.pixel(tx, ty);
                if texel[..3] == [0, 0, 0] {
                    continue; // colour key
                }
                self.put(col, row, texel, vis.light);
            }
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
