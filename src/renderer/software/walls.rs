use crate::{
    renderer::software::{Software, renderer::NEAR},
    world::{Camera, TextureBank, TileMap},
};

impl Software {
    /// Wall pass: one DDA ray per screen column.
    ///
    /// * Distance is measured perpendicular to the camera plane (hit distance
    ///   over the length of the un-normalised column ray), so flat walls
    ///   stay flat.
    /// * The texture V step comes from the *unclipped* span; walls taller
    ///   than the screen still sample the rows that are on screen.
    /// * Writes the depth buffer the sprite pass tests against.
    pub(super) fn draw_walls(&mut self, map: &TileMap, cam: &Camera, bank: &TextureBank) {
        let rows = self.rows as f32;
        let (fov, wh) = (self.fov, self.wall_height);

        for col in 0..self.columns {
            let ray = cam.column_ray(col, self.columns, fov);
            let Some(hit) = map.cast_ray_dir(cam.pos, ray) else {
                self.depth[col] = f32::INFINITY;
                continue;
            };

            let dist = (hit.distance / ray.length()).max(NEAR);
            self.depth[col] = dist;

            /* screen span, in fractions of the screen height ----------*/
            let len = wh / (dist * fov);
            let centre = 0.5 + wh * (cam.z - 0.5) / (dist * fov);
            let top = (centre - 0.5 * len) * rows;
            let span = len * rows;

            let first = top.round().clamp(0.0, rows) as usize;
            let last = (top + span).round().clamp(0.0, rows) as usize;
            if first >= last {
                continue;
            }

            /* texture column + light --------------------------------*/
            let tex = bank.texture_or_missing(map.wall(hit.tile.x, hit.tile.y));
            let (w, h) = tex.dimensions();
            let tx = ((hit.texture_u(ray) * w as f32) as usize).min(w - 1);
            let face = hit.face_tile(ray);
            let light = map.lighting(face.x, face.y);

            let v_step = h as f32 / span;
            let mut v = (first as f32 + 0.5 - top) * v_step;
            for row in first..last {
                let ty = (v as usize).min(h - 1);
                self.put(col, row, tex.pixel(tx, ty), light);
                v += v_step;
            }
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use crate::{
        renderer::{RenderConfig, Renderer, Scene, Software},
        world::{Camera, EMPTY, Texture, TextureBank, TileMap},
    };
    use glam::Vec2;

    /// 1-pixel-wide, 2-pixel-tall texture: red over blue.
    fn two_tone() -> TextureBank {
        let mut bank = TextureBank::default();
        let px = vec![255, 0, 0, 255, 0, 0, 255, 255];
        bank.insert("TWO", Texture::from_rgba("TWO", 1, 2, px)).unwrap();
        bank
    }

    fn column(sw: &Software, cfg: &RenderConfig, col: usize) -> Vec<[u8; 3]> {
        let cols = cfg.columns();
        (0..cfg.rows())
            .map(|r| {
                let i = 4 * (r * cols + col);
                [sw.frame()[i], sw.frame()[i + 1], sw.frame()[i + 2]]
            })
            .collect()
    }

    /// 3×3 box with one open tile in the middle.
    fn cell() -> TileMap {
        #[rustfmt::skip]
        let walls = [
            0,  0, 0,
            0, -1, 0,
            0,  0, 0,
        ];
        TileMap::new(3, 3, &[EMPTY; 9], &walls, &[EMPTY; 9]).unwrap()
    }

    #[test]
    fn clipped_wall_samples_from_unclipped_span() {
        // wall 0.5 tiles away with fov 0.5: 4× the screen height
        let map = cell();
        let cfg = RenderConfig {
            fov: 0.5,
            resolution: 20,
            aspect: 1.0,
            ..RenderConfig::default()
        };
        let cam = Camera::new(Vec2::new(1.5, 1.5), 0.5, 0.0);
        let mut sw = Software::default();
        sw.begin_frame(&cfg);
        sw.draw_scene(&Scene { map: &map, sprites: &[] }, &cam, &two_tone());

        let px = column(&sw, &cfg, cfg.columns() / 2);
        // the upper half of the texture fills the upper half of the screen
        assert!(px[..10].iter().all(|&p| p == [255, 0, 0]), "{px:?}");
        assert!(px[10..].iter().all(|&p| p == [0, 0, 255]), "{px:?}");
    }

    #[test]
    fn camera_inside_a_wall_never_divides_by_zero() {
        // hugging the east face: the first crossing is almost at the origin
        let map = cell();
        let cfg = RenderConfig {
            resolution: 16,
            aspect: 1.0,
            ..RenderConfig::default()
        };
        let cam = Camera::new(Vec2::new(1.99999, 1.5), 0.5, 0.0);
        let mut sw = Software::default();
        sw.begin_frame(&cfg);
        sw.draw_scene(&Scene { map: &map, sprites: &[] }, &cam, &two_tone());
        assert!(sw.depth_buffer().iter().all(|d| d.is_finite() && *d > 0.0));
        assert_eq!(sw.frame().len(), 4 * 16 * 16);
    }

    #[test]
    fn wall_is_lit_from_the_viewer_side() {
        let mut map = cell();
        map.lighting = vec![[10; 3]; 9];
        map.lighting[4] = [255, 255, 255]; // the open centre tile
        let cfg = RenderConfig {
            fov: 0.5,
            resolution: 20,
            aspect: 1.0,
            ..RenderConfig::default()
        };
        let cam = Camera::new(Vec2::new(1.5, 1.5), 0.5, 0.0);
        let mut sw = Software::default();
        sw.begin_frame(&cfg);
        sw.draw_scene(&Scene { map: &map, sprites: &[] }, &cam, &two_tone());
        let px = column(&sw, &cfg, cfg.columns() / 2);
        assert_eq!(px[0], [255, 0, 0]);
    }
}
