use crate::{
    renderer::software::sprites::VisSprite,
    renderer::{RenderConfig, Renderer, Scene},
    world::{Camera, Light3, Rgba, TextureBank},
};

/// Opaque black; everything the passes skip stays this colour.
pub(super) const BACKGROUND: Rgba = [0x00, 0x00, 0x00, 0xFF];

/// Smallest perpendicular distance a wall column is projected at.
pub(super) const NEAR: f32 = 1e-4;

#[derive(Default)]
pub struct Software {
    pub(super) frame: Vec<u8>,
    /// Corrected wall distance per column, `INFINITY` where no wall was hit.
    pub(super) depth: Vec<f32>,
    pub(super) sprites: Vec<VisSprite>,

    pub(super) columns: usize,
    pub(super) rows: usize,
    pub(super) fov: f32,
    pub(super) wall_height: f32,
}

impl Renderer for Software {
    fn begin_frame(&mut self, config: &RenderConfig) {
        assert!(
            config.validate().is_ok(),
            "invalid render config {config:?}; validate user input first"
        );

        let (w, h) = (config.columns(), config.rows());
        if w != self.columns || h != self.rows {
            log::debug!("software renderer resized {}x{} -> {}x{}", self.columns, self.rows, w, h);
            self.columns = w;
            self.rows = h;
            self.frame.resize(4 * w * h, 0);
            self.depth.resize(w, f32::INFINITY);
        }
        self.fov = config.fov;
        self.wall_height = config.wall_height;

        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&BACKGROUND);
        }
        self.depth.fill(f32::INFINITY);
        self.sprites.clear();
    }

    fn draw_scene(&mut self, scene: &Scene, camera: &Camera, bank: &TextureBank) {
        self.draw_planes(scene.map, camera, bank);
        self.draw_walls(scene.map, camera, bank);
        self.collect_sprites(scene.sprites, scene.map, camera);
        self.draw_sprites(bank);
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[u8], usize, usize),
    {
        submit(&self.frame, self.columns, self.rows);
    }
}

impl Software {
    /// Corrected wall distance recorded for each column in the last frame.
    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth
    }

    /// Frame buffer of the last frame.
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    #[inline(always)]
    pub(super) fn put(&mut self, column: usize, row: usize, texel: Rgba, light: Light3) {
        let i = 4 * (row * self.columns + column);
        self.frame[i..i + 4].copy_from_slice(&shade(texel, light));
    }
}

/// Scale a texel by a tile's light, `c × l / 255` per channel.
#[inline(always)]
pub(super) fn shade(texel: Rgba, light: Light3) -> Rgba {
    let s = |c: u8, l: u8| (c as u16 * l as u16 / 255) as u8;
    [
        s(texel[0], light[0]),
        s(texel[1], light[1]),
        s(texel[2], light[2]),
        texel[3],
    ]
}

/*──────────────────────────────── Tests ───────────────────────────────*/
