//! Rendering abstraction layer.
//!
//! *The rest of the program never touches a pixel buffer directly.*
//! It hands a [`Scene`] plus a [`Camera`] to a type that implements
//! [`Renderer`] and receives the finished frame through a callback.
//!
//! * Back-ends own all per-frame scratch (frame buffer, depth buffer).
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use glam::Vec2;

use crate::world::{Camera, Light3, TextureBank, TextureId, TileMap};

pub mod software;

pub use software::Software;

/// Runtime-tunable projection parameters. Every field may change between
/// frames; the back-end reallocates on the next `begin_frame`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Half-width of the camera plane at unit distance, i.e. the tangent of
    /// half the horizontal view angle. The default of 60° in radians
    /// (≈ 1.047) gives a view about 92° wide.
    pub fov: f32,
    /// Vertical resolution in pixels (frame rows).
    pub resolution: usize,
    /// Columns per row; `columns = aspect × resolution`.
    pub aspect: f32,
    /// Wall height in tile units.
    pub wall_height: f32,
    /// Base colour every tile starts from before lights are added.
    pub ambient: Light3,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fov: 60_f32.to_radians(),
            resolution: 200,
            aspect: 16.0 / 9.0,
            wall_height: 1.0,
            ambient: [0x10, 0x10, 0x10],
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("resolution must be at least 2 rows, got {0}")]
    Resolution(usize),

    #[error("field of view must be a positive finite number, got {0}")]
    Fov(f32),

    #[error("aspect ratio {0} leaves fewer than 2 columns")]
    Aspect(f32),

    #[error("wall height must be a positive finite number, got {0}")]
    WallHeight(f32),
}

impl RenderConfig {
    #[inline]
    pub fn rows(&self) -> usize {
        self.resolution
    }

    #[inline]
    pub fn columns(&self) -> usize {
        (self.aspect * self.resolution as f32) as usize
    }

    /// Check values coming from user input before handing them to a
    /// back-end, which treats invalid settings as a programmer error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution < 2 {
            return Err(ConfigError::Resolution(self.resolution));
        }
        if !(self.fov.is_finite() && self.fov > 0.0) {
            return Err(ConfigError::Fov(self.fov));
        }
        if !(self.aspect.is_finite() && self.columns() >= 2) {
            return Err(ConfigError::Aspect(self.aspect));
        }
        if !(self.wall_height.is_finite() && self.wall_height > 0.0) {
            return Err(ConfigError::WallHeight(self.wall_height));
        }
        Ok(())
    }
}

/// A textured billboard standing in the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteInstance {
    pub pos: Vec2,
    /// Centre height, normalised like `Camera::z`.
    pub z: f32,
    /// Size relative to the wall height.
    pub scale: f32,
    pub tex: TextureId,
}

/// Everything drawn in one frame apart from the viewer.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub map: &'a TileMap,
    pub sprites: &'a [SpriteInstance],
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished **RGBA** buffer (4 bytes per pixel, row 0
/// at the top) to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for `config` and clear it.
    fn begin_frame(&mut self, config: &RenderConfig);

    /// Rasterise floors, ceilings, walls and sprites into the internal buffer.
    fn draw_scene(&mut self, scene: &Scene, camera: &Camera, bank: &TextureBank);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[u8], columns, rows)` is run exactly once per frame.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[u8], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(
        &mut self,
        config: &RenderConfig,
        scene: &Scene,
        camera: &Camera,
        bank: &TextureBank,
        submit: F,
    ) where
        F: FnOnce(&[u8], usize, usize),
    {
        self.begin_frame(config);
        self.draw_scene(scene, camera, bank);
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}
