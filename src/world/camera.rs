use glam::{Vec2, vec2};

/// Viewer pose in tile space.
///
/// * Only **yaw** (heading) is simulated – there is no pitch.
/// * `z` is eye height normalised between floor (0) and ceiling (1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec2, // x,y in tile units
    pub z: f32,    // 0 = floor, 1 = ceiling
    pub yaw: f32,  // radians (0 = +X, positive turns toward +Y)
}

impl Camera {
    pub fn new(pos: Vec2, z: f32, yaw: f32) -> Self {
        Self { pos, z, yaw }
    }

    /// Transform a map point `p` into camera-local coords:
    ///  .x = lateral offset (+ right)
    ///  .y = depth along forward axis
    #[inline]
    pub fn to_cam(&self, p: Vec2) -> Vec2 {
        let d = p - self.pos;
        vec2(d.dot(self.right()), d.dot(self.forward()))
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector pointing where the camera looks.
    #[inline(always)]
    pub fn forward(self) -> Vec2 {
        let (s, c) = self.yaw.sin_cos();
        Vec2::new(c, s)
    }

    /// Unit vector toward increasing screen columns.
    ///
    /// The map's Y axis points *down* the screen of a top-down view, so the
    /// CCW perpendicular of `forward` is the viewer's right hand.
    #[inline(always)]
    pub fn right(self) -> Vec2 {
        self.forward().perp()
    }

    /// Un-normalised ray through screen column `column` of `columns`.
    ///
    /// `fov` is the half-width of the camera plane at unit distance.
    #[inline]
    pub fn column_ray(self, column: usize, columns: usize, fov: f32) -> Vec2 {
        let offset = (2.0 * column as f32 / columns as f32 - 1.0) * fov;
        self.forward() + self.right() * offset
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Move by `forward` units and `side` (strafe), preserving eye height.
    pub fn step(&mut self, forward: f32, side: f32) {
        self.pos += self.forward() * forward + self.right() * side;
    }

    /// Rotate around the vertical axis.
    pub fn turn(&mut self, delta_yaw: f32) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(std::f32::consts::TAU);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
