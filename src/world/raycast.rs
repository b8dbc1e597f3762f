//! Grid ray casting (Digital Differential Analyzer).
//!
//! The walk visits every gridline the ray crosses in strictly increasing
//! distance order, so the first solid tile found is the nearest one.

use glam::{IVec2, Vec2};

use super::map::{EMPTY, TileMap};

/// Which family of gridlines the ray crossed last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Stepped along X: the struck face is a vertical (x = const) line.
    X,
    /// Stepped along Y: the struck face is a horizontal (y = const) line.
    Y,
}

/// Where a ray stopped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Solid tile that was struck.
    pub tile: IVec2,
    pub axis: Axis,
    /// Position along the struck face, `0 <= lateral < 1`.
    pub lateral: f32,
    /// Euclidean distance along the *unit* ray direction.
    pub distance: f32,
}

impl RayHit {
    /// Horizontal texture coordinate for a ray travelling along `dir`.
    ///
    /// Faces seen from the negative side are flipped so that neighbouring
    /// faces of a block read left-to-right and never mirror.
    #[inline]
    pub fn texture_u(&self, dir: Vec2) -> f32 {
        let flip = match self.axis {
            Axis::X => dir.x < 0.0,
            Axis::Y => dir.y > 0.0,
        };
        if flip { 1.0 - self.lateral } else { self.lateral }
    }

    /// The open tile in front of the struck face, on the viewer's side.
    #[inline]
    pub fn face_tile(&self, dir: Vec2) -> IVec2 {
        match self.axis {
            Axis::X => self.tile - IVec2::new(dir.x.signum() as i32, 0),
            Axis::Y => self.tile - IVec2::new(0, dir.y.signum() as i32),
        }
    }
}

/// Fractional part in `[0, 1)`, robust to `v - floor(v)` rounding up to 1.
#[inline(always)]
fn unit_fract(v: f32) -> f32 {
    let f = v - v.floor();
    if f >= 1.0 { 0.0 } else { f }
}

impl TileMap {
    /// Cast a ray from `origin` at `angle` radians (0 = +X, CCW toward +Y).
    pub fn cast_ray(&self, origin: Vec2, angle: f32) -> Option<RayHit> {
        let (s, c) = angle.sin_cos();
        self.cast_ray_dir(origin, Vec2::new(c, s))
    }

    /// Cast a ray from `origin` along `dir` (any non-zero length).
    ///
    /// The tile containing `origin` is never tested. Returns `None` once the
    /// walk leaves the map without striking a wall.
    pub fn cast_ray_dir(&self, origin: Vec2, dir: Vec2) -> Option<RayHit> {
        let dir = dir.normalize_or_zero();
        if dir == Vec2::ZERO {
            return None;
        }

        let mut tile = TileMap::tile_at(origin);
        let frac = origin - tile.as_vec2();

        // distance along the ray between two consecutive crossings per axis
        let delta = Vec2::new(axis_delta(dir.x), axis_delta(dir.y));
        let step = IVec2::new(
            if dir.x < 0.0 { -1 } else { 1 },
            if dir.y < 0.0 { -1 } else { 1 },
        );

        // distance from origin to the first crossing per axis
        let mut side = Vec2::new(
            first_crossing(frac.x, dir.x, delta.x),
            first_crossing(frac.y, dir.y, delta.y),
        );

        loop {
            let axis = if side.x < side.y {
                tile.x += step.x;
                side.x += delta.x;
                Axis::X
            } else {
                tile.y += step.y;
                side.y += delta.y;
                Axis::Y
            };

            if !self.in_bounds(tile.x, tile.y) {
                return None;
            }
            if self.wall(tile.x, tile.y) == EMPTY {
                continue;
            }

            let (distance, along) = match axis {
                Axis::X => (side.x - delta.x, origin.y + dir.y * (side.x - delta.x)),
                Axis::Y => (side.y - delta.y, origin.x + dir.x * (side.y - delta.y)),
            };
            return Some(RayHit {
                tile,
                axis,
                lateral: unit_fract(along),
                distance,
            });
        }
    }
}

#[inline(always)]
fn axis_delta(d: f32) -> f32 {
    if d == 0.0 { f32::INFINITY } else { (1.0 / d).abs() }
}

#[inline(always)]
fn first_crossing(frac: f32, d: f32, delta: f32) -> f32 {
    if d == 0.0 {
        f32::INFINITY
    } else if d < 0.0 {
        frac * delta
    } else {
        (1.0 - frac) * delta
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
