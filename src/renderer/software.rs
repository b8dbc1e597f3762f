//! ---------------------------------------------------------------------------
//! Classic software (CPU) raycasting renderer
//!
//! * Fills a `Vec<u8>` frame-buffer in **RGBA** byte order, row 0 at the top.
//! * Three passes per frame: floor/ceiling rows, wall columns, sprites.
//!   The wall pass records one depth per column; the sprite pass reads it.
//!
//! Plane rows and wall columns are independent of each other; sprites are
//! painted last, far to near, over whatever the first two passes left.
//! ---------------------------------------------------------------------------

mod planes;
mod renderer;
mod sprites;
mod walls;

pub use renderer::Software;
