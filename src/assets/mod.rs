//! Texture sources: PNG files on disk or a generated stand-in set.

mod loader;
mod procedural;

pub use loader::{LoadError, load_texture, load_texture_dir};
pub use procedural::procedural_set;
