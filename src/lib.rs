//! Tile-map raycaster with per-tile coloured lighting and billboard sprites,
//! rendered entirely on the CPU.

pub mod assets;
pub mod renderer;
pub mod sim;
pub mod world;
