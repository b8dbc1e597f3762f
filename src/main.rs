//! Top-down 2-D view of the demo level.
//!
//! Open tiles are filled with their solved light colour, walls are drawn
//! in grey and the player's view rays are traced with the DDA kernel.
//!
//! ```bash
//! cargo run --release --bin map_view -- --scale 48
//! ```

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use minifb::{Key, Window, WindowOptions};

use tilecaster::{
    renderer::RenderConfig,
    sim::{InputCmd, LightingCache, Position, SIM_FPS, TicRunner, camera_for, collect_lights},
    world::{Camera, TileMap, demo::DemoLevel},
};

const WALL: u32 = 0x00_80_80_80;
const RAY: u32 = 0x00_FF_FF_00;
const THING: u32 = 0x00_FF_FF_FF;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Pixels per tile
    #[arg(long, default_value_t = 40)]
    scale: usize,

    /// Number of view rays drawn across the field of view
    #[arg(long, default_value_t = 32)]
    rays: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();
    let config = RenderConfig::default();

    let mut level = DemoLevel::new().context("building demo level")?;
    let mut sim = TicRunner::new();
    sim.spawn_level(&level, 0);
    let player = sim.player().context("demo level has no player start")?;
    let mut lighting = LightingCache::new();

    let (tw, th) = level.map.size();
    let (w, h) = (tw * opts.scale, th * opts.scale);
    let mut buffer = vec![0u32; w * h];

    let mut window = Window::new("tilecaster map", w, h, WindowOptions::default())?;
    window.set_target_fps(SIM_FPS as usize);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let mut cmd = InputCmd::default();
        if window.is_key_down(Key::W) || window.is_key_down(Key::Up) {
            cmd.forward += 1.0;
        }
        if window.is_key_down(Key::S) || window.is_key_down(Key::Down) {
            cmd.forward -= 1.0;
        }
        if window.is_key_down(Key::Right) || window.is_key_down(Key::D) {
            cmd.turn += 1.0;
        }
        if window.is_key_down(Key::Left) || window.is_key_down(Key::A) {
            cmd.turn -= 1.0;
        }
        sim.pump(&level.map, cmd);
        lighting.update(&mut level.map, config.ambient, collect_lights(sim.world()));

        // ─────────── tiles ────────────
        fill_tiles(&mut buffer, w, opts.scale, &level.map);

        // ─────────── view rays ────────────
        if let Some(cam) = camera_for(sim.world(), player) {
            draw_rays(&mut buffer, w, h, opts.scale, &level.map, &cam, &config, opts.rays);
        }

        // ─────────── things ────────────
        for (_, pos) in sim.world().query::<&Position>().iter() {
            let (x, y) = to_screen(pos.0, opts.scale);
            draw_line(&mut buffer, w, h, x - 2, y, x + 2, y, THING);
            draw_line(&mut buffer, w, h, x, y - 2, x, y + 2, THING);
        }

        window.update_with_buffer(&buffer, w, h)?;
    }
    Ok(())
}

fn to_screen(p: Vec2, scale: usize) -> (i32, i32) {
    ((p.x * scale as f32) as i32, (p.y * scale as f32) as i32)
}

fn fill_tiles(buf: &mut [u32], w: usize, scale: usize, map: &TileMap) {
    let (tw, th) = map.size();
    for ty in 0..th {
        for tx in 0..tw {
            let (x, y) = (tx as i32, ty as i32);
            let colour = if map.is_walkable(x, y) {
                let [r, g, b] = map.lighting(x, y);
                (r as u32) << 16 | (g as u32) << 8 | b as u32
            } else {
                WALL
            };
            for row in ty * scale..(ty + 1) * scale {
                buf[row * w + tx * scale..row * w + (tx + 1) * scale].fill(colour);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_rays(
    buf: &mut [u32],
    w: usize,
    h: usize,
    scale: usize,
    map: &TileMap,
    cam: &Camera,
    config: &RenderConfig,
    rays: usize,
) {
    let (x0, y0) = to_screen(cam.pos, scale);
    for i in 0..=rays {
        let dir = cam.column_ray(i, rays, config.fov).normalize();
        // rays that leave the map are drawn to the far corner distance
        let reach = map
            .cast_ray_dir(cam.pos, dir)
            .map_or((w + h) as f32 / scale as f32, |hit| hit.distance);
        let (x1, y1) = to_screen(cam.pos + dir * reach, scale);
        draw_line(buf, w, h, x0, y0, x1, y1, RAY);
    }
}

/// Integer Bresenham line-drawing algorithm.
#[allow(clippy::too_many_arguments)]
fn draw_line(
    buf: &mut [u32],
    w: usize,
    h: usize,
    mut x0: i32,
    mut y0: i32,
    x1: i32,
    y1: i32,
    colour: u32,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (0..w as i32).contains(&x0) && (0..h as i32).contains(&y0) {
            buf[y0 as usize * w + x0 as usize] = colour;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
