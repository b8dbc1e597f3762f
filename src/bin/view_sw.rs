//! First-person view of the demo level through the software renderer.
//!
//! ```bash
//! cargo run --release -- --resolution 240 --assets res/textures
//! ```
//!
//! WASD / arrows move and turn, the mouse turns, `,` `.` change the FOV,
//! `-` `=` change the resolution, `V` toggles the frame limiter.

use anyhow::Context;
use clap::Parser;
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tilecaster::{
    assets::{load_texture, load_texture_dir, procedural_set},
    renderer::{RenderConfig, RendererExt, Scene, Software},
    sim::{InputCmd, LightingCache, SIM_FPS, TicRunner, camera_for, collect_lights, collect_sprites},
    world::{
        TextureBank, TextureId,
        demo::{AMBIENT, BARREL_TEXTURE, DemoLevel, WALL_TEXTURES},
    },
};

const FOV_STEP: f32 = 0.01;
const RESOLUTION_STEP: usize = 2;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Vertical resolution in pixels
    #[arg(long, default_value_t = 200)]
    resolution: usize,

    /// Camera-plane half-width, given in degrees and used as radians;
    /// 60 spans about 92° horizontally
    #[arg(long, default_value_t = 60.0)]
    fov_deg: f32,

    /// Width / height of the rendered frame
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect: f32,

    /// Wall height in tile units
    #[arg(long, default_value_t = 1.0)]
    wall_height: f32,

    /// Directory holding `<name>.png` for every wall texture and the barrel;
    /// generated textures are used when omitted
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long, default_value_t = 1280)]
    width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 720)]
    height: usize,
}

fn load_bank(assets: Option<&PathBuf>) -> anyhow::Result<(TextureBank, TextureId)> {
    let mut bank = TextureBank::default();
    let barrel = match assets {
        Some(dir) => {
            load_texture_dir(dir, &WALL_TEXTURES, &mut bank)
                .with_context(|| format!("loading wall textures from {}", dir.display()))?;
            let path = dir.join(format!("{BARREL_TEXTURE}.png"));
            let tex = load_texture(&path).with_context(|| format!("loading {}", path.display()))?;
            bank.insert(BARREL_TEXTURE, tex)?
        }
        None => procedural_set(&mut bank)?,
    };
    Ok((bank, barrel))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let mut config = RenderConfig {
        fov: opts.fov_deg.to_radians(),
        resolution: opts.resolution,
        aspect: opts.aspect,
        wall_height: opts.wall_height,
        ambient: AMBIENT,
    };
    config.validate().context("invalid render options")?;

    log::info!("loading textures...");
    let (bank, barrel) = load_bank(opts.assets.as_ref())?;

    log::info!("initialising game world...");
    let mut level = DemoLevel::new().context("building demo level")?;
    let mut sim = TicRunner::new();
    sim.spawn_level(&level, barrel);
    let player = sim.player().context("demo level has no player start")?;

    let mut lighting = LightingCache::new();
    let mut renderer = Software::default();
    let mut pixels: Vec<u32> = Vec::new();

    let mut win = Window::new(
        "tilecaster",
        opts.width,
        opts.height,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    let mut limited = true;
    win.set_target_fps(SIM_FPS as usize);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();
    let mut last_mouse = win.get_mouse_pos(MouseMode::Pass);

    log::info!("entering main loop");
    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now();

        /* --------------- sample input ------------------------------------- */
        let mut cmd = InputCmd::default();
        if win.is_key_down(Key::W) || win.is_key_down(Key::Up) {
            cmd.forward += 1.0;
        }
        if win.is_key_down(Key::S) || win.is_key_down(Key::Down) {
            cmd.forward -= 1.0;
        }
        if win.is_key_down(Key::D) {
            cmd.strafe += 1.0;
        }
        if win.is_key_down(Key::A) {
            cmd.strafe -= 1.0;
        }
        if win.is_key_down(Key::Right) {
            cmd.turn += 1.0;
        }
        if win.is_key_down(Key::Left) {
            cmd.turn -= 1.0;
        }
        let mouse = win.get_mouse_pos(MouseMode::Pass);
        if let (Some((x, _)), Some((old, _))) = (mouse, last_mouse) {
            cmd.mouse_dx = x - old;
        }
        last_mouse = mouse;

        let tics = sim.pump(&level.map, cmd);

        /* --------------- debug controls ----------------------------------- */
        let mut next = config;
        if win.is_key_down(Key::Comma) {
            next.fov -= FOV_STEP * tics as f32;
        }
        if win.is_key_down(Key::Period) {
            next.fov += FOV_STEP * tics as f32;
        }
        if win.is_key_pressed(Key::Minus, KeyRepeat::Yes) {
            next.resolution = next.resolution.saturating_sub(RESOLUTION_STEP).max(2);
        }
        if win.is_key_pressed(Key::Equal, KeyRepeat::Yes) {
            next.resolution += RESOLUTION_STEP;
        }
        if next != config {
            match next.validate() {
                Ok(()) => {
                    log::info!(
                        "fov {:.1}°, resolution {}x{}",
                        next.fov.to_degrees(),
                        next.columns(),
                        next.rows()
                    );
                    config = next;
                }
                Err(e) => log::debug!("ignoring setting: {e}"),
            }
        }
        if win.is_key_pressed(Key::V, KeyRepeat::No) {
            limited = !limited;
            win.set_target_fps(if limited { SIM_FPS as usize } else { 0 });
            log::info!("frame limiter {}", if limited { "on" } else { "off" });
        }

        /* --------------- lighting + draw ---------------------------------- */
        lighting.update(&mut level.map, config.ambient, collect_lights(sim.world()));
        let Some(camera) = camera_for(sim.world(), player) else {
            break;
        };
        let sprites = collect_sprites(sim.world());
        let scene = Scene {
            map: &level.map,
            sprites: &sprites,
        };

        let mut shown = Ok(());
        renderer.draw_frame(&config, &scene, &camera, &bank, |fb, w, h| {
            pixels.clear();
            pixels.extend(
                fb.chunks_exact(4)
                    .map(|p| (p[0] as u32) << 16 | (p[1] as u32) << 8 | p[2] as u32),
            );
            acc_time += t0.elapsed();
            acc_frames += 1;
            shown = win.update_with_buffer(&pixels, w, h);
        });
        shown?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames.max(1) as f64;
            log::info!("avg frame: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }

    log::info!("shutting down");
    Ok(())
}
