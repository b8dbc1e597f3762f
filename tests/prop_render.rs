use glam::Vec2;
use proptest::prelude::*;
use tilecaster::{
    assets::procedural_set,
    renderer::{RenderConfig, RendererExt, Scene, Software, SpriteInstance},
    world::{Camera, LightingSolver, TextureBank, demo::DemoLevel},
};

fn render(sw: &mut Software, cfg: &RenderConfig, scene: &Scene, cam: &Camera, bank: &TextureBank) -> Vec<u8> {
    let mut out = Vec::new();
    sw.draw_frame(cfg, scene, cam, bank, |fb, w, h| {
        assert_eq!(fb.len(), 4 * w * h);
        out = fb.to_vec();
    });
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // Switching resolution back and forth leaves no stale pixels behind
    #[test]
    fn resize_sequence_matches_fresh_render(
        rows in prop::collection::vec(2usize..120, 1..5),
        yaw in 0.0f32..std::f32::consts::TAU,
        fov in 0.2f32..1.5,
    ) {
        let mut level = DemoLevel::new().unwrap();
        LightingSolver::new().solve(&mut level.map, [0x10; 3], &level.lights);
        let mut bank = TextureBank::default();
        let barrel = procedural_set(&mut bank).unwrap();

        let sprites = [SpriteInstance { pos: Vec2::new(4.5, 2.5), z: 0.5, scale: 0.4, tex: barrel }];
        let scene = Scene { map: &level.map, sprites: &sprites };
        let cam = Camera::new(Vec2::new(2.5, 2.5), 0.5, yaw);

        let mut sw = Software::default();
        for &r in &rows {
            let cfg = RenderConfig { fov, resolution: r, ..RenderConfig::default() };
            prop_assume!(cfg.validate().is_ok());
            let frame = render(&mut sw, &cfg, &scene, &cam, &bank);
            prop_assert_eq!(frame.len(), 4 * cfg.columns() * cfg.rows());
            let fresh = render(&mut Software::default(), &cfg, &scene, &cam, &bank);
            prop_assert!(frame == fresh, "stale pixels at {} rows", r);
        }
    }
}

#[test]
fn row_resize_200_100_200() {
    let level = DemoLevel::new().unwrap();
    let mut bank = TextureBank::default();
    procedural_set(&mut bank).unwrap();
    let scene = Scene { map: &level.map, sprites: &[] };
    let cam = Camera::new(Vec2::new(2.5, 2.5), 0.5, 0.3);

    let mut sw = Software::default();
    let mut sizes = Vec::new();
    for r in [200, 100, 200] {
        let cfg = RenderConfig { resolution: r, ..RenderConfig::default() };
        let frame = render(&mut sw, &cfg, &scene, &cam, &bank);
        sizes.push(frame.len());
        assert_eq!(frame.len(), 4 * cfg.columns() * r);
    }
    assert_eq!(sizes[0], sizes[2]);
}
