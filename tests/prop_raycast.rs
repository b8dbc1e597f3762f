use glam::Vec2;
use proptest::collection::vec;
use proptest::prelude::*;
use tilecaster::world::{EMPTY, TileId, TileMap};

/// Random interior, solid border.
fn arb_map() -> impl Strategy<Value = TileMap> {
    (3usize..14, 3usize..14)
        .prop_flat_map(|(w, h)| (Just(w), Just(h), vec(prop_oneof![3 => Just(EMPTY), 1 => 0i32..4], w * h)))
        .prop_map(|(w, h, mut walls)| {
            for y in 0..h {
                for x in 0..w {
                    if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                        walls[y * w + x] = 1;
                    }
                }
            }
            TileMap::new(w, h, &vec![0; w * h], &walls, &vec![0; w * h]).unwrap()
        })
}

fn arb_case() -> impl Strategy<Value = (TileMap, Vec2, f32)> {
    arb_map().prop_flat_map(|map| {
        let (w, h) = map.size();
        // inside the border so every ray starts in the closed box
        let origin = (1.0f32..(w - 1) as f32, 1.0f32..(h - 1) as f32).prop_map(|(x, y)| Vec2::new(x, y));
        (Just(map), origin, 0.0f32..std::f32::consts::TAU)
    })
}

/// Distance along the unit ray to the first gridline it crosses.
fn first_crossing(origin: Vec2, dir: Vec2) -> f32 {
    let axis = |o: f32, d: f32| {
        if d > 0.0 {
            (o.floor() + 1.0 - o) / d
        } else if d < 0.0 {
            (o - o.floor()) / -d
        } else {
            f32::INFINITY
        }
    };
    axis(origin.x, dir.x).min(axis(origin.y, dir.y))
}

proptest! {
    // Inside a closed box every ray stops at a solid tile on a gridline
    #[test]
    fn hit_is_solid_and_on_the_face((map, origin, angle) in arb_case()) {
        let hit = map.cast_ray(origin, angle);
        prop_assert!(hit.is_some());
        let hit = hit.unwrap();

        let tile: TileId = map.wall(hit.tile.x, hit.tile.y);
        prop_assert_ne!(tile, EMPTY);
        prop_assert!((0.0..1.0).contains(&hit.lateral), "lateral {}", hit.lateral);

        let (s, c) = angle.sin_cos();
        let p = origin + Vec2::new(c, s) * hit.distance;
        let lo = hit.tile.as_vec2() - Vec2::splat(1e-3);
        let hi = hit.tile.as_vec2() + Vec2::splat(1.0 + 1e-3);
        prop_assert!(p.cmpge(lo).all() && p.cmple(hi).all(), "impact {p} outside {:?}", hit.tile);
    }

    // The origin tile is never tested, so no hit is nearer than the first crossing
    #[test]
    fn never_nearer_than_first_crossing((map, origin, angle) in arb_case()) {
        let (s, c) = angle.sin_cos();
        if let Some(hit) = map.cast_ray(origin, angle) {
            prop_assert!(hit.distance + 1e-5 >= first_crossing(origin, Vec2::new(c, s)));
        }
    }

    // Direction length does not change the result
    #[test]
    fn direction_scale_is_irrelevant((map, origin, angle) in arb_case(), k in 0.1f32..50.0) {
        let (s, c) = angle.sin_cos();
        let a = map.cast_ray_dir(origin, Vec2::new(c, s));
        let b = map.cast_ray_dir(origin, Vec2::new(c, s) * k);
        prop_assert_eq!(a.map(|h| h.tile), b.map(|h| h.tile));
    }
}
