use cinder_geom::{Aabb, EPSILON, Vec3};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f32> {
    -64.0f32..64.0
}

fn extent() -> impl Strategy<Value = f32> {
    0.05f32..4.0
}

fn delta() -> impl Strategy<Value = f32> {
    -8.0f32..8.0
}

fn arb_box() -> impl Strategy<Value = Aabb> {
    (coord(), coord(), coord(), extent(), extent(), extent()).prop_map(|(x, y, z, w, h, d)| {
        Aabb::new(Vec3::new(x, y, z), Vec3::new(x + w, y + h, z + d))
    })
}

fn cell() -> impl Strategy<Value = (i32, i32, i32)> {
    (-64i32..64, -64i32..64, -64i32..64)
}

proptest! {
    // Clipping never lengthens a move against a cube the box starts outside of
    #[test]
    fn clip_is_bounded_by_request(b in arb_box(), (cx, cy, cz) in cell(), d in delta()) {
        let cube = Aabb::cube(cx, cy, cz);
        prop_assume!(!cube.intersects(&b));
        for clipped in [cube.clip_x_collide(&b, d), cube.clip_y_collide(&b, d), cube.clip_z_collide(&b, d)] {
            if d >= 0.0 {
                prop_assert!(clipped <= d);
            } else {
                prop_assert!(clipped >= d);
            }
        }
    }

    // A box clear of the cube by more than EPSILON stays clear after a clipped Y move
    #[test]
    fn clipped_y_move_never_penetrates(b in arb_box(), (cx, cy, cz) in cell(), d in delta()) {
        let cube = Aabb::cube(cx, cy, cz);
        let gap_below = cube.min.y - b.max.y;
        let gap_above = b.min.y - cube.max.y;
        prop_assume!(gap_below > EPSILON || gap_above > EPSILON);
        let dy = cube.clip_y_collide(&b, d);
        let mut moved = b;
        moved.translate(Vec3::new(0.0, dy, 0.0));
        prop_assert!(!cube.intersects(&moved));
    }

    // Expanding by a delta covers both the start box and the translated box
    #[test]
    fn expand_covers_swept_volume(b in arb_box(), dx in delta(), dy in delta(), dz in delta()) {
        let d = Vec3::new(dx, dy, dz);
        let swept = b.expand(d);
        let mut end = b;
        end.translate(d);
        for probe in [b, end] {
            prop_assert!(swept.min.x <= probe.min.x + 1e-4 && swept.max.x >= probe.max.x - 1e-4);
            prop_assert!(swept.min.y <= probe.min.y + 1e-4 && swept.max.y >= probe.max.y - 1e-4);
            prop_assert!(swept.min.z <= probe.min.z + 1e-4 && swept.max.z >= probe.max.z - 1e-4);
        }
    }
}
