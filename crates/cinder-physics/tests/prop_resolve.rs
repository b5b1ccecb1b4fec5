use cinder_geom::{Aabb, Vec3};
use cinder_physics::resolve_move;
use cinder_world::{Block, World};
use proptest::prelude::*;

fn cells() -> impl Strategy<Value = Vec<(i32, i32, i32)>> {
    prop::collection::vec((0i32..6, 0i32..6, 0i32..6), 0..12)
}

fn step() -> impl Strategy<Value = f32> {
    -0.9f32..0.9
}

fn overlaps_solid(w: &World, bb: &Aabb) -> bool {
    w.cubes_overlapping(bb).iter().any(|c| c.intersects(bb))
}

proptest! {
    // a box that starts clear never ends a move inside a solid cube
    #[test]
    fn moves_never_enter_solids(
        solids in cells(),
        cx in 0.5f32..5.5, cy in 1.0f32..5.0, cz in 0.5f32..5.5,
        dx in step(), dy in step(), dz in step(),
    ) {
        let mut w = World::empty(6, 6, 6);
        for (x, y, z) in solids {
            w.set_block(x, y, z, Block::SOLID);
        }
        let bb = Aabb::around(Vec3::new(cx, cy, cz), Vec3::new(0.3, 0.9, 0.3));
        prop_assume!(!overlaps_solid(&w, &bb));

        let r = resolve_move(&w, &bb, Vec3::new(dx, dy, dz));
        let mut moved = bb;
        moved.translate(r.delta);
        prop_assert!(!overlaps_solid(&w, &moved));
        prop_assert!(r.delta.x.abs() <= dx.abs() + 2e-3);
        prop_assert!(r.delta.y.abs() <= dy.abs() + 2e-3);
        prop_assert!(r.delta.z.abs() <= dz.abs() + 2e-3);
    }

    // nothing to do means nothing happens
    #[test]
    fn zero_displacement_is_identity(solids in cells(), cx in 0.5f32..5.5, cy in 1.0f32..5.0, cz in 0.5f32..5.5) {
        let mut w = World::empty(6, 6, 6);
        for (x, y, z) in solids {
            w.set_block(x, y, z, Block::SOLID);
        }
        let bb = Aabb::around(Vec3::new(cx, cy, cz), Vec3::new(0.3, 0.9, 0.3));
        let r = resolve_move(&w, &bb, Vec3::ZERO);
        prop_assert_eq!(r.delta, Vec3::ZERO);
        prop_assert!(!r.on_ground);
    }
}
