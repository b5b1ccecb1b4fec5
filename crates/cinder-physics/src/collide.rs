use cinder_geom::{Aabb, Vec3};
use cinder_world::World;

/// Anything that can list the solid unit cubes touching an area.
pub trait CubeSource {
    fn cubes_overlapping(&self, area: &Aabb) -> Vec<Aabb>;
}

impl CubeSource for World {
    #[inline]
    fn cubes_overlapping(&self, area: &Aabb) -> Vec<Aabb> {
        World::cubes_overlapping(self, area)
    }
}

/// Outcome of one swept move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// Displacement actually applied, per axis.
    pub delta: Vec3,
    pub blocked_x: bool,
    pub blocked_y: bool,
    pub blocked_z: bool,
    /// Downward motion was stopped by something underneath.
    pub on_ground: bool,
}

/// Clips `d` against the solid cubes around `bb`, resolving Y first, then X,
/// then Z, each pass using the box already moved by the previous ones.
///
/// The candidate set is gathered once from the full swept box.
pub fn resolve_move<S: CubeSource + ?Sized>(source: &S, bb: &Aabb, d: Vec3) -> Resolution {
    let cubes = source.cubes_overlapping(&bb.expand(d));
    let mut moving = *bb;

    let mut dy = d.y;
    for c in &cubes {
        dy = c.clip_y_collide(&moving, dy);
    }
    moving.translate(Vec3::new(0.0, dy, 0.0));

    let mut dx = d.x;
    for c in &cubes {
        dx = c.clip_x_collide(&moving, dx);
    }
    moving.translate(Vec3::new(dx, 0.0, 0.0));

    let mut dz = d.z;
    for c in &cubes {
        dz = c.clip_z_collide(&moving, dz);
    }

    Resolution {
        delta: Vec3::new(dx, dy, dz),
        blocked_x: dx != d.x,
        blocked_y: dy != d.y,
        blocked_z: dz != d.z,
        on_ground: dy != d.y && d.y < 0.0,
    }
}
