use cinder_geom::Vec3;

use crate::edit::HitResult;
use crate::face::Face;
use crate::world::World;

/// Longest walk a pick may take, in cells; larger reaches are cut to this.
const MAX_PICK_CELLS: f32 = 4096.0;

#[inline]
fn inv_or_max(v: f32) -> f32 {
    if v.abs() < 1e-8 { f32::MAX } else { 1.0 / v.abs() }
}

/// Face a ray moving along `d` enters a cell through when no step was taken.
fn entry_face_from_direction(d: Vec3) -> Face {
    let (ax, ay, az) = (d.x.abs(), d.y.abs(), d.z.abs());
    if ay >= ax && ay >= az {
        if d.y < 0.0 { Face::PosY } else { Face::NegY }
    } else if ax >= az {
        if d.x < 0.0 { Face::PosX } else { Face::NegX }
    } else if d.z < 0.0 {
        Face::PosZ
    } else {
        Face::NegZ
    }
}

/// Walks the grid along a ray (voxel DDA) and reports the first solid cell
/// within `max_dist` together with the face the ray entered it through.
pub fn pick(world: &World, origin: Vec3, dir: Vec3, max_dist: f32) -> Option<HitResult> {
    let len = dir.length();
    if len < 1e-6 {
        return None;
    }
    let d = dir / len;

    let mut vx = origin.x.floor() as i32;
    let mut vy = origin.y.floor() as i32;
    let mut vz = origin.z.floor() as i32;

    let stepx = if d.x > 0.0 { 1 } else if d.x < 0.0 { -1 } else { 0 };
    let stepy = if d.y > 0.0 { 1 } else if d.y < 0.0 { -1 } else { 0 };
    let stepz = if d.z > 0.0 { 1 } else if d.z < 0.0 { -1 } else { 0 };

    let invx = inv_or_max(d.x);
    let invy = inv_or_max(d.y);
    let invz = inv_or_max(d.z);
    let tdx = if stepx == 0 { f32::MAX } else { invx };
    let tdy = if stepy == 0 { f32::MAX } else { invy };
    let tdz = if stepz == 0 { f32::MAX } else { invz };

    let fx = origin.x - origin.x.floor();
    let fy = origin.y - origin.y.floor();
    let fz = origin.z - origin.z.floor();
    let mut tmx = if stepx > 0 { (1.0 - fx) * invx } else if stepx < 0 { fx * invx } else { f32::MAX };
    let mut tmy = if stepy > 0 { (1.0 - fy) * invy } else if stepy < 0 { fy * invy } else { f32::MAX };
    let mut tmz = if stepz > 0 { (1.0 - fz) * invz } else if stepz < 0 { fz * invz } else { f32::MAX };

    let mut entered = entry_face_from_direction(d);
    let mut t = 0.0f32;
    let max_steps = (max_dist.clamp(0.0, MAX_PICK_CELLS) as usize + 1) * 3;

    for _ in 0..max_steps {
        if t > max_dist {
            break;
        }
        if world.is_solid(vx, vy, vz) {
            return Some(HitResult { x: vx, y: vy, z: vz, face: entered });
        }
        if tmx < tmy {
            if tmx < tmz {
                vx += stepx;
                t = tmx;
                tmx += tdx;
                entered = if stepx > 0 { Face::NegX } else { Face::PosX };
            } else {
                vz += stepz;
                t = tmz;
                tmz += tdz;
                entered = if stepz > 0 { Face::NegZ } else { Face::PosZ };
            }
        } else if tmy < tmz {
            vy += stepy;
            t = tmy;
            tmy += tdy;
            entered = if stepy > 0 { Face::NegY } else { Face::PosY };
        } else {
            vz += stepz;
            t = tmz;
            tmz += tdz;
            entered = if stepz > 0 { Face::NegZ } else { Face::PosZ };
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looking_down_hits_top_face() {
        let w = World::new(8, 8, 6);
        let hit = pick(&w, Vec3::new(2.5, 5.5, 2.5), Vec3::new(0.0, -1.0, 0.0), 8.0).unwrap();
        assert_eq!((hit.x, hit.y, hit.z), (2, w.surface_y(), 2));
        assert_eq!(hit.face, Face::PosY);
        assert_eq!(hit.adjacent(), (2, w.surface_y() + 1, 2));
    }

    #[test]
    fn looking_sideways_hits_wall_face() {
        let mut w = World::empty(8, 8, 8);
        w.set_block(5, 2, 2, crate::block::Block::SOLID);
        let hit = pick(&w, Vec3::new(1.5, 2.5, 2.5), Vec3::new(1.0, 0.0, 0.0), 8.0).unwrap();
        assert_eq!((hit.x, hit.y, hit.z, hit.face), (5, 2, 2, Face::NegX));
    }

    #[test]
    fn unbounded_reach_still_walks() {
        let w = World::new(8, 8, 6);
        let down = Vec3::new(0.0, -1.0, 0.0);
        let hit = pick(&w, Vec3::new(2.5, 5.5, 2.5), down, f32::INFINITY).unwrap();
        assert_eq!((hit.x, hit.y, hit.z), (2, w.surface_y(), 2));
        assert!(pick(&w, Vec3::new(2.5, 5.5, 2.5), Vec3::new(0.0, 1.0, 0.0), f32::MAX).is_none());
    }

    #[test]
    fn range_and_zero_direction_miss() {
        let w = World::new(8, 8, 6);
        assert!(pick(&w, Vec3::new(2.5, 5.5, 2.5), Vec3::new(0.0, -1.0, 0.0), 0.2).is_none());
        assert!(pick(&w, Vec3::new(2.5, 5.5, 2.5), Vec3::ZERO, 8.0).is_none());
    }
}
