use crate::block::Block;
use crate::face::Face;
use crate::world::World;

/// A targeted cell and the face the pick ray entered through.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HitResult {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub face: Face,
}

impl HitResult {
    /// Cell a new block goes into when placed against the hit face.
    #[inline]
    pub fn adjacent(&self) -> (i32, i32, i32) {
        let (dx, dy, dz) = self.face.delta();
        (self.x + dx, self.y + dy, self.z + dz)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Edit {
    Remove(HitResult),
    Place(HitResult, Block),
}

impl World {
    /// Routes a pick-driven edit through `set_block`.
    pub fn apply_edit(&mut self, edit: Edit) {
        match edit {
            Edit::Remove(hit) => {
                log::debug!(target: "edit", "remove ({},{},{})", hit.x, hit.y, hit.z);
                self.set_block(hit.x, hit.y, hit.z, Block::AIR);
            }
            Edit::Place(hit, block) => {
                let (x, y, z) = hit.adjacent();
                log::debug!(target: "edit", "place {:?} at ({},{},{})", block, x, y, z);
                self.set_block(x, y, z, block);
            }
        }
    }
}
