use std::cell::RefCell;
use std::rc::Rc;

use cinder_geom::Aabb;

use crate::block::Block;
use crate::listener::{ListenerId, ListenerRegistry, WorldChange, WorldListener};

#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("block data holds {got} cells, world needs {expected}")]
    SizeMismatch { expected: usize, got: usize },
}

/// Fixed-size dense block grid.
///
/// Axes: `width` runs along X, `height` along Z and `depth` along Y.
/// Cells are stored at `(y * height + z) * width + x`; the save format
/// depends on this order.
pub struct World {
    width: usize,
    height: usize,
    depth: usize,
    blocks: Vec<u8>,
    pub(crate) light_depths: Vec<i32>,
    pub(crate) listeners: ListenerRegistry,
}

impl World {
    /// Creates a world with the lower two thirds of the depth range solid.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        let mut world = Self::empty(width, height, depth);
        let surface = world.surface_y();
        for y in 0..depth {
            if y as i32 > surface {
                break;
            }
            let row = world.index(0, y, 0);
            world.blocks[row..row + width * height].fill(Block::SOLID.0);
        }
        world.recompute_light_columns(0, 0, width as i32, height as i32);
        log::debug!(
            target: "world",
            "generated {}x{}x{} world, surface at y={}",
            width,
            height,
            depth,
            surface
        );
        world
    }

    /// Creates a world with every cell empty.
    pub fn empty(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            blocks: vec![Block::AIR.0; width * height * depth],
            light_depths: vec![0; width * height],
            listeners: ListenerRegistry::default(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn volume(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// Highest y filled by the generator; the grass layer.
    #[inline]
    pub fn surface_y(&self) -> i32 {
        (self.depth * 2 / 3) as i32
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.height + z) * self.width + x
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.width
            && (y as usize) < self.depth
            && (z as usize) < self.height
    }

    /// Cell contents; empty outside the grid.
    #[inline]
    pub fn block(&self, x: i32, y: i32, z: i32) -> Block {
        if !self.contains(x, y, z) {
            return Block::AIR;
        }
        Block(self.blocks[self.index(x as usize, y as usize, z as usize)])
    }

    #[inline]
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.block(x, y, z).is_solid()
    }

    #[inline]
    pub fn is_light_blocker(&self, x: i32, y: i32, z: i32) -> bool {
        self.block(x, y, z).blocks_light()
    }

    /// Writes one cell, refreshes its light column and notifies listeners.
    /// Coordinates outside the grid are ignored.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: Block) {
        if !self.contains(x, y, z) {
            return;
        }
        let i = self.index(x as usize, y as usize, z as usize);
        self.blocks[i] = block.0;
        self.recompute_light_columns(x, z, 1, 1);
        self.listeners
            .dispatch(&WorldChange::BlockChanged { x, y, z });
    }

    /// Unit cubes of every solid cell touched by `area`, in x, y, z scan order.
    ///
    /// Each max bound is widened by one cell before truncation so boxes ending
    /// exactly on a cell boundary still see the neighbor they are about to enter.
    pub fn cubes_overlapping(&self, area: &Aabb) -> Vec<Aabb> {
        let x0 = (area.min.x as i32).max(0);
        let y0 = (area.min.y as i32).max(0);
        let z0 = (area.min.z as i32).max(0);
        let x1 = ((area.max.x + 1.0) as i32).min(self.width as i32);
        let y1 = ((area.max.y + 1.0) as i32).min(self.depth as i32);
        let z1 = ((area.max.z + 1.0) as i32).min(self.height as i32);

        let mut out = Vec::new();
        for x in x0..x1 {
            for y in y0..y1 {
                for z in z0..z1 {
                    if self.is_solid(x, y, z) {
                        out.push(Aabb::cube(x, y, z));
                    }
                }
            }
        }
        out
    }

    /// Raw cells in storage order.
    #[inline]
    pub fn blocks(&self) -> &[u8] {
        &self.blocks
    }

    /// Replaces every cell from a flat dump, relights the whole grid and
    /// tells listeners everything changed. The grid is untouched on error.
    pub fn load_blocks(&mut self, data: &[u8]) -> Result<(), WorldError> {
        if data.len() != self.blocks.len() {
            return Err(WorldError::SizeMismatch {
                expected: self.blocks.len(),
                got: data.len(),
            });
        }
        self.blocks.copy_from_slice(data);
        self.recompute_light_columns(0, 0, self.width as i32, self.height as i32);
        self.listeners.dispatch(&WorldChange::AllChanged);
        log::debug!(target: "world", "loaded {} cells", data.len());
        Ok(())
    }

    pub fn add_listener<L: WorldListener + 'static>(&mut self, listener: &Rc<RefCell<L>>) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinder_geom::Vec3;

    #[test]
    fn index_matches_storage_stride() {
        let w = World::empty(5, 3, 4);
        assert_eq!(w.index(0, 0, 0), 0);
        assert_eq!(w.index(1, 0, 0), 1);
        assert_eq!(w.index(0, 0, 1), 5);
        assert_eq!(w.index(0, 1, 0), 15);
        assert_eq!(w.index(4, 3, 2), (3 * 3 + 2) * 5 + 4);
    }

    #[test]
    fn generator_fills_lower_two_thirds() {
        let w = World::new(4, 4, 6);
        assert_eq!(w.surface_y(), 4);
        for y in 0..6 {
            assert_eq!(w.is_solid(2, y, 1), y <= 4, "y={}", y);
        }
    }

    #[test]
    fn cubes_overlapping_clamps_and_scans_in_order() {
        let mut w = World::empty(4, 4, 4);
        w.set_block(0, 0, 0, Block::SOLID);
        w.set_block(0, 0, 1, Block::SOLID);
        w.set_block(1, 0, 0, Block::SOLID);
        let area = Aabb::new(Vec3::new(-3.0, -3.0, -3.0), Vec3::new(1.5, 0.5, 1.5));
        let cubes = w.cubes_overlapping(&area);
        assert_eq!(
            cubes,
            vec![Aabb::cube(0, 0, 0), Aabb::cube(0, 0, 1), Aabb::cube(1, 0, 0)]
        );
    }

    #[test]
    fn load_rejects_wrong_length_without_touching_cells() {
        let mut w = World::new(4, 4, 4);
        let before = w.blocks().to_vec();
        let err = w.load_blocks(&[0u8; 7]).unwrap_err();
        assert!(matches!(err, WorldError::SizeMismatch { expected: 64, got: 7 }));
        assert_eq!(w.blocks(), &before[..]);
    }
}
