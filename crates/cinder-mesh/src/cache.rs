use hashbrown::{HashMap, HashSet};

use cinder_world::{World, WorldListener};

use crate::tesselator::{BatchSink, Tesselator};
use crate::tile::{Tile, tessellate_block};

/// Edge length of a mesh chunk in cells.
pub const CHUNK_SIZE: i32 = 16;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    /// Chunk holding cell `(x, y, z)`.
    #[inline]
    pub fn containing(x: i32, y: i32, z: i32) -> Self {
        Self::new(
            x.div_euclid(CHUNK_SIZE),
            y.div_euclid(CHUNK_SIZE),
            z.div_euclid(CHUNK_SIZE),
        )
    }
}

/// Chunked view of a world's geometry that tracks which chunks are stale.
///
/// Register it as a world listener; edits mark chunks dirty and
/// `rebuild_dirty` re-tessellates them in bounded steps.
pub struct ChunkCache {
    dims: (i32, i32, i32),
    chunks: (i32, i32, i32),
    dirty: HashSet<ChunkCoord>,
    // vertices emitted per layer on the last rebuild of each chunk
    layer_vertices: HashMap<ChunkCoord, [usize; 2]>,
    rebuilds: u64,
}

impl ChunkCache {
    /// Covers `world` with chunks, all initially dirty.
    pub fn new(world: &World) -> Self {
        let dims = (
            world.width() as i32,
            world.depth() as i32,
            world.height() as i32,
        );
        let per_axis = |n: i32| (n + CHUNK_SIZE - 1) / CHUNK_SIZE;
        let mut cache = Self {
            dims,
            chunks: (per_axis(dims.0), per_axis(dims.1), per_axis(dims.2)),
            dirty: HashSet::new(),
            layer_vertices: HashMap::new(),
            rebuilds: 0,
        };
        cache.mark_all_dirty();
        log::debug!(
            target: "mesh",
            "chunk cache {}x{}x{} chunks",
            cache.chunks.0,
            cache.chunks.1,
            cache.chunks.2
        );
        cache
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        (self.chunks.0 * self.chunks.1 * self.chunks.2) as usize
    }

    #[inline]
    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    #[inline]
    pub fn is_dirty(&self, c: ChunkCoord) -> bool {
        self.dirty.contains(&c)
    }

    /// Total chunk rebuilds performed.
    #[inline]
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    pub fn layer_vertices(&self, c: ChunkCoord) -> Option<[usize; 2]> {
        self.layer_vertices.get(&c).copied()
    }

    pub fn mark_all_dirty(&mut self) {
        for cx in 0..self.chunks.0 {
            for cy in 0..self.chunks.1 {
                for cz in 0..self.chunks.2 {
                    self.dirty.insert(ChunkCoord::new(cx, cy, cz));
                }
            }
        }
    }

    /// Marks every chunk touching the inclusive cell range; cells outside the
    /// world are clamped away.
    pub fn mark_dirty(&mut self, x0: i32, y0: i32, z0: i32, x1: i32, y1: i32, z1: i32) {
        let lo = ChunkCoord::containing(x0, y0, z0);
        let hi = ChunkCoord::containing(x1, y1, z1);
        let cx0 = lo.cx.max(0);
        let cy0 = lo.cy.max(0);
        let cz0 = lo.cz.max(0);
        let cx1 = hi.cx.min(self.chunks.0 - 1);
        let cy1 = hi.cy.min(self.chunks.1 - 1);
        let cz1 = hi.cz.min(self.chunks.2 - 1);
        for cx in cx0..=cx1 {
            for cy in cy0..=cy1 {
                for cz in cz0..=cz1 {
                    self.dirty.insert(ChunkCoord::new(cx, cy, cz));
                }
            }
        }
    }

    /// Rebuilds up to `budget` dirty chunks, lowest coordinates first. Each
    /// rebuild emits layer 0 then layer 1 as separate batches. Returns how
    /// many chunks were rebuilt.
    pub fn rebuild_dirty<S: BatchSink>(
        &mut self,
        world: &World,
        t: &mut Tesselator<S>,
        budget: usize,
    ) -> usize {
        if budget == 0 || self.dirty.is_empty() {
            return 0;
        }
        let mut pending: Vec<ChunkCoord> = self.dirty.iter().copied().collect();
        pending.sort_unstable();
        pending.truncate(budget);
        for c in &pending {
            self.dirty.remove(c);
            let counts = [self.build_layer(world, t, *c, 0), self.build_layer(world, t, *c, 1)];
            self.layer_vertices.insert(*c, counts);
            self.rebuilds += 1;
        }
        log::trace!(
            target: "mesh",
            "rebuilt {} chunks, {} still dirty",
            pending.len(),
            self.dirty.len()
        );
        pending.len()
    }

    fn build_layer<S: BatchSink>(
        &self,
        world: &World,
        t: &mut Tesselator<S>,
        c: ChunkCoord,
        layer: u8,
    ) -> usize {
        let x0 = c.cx * CHUNK_SIZE;
        let y0 = c.cy * CHUNK_SIZE;
        let z0 = c.cz * CHUNK_SIZE;
        let x1 = (x0 + CHUNK_SIZE).min(self.dims.0);
        let y1 = (y0 + CHUNK_SIZE).min(self.dims.1);
        let z1 = (z0 + CHUNK_SIZE).min(self.dims.2);

        t.begin_batch();
        let mut faces = 0;
        for x in x0..x1 {
            for y in y0..y1 {
                for z in z0..z1 {
                    if world.is_solid(x, y, z) {
                        let tile = Tile::for_cell(world, y);
                        faces += tessellate_block(t, world, layer, x, y, z, tile);
                    }
                }
            }
        }
        t.flush();
        faces * 4
    }
}

impl WorldListener for ChunkCache {
    fn all_changed(&mut self) {
        self.mark_all_dirty();
    }

    fn light_column_changed(&mut self, x: i32, z: i32, y0: i32, y1: i32) {
        self.mark_dirty(x - 1, y0 - 1, z - 1, x + 1, y1 + 1, z + 1);
    }

    fn block_changed(&mut self, x: i32, y: i32, z: i32) {
        self.mark_dirty(x - 1, y - 1, z - 1, x + 1, y + 1, z + 1);
    }
}
