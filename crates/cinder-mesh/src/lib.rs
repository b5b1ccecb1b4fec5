//! CPU-side geometry emission: batched vertex streams, block faces and the
//! chunked mesh cache that keeps them in sync with the world.
#![forbid(unsafe_code)]

mod cache;
mod tesselator;
mod tile;

pub use cache::{CHUNK_SIZE, ChunkCache, ChunkCoord};
pub use tesselator::{Batch, BatchSink, MAX_VERTICES, Primitive, Tesselator};
pub use tile::{FACE_SHADE, Tile, tessellate_block};
