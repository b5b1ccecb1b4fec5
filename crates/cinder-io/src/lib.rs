//! Flat world save format: every cell byte in storage order, gzip-wrapped.
#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use cinder_world::{World, WorldError};

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("save io: {0}")]
    Io(#[from] std::io::Error),
    #[error("save data ended after {got} of {expected} cells")]
    Truncated { expected: usize, got: usize },
    #[error(transparent)]
    World(#[from] WorldError),
}

/// Writes `blocks` gzip-compressed to `w`.
pub fn write_blocks<W: Write>(w: W, blocks: &[u8]) -> Result<(), PersistError> {
    let mut enc = GzEncoder::new(w, Compression::default());
    enc.write_all(blocks)?;
    enc.finish()?.flush()?;
    Ok(())
}

/// Reads exactly `len` cells from a gzip stream. Bytes past `len` are ignored.
pub fn read_blocks<R: Read>(r: R, len: usize) -> Result<Vec<u8>, PersistError> {
    let mut out = Vec::with_capacity(len);
    GzDecoder::new(r).take(len as u64).read_to_end(&mut out)?;
    if out.len() != len {
        return Err(PersistError::Truncated {
            expected: len,
            got: out.len(),
        });
    }
    Ok(out)
}

pub fn save_world(path: &Path, world: &World) -> Result<(), PersistError> {
    let file = File::create(path)?;
    write_blocks(BufWriter::new(file), world.blocks())?;
    log::info!(target: "io", "saved {} cells to {}", world.volume(), path.display());
    Ok(())
}

/// Replaces the world's cells with the save at `path`. The world keeps its
/// current content when anything goes wrong.
pub fn load_world(path: &Path, world: &mut World) -> Result<(), PersistError> {
    let file = File::open(path)?;
    let data = read_blocks(BufReader::new(file), world.volume())?;
    world.load_blocks(&data)?;
    log::info!(target: "io", "loaded {} cells from {}", data.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_stream_reports_counts() {
        let mut buf = Vec::new();
        write_blocks(&mut buf, &[1, 2, 3]).unwrap();
        match read_blocks(&buf[..], 5) {
            Err(PersistError::Truncated { expected, got }) => assert_eq!((expected, got), (5, 3)),
            other => panic!("unexpected {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn garbage_is_an_io_error() {
        let err = read_blocks(&b"not gzip at all"[..], 4).unwrap_err();
        assert!(matches!(err, PersistError::Io(_)));
    }
}
