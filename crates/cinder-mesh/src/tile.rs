use cinder_world::{Brightness, Face, World};

use crate::tesselator::{BatchSink, Tesselator};

/// Tiles per row of the texture atlas.
const ATLAS_TILES: u32 = 16;
/// UV width of one atlas tile, pulled in slightly so neighbours never bleed.
const TILE_UV_SPAN: f32 = 0.062_437_5;

/// Face shade by `Face::index`: tops and bottoms full, Z sides darker, X sides darkest.
pub const FACE_SHADE: [f32; 6] = [1.0, 1.0, 0.8, 0.8, 0.6, 0.6];

// Per face, the four corners in emission order: cell-relative (x, y, z)
// offsets followed by (u, v) picks, where 0 means the low edge and 1 the high edge.
const FACE_QUADS: [[[u8; 5]; 4]; 6] = [
    // -Y
    [[0, 0, 1, 0, 1], [0, 0, 0, 0, 0], [1, 0, 0, 1, 0], [1, 0, 1, 1, 1]],
    // +Y
    [[1, 1, 1, 1, 1], [1, 1, 0, 1, 0], [0, 1, 0, 0, 0], [0, 1, 1, 0, 1]],
    // -Z
    [[0, 1, 0, 1, 0], [1, 1, 0, 0, 0], [1, 0, 0, 0, 1], [0, 0, 0, 1, 1]],
    // +Z
    [[0, 1, 1, 0, 0], [0, 0, 1, 0, 1], [1, 0, 1, 1, 1], [1, 1, 1, 1, 0]],
    // -X
    [[0, 1, 1, 1, 0], [0, 1, 0, 0, 0], [0, 0, 0, 0, 1], [0, 0, 1, 1, 1]],
    // +X
    [[1, 0, 1, 0, 1], [1, 0, 0, 1, 1], [1, 1, 0, 1, 0], [1, 1, 1, 0, 0]],
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Tile {
    Grass,
    Rock,
}

impl Tile {
    /// Grass on the generator's surface row, rock everywhere else.
    #[inline]
    pub fn for_cell(world: &World, y: i32) -> Tile {
        if y == world.surface_y() { Tile::Grass } else { Tile::Rock }
    }

    #[inline]
    pub fn atlas_slot(self) -> u32 {
        match self {
            Tile::Grass => 0,
            Tile::Rock => 1,
        }
    }

    /// Low corner `(u0, v0)` and high corner `(u1, v1)` in the atlas.
    pub fn uv_rect(self) -> [f32; 4] {
        let slot = self.atlas_slot();
        let u0 = (slot % ATLAS_TILES) as f32 / ATLAS_TILES as f32;
        let v0 = (slot / ATLAS_TILES) as f32 / ATLAS_TILES as f32;
        [u0, v0, u0 + TILE_UV_SPAN, v0 + TILE_UV_SPAN]
    }
}

/// Emits the exposed faces of cell `(x, y, z)` belonging to `layer`.
///
/// A face is exposed when its neighbour is not solid. Faces looking into lit
/// cells go to layer 0, faces looking into shadow to layer 1. Returns the
/// number of faces emitted.
pub fn tessellate_block<S: BatchSink>(
    t: &mut Tesselator<S>,
    world: &World,
    layer: u8,
    x: i32,
    y: i32,
    z: i32,
    tile: Tile,
) -> usize {
    let [u0, v0, u1, v1] = tile.uv_rect();
    let (fx, fy, fz) = (x as f32, y as f32, z as f32);
    let mut faces = 0;
    for face in Face::ALL {
        let (dx, dy, dz) = face.delta();
        let (nx, ny, nz) = (x + dx, y + dy, z + dz);
        if world.is_solid(nx, ny, nz) {
            continue;
        }
        let light = world.brightness(nx, ny, nz);
        let in_layer = match light {
            Brightness::Full => layer == 0,
            Brightness::Dim => layer == 1,
        };
        if !in_layer {
            continue;
        }
        let c = light.value() * FACE_SHADE[face.index()];
        t.color(c, c, c);
        for [cx, cy, cz, cu, cv] in FACE_QUADS[face.index()] {
            t.tex(
                if cu == 0 { u0 } else { u1 },
                if cv == 0 { v0 } else { v1 },
            );
            t.vertex(fx + cx as f32, fy + cy as f32, fz + cz as f32);
        }
        faces += 1;
    }
    faces
}
