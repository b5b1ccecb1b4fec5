/// The six axis-aligned faces of a grid cell.
///
/// Discriminants follow the tessellation order used by the mesher and the
/// numbering pick collaborators report for a hit face.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    NegY = 0,
    PosY = 1,
    NegZ = 2,
    PosZ = 3,
    NegX = 4,
    PosX = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::NegY,
        Face::PosY,
        Face::NegZ,
        Face::PosZ,
        Face::NegX,
        Face::PosX,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::NegY => (0, -1, 0),
            Face::PosY => (0, 1, 0),
            Face::NegZ => (0, 0, -1),
            Face::PosZ => (0, 0, 1),
            Face::NegX => (-1, 0, 0),
            Face::PosX => (1, 0, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::NegY => Face::PosY,
            Face::PosY => Face::NegY,
            Face::NegZ => Face::PosZ,
            Face::PosZ => Face::NegZ,
            Face::NegX => Face::PosX,
            Face::PosX => Face::NegX,
        }
    }
}
