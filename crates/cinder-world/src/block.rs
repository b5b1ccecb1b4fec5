/// One grid cell. Zero is empty space; any other value is a solid block.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Block(pub u8);

impl Block {
    pub const AIR: Block = Block(0);
    pub const SOLID: Block = Block(1);

    #[inline]
    pub fn is_solid(self) -> bool {
        self.0 != 0
    }

    /// Single-material world: everything solid also blocks skylight.
    #[inline]
    pub fn blocks_light(self) -> bool {
        self.is_solid()
    }
}

impl From<u8> for Block {
    #[inline]
    fn from(v: u8) -> Self {
        Block(v)
    }
}
