use crate::listener::WorldChange;
use crate::world::World;

/// Two-level light classification of a cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Brightness {
    /// Below the first light-blocking cell of its column.
    Dim,
    Full,
}

impl Brightness {
    /// Vertex colour multiplier used when shading faces.
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            Brightness::Dim => 0.8,
            Brightness::Full => 1.0,
        }
    }
}

impl World {
    /// Highest light-blocking y of column `(x, z)`, or 0 when the column is
    /// open or out of range.
    #[inline]
    pub fn light_depth(&self, x: i32, z: i32) -> i32 {
        if x < 0 || z < 0 || x as usize >= self.width() || z as usize >= self.height() {
            return 0;
        }
        self.light_depths[x as usize + z as usize * self.width()]
    }

    pub fn brightness(&self, x: i32, y: i32, z: i32) -> Brightness {
        if !self.contains(x, y, z) {
            return Brightness::Full;
        }
        if y < self.light_depth(x, z) {
            Brightness::Dim
        } else {
            Brightness::Full
        }
    }

    /// Rescans the columns of the `w` x `h` rectangle starting at `(x0, z0)`
    /// and reports every column whose depth moved, spanning old and new depth.
    pub fn recompute_light_columns(&mut self, x0: i32, z0: i32, w: i32, h: i32) {
        let xs = x0.max(0)..x0.saturating_add(w).min(self.width() as i32);
        let zs = z0.max(0)..z0.saturating_add(h).min(self.height() as i32);
        for x in xs {
            for z in zs.clone() {
                let i = x as usize + z as usize * self.width();
                let old = self.light_depths[i];
                let new = self.scan_column(x, z);
                self.light_depths[i] = new;
                if old != new {
                    self.listeners.dispatch(&WorldChange::LightColumnChanged {
                        x,
                        z,
                        y0: old.min(new),
                        y1: old.max(new),
                    });
                }
            }
        }
    }

    /// Walks down from the top of the column; y = 0 is never tested, so an
    /// open column and one blocked only at the floor both report 0.
    fn scan_column(&self, x: i32, z: i32) -> i32 {
        let mut y = self.depth() as i32 - 1;
        while y > 0 && !self.is_light_blocker(x, y, z) {
            y -= 1;
        }
        y.max(0)
    }
}
