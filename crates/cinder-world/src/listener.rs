use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// What changed in the grid. Spans are inclusive.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WorldChange {
    /// Every cell may have changed (after a load).
    AllChanged,
    /// The light depth of column `(x, z)` moved; cells in `y0..=y1` may render differently.
    LightColumnChanged { x: i32, z: i32, y0: i32, y1: i32 },
    /// A single cell was written.
    BlockChanged { x: i32, y: i32, z: i32 },
}

/// Capability implemented by anything that caches derived data from the grid.
///
/// Notifications arrive synchronously from inside the mutating call.
pub trait WorldListener {
    fn all_changed(&mut self) {}

    fn light_column_changed(&mut self, _x: i32, _z: i32, _y0: i32, _y1: i32) {}

    fn block_changed(&mut self, _x: i32, _y: i32, _z: i32) {}

    fn on_change(&mut self, change: &WorldChange) {
        match *change {
            WorldChange::AllChanged => self.all_changed(),
            WorldChange::LightColumnChanged { x, z, y0, y1 } => {
                self.light_column_changed(x, z, y0, y1)
            }
            WorldChange::BlockChanged { x, y, z } => self.block_changed(x, y, z),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

/// Ordered, non-owning set of listeners.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(ListenerId, Weak<RefCell<dyn WorldListener>>)>,
}

impl ListenerRegistry {
    pub(crate) fn add<L: WorldListener + 'static>(&mut self, listener: &Rc<RefCell<L>>) -> ListenerId {
        self.next_id = self.next_id.wrapping_add(1).max(1);
        let id = ListenerId(self.next_id);
        let weak = Rc::downgrade(listener);
        let weak: Weak<RefCell<dyn WorldListener>> = weak;
        self.entries.push((id, weak));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(eid, _)| *eid != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Delivers `change` to every live listener in registration order and
    /// drops entries whose listener no longer exists.
    pub(crate) fn dispatch(&mut self, change: &WorldChange) {
        self.entries.retain(|(id, weak)| match weak.upgrade() {
            Some(listener) => {
                listener.borrow_mut().on_change(change);
                true
            }
            None => {
                log::debug!(target: "world", "pruning dropped listener {:?}", id);
                false
            }
        });
    }
}
