use std::cell::RefCell;
use std::rc::Rc;

use cinder_world::{Block, Brightness, World, WorldChange, WorldListener};

#[derive(Default)]
struct Recorder {
    seen: Vec<WorldChange>,
}

impl WorldListener for Recorder {
    fn on_change(&mut self, change: &WorldChange) {
        self.seen.push(*change);
    }
}

#[test]
fn raising_a_column_reports_one_light_change() {
    let mut w = World::new(4, 4, 4);
    for x in 0..4 {
        for z in 0..4 {
            assert_eq!(w.light_depth(x, z), 2);
        }
    }
    let rec = Rc::new(RefCell::new(Recorder::default()));
    w.add_listener(&rec);

    w.set_block(1, 3, 1, Block::SOLID);

    assert_eq!(w.light_depth(1, 1), 3);
    let seen = &rec.borrow().seen;
    let columns: Vec<_> = seen
        .iter()
        .filter(|c| matches!(c, WorldChange::LightColumnChanged { .. }))
        .collect();
    assert_eq!(
        columns,
        vec![&WorldChange::LightColumnChanged { x: 1, z: 1, y0: 2, y1: 3 }]
    );
    assert_eq!(seen.last(), Some(&WorldChange::BlockChanged { x: 1, y: 3, z: 1 }));
    assert_eq!(w.brightness(1, 2, 1), Brightness::Dim);
}

#[test]
fn writes_without_light_change_only_report_the_cell() {
    let mut w = World::new(4, 4, 4);
    let rec = Rc::new(RefCell::new(Recorder::default()));
    w.add_listener(&rec);
    w.set_block(2, 0, 2, Block::AIR);
    assert_eq!(rec.borrow().seen, vec![WorldChange::BlockChanged { x: 2, y: 0, z: 2 }]);
}

#[test]
fn out_of_range_writes_are_silent() {
    let mut w = World::new(4, 4, 4);
    let rec = Rc::new(RefCell::new(Recorder::default()));
    w.add_listener(&rec);
    w.set_block(-1, 0, 0, Block::SOLID);
    w.set_block(0, 4, 0, Block::SOLID);
    w.set_block(0, 0, 4, Block::SOLID);
    assert!(rec.borrow().seen.is_empty());
    assert!(!w.is_solid(0, 4, 0));
}

#[test]
fn load_relights_then_reports_everything() {
    let mut w = World::new(4, 4, 4);
    let rec = Rc::new(RefCell::new(Recorder::default()));
    w.add_listener(&rec);

    let mut data = vec![0u8; w.volume()];
    let top = w.index(0, 3, 0);
    data[top] = 1;
    w.load_blocks(&data).unwrap();

    assert_eq!(w.light_depth(0, 0), 3);
    assert_eq!(w.light_depth(1, 1), 0);
    let seen = &rec.borrow().seen;
    assert_eq!(seen.last(), Some(&WorldChange::AllChanged));
    assert_eq!(
        seen.iter().filter(|c| matches!(c, WorldChange::LightColumnChanged { .. })).count(),
        16
    );
}

#[test]
fn listeners_fire_in_registration_order_and_can_leave() {
    let mut w = World::new(4, 4, 4);
    let log = Rc::new(RefCell::new(Vec::<&'static str>::new()));

    struct Named(&'static str, Rc<RefCell<Vec<&'static str>>>);
    impl WorldListener for Named {
        fn block_changed(&mut self, _x: i32, _y: i32, _z: i32) {
            self.1.borrow_mut().push(self.0);
        }
    }

    let a = Rc::new(RefCell::new(Named("a", log.clone())));
    let b = Rc::new(RefCell::new(Named("b", log.clone())));
    let id_a = w.add_listener(&a);
    w.add_listener(&b);
    w.set_block(0, 3, 0, Block::SOLID);
    assert_eq!(*log.borrow(), vec!["a", "b"]);

    assert!(w.remove_listener(id_a));
    drop(b);
    w.set_block(0, 3, 0, Block::AIR);
    assert_eq!(log.borrow().len(), 2);
    assert_eq!(w.listener_count(), 0);
}
