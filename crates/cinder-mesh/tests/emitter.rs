use cinder_mesh::{Batch, BatchSink, MAX_VERTICES, Primitive, Tesselator};

#[derive(Default)]
struct Captured {
    batches: Vec<Owned>,
}

struct Owned {
    positions: Vec<f32>,
    tex_coords: Option<Vec<f32>>,
    colors: Option<Vec<f32>>,
    vertex_count: usize,
    primitive: Primitive,
}

impl BatchSink for Captured {
    fn submit(&mut self, b: &Batch<'_>) {
        self.batches.push(Owned {
            positions: b.positions.to_vec(),
            tex_coords: b.tex_coords.map(<[f32]>::to_vec),
            colors: b.colors.map(<[f32]>::to_vec),
            vertex_count: b.vertex_count,
            primitive: b.primitive,
        });
    }
}

#[test]
fn textured_batch_carries_one_uv_per_vertex() {
    let mut t = Tesselator::new(Captured::default());
    t.begin_batch();
    for i in 0..8 {
        t.tex(i as f32 * 0.1, 0.5);
        t.vertex(i as f32, 0.0, 0.0);
    }
    t.flush();

    let sink = t.into_sink();
    assert_eq!(sink.batches.len(), 1);
    let b = &sink.batches[0];
    assert_eq!(b.vertex_count, 8);
    assert_eq!(b.positions.len(), 24);
    assert_eq!(b.primitive, Primitive::Quads);
    let uv = b.tex_coords.as_ref().unwrap();
    assert_eq!(uv.len(), 16);
    assert_eq!(&uv[2..4], &[0.1f32, 0.5]);
    assert!(b.colors.is_none());
}

#[test]
fn untextured_batch_has_no_uvs() {
    let mut t = Tesselator::new(Captured::default());
    t.begin_batch();
    t.color(1.0, 0.0, 0.0);
    for _ in 0..4 {
        t.vertex(0.0, 1.0, 2.0);
    }
    t.flush();
    let b = &t.sink().batches[0];
    assert!(b.tex_coords.is_none());
    assert_eq!(b.colors.as_ref().unwrap(), &[1.0f32, 0.0, 0.0].repeat(4));
}

#[test]
fn reaching_the_ceiling_flushes_once() {
    let mut t = Tesselator::with_capacity(Captured::default(), 12);
    t.begin_batch();
    t.tex(0.0, 0.0);
    for i in 0..12 {
        t.vertex(i as f32, 0.0, 0.0);
    }
    assert_eq!(t.vertex_count(), 0);
    assert_eq!(t.flush_count(), 1);
    t.flush();
    assert_eq!(t.flush_count(), 1);

    t.vertex(99.0, 0.0, 0.0);
    t.flush();
    let sink = t.sink();
    assert_eq!(sink.batches.len(), 2);
    assert_eq!(sink.batches[0].vertex_count, 12);
    assert_eq!(sink.batches[1].positions, vec![99.0f32, 0.0, 0.0]);
    // texture stays enabled across the automatic flush
    assert_eq!(sink.batches[1].tex_coords.as_ref().map(Vec::len), Some(2));
}

#[test]
fn default_ceiling() {
    let t = Tesselator::new(Captured::default());
    assert_eq!(t.capacity(), MAX_VERTICES);
}
