use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cinder_mesh::{Batch, ChunkCache, Tesselator};
use cinder_world::World;

fn bench_rebuild_world(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild_world");
    let world = World::new(64, 64, 64);
    group.bench_function("flat_64x64x64", |b| {
        b.iter(|| {
            let mut vertices = 0usize;
            let mut t = Tesselator::new(|batch: &Batch<'_>| vertices += batch.vertex_count);
            let mut cache = ChunkCache::new(&world);
            let n = cache.chunk_count();
            cache.rebuild_dirty(&world, &mut t, n);
            drop(t);
            black_box(vertices);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_rebuild_world);
criterion_main!(benches);
