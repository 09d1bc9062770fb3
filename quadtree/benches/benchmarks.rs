use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::{QuadTree, Rect, TreeItem, NOT_INSERTED};
use rand::prelude::*;

struct Entity {
    index: i32,
}

impl Entity {
    fn new() -> Self {
        Self {
            index: NOT_INSERTED,
        }
    }
}

impl TreeItem for Entity {
    fn tree_index(&self) -> i32 {
        self.index
    }

    fn set_tree_index(&mut self, index: i32) {
        self.index = index;
    }
}

const BOUNDS: Rect<f32> = Rect {
    min_x: 0.0,
    min_y: 0.0,
    max_x: 1000.0,
    max_y: 1000.0,
};

fn populated(count: usize, rng: &mut StdRng) -> (QuadTree<Entity, f32>, Vec<u32>) {
    let mut quadtree = QuadTree::new(1000.0, 1000.0, 8, 8, count).unwrap();
    let mut indices = Vec::with_capacity(count);
    for _ in 0..count {
        let rect = Rect::random_inside(&BOUNDS, 10.0, rng);
        indices.push(quadtree.insert(rect, Entity::new()).unwrap());
    }
    (quadtree, indices)
}

fn insert_remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let (mut quadtree, _) = populated(10_000, &mut rng);

    c.bench_function("quadtree_insert_remove", |b| {
        b.iter(|| {
            let rect = Rect::random_inside(&BOUNDS, 10.0, &mut rng);
            let index = quadtree.insert(black_box(rect), Entity::new()).unwrap();
            quadtree.remove(black_box(index)).unwrap();
        })
    });
}

fn relocate_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let (mut quadtree, indices) = populated(10_000, &mut rng);

    c.bench_function("quadtree_relocate", |b| {
        b.iter(|| {
            let index = indices[rng.gen_range(0..indices.len())];
            let rect = Rect::random_inside(&BOUNDS, 10.0, &mut rng);
            quadtree.relocate(black_box(index), rect).unwrap();
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let (quadtree, _) = populated(10_000, &mut rng);
    let mut out = Vec::new();

    c.bench_function("quadtree_query_indices", |b| {
        b.iter(|| {
            out.clear();
            let rect = Rect::random_inside(&BOUNDS, 50.0, &mut rng);
            quadtree.query_indices(black_box(rect), &mut out).unwrap();
            black_box(out.len());
        })
    });

    c.bench_function("quadtree_walk_count", |b| {
        b.iter(|| {
            let rect = Rect::random_inside(&BOUNDS, 50.0, &mut rng);
            let mut hits = 0u32;
            quadtree
                .walk(black_box(rect), |_, _| {
                    hits += 1;
                    true
                })
                .unwrap();
            black_box(hits);
        })
    });
}

fn cleanup_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);

    c.bench_function("quadtree_fill_drain_compact", |b| {
        b.iter(|| {
            let (mut quadtree, indices) = populated(1_000, &mut rng);
            for index in indices {
                quadtree.remove(index).unwrap();
            }
            black_box(quadtree.compact());
        })
    });
}

criterion_group!(
    benches,
    insert_remove_benchmark,
    relocate_benchmark,
    query_benchmark,
    cleanup_benchmark
);
criterion_main!(benches);
