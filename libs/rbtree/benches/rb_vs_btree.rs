use std::collections::BTreeSet;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SliceRandom;
use rbtree::RBTree;

fn rb(inserts: &[usize], deletes: &[usize]) {
    let mut tree: RBTree<usize> = RBTree::with_capacity(inserts.len());

    for i in inserts {
        tree.insert(*i);
    }

    for i in deletes {
        tree.remove(i);
    }
}

fn btree(inserts: &[usize], deletes: &[usize]) {
    let mut tree = BTreeSet::new();

    for i in inserts {
        tree.insert(*i);
    }

    for i in deletes {
        tree.remove(i);
    }
}

fn bench_inserts_deletes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insertions & Deletions");
    let mut rng = rand::rng();

    for size in [100, 1_000, 10_000] {
        let mut nums = (0..size).collect::<Vec<_>>();
        nums.shuffle(&mut rng);
        let inserts = nums.clone();
        nums.shuffle(&mut rng);
        let deletes = nums;

        group.bench_with_input(BenchmarkId::new("RBTree", size), &size, |b, _| {
            b.iter(|| rb(&inserts, &deletes));
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |b, _| {
            b.iter(|| btree(&inserts, &deletes));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");
    let mut rng = rand::rng();

    for size in [100, 1_000, 10_000] {
        let mut nums = (0..size).collect::<Vec<_>>();
        nums.shuffle(&mut rng);

        let rb_tree: RBTree<usize> = nums.iter().copied().collect();
        let btree: BTreeSet<usize> = nums.iter().copied().collect();
        nums.shuffle(&mut rng);

        group.bench_with_input(BenchmarkId::new("RBTree", size), &size, |b, _| {
            b.iter(|| {
                for i in &nums {
                    black_box(rb_tree.get(i));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |b, _| {
            b.iter(|| {
                for i in &nums {
                    black_box(btree.get(i));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_inserts_deletes, bench_search);
criterion_main!(benches);
