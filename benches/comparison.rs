//! Benchmark comparison between `BitSet`, bitvec and `BTreeSet`

use bitvec::prelude::*;
use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dense_bitset::BitSet;
use std::collections::BTreeSet;

const SIZES: &[usize] = &[100, 1000, 10000, 100_000];

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for &size in SIZES {
        group.throughput(Throughput::Elements(100));

        // Sparse pattern spread over the whole range
        let indices: Vec<usize> = (0..size).step_by(size / 100).take(100).collect();

        group.bench_with_input(BenchmarkId::new("BitSet", size), &indices, |b, indices| {
            b.iter(|| {
                let mut set = BitSet::new();
                for &i in indices {
                    set.add(i as isize);
                }
                black_box(&set);
            });
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &indices, |b, indices| {
            b.iter(|| {
                let mut bitvec = BitVec::<u64, Lsb0>::new();
                for &i in indices {
                    if i >= bitvec.len() {
                        bitvec.resize(i + 1, false);
                    }
                    bitvec.set(i, true);
                }
                black_box(&bitvec);
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &indices, |b, indices| {
            b.iter(|| {
                let set: BTreeSet<usize> = indices.iter().copied().collect();
                black_box(&set);
            });
        });
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for &size in SIZES {
        group.throughput(Throughput::Elements(1000));

        let mut set = BitSet::new();
        let mut bv = BitVec::<u64, Lsb0>::new();
        bv.resize(size, false);
        let mut tree = BTreeSet::new();

        for i in (0..size).step_by(3) {
            set.add(i as isize);
            bv.set(i, true);
            tree.insert(i);
        }

        let probes: Vec<usize> = (0..1000).map(|i| (i * 7) % size).collect();

        group.bench_with_input(
            BenchmarkId::new("BitSet", size),
            &(&set, &probes),
            |b, (set, probes)| {
                b.iter(|| probes.iter().filter(|&&i| set.contains(i as isize)).count());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BitVec", size),
            &(&bv, &probes),
            |b, (bitvec, probes)| {
                b.iter(|| probes.iter().filter(|&&i| bitvec[i]).count());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &(&tree, &probes),
            |b, (tree, probes)| {
                b.iter(|| probes.iter().filter(|&&i| tree.contains(&i)).count());
            },
        );
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for &size in SIZES {
        let mut set = BitSet::new();
        let mut bv = BitVec::<u64, Lsb0>::new();
        bv.resize(size, false);

        // Every 10th element
        for i in (0..size).step_by(10) {
            set.add(i as isize);
            bv.set(i, true);
        }

        group.throughput(Throughput::Elements((size / 10) as u64));

        group.bench_with_input(BenchmarkId::new("BitSet", size), &set, |b, set| {
            b.iter(|| {
                let sum: isize = set.iter().sum();
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &bv, |b, bitvec| {
            b.iter(|| {
                let sum: usize = bitvec.iter_ones().sum();
                black_box(sum);
            });
        });
    }

    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");

    for &size in SIZES {
        let mut set = BitSet::new();
        set.add_range(0, size as isize);
        set.delete_range(size as isize / 4, size as isize / 2);

        let mut bv = BitVec::<u64, Lsb0>::repeat(true, size);
        bv[size / 4..size / 2].fill(false);

        group.bench_with_input(BenchmarkId::new("BitSet", size), &set, |b, set| {
            b.iter(|| black_box(set.len()));
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &bv, |b, bitvec| {
            b.iter(|| black_box(bitvec.count_ones()));
        });
    }

    group.finish();
}

fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");

    for &size in SIZES {
        let mut a = BitSet::new();
        let mut b_set = BitSet::new();
        let mut ta = BTreeSet::new();
        let mut tb = BTreeSet::new();
        for i in 0..size {
            if i % 3 == 0 {
                a.add(i as isize);
                ta.insert(i);
            }
            if i % 5 == 0 {
                b_set.add(i as isize);
                tb.insert(i);
            }
        }

        group.bench_with_input(
            BenchmarkId::new("BitSet", size),
            &(&a, &b_set),
            |bench, (a, b)| {
                bench.iter(|| black_box(*a | *b));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &(&ta, &tb),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.union(b).count()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add,
    bench_contains,
    bench_iteration,
    bench_count,
    bench_union,
);
criterion_main!(benches);
