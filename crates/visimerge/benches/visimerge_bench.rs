//! Criterion benchmarks for the visimerge sort.
//! Focus sizes: N = 2^k segments for k in {6, 10, 14, 16}, staircase input.
//! Compares execution strategy (sequential, rayon) and layout (AoS, SoA).
//! Results land under target/criterion; to store elsewhere, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p visimerge

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use visimerge::generate::{quadrant_staircase, radial_shells, ReplayToken, ShellCfg};
use visimerge::geom2::{GeomCfg, Segment};
use visimerge::reference::brute_force;
use visimerge::viewray::ViewRay;
use visimerge::visimerge::{sort_into, visimerge_sort, Exec, Layout, SortCfg};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("visimerge");
    for &k in &[6u32, 10, 14, 16] {
        let segs: Vec<Segment<f64>> = quadrant_staircase(k);
        for (name, exec, layout) in [
            ("seq_aos", Exec::Sequential, Layout::ArrayOfStructs),
            ("par_aos", Exec::Parallel, Layout::ArrayOfStructs),
            ("seq_soa", Exec::Sequential, Layout::StructOfArrays),
            ("par_soa", Exec::Parallel, Layout::StructOfArrays),
        ] {
            let cfg = SortCfg {
                geom: GeomCfg::default(),
                exec,
                layout,
            };
            group.bench_with_input(BenchmarkId::new(name, 1usize << k), &segs, |b, segs| {
                b.iter(|| visimerge_sort(segs, cfg).unwrap())
            });
        }

        // Preallocated buffers: sort cost without allocation.
        group.bench_with_input(BenchmarkId::new("sort_into", 1usize << k), &segs, |b, segs| {
            let n = 2 * segs.len();
            b.iter_batched(
                || (vec![ViewRay::default(); n], vec![ViewRay::default(); n]),
                |(mut out, mut scratch)| {
                    sort_into(segs, &mut out, &mut scratch, Exec::Sequential, GeomCfg::default())
                        .unwrap();
                    out
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_single_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("visimerge_f32");
    for &k in &[10u32, 14] {
        let segs: Vec<Segment<f32>> = quadrant_staircase(k);
        let cfg = SortCfg {
            exec: Exec::Parallel,
            ..SortCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("par_aos", 1usize << k), &segs, |b, segs| {
            b.iter(|| visimerge_sort(segs, cfg).unwrap())
        });
    }
    group.finish();
}

fn bench_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference");
    for &count in &[16usize, 64, 256] {
        let segs: Vec<Segment<f64>> = radial_shells(
            ShellCfg {
                count,
                ..ShellCfg::default()
            },
            ReplayToken::new(43),
        );
        group.bench_with_input(BenchmarkId::new("brute_force", count), &segs, |b, segs| {
            b.iter(|| brute_force(segs, GeomCfg::default()))
        });
        group.bench_with_input(BenchmarkId::new("visimerge", count), &segs, |b, segs| {
            b.iter(|| visimerge_sort(segs, SortCfg::default()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_single_precision, bench_reference);
criterion_main!(benches);
