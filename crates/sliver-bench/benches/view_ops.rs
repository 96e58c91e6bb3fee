//! Criterion micro-benchmarks for carve, borrow, set, and fill.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sliver::{SliceView, SliceViewMut};
use sliver_bench::make_region;

const ELEMENT_SIZES: [usize; 3] = [1, 4, 16];
const REGION_BYTES: usize = 64 * 1024;

fn bench_carve(c: &mut Criterion) {
    let mut group = c.benchmark_group("carve");
    for elem_size in ELEMENT_SIZES {
        let region = make_region(REGION_BYTES);
        let len = REGION_BYTES / elem_size;
        let view = SliceView::new(&region, elem_size, len).unwrap();
        group.bench_function(format!("elem_size_{elem_size}"), |b| {
            b.iter(|| {
                let sub = view.slice(black_box(len / 4), black_box(3 * len / 4)).unwrap();
                black_box(sub.len())
            })
        });
    }
    group.finish();
}

fn bench_borrow(c: &mut Criterion) {
    let mut group = c.benchmark_group("borrow");
    for elem_size in ELEMENT_SIZES {
        let region = make_region(REGION_BYTES);
        let len = REGION_BYTES / elem_size;
        let view = SliceView::new(&region, elem_size, len).unwrap();
        group.bench_function(format!("elem_size_{elem_size}"), |b| {
            b.iter(|| {
                let el = view.borrow(black_box(len / 2)).unwrap();
                black_box(el.bytes()[0])
            })
        });
    }
    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    for elem_size in ELEMENT_SIZES {
        let mut region = make_region(REGION_BYTES);
        let len = REGION_BYTES / elem_size;
        let data = make_region(elem_size);
        let mut view = SliceViewMut::new(&mut region, elem_size, len).unwrap();
        group.bench_function(format!("elem_size_{elem_size}"), |b| {
            b.iter(|| view.set(black_box(len / 2), black_box(&data)).unwrap())
        });
    }
    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    for elem_size in ELEMENT_SIZES {
        let mut region = make_region(REGION_BYTES);
        let len = REGION_BYTES / elem_size;
        let data = make_region(elem_size);
        let mut view = SliceViewMut::new(&mut region, elem_size, len).unwrap();
        group.bench_function(format!("elem_size_{elem_size}"), |b| {
            b.iter(|| view.fill(black_box(&data)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_carve, bench_borrow, bench_set, bench_fill);
criterion_main!(benches);
