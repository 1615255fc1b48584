// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery carousel navigation.
//!
//! Measures wrap-around stepping and direct thumbnail selection over a
//! large image list.

use criterion::{criterion_group, criterion_main, Criterion};
use shopfront::domain::catalog::{ImageRecord, ThumbnailLimit};
use shopfront::ui::gallery::Carousel;
use std::hint::black_box;

fn sample_carousel(count: usize) -> Carousel {
    Carousel::new(
        (0..count)
            .map(|i| ImageRecord::new(format!("https://cdn.example.com/{i}.jpg")))
            .collect(),
    )
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");
    let mut carousel = sample_carousel(500);

    group.bench_function("go_to_next", |b| {
        b.iter(|| {
            carousel.go_to_next();
            black_box(carousel.current_index());
        });
    });

    group.bench_function("go_to_previous", |b| {
        b.iter(|| {
            carousel.go_to_previous();
            black_box(carousel.current_index());
        });
    });

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");
    let mut carousel = sample_carousel(500);

    group.bench_function("select_and_list_thumbnails", |b| {
        let mut index = 0;
        b.iter(|| {
            index = (index + 7) % 520;
            black_box(carousel.select(index));
            black_box(carousel.thumbnails(ThumbnailLimit::default()).count());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_step, bench_select);
criterion_main!(benches);
