// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use flick_gesture::GestureEvent;
use flick_pager::{Carousel, CarouselConfig, PagingStrategy};
use kurbo::{Point, Size, Vec2};
use std::time::Duration;

fn carousel(count: usize) -> Carousel {
    let images: Vec<String> = (0..count).map(|i| format!("img-{i}")).collect();
    let config = CarouselConfig {
        initial_index: count / 2,
        ..CarouselConfig::default()
    };
    let mut carousel = Carousel::new(images, config, PagingStrategy::SelfOwned).unwrap();
    carousel.set_viewport_size(Size::new(400.0, 800.0), 0);
    carousel
}

fn bench_pointer_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/pointer_drag");

    // A full strip drag: down, `moves` samples, up. Cost should not depend on
    // the number of tiles.
    for count in [3usize, 100, 10_000] {
        let moves = 120u64;
        group.throughput(Throughput::Elements(moves));
        group.bench_with_input(BenchmarkId::new("strip", count), &count, |b, &count| {
            b.iter_batched(
                || carousel(count),
                |mut carousel| {
                    carousel.pointer_down(1, Point::new(300.0, 400.0), 0);
                    for i in 1..=moves {
                        let x = 300.0 - i as f64;
                        carousel.pointer_move(1, Point::new(x, 400.0), i * 8);
                    }
                    carousel.pointer_up(1, moves * 8 + 8);
                    black_box(carousel.current_offset());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_zoomed_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/zoomed_pan");
    let updates = 240u64;
    group.throughput(Throughput::Elements(updates));

    // Every update measures the tile and runs the page-turn test.
    group.bench_function("dispatch", |b| {
        b.iter_batched(
            || {
                let mut carousel = carousel(5);
                carousel.dispatch(2, GestureEvent::PinchBegin, 0);
                carousel.dispatch(2, GestureEvent::PinchUpdate { scale: 2.0 }, 0);
                carousel.dispatch(2, GestureEvent::PinchEnd { cancelled: false }, 0);
                carousel
            },
            |mut carousel| {
                carousel.dispatch(2, GestureEvent::PanBegin, 0);
                for i in 0..updates {
                    let dx = -(i as f64);
                    carousel.dispatch(
                        2,
                        GestureEvent::PanUpdate {
                            translation: Vec2::new(dx, dx * 0.25),
                        },
                        i,
                    );
                }
                carousel.dispatch(
                    2,
                    GestureEvent::PanEnd {
                        velocity: Vec2::ZERO,
                        cancelled: false,
                    },
                    updates,
                );
                black_box(carousel.drain_effects());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/tick");
    group.measurement_time(Duration::from_secs(3));

    // Per-frame cost with every tile idle; scales with the tile count.
    for count in [3usize, 100, 1_000] {
        group.throughput(Throughput::Elements(count as u64));
        let mut carousel = carousel(count);
        let mut now = 0;
        group.bench_function(BenchmarkId::new("idle", count), |b| {
            b.iter(|| {
                now += 16;
                black_box(carousel.tick(now));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pointer_drag, bench_zoomed_pan, bench_tick);
criterion_main!(benches);
