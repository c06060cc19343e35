// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the `flick_pager` integration tests.

#![allow(
    dead_code,
    missing_docs,
    reason = "Integration-test helper module; each test binary uses a subset."
)]

use flick_pager::{Carousel, CarouselConfig, PagingStrategy};
use kurbo::{Point, Size};

/// Tile and viewport size used throughout the tests.
pub(crate) const TILE: Size = Size::new(400.0, 800.0);

/// Far enough in the future for every animation to have finished.
pub(crate) const SETTLE_MS: u64 = 1_000;

pub(crate) fn images(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("img-{i}")).collect()
}

pub(crate) fn carousel_with(count: usize, config: CarouselConfig, strategy: PagingStrategy) -> Carousel {
    let mut carousel = Carousel::new(images(count), config, strategy).unwrap();
    carousel.set_viewport_size(TILE, 0);
    carousel
}

pub(crate) fn self_owned(count: usize, initial_index: usize) -> Carousel {
    carousel_with(
        count,
        CarouselConfig {
            initial_index,
            ..CarouselConfig::default()
        },
        PagingStrategy::SelfOwned,
    )
}

/// Two quick taps at `pos` starting at `start_ms`. Returns the time of the
/// last release.
pub(crate) fn double_tap(carousel: &mut Carousel, pos: Point, start_ms: u64) -> u64 {
    carousel.pointer_down(1, pos, start_ms);
    carousel.pointer_up(1, start_ms + 50);
    carousel.pointer_down(1, pos, start_ms + 150);
    carousel.pointer_up(1, start_ms + 200);
    start_ms + 200
}

/// Ticks far enough past `now_ms` for animations to land. Returns the new time.
pub(crate) fn settle(carousel: &mut Carousel, now_ms: u64) -> u64 {
    let end = now_ms + SETTLE_MS;
    carousel.tick(end);
    carousel.tick(end + 16);
    end + 16
}
