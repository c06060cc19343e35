// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paging through both offset strategies.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use flick_gesture::{FlingDirection, GestureEvent};
use flick_motion::TimingSpec;
use flick_pager::{
    Carousel, CarouselConfig, ConfigError, Effect, PageDirection, PageTurn, PagingAxis,
    PagingStrategy, ScrollSurface,
};
use kurbo::{Point, Vec2};

use common::{TILE, carousel_with, double_tap, self_owned, settle};

#[derive(Default)]
struct SurfaceState {
    offset: f64,
    requests: Vec<(f64, bool)>,
}

/// Scroll surface that jumps straight to every requested offset.
#[derive(Clone, Default)]
struct TestSurface(Rc<RefCell<SurfaceState>>);

impl TestSurface {
    fn requests(&self) -> Vec<(f64, bool)> {
        self.0.borrow().requests.clone()
    }

    fn drag_to(&self, offset: f64) {
        self.0.borrow_mut().offset = offset;
    }
}

impl ScrollSurface for TestSurface {
    fn offset(&self) -> f64 {
        self.0.borrow().offset
    }

    fn scroll_to(&mut self, offset: f64, animated: bool) {
        let mut state = self.0.borrow_mut();
        state.offset = offset;
        state.requests.push((offset, animated));
    }
}

fn delegated(count: usize, initial_index: usize) -> (Carousel, TestSurface) {
    let surface = TestSurface::default();
    let carousel = carousel_with(
        count,
        CarouselConfig {
            initial_index,
            ..CarouselConfig::default()
        },
        PagingStrategy::Delegated(Box::new(surface.clone())),
    );
    (carousel, surface)
}

#[test]
fn delegated_surface_starts_at_initial_page() {
    let (carousel, surface) = delegated(4, 2);
    assert_eq!(surface.requests(), [(800.0, false)]);
    assert_eq!(carousel.current_page(), 2);
    assert!(!carousel.axis().is_self_owned());
}

#[test]
fn delegated_fling_requests_snapped_offsets() {
    let (mut carousel, surface) = delegated(4, 1);
    // The surface was dragged a little before the fling.
    surface.drag_to(430.0);

    carousel.pointer_down(1, Point::new(300.0, 400.0), 0);
    carousel.pointer_move(1, Point::new(200.0, 400.0), 16);
    carousel.pointer_move(1, Point::new(100.0, 400.0), 32);
    carousel.pointer_up(1, 40);

    assert_eq!(surface.requests().last(), Some(&(800.0, true)));
    assert_eq!(
        carousel.drain_effects(),
        [Effect::PageTurn(PageTurn { from: 1, to: 2 })]
    );
    // The tile itself never moved.
    assert_eq!(carousel.tile_transform(1).unwrap().translation, Vec2::ZERO);
}

#[test]
fn delegated_slow_drag_leaves_paging_to_the_surface() {
    let (mut carousel, surface) = delegated(4, 1);
    carousel.pointer_down(1, Point::new(300.0, 400.0), 0);
    carousel.pointer_move(1, Point::new(280.0, 400.0), 200);
    carousel.pointer_move(1, Point::new(260.0, 400.0), 400);
    carousel.pointer_up(1, 600);
    assert_eq!(surface.requests().len(), 1);
    assert!(carousel.drain_effects().is_empty());
    assert_eq!(carousel.tile_transform(1).unwrap().translation, Vec2::ZERO);
}

#[test]
fn delegated_zoomed_pan_triggers_surface_scroll() {
    let (mut carousel, surface) = delegated(3, 1);
    let t = double_tap(&mut carousel, Point::new(200.0, 400.0), 0);
    let t = settle(&mut carousel, t);
    carousel.drain_effects();

    carousel.pointer_down(1, Point::new(100.0, 400.0), t);
    carousel.pointer_move(1, Point::new(400.0, 400.0), t + 16);
    assert_eq!(surface.requests().last(), Some(&(0.0, true)));
    assert_eq!(
        carousel.drain_effects(),
        [Effect::PageTurn(PageTurn { from: 1, to: 0 })]
    );
}

#[test]
fn fling_is_ignored_while_zoomed() {
    let (mut carousel, surface) = delegated(3, 1);
    let t = double_tap(&mut carousel, Point::new(200.0, 400.0), 0);
    let t = settle(&mut carousel, t);
    carousel.dispatch(1, GestureEvent::Fling(FlingDirection::Left), t);
    assert_eq!(surface.requests().len(), 1);
}

#[test]
fn self_owned_turns_animate_the_shared_offset() {
    let mut carousel = self_owned(3, 0);
    carousel.request_page_turn(PageDirection::Forward, 0);
    carousel.tick(150);
    let mid = carousel.current_offset();
    assert!(mid > 0.0 && mid < 400.0);
    settle(&mut carousel, 150);
    assert_eq!(carousel.current_offset(), 400.0);
    assert_eq!(carousel.current_page(), 1);
}

#[test]
fn self_owned_strip_drag_is_exclusive_and_commits() {
    let mut carousel = self_owned(3, 1);
    carousel.pointer_down(1, Point::new(200.0, 400.0), 0);
    carousel.pointer_move(1, Point::new(100.0, 400.0), 16);
    assert_eq!(carousel.debug_info().lease_holder, Some(1));
    assert_eq!(carousel.current_offset(), 500.0);
    carousel.pointer_up(1, 32);
    assert_eq!(carousel.debug_info().lease_holder, None);

    // The next drag starts from the committed offset.
    carousel.pointer_down(1, Point::new(200.0, 400.0), 100);
    carousel.pointer_move(1, Point::new(150.0, 400.0), 116);
    assert_eq!(carousel.current_offset(), 550.0);
    carousel.pointer_up(1, 132);
}

#[test]
fn only_one_lease_at_a_time() {
    let mut axis = PagingAxis::new(PagingStrategy::SelfOwned, 3, 0.2, TimingSpec::default());
    axis.set_extent(400.0, 0);
    let first = axis.acquire_offset(0).unwrap();
    assert!(axis.acquire_offset(1).is_none());
    axis.release_offset(first);
    assert!(axis.acquire_offset(1).is_some());
}

#[test]
fn scroll_to_page_clamps_and_reports() {
    let mut carousel = self_owned(4, 0);
    assert_eq!(
        carousel.scroll_to_page(10, true, 0),
        Some(PageTurn { from: 0, to: 3 })
    );
    settle(&mut carousel, 0);
    assert_eq!(carousel.current_page(), 3);
    assert_eq!(carousel.scroll_to_page(3, true, 2_000), None);
}

#[test]
fn margin_extends_the_page_step() {
    let mut carousel = carousel_with(
        3,
        CarouselConfig {
            tile_margin: 16.0,
            ..CarouselConfig::default()
        },
        PagingStrategy::SelfOwned,
    );
    carousel.request_page_turn(PageDirection::Forward, 0);
    settle(&mut carousel, 0);
    assert_eq!(carousel.current_offset(), 416.0);
    assert_eq!(carousel.axis().trigger_threshold(), 416.0 * 0.2);
    assert_eq!(carousel.tile_origin(1), Some(0.0));
}

#[test]
fn unmeasured_carousel_defers_paging() {
    let mut carousel =
        Carousel::new(["a", "b"], CarouselConfig::default(), PagingStrategy::SelfOwned).unwrap();
    assert_eq!(carousel.request_page_turn(PageDirection::Forward, 0), None);
    carousel.pointer_down(1, Point::new(10.0, 10.0), 0);
    assert_eq!(carousel.captured_tile(), None);
    carousel.set_viewport_size(TILE, 0);
    assert!(carousel.request_page_turn(PageDirection::Forward, 0).is_some());
}

#[test]
fn malformed_configuration_is_rejected() {
    let bad_threshold = CarouselConfig {
        pan_scroll_trigger_threshold_percentage: 1.0,
        ..CarouselConfig::default()
    };
    assert_eq!(
        Carousel::new(["a"], bad_threshold, PagingStrategy::SelfOwned).unwrap_err(),
        ConfigError::ThresholdOutOfRange(1.0)
    );
    assert_eq!(
        Carousel::new(Vec::<String>::new(), CarouselConfig::default(), PagingStrategy::SelfOwned)
            .unwrap_err(),
        ConfigError::EmptyCollection
    );
    let bad_height = CarouselConfig {
        tile_height: Some(f64::INFINITY),
        ..CarouselConfig::default()
    };
    assert!(matches!(
        Carousel::new(["a"], bad_height, PagingStrategy::SelfOwned),
        Err(ConfigError::InvalidTileDimension {
            dimension: "height",
            ..
        })
    ));
}
