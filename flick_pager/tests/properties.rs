// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invariants of the tile controller and paging axis, driven with recognized
//! gesture events through [`Carousel::dispatch`].

mod common;

use flick_gesture::GestureEvent;
use flick_pager::{Carousel, Effect, PageDirection};
use kurbo::Vec2;

use common::{TILE, self_owned, settle};

fn pan(carousel: &mut Carousel, index: usize, moves: &[Vec2], now_ms: u64) {
    carousel.dispatch(index, GestureEvent::PanBegin, now_ms);
    for &translation in moves {
        carousel.dispatch(index, GestureEvent::PanUpdate { translation }, now_ms);
    }
    carousel.dispatch(
        index,
        GestureEvent::PanEnd {
            velocity: Vec2::ZERO,
            cancelled: false,
        },
        now_ms,
    );
}

fn zoom_to(carousel: &mut Carousel, index: usize, scale: f64, now_ms: u64) {
    let anchor = carousel.tile(index).unwrap().scale_anchor();
    carousel.dispatch(index, GestureEvent::PinchBegin, now_ms);
    carousel.dispatch(
        index,
        GestureEvent::PinchUpdate {
            scale: scale / anchor,
        },
        now_ms,
    );
    carousel.dispatch(index, GestureEvent::PinchEnd { cancelled: false }, now_ms);
}

#[test]
fn pinch_scale_stays_in_range() {
    let mut carousel = self_owned(1, 0);
    let factors = [0.1, 0.9, 1.3, 2.2, 5.0, 0.4, 3.0, 0.01, 1.7];
    let mut now = 0;
    for chunk in factors.chunks(3) {
        carousel.dispatch(0, GestureEvent::PinchBegin, now);
        for &scale in chunk {
            carousel.dispatch(0, GestureEvent::PinchUpdate { scale }, now);
            let value = carousel.tile_transform(0).unwrap().scale;
            assert!((1.0..=3.0).contains(&value), "scale {value} out of range");
            now += 16;
            carousel.tick(now);
        }
        carousel.dispatch(0, GestureEvent::PinchEnd { cancelled: false }, now);
        now = settle(&mut carousel, now);
        let value = carousel.tile_transform(0).unwrap().scale;
        assert!((1.0..=3.0).contains(&value), "scale {value} out of range");
    }
}

#[test]
fn double_tap_lands_exactly() {
    let mut carousel = self_owned(1, 0);
    carousel.dispatch(0, GestureEvent::DoubleTap, 0);
    let now = settle(&mut carousel, 0);
    assert_eq!(carousel.tile_transform(0).unwrap().scale, 2.0);

    zoom_to(&mut carousel, 0, 2.7, now);
    pan(&mut carousel, 0, &[Vec2::new(-120.0, 250.0)], now);
    carousel.dispatch(0, GestureEvent::DoubleTap, now);
    let now = settle(&mut carousel, now);
    let now = settle(&mut carousel, now);
    let transform = carousel.tile_transform(0).unwrap();
    assert_eq!(transform.scale, 1.0);
    assert_eq!(transform.translation, Vec2::ZERO);
    assert!(!carousel.tile(0).unwrap().is_zoomed());

    carousel.dispatch(0, GestureEvent::DoubleTap, now);
    settle(&mut carousel, now);
    assert_eq!(carousel.tile_transform(0).unwrap().scale, 2.0);
}

#[test]
fn pan_end_leaves_no_gap() {
    let drags = [
        Vec2::new(250.0, 0.0),
        Vec2::new(-250.0, 0.0),
        Vec2::new(0.0, 900.0),
        Vec2::new(0.0, -900.0),
        Vec2::new(-210.0, 420.0),
        Vec2::new(180.0, -10.0),
    ];
    for scale in [1.5, 2.0, 3.0] {
        for drag in drags {
            let mut carousel = self_owned(3, 1);
            zoom_to(&mut carousel, 1, scale, 0);
            // Keep the drag short of the page-turn threshold.
            let limit = (TILE.width * (scale - 1.0) * 0.5) + 70.0;
            let drag = Vec2::new(drag.x.clamp(-limit, limit), drag.y);
            pan(&mut carousel, 1, &[drag], 0);
            assert!(!carousel.drain_effects().iter().any(|e| matches!(e, Effect::PageTurn(_))));
            settle(&mut carousel, 0);

            let bounds = carousel.tile(1).unwrap().measure().unwrap();
            assert!(bounds.x0 <= 0.0 && bounds.x1 >= TILE.width, "{scale} {drag:?} {bounds:?}");
            assert!(bounds.y0 <= 0.0 && bounds.y1 >= TILE.height, "{scale} {drag:?} {bounds:?}");
        }
    }
}

#[test]
fn trigger_fires_at_most_once_per_pan() {
    let mut carousel = self_owned(5, 2);
    zoom_to(&mut carousel, 2, 2.0, 0);
    carousel.drain_effects();
    let moves: Vec<Vec2> = (0..40).map(|i| Vec2::new(-20.0 * f64::from(i), 0.0)).collect();
    pan(&mut carousel, 2, &moves, 0);
    let turns = carousel
        .drain_effects()
        .into_iter()
        .filter(|e| matches!(e, Effect::PageTurn(_)))
        .count();
    assert_eq!(turns, 1);
    assert!(!carousel.tile(2).unwrap().scroll_triggered());

    // A fresh pan may trigger again.
    let now = settle(&mut carousel, 0);
    pan(&mut carousel, 2, &moves, now);
    let turns = carousel
        .drain_effects()
        .into_iter()
        .filter(|e| matches!(e, Effect::PageTurn(_)))
        .count();
    assert_eq!(turns, 1);
}

#[test]
fn page_turns_stay_in_bounds() {
    let mut carousel = self_owned(4, 0);
    let pattern = [
        PageDirection::Backward,
        PageDirection::Forward,
        PageDirection::Forward,
        PageDirection::Forward,
        PageDirection::Forward,
        PageDirection::Forward,
        PageDirection::Backward,
        PageDirection::Backward,
        PageDirection::Backward,
        PageDirection::Backward,
        PageDirection::Backward,
    ];
    let mut now = 0;
    for direction in pattern {
        if let Some(turn) = carousel.request_page_turn(direction, now) {
            assert!(turn.to < 4);
        }
        now += 40;
        carousel.tick(now);
        assert!(carousel.current_page() < 4);
    }
    settle(&mut carousel, now);
    assert_eq!(carousel.current_page(), 0);
}
