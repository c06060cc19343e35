// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tile zoom/pan state machine.
//!
//! A [`TileController`] owns the transform of one image and interprets the
//! gesture callbacks routed to it:
//!
//! - Pinch scales relative to the scale anchor captured when the pinch began.
//! - Pan while zoomed moves the content and, once the content has been
//!   dragged past the trigger threshold, requests one page turn.
//! - Pan while not zoomed drags the shared paging offset (self-owned axis).
//! - Pan end either undoes a triggered drag or springs the content back over
//!   the viewport.
//! - Double tap toggles between identity and the double-tap zoom.
//!
//! Returning to a scale of exactly 1 resets the translation and anchors and
//! clears the zoomed flag.

use flick_geometry::{
    PageDirection, ScaleLimits, TileTransform, page_turn_for_bounds, spring_back_targets,
};
use flick_gesture::{FlingDirection, GestureEvent, Recognizers};
use flick_motion::{Animated, TimingSpec};
use kurbo::{Rect, Size, Vec2};

use crate::axis::{OffsetLease, PagingAxis};
use crate::effects::{Effect, EffectQueue};

/// Observable state of a [`TileController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TilePhase {
    /// At identity scale with no gesture in progress.
    Idle,
    /// A pinch is active.
    Zooming,
    /// Zoomed in with no gesture in progress.
    Zoomed,
    /// Panning the zoomed content.
    PanningZoomed,
    /// Panning at identity scale, dragging the paging axis.
    PanningNavigate,
}

#[derive(Debug)]
enum PanMode {
    /// `base` is the gesture translation when this mode started.
    Zoomed { base: Vec2 },
    /// `lease` is `None` when the axis does not accept drags.
    Navigate {
        lease: Option<OffsetLease>,
        base: f64,
    },
}

/// Per-tile behavior knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileOptions {
    /// Allowed zoom range.
    pub limits: ScaleLimits,
    /// Zoom a double tap on an unzoomed tile animates to.
    pub double_tap_scale: f64,
    /// Timing of resets, spring-backs and the double-tap zoom.
    pub timing: TimingSpec,
    /// Whether single taps are recognized and reported.
    pub tap_enabled: bool,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            limits: ScaleLimits::DEFAULT,
            double_tap_scale: 2.0,
            timing: TimingSpec::default(),
            tap_enabled: false,
        }
    }
}

/// Zoom/pan transform and gesture interpretation for one image tile.
#[derive(Debug)]
pub struct TileController {
    index: usize,
    options: TileOptions,
    viewport: Size,
    scale: Animated,
    translate_x: Animated,
    translate_y: Animated,
    scale_anchor: f64,
    pan_anchor: Vec2,
    zoomed: bool,
    scroll_triggered: bool,
    pinching: bool,
    pan: Option<PanMode>,
    // Spring-back deferred until the tile can be measured.
    pending_clamp: bool,
}

impl TileController {
    /// Creates an unzoomed controller for the tile at `index`.
    #[must_use]
    pub fn new(index: usize, options: TileOptions) -> Self {
        Self {
            index,
            options,
            viewport: Size::ZERO,
            scale: Animated::new(1.0),
            translate_x: Animated::new(0.0),
            translate_y: Animated::new(0.0),
            scale_anchor: 1.0,
            pan_anchor: Vec2::ZERO,
            zoomed: false,
            scroll_triggered: false,
            pinching: false,
            pan: None,
            pending_clamp: false,
        }
    }

    /// Position of the tile in the carousel.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Behavior knobs.
    #[must_use]
    pub fn options(&self) -> &TileOptions {
        &self.options
    }

    /// Enables or disables single-tap reporting.
    pub fn set_tap_enabled(&mut self, enabled: bool) {
        self.options.tap_enabled = enabled;
    }

    /// Sets the tile's viewport size. An empty size marks the tile unmeasured.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// The tile's viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The rendered transform.
    #[must_use]
    pub fn transform(&self) -> TileTransform {
        TileTransform::new(
            self.scale.value(),
            Vec2::new(self.translate_x.value(), self.translate_y.value()),
        )
    }

    /// Rendered content bounds in tile-local coordinates, or `None` before
    /// the tile has been measured.
    #[must_use]
    pub fn measure(&self) -> Option<Rect> {
        self.transform().content_bounds(self.viewport)
    }

    /// The externally observable zoomed flag.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Whether the current pan has already requested its page turn.
    #[must_use]
    pub fn scroll_triggered(&self) -> bool {
        self.scroll_triggered
    }

    /// Scale the next pinch compounds from.
    #[must_use]
    pub fn scale_anchor(&self) -> f64 {
        self.scale_anchor
    }

    /// Translation the next zoomed pan starts from.
    #[must_use]
    pub fn pan_anchor(&self) -> Vec2 {
        self.pan_anchor
    }

    /// Returns `true` while any part of the transform is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scale.is_animating()
            || self.translate_x.is_animating()
            || self.translate_y.is_animating()
    }

    /// Current state.
    #[must_use]
    pub fn phase(&self) -> TilePhase {
        match (&self.pan, self.pinching) {
            (_, true) => TilePhase::Zooming,
            (Some(PanMode::Zoomed { .. }), false) => TilePhase::PanningZoomed,
            (Some(PanMode::Navigate { .. }), false) => TilePhase::PanningNavigate,
            (None, false) if self.zoomed => TilePhase::Zoomed,
            (None, false) => TilePhase::Idle,
        }
    }

    /// Recognizers this tile wants enabled.
    ///
    /// Pinch and double tap are always on and tap follows
    /// [`TileOptions::tap_enabled`]. While zoomed the tile pans. While not
    /// zoomed it pans the strip when the axis offset is self-owned, and
    /// otherwise leaves the drag to the scroll surface and only listens for
    /// flings.
    #[must_use]
    pub fn recognizers(&self, self_owned_axis: bool) -> Recognizers {
        let mut set = Recognizers::PINCH | Recognizers::DOUBLE_TAP;
        if self.options.tap_enabled {
            set |= Recognizers::TAP;
        }
        if self.zoomed || self_owned_axis {
            set |= Recognizers::PAN;
        } else {
            set |= Recognizers::FLING;
        }
        set
    }

    /// Applies one recognized gesture callback.
    pub fn handle(
        &mut self,
        event: GestureEvent,
        now_ms: u64,
        axis: &mut PagingAxis,
        effects: &mut EffectQueue,
    ) {
        log::trace!("tile {} {event:?}", self.index);
        match event {
            GestureEvent::PinchBegin => {
                let current = self.scale.value();
                self.scale.set(current);
                self.scale_anchor = current;
                self.pinching = true;
            }
            GestureEvent::PinchUpdate { scale } => {
                if !self.pinching {
                    self.handle(GestureEvent::PinchBegin, now_ms, axis, effects);
                }
                let next = self.options.limits.clamp(self.scale_anchor * scale);
                self.scale.set(next);
                self.react_to_scale(now_ms, effects);
            }
            GestureEvent::PinchEnd { .. } => {
                if self.pinching {
                    self.pinching = false;
                    self.scale_anchor = self.scale.value();
                }
            }
            GestureEvent::PanBegin => {
                self.end_pan(now_ms, axis);
                self.begin_pan(Vec2::ZERO, axis);
            }
            GestureEvent::PanUpdate { translation } => {
                self.update_pan(translation, now_ms, axis, effects);
            }
            GestureEvent::PanEnd { .. } => self.end_pan(now_ms, axis),
            GestureEvent::Tap => {
                if self.options.tap_enabled {
                    effects.push(Effect::ImagePressed { index: self.index });
                }
            }
            GestureEvent::DoubleTap => self.double_tap(now_ms),
            GestureEvent::Fling(direction) => {
                if self.zoomed {
                    return;
                }
                let direction = match direction {
                    FlingDirection::Left => PageDirection::Forward,
                    FlingDirection::Right => PageDirection::Backward,
                };
                if let Some(turn) = axis.request_page_turn(direction, now_ms) {
                    effects.push(Effect::PageTurn(turn));
                }
            }
        }
    }

    /// Advances running animations to `now_ms` and retries a deferred
    /// spring-back. Returns `true` if the transform changed.
    pub fn advance(&mut self, now_ms: u64, effects: &mut EffectQueue) -> bool {
        let mut moved = self.scale.advance(now_ms);
        moved |= self.translate_x.advance(now_ms);
        moved |= self.translate_y.advance(now_ms);
        if moved {
            self.react_to_scale(now_ms, effects);
        }
        if self.pending_clamp && self.pan.is_none() {
            self.spring_back(now_ms);
        }
        moved
    }

    fn double_tap(&mut self, now_ms: u64) {
        if self.zoomed || self.scale.target() > self.options.limits.min() {
            log::debug!("tile {} double tap reset", self.index);
            self.reset_position(now_ms);
        } else {
            log::debug!(
                "tile {} double tap zoom to {}",
                self.index,
                self.options.double_tap_scale
            );
            let target = self.options.limits.clamp(self.options.double_tap_scale);
            self.scale.animate_to(target, now_ms, self.options.timing);
            self.scale_anchor = target;
            self.pan_anchor = Vec2::ZERO;
        }
    }

    /// Derives the zoomed flag from the scale and resets on the way back to identity.
    fn react_to_scale(&mut self, now_ms: u64, effects: &mut EffectQueue) {
        let at_identity = self.scale.value() == self.options.limits.min();
        if at_identity && self.zoomed {
            self.zoomed = false;
            log::debug!("tile {} zoomed out", self.index);
            effects.push(Effect::ZoomChanged {
                index: self.index,
                zoomed: false,
            });
            self.reset_position(now_ms);
        } else if !at_identity && !self.zoomed {
            self.zoomed = true;
            log::debug!("tile {} zoomed in", self.index);
            effects.push(Effect::ZoomChanged {
                index: self.index,
                zoomed: true,
            });
        }
    }

    fn reset_position(&mut self, now_ms: u64) {
        let timing = self.options.timing;
        self.translate_x.animate_to(0.0, now_ms, timing);
        self.translate_y.animate_to(0.0, now_ms, timing);
        self.pan_anchor = Vec2::ZERO;
        self.pending_clamp = false;
        // An active pinch owns the scale until it ends.
        if !self.pinching {
            let identity = self.options.limits.min();
            self.scale.animate_to(identity, now_ms, timing);
            self.scale_anchor = identity;
        }
    }

    fn begin_pan(&mut self, translation: Vec2, axis: &mut PagingAxis) {
        self.pending_clamp = false;
        self.pan = Some(if self.zoomed {
            let current = Vec2::new(self.translate_x.value(), self.translate_y.value());
            self.translate_x.set(current.x);
            self.translate_y.set(current.y);
            self.pan_anchor = current;
            PanMode::Zoomed { base: translation }
        } else {
            PanMode::Navigate {
                lease: axis.acquire_offset(self.index),
                base: translation.x,
            }
        });
    }

    fn update_pan(
        &mut self,
        translation: Vec2,
        now_ms: u64,
        axis: &mut PagingAxis,
        effects: &mut EffectQueue,
    ) {
        let mode_matches = match &self.pan {
            Some(PanMode::Zoomed { .. }) => self.zoomed,
            Some(PanMode::Navigate { .. }) => !self.zoomed,
            None => false,
        };
        if !mode_matches {
            // Zoom changed mid-drag: finish the old mode without side effects
            // and continue from the current pointer position.
            match self.pan.take() {
                Some(PanMode::Navigate {
                    lease: Some(lease), ..
                }) => axis.release_offset(lease),
                Some(PanMode::Zoomed { .. }) => {
                    self.pan_anchor =
                        Vec2::new(self.translate_x.target(), self.translate_y.target());
                }
                _ => {}
            }
            self.begin_pan(translation, axis);
        }
        match &self.pan {
            Some(PanMode::Zoomed { base }) => {
                let next = self.pan_anchor + (translation - *base);
                self.translate_x.set(next.x);
                self.translate_y.set(next.y);
                self.check_trigger(now_ms, axis, effects);
            }
            Some(PanMode::Navigate {
                lease: Some(lease),
                base,
            }) => axis.drag_offset(lease, translation.x - base),
            _ => {}
        }
    }

    fn check_trigger(&mut self, now_ms: u64, axis: &mut PagingAxis, effects: &mut EffectQueue) {
        if self.scroll_triggered || !axis.is_measured() {
            return;
        }
        // Unmeasured this tick; the next update retries.
        let Some(bounds) = self.measure() else {
            return;
        };
        let origin = axis.layout().page_origin(self.index, axis.current_offset());
        let on_screen = bounds + Vec2::new(origin, 0.0);
        let Some(direction) =
            page_turn_for_bounds(on_screen, self.viewport.width, axis.trigger_threshold())
        else {
            return;
        };
        self.scroll_triggered = true;
        log::debug!("tile {} pan triggered page turn {direction:?}", self.index);
        if let Some(turn) = axis.request_page_turn(direction, now_ms) {
            effects.push(Effect::PageTurn(turn));
        }
    }

    fn end_pan(&mut self, now_ms: u64, axis: &mut PagingAxis) {
        match self.pan.take() {
            Some(PanMode::Zoomed { .. }) => {
                if self.scroll_triggered {
                    self.scroll_triggered = false;
                    let timing = self.options.timing;
                    self.translate_x.animate_to(self.pan_anchor.x, now_ms, timing);
                    self.translate_y.animate_to(self.pan_anchor.y, now_ms, timing);
                } else {
                    self.pan_anchor =
                        Vec2::new(self.translate_x.value(), self.translate_y.value());
                    self.spring_back(now_ms);
                }
            }
            Some(PanMode::Navigate { lease, .. }) => {
                self.scroll_triggered = false;
                if let Some(lease) = lease {
                    axis.release_offset(lease);
                }
            }
            None => {}
        }
    }

    fn spring_back(&mut self, now_ms: u64) {
        let Some(bounds) = self.measure() else {
            self.pending_clamp = true;
            return;
        };
        self.pending_clamp = false;
        let targets = spring_back_targets(bounds, self.viewport);
        let timing = self.options.timing;
        if let Some(x) = targets.x {
            self.translate_x.animate_to(x, now_ms, timing);
            self.pan_anchor.x = x;
        }
        if let Some(y) = targets.y {
            self.translate_y.animate_to(y, now_ms, timing);
            self.pan_anchor.y = y;
        }
    }
}
