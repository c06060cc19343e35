// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-target arbitration between the pan, pinch, tap, double tap and fling recognizers.
//!
//! The arbiter consumes raw pointer samples for one gesture target and emits
//! [`GestureEvent`]s. Its policy:
//!
//! - Pan, pinch and the tap family run simultaneously; a user can pinch and
//!   drag in one motion.
//! - Double tap and single tap are mutually exclusive. A released tap is held
//!   for the double-tap window and only reported if no second press arrives.
//! - Fling and pan are mutually exclusive. Once the centroid has moved past
//!   the touch slop an enabled pan claims the stream and no fling is
//!   reported on release.
//! - A pointer count of one drives taps and flings, two or more drive the
//!   pinch, any count drives the pan (via the centroid).
//!
//! Timestamps are monotonic milliseconds supplied by the host.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::config::GestureConfig;
use crate::event::{FlingDirection, GestureEvent, PointerId, Recognizers};
use crate::pan::PanTracker;
use crate::pinch::PinchTracker;
use crate::tap::{TapOutcome, TapTracker};
use crate::velocity::VelocityTracker;

/// Events produced by one arbiter call, in the order they were recognized.
pub type GestureEvents = SmallVec<[GestureEvent; 4]>;

/// Multi-recognizer state machine for one gesture target.
#[derive(Clone, Debug)]
pub struct GestureArbiter {
    config: GestureConfig,
    pointers: SmallVec<[(PointerId, Point); 4]>,
    slop_origin: Point,
    moved: bool,
    pan: PanTracker,
    pan_active: bool,
    // Movement happened while the pan recognizer was disabled.
    pan_blocked: bool,
    pinch: PinchTracker,
    tap: TapTracker,
    velocity: VelocityTracker,
}

impl GestureArbiter {
    /// Creates an idle arbiter.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            pointers: SmallVec::new(),
            slop_origin: Point::ZERO,
            moved: false,
            pan: PanTracker::default(),
            pan_active: false,
            pan_blocked: false,
            pinch: PinchTracker::default(),
            tap: TapTracker::new(config.tap_max_duration_ms, config.double_tap_window_ms),
            velocity: VelocityTracker::default(),
        }
    }

    /// Recognizer thresholds.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` while a pan is recognized.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan_active
    }

    /// Returns `true` while a pinch is recognized.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    /// Returns `true` when no pointer is down and no tap is held back.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pointers.is_empty() && !self.tap.is_pending()
    }

    /// A pointer went down.
    pub fn pointer_down(
        &mut self,
        id: PointerId,
        pos: Point,
        now_ms: u64,
        enabled: Recognizers,
    ) -> GestureEvents {
        let mut out = GestureEvents::new();
        self.flush_tap(now_ms, enabled, &mut out);

        if let Some(slot) = self.pointers.iter_mut().find(|(p, _)| *p == id) {
            slot.1 = pos;
            return out;
        }
        self.pointers.push((id, pos));

        if self.pointers.len() == 1 {
            self.slop_origin = pos;
            self.moved = false;
            self.pan_blocked = false;
            self.pan.start(pos);
            self.velocity.reset();
            self.velocity.push(pos, now_ms);
            self.tap
                .on_down(now_ms, enabled.contains(Recognizers::DOUBLE_TAP));
        } else {
            if let Some(outcome) = self.tap.cancel() {
                emit_tap(outcome, enabled, &mut out);
            }
            self.regroup(now_ms);
            self.try_begin_pinch(enabled, &mut out);
        }
        out
    }

    /// A pointer moved. Unknown pointers are ignored.
    pub fn pointer_move(
        &mut self,
        id: PointerId,
        pos: Point,
        now_ms: u64,
        enabled: Recognizers,
    ) -> GestureEvents {
        let mut out = GestureEvents::new();
        let Some(slot) = self.pointers.iter_mut().find(|(p, _)| *p == id) else {
            return out;
        };
        slot.1 = pos;

        let centroid = self.centroid();
        self.velocity.push(centroid, now_ms);
        let translation = self.pan.update(centroid).unwrap_or(Vec2::ZERO);

        if !self.moved && (centroid - self.slop_origin).hypot() > self.config.touch_slop {
            self.moved = true;
            if let Some(outcome) = self.tap.cancel() {
                emit_tap(outcome, enabled, &mut out);
            }
        }

        self.update_pinch(enabled, &mut out);
        self.update_pan(centroid, translation, enabled, &mut out);
        out
    }

    /// A pointer lifted. Unknown pointers are ignored.
    ///
    /// The release position is taken from the pointer's last move.
    pub fn pointer_up(&mut self, id: PointerId, now_ms: u64, enabled: Recognizers) -> GestureEvents {
        let mut out = GestureEvents::new();
        let Some(index) = self.pointers.iter().position(|(p, _)| *p == id) else {
            return out;
        };
        self.pointers.remove(index);

        if self.pinch.is_active() && self.pointers.len() < 2 {
            self.pinch.end();
            log::trace!("pinch ended");
            out.push(GestureEvent::PinchEnd { cancelled: false });
        }

        if self.pointers.is_empty() {
            let velocity = self.velocity.velocity(self.config.velocity_window_ms);
            if self.pan_active {
                log::trace!("pan ended with velocity {velocity:?}");
                out.push(GestureEvent::PanEnd {
                    velocity,
                    cancelled: false,
                });
            } else if self.moved && enabled.contains(Recognizers::FLING) {
                if let Some(direction) = self.fling_direction(velocity) {
                    log::trace!("fling {direction:?} at {velocity:?}");
                    out.push(GestureEvent::Fling(direction));
                }
            }
            if let Some(outcome) = self
                .tap
                .on_up(now_ms, enabled.contains(Recognizers::DOUBLE_TAP))
            {
                emit_tap(outcome, enabled, &mut out);
            }
            self.finish_stream();
        } else {
            self.regroup(now_ms);
        }
        out
    }

    /// The host interrupted the stream.
    ///
    /// Active pan and pinch recognizers end with `cancelled: true`; pending
    /// taps are dropped.
    pub fn cancel(&mut self) -> GestureEvents {
        let mut out = GestureEvents::new();
        if self.pinch.end() {
            out.push(GestureEvent::PinchEnd { cancelled: true });
        }
        if self.pan_active {
            out.push(GestureEvent::PanEnd {
                velocity: Vec2::ZERO,
                cancelled: true,
            });
        }
        if !out.is_empty() {
            log::trace!("gesture stream cancelled");
        }
        self.tap.reset();
        self.pointers.clear();
        self.finish_stream();
        out
    }

    /// Reports time-based recognitions, namely a held single tap whose
    /// double-tap window has lapsed. Call once per frame.
    pub fn poll(&mut self, now_ms: u64, enabled: Recognizers) -> GestureEvents {
        let mut out = GestureEvents::new();
        self.flush_tap(now_ms, enabled, &mut out);
        out
    }

    fn flush_tap(&mut self, now_ms: u64, enabled: Recognizers, out: &mut GestureEvents) {
        if let Some(outcome) = self.tap.poll(now_ms) {
            emit_tap(outcome, enabled, out);
        }
    }

    fn update_pinch(&mut self, enabled: Recognizers, out: &mut GestureEvents) {
        if self.pointers.len() >= 2 && enabled.contains(Recognizers::PINCH) {
            if self.pinch.is_active() {
                if let Some(scale) = self.pinch.update(self.span()) {
                    out.push(GestureEvent::PinchUpdate { scale });
                }
            } else {
                self.try_begin_pinch(enabled, out);
            }
        } else if self.pinch.is_active() && !enabled.contains(Recognizers::PINCH) {
            self.pinch.end();
            out.push(GestureEvent::PinchEnd { cancelled: true });
        }
    }

    fn try_begin_pinch(&mut self, enabled: Recognizers, out: &mut GestureEvents) {
        if self.pointers.len() < 2
            || self.pinch.is_active()
            || !enabled.contains(Recognizers::PINCH)
        {
            return;
        }
        if self.pinch.begin(self.span(), self.config.min_pinch_distance) {
            log::trace!("pinch began");
            out.push(GestureEvent::PinchBegin);
        }
    }

    fn update_pan(
        &mut self,
        centroid: Point,
        translation: Vec2,
        enabled: Recognizers,
        out: &mut GestureEvents,
    ) {
        if self.pan_active {
            if enabled.contains(Recognizers::PAN) {
                out.push(GestureEvent::PanUpdate { translation });
            } else {
                self.pan_active = false;
                self.pan_blocked = true;
                out.push(GestureEvent::PanEnd {
                    velocity: Vec2::ZERO,
                    cancelled: true,
                });
            }
        } else if self.moved {
            if enabled.contains(Recognizers::PAN) {
                if self.pan_blocked {
                    // The drag so far belonged to someone else; start from here.
                    self.pan.start(centroid);
                }
                self.pan_active = true;
                log::trace!("pan began");
                out.push(GestureEvent::PanBegin);
                out.push(GestureEvent::PanUpdate {
                    translation: self.pan.translation().unwrap_or(Vec2::ZERO),
                });
            } else {
                self.pan_blocked = true;
            }
        }
    }

    fn regroup(&mut self, now_ms: u64) {
        let centroid = self.centroid();
        self.pan.rebase(centroid);
        self.velocity.reset();
        self.velocity.push(centroid, now_ms);
        if !self.moved {
            self.slop_origin = centroid;
        }
    }

    fn finish_stream(&mut self) {
        self.pan.end();
        self.pan_active = false;
        self.pan_blocked = false;
        self.pinch.end();
        self.moved = false;
        self.velocity.reset();
    }

    fn fling_direction(&self, velocity: Vec2) -> Option<FlingDirection> {
        let vx = velocity.x.abs();
        if vx >= self.config.min_fling_velocity && vx > velocity.y.abs() {
            Some(if velocity.x < 0.0 {
                FlingDirection::Left
            } else {
                FlingDirection::Right
            })
        } else {
            None
        }
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "pointer counts are tiny"
    )]
    fn centroid(&self) -> Point {
        if self.pointers.is_empty() {
            return self.slop_origin;
        }
        let sum = self
            .pointers
            .iter()
            .fold(Vec2::ZERO, |acc, (_, p)| acc + p.to_vec2());
        (sum / self.pointers.len() as f64).to_point()
    }

    fn span(&self) -> f64 {
        match self.pointers.as_slice() {
            [(_, a), (_, b), ..] => (*a - *b).hypot(),
            _ => 0.0,
        }
    }
}

impl Default for GestureArbiter {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

fn emit_tap(outcome: TapOutcome, enabled: Recognizers, out: &mut GestureEvents) {
    match outcome {
        TapOutcome::Single if enabled.contains(Recognizers::TAP) => out.push(GestureEvent::Tap),
        TapOutcome::Double if enabled.contains(Recognizers::DOUBLE_TAP) => {
            out.push(GestureEvent::DoubleTap);
        }
        _ => {}
    }
}
