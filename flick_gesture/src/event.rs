// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer sets and the events the arbiter emits.

use kurbo::Vec2;

/// Host-assigned identifier of one touch point.
pub type PointerId = u64;

bitflags::bitflags! {
    /// Set of recognizers enabled for a gesture stream.
    ///
    /// The set is supplied with every pointer event, so a tile can enable and
    /// disable recognizers as its state changes mid-stream.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Recognizers: u8 {
        /// Single or multi-pointer drag, reported as centroid translation.
        const PAN = 1 << 0;
        /// Two-pointer scale.
        const PINCH = 1 << 1;
        /// Short press and release.
        const TAP = 1 << 2;
        /// Two taps in quick succession. Takes precedence over [`Self::TAP`].
        const DOUBLE_TAP = 1 << 3;
        /// Fast horizontal release. Only reported when no pan was recognized.
        const FLING = 1 << 4;
    }
}

/// Horizontal direction of a fling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlingDirection {
    /// Content thrown towards the left edge.
    Left,
    /// Content thrown towards the right edge.
    Right,
}

/// A recognized gesture callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A pinch started.
    PinchBegin,
    /// Pointer span relative to the span when the pinch began.
    PinchUpdate {
        /// Scale multiplier since the pinch began.
        scale: f64,
    },
    /// A pinch finished.
    PinchEnd {
        /// `true` when the stream was interrupted rather than released.
        cancelled: bool,
    },
    /// A pan started.
    PanBegin,
    /// Centroid translation since the pan stream started.
    PanUpdate {
        /// Total translation.
        translation: Vec2,
    },
    /// A pan finished.
    PanEnd {
        /// Release velocity in pixels per second.
        velocity: Vec2,
        /// `true` when the stream was interrupted rather than released.
        cancelled: bool,
    },
    /// A single tap, reported after the double-tap window lapsed.
    Tap,
    /// A double tap.
    DoubleTap,
    /// A fast horizontal release.
    Fling(FlingDirection),
}

impl GestureEvent {
    /// Returns `true` for the events that close a pan or pinch stream.
    #[must_use]
    pub fn is_stream_end(&self) -> bool {
        matches!(self, Self::PanEnd { .. } | Self::PinchEnd { .. })
    }
}
