// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thresholds shared by the recognizers.
//!
//! All distances are logical pixels and all durations milliseconds.

/// Distance the pointer centroid must travel before a press becomes a drag.
///
/// Crossing it activates the pan recognizer and cancels any pending tap.
pub const TOUCH_SLOP: f64 = 8.0;

/// Longest press, from down to up, still recognized as a tap.
pub const TAP_MAX_DURATION_MS: u64 = 250;

/// Longest gap between the first release and the second press of a double tap.
///
/// A single tap is only reported once this window has passed without a
/// second press.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 250;

/// Minimum horizontal release velocity, in pixels per second, for a fling.
pub const MIN_FLING_VELOCITY: f64 = 700.0;

/// How far back release velocity is sampled.
pub const VELOCITY_WINDOW_MS: u64 = 100;

/// Two-pointer spans shorter than this cannot anchor a pinch.
pub const MIN_PINCH_DISTANCE: f64 = 1.0;

/// Tunable recognizer thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// See [`TOUCH_SLOP`].
    pub touch_slop: f64,
    /// See [`TAP_MAX_DURATION_MS`].
    pub tap_max_duration_ms: u64,
    /// See [`DOUBLE_TAP_WINDOW_MS`].
    pub double_tap_window_ms: u64,
    /// See [`MIN_FLING_VELOCITY`].
    pub min_fling_velocity: f64,
    /// See [`VELOCITY_WINDOW_MS`].
    pub velocity_window_ms: u64,
    /// See [`MIN_PINCH_DISTANCE`].
    pub min_pinch_distance: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            tap_max_duration_ms: TAP_MAX_DURATION_MS,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            min_fling_velocity: MIN_FLING_VELOCITY,
            velocity_window_ms: VELOCITY_WINDOW_MS,
            min_pinch_distance: MIN_PINCH_DISTANCE,
        }
    }
}
