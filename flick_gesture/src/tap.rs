// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single and double tap recognition with double-tap right of refusal.
//!
//! A release that could still become the first half of a double tap is held
//! back until the double-tap window lapses; only then is it reported as a
//! single tap. A second quick press turns it into a double tap instead, so the
//! two outcomes are mutually exclusive.

/// Result of a tap transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// A single tap whose double-tap window has closed.
    Single,
    /// A completed double tap.
    Double,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum TapPhase {
    #[default]
    Idle,
    Pressed {
        down_ms: u64,
        second: bool,
    },
    AwaitingSecond {
        released_ms: u64,
    },
}

/// Timing state for tap recognition.
#[derive(Clone, Copy, Debug)]
pub struct TapTracker {
    phase: TapPhase,
    max_duration_ms: u64,
    double_tap_window_ms: u64,
}

impl TapTracker {
    /// Creates a tracker with the given press duration bound and double-tap window.
    #[must_use]
    pub fn new(max_duration_ms: u64, double_tap_window_ms: u64) -> Self {
        Self {
            phase: TapPhase::Idle,
            max_duration_ms,
            double_tap_window_ms,
        }
    }

    /// A press began. `double_enabled` decides whether a held single tap may
    /// be upgraded into a double tap.
    pub fn on_down(&mut self, now_ms: u64, double_enabled: bool) {
        let second = match self.phase {
            TapPhase::AwaitingSecond { released_ms } => {
                double_enabled && now_ms.saturating_sub(released_ms) <= self.double_tap_window_ms
            }
            _ => false,
        };
        self.phase = TapPhase::Pressed {
            down_ms: now_ms,
            second,
        };
    }

    /// The press was released without moving.
    ///
    /// With `double_enabled` a valid first tap is held until [`Self::poll`]
    /// reports it; otherwise it is reported immediately.
    pub fn on_up(&mut self, now_ms: u64, double_enabled: bool) -> Option<TapOutcome> {
        let TapPhase::Pressed { down_ms, second } = self.phase else {
            return None;
        };
        let in_time = now_ms.saturating_sub(down_ms) <= self.max_duration_ms;
        if second {
            self.phase = TapPhase::Idle;
            // A slow second press refuses the double tap; the first tap stands.
            return Some(if in_time {
                TapOutcome::Double
            } else {
                TapOutcome::Single
            });
        }
        if !in_time {
            self.phase = TapPhase::Idle;
            return None;
        }
        if double_enabled {
            self.phase = TapPhase::AwaitingSecond {
                released_ms: now_ms,
            };
            None
        } else {
            self.phase = TapPhase::Idle;
            Some(TapOutcome::Single)
        }
    }

    /// The current press turned into something else (drag, extra pointer).
    ///
    /// If it was the second press of a potential double tap, the first tap
    /// still stands and is returned.
    pub fn cancel(&mut self) -> Option<TapOutcome> {
        match self.phase {
            TapPhase::Pressed { second: true, .. } => {
                self.phase = TapPhase::Idle;
                Some(TapOutcome::Single)
            }
            TapPhase::Pressed { .. } => {
                self.phase = TapPhase::Idle;
                None
            }
            _ => None,
        }
    }

    /// Reports a held single tap once its double-tap window has lapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<TapOutcome> {
        match self.phase {
            TapPhase::AwaitingSecond { released_ms }
                if now_ms.saturating_sub(released_ms) > self.double_tap_window_ms =>
            {
                self.phase = TapPhase::Idle;
                Some(TapOutcome::Single)
            }
            _ => None,
        }
    }

    /// Drops all state without reporting anything.
    pub fn reset(&mut self) {
        self.phase = TapPhase::Idle;
    }

    /// Returns `true` while a single tap is held back for the double-tap window.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, TapPhase::AwaitingSecond { .. })
    }

    /// Returns `true` while a press that may still become a tap is down.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        matches!(self.phase, TapPhase::Pressed { .. })
    }
}
