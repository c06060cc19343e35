// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tracks the span between two pointers relative to the span at pinch start.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinchTracker {
    initial_span: Option<f64>,
    last_scale: f64,
}

impl PinchTracker {
    /// Begins a pinch at the given span.
    ///
    /// Spans below `min_span` (or non-finite ones) cannot anchor a ratio; the
    /// pinch stays inactive and the caller should retry on the next move.
    pub fn begin(&mut self, span: f64, min_span: f64) -> bool {
        if !span.is_finite() || span < min_span || !(span > 0.0) {
            return false;
        }
        self.initial_span = Some(span);
        self.last_scale = 1.0;
        true
    }

    /// Returns the scale multiplier for the current span.
    pub fn update(&mut self, span: f64) -> Option<f64> {
        let initial = self.initial_span?;
        if span.is_finite() && span >= 0.0 {
            self.last_scale = span / initial;
        }
        Some(self.last_scale)
    }

    /// Ends the pinch. Returns `true` if one was active.
    pub fn end(&mut self) -> bool {
        let was_active = self.initial_span.is_some();
        *self = Self::default();
        was_active
    }

    /// Returns `true` while a pinch is active.
    pub fn is_active(&self) -> bool {
        self.initial_span.is_some()
    }

    /// Scale multiplier at the last update.
    pub fn last_scale(&self) -> f64 {
        if self.is_active() { self.last_scale } else { 1.0 }
    }
}
