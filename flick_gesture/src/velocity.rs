// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

const MAX_SAMPLES: usize = 8;

/// Estimates pointer velocity from recent position samples.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[(Point, u64); MAX_SAMPLES]>,
}

impl VelocityTracker {
    /// Records a sample at `now_ms`.
    pub fn push(&mut self, pos: Point, now_ms: u64) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.remove(0);
        }
        self.samples.push((pos, now_ms));
    }

    /// Forgets all samples.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Velocity in pixels per second over the trailing `window_ms`.
    ///
    /// Returns zero with fewer than two samples in the window.
    #[must_use]
    pub fn velocity(&self, window_ms: u64) -> Vec2 {
        let Some(&(last_pos, last_ms)) = self.samples.last() else {
            return Vec2::ZERO;
        };
        let horizon = last_ms.saturating_sub(window_ms);
        let Some(&(first_pos, first_ms)) = self.samples.iter().find(|(_, t)| *t >= horizon)
        else {
            return Vec2::ZERO;
        };
        let dt = last_ms.saturating_sub(first_ms);
        if dt == 0 {
            return Vec2::ZERO;
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "sample spans are bounded by the velocity window"
        )]
        let dt = dt as f64;
        let delta = last_pos - first_pos;
        Vec2::new(delta.x * 1000.0 / dt, delta.y * 1000.0 / dt)
    }
}
