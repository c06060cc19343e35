// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::easing::TimingSpec;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    start_ms: u64,
    spec: TimingSpec,
}

/// A scalar that can be written directly or animated towards a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animated {
    value: f64,
    tween: Option<Tween>,
}

impl Animated {
    /// Creates a value at rest.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value, tween: None }
    }

    /// Current (possibly mid-animation) value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value the current animation will land on, or the current value at rest.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.tween.map_or(self.value, |tween| tween.to)
    }

    /// Returns `true` while a tween is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Writes the value immediately, cancelling any tween.
    pub fn set(&mut self, value: f64) {
        self.tween = None;
        self.value = value;
    }

    /// Starts (or retargets) an animation towards `target`.
    ///
    /// The value is first advanced to `now_ms`, so a retarget continues from
    /// wherever the previous animation had reached. Asking for the target the
    /// value is already heading to keeps the running tween. A zero-length
    /// spec snaps.
    pub fn animate_to(&mut self, target: f64, now_ms: u64, spec: TimingSpec) {
        self.advance(now_ms);
        if spec.duration_ms == 0 {
            self.set(target);
            return;
        }
        if self.target() == target {
            return;
        }
        self.tween = Some(Tween {
            from: self.value,
            to: target,
            start_ms: now_ms,
            spec,
        });
    }

    /// Advances the tween to `now_ms`. Returns `true` if the value changed.
    ///
    /// A finished tween lands exactly on its target.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        let before = self.value;
        let elapsed = now_ms.saturating_sub(tween.start_ms);
        if elapsed >= tween.spec.duration_ms {
            self.value = tween.to;
            self.tween = None;
        } else {
            #[allow(
                clippy::cast_precision_loss,
                reason = "animation durations are far below 2^52 milliseconds"
            )]
            let fraction = elapsed as f64 / tween.spec.duration_ms as f64;
            let eased = tween.spec.easing.transform(fraction);
            self.value = tween.from + (tween.to - tween.from) * eased;
        }
        self.value != before
    }
}

impl Default for Animated {
    fn default() -> Self {
        Self::new(0.0)
    }
}
