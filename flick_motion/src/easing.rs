// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Easing curves mapping linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic bezier `(0.42, 0, 1, 1)`.
    EaseIn,
    /// Cubic bezier `(0, 0, 0.58, 1)`.
    EaseOut,
    /// Cubic bezier `(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Symmetric quadratic ease in and out.
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Applies the curve to a linear fraction. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn transform(self, fraction: f64) -> f64 {
        let t = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * 0.5
                }
            }
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample(a: f64, b: f64, c: f64, t: f64) -> f64 {
        ((a * t + b) * t + c) * t
    }

    fn derivative(a: f64, b: f64, c: f64, t: f64) -> f64 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson on x(t) = fraction, falling back to bisection.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-9 {
            solved = true;
            break;
        }
        let dx = derivative(ax, bx, cx, t);
        if dx.abs() < 1e-9 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !solved {
        let mut lo = 0.0;
        let mut hi = 1.0;
        t = fraction;
        for _ in 0..32 {
            let delta = sample(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-9 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

/// Duration and curve of a timed animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingSpec {
    /// Duration in milliseconds. Zero snaps immediately.
    pub duration_ms: u64,
    /// Curve applied to linear progress.
    pub easing: Easing,
}

impl TimingSpec {
    /// Creates a timing spec.
    #[must_use]
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// A spec that jumps straight to the target.
    pub const IMMEDIATE: Self = Self::new(0, Easing::Linear);
}

impl Default for TimingSpec {
    /// 300ms with [`Easing::EaseInOutQuad`].
    fn default() -> Self {
        Self::new(300, Easing::EaseInOutQuad)
    }
}
