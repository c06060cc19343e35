// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::transform::is_measurable;

/// Direction of a page turn along the horizontal paging axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageDirection {
    /// Towards the next (higher index) page.
    Forward,
    /// Towards the previous (lower index) page.
    Backward,
}

impl PageDirection {
    /// Signed page step: `+1` for forward, `-1` for backward.
    #[must_use]
    pub fn step(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Decides whether zoomed content has been dragged far enough past a
/// viewport edge to request a page turn.
///
/// `bounds` are the content bounds in tile-local coordinates and
/// `viewport_width` the width of the tile viewport.
///
/// - Forward when the content's trailing (right) edge has entered the
///   viewport by more than `threshold` pixels.
/// - Backward when the content's leading (left) edge has entered the
///   viewport by more than `threshold` pixels.
///
/// Forward is checked first. Returns `None` for degenerate bounds.
#[must_use]
pub fn page_turn_for_bounds(
    bounds: Rect,
    viewport_width: f64,
    threshold: f64,
) -> Option<PageDirection> {
    let width = bounds.width();
    if !(width > 0.0) || !(viewport_width > 0.0) {
        return None;
    }
    let leading_bound = 0.0;
    let trailing_bound = viewport_width - width;
    if bounds.x0 < trailing_bound - threshold {
        Some(PageDirection::Forward)
    } else if bounds.x0 > leading_bound + threshold {
        Some(PageDirection::Backward)
    } else {
        None
    }
}

/// Per-axis translation targets produced by [`spring_back_targets`].
///
/// `None` on an axis means the content already covers the viewport on that
/// axis and no correction is needed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringBack {
    /// Target horizontal translation.
    pub x: Option<f64>,
    /// Target vertical translation.
    pub y: Option<f64>,
}

impl SpringBack {
    /// Returns `true` if neither axis needs a correction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// Computes the translations that pull scaled content back over the viewport.
///
/// For each axis independently, if the content's near edge has moved inside
/// the viewport the target aligns it with the viewport's near edge; likewise
/// for the far edge. Because the content is scaled symmetrically about its
/// center, the aligning translation is half of the overflow,
/// `(content - viewport) / 2`, with the sign of the edge.
///
/// Content smaller than the viewport, or unmeasurable input, yields no
/// displacement on that axis.
#[must_use]
pub fn spring_back_targets(bounds: Rect, viewport: Size) -> SpringBack {
    if !is_measurable(viewport) {
        return SpringBack::default();
    }
    SpringBack {
        x: spring_axis(bounds.x0, bounds.width(), viewport.width),
        y: spring_axis(bounds.y0, bounds.height(), viewport.height),
    }
}

fn spring_axis(start: f64, len: f64, viewport_len: f64) -> Option<f64> {
    if !(len > 0.0) {
        return None;
    }
    let overflow = (len - viewport_len) * 0.5;
    if overflow < 0.0 {
        return None;
    }
    if start > 0.0 {
        Some(overflow)
    } else if start < viewport_len - len {
        Some(-overflow)
    } else {
        None
    }
}
