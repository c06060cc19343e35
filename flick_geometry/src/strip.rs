// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::bounds::PageDirection;

/// Pixel distance from a tile's edge within which a zoomed pan becomes a
/// page-turn request.
///
/// Non-positive or non-finite extents produce a threshold of zero.
#[must_use]
pub fn trigger_threshold(tile_extent: f64, fraction: f64) -> f64 {
    if tile_extent.is_finite() && tile_extent > 0.0 {
        tile_extent * fraction
    } else {
        0.0
    }
}

/// Layout of a horizontal strip of `count` equally sized pages.
///
/// Offsets follow the scroll-surface convention: page `i` rests at scroll
/// offset `i * extent`, and a scroll offset of `s` shows the strip shifted
/// left by `s` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripLayout {
    extent: f64,
    count: usize,
}

impl StripLayout {
    /// Creates a layout with the given page step (tile width plus margin).
    #[must_use]
    pub fn new(extent: f64, count: usize) -> Self {
        Self { extent, count }
    }

    /// Page step in pixels.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Number of pages.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` when the extent can be used for page math.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.extent.is_finite() && self.extent > 0.0
    }

    /// Total scrollable content length.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.extent * self.count as f64
    }

    /// Clamps a page index into `[0, count - 1]`.
    #[must_use]
    pub fn clamp_page(&self, page: usize) -> usize {
        page.min(self.count.saturating_sub(1))
    }

    /// Scroll offset at which `page` rests.
    #[must_use]
    pub fn offset_for_page(&self, page: usize) -> f64 {
        self.clamp_page(page) as f64 * self.extent
    }

    /// Nearest page for a scroll offset, clamped to the strip.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the rounded page is positive and clamped to the page count"
    )]
    #[must_use]
    pub fn page_for_offset(&self, offset: f64) -> usize {
        if !self.is_measured() || !offset.is_finite() || self.count == 0 {
            return 0;
        }
        let page = libm::round(offset / self.extent);
        if page <= 0.0 {
            0
        } else {
            self.clamp_page(page as usize)
        }
    }

    /// Page one step from `page` in `direction`, or `None` if that would
    /// leave the strip.
    #[must_use]
    pub fn step_page(&self, page: usize, direction: PageDirection) -> Option<usize> {
        let page = self.clamp_page(page);
        let target = match direction {
            PageDirection::Forward => page.checked_add(1)?,
            PageDirection::Backward => page.checked_sub(1)?,
        };
        (target < self.count).then_some(target)
    }

    /// Left edge of `page` in view coordinates for a scroll offset.
    #[must_use]
    pub fn page_origin(&self, page: usize, scroll_offset: f64) -> f64 {
        page as f64 * self.extent - scroll_offset
    }

    /// Page under the view-space `x` coordinate for a scroll offset.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the floored page is non-negative and checked against the page count"
    )]
    #[must_use]
    pub fn page_at(&self, x: f64, scroll_offset: f64) -> Option<usize> {
        if !self.is_measured() {
            return None;
        }
        let content_x = x + scroll_offset;
        if !(content_x >= 0.0) {
            return None;
        }
        let page = libm::floor(content_x / self.extent) as usize;
        (page < self.count).then_some(page)
    }
}
