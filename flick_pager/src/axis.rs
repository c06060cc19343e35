// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The horizontal paging axis and its two offset ownership strategies.

use alloc::boxed::Box;
use core::fmt;

use flick_geometry::{PageDirection, StripLayout, trigger_threshold};
use flick_motion::{Animated, TimingSpec};

/// A native scrollable surface that owns the true paging offset.
///
/// Offsets follow the scroll convention: page `i` rests at `i * extent`.
pub trait ScrollSurface {
    /// Current horizontal scroll offset.
    fn offset(&self) -> f64;

    /// Moves to `offset`, either animated or immediately.
    fn scroll_to(&mut self, offset: f64, animated: bool);
}

/// Who owns the paging offset.
pub enum PagingStrategy {
    /// A native scrollable surface owns the offset and handles the
    /// non-zoomed drag itself. Tiles only request page turns.
    Delegated(Box<dyn ScrollSurface>),
    /// The axis owns one shared offset. Non-zoomed tiles drag it directly
    /// while they hold an [`OffsetLease`].
    SelfOwned,
}

impl fmt::Debug for PagingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delegated(surface) => f
                .debug_tuple("Delegated")
                .field(&surface.offset())
                .finish(),
            Self::SelfOwned => f.write_str("SelfOwned"),
        }
    }
}

/// A completed page-turn request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageTurn {
    /// Page the turn started from.
    pub from: usize,
    /// Page being moved to.
    pub to: usize,
}

/// Exclusive right to write the shared offset during a pass-through drag.
///
/// Only [`PagingAxis::acquire_offset`] creates leases and at most one is
/// outstanding at a time.
#[derive(Debug, PartialEq, Eq)]
pub struct OffsetLease {
    tile: usize,
}

impl OffsetLease {
    /// Tile holding the lease.
    #[must_use]
    pub fn tile(&self) -> usize {
        self.tile
    }
}

// Translation convention: page `i` rests at `-i * extent`.
#[derive(Debug)]
struct SharedOffset {
    value: Animated,
    anchor: f64,
    holder: Option<usize>,
}

enum AxisMode {
    Delegated(Box<dyn ScrollSurface>),
    SelfOwned(SharedOffset),
}

impl fmt::Debug for AxisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delegated(surface) => f
                .debug_tuple("Delegated")
                .field(&surface.offset())
                .finish(),
            Self::SelfOwned(shared) => f.debug_tuple("SelfOwned").field(shared).finish(),
        }
    }
}

/// Page order, page-trigger geometry and the paging offset.
#[derive(Debug)]
pub struct PagingAxis {
    layout: StripLayout,
    threshold_fraction: f64,
    timing: TimingSpec,
    mode: AxisMode,
}

impl PagingAxis {
    /// Creates an axis over `tile_count` pages.
    ///
    /// The page extent starts unmeasured; page turns are no-ops until
    /// [`Self::set_extent`] provides one.
    #[must_use]
    pub fn new(
        strategy: PagingStrategy,
        tile_count: usize,
        threshold_fraction: f64,
        timing: TimingSpec,
    ) -> Self {
        let mode = match strategy {
            PagingStrategy::Delegated(surface) => AxisMode::Delegated(surface),
            PagingStrategy::SelfOwned => AxisMode::SelfOwned(SharedOffset {
                value: Animated::new(0.0),
                anchor: 0.0,
                holder: None,
            }),
        };
        Self {
            layout: StripLayout::new(0.0, tile_count),
            threshold_fraction,
            timing,
            mode,
        }
    }

    /// Sets the page step (tile width plus margin), keeping the settled page
    /// in place.
    pub fn set_extent(&mut self, extent: f64, now_ms: u64) {
        let page = self.settled_page();
        self.set_extent_at_page(extent, page, now_ms);
    }

    /// Sets the page step and jumps to `page`.
    pub fn set_extent_at_page(&mut self, extent: f64, page: usize, now_ms: u64) {
        self.layout = StripLayout::new(extent, self.layout.count());
        if self.layout.is_measured() {
            self.move_to_page(self.layout.clamp_page(page), now_ms, false);
        }
    }

    /// Strip layout derived from the extent and tile count.
    #[must_use]
    pub fn layout(&self) -> StripLayout {
        self.layout
    }

    /// Page step in pixels; zero until measured.
    #[must_use]
    pub fn tile_extent(&self) -> f64 {
        self.layout.extent()
    }

    /// Number of pages.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.layout.count()
    }

    /// Returns `true` once a usable extent is known.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.layout.is_measured()
    }

    /// Fraction of the extent used as trigger threshold.
    #[must_use]
    pub fn threshold_fraction(&self) -> f64 {
        self.threshold_fraction
    }

    /// Pixel distance past a content edge that turns a zoomed pan into a page turn.
    #[must_use]
    pub fn trigger_threshold(&self) -> f64 {
        trigger_threshold(self.layout.extent(), self.threshold_fraction)
    }

    /// Returns `true` for [`PagingStrategy::SelfOwned`].
    #[must_use]
    pub fn is_self_owned(&self) -> bool {
        matches!(self.mode, AxisMode::SelfOwned(_))
    }

    /// Live scroll offset in the scroll convention (page `i` at `i * extent`).
    #[must_use]
    pub fn current_offset(&self) -> f64 {
        match &self.mode {
            AxisMode::Delegated(surface) => surface.offset(),
            AxisMode::SelfOwned(shared) => -shared.value.value(),
        }
    }

    /// The raw shared translation of the strip for the self-owned strategy.
    ///
    /// Page `i` rests at `-i * extent`. `None` for a delegated axis.
    #[must_use]
    pub fn shared_offset(&self) -> Option<f64> {
        match &self.mode {
            AxisMode::Delegated(_) => None,
            AxisMode::SelfOwned(shared) => Some(shared.value.value()),
        }
    }

    /// Page nearest to the live offset.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.layout.page_for_offset(self.current_offset())
    }

    /// Page the axis is at or animating to.
    #[must_use]
    pub fn settled_page(&self) -> usize {
        match &self.mode {
            AxisMode::Delegated(surface) => self.layout.page_for_offset(surface.offset()),
            AxisMode::SelfOwned(shared) => self.layout.page_for_offset(-shared.value.target()),
        }
    }

    /// Returns `true` while the shared offset is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        match &self.mode {
            AxisMode::Delegated(_) => false,
            AxisMode::SelfOwned(shared) => shared.value.is_animating(),
        }
    }

    /// Turns one page in `direction`.
    ///
    /// The target is clamped to the strip; a request that would leave it, or
    /// any request before the extent is measured, is a no-op returning `None`.
    pub fn request_page_turn(&mut self, direction: PageDirection, now_ms: u64) -> Option<PageTurn> {
        if !self.layout.is_measured() {
            log::debug!("page turn {direction:?} ignored: extent not measured");
            return None;
        }
        let from = self.settled_page();
        let Some(to) = self.layout.step_page(from, direction) else {
            log::debug!("page turn {direction:?} from {from} is out of bounds");
            return None;
        };
        log::debug!("page turn {from} -> {to}");
        self.move_to_page(to, now_ms, true);
        Some(PageTurn { from, to })
    }

    /// Moves to `page`, clamped to the strip. Returns `None` when unmeasured
    /// or already settled on that page.
    pub fn scroll_to_page(&mut self, page: usize, now_ms: u64, animated: bool) -> Option<PageTurn> {
        if !self.layout.is_measured() {
            return None;
        }
        let from = self.settled_page();
        let to = self.layout.clamp_page(page);
        if from == to {
            return None;
        }
        self.move_to_page(to, now_ms, animated);
        Some(PageTurn { from, to })
    }

    fn move_to_page(&mut self, page: usize, now_ms: u64, animated: bool) {
        let offset = self.layout.offset_for_page(page);
        match &mut self.mode {
            AxisMode::Delegated(surface) => surface.scroll_to(offset, animated),
            AxisMode::SelfOwned(shared) => {
                let target = -offset;
                if animated {
                    shared.value.animate_to(target, now_ms, self.timing);
                } else {
                    shared.value.set(target);
                }
                shared.anchor = target;
            }
        }
    }

    /// Grants `tile` the exclusive right to drag the shared offset.
    ///
    /// Returns `None` for a delegated axis or while another lease is out.
    /// Grabbing the offset stops any running page animation where it is.
    pub fn acquire_offset(&mut self, tile: usize) -> Option<OffsetLease> {
        let AxisMode::SelfOwned(shared) = &mut self.mode else {
            return None;
        };
        if let Some(holder) = shared.holder {
            log::warn!("tile {tile} refused offset lease held by tile {holder}");
            return None;
        }
        let current = shared.value.value();
        shared.value.set(current);
        shared.anchor = current;
        shared.holder = Some(tile);
        Some(OffsetLease { tile })
    }

    /// Sets the shared offset to the resting anchor plus `delta`.
    pub fn drag_offset(&mut self, lease: &OffsetLease, delta: f64) {
        let AxisMode::SelfOwned(shared) = &mut self.mode else {
            return;
        };
        if shared.holder != Some(lease.tile) {
            log::warn!("rejected offset write from stale lease of tile {}", lease.tile);
            return;
        }
        shared.value.set(shared.anchor + delta);
    }

    /// Commits the dragged offset as the new resting anchor and ends the lease.
    pub fn release_offset(&mut self, lease: OffsetLease) {
        let AxisMode::SelfOwned(shared) = &mut self.mode else {
            return;
        };
        if shared.holder == Some(lease.tile) {
            shared.anchor = shared.value.value();
            shared.holder = None;
        }
    }

    /// Tile currently holding the offset lease.
    #[must_use]
    pub fn lease_holder(&self) -> Option<usize> {
        match &self.mode {
            AxisMode::Delegated(_) => None,
            AxisMode::SelfOwned(shared) => shared.holder,
        }
    }

    /// Advances the shared offset animation. Returns `true` if it moved.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        match &mut self.mode {
            AxisMode::Delegated(_) => false,
            AxisMode::SelfOwned(shared) => shared.value.advance(now_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use flick_geometry::PageDirection;
    use flick_motion::TimingSpec;

    use super::{PageTurn, PagingAxis, PagingStrategy, ScrollSurface};

    #[derive(Default)]
    struct Surface {
        offset: f64,
        calls: Vec<(f64, bool)>,
    }

    struct SharedSurface(Rc<RefCell<Surface>>);

    impl ScrollSurface for SharedSurface {
        fn offset(&self) -> f64 {
            self.0.borrow().offset
        }

        fn scroll_to(&mut self, offset: f64, animated: bool) {
            let mut s = self.0.borrow_mut();
            s.offset = offset;
            s.calls.push((offset, animated));
        }
    }

    fn self_owned(count: usize) -> PagingAxis {
        let mut axis = PagingAxis::new(PagingStrategy::SelfOwned, count, 0.2, TimingSpec::default());
        axis.set_extent(400.0, 0);
        axis
    }

    #[test]
    fn threshold_is_fraction_of_extent() {
        let axis = self_owned(5);
        assert_eq!(axis.trigger_threshold(), 80.0);
        assert_eq!(axis.tile_count(), 5);
    }

    #[test]
    fn unmeasured_axis_ignores_turns() {
        let mut axis = PagingAxis::new(PagingStrategy::SelfOwned, 5, 0.2, TimingSpec::default());
        assert_eq!(axis.request_page_turn(PageDirection::Forward, 0), None);
        assert_eq!(axis.trigger_threshold(), 0.0);
    }

    #[test]
    fn self_owned_turn_animates_shared_offset() {
        let mut axis = self_owned(5);
        let turn = axis.request_page_turn(PageDirection::Forward, 0);
        assert_eq!(turn, Some(PageTurn { from: 0, to: 1 }));
        assert!(axis.is_animating());
        assert_eq!(axis.settled_page(), 1);
        assert_eq!(axis.current_page(), 0);
        axis.advance(1_000);
        assert_eq!(axis.shared_offset(), Some(-400.0));
        assert_eq!(axis.current_page(), 1);
    }

    #[test]
    fn quick_successive_turns_accumulate() {
        let mut axis = self_owned(5);
        axis.request_page_turn(PageDirection::Forward, 0);
        axis.advance(50);
        assert_eq!(
            axis.request_page_turn(PageDirection::Forward, 50),
            Some(PageTurn { from: 1, to: 2 })
        );
        axis.advance(1_000);
        assert_eq!(axis.shared_offset(), Some(-800.0));
    }

    #[test]
    fn turns_never_leave_the_strip() {
        let mut axis = self_owned(2);
        assert_eq!(axis.request_page_turn(PageDirection::Backward, 0), None);
        axis.request_page_turn(PageDirection::Forward, 0);
        assert_eq!(axis.request_page_turn(PageDirection::Forward, 10), None);
        axis.advance(1_000);
        assert_eq!(axis.current_page(), 1);
    }

    #[test]
    fn lease_is_exclusive() {
        let mut axis = self_owned(3);
        let lease = axis.acquire_offset(0).unwrap();
        assert!(axis.acquire_offset(1).is_none());
        axis.drag_offset(&lease, -120.0);
        assert_eq!(axis.shared_offset(), Some(-120.0));
        axis.release_offset(lease);
        assert_eq!(axis.lease_holder(), None);

        let lease = axis.acquire_offset(1).unwrap();
        axis.drag_offset(&lease, -30.0);
        assert_eq!(axis.shared_offset(), Some(-150.0));
        axis.release_offset(lease);
    }

    #[test]
    fn grabbing_stops_page_animation() {
        let mut axis = self_owned(3);
        axis.request_page_turn(PageDirection::Forward, 0);
        axis.advance(150);
        let mid = axis.shared_offset().unwrap();
        let lease = axis.acquire_offset(0).unwrap();
        assert!(!axis.is_animating());
        axis.advance(1_000);
        assert_eq!(axis.shared_offset(), Some(mid));
        axis.release_offset(lease);
    }

    #[test]
    fn set_extent_keeps_settled_page() {
        let mut axis = self_owned(5);
        axis.scroll_to_page(3, 0, false);
        axis.set_extent(500.0, 0);
        assert_eq!(axis.shared_offset(), Some(-1500.0));
        assert_eq!(axis.current_page(), 3);
    }

    #[test]
    fn delegated_turn_snaps_to_page_multiples() {
        let state = Rc::new(RefCell::new(Surface::default()));
        let mut axis = PagingAxis::new(
            PagingStrategy::Delegated(Box::new(SharedSurface(state.clone()))),
            5,
            0.2,
            TimingSpec::default(),
        );
        axis.set_extent_at_page(400.0, 1, 0);
        assert_eq!(state.borrow().calls.as_slice(), &[(400.0, false)]);

        // The surface was dragged part way; the turn snaps from the nearest page.
        state.borrow_mut().offset = 430.0;
        assert_eq!(
            axis.request_page_turn(PageDirection::Forward, 0),
            Some(PageTurn { from: 1, to: 2 })
        );
        assert_eq!(state.borrow().calls.last(), Some(&(800.0, true)));
        assert!(axis.acquire_offset(0).is_none());
        assert_eq!(axis.current_page(), 2);
    }
}
