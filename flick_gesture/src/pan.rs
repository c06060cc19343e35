// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan tracking: total centroid translation across pointer additions and removals.
//!
//! ## Usage
//!
//! 1) Start tracking with [`PanTracker::start`] at the first pointer's position.
//! 2) On each move, call [`PanTracker::update`] with the current centroid to get
//!    the total translation since the start.
//! 3) When pointers are added or removed the centroid jumps; call
//!    [`PanTracker::rebase`] with the new centroid so the translation continues
//!    smoothly from where it was.
//! 4) End with [`PanTracker::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use flick_gesture::PanTracker;
//!
//! let mut pan = PanTracker::default();
//! pan.start(Point::new(10.0, 20.0));
//! assert_eq!(pan.update(Point::new(30.0, 20.0)), Some(Vec2::new(20.0, 0.0)));
//!
//! // A second finger lands; the centroid moves to (60, 20) without any drag.
//! pan.rebase(Point::new(60.0, 20.0));
//! assert_eq!(pan.translation(), Some(Vec2::new(20.0, 0.0)));
//!
//! assert_eq!(pan.update(Point::new(65.0, 25.0)), Some(Vec2::new(25.0, 5.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the translation of a pointer centroid.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanTracker {
    /// Centroid the current segment is measured from.
    pub origin: Option<Point>,
    /// Last recorded centroid.
    pub last: Option<Point>,
    /// Translation accumulated by earlier segments.
    pub carried: Vec2,
}

impl PanTracker {
    /// Start tracking from the given position, discarding any previous state.
    pub fn start(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.last = Some(pos);
        self.carried = Vec2::ZERO;
    }

    /// Record a new centroid, returning the total translation since the start.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let origin = self.origin?;
        self.last = Some(pos);
        Some(self.carried + (pos - origin))
    }

    /// Start a new segment at `pos`, keeping the translation reached so far.
    pub fn rebase(&mut self, pos: Point) {
        if let (Some(origin), Some(last)) = (self.origin, self.last) {
            self.carried += last - origin;
            self.origin = Some(pos);
            self.last = Some(pos);
        }
    }

    /// Total translation at the last recorded centroid.
    pub fn translation(&self) -> Option<Vec2> {
        let origin = self.origin?;
        let last = self.last?;
        Some(self.carried + (last - origin))
    }

    /// Stop tracking and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while tracking.
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}
