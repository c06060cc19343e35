// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side effects crossing from the gesture/animation loop to application logic.

use alloc::collections::VecDeque;

use crate::axis::PageTurn;

/// An observable side effect produced while handling gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// A tile was tapped; the press callback should run.
    ImagePressed {
        /// Tapped tile.
        index: usize,
    },
    /// A tile's zoomed flag flipped.
    ZoomChanged {
        /// Tile whose flag flipped.
        index: usize,
        /// New value of the flag.
        zoomed: bool,
    },
    /// The paging axis started moving to another page.
    PageTurn(PageTurn),
}

/// Bounded, ordered queue of [`Effect`]s, drained once per application tick.
///
/// When full, pushing drops the oldest effect.
#[derive(Clone, Debug)]
pub struct EffectQueue {
    items: VecDeque<Effect>,
    capacity: usize,
    dropped: u64,
}

impl EffectQueue {
    /// Creates a queue holding at most `capacity` effects (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Appends an effect.
    pub fn push(&mut self, effect: Effect) {
        if self.items.len() == self.capacity {
            if let Some(oldest) = self.items.pop_front() {
                self.dropped += 1;
                log::warn!("effect queue full, dropped {oldest:?}");
            }
        }
        self.items.push_back(effect);
    }

    /// Removes and yields every queued effect in order.
    pub fn drain(&mut self) -> impl Iterator<Item = Effect> + '_ {
        self.items.drain(..)
    }

    /// Number of queued effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of queued effects.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Effects dropped on overflow since creation.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Effect, EffectQueue};

    #[test]
    fn drains_in_order() {
        let mut queue = EffectQueue::new(4);
        queue.push(Effect::ImagePressed { index: 0 });
        queue.push(Effect::ZoomChanged {
            index: 0,
            zoomed: true,
        });
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            [
                Effect::ImagePressed { index: 0 },
                Effect::ZoomChanged {
                    index: 0,
                    zoomed: true
                }
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn overflow_drops_oldest() {
        let mut queue = EffectQueue::new(2);
        for index in 0..3 {
            queue.push(Effect::ImagePressed { index });
        }
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dropped(), 1);
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            [
                Effect::ImagePressed { index: 1 },
                Effect::ImagePressed { index: 2 }
            ]
        );
    }

    #[test]
    fn zero_capacity_holds_one() {
        let mut queue = EffectQueue::new(0);
        assert_eq!(queue.capacity(), 1);
        queue.push(Effect::ImagePressed { index: 0 });
        assert_eq!(queue.len(), 1);
    }
}
