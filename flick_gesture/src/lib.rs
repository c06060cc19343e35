// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flick_gesture --heading-base-level=0

//! Flick Gesture: multi-recognizer arbitration for touch gestures.
//!
//! This crate turns raw pointer samples for one gesture target into
//! recognized gesture callbacks. It provides small, focused trackers that can
//! be used on their own:
//!
//! - [`PanTracker`]: centroid translation that survives pointers being added
//!   and removed.
//! - [`PinchTracker`]: two-pointer span ratio.
//! - [`TapTracker`]: single and double taps, with double-tap right of refusal.
//! - [`VelocityTracker`]: release velocity from recent samples.
//!
//! and a [`GestureArbiter`] that composes them under one policy, keyed by the
//! number of active pointers and by which [`Recognizers`] the target
//! currently enables:
//!
//! - Pan, pinch and taps are recognized simultaneously.
//! - Double tap and single tap exclude each other.
//! - Fling and pan exclude each other, with pan winning once it activates.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use flick_gesture::{GestureArbiter, GestureEvent, Recognizers};
//!
//! let mut arbiter = GestureArbiter::default();
//! let enabled = Recognizers::all();
//!
//! arbiter.pointer_down(1, Point::new(100.0, 100.0), 0, enabled);
//! let events = arbiter.pointer_move(1, Point::new(140.0, 100.0), 16, enabled);
//! assert_eq!(
//!     events.as_slice(),
//!     &[
//!         GestureEvent::PanBegin,
//!         GestureEvent::PanUpdate { translation: Vec2::new(40.0, 0.0) },
//!     ]
//! );
//! ```
//!
//! The crate does not capture pointers or hit test; hosts route each pointer
//! stream to the arbiter of the target it belongs to.
//!
//! This crate is `no_std`.

#![no_std]

mod arbiter;
pub mod config;
mod event;
mod pan;
mod pinch;
mod tap;
mod velocity;

pub use arbiter::{GestureArbiter, GestureEvents};
pub use config::GestureConfig;
pub use event::{FlingDirection, GestureEvent, PointerId, Recognizers};
pub use pan::PanTracker;
pub use pinch::PinchTracker;
pub use tap::{TapOutcome, TapTracker};
pub use velocity::VelocityTracker;
