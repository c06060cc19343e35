// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flick_motion --heading-base-level=0

//! Flick Motion: fire-and-forget value animations driven by frame timestamps.
//!
//! An [`Animated`] value holds a current value and, optionally, an in-flight
//! tween towards a target. Hosts advance every animated value once per frame
//! with a monotonic timestamp in milliseconds.
//!
//! Animations never queue: starting a new animation on a value that is
//! mid-flight retargets it from wherever it currently is, and writing the
//! value directly with [`Animated::set`] cancels any tween. The last writer
//! always wins.
//!
//! ## Minimal example
//!
//! ```rust
//! use flick_motion::{Animated, TimingSpec};
//!
//! let mut scale = Animated::new(1.0);
//! scale.animate_to(2.0, 0, TimingSpec::default());
//! assert!(scale.is_animating());
//!
//! // Halfway through the default 300ms ease-in-out curve.
//! scale.advance(150);
//! assert!((scale.value() - 1.5).abs() < 1e-9);
//!
//! scale.advance(300);
//! assert_eq!(scale.value(), 2.0);
//! assert!(!scale.is_animating());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animated;
mod easing;

pub use animated::Animated;
pub use easing::{Easing, TimingSpec};
