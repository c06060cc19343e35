// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flick_geometry --heading-base-level=0

//! Flick Geometry: transform, bounds and paging math for zoomable image tiles.
//!
//! This crate provides small, headless helpers shared by the Flick tile and
//! carousel controllers. It focuses on:
//! - The per-tile transform (uniform scale about the tile center plus a
//!   translation) and the on-screen bounds it produces.
//! - Deciding when a zoomed pan has dragged the content far enough past a
//!   viewport edge to be reinterpreted as a page turn.
//! - Spring-back targets that bring zoomed content back inside the viewport.
//! - Layout of a horizontal strip of equally sized pages.
//!
//! It does **not** own any gesture or animation state. Callers are expected to:
//! - Keep their own transform state and feed it through [`TileTransform`].
//! - Measure (or compute) content bounds and pass them to
//!   [`page_turn_for_bounds`] and [`spring_back_targets`].
//! - Use [`StripLayout`] to map between scroll offsets and page indices.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use flick_geometry::{PageDirection, TileTransform, page_turn_for_bounds};
//!
//! let viewport = Size::new(400.0, 800.0);
//! let transform = TileTransform::new(2.0, Vec2::new(-300.0, 0.0));
//!
//! // The doubled content is 800px wide; dragged left by 300px its right
//! // edge is 100px inside the viewport.
//! let bounds = transform.content_bounds(viewport).unwrap();
//! assert_eq!(
//!     page_turn_for_bounds(bounds, viewport.width, 80.0),
//!     Some(PageDirection::Forward)
//! );
//! ```
//!
//! All lengths are in logical pixels. Degenerate inputs (zero or negative
//! sizes) never panic; the helpers report "nothing to do" instead.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod strip;
mod transform;

pub use bounds::{PageDirection, SpringBack, page_turn_for_bounds, spring_back_targets};
pub use strip::{StripLayout, trigger_threshold};
pub use transform::{ScaleLimits, TileTransform};
