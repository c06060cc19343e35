// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flick_pager --heading-base-level=0

//! Flick Pager: a horizontally paging carousel of zoomable image tiles.
//!
//! Every image is a tile with its own zoom/pan transform. Panning inside a
//! zoomed tile hands off into paging once the content has been dragged past
//! its edge, so a user can drag through a zoomed image straight into the
//! next one.
//!
//! The crate is split into:
//!
//! - [`TileController`]: the per-tile gesture/transform state machine. It
//!   consumes recognized [`GestureEvent`](flick_gesture::GestureEvent)s and
//!   owns scale, translation and their anchors.
//! - [`PagingAxis`]: page order, the trigger threshold and the paging offset.
//!   The offset is either owned by a native [`ScrollSurface`]
//!   ([`PagingStrategy::Delegated`]) or by the axis itself
//!   ([`PagingStrategy::SelfOwned`]), in which case tiles drag it through an
//!   exclusive [`OffsetLease`].
//! - [`Carousel`]: the coordinator. It routes pointer streams to the tile
//!   under the first pointer, runs a [`GestureArbiter`](flick_gesture::GestureArbiter)
//!   per tile, advances animations and queues side effects.
//!
//! Side effects that belong to application logic (press callbacks, zoomed
//! flag changes, page notifications) are queued as [`Effect`]s in a bounded
//! [`EffectQueue`] and delivered by [`Carousel::drain_effects`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use flick_pager::{Carousel, CarouselConfig, PagingStrategy};
//!
//! let mut carousel = Carousel::new(
//!     ["a.jpg", "b.jpg", "c.jpg"],
//!     CarouselConfig::default(),
//!     PagingStrategy::SelfOwned,
//! )
//! .unwrap();
//! carousel.set_viewport_size(Size::new(400.0, 800.0), 0);
//!
//! // Drag the strip left by 100px.
//! carousel.pointer_down(1, Point::new(300.0, 400.0), 0);
//! carousel.pointer_move(1, Point::new(200.0, 400.0), 16);
//! carousel.pointer_up(1, 32);
//! assert_eq!(carousel.current_offset(), 100.0);
//!
//! // Pinch tile 0 to twice its size.
//! carousel.pointer_down(1, Point::new(150.0, 400.0), 100);
//! carousel.pointer_down(2, Point::new(250.0, 400.0), 100);
//! carousel.pointer_move(2, Point::new(350.0, 400.0), 116);
//! assert_eq!(carousel.tile_transform(0).unwrap().scale, 2.0);
//! ```
//!
//! Timestamps are monotonic milliseconds supplied by the host, and all
//! lengths are logical pixels.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod carousel;
mod config;
mod effects;
mod error;
mod tile;

pub use axis::{OffsetLease, PageTurn, PagingAxis, PagingStrategy, ScrollSurface};
pub use carousel::{Carousel, CarouselDebugInfo, ImagePressCallback, TileDebugInfo};
pub use config::{
    CarouselConfig, DEFAULT_DOUBLE_TAP_SCALE, DEFAULT_EFFECT_CAPACITY, DEFAULT_MAX_SCALE,
    DEFAULT_TRIGGER_THRESHOLD_PERCENTAGE,
};
pub use effects::{Effect, EffectQueue};
pub use error::ConfigError;
pub use tile::{TileController, TileOptions, TilePhase};

pub use flick_geometry::{PageDirection, TileTransform};
