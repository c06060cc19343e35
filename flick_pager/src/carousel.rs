// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel coordinator: tiles, pointer routing and paging.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use flick_geometry::{PageDirection, ScaleLimits, TileTransform};
use flick_gesture::{GestureArbiter, GestureEvent, GestureEvents, PointerId};
use kurbo::{Point, Size};

use crate::axis::{PageTurn, PagingAxis, PagingStrategy};
use crate::config::CarouselConfig;
use crate::effects::{Effect, EffectQueue};
use crate::error::ConfigError;
use crate::tile::{TileController, TileOptions, TilePhase};

/// Press callback, called with the tapped image's locator and index.
pub type ImagePressCallback = Box<dyn FnMut(&str, usize)>;

struct TileSlot {
    locator: String,
    controller: TileController,
    arbiter: GestureArbiter,
}

/// A horizontally paging strip of zoomable image tiles.
///
/// The host feeds pointer samples in view coordinates, calls [`Carousel::tick`]
/// once per frame and renders each tile with [`Carousel::tile_transform`] at
/// [`Carousel::tile_origin`]. Side effects are delivered by
/// [`Carousel::drain_effects`], which also runs the press callback.
pub struct Carousel {
    config: CarouselConfig,
    slots: Vec<TileSlot>,
    axis: PagingAxis,
    effects: EffectQueue,
    on_image_press: Option<ImagePressCallback>,
    viewport: Size,
    // The initial page is applied on the first usable measurement.
    initial_pending: bool,
    captured: Option<usize>,
}

impl Carousel {
    /// Creates a carousel over `images`, in order.
    ///
    /// When both tile dimensions are configured the strip is measured right
    /// away; otherwise it waits for [`Self::set_viewport_size`].
    pub fn new<I, S>(
        images: I,
        config: CarouselConfig,
        strategy: PagingStrategy,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locators: Vec<String> = images.into_iter().map(Into::into).collect();
        config.validate(locators.len())?;

        let options = TileOptions {
            limits: ScaleLimits::new(1.0, config.max_scale),
            double_tap_scale: config.double_tap_scale,
            timing: config.timing,
            tap_enabled: false,
        };
        let slots = locators
            .into_iter()
            .enumerate()
            .map(|(index, locator)| TileSlot {
                locator,
                controller: TileController::new(index, options),
                arbiter: GestureArbiter::new(config.gesture),
            })
            .collect::<Vec<_>>();
        let axis = PagingAxis::new(
            strategy,
            slots.len(),
            config.pan_scroll_trigger_threshold_percentage,
            config.timing,
        );
        let mut carousel = Self {
            effects: EffectQueue::new(config.effect_capacity),
            config,
            slots,
            axis,
            on_image_press: None,
            viewport: Size::ZERO,
            initial_pending: true,
            captured: None,
        };
        carousel.apply_layout(0);
        log::debug!(
            "carousel {:?} created with {} images at page {}",
            carousel.config.test_id,
            carousel.slots.len(),
            carousel.config.initial_index
        );
        Ok(carousel)
    }

    /// Installs or removes the press callback. Taps are only recognized while
    /// a callback is installed.
    pub fn set_on_image_press(&mut self, callback: Option<ImagePressCallback>) {
        let enabled = callback.is_some();
        self.on_image_press = callback;
        for slot in &mut self.slots {
            slot.controller.set_tap_enabled(enabled);
        }
    }

    /// Sets the size of the carousel's viewport.
    ///
    /// Unconfigured tile dimensions follow it. The strip keeps its current
    /// page across size changes.
    pub fn set_viewport_size(&mut self, size: Size, now_ms: u64) {
        self.viewport = size;
        self.apply_layout(now_ms);
    }

    fn apply_layout(&mut self, now_ms: u64) {
        let tile = self.tile_size();
        for slot in &mut self.slots {
            slot.controller.set_viewport(tile);
        }
        let extent = if tile.width.is_finite() && tile.width > 0.0 {
            tile.width + self.config.tile_margin
        } else {
            0.0
        };
        if self.initial_pending {
            self.axis
                .set_extent_at_page(extent, self.config.initial_index, now_ms);
            self.initial_pending = !self.axis.is_measured();
        } else {
            self.axis.set_extent(extent, now_ms);
        }
    }

    /// Size of one tile: the configured dimensions, falling back to the viewport.
    #[must_use]
    pub fn tile_size(&self) -> Size {
        Size::new(
            self.config.tile_width.unwrap_or(self.viewport.width),
            self.config.tile_height.unwrap_or(self.viewport.height),
        )
    }

    /// A pointer went down at `pos`, in view coordinates.
    ///
    /// The first pointer of a stream captures the tile under it; the rest of
    /// the stream goes to that tile. Pointers outside every tile are ignored.
    pub fn pointer_down(&mut self, id: PointerId, pos: Point, now_ms: u64) {
        let index = match self.captured {
            Some(index) => index,
            None => {
                let Some(index) = self
                    .axis
                    .layout()
                    .page_at(pos.x, self.axis.current_offset())
                else {
                    log::trace!("pointer {id} at {pos:?} hit no tile");
                    return;
                };
                log::debug!("tile {index} captured pointer stream");
                self.captured = Some(index);
                index
            }
        };
        let self_owned = self.axis.is_self_owned();
        let slot = &mut self.slots[index];
        let enabled = slot.controller.recognizers(self_owned);
        let events = slot.arbiter.pointer_down(id, pos, now_ms, enabled);
        self.route(index, &events, now_ms);
    }

    /// A captured pointer moved.
    pub fn pointer_move(&mut self, id: PointerId, pos: Point, now_ms: u64) {
        let Some(index) = self.captured else {
            return;
        };
        let self_owned = self.axis.is_self_owned();
        let slot = &mut self.slots[index];
        let enabled = slot.controller.recognizers(self_owned);
        let events = slot.arbiter.pointer_move(id, pos, now_ms, enabled);
        self.route(index, &events, now_ms);
    }

    /// A captured pointer lifted. Capture ends with the last pointer.
    pub fn pointer_up(&mut self, id: PointerId, now_ms: u64) {
        let Some(index) = self.captured else {
            return;
        };
        let self_owned = self.axis.is_self_owned();
        let slot = &mut self.slots[index];
        let enabled = slot.controller.recognizers(self_owned);
        let events = slot.arbiter.pointer_up(id, now_ms, enabled);
        if slot.arbiter.active_pointers() == 0 {
            self.captured = None;
        }
        self.route(index, &events, now_ms);
    }

    /// The host interrupted the captured stream. Active gestures end as if
    /// released.
    pub fn pointer_cancel(&mut self, now_ms: u64) {
        let Some(index) = self.captured.take() else {
            return;
        };
        let events = self.slots[index].arbiter.cancel();
        self.route(index, &events, now_ms);
    }

    /// Feeds a recognized gesture straight to a tile, bypassing the built-in
    /// arbiter. For hosts that run their own recognizers.
    pub fn dispatch(&mut self, index: usize, event: GestureEvent, now_ms: u64) {
        let Some(slot) = self.slots.get_mut(index) else {
            log::warn!("gesture {event:?} dispatched to missing tile {index}");
            return;
        };
        slot.controller
            .handle(event, now_ms, &mut self.axis, &mut self.effects);
    }

    fn route(&mut self, index: usize, events: &GestureEvents, now_ms: u64) {
        let controller = &mut self.slots[index].controller;
        for &event in events {
            controller.handle(event, now_ms, &mut self.axis, &mut self.effects);
        }
    }

    /// Advances animations and time-based recognizers to `now_ms`.
    ///
    /// Returns `true` while anything is still moving.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut moving = self.axis.advance(now_ms) || self.axis.is_animating();
        let self_owned = self.axis.is_self_owned();
        for slot in &mut self.slots {
            let enabled = slot.controller.recognizers(self_owned);
            for event in slot.arbiter.poll(now_ms, enabled) {
                slot.controller
                    .handle(event, now_ms, &mut self.axis, &mut self.effects);
            }
            moving |= slot.controller.advance(now_ms, &mut self.effects);
            moving |= slot.controller.is_animating();
        }
        moving
    }

    /// Takes every pending side effect, in order, running the press callback
    /// for each tap.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        let drained: Vec<Effect> = self.effects.drain().collect();
        if let Some(callback) = self.on_image_press.as_mut() {
            for effect in &drained {
                if let Effect::ImagePressed { index } = *effect {
                    if let Some(slot) = self.slots.get(index) {
                        callback(&slot.locator, index);
                    }
                }
            }
        }
        drained
    }

    /// Turns one page, as a tile's trigger would.
    pub fn request_page_turn(&mut self, direction: PageDirection, now_ms: u64) -> Option<PageTurn> {
        let turn = self.axis.request_page_turn(direction, now_ms)?;
        self.effects.push(Effect::PageTurn(turn));
        Some(turn)
    }

    /// Jumps to `index`, clamped to the strip.
    pub fn scroll_to_page(&mut self, index: usize, animated: bool, now_ms: u64) -> Option<PageTurn> {
        let turn = self.axis.scroll_to_page(index, now_ms, animated)?;
        log::debug!("scroll to page {} -> {}", turn.from, turn.to);
        self.effects.push(Effect::PageTurn(turn));
        Some(turn)
    }

    /// Page nearest to the live offset.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.axis.current_page()
    }

    /// Live scroll offset; page `i` rests at `i * tile_extent`.
    #[must_use]
    pub fn current_offset(&self) -> f64 {
        self.axis.current_offset()
    }

    /// The paging axis.
    #[must_use]
    pub fn axis(&self) -> &PagingAxis {
        &self.axis
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`; construction rejects empty collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The controller of tile `index`.
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&TileController> {
        self.slots.get(index).map(|slot| &slot.controller)
    }

    /// Rendered transform of tile `index`.
    #[must_use]
    pub fn tile_transform(&self, index: usize) -> Option<TileTransform> {
        self.tile(index).map(TileController::transform)
    }

    /// Left edge of tile `index` in view coordinates at the live offset.
    #[must_use]
    pub fn tile_origin(&self, index: usize) -> Option<f64> {
        (index < self.slots.len()).then(|| {
            self.axis
                .layout()
                .page_origin(index, self.axis.current_offset())
        })
    }

    /// Image locators in page order.
    pub fn locators(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(|slot| slot.locator.as_str())
    }

    /// Identifier from the configuration.
    #[must_use]
    pub fn test_id(&self) -> Option<&str> {
        self.config.test_id.as_deref()
    }

    /// Tile owning the current pointer stream.
    #[must_use]
    pub fn captured_tile(&self) -> Option<usize> {
        self.captured
    }

    /// Effects dropped because the queue overflowed.
    #[must_use]
    pub fn dropped_effects(&self) -> u64 {
        self.effects.dropped()
    }

    /// Snapshot of the carousel state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CarouselDebugInfo {
        CarouselDebugInfo {
            test_id: self.config.test_id.clone(),
            current_page: self.axis.current_page(),
            current_offset: self.axis.current_offset(),
            tile_extent: self.axis.tile_extent(),
            trigger_threshold: self.axis.trigger_threshold(),
            self_owned: self.axis.is_self_owned(),
            lease_holder: self.axis.lease_holder(),
            captured_tile: self.captured,
            pending_effects: self.effects.len(),
            tiles: self
                .slots
                .iter()
                .map(|slot| TileDebugInfo {
                    transform: slot.controller.transform(),
                    phase: slot.controller.phase(),
                    zoomed: slot.controller.is_zoomed(),
                    scroll_triggered: slot.controller.scroll_triggered(),
                    active_pointers: slot.arbiter.active_pointers(),
                })
                .collect(),
        }
    }
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("test_id", &self.config.test_id)
            .field("tiles", &self.slots.len())
            .field("axis", &self.axis)
            .field("captured", &self.captured)
            .field("has_press_callback", &self.on_image_press.is_some())
            .finish_non_exhaustive()
    }
}

/// Debug snapshot of a [`Carousel`].
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselDebugInfo {
    /// Identifier from the configuration.
    pub test_id: Option<String>,
    /// Page nearest to the live offset.
    pub current_page: usize,
    /// Live scroll offset.
    pub current_offset: f64,
    /// Page step.
    pub tile_extent: f64,
    /// Page-trigger threshold in pixels.
    pub trigger_threshold: f64,
    /// Whether the carousel owns the paging offset.
    pub self_owned: bool,
    /// Tile currently dragging the shared offset.
    pub lease_holder: Option<usize>,
    /// Tile owning the current pointer stream.
    pub captured_tile: Option<usize>,
    /// Effects waiting to be drained.
    pub pending_effects: usize,
    /// Per-tile state in page order.
    pub tiles: Vec<TileDebugInfo>,
}

/// Debug snapshot of one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileDebugInfo {
    /// Rendered transform.
    pub transform: TileTransform,
    /// Gesture phase.
    pub phase: TilePhase,
    /// Zoomed flag.
    pub zoomed: bool,
    /// Page-turn latch.
    pub scroll_triggered: bool,
    /// Pointers down on this tile.
    pub active_pointers: usize,
}
