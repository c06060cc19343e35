// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use flick_gesture::GestureConfig;
use flick_motion::TimingSpec;

use crate::error::ConfigError;

/// Default fraction of the tile extent used as page-trigger threshold.
pub const DEFAULT_TRIGGER_THRESHOLD_PERCENTAGE: f64 = 0.2;

/// Default maximum zoom.
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Default zoom level a double tap jumps to.
pub const DEFAULT_DOUBLE_TAP_SCALE: f64 = 2.0;

/// Default capacity of the side-effect queue.
pub const DEFAULT_EFFECT_CAPACITY: usize = 64;

/// Carousel configuration.
///
/// Construct with [`Default`] and override fields as needed; the carousel
/// validates it on construction.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Page shown first.
    pub initial_index: usize,
    /// Fraction of the tile extent, in `(0, 1)`, within which a zoomed pan
    /// becomes a page turn.
    pub pan_scroll_trigger_threshold_percentage: f64,
    /// Tile width; the viewport width when `None`.
    pub tile_width: Option<f64>,
    /// Tile height; the viewport height when `None`.
    pub tile_height: Option<f64>,
    /// Gap after each tile. The page step is `tile_width + tile_margin`.
    pub tile_margin: f64,
    /// Upper zoom bound. The lower bound is always 1.
    pub max_scale: f64,
    /// Zoom level a double tap on an unzoomed tile animates to.
    pub double_tap_scale: f64,
    /// Timing of every animated transition.
    pub timing: TimingSpec,
    /// Recognizer thresholds.
    pub gesture: GestureConfig,
    /// Capacity of the side-effect queue; the oldest effect is dropped on overflow.
    pub effect_capacity: usize,
    /// Identifier surfaced for tests and debugging.
    pub test_id: Option<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            initial_index: 0,
            pan_scroll_trigger_threshold_percentage: DEFAULT_TRIGGER_THRESHOLD_PERCENTAGE,
            tile_width: None,
            tile_height: None,
            tile_margin: 0.0,
            max_scale: DEFAULT_MAX_SCALE,
            double_tap_scale: DEFAULT_DOUBLE_TAP_SCALE,
            timing: TimingSpec::default(),
            gesture: GestureConfig::default(),
            effect_capacity: DEFAULT_EFFECT_CAPACITY,
            test_id: None,
        }
    }
}

impl CarouselConfig {
    /// Checks the configuration against a collection of `image_count` images.
    pub fn validate(&self, image_count: usize) -> Result<(), ConfigError> {
        if image_count == 0 {
            return Err(ConfigError::EmptyCollection);
        }
        let fraction = self.pan_scroll_trigger_threshold_percentage;
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(ConfigError::ThresholdOutOfRange(fraction));
        }
        if self.initial_index >= image_count {
            return Err(ConfigError::InitialIndexOutOfRange {
                index: self.initial_index,
                count: image_count,
            });
        }
        for (dimension, value) in [("width", self.tile_width), ("height", self.tile_height)] {
            if let Some(value) = value {
                if !(value.is_finite() && value > 0.0) {
                    return Err(ConfigError::InvalidTileDimension { dimension, value });
                }
            }
        }
        if !(self.tile_margin.is_finite() && self.tile_margin >= 0.0) {
            return Err(ConfigError::InvalidMargin(self.tile_margin));
        }
        let zoom_ok = self.max_scale.is_finite()
            && self.max_scale > 1.0
            && self.double_tap_scale > 1.0
            && self.double_tap_scale <= self.max_scale;
        if !zoom_ok {
            return Err(ConfigError::InvalidZoomLevels {
                max_scale: self.max_scale,
                double_tap_scale: self.double_tap_scale,
            });
        }
        if self.effect_capacity == 0 {
            return Err(ConfigError::ZeroEffectCapacity);
        }
        Ok(())
    }
}
