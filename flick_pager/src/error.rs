// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A malformed [`CarouselConfig`](crate::CarouselConfig) or image collection,
/// rejected when the carousel is constructed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The image collection has no entries.
    #[error("image collection is empty")]
    EmptyCollection,
    /// The page-trigger threshold percentage is outside the open interval (0, 1).
    #[error("pan scroll trigger threshold percentage {0} is outside (0, 1)")]
    ThresholdOutOfRange(f64),
    /// The initial page does not exist.
    #[error("initial index {index} is out of range for {count} images")]
    InitialIndexOutOfRange {
        /// Requested initial page.
        index: usize,
        /// Number of images.
        count: usize,
    },
    /// A tile width or height override is not a positive finite number.
    #[error("tile {dimension} {value} must be positive and finite")]
    InvalidTileDimension {
        /// `"width"` or `"height"`.
        dimension: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The tile margin is negative or not finite.
    #[error("tile margin {0} must be non-negative and finite")]
    InvalidMargin(f64),
    /// `max_scale` is not above 1 or `double_tap_scale` is outside `(1, max_scale]`.
    #[error("zoom levels are invalid: max scale {max_scale}, double tap scale {double_tap_scale}")]
    InvalidZoomLevels {
        /// Configured maximum scale.
        max_scale: f64,
        /// Configured double-tap scale.
        double_tap_scale: f64,
    },
    /// The side-effect queue cannot hold anything.
    #[error("effect capacity must be at least 1")]
    ZeroEffectCapacity,
}
