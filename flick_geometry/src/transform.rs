// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size, Vec2};

/// Inclusive range of allowed zoom factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// The default gallery range, `[1.0, 3.0]`.
    pub const DEFAULT: Self = Self { min: 1.0, max: 3.0 };

    /// Creates a new range.
    ///
    /// The provided bounds are normalized so that `min <= max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Lower bound (the identity zoom for a gallery tile).
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the range.
    ///
    /// Non-finite input collapses to the lower bound.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min;
        }
        scale.clamp(self.min, self.max)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Rendered transform of one tile.
///
/// The content is scaled uniformly about the center of the tile viewport and
/// then translated by `translation`. A translation of zero keeps the scaled
/// content centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileTransform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Pixel offset from the centered position.
    pub translation: Vec2,
}

impl TileTransform {
    /// Unscaled, centered content.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform from a scale and a translation.
    #[must_use]
    pub fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Returns `true` if this is exactly the identity zoom.
    #[must_use]
    pub fn is_identity_scale(&self) -> bool {
        self.scale == 1.0
    }

    /// Bounds of the transformed content in tile-local coordinates.
    ///
    /// The content box is the viewport box itself (the image covers its
    /// tile), so the result's origin is relative to the tile's top-left
    /// corner. Returns `None` when the viewport is empty, negative or not
    /// finite, or when the scale is not positive.
    #[must_use]
    pub fn content_bounds(&self, viewport: Size) -> Option<Rect> {
        if !is_measurable(viewport) || !(self.scale > 0.0) {
            return None;
        }
        let width = viewport.width * self.scale;
        let height = viewport.height * self.scale;
        let x0 = self.translation.x + (viewport.width - width) * 0.5;
        let y0 = self.translation.y + (viewport.height - height) * 0.5;
        Some(Rect::new(x0, y0, x0 + width, y0 + height))
    }

    /// Affine mapping content coordinates into tile-local coordinates.
    #[must_use]
    pub fn to_affine(&self, viewport: Size) -> Affine {
        let center = Vec2::new(viewport.width * 0.5, viewport.height * 0.5);
        Affine::translate(center + self.translation)
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}

impl Default for TileTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

pub(crate) fn is_measurable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
