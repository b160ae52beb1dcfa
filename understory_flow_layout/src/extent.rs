// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measured footprint of a single item.

use crate::Scalar;

/// Measured `(width, height)` of one item.
///
/// Both components are non-negative: finite negative inputs are clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent<S: Scalar> {
    width: S,
    height: S,
}

impl<S: Scalar> Extent<S> {
    /// Creates a new extent, clamping finite negative components to zero.
    #[must_use]
    pub fn new(width: S, height: S) -> Self {
        // Catch NaNs (and infinities) in debug builds so misuse does not go unnoticed.
        debug_assert!(
            S::is_finite(width) && S::is_finite(height),
            "Extent components must be finite; got {width:?} x {height:?}"
        );
        Self {
            width: S::non_negative(width),
            height: S::non_negative(height),
        }
    }

    /// Returns the width (the packing axis).
    #[must_use]
    pub const fn width(&self) -> S {
        self.width
    }

    /// Returns the height (the cross axis).
    #[must_use]
    pub const fn height(&self) -> S {
        self.height
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Size> for Extent<f64> {
    fn from(size: kurbo::Size) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(feature = "kurbo")]
impl From<Extent<f64>> for kurbo::Size {
    fn from(extent: Extent<f64>) -> Self {
        Self::new(extent.width, extent.height)
    }
}
