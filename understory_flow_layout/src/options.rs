// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for a [`LineCache`](crate::LineCache).

use core::num::NonZeroUsize;

use crate::{RangeError, Scalar};

/// Packing configuration: the wrap width and an optional per-line item cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowOptions<S: Scalar> {
    content_area_width: S,
    items_per_line: Option<NonZeroUsize>,
}

impl<S: Scalar> FlowOptions<S> {
    /// Creates options that wrap at `content_area_width`, with no item cap.
    ///
    /// `content_area_width` is expected to be positive and finite; use
    /// [`FlowOptions::try_new`] to have that checked.
    #[must_use]
    pub fn new(content_area_width: S) -> Self {
        debug_assert!(
            S::is_finite(content_area_width) && content_area_width > S::zero(),
            "FlowOptions content area width must be positive and finite; got {content_area_width:?}"
        );
        Self {
            content_area_width,
            items_per_line: None,
        }
    }

    /// Like [`FlowOptions::new`], but rejects a non-positive or non-finite width.
    pub fn try_new(content_area_width: S) -> Result<Self, RangeError> {
        if !S::is_finite(content_area_width) || content_area_width <= S::zero() {
            return Err(RangeError::InvalidWidth);
        }
        Ok(Self::new(content_area_width))
    }

    /// Caps the number of items per line. `0` removes the cap.
    #[must_use]
    pub fn with_items_per_line(mut self, items_per_line: usize) -> Self {
        self.items_per_line = NonZeroUsize::new(items_per_line);
        self
    }

    /// The width at which lines wrap.
    #[must_use]
    pub const fn content_area_width(&self) -> S {
        self.content_area_width
    }

    /// The per-line item cap, if any.
    #[must_use]
    pub const fn items_per_line(&self) -> Option<NonZeroUsize> {
        self.items_per_line
    }
}
