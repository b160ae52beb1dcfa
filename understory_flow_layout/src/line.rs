// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line aggregates and the greedy packer that produces them.

use core::num::NonZeroUsize;

use crate::{Extent, Scalar};

/// A contiguous, non-empty run of measured items packed into one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<S: Scalar> {
    item_count: usize,
    total_width: S,
    max_height: S,
}

impl<S: Scalar> Line<S> {
    /// Number of items in this line. Always at least 1.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Sum of the widths of the items in this line.
    #[must_use]
    pub const fn total_width(&self) -> S {
        self.total_width
    }

    /// Largest height among the items in this line.
    #[must_use]
    pub const fn max_height(&self) -> S {
        self.max_height
    }
}

/// The line currently being filled during a rebuild.
#[derive(Debug, Clone, Copy)]
struct OpenLine<S: Scalar> {
    item_count: usize,
    total_width: S,
    max_height: S,
}

impl<S: Scalar> OpenLine<S> {
    fn empty() -> Self {
        Self {
            item_count: 0,
            total_width: S::zero(),
            max_height: S::zero(),
        }
    }

    fn starting_with(extent: Extent<S>) -> Self {
        Self {
            item_count: 1,
            total_width: extent.width(),
            max_height: extent.height(),
        }
    }

    fn push(&mut self, extent: Extent<S>) {
        self.item_count += 1;
        self.total_width = S::add(self.total_width, extent.width());
        self.max_height = S::max(self.max_height, extent.height());
    }

    fn close(self) -> Option<Line<S>> {
        (self.item_count > 0).then_some(Line {
            item_count: self.item_count,
            total_width: self.total_width,
            max_height: self.max_height,
        })
    }
}

/// Greedy first-fit packer with an optional per-line item cap.
///
/// Items are fed in index order. A new line starts when the next item would
/// push the running width past `content_width` (unless the running line is
/// empty, so an oversized item still gets a line of its own) or when it would
/// exceed the item cap.
#[derive(Debug)]
pub(crate) struct LinePacker<S: Scalar> {
    content_width: S,
    items_per_line: Option<NonZeroUsize>,
    open: OpenLine<S>,
}

impl<S: Scalar> LinePacker<S> {
    pub(crate) fn new(content_width: S, items_per_line: Option<NonZeroUsize>) -> Self {
        Self {
            content_width,
            items_per_line,
            open: OpenLine::empty(),
        }
    }

    /// Adds one item, returning the line it closed, if any.
    pub(crate) fn push(&mut self, extent: Extent<S>) -> Option<Line<S>> {
        let open = &self.open;
        // An overflowing sum is wider than any representable content width.
        let over_width = open.item_count > 0
            && S::checked_add(open.total_width, extent.width())
                .is_none_or(|sum| sum > self.content_width);
        let over_cap = self
            .items_per_line
            .is_some_and(|cap| open.item_count + 1 > cap.get());

        if over_width || over_cap {
            let closed = core::mem::replace(&mut self.open, OpenLine::starting_with(extent));
            closed.close()
        } else {
            self.open.push(extent);
            None
        }
    }

    /// Closes the running line, if it holds any items.
    pub(crate) fn finish(self) -> Option<Line<S>> {
        self.open.close()
    }
}
