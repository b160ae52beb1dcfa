// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range-validating variants of the [`LineCache`] mutations.
//!
//! The plain methods trust their callers and give out-of-range arguments a
//! defined (padding or clipping) meaning. The `try_*` methods here reject such
//! arguments instead, leaving the cache untouched.

use thiserror::Error;

use crate::{Extent, LineCache, Scalar};

/// A range argument that does not fit the current item strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// An insertion or measurement start lies past the end of the strip.
    #[error("start index {start} is out of bounds for {len} items")]
    StartOutOfBounds {
        /// The rejected start index.
        start: usize,
        /// Number of items at the time of the call.
        len: usize,
    },
    /// A `[start, start + count)` range extends past the end of the strip.
    #[error("range {start}..{start}+{count} is out of bounds for {len} items")]
    RangeOutOfBounds {
        /// First index of the rejected range.
        start: usize,
        /// Length of the rejected range.
        count: usize,
        /// Number of items at the time of the call.
        len: usize,
    },
    /// The content area width is not positive and finite.
    #[error("content area width must be positive and finite")]
    InvalidWidth,
}

impl<S: Scalar> LineCache<S> {
    /// Like [`LineCache::add`], but requires `start <= len`.
    pub fn try_add(&mut self, start: usize, extents: &[Extent<S>]) -> Result<(), RangeError> {
        self.check_start(start)?;
        self.add(start, extents);
        Ok(())
    }

    /// Like [`LineCache::add_unmeasured`], but requires `start <= len`.
    pub fn try_add_unmeasured(&mut self, start: usize, count: usize) -> Result<(), RangeError> {
        self.check_start(start)?;
        self.add_unmeasured(start, count);
        Ok(())
    }

    /// Like [`LineCache::set_extent`], but requires `index < len`.
    pub fn try_set_extent(&mut self, index: usize, extent: Extent<S>) -> Result<(), RangeError> {
        self.check_range(index, 1)?;
        self.set_extent(index, extent);
        Ok(())
    }

    /// Like [`LineCache::invalidate_sizes`], but requires the whole range to exist.
    pub fn try_invalidate_sizes(&mut self, index: usize, count: usize) -> Result<(), RangeError> {
        self.check_range(index, count)?;
        self.invalidate_sizes(index, count);
        Ok(())
    }

    /// Like [`LineCache::remove`], but requires the whole range to exist.
    pub fn try_remove(&mut self, index: usize, count: usize) -> Result<(), RangeError> {
        self.check_range(index, count)?;
        self.remove(index, count);
        Ok(())
    }

    /// Like [`LineCache::move_range`], but requires both the source and the
    /// destination block to lie within the strip.
    pub fn try_move_range(
        &mut self,
        from: usize,
        to: usize,
        count: usize,
    ) -> Result<(), RangeError> {
        self.check_range(from, count)?;
        self.check_range(to, count)?;
        self.move_range(from, to, count);
        Ok(())
    }

    fn check_start(&self, start: usize) -> Result<(), RangeError> {
        let len = self.sizes().len();
        if start > len {
            return Err(RangeError::StartOutOfBounds { start, len });
        }
        Ok(())
    }

    fn check_range(&self, start: usize, count: usize) -> Result<(), RangeError> {
        let len = self.sizes().len();
        match start.checked_add(count) {
            Some(end) if end <= len => Ok(()),
            _ => Err(RangeError::RangeOutOfBounds { start, count, len }),
        }
    }
}
