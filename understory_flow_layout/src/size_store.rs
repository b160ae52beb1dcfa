// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A shiftable `index → Extent | unset` mapping.

use alloc::vec::Vec;
use core::iter;

use crate::{Extent, Scalar};

/// Ordered per-item extents, where each slot is either measured or unset.
///
/// Slots are addressed by item index `0..len`. Unset slots are placeholders for
/// items the host knows about but has not measured yet.
///
/// # Preconditions
///
/// Index arguments are trusted. Nothing here rejects an out-of-range index;
/// instead each operation documents what it does with one:
///
/// - insertions and [`SizeStore::set`] past the end pad the store with unset slots,
/// - [`SizeStore::unset`] and [`SizeStore::remove_range`] clip to the current length,
/// - [`SizeStore::move_range`] materializes missing slots as unset.
#[derive(Clone, Debug)]
pub struct SizeStore<S: Scalar> {
    slots: Vec<Option<Extent<S>>>,
}

impl<S: Scalar> Default for SizeStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar> SizeStore<S> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of tracked slots, measured or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slots are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the extent at `index`, or `None` if it is unset or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Extent<S>> {
        self.slots.get(index).copied().flatten()
    }

    /// Returns `true` if the slot at `index` holds a measured extent.
    #[must_use]
    pub fn is_set(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Length of the contiguous run of measured slots starting at index 0.
    #[must_use]
    pub fn measured_prefix_len(&self) -> usize {
        self.slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.slots.len())
    }

    /// Iterates over every slot in index order.
    pub fn iter(&self) -> impl Iterator<Item = Option<Extent<S>>> + '_ {
        self.slots.iter().copied()
    }

    /// Inserts `extents` at `start`, shifting every slot at or after `start` right.
    pub fn set_range(&mut self, start: usize, extents: &[Extent<S>]) {
        self.pad_to(start);
        self.slots.splice(start..start, extents.iter().copied().map(Some));
    }

    /// Inserts `count` unset slots at `start`, shifting every slot at or after `start` right.
    pub fn reserve(&mut self, start: usize, count: usize) {
        self.pad_to(start);
        self.slots.splice(start..start, iter::repeat_n(None, count));
    }

    /// Stores a measured extent at `index` without shifting anything.
    pub fn set(&mut self, index: usize, extent: Extent<S>) {
        self.pad_to(index + 1);
        self.slots[index] = Some(extent);
    }

    /// Marks up to `count` slots starting at `index` as unset, without shifting.
    ///
    /// Returns how many slots were actually touched after clipping to the store length.
    pub fn unset(&mut self, index: usize, count: usize) -> usize {
        let end = self.clipped_end(index, count);
        if index >= end {
            return 0;
        }
        self.slots[index..end].fill(None);
        end - index
    }

    /// Removes up to `count` slots starting at `index` and closes the hole.
    ///
    /// Returns how many slots were actually removed after clipping to the store length.
    pub fn remove_range(&mut self, index: usize, count: usize) -> usize {
        let end = self.clipped_end(index, count);
        if index >= end {
            return 0;
        }
        self.slots.drain(index..end);
        end - index
    }

    /// Relocates the block `[from, from + count)` so that it starts at `to`.
    ///
    /// `to` is the position of the block in the resulting order. Every other
    /// slot keeps its relative order, so this is a rotation of
    /// `[min(from, to), max(from, to) + count)`.
    pub fn move_range(&mut self, from: usize, to: usize, count: usize) {
        if count == 0 || from == to {
            return;
        }
        self.pad_to(core::cmp::max(from, to) + count);
        if from < to {
            self.slots[from..to + count].rotate_left(count);
        } else {
            self.slots[to..from + count].rotate_right(count);
        }
    }

    /// Drops every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn clipped_end(&self, index: usize, count: usize) -> usize {
        index.saturating_add(count).min(self.slots.len())
    }

    fn pad_to(&mut self, len: usize) {
        if self.slots.len() < len {
            self.slots.resize(len, None);
        }
    }
}
