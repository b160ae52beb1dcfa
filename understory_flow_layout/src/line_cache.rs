// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The incremental line cache.

use alloc::vec::Vec;
use core::ops::Range;

use crate::line::LinePacker;
use crate::{Extent, FlowOptions, Line, Scalar, SizeStore};

/// Incrementally maintained flow layout over a partially measured item strip.
///
/// A [`LineCache`] owns a [`SizeStore`] plus the sequence of [`Line`]s derived
/// from it. Lines always cover a prefix `0..covered_len()` of the items: they
/// never cover an unset item and never skip one, so layout stops at the first
/// item whose extent is not yet known.
///
/// Every mutating method follows the same steps:
///
/// 1. drop the line containing the earliest affected item and every line after it,
/// 2. apply the index-shifting change to the size store,
/// 3. re-pack from the first uncovered item for as long as items are measured.
///
/// Lines before the affected one are never revisited.
///
/// # Preconditions
///
/// Index arguments are trusted and follow the rules documented on
/// [`SizeStore`]. The `try_*` variants validate ranges first.
#[derive(Debug, Clone)]
pub struct LineCache<S: Scalar> {
    options: FlowOptions<S>,
    sizes: SizeStore<S>,
    lines: Vec<Line<S>>,
}

impl<S: Scalar> LineCache<S> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new(options: FlowOptions<S>) -> Self {
        Self {
            options,
            sizes: SizeStore::new(),
            lines: Vec::new(),
        }
    }

    /// Returns the packing options.
    #[must_use]
    pub const fn options(&self) -> &FlowOptions<S> {
        &self.options
    }

    /// Replaces the packing options and re-packs every line.
    ///
    /// Does nothing if `options` equals the current options.
    pub fn set_options(&mut self, options: FlowOptions<S>) {
        if options == self.options {
            return;
        }
        self.options = options;
        self.lines.clear();
        self.rebuild();
    }

    /// Returns the underlying size store.
    #[must_use]
    pub const fn sizes(&self) -> &SizeStore<S> {
        &self.sizes
    }

    /// Returns the materialized lines, in order.
    #[must_use]
    pub fn lines(&self) -> &[Line<S>] {
        &self.lines
    }

    /// Returns the line at `line_index`, if materialized.
    #[must_use]
    pub fn line(&self, line_index: usize) -> Option<&Line<S>> {
        self.lines.get(line_index)
    }

    /// Inserts measured items at `start`, shifting later items right.
    pub fn add(&mut self, start: usize, extents: &[Extent<S>]) {
        self.invalidate_from(start);
        self.sizes.set_range(start, extents);
        self.rebuild();
    }

    /// Inserts `count` unmeasured items at `start`, shifting later items right.
    ///
    /// Layout stops at `start` until those items are measured with
    /// [`LineCache::set_extent`].
    pub fn add_unmeasured(&mut self, start: usize, count: usize) {
        self.invalidate_from(start);
        self.sizes.reserve(start, count);
        self.rebuild();
    }

    /// Records the measured extent of the item at `index`, without shifting.
    pub fn set_extent(&mut self, index: usize, extent: Extent<S>) {
        self.invalidate_from(index);
        self.sizes.set(index, extent);
        self.rebuild();
    }

    /// Forgets the extents of up to `count` items starting at `index`.
    ///
    /// The items stay in place as unset entries, so layout stops at `index`
    /// until they are measured again.
    pub fn invalidate_sizes(&mut self, index: usize, count: usize) {
        self.invalidate_from(index);
        self.sizes.unset(index, count);
        self.rebuild();
    }

    /// Removes up to `count` items starting at `index`, shifting later items left.
    pub fn remove(&mut self, index: usize, count: usize) {
        self.invalidate_from(index);
        self.sizes.remove_range(index, count);
        self.rebuild();
    }

    /// Moves the items `[from, from + count)` so that they start at `to`.
    ///
    /// See [`SizeStore::move_range`] for the exact reordering.
    pub fn move_range(&mut self, from: usize, to: usize, count: usize) {
        self.invalidate_from(core::cmp::min(from, to));
        self.sizes.move_range(from, to, count);
        self.rebuild();
    }

    /// Drops every item and every line.
    pub fn clear(&mut self) {
        self.sizes.clear();
        self.lines.clear();
    }

    /// Item count of every materialized line, in order.
    #[must_use]
    pub fn line_counts(&self) -> Vec<usize> {
        self.lines.iter().map(Line::item_count).collect()
    }

    /// Number of items covered by materialized lines.
    #[must_use]
    pub fn covered_len(&self) -> usize {
        self.lines.iter().map(Line::item_count).sum()
    }

    /// Index of the line containing `item`, or `None` if no materialized line covers it.
    #[must_use]
    pub fn line_index_of(&self, item: usize) -> Option<usize> {
        let mut covered = 0;
        for (line_index, line) in self.lines.iter().enumerate() {
            covered += line.item_count();
            if covered > item {
                return Some(line_index);
            }
        }
        None
    }

    /// Range of item indices covered by the line at `line_index`.
    #[must_use]
    pub fn line_range(&self, line_index: usize) -> Option<Range<usize>> {
        let line = self.lines.get(line_index)?;
        let start: usize = self.lines[..line_index].iter().map(Line::item_count).sum();
        Some(start..start + line.item_count())
    }

    /// Returns `true` if `item` is covered and its line is not the first one.
    #[must_use]
    pub fn has_previous_line(&self, item: usize) -> bool {
        self.line_index_of(item).is_some_and(|line| line > 0)
    }

    /// Returns `true` if `item` is covered and another line follows its line.
    #[must_use]
    pub fn has_next_line(&self, item: usize) -> bool {
        self.line_index_of(item).is_some_and(|line| line + 1 < self.lines.len())
    }

    /// Drops the line containing `item` and every line after it.
    ///
    /// When `item` is past the covered prefix, the last line is dropped: it
    /// ended where the walk halted rather than at a width or cap break, so the
    /// next rebuild may extend it. This is the only case in which a line ending
    /// before `item` is re-packed.
    fn invalidate_from(&mut self, item: usize) {
        let Some(first) = self
            .line_index_of(item)
            .or_else(|| self.lines.len().checked_sub(1))
        else {
            return;
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            item,
            first_line = first,
            dropped = self.lines.len() - first,
            "invalidated lines"
        );
        self.lines.truncate(first);
    }

    /// Packs lines from the first uncovered item up to the first unset item.
    fn rebuild(&mut self) {
        let start = self.covered_len();
        if start >= self.sizes.len() {
            return;
        }

        let mut packer = LinePacker::new(
            self.options.content_area_width(),
            self.options.items_per_line(),
        );
        #[cfg(feature = "tracing")]
        let lines_before = self.lines.len();

        let mut index = start;
        while let Some(extent) = self.sizes.get(index) {
            self.lines.extend(packer.push(extent));
            index += 1;
        }
        self.lines.extend(packer.finish());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            start,
            appended = self.lines.len() - lines_before,
            covered = index,
            "rebuilt lines"
        );
    }
}
