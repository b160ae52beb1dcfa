// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_flow_layout --heading-base-level=0

//! Understory Flow Layout: an incremental line cache for wrapping item strips.
//!
//! This crate packs a linear sequence of items into fixed-width *lines* (a flow
//! or wrap layout) and keeps that partition up to date as items are measured,
//! inserted, removed, and reordered. It is meant to sit underneath a virtualized
//! list or grid whose item sizes only become known as items are bound to views.
//!
//! The core concepts are:
//!
//! - [`Extent`]: the measured `(width, height)` of one item.
//! - [`SizeStore`]: per-item extents where any entry may still be unset, with
//!   shifting insert, compacting remove, and block moves.
//! - [`Line`]: an immutable aggregate over a run of items (item count, total
//!   width, max height).
//! - [`LineCache`]: owns a [`SizeStore`] and the derived lines. Each mutation
//!   drops the lines from the affected item onward and re-packs greedily from
//!   there, stopping at the first item whose extent is unknown.
//! - [`FlowOptions`]: the wrap width and an optional per-line item cap.
//!
//! This crate does **not** measure items or compute pixel offsets. Host code is
//! responsible for:
//!
//! - Feeding extents in through [`LineCache::add`], [`LineCache::add_unmeasured`],
//!   and [`LineCache::set_extent`].
//! - Reporting data changes through [`LineCache::remove`], [`LineCache::move_range`],
//!   and [`LineCache::invalidate_sizes`] before relying on fresh geometry.
//! - Turning [`LineCache::lines`] into positions.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_flow_layout::{Extent, FlowOptions, LineCache};
//!
//! // Lines wrap at 100 logical pixels.
//! let mut cache = LineCache::new(FlowOptions::new(100.0));
//! cache.add(
//!     0,
//!     &[
//!         Extent::new(40.0, 20.0),
//!         Extent::new(40.0, 24.0),
//!         Extent::new(40.0, 20.0),
//!     ],
//! );
//!
//! // The third item would make the first line 120 wide, so it wraps.
//! assert_eq!(cache.line_counts(), [2, 1]);
//! assert_eq!(cache.lines()[0].max_height(), 24.0);
//! assert_eq!(cache.line_index_of(2), Some(1));
//! ```
//!
//! ## Partially measured strips
//!
//! Items can be announced before they are measured. Layout covers only the
//! measured prefix and resumes once the gap is filled:
//!
//! ```rust
//! use understory_flow_layout::{Extent, FlowOptions, LineCache};
//!
//! let mut cache = LineCache::new(FlowOptions::new(100_u32).with_items_per_line(2));
//! cache.add_unmeasured(0, 3);
//! cache.set_extent(0, Extent::new(30, 10));
//! cache.set_extent(2, Extent::new(30, 10));
//!
//! // Item 1 is unknown, so item 2 is not laid out yet.
//! assert_eq!(cache.line_index_of(1), None);
//! assert_eq!(cache.line_index_of(2), None);
//!
//! cache.set_extent(1, Extent::new(30, 10));
//! // The item cap splits the three items into two lines.
//! assert_eq!(cache.line_counts(), [2, 1]);
//! assert!(cache.has_next_line(0));
//! assert!(cache.has_previous_line(2));
//! ```
//!
//! ## Features
//!
//! - `kurbo`: conversions between `Extent<f64>` and `kurbo::Size`.
//! - `tracing`: emit `trace` events when lines are invalidated and rebuilt.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod checked;
mod extent;
mod line;
mod line_cache;
mod options;
mod scalar;
mod size_store;

pub use checked::RangeError;
pub use extent::Extent;
pub use line::Line;
pub use line_cache::LineCache;
pub use options::FlowOptions;
pub use scalar::Scalar;
pub use size_store::SizeStore;
