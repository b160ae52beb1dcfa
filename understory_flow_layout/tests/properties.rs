// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the line cache and size store.

use proptest::prelude::*;
use understory_flow_layout::{Extent, FlowOptions, LineCache, SizeStore};

const WIDTH: u32 = 100;

/// One mutation against a cache, with indices resolved against the current length.
#[derive(Debug, Clone)]
enum Op {
    Add(usize, Vec<(u32, u32)>),
    AddUnmeasured(usize, usize),
    SetExtent(usize, (u32, u32)),
    InvalidateSizes(usize, usize),
    Remove(usize, usize),
    Move(usize, usize, usize),
}

fn arb_extent() -> impl Strategy<Value = (u32, u32)> {
    (0_u32..=140, 1_u32..=50)
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<usize>(), prop::collection::vec(arb_extent(), 1..4))
            .prop_map(|(at, extents)| Op::Add(at, extents)),
        1 => (any::<usize>(), 1_usize..3).prop_map(|(at, n)| Op::AddUnmeasured(at, n)),
        3 => (any::<usize>(), arb_extent()).prop_map(|(at, e)| Op::SetExtent(at, e)),
        1 => (any::<usize>(), 1_usize..3).prop_map(|(at, n)| Op::InvalidateSizes(at, n)),
        1 => (any::<usize>(), 1_usize..3).prop_map(|(at, n)| Op::Remove(at, n)),
        2 => (any::<usize>(), any::<usize>(), 1_usize..4)
            .prop_map(|(from, to, n)| Op::Move(from, to, n)),
    ]
}

fn extents(raw: &[(u32, u32)]) -> Vec<Extent<u32>> {
    raw.iter().map(|&(w, h)| Extent::new(w, h)).collect()
}

/// Applies `op` with every index folded into the valid range for the current strip.
///
/// Returns the earliest item index the mutation touches.
fn apply(cache: &mut LineCache<u32>, op: &Op) -> Option<usize> {
    let len = cache.sizes().len();
    match op {
        Op::Add(at, raw) => {
            let at = at % (len + 1);
            cache.add(at, &extents(raw));
            Some(at)
        }
        Op::AddUnmeasured(at, n) => {
            let at = at % (len + 1);
            cache.add_unmeasured(at, *n);
            Some(at)
        }
        Op::SetExtent(at, (w, h)) if len > 0 => {
            let at = at % len;
            cache.set_extent(at, Extent::new(*w, *h));
            Some(at)
        }
        Op::InvalidateSizes(at, n) if len > 0 => {
            let at = at % len;
            cache.invalidate_sizes(at, *n);
            Some(at)
        }
        Op::Remove(at, n) if len > 0 => {
            let at = at % len;
            cache.remove(at, *n);
            Some(at)
        }
        Op::Move(from, to, n) if len > 0 => {
            let n = (*n).min(len);
            let from = from % (len - n + 1);
            let to = to % (len - n + 1);
            cache.move_range(from, to, n);
            Some(from.min(to))
        }
        _ => None,
    }
}

fn widths(store: &SizeStore<u32>) -> Vec<Option<u32>> {
    store.iter().map(|e| e.map(|e| e.width())).collect()
}

/// Greedy first-fit over `widths`, returning the item count of every line.
fn reference_pack(widths: &[u32], cap: usize) -> Vec<usize> {
    let mut counts = Vec::new();
    let (mut count, mut width) = (0_usize, 0_u32);
    for &w in widths {
        let over_width = count > 0 && width + w > WIDTH;
        let over_cap = cap > 0 && count + 1 > cap;
        if over_width || over_cap {
            counts.push(count);
            count = 0;
            width = 0;
        }
        count += 1;
        width += w;
    }
    if count > 0 {
        counts.push(count);
    }
    counts
}

fn check_invariants(cache: &LineCache<u32>) -> Result<(), TestCaseError> {
    let sizes = cache.sizes();
    let cap = cache.options().items_per_line().map_or(0, |c| c.get());

    prop_assert_eq!(cache.covered_len(), sizes.measured_prefix_len());

    let mut start = 0;
    for (line_index, line) in cache.lines().iter().enumerate() {
        prop_assert!(line.item_count() >= 1);
        if cap > 0 {
            prop_assert!(line.item_count() <= cap);
        }
        prop_assert!(line.total_width() <= WIDTH || line.item_count() == 1);

        let members: Vec<_> = (start..start + line.item_count())
            .map(|i| sizes.get(i).expect("covered items are measured"))
            .collect();
        let total: u32 = members.iter().map(Extent::width).sum();
        let tallest = members.iter().map(Extent::height).max().unwrap_or(0);
        prop_assert_eq!(line.total_width(), total);
        prop_assert_eq!(line.max_height(), tallest);
        prop_assert_eq!(cache.line_range(line_index), Some(start..start + line.item_count()));
        start += line.item_count();
    }

    for item in 0..sizes.len() + 2 {
        let found = cache.line_index_of(item);
        prop_assert_eq!(found.is_some(), item < cache.covered_len());
    }
    Ok(())
}

proptest! {
    /// Width, cap, coverage, and aggregate invariants hold after any mutation sequence.
    #[test]
    fn invariants_hold_after_mutations(
        cap in 0_usize..4,
        ops in prop::collection::vec(arb_op(), 1..40),
    ) {
        let mut cache = LineCache::new(FlowOptions::new(WIDTH).with_items_per_line(cap));
        for op in &ops {
            apply(&mut cache, op);
            check_invariants(&cache)?;
        }
    }

    /// Lines strictly before the line covering the mutated item never change.
    #[test]
    fn mutation_leaves_earlier_lines_alone(
        initial in prop::collection::vec(arb_extent(), 1..30),
        op in arb_op(),
    ) {
        let mut cache = LineCache::new(FlowOptions::new(WIDTH));
        cache.add(0, &extents(&initial));
        let before = cache.lines().to_vec();

        let len = cache.sizes().len();
        let Some(item) = apply(&mut cache, &op) else {
            return Ok(());
        };
        // Insertions at the very end touch no existing line.
        let keep = if item < len {
            cache_line_of(&before, item).unwrap_or(before.len())
        } else {
            before.len().saturating_sub(1)
        };
        prop_assert_eq!(&cache.lines()[..keep.min(cache.lines().len())], &before[..keep]);
    }

    /// An unset item stops layout even when later items are measured.
    #[test]
    fn gap_halts_layout(
        initial in prop::collection::vec(arb_extent(), 2..30),
        gap in any::<usize>(),
    ) {
        let mut cache = LineCache::new(FlowOptions::new(WIDTH));
        cache.add(0, &extents(&initial));
        let gap = gap % initial.len();

        cache.invalidate_sizes(gap, 1);
        prop_assert_eq!(cache.covered_len(), gap);
        for item in gap..initial.len() {
            prop_assert_eq!(cache.line_index_of(item), None);
        }

        let (w, h) = initial[gap];
        cache.set_extent(gap, Extent::new(w, h));
        prop_assert_eq!(cache.covered_len(), initial.len());
    }

    /// Appending items one at a time packs them like a single greedy pass.
    #[test]
    fn appending_matches_one_shot_packing(
        cap in 0_usize..4,
        raw in prop::collection::vec(arb_extent(), 0..40),
    ) {
        let mut incremental = LineCache::new(FlowOptions::new(WIDTH).with_items_per_line(cap));
        for (i, &(w, h)) in raw.iter().enumerate() {
            incremental.add(i, &[Extent::new(w, h)]);
        }

        let mut one_shot = LineCache::new(FlowOptions::new(WIDTH).with_items_per_line(cap));
        one_shot.add(0, &extents(&raw));

        let raw_widths: Vec<u32> = raw.iter().map(|&(w, _)| w).collect();
        prop_assert_eq!(incremental.lines(), one_shot.lines());
        prop_assert_eq!(one_shot.line_counts(), reference_pack(&raw_widths, cap));
    }

    /// Measuring a reserved strip in order yields the same lines as adding it measured.
    #[test]
    fn measuring_reserved_items_matches_adding_them(
        raw in prop::collection::vec(arb_extent(), 1..30),
    ) {
        let mut reserved = LineCache::new(FlowOptions::new(WIDTH));
        reserved.add_unmeasured(0, raw.len());
        prop_assert!(reserved.lines().is_empty());
        for (i, &(w, h)) in raw.iter().enumerate() {
            reserved.set_extent(i, Extent::new(w, h));
        }

        let mut measured = LineCache::new(FlowOptions::new(WIDTH));
        measured.add(0, &extents(&raw));
        prop_assert_eq!(reserved.lines(), measured.lines());
    }

    /// Moving a block matches removing it and reinserting it at the destination.
    #[test]
    fn move_matches_remove_then_reinsert(
        raw in prop::collection::vec(prop::option::of(0_u32..100), 1..30),
        from in any::<usize>(),
        to in any::<usize>(),
        count in 1_usize..6,
    ) {
        let len = raw.len();
        let count = count.min(len);
        let from = from % (len - count + 1);
        let to = to % (len - count + 1);

        let mut store = SizeStore::new();
        store.reserve(0, len);
        for (i, w) in raw.iter().enumerate() {
            if let Some(w) = w {
                store.set(i, Extent::new(*w, 1));
            }
        }
        store.move_range(from, to, count);

        let mut expected = raw.clone();
        let block: Vec<_> = expected.drain(from..from + count).collect();
        expected.splice(to..to, block);

        prop_assert_eq!(widths(&store), expected);
    }
}

fn cache_line_of(lines: &[understory_flow_layout::Line<u32>], item: usize) -> Option<usize> {
    let mut covered = 0;
    lines.iter().position(|line| {
        covered += line.item_count();
        covered > item
    })
}
