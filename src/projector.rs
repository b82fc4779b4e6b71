use alloc::vec::Vec;
use core::cmp;

use crate::{RenderWindow, WindowEntry, WindowRange};

/// Projects `window` onto `items`.
///
/// Only the items inside the window are touched, so the cost is proportional to the window,
/// never to the dataset.
pub fn project<'a, T>(
    items: &'a [T],
    window: WindowRange,
    item_extent: f64,
) -> RenderWindow<'a, T> {
    let mut entries = Vec::with_capacity(window.len());
    let range = for_each_entry(items, window, item_extent, |entry| entries.push(entry));
    RenderWindow {
        range,
        entries,
        total_extent: total_extent(items.len(), item_extent),
    }
}

/// Zero-allocation variant of [`project`].
///
/// Returns the window that was actually walked (truncated to `items.len()`).
pub fn for_each_entry<'a, T>(
    items: &'a [T],
    window: WindowRange,
    item_extent: f64,
    mut f: impl FnMut(WindowEntry<'a, T>),
) -> WindowRange {
    let range = clip(window, items.len());
    for (offset, item) in items[range.start..range.end].iter().enumerate() {
        let index = range.start + offset;
        f(WindowEntry {
            item,
            index,
            top_offset: top_offset(index, item_extent),
        });
    }
    range
}

/// Collects the window entries into `out` (clears `out` first).
pub fn collect_entries<'a, T>(
    items: &'a [T],
    window: WindowRange,
    item_extent: f64,
    out: &mut Vec<WindowEntry<'a, T>>,
) {
    out.clear();
    for_each_entry(items, window, item_extent, |entry| out.push(entry));
}

pub fn top_offset(index: usize, item_extent: f64) -> f64 {
    index as f64 * item_extent
}

pub fn total_extent(item_count: usize, item_extent: f64) -> f64 {
    item_count as f64 * item_extent
}

fn clip(window: WindowRange, len: usize) -> WindowRange {
    if window.end > len {
        vwarn!(
            start = window.start,
            end = window.end,
            len,
            "window exceeds dataset"
        );
        debug_assert!(
            window.end <= len,
            "window exceeds dataset (end={}, len={len})",
            window.end
        );
    }
    let end = cmp::min(window.end, len);
    WindowRange {
        start: cmp::min(window.start, end),
        end,
    }
}
