use core::cmp;

use crate::{ViewportState, WindowRange};

/// Computes the overscanned window for `state`.
///
/// Constant time: only the five state fields are read. An offset that lands exactly on an
/// item boundary makes that item the first visible one.
pub fn compute_window(state: &ViewportState) -> WindowRange {
    let visible = unbounded_window(state);
    let overscan = state.overscan;
    let end = cmp::min(state.item_count, visible.end.saturating_add(overscan));
    let start = cmp::min(visible.start.saturating_sub(overscan), end);
    WindowRange { start, end }
}

/// Computes the items that intersect the viewport (no overscan).
///
/// Unlike the overscanned window, the end follows the viewport's bottom edge, so an item
/// that is only partly scrolled into view is included.
pub fn compute_visible_range(state: &ViewportState) -> WindowRange {
    let start = floor_index(state.scroll_offset / state.item_extent);
    let bottom = state.scroll_offset + state.container_extent;
    let end = cmp::min(state.item_count, ceil_count(bottom / state.item_extent));
    WindowRange {
        start: cmp::min(start, end),
        end,
    }
}

// `raw_start .. raw_start + ceil(container / item)`; `end` is not yet bounded by `item_count`.
fn unbounded_window(state: &ViewportState) -> WindowRange {
    let start = floor_index(state.scroll_offset / state.item_extent);
    let visible_count = ceil_count(state.container_extent / state.item_extent);
    WindowRange {
        start,
        end: start.saturating_add(visible_count),
    }
}

/// Index of the item covering `offset`, or `None` for an empty list.
///
/// Offsets past the end map to the last item.
pub fn index_at_offset(state: &ViewportState, offset: f64) -> Option<usize> {
    if state.item_count == 0 {
        return None;
    }
    let offset = if offset.is_nan() { 0.0 } else { offset.max(0.0) };
    let index = floor_index(offset / state.item_extent);
    Some(cmp::min(index, state.item_count - 1))
}

// Callers only pass non-negative quotients; `as` saturates on overflow.
fn floor_index(value: f64) -> usize {
    value as usize
}

fn ceil_count(value: f64) -> usize {
    let truncated = value as usize;
    if (truncated as f64) < value {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_count_rounds_partial_items_up() {
        assert_eq!(ceil_count(0.0), 0);
        assert_eq!(ceil_count(4.0), 4);
        assert_eq!(ceil_count(4.01), 5);
        assert_eq!(ceil_count(0.2), 1);
    }

    #[test]
    fn floor_index_saturates() {
        assert_eq!(floor_index(19.999), 19);
        assert_eq!(floor_index(f64::INFINITY), usize::MAX);
    }
}
