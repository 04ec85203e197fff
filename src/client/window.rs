//! List Window Module
//!
//! Computes which slice of a fixed-row-height list is worth rendering for
//! the current scroll position.

use std::ops::Range;

/// Returns the index range `[start, end)` a list view should render.
///
/// `overscan` rows are added on both sides of the strictly visible band so
/// small scrolls do not immediately expose blank rows. The range is always
/// clamped to `[0, total)`; a zero `total` or non-positive `row_height`
/// yields an empty range.
pub fn visible_range(
    scroll_top: f64,
    viewport_height: f64,
    row_height: f64,
    total: usize,
    overscan: usize,
) -> Range<usize> {
    if total == 0 || row_height <= 0.0 {
        return 0..0;
    }

    let first = ((scroll_top.max(0.0) / row_height) as usize).min(total);
    // One extra row covers a partially scrolled-into row at the bottom
    let rows_in_view = (viewport_height.max(0.0) / row_height).ceil() as usize + 1;

    let start = first.saturating_sub(overscan);
    let end = first
        .saturating_add(rows_in_view)
        .saturating_add(overscan)
        .min(total);

    start..end
}
