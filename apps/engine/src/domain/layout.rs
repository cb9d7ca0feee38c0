//! Pointer-coordinate to row-index mapping.

use crate::domain::rules::{ROW_GAP, ROW_HEIGHT};

/// Vertical geometry of one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMetrics {
    pub row_height: u32,
    pub row_gap: u32,
}

impl RowMetrics {
    /// Height of one uniform cell: the row plus its trailing gap.
    pub const fn cell_height(&self) -> u32 {
        self.row_height + self.row_gap
    }

    /// Total scrollable height of a list of `count` rows.
    pub fn scroll_height(&self, count: usize) -> f64 {
        f64::from(self.cell_height()) * count as f64
    }
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self {
            row_height: ROW_HEIGHT,
            row_gap: ROW_GAP,
        }
    }
}

/// Map a pointer's vertical coordinate to an insertion index.
///
/// Treats every row as one uniform cell including its trailing gap, rather
/// than detecting the actual element under the pointer; rows are visually
/// uniform height, so the coarse mapping is equivalent. Equidistant positions
/// resolve by rounding down.
///
/// Returns a value in `[0, item_count]`, where `item_count` means "insert at
/// end". Out-of-range coordinates are clamped, never rejected.
pub fn position_from_coordinate(
    y: f64,
    container_top: f64,
    container_scroll_height: f64,
    metrics: RowMetrics,
    item_count: usize,
) -> usize {
    let cell = f64::from(metrics.cell_height());
    if cell <= 0.0 {
        return 0;
    }
    let offset = (y - container_top).clamp(0.0, container_scroll_height.max(0.0));
    let index = (offset / cell).floor();
    // offset is non-negative, so the cast is a plain truncation; enormous
    // offsets saturate and are clamped right after.
    (index as usize).min(item_count)
}
