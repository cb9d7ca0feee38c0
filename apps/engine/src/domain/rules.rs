//! Fixed quiz geometry, timing, and gutter-numbering rules.

/// Number of rows in the quiz.
pub const ITEM_COUNT: usize = 30;

/// Rendered height of one row, in layout units.
pub const ROW_HEIGHT: u32 = 56;

/// Vertical gap between adjacent rows, in layout units.
pub const ROW_GAP: u32 = 6;

/// Row index from which the gutter shows `index + 1` instead of `index`.
pub const GUTTER_SKIP_FROM: usize = 22;

/// The one numeral the gutter never shows.
pub const SKIPPED_GUTTER_NUMERAL: usize = 22;

/// How long the correctness highlight stays on screen.
pub const HIGHLIGHT_DURATION_MS: u64 = 5000;

/// How long the celebration screen shows before auto-returning to start.
pub const CELEBRATION_DURATION_MS: u64 = 1600;

// Gutter numbering: rows 0..=21 show their own index, everything after shows
// index + 1, so exactly one numeral is skipped. Pure and stateless; does not
// affect scoring or the reference sequence, only the side gutter labels.
pub fn display_number(index: usize) -> usize {
    if index < GUTTER_SKIP_FROM {
        index
    } else {
        index + 1
    }
}

/// The whole gutter column for `count` rows.
pub fn gutter_numbers(count: usize) -> Vec<usize> {
    (0..count).map(display_number).collect()
}
