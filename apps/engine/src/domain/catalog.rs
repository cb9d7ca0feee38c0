//! The canonical reference sequence: the show's correct running order.

use once_cell::sync::Lazy;

/// Labels in canonical order. The index of a label is its correct position.
pub const REFERENCE_LABELS: [&str; 30] = [
    "Prologue",
    "At The End Of The Day",
    "I Dreamed A Dream",
    "The Docks",
    "Cart Crash",
    "Fantine’s Death",
    "Little Cosette",
    "The Innkeeper’s Song",
    "The Bargain",
    "The Beggars",
    "The Robbery",
    "Stars",
    "The ABC Cafe",
    "The People’s Song",
    "Rue Plumet",
    "A Heart Full Of Love",
    "The Attack On Rue Plumet",
    "One Day More",
    "Building The Barricade",
    "Javert At The Barricade",
    "The First Attack",
    "The Night",
    "The Final Battle",
    "The Sewers",
    "Javert’s Suicide",
    "The Cafe Song",
    "Marius and Cosette",
    "The Wedding",
    "Epilogue",
    "Bows/Playout",
];

/// A single entry of the reference sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceItem {
    /// Fixed position in the canonical sequence (0-based).
    pub display_index: usize,
    pub label: &'static str,
}

static REFERENCE: Lazy<Vec<ReferenceItem>> = Lazy::new(|| {
    REFERENCE_LABELS
        .iter()
        .enumerate()
        .map(|(display_index, label)| ReferenceItem {
            display_index,
            label,
        })
        .collect()
});

/// The full reference sequence in canonical order. Process-wide constant.
pub fn reference_items() -> &'static [ReferenceItem] {
    &REFERENCE
}
