//! Position-by-position correctness scoring against the reference sequence.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ReferenceItem;
use crate::domain::state::Arrangement;

/// Outcome of checking an arrangement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Whether each position holds the correct label.
    pub correct_mask: Vec<bool>,
    /// Number of positions that match the reference (fixed points).
    pub correct_count: usize,
    /// True when every position is correct.
    pub is_complete: bool,
}

/// Score `arrangement` against `reference`, position by position.
///
/// Pure and idempotent; O(n) over the item count.
pub fn score_arrangement(arrangement: &Arrangement, reference: &[ReferenceItem]) -> ScoreReport {
    let correct_mask: Vec<bool> = arrangement
        .items()
        .iter()
        .zip(reference)
        .map(|(item, expected)| item.label == expected.label)
        .collect();
    let correct_count = correct_mask.iter().filter(|&&ok| ok).count();
    let is_complete = correct_count == reference.len();
    ScoreReport {
        correct_mask,
        correct_count,
        is_complete,
    }
}
