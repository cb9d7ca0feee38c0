//! End-to-end domain flow: shuffle, drag into place, score.

use crate::domain::catalog::{reference_items, REFERENCE_LABELS};
use crate::domain::reorder::reorder;
use crate::domain::scoring::score_arrangement;
use crate::domain::shuffle::shuffled_arrangement;

#[test]
fn sorting_a_shuffle_by_drags_reaches_a_complete_score() {
    let mut arrangement = shuffled_arrangement(0xBADC_0FFE);

    for target in 0..REFERENCE_LABELS.len() {
        let want = REFERENCE_LABELS[target];
        let id = arrangement
            .items()
            .iter()
            .find(|item| item.label == want)
            .map(|item| item.id.clone())
            .expect("every reference label is present");
        arrangement = reorder(&arrangement, &id, target);
        arrangement
            .ensure_permutation_of(reference_items())
            .expect("reorder only permutes");
    }

    let report = score_arrangement(&arrangement, reference_items());
    assert!(report.is_complete);
    assert_eq!(report.correct_count, 30);
}

#[test]
fn fixing_one_row_never_lowers_the_prefix_score() {
    let mut arrangement = shuffled_arrangement(0x1234);

    for target in 0..REFERENCE_LABELS.len() {
        let want = REFERENCE_LABELS[target];
        let id = arrangement
            .items()
            .iter()
            .find(|item| item.label == want)
            .map(|item| item.id.clone())
            .expect("every reference label is present");
        arrangement = reorder(&arrangement, &id, target);

        // Positions 0..=target are now pinned correct.
        let report = score_arrangement(&arrangement, reference_items());
        assert!(
            report.correct_count > target,
            "prefix through {target} must be correct"
        );
    }
}
