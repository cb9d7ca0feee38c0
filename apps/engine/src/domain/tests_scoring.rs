use crate::domain::catalog::{reference_items, REFERENCE_LABELS};
use crate::domain::scoring::score_arrangement;
use crate::domain::state::{Arrangement, ItemId, WorkingItem};

fn reference_order_arrangement() -> Arrangement {
    let items = REFERENCE_LABELS
        .iter()
        .enumerate()
        .map(|(idx, label)| WorkingItem {
            id: ItemId::new(idx, label),
            label: label.to_string(),
        })
        .collect();
    Arrangement::new(items)
}

#[test]
fn reference_order_scores_complete() {
    let report = score_arrangement(&reference_order_arrangement(), reference_items());
    assert_eq!(report.correct_count, 30);
    assert!(report.is_complete);
    assert!(report.correct_mask.iter().all(|&ok| ok));
}

#[test]
fn swapping_first_two_rows_scores_twenty_eight() {
    let mut items = reference_order_arrangement().into_items();
    items.swap(0, 1);
    let report = score_arrangement(&Arrangement::new(items), reference_items());

    assert_eq!(report.correct_count, 28);
    assert!(!report.is_complete);
    assert!(!report.correct_mask[0]);
    assert!(!report.correct_mask[1]);
    assert!(report.correct_mask[2..].iter().all(|&ok| ok));
}

#[test]
fn scoring_is_idempotent() {
    let mut items = reference_order_arrangement().into_items();
    items.reverse();
    let arrangement = Arrangement::new(items);

    let first = score_arrangement(&arrangement, reference_items());
    let second = score_arrangement(&arrangement, reference_items());
    assert_eq!(first, second);
}

#[test]
fn short_arrangement_is_never_complete() {
    // Defensive: the invariant keeps arrangements at full length, but a
    // truncated one must still score without panicking.
    let mut items = reference_order_arrangement().into_items();
    items.truncate(10);
    let report = score_arrangement(&Arrangement::new(items), reference_items());
    assert_eq!(report.correct_mask.len(), 10);
    assert_eq!(report.correct_count, 10);
    assert!(!report.is_complete);
}
