use crate::domain::catalog::reference_items;
use crate::domain::reorder::{commit_order, preview_order, reorder};
use crate::domain::state::{Arrangement, ItemId};
use crate::domain::test_gens::arrangement_from_order;

fn identity_arrangement() -> Arrangement {
    arrangement_from_order((0..30).collect())
}

#[test]
fn drag_to_front_shifts_everything_down() {
    let arrangement = identity_arrangement();
    let items = arrangement.items();
    let dragged = items[5].id.clone();

    let out = preview_order(items, &dragged, 0);

    assert_eq!(out.len(), 30);
    assert_eq!(out[0].id, dragged);
    for i in 0..5 {
        assert_eq!(out[i + 1], items[i]);
    }
    assert_eq!(&out[6..], &items[6..]);
}

#[test]
fn self_target_is_a_noop() {
    let arrangement = identity_arrangement();
    let items = arrangement.items();
    let dragged = items[7].id.clone();
    assert_eq!(preview_order(items, &dragged, 7), items.to_vec());
}

#[test]
fn overlong_target_clamps_to_last_position() {
    let arrangement = identity_arrangement();
    let items = arrangement.items();
    let dragged = items[0].id.clone();

    let out = preview_order(items, &dragged, 10_000);
    assert_eq!(out.last().map(|item| &item.id), Some(&dragged));
    assert_eq!(&out[..29], &items[1..]);
}

#[test]
fn unknown_id_returns_input_unchanged() {
    let arrangement = identity_arrangement();
    let items = arrangement.items();
    let out = preview_order(items, &ItemId::from_raw("999-Nope"), 3);
    assert_eq!(out, items.to_vec());
}

#[test]
fn commit_follows_the_final_visual_order() {
    let arrangement = identity_arrangement();
    let mut final_ids: Vec<ItemId> = arrangement
        .items()
        .iter()
        .map(|item| item.id.clone())
        .collect();
    final_ids.reverse();

    let committed = commit_order(&arrangement, &final_ids);
    let got: Vec<&ItemId> = committed.items().iter().map(|item| &item.id).collect();
    let want: Vec<&ItemId> = final_ids.iter().collect();
    assert_eq!(got, want);
    committed
        .ensure_permutation_of(reference_items())
        .expect("commit preserves the label multiset");
}

#[test]
fn commit_tolerates_unknown_and_missing_ids() {
    let arrangement = identity_arrangement();
    let ids: Vec<ItemId> = arrangement
        .items()
        .iter()
        .map(|item| item.id.clone())
        .collect();

    // Only report the last ten rows, plus an id the store has never seen.
    let mut final_ids: Vec<ItemId> = ids[20..].to_vec();
    final_ids.push(ItemId::from_raw("999-Ghost"));

    let committed = commit_order(&arrangement, &final_ids);
    assert_eq!(committed.len(), 30);
    // Reported ids come first in reported order; unreported ids keep their
    // relative order at the tail.
    let got: Vec<&ItemId> = committed.items().iter().map(|item| &item.id).collect();
    let mut want: Vec<&ItemId> = ids[20..].iter().collect();
    want.extend(ids[..20].iter());
    assert_eq!(got, want);
    committed
        .ensure_permutation_of(reference_items())
        .expect("commit preserves the label multiset");
}

#[test]
fn reorder_does_not_mutate_its_input() {
    let arrangement = identity_arrangement();
    let snapshot = arrangement.clone();
    let dragged = arrangement.items()[3].id.clone();

    let _ = reorder(&arrangement, &dragged, 15);
    assert_eq!(arrangement, snapshot);
}
