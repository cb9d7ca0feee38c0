//! Property-based tests for scoring, reordering, and the pointer mapper.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::catalog::reference_items;
use crate::domain::layout::{position_from_coordinate, RowMetrics};
use crate::domain::reorder::preview_order;
use crate::domain::rules::ITEM_COUNT;
use crate::domain::scoring::score_arrangement;
use crate::domain::test_gens;

proptest! {
    /// Property: the correct count equals the number of fixed points of the
    /// permutation relative to reference order.
    #[test]
    fn prop_score_counts_fixed_points(order in test_gens::permutation()) {
        let fixed = order.iter().enumerate().filter(|&(i, &src)| i == src).count();
        let arrangement = test_gens::arrangement_from_order(order);

        let report = score_arrangement(&arrangement, reference_items());
        prop_assert_eq!(report.correct_count, fixed);
        prop_assert_eq!(report.is_complete, fixed == ITEM_COUNT);
        prop_assert_eq!(
            report.correct_mask.iter().filter(|&&ok| ok).count(),
            report.correct_count
        );
    }

    /// Property: a preview reorder is a pure permutation of the input ids.
    #[test]
    fn prop_preview_is_permutation(
        arrangement in test_gens::permuted_arrangement(),
        pick in test_gens::item_index(),
        target in 0usize..40,
    ) {
        let items = arrangement.items();
        let dragged = items[pick].id.clone();
        let out = preview_order(items, &dragged, target);

        prop_assert_eq!(out.len(), items.len());
        let before: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        let after: HashSet<&str> = out.iter().map(|i| i.id.as_str()).collect();
        prop_assert_eq!(before, after);
    }

    /// Property: dragging an item onto its own position changes nothing.
    #[test]
    fn prop_self_target_is_noop(
        arrangement in test_gens::permuted_arrangement(),
        pick in test_gens::item_index(),
    ) {
        let items = arrangement.items();
        let dragged = items[pick].id.clone();
        prop_assert_eq!(preview_order(items, &dragged, pick), items.to_vec());
    }

    /// Property: the mapper is monotonic non-decreasing in y and always lands
    /// in [0, item_count], no matter how far outside the container y is.
    #[test]
    fn prop_mapper_monotonic_and_bounded(
        y1 in test_gens::pointer_y(),
        y2 in test_gens::pointer_y(),
    ) {
        let metrics = RowMetrics::default();
        let scroll = metrics.scroll_height(ITEM_COUNT);
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };

        let a = position_from_coordinate(lo, 0.0, scroll, metrics, ITEM_COUNT);
        let b = position_from_coordinate(hi, 0.0, scroll, metrics, ITEM_COUNT);
        prop_assert!(a <= b);
        prop_assert!(b <= ITEM_COUNT);
    }
}
