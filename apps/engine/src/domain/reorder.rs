//! Two-phase reordering: live preview during a drag, commit on drop.
//!
//! The visual list is reordered continuously while a drag is active; the
//! authoritative arrangement is only resynchronized from the final visual
//! order at drop time. Both phases are pure functions over snapshots, so the
//! engine is unit-testable without any rendering surface.

use tracing::debug;

use crate::domain::state::{Arrangement, ItemId, WorkingItem};

/// Reorder a view-only snapshot so the dragged item lands at `target_index`
/// among the remaining items.
///
/// `target_index` is relative to the list with the dragged item already
/// removed. This matches how a live drag preview behaves: the dragged row
/// floats, the rest close the gap, then the row reinserts. The index is
/// clamped post-removal; an unknown id is a no-op.
pub fn preview_order(
    items: &[WorkingItem],
    dragged_id: &ItemId,
    target_index: usize,
) -> Vec<WorkingItem> {
    let Some(from) = items.iter().position(|item| &item.id == dragged_id) else {
        debug!(dragged_id = %dragged_id, "dragged id not in ordering, ignoring");
        return items.to_vec();
    };
    let mut reordered = items.to_vec();
    let dragged = reordered.remove(from);
    let at = target_index.min(reordered.len());
    reordered.insert(at, dragged);
    reordered
}

/// Commit a final visual ordering into the authoritative arrangement.
///
/// Items are re-sequenced by where their id appears in `final_ids`; identity
/// and label are preserved. Defensively, ids the view never reported keep
/// their relative order at the tail and unknown ids are ignored, so the
/// permutation invariant holds under any view bug.
pub fn commit_order(arrangement: &Arrangement, final_ids: &[ItemId]) -> Arrangement {
    let mut items = arrangement.items().to_vec();
    items.sort_by_key(|item| {
        final_ids
            .iter()
            .position(|id| id == &item.id)
            .unwrap_or(final_ids.len())
    });
    Arrangement::new(items)
}

/// One-shot reorder of the authoritative arrangement (preview and commit
/// fused), for callers without a live drag.
pub fn reorder(arrangement: &Arrangement, dragged_id: &ItemId, target_index: usize) -> Arrangement {
    Arrangement::new(preview_order(arrangement.items(), dragged_id, target_index))
}
