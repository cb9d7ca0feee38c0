//! In-memory attempt simulator.
//!
//! Runs attempts entirely in memory against the pure domain layer, driving
//! every drag through the pointer mapper and the preview/commit pair so the
//! whole pipeline is exercised, not just the scorer.

use engine::{
    commit_order, position_from_coordinate, preview_order, reference_items, score_arrangement,
    shuffled_arrangement, Arrangement, ItemId, RowMetrics,
};
use tracing::debug;

use crate::solver::{DragDecision, Solver};
use crate::types::AttemptRecord;

pub struct Simulator {
    metrics: RowMetrics,
    max_moves: u32,
}

impl Simulator {
    pub fn new(metrics: RowMetrics, max_moves: u32) -> Self {
        Self { metrics, max_moves }
    }

    /// Run one attempt to completion or to the move cap.
    pub fn run_attempt(&self, attempt: u32, seed: u64, solver: &mut dyn Solver) -> AttemptRecord {
        let mut arrangement = shuffled_arrangement(seed);
        let initial_correct = score_arrangement(&arrangement, reference_items()).correct_count;

        let mut moves = 0u32;
        let mut checks = 0u32;
        let solved = loop {
            checks += 1;
            let report = score_arrangement(&arrangement, reference_items());
            if report.is_complete {
                break true;
            }
            if moves >= self.max_moves {
                break false;
            }
            let Some(decision) = solver.next_drag(&arrangement) else {
                break false;
            };
            arrangement = self.apply_drag(&arrangement, &decision);
            moves += 1;
        };

        debug!(attempt, seed, moves, checks, solved, "attempt finished");
        AttemptRecord {
            attempt,
            seed,
            solver: solver.name().to_string(),
            initial_correct,
            moves,
            checks,
            solved,
        }
    }

    fn apply_drag(&self, arrangement: &Arrangement, decision: &DragDecision) -> Arrangement {
        let count = arrangement.len();
        let target = position_from_coordinate(
            decision.pointer_y,
            0.0,
            self.metrics.scroll_height(count),
            self.metrics,
            count,
        );
        let previewed = preview_order(arrangement.items(), &decision.id, target);
        let final_ids: Vec<ItemId> = previewed.into_iter().map(|item| item.id).collect();
        commit_order(arrangement, &final_ids)
    }
}
