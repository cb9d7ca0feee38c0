//! Solver strategies that decide the next drag.

use engine::{reference_items, Arrangement, ItemId, RowMetrics};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A single drag decision: which row to pick up and the pointer height to
/// release it at.
#[derive(Debug, Clone)]
pub struct DragDecision {
    pub id: ItemId,
    pub pointer_y: f64,
}

pub trait Solver {
    fn name(&self) -> &'static str;

    /// Decide the next drag, or `None` when the solver sees nothing to fix.
    fn next_drag(&mut self, arrangement: &Arrangement) -> Option<DragDecision>;
}

/// Pointer height that lands in the middle of row `index`.
fn pointer_y_for(metrics: RowMetrics, index: usize) -> f64 {
    let cell = f64::from(metrics.cell_height());
    index as f64 * cell + cell * 0.5
}

/// Fixes the leftmost incorrect row on every move; solves any shuffle in at
/// most one drag per row.
pub struct GreedySolver {
    metrics: RowMetrics,
}

impl GreedySolver {
    pub fn new(metrics: RowMetrics) -> Self {
        Self { metrics }
    }
}

impl Solver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn next_drag(&mut self, arrangement: &Arrangement) -> Option<DragDecision> {
        let reference = reference_items();
        let items = arrangement.items();
        let target = items
            .iter()
            .zip(reference)
            .position(|(item, expected)| item.label != expected.label)?;
        let want = reference[target].label;
        let at = items.iter().position(|item| item.label == want)?;
        Some(DragDecision {
            id: items[at].id.clone(),
            pointer_y: pointer_y_for(self.metrics, target),
        })
    }
}

/// Drags random rows to random heights, including heights outside the
/// container. A baseline that exercises the clamping paths; it is not
/// expected to solve a 30-row board within any reasonable move cap.
pub struct RandomSolver {
    metrics: RowMetrics,
    rng: StdRng,
}

impl RandomSolver {
    pub fn new(metrics: RowMetrics, seed: u64) -> Self {
        Self {
            metrics,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Solver for RandomSolver {
    fn name(&self) -> &'static str {
        "random"
    }

    fn next_drag(&mut self, arrangement: &Arrangement) -> Option<DragDecision> {
        let items = arrangement.items();
        if items.is_empty() {
            return None;
        }
        let pick = self.rng.random_range(0..items.len());
        let scroll = self.metrics.scroll_height(items.len());
        let pointer_y = self.rng.random_range(-100.0..scroll + 100.0);
        Some(DragDecision {
            id: items[pick].id.clone(),
            pointer_y,
        })
    }
}
