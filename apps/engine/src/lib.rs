#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod session;
pub mod view;

// Re-exports for public API
pub use config::QuizConfig;
pub use domain::catalog::{reference_items, ReferenceItem, REFERENCE_LABELS};
pub use domain::layout::{position_from_coordinate, RowMetrics};
pub use domain::reorder::{commit_order, preview_order, reorder};
pub use domain::rules::{display_number, gutter_numbers};
pub use domain::scoring::{score_arrangement, ScoreReport};
pub use domain::seed_derivation::derive_attempt_seed;
pub use domain::shuffle::{shuffle_with_seed, shuffled_arrangement};
pub use domain::snapshot::{snapshot_state, QuizSnapshot};
pub use domain::state::{Arrangement, ItemId, Phase, QuizState, WorkingItem};
pub use error::EngineError;
pub use session::SessionService;
pub use view::{NullView, QuizView, Screen};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
