//! Domain layer: pure quiz logic types and helpers.

pub mod catalog;
pub mod layout;
pub mod reorder;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod shuffle;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_layout;
#[cfg(test)]
mod tests_props_reorder;
#[cfg(test)]
mod tests_props_shuffle;
#[cfg(test)]
mod tests_reorder;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use scoring::{score_arrangement, ScoreReport};
pub use state::{Arrangement, ItemId, Phase, WorkingItem};
