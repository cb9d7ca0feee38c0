//! Shared types for the simulator.

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Csv,
}

/// Result of one simulated quiz attempt.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptRecord {
    pub attempt: u32,
    pub seed: u64,
    pub solver: String,
    /// Fixed points straight after the shuffle, before any drag.
    pub initial_correct: usize,
    /// Drags performed.
    pub moves: u32,
    /// Score checks performed.
    pub checks: u32,
    pub solved: bool,
}
