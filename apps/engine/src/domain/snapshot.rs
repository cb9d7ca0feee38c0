//! Public snapshot API for observing session state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::rules::gutter_numbers;
use crate::domain::scoring::ScoreReport;
use crate::domain::state::{Phase, QuizState, WorkingItem};

/// Public info about a single row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowPublic {
    pub id: String,
    pub label: String,
}

impl RowPublic {
    fn from_item(item: &WorkingItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            label: item.label.clone(),
        }
    }
}

/// Board contents present while an attempt is on screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Rows in their currently shown order (live preview wins over the
    /// committed arrangement while a drag is active).
    pub rows: Vec<RowPublic>,
    /// Gutter numerals for each row.
    pub gutter: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_score: Option<ScoreReport>,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum QuizSnapshot {
    Idle,
    InProgress(BoardSnapshot),
    Celebrating(BoardSnapshot),
}

/// Observe the current session state as a serializable snapshot.
pub fn snapshot_state(state: &QuizState) -> QuizSnapshot {
    match state.phase {
        Phase::Idle => QuizSnapshot::Idle,
        Phase::InProgress => QuizSnapshot::InProgress(board_of(state)),
        Phase::Celebrating => QuizSnapshot::Celebrating(board_of(state)),
    }
}

fn board_of(state: &QuizState) -> BoardSnapshot {
    let shown: &[WorkingItem] = state
        .preview
        .as_deref()
        .or_else(|| state.arrangement.as_ref().map(|a| a.items()))
        .unwrap_or(&[]);
    BoardSnapshot {
        rows: shown.iter().map(RowPublic::from_item).collect(),
        gutter: gutter_numbers(shown.len()),
        last_score: state.last_score.clone(),
    }
}
