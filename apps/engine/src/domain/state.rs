//! Quiz state containers: working items, the arrangement, and session phase.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ReferenceItem;
use crate::domain::scoring::ScoreReport;
use crate::errors::domain::{DomainError, ValidationKind};

/// Synthetic identity token for a shuffled item.
///
/// Derived from the post-shuffle index and the label, so the reorder engine
/// can track an item across mutation by identity rather than by value or by
/// current index. Unique even if two labels were ever equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(shuffled_index: usize, label: &str) -> Self {
        Self(format!("{shuffled_index}-{label}"))
    }

    /// Rebuild an id from its raw token, e.g. a DOM dataset key coming back
    /// through a drag event.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A shuffled item instance, distinct from its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingItem {
    pub id: ItemId,
    pub label: String,
}

/// The user's current arrangement: an ordered sequence of working items.
///
/// Invariant: the multiset of labels always equals the reference sequence's.
/// Reordering only permutes; it never inserts or deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    items: Vec<WorkingItem>,
}

impl Arrangement {
    pub fn new(items: Vec<WorkingItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[WorkingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current position of the item with `id`, if present.
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn into_items(self) -> Vec<WorkingItem> {
        self.items
    }

    /// Defensive check that this arrangement is still a permutation of the
    /// reference labels (no duplication, no loss).
    pub fn ensure_permutation_of(&self, reference: &[ReferenceItem]) -> Result<(), DomainError> {
        if self.items.len() != reference.len() {
            return Err(DomainError::validation(
                ValidationKind::ItemCount,
                format!("expected {} items, found {}", reference.len(), self.items.len()),
            ));
        }
        let mut mine: Vec<&str> = self.items.iter().map(|item| item.label.as_str()).collect();
        let mut theirs: Vec<&str> = reference.iter().map(|item| item.label).collect();
        mine.sort_unstable();
        theirs.sort_unstable();
        if mine != theirs {
            return Err(DomainError::validation(
                ValidationKind::LabelMismatch,
                "arrangement labels are not a permutation of the reference",
            ));
        }
        Ok(())
    }
}

/// Session phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Start screen; no active arrangement.
    Idle,
    /// Quiz screen; the user is rearranging rows.
    InProgress,
    /// Full match found; celebration screen until the auto-return fires.
    Celebrating,
}

/// Entire session container, sufficient for the pure domain operations.
#[derive(Debug, Clone)]
pub struct QuizState {
    pub phase: Phase,
    /// Authoritative arrangement; `None` while Idle.
    pub arrangement: Option<Arrangement>,
    /// View-only ordering while a drag is active; committed on drop so rapid
    /// pointer movement never thrashes the authoritative arrangement.
    pub preview: Option<Vec<WorkingItem>>,
    /// Attempt counter; feeds per-attempt seed derivation.
    pub attempt_no: u32,
    /// Most recent score surfaced to the user, while its highlight is shown.
    pub last_score: Option<ScoreReport>,
}

impl QuizState {
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            arrangement: None,
            preview: None,
            attempt_no: 0,
            last_score: None,
        }
    }
}
