//! Output-surface trait the engine renders through.

use crate::domain::state::WorkingItem;

/// Screens the view can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Quiz,
    Celebrate,
}

/// Trait for the external view/controller.
///
/// Implementations render the arrangement and surface scoring feedback. The
/// session never blocks on the view: every call is fire-and-forget, issued
/// only after the state mutation for the event has fully settled.
pub trait QuizView: Send + Sync {
    /// Render the rows in the given order.
    fn render_store(&self, items: &[WorkingItem]);

    /// Render the side gutter numerals.
    fn render_gutter(&self, numbers: &[usize]);

    /// Highlight per-row correctness; an all-false mask clears highlights.
    fn render_correctness(&self, mask: &[bool]);

    /// Switch to the given screen.
    fn render_screen(&self, screen: Screen);

    /// Show a transient notice (the "N of 30" message).
    fn show_message(&self, text: &str);
}
