//! View/controller boundary.

pub mod trait_def;

pub use trait_def::{QuizView, Screen};

/// A view that renders nothing. Useful for headless embedding and bulk
/// simulation, where only snapshots are observed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl QuizView for NullView {
    fn render_store(&self, _items: &[crate::domain::state::WorkingItem]) {}
    fn render_gutter(&self, _numbers: &[usize]) {}
    fn render_correctness(&self, _mask: &[bool]) {}
    fn render_screen(&self, _screen: Screen) {}
    fn show_message(&self, _text: &str) {}
}
