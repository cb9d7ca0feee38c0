//! Quiz session service: event handling, timer discipline, view emission.
//!
//! The session is a single logical actor: all state mutation happens inside
//! one event handler at a time, and within a handler the store is fully
//! updated before any view call goes out. The only suspension points are the
//! two scheduled timers (highlight clear and celebration auto-return), both
//! cancellable.

mod timers;


pub use timers::TimerHandle;

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::QuizConfig;
use crate::domain::catalog::reference_items;
use crate::domain::layout::position_from_coordinate;
use crate::domain::reorder::{commit_order, preview_order};
use crate::domain::rules::gutter_numbers;
use crate::domain::scoring::{score_arrangement, ScoreReport};
use crate::domain::seed_derivation::derive_attempt_seed;
use crate::domain::shuffle::shuffled_arrangement;
use crate::domain::snapshot::{snapshot_state, QuizSnapshot};
use crate::domain::state::{ItemId, Phase, QuizState, WorkingItem};
use crate::error::EngineError;
use crate::view::{QuizView, Screen};

struct SessionState {
    quiz: QuizState,
    /// Bumped by every state-entering action. A timer whose captured epoch no
    /// longer matches must not apply its transition; abort alone cannot stop
    /// a task that has already slept through its delay.
    timer_epoch: u64,
    highlight_timer: Option<TimerHandle>,
    celebration_timer: Option<TimerHandle>,
}

struct SessionInner {
    config: QuizConfig,
    view: Arc<dyn QuizView>,
    session_seed: u64,
    state: Mutex<SessionState>,
}

impl SessionInner {
    fn finish_celebration(inner: &Arc<SessionInner>, epoch: u64) {
        let mut state = inner.state.lock();
        if state.timer_epoch != epoch {
            debug!(epoch, "stale celebration timer, ignoring");
            return;
        }
        state.celebration_timer = None;
        state.quiz.phase = Phase::Idle;
        state.quiz.arrangement = None;
        state.quiz.preview = None;
        state.quiz.last_score = None;
        drop(state);
        info!("celebration finished, back to start screen");
        inner.view.render_screen(Screen::Start);
    }

    fn clear_highlight(inner: &Arc<SessionInner>, epoch: u64) {
        let mut state = inner.state.lock();
        if state.timer_epoch != epoch {
            debug!(epoch, "stale highlight timer, ignoring");
            return;
        }
        state.highlight_timer = None;
        state.quiz.last_score = None;
        let count = state.quiz.arrangement.as_ref().map_or(0, |a| a.len());
        drop(state);
        inner.view.render_correctness(&vec![false; count]);
    }
}

// Every state-entering action cancels outstanding timers, so a stale timer
// can never force a transition after the state has already changed.
fn cancel_pending(state: &mut SessionState) {
    state.timer_epoch += 1;
    if let Some(timer) = state.highlight_timer.take() {
        timer.cancel();
    }
    if let Some(timer) = state.celebration_timer.take() {
        timer.cancel();
    }
}

/// One interactive quiz session.
///
/// Owns the authoritative arrangement and the pending timers; renders through
/// the supplied [`QuizView`]. Event handlers must run inside a tokio runtime
/// because `check` may schedule timer tasks.
pub struct SessionService {
    inner: Arc<SessionInner>,
}

impl SessionService {
    /// Create a session with a base seed drawn from OS entropy.
    pub fn new(config: QuizConfig, view: Arc<dyn QuizView>) -> Result<Self, EngineError> {
        Self::with_seed(config, view, rand::random())
    }

    /// Create a session with an explicit base seed; every attempt's shuffle
    /// derives from it, so the whole session is replayable.
    pub fn with_seed(
        config: QuizConfig,
        view: Arc<dyn QuizView>,
        session_seed: u64,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let expected = reference_items().len();
        if config.item_count != expected {
            return Err(EngineError::config(format!(
                "item count {} does not match the reference sequence length {expected}",
                config.item_count
            )));
        }
        Ok(Self {
            inner: Arc::new(SessionInner {
                config,
                view,
                session_seed,
                state: Mutex::new(SessionState {
                    quiz: QuizState::idle(),
                    timer_epoch: 0,
                    highlight_timer: None,
                    celebration_timer: None,
                }),
            }),
        })
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.lock().quiz.phase
    }

    pub fn session_seed(&self) -> u64 {
        self.inner.session_seed
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> QuizSnapshot {
        snapshot_state(&self.inner.state.lock().quiz)
    }

    /// Begin the first attempt.
    pub fn start(&self) {
        self.begin_attempt("start");
    }

    /// Throw away the current arrangement and reshuffle.
    pub fn restart(&self) {
        self.begin_attempt("restart");
    }

    fn begin_attempt(&self, action: &'static str) {
        let mut state = self.inner.state.lock();
        cancel_pending(&mut state);
        state.quiz.attempt_no += 1;
        let seed = derive_attempt_seed(self.inner.session_seed, state.quiz.attempt_no);
        let arrangement = shuffled_arrangement(seed);
        let items = arrangement.items().to_vec();
        let gutter = gutter_numbers(arrangement.len());
        info!(action, attempt_no = state.quiz.attempt_no, "starting quiz attempt");
        state.quiz.phase = Phase::InProgress;
        state.quiz.preview = None;
        state.quiz.last_score = None;
        state.quiz.arrangement = Some(arrangement);
        drop(state);

        let view = &self.inner.view;
        view.render_gutter(&gutter);
        view.render_store(&items);
        view.render_screen(Screen::Quiz);
    }

    /// Leave the quiz and return to the start screen.
    pub fn go_home(&self) {
        let mut state = self.inner.state.lock();
        cancel_pending(&mut state);
        state.quiz.phase = Phase::Idle;
        state.quiz.arrangement = None;
        state.quiz.preview = None;
        state.quiz.last_score = None;
        drop(state);
        info!("returning to start screen");
        self.inner.view.render_screen(Screen::Start);
    }

    /// Handle a pointer move during an active drag.
    ///
    /// `pointer_y` is relative to the top of the list container. Reorders the
    /// view-only preview; the authoritative arrangement is untouched until
    /// [`drop_dragged`](Self::drop_dragged).
    pub fn drag_move(&self, dragged_id: &ItemId, pointer_y: f64) {
        let mut state = self.inner.state.lock();
        let Some(arrangement) = state.quiz.arrangement.as_ref() else {
            debug!("drag-move outside an active attempt, ignoring");
            return;
        };
        let metrics = self.inner.config.metrics();
        let count = arrangement.len();
        let target =
            position_from_coordinate(pointer_y, 0.0, metrics.scroll_height(count), metrics, count);
        let base: Vec<WorkingItem> = state
            .quiz
            .preview
            .clone()
            .unwrap_or_else(|| arrangement.items().to_vec());
        let next = preview_order(&base, dragged_id, target);
        state.quiz.preview = Some(next.clone());
        drop(state);
        self.inner.view.render_store(&next);
    }

    /// Commit the final visual ordering into the authoritative arrangement.
    /// Corresponds to the drop event at the end of a drag.
    pub fn drop_dragged(&self) -> Result<(), EngineError> {
        let mut state = self.inner.state.lock();
        let Some(preview) = state.quiz.preview.take() else {
            return Ok(());
        };
        let Some(arrangement) = state.quiz.arrangement.as_ref() else {
            return Ok(());
        };
        let final_ids: Vec<ItemId> = preview.iter().map(|item| item.id.clone()).collect();
        let committed = commit_order(arrangement, &final_ids);
        committed.ensure_permutation_of(reference_items())?;
        let gutter = gutter_numbers(committed.len());
        debug!("drag committed");
        state.quiz.arrangement = Some(committed);
        drop(state);
        self.inner.view.render_gutter(&gutter);
        Ok(())
    }

    /// Score the current arrangement and surface the result.
    ///
    /// An incomplete ordering is a normal outcome: the correctness highlight
    /// goes up with a "N of 30" notice and clears after the configured delay.
    /// A complete ordering switches to the celebration screen, which
    /// auto-returns to start. Returns the report, or `None` outside an
    /// active attempt.
    pub fn check(&self) -> Option<ScoreReport> {
        let mut state = self.inner.state.lock();
        let Some(arrangement) = state.quiz.arrangement.as_ref() else {
            debug!("check outside an active attempt, ignoring");
            return None;
        };
        let total = arrangement.len();
        let report = score_arrangement(arrangement, reference_items());
        info!(
            correct = report.correct_count,
            total,
            complete = report.is_complete,
            "checked arrangement"
        );
        cancel_pending(&mut state);
        let epoch = state.timer_epoch;
        let mask = report.correct_mask.clone();
        let correct = report.correct_count;
        state.quiz.last_score = Some(report.clone());

        if report.is_complete {
            state.quiz.phase = Phase::Celebrating;
            let inner = Arc::clone(&self.inner);
            state.celebration_timer = Some(TimerHandle::spawn(
                self.inner.config.celebration_duration,
                move || SessionInner::finish_celebration(&inner, epoch),
            ));
            drop(state);
            let view = &self.inner.view;
            view.render_correctness(&mask);
            view.render_screen(Screen::Celebrate);
        } else {
            let inner = Arc::clone(&self.inner);
            state.highlight_timer = Some(TimerHandle::spawn(
                self.inner.config.highlight_duration,
                move || SessionInner::clear_highlight(&inner, epoch),
            ));
            drop(state);
            let view = &self.inner.view;
            view.render_correctness(&mask);
            view.show_message(&format!(
                "Keep trying — {correct} of {total} are in the right place."
            ));
        }
        Some(report)
    }
}
