//! Cancellable scheduled transitions.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Handle to a scheduled delayed transition.
///
/// Aborting stops a task that is still sleeping. A task that has already
/// woken may still run to completion, so every fire also carries an epoch
/// that is re-checked under the state lock before the transition applies
/// (see the session module).
#[derive(Debug)]
pub struct TimerHandle {
    handle: JoinHandle<()>,
}

impl TimerHandle {
    /// Schedule `fire` to run after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(delay: Duration, fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fire();
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
