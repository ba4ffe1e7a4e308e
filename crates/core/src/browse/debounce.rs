//! Trailing-edge debouncer for keystroke-rate input.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Coalesces rapid calls into a single trailing invocation.
///
/// Each call restarts the quiet-period timer and replaces the pending value
/// (last-write-wins). The wrapped action runs once, with the last value
/// seen, after the calls stop for the quiet period. There is no
/// leading-edge call and no maximum-wait cap.
pub struct Debouncer<T> {
    quiet_period: Duration,
    action: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wrap `action` with the given quiet period.
    pub fn new(quiet_period: Duration, action: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            quiet_period,
            action: Arc::new(action),
            pending: None,
        }
    }

    /// Record a new value and restart the quiet-period timer.
    pub fn call(&mut self, value: T) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let action = Arc::clone(&self.action);
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            action(value);
        }));
    }

    /// Drop any pending invocation without running it.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
