//! Trailing debounce built on cancellable scheduled tasks
//!
//! [`ScheduledTask`] runs a closure once after a delay unless cancelled
//! first. [`Debouncer`] keeps at most one pending task and replaces it on
//! every call, so a burst of calls collapses into one dispatch carrying the
//! arguments of the last call.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;

/// Delay used for search-as-you-type
pub const SEARCH_DELAY: Duration = Duration::from_millis(500);

/// A closure scheduled to run once after a delay.
///
/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Run `task` after `delay`
    pub fn schedule<F>(delay: Duration, task: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        Self { handle }
    }

    /// Prevent the task from running if its delay has not elapsed yet
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the task already ran or was cancelled
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Collapses rapid calls into one dispatch after a quiet period.
///
/// The dispatch future is spawned on its own once the delay elapses;
/// cancelling or calling again afterwards does not abort it.
pub struct Debouncer<T, F> {
    delay: Duration,
    dispatch: Arc<F>,
    pending: Mutex<Option<ScheduledTask>>,
    _args: std::marker::PhantomData<fn(T)>,
}

impl<T, F, Fut> Debouncer<T, F>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    pub fn new(delay: Duration, dispatch: F) -> Self {
        Self {
            delay,
            dispatch: Arc::new(dispatch),
            pending: Mutex::new(None),
            _args: std::marker::PhantomData,
        }
    }

    /// Schedule a dispatch with `args`, replacing any pending one
    pub fn call(&self, args: T) {
        let dispatch = Arc::clone(&self.dispatch);
        let task = ScheduledTask::schedule(self.delay, move || {
            tokio::spawn(dispatch(args));
        });

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.replace(task) {
            if !previous.is_finished() {
                debug!("Debounce: superseding pending dispatch");
            }
            previous.cancel();
        }
    }

    /// Drop the pending dispatch, if any
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = pending.take() {
            task.cancel();
        }
    }

    /// Whether a dispatch is scheduled and has not fired yet
    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl<T, F> Drop for Debouncer<T, F> {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = pending.take() {
            task.cancel();
        }
    }
}
