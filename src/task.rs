//! Task polling utilities
//!
//! Helpers for driving tokio tasks from the frame loop: poll a finished task
//! without blocking, and abort one that is no longer wanted.

use futures::FutureExt;
use tokio::task::JoinHandle;

/// Result of polling a task
#[derive(Debug)]
pub enum PollResult<T> {
    /// No task to poll (task was None)
    NoTask,
    /// Task is still running
    Pending,
    /// Task completed with result (may be Ok or join error)
    Complete(Result<T, tokio::task::JoinError>),
}

/// Poll an optional task handle and return its result if finished.
///
/// The handle is taken out of `task` only once it has completed.
pub fn poll_task<T>(task: &mut Option<JoinHandle<T>>) -> PollResult<T> {
    match task.as_ref() {
        None => return PollResult::NoTask,
        Some(handle) if !handle.is_finished() => return PollResult::Pending,
        Some(_) => {}
    }

    let Some(handle) = task.take() else {
        return PollResult::NoTask;
    };

    match handle.now_or_never() {
        Some(result) => PollResult::Complete(result),
        None => {
            tracing::warn!("Task not ready despite is_finished()");
            PollResult::Pending
        }
    }
}

/// Abort a task if one is running. Returns true if a task was aborted.
pub fn cancel_task<T>(task: &mut Option<JoinHandle<T>>) -> bool {
    match task.take() {
        Some(handle) => {
            handle.abort();
            true
        }
        None => false,
    }
}
