//! Progress reporting for executed tasks.

use crate::task::TaskId;

/// Callback trait for task progress reporting.
///
/// Calls happen synchronously on the submitting thread, immediately around
/// the unit of work they describe, so an observer sees events in exactly the
/// order tasks were submitted.
pub trait TaskObserver: Send + Sync {
    /// Called right before a task runs.
    fn on_task_started(&self, id: TaskId, name: Option<&str>);

    /// Called when a task returns a value.
    fn on_task_completed(&self, id: TaskId, name: Option<&str>);

    /// Called when a task fails.
    fn on_task_failed(
        &self,
        id: TaskId,
        name: Option<&str>,
        error: &(dyn std::error::Error + Send + Sync + 'static),
    );

    /// Called once, when the executor first transitions to shut down.
    fn on_shutdown(&self) {}
}
