//! The task-submission capability interface.

use std::time::Duration;

use crate::error::Result;
use crate::handle::ResultHandle;
use crate::task::Task;

/// Submission, batch execution and lifecycle control for an executor.
///
/// Implementations decide where and when tasks run. Operations that cannot be
/// honored by an implementation return [`Error::Unsupported`] rather than
/// approximating their contract.
///
/// [`Error::Unsupported`]: crate::Error::Unsupported
pub trait ExecutorService {
    /// Run a side-effecting action. A failing action surfaces as an error.
    fn execute(&self, action: Task<'_, ()>) -> Result<()>;

    /// Run a computation and return a handle to its value.
    fn submit<T>(&self, task: Task<'_, T>) -> Result<ResultHandle<T>>;

    /// Run an action, then return a handle to the supplied stand-in `result`.
    fn submit_with<T>(&self, action: Task<'_, ()>, result: T) -> Result<ResultHandle<T>>;

    /// Run every task, returning one handle per task in input order.
    fn invoke_all<'a, T, I>(&self, tasks: I) -> Result<Vec<ResultHandle<T>>>
    where
        I: IntoIterator<Item = Task<'a, T>>;

    /// Timed form of [`invoke_all`](Self::invoke_all).
    fn invoke_all_timeout<'a, T, I>(
        &self,
        tasks: I,
        timeout: Duration,
    ) -> Result<Vec<ResultHandle<T>>>
    where
        I: IntoIterator<Item = Task<'a, T>>;

    /// Return the value of a task that completed successfully.
    ///
    /// Entries convert into `Option<Task>` so a batch may carry absent tasks,
    /// which are rejected.
    fn invoke_any<'a, T, I>(&self, tasks: I) -> Result<T>
    where
        I: IntoIterator,
        I::Item: Into<Option<Task<'a, T>>>;

    /// Timed form of [`invoke_any`](Self::invoke_any).
    fn invoke_any_timeout<'a, T, I>(&self, tasks: I, timeout: Duration) -> Result<T>
    where
        I: IntoIterator,
        I::Item: Into<Option<Task<'a, T>>>;

    /// Stop accepting new work. Idempotent.
    fn shutdown(&self);

    /// Stop immediately, interrupting running work and returning what never started.
    fn shutdown_now(&self) -> Result<Vec<Task<'static, ()>>>;

    fn is_shutdown(&self) -> bool;

    /// Whether shutdown completed and no work remains.
    fn is_terminated(&self) -> bool;

    /// Wait up to `timeout` for termination, returning whether it was reached.
    fn await_termination(&self, timeout: Duration) -> bool;
}
