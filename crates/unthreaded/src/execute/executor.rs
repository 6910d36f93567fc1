//! Unthreaded executor: every task runs on the calling thread.
//!
//! Submission order, execution order and completion order are the same
//! thing here, since each call runs its work to completion before returning.
//!
//! A failing computation passed to `submit` or `invoke_all` is not captured
//! into a handle. The failure is re-raised to the submitter immediately as
//! [`Error::Task`], and for `invoke_all` the remaining tasks are skipped.
//! Handles therefore only ever carry values.

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

use crate::error::{BoxError, Error, Result};
use crate::handle::ResultHandle;
use crate::service::ExecutorService;
use crate::task::{Task, TaskId};

use super::builder::ExecutorBuilder;
use super::config::ExecutorConfig;
use super::observer::TaskObserver;

/// Mutable executor state, only touched while the executor lock is held.
pub(super) struct State {
    /// Once set, never cleared.
    shutdown: Cell<bool>,
    next_id: Cell<u64>,
}

impl State {
    fn new() -> Self {
        Self {
            shutdown: Cell::new(false),
            next_id: Cell::new(0),
        }
    }

    pub(super) fn is_shutdown(&self) -> bool {
        self.shutdown.get()
    }

    fn next_task_id(&self) -> TaskId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        TaskId::new(id)
    }
}

/// Executor that runs each submitted task synchronously, on the caller's
/// thread, before the submitting call returns.
///
/// All public operations on one instance are serialized. The lock is
/// reentrant, so a task may submit more work to, or shut down, the executor
/// that is running it.
///
/// # Example
///
/// ```
/// use unthreaded::{ExecutorService, Task, UnthreadedExecutor};
///
/// let executor = UnthreadedExecutor::new();
/// let mut counter = 0;
/// executor.execute(Task::action(|| counter += 1)).unwrap();
/// assert_eq!(counter, 1);
///
/// let handle = executor.submit(Task::from_fn(|| 6 * 7)).unwrap();
/// assert_eq!(*handle.get(), 42);
/// ```
pub struct UnthreadedExecutor {
    config: ExecutorConfig,
    state: ReentrantMutex<State>,
    observer: Option<Arc<dyn TaskObserver>>,
}

impl UnthreadedExecutor {
    /// Create an executor with the default configuration.
    pub fn new() -> Self {
        Self::from_parts(ExecutorConfig::default(), None)
    }

    /// Create an executor with the given configuration.
    pub fn with_config(config: ExecutorConfig) -> Self {
        Self::from_parts(config, None)
    }

    pub fn builder() -> ExecutorBuilder {
        ExecutorBuilder::new()
    }

    pub(super) fn from_parts(
        config: ExecutorConfig,
        observer: Option<Arc<dyn TaskObserver>>,
    ) -> Self {
        Self {
            config,
            state: ReentrantMutex::new(State::new()),
            observer,
        }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Acquire the executor lock.
    fn lock(&self) -> ReentrantMutexGuard<'_, State> {
        self.state.lock()
    }

    /// Run one task to completion, reporting progress.
    ///
    /// The caller must hold the executor lock and pass its state.
    pub(super) fn run_task<T>(
        &self,
        state: &State,
        task: Task<'_, T>,
    ) -> std::result::Result<T, BoxError> {
        let id = state.next_task_id();
        let name = task.name().map(str::to_owned);
        let name = name.as_deref();

        if self.config.trace_tasks {
            tracing::debug!(executor = %self.config.name, task = %id, ?name, "task started");
        }
        if let Some(ref observer) = self.observer {
            observer.on_task_started(id, name);
        }

        let result = task.run();

        match &result {
            Ok(_) => {
                if self.config.trace_tasks {
                    tracing::debug!(executor = %self.config.name, task = %id, ?name, "task completed");
                }
                if let Some(ref observer) = self.observer {
                    observer.on_task_completed(id, name);
                }
            }
            Err(e) => {
                tracing::warn!(executor = %self.config.name, task = %id, ?name, error = %e, "task failed");
                if let Some(ref observer) = self.observer {
                    observer.on_task_failed(id, name, &**e);
                }
            }
        }

        result
    }

    fn unsupported<T>(&self, operation: &'static str) -> Result<T> {
        tracing::warn!(executor = %self.config.name, operation, "unsupported operation requested");
        Err(Error::unsupported(operation))
    }
}

impl Default for UnthreadedExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UnthreadedExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnthreadedExecutor")
            .field("config", &self.config)
            .field("shutdown", &self.is_shutdown())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl ExecutorService for UnthreadedExecutor {
    fn execute(&self, action: Task<'_, ()>) -> Result<()> {
        let state = self.lock();
        self.run_task(&state, action).map_err(Error::Task)
    }

    fn submit<T>(&self, task: Task<'_, T>) -> Result<ResultHandle<T>> {
        let state = self.lock();
        self.run_task(&state, task)
            .map(ResultHandle::completed)
            .map_err(Error::Task)
    }

    fn submit_with<T>(&self, action: Task<'_, ()>, result: T) -> Result<ResultHandle<T>> {
        let state = self.lock();
        self.run_task(&state, action).map_err(Error::Task)?;
        Ok(ResultHandle::completed(result))
    }

    fn invoke_all<'a, T, I>(&self, tasks: I) -> Result<Vec<ResultHandle<T>>>
    where
        I: IntoIterator<Item = Task<'a, T>>,
    {
        let state = self.lock();
        self.run_all(&state, tasks)
    }

    fn invoke_all_timeout<'a, T, I>(
        &self,
        _tasks: I,
        _timeout: Duration,
    ) -> Result<Vec<ResultHandle<T>>>
    where
        I: IntoIterator<Item = Task<'a, T>>,
    {
        self.unsupported("invoke_all_timeout")
    }

    fn invoke_any<'a, T, I>(&self, tasks: I) -> Result<T>
    where
        I: IntoIterator,
        I::Item: Into<Option<Task<'a, T>>>,
    {
        let state = self.lock();
        self.run_any(&state, tasks)
    }

    fn invoke_any_timeout<'a, T, I>(&self, _tasks: I, _timeout: Duration) -> Result<T>
    where
        I: IntoIterator,
        I::Item: Into<Option<Task<'a, T>>>,
    {
        self.unsupported("invoke_any_timeout")
    }

    fn shutdown(&self) {
        let state = self.lock();
        if state.shutdown.replace(true) {
            tracing::debug!(executor = %self.config.name, "executor already shut down");
            return;
        }

        tracing::info!(executor = %self.config.name, "executor shut down");
        if let Some(ref observer) = self.observer {
            observer.on_shutdown();
        }
    }

    fn shutdown_now(&self) -> Result<Vec<Task<'static, ()>>> {
        self.unsupported("shutdown_now")
    }

    fn is_shutdown(&self) -> bool {
        self.lock().is_shutdown()
    }

    /// Same as [`is_shutdown`](Self::is_shutdown): no work can be in flight
    /// once the flag is set.
    fn is_terminated(&self) -> bool {
        self.lock().is_shutdown()
    }

    /// Returns `true` at once. There is never outstanding work to wait for.
    fn await_termination(&self, _timeout: Duration) -> bool {
        let _state = self.lock();
        true
    }
}
