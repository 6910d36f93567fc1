//! Batch aggregators behind `invoke_all` and `invoke_any`.
//!
//! Both walk the batch strictly in iteration order on the caller's thread.
//! `invoke_all` stops at the first failure. `invoke_any` has nothing to race,
//! so it attempts every task and keeps the most recent success.

use crate::error::{BoxError, Error, Result};
use crate::handle::ResultHandle;
use crate::task::Task;

use super::executor::{State, UnthreadedExecutor};

impl UnthreadedExecutor {
    /// Run every task, wrapping each value in a completed handle.
    ///
    /// The first failure is re-raised as [`Error::Task`]; tasks after it never run.
    pub(super) fn run_all<'a, T, I>(&self, state: &State, tasks: I) -> Result<Vec<ResultHandle<T>>>
    where
        I: IntoIterator<Item = Task<'a, T>>,
    {
        tasks
            .into_iter()
            .map(|task| {
                self.run_task(state, task)
                    .map(ResultHandle::completed)
                    .map_err(Error::Task)
            })
            .collect()
    }

    /// Attempt every task and return the value of the last one that succeeded.
    ///
    /// The batch is validated before anything runs: a shut-down executor
    /// rejects it, an empty batch is an invalid argument and an absent entry
    /// is reported by position. Failures along the way are kept as candidate
    /// causes; if nothing succeeds, the most recent one is returned inside
    /// [`Error::Execution`].
    pub(super) fn run_any<'a, T, I>(&self, state: &State, tasks: I) -> Result<T>
    where
        I: IntoIterator,
        I::Item: Into<Option<Task<'a, T>>>,
    {
        if state.is_shutdown() {
            tracing::debug!(executor = %self.config().name, "invoke_any rejected after shutdown");
            return Err(Error::Rejected);
        }

        let tasks: Vec<Option<Task<'a, T>>> = tasks.into_iter().map(Into::into).collect();
        if tasks.is_empty() {
            return Err(Error::InvalidArgument(
                "invoke_any requires at least one task".to_string(),
            ));
        }
        if let Some(index) = tasks.iter().position(Option::is_none) {
            return Err(Error::NullTask { index });
        }

        let attempts = tasks.len();
        let mut value: Option<T> = None;
        let mut last_cause: Option<BoxError> = None;

        for task in tasks.into_iter().flatten() {
            match self.run_task(state, task) {
                Ok(v) => value = Some(v),
                Err(e) => last_cause = Some(e),
            }
        }

        match value {
            Some(v) => Ok(v),
            None => Err(Error::Execution {
                attempts,
                cause: last_cause.unwrap_or_else(|| "no task produced a value".into()),
            }),
        }
    }
}
