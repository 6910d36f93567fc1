//! Completed result handles.
//!
//! A [`ResultHandle`] stands in for a future whose computation has already
//! finished. There is no pending or cancelled state: the handle is created
//! only after its task ran to completion, so retrieval never blocks.

use std::future::{IntoFuture, Ready, ready};
use std::time::Duration;

/// Handle to the value of a task that has already run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultHandle<T> {
    value: T,
}

impl<T> ResultHandle<T> {
    pub(crate) fn completed(value: T) -> Self {
        Self { value }
    }

    /// Get the computed value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Get the computed value. The timeout is never reached.
    pub fn get_timeout(&self, _timeout: Duration) -> &T {
        &self.value
    }

    /// Consume the handle, returning the value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Always `true`: the task finished before the handle existed.
    pub fn is_done(&self) -> bool {
        true
    }

    /// Always `false`: there was never a moment the task could be cancelled.
    pub fn is_cancelled(&self) -> bool {
        false
    }

    /// Attempt to cancel the task. Always fails, the work already ran.
    pub fn cancel(&self, _may_interrupt: bool) -> bool {
        false
    }
}

impl<T> IntoFuture for ResultHandle<T> {
    type Output = T;
    type IntoFuture = Ready<T>;

    fn into_future(self) -> Self::IntoFuture {
        ready(self.value)
    }
}
