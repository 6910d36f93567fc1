//! Units of work accepted by the executor.

use std::fmt;

use crate::error::BoxError;

type Work<'a, T> = Box<dyn FnOnce() -> std::result::Result<T, BoxError> + 'a>;

/// Identifier assigned to each unit of work an executor runs.
///
/// Ids increase monotonically per executor instance, so comparing two ids
/// tells which task was submitted (and therefore ran and finished) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub(crate) u64);

impl TaskId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task_{}", self.0)
    }
}

/// A unit of work: a computation that yields a `T` or fails.
///
/// Side-effecting actions are just `Task<'a, ()>`. Because the executor runs
/// every task before the submitting call returns, a task may borrow from the
/// caller's stack for `'a`.
///
/// ```
/// use unthreaded::Task;
///
/// let mut hits = 0;
/// let task = Task::action(|| hits += 1).named("bump");
/// assert_eq!(task.name(), Some("bump"));
/// ```
pub struct Task<'a, T> {
    name: Option<String>,
    work: Work<'a, T>,
}

impl<'a, T> Task<'a, T> {
    /// Create a task from a fallible computation.
    pub fn new<F, E>(f: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, E> + 'a,
        E: Into<BoxError> + 'a,
        T: 'a,
    {
        Self {
            name: None,
            work: Box::new(move || f().map_err(Into::into)),
        }
    }

    /// Create a task from a computation that cannot fail.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce() -> T + 'a,
        T: 'a,
    {
        Self {
            name: None,
            work: Box::new(move || Ok(f())),
        }
    }

    /// Attach a name, reported in logs and to observers.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Run the work to completion on the current thread.
    pub(crate) fn run(self) -> std::result::Result<T, BoxError> {
        (self.work)()
    }
}

impl<'a> Task<'a, ()> {
    /// Create a side-effecting action with no result.
    pub fn action<F>(f: F) -> Self
    where
        F: FnOnce() + 'a,
    {
        Self::from_fn(f)
    }
}

impl<T> fmt::Debug for Task<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").field("name", &self.name).finish_non_exhaustive()
    }
}
