//! Executor service that runs every task on the calling thread.
//!
//! `unthreaded` implements the usual task-submission contract (execute,
//! submit, invoke-all, invoke-any, shutdown) without any threads, queues or
//! deferred scheduling. Each unit of work runs to completion before the call
//! that submitted it returns, which makes code written against an executor
//! abstraction deterministic to test.
//!
//! This crate provides:
//! - [`ExecutorService`] - the capability interface
//! - [`UnthreadedExecutor`] - the synchronous implementation
//! - [`Task`] - units of work, which may borrow from the caller
//! - [`ResultHandle`] - an already-completed future
//!
//! Operations that only make sense with real asynchrony (`shutdown_now`, the
//! timed batch variants) return [`Error::Unsupported`].
//!
//! # Quick Start
//!
//! ```
//! use unthreaded::{ExecutorService, Task, UnthreadedExecutor};
//!
//! let executor = UnthreadedExecutor::new();
//!
//! let handles = executor
//!     .invoke_all(vec![Task::from_fn(|| 1), Task::from_fn(|| 2)])
//!     .unwrap();
//! assert_eq!(*handles[1].get(), 2);
//!
//! let any = executor
//!     .invoke_any(vec![Task::new(|| Err::<i32, _>("down")), Task::from_fn(|| 5)])
//!     .unwrap();
//! assert_eq!(any, 5);
//!
//! executor.shutdown();
//! assert!(executor.is_terminated());
//! ```

pub mod error;
pub mod execute;
pub mod handle;
pub mod service;
pub mod task;

pub use error::{BoxError, Error, Result};
pub use execute::{ExecutorBuilder, ExecutorConfig, TaskObserver, UnthreadedExecutor};
pub use handle::ResultHandle;
pub use service::ExecutorService;
pub use task::{Task, TaskId};
