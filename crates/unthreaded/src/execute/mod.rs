//! Synchronous execution engine.
//!
//! # Architecture
//!
//! ```text
//! caller thread
//!     │
//!     └── UnthreadedExecutor (reentrant lock held for the whole call)
//!             │
//!             ├── execute / submit / submit_with ──► run_task ──► ResultHandle
//!             │
//!             ├── invoke_all ──► run_all ──► run_task × N (stops at first failure)
//!             │
//!             └── invoke_any ──► run_any ──► run_task × N (keeps last success)
//! ```
//!
//! # Module Structure
//!
//! - `batch` - invoke_all / invoke_any aggregation
//! - `builder` - ExecutorBuilder
//! - `config` - ExecutorConfig
//! - `executor` - UnthreadedExecutor, lifecycle and single-task execution
//! - `observer` - TaskObserver progress hook

mod batch;
mod builder;
mod config;
mod executor;
mod observer;

pub use builder::ExecutorBuilder;
pub use config::ExecutorConfig;
pub use executor::UnthreadedExecutor;
pub use observer::TaskObserver;
