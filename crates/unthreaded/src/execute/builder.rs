use std::sync::Arc;

use super::config::ExecutorConfig;
use super::executor::UnthreadedExecutor;
use super::observer::TaskObserver;

/// Builder for configuring and creating an [`UnthreadedExecutor`].
///
/// # Examples
///
/// ```
/// use unthreaded::UnthreadedExecutor;
///
/// let executor = UnthreadedExecutor::builder()
///     .name("test-jobs")
///     .trace_tasks(false)
///     .build();
/// assert_eq!(executor.config().name, "test-jobs");
/// ```
#[derive(Default)]
pub struct ExecutorBuilder {
    config: ExecutorConfig,
    observer: Option<Arc<dyn TaskObserver>>,
}

impl ExecutorBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the name reported in log events.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Enables or disables per-task debug events.
    pub fn trace_tasks(mut self, enabled: bool) -> Self {
        self.config.trace_tasks = enabled;
        self
    }

    /// Registers an observer notified around every task.
    pub fn observer(mut self, observer: impl TaskObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Builds the executor with the configured options.
    pub fn build(self) -> UnthreadedExecutor {
        UnthreadedExecutor::from_parts(self.config, self.observer)
    }
}
