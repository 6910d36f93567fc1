//! Executor configuration.

use serde::{Deserialize, Serialize};

/// Configuration for an [`UnthreadedExecutor`](super::UnthreadedExecutor).
///
/// Missing fields fall back to their defaults when deserializing, so the
/// struct can be embedded in a larger application config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Name reported in log events.
    pub name: String,

    /// Emit a debug event when each task starts and finishes.
    pub trace_tasks: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            name: "unthreaded".to_string(),
            trace_tasks: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExecutorConfig::default();
        assert_eq!(config.name, "unthreaded");
        assert!(config.trace_tasks);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ExecutorConfig = serde_json::from_str(r#"{"name": "jobs"}"#).unwrap();
        assert_eq!(config.name, "jobs");
        assert!(config.trace_tasks);

        let config: ExecutorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ExecutorConfig::default());
    }

    #[test]
    fn test_config_serializes() {
        let config = ExecutorConfig {
            name: "quiet".to_string(),
            trace_tasks: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ExecutorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
