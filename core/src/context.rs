use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::time;

/// Context provides the ambient capabilities for request signing.
///
/// Components never reach for the process environment or the system clock
/// directly; they go through the context so that both can be replaced in
/// tests or in restricted environments.
///
/// ## Example
///
/// ```
/// use reqstamp_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// ```
#[derive(Clone)]
pub struct Context {
    env: Arc<dyn Env>,
    clock: Arc<dyn Clock>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("env", &self.env)
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context.
    ///
    /// The environment defaults to a no-op implementation that resolves no
    /// variables; the clock defaults to the system clock. Use the `with_*`
    /// methods to replace either.
    pub fn new() -> Self {
        Self {
            env: Arc::new(NoopEnv),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the clock implementation.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Current Unix time in whole seconds.
    #[inline]
    pub fn now_unix(&self) -> i64 {
        self.clock.now_unix()
    }
}

/// Env abstracts access to process environment variables.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the OS context.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// NoopEnv resolves no variables.
///
/// This is used when no environment is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }
}

/// StaticEnv provides a fixed set of environment variables.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

/// Clock abstracts the wall-clock time source used for signing timestamps
/// and freshness checks.
pub trait Clock: Debug + Send + Sync + 'static {
    /// Current Unix time in whole seconds.
    fn now_unix(&self) -> i64;
}

/// SystemClock reads the operating system clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        time::now().timestamp()
    }
}

/// StaticClock always reports the same instant.
///
/// This is useful for testing time-window behavior deterministically.
#[derive(Debug, Copy, Clone)]
pub struct StaticClock(
    /// The Unix time, in seconds, to report.
    pub i64,
);

impl Clock for StaticClock {
    fn now_unix(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_env_resolves_nothing() {
        let ctx = Context::new();
        assert_eq!(ctx.env_var("PATH"), None);
    }

    #[test]
    fn test_static_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([("REQSTAMP_KEY_ID".to_string(), "key-1".to_string())]),
        });

        assert_eq!(ctx.env_var("REQSTAMP_KEY_ID").as_deref(), Some("key-1"));
        assert_eq!(ctx.env_var("REQSTAMP_KEY_VALUE"), None);
    }

    #[test]
    fn test_static_clock() {
        let ctx = Context::new().with_clock(StaticClock(1_762_935_805));
        assert_eq!(ctx.now_unix(), 1_762_935_805);
    }
}
