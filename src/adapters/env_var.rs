// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.
//!
//! This module provides the process-environment accessor, a map-backed accessor for
//! tests, and the adapter that exposes environment variables as a configuration
//! source.

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::source::PRIORITY_ENVIRONMENT;
use crate::ports::{ConfigSource, EnvironmentAccess};
use indexmap::IndexMap;
use std::env;
use std::sync::Arc;

/// Accessor for the real process environment.
///
/// Variables whose name or value is not valid UTF-8 are invisible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentAccess for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        env::var(name).ok()
    }

    fn vars(&self) -> Vec<(String, String)> {
        env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

/// Environment accessor backed by a fixed map.
///
/// # Examples
///
/// ```rust
/// use dyncfg::adapters::MapEnvironment;
/// use dyncfg::ports::EnvironmentAccess;
///
/// let env = MapEnvironment::from_pairs([("APP_PORT", "8080")]);
/// assert_eq!(env.var("APP_PORT").as_deref(), Some("8080"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: IndexMap<String, String>,
}

impl MapEnvironment {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Adds or replaces a variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvironmentAccess for MapEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Configuration source adapter for environment variables.
///
/// A lookup for `key` reads the variable `prefix + key` at call time, so changes to
/// the environment after construction are visible. Materialization snapshots the
/// environment once, keeps the variables whose name starts with the prefix and
/// strips it. An empty prefix exposes the whole environment unchanged.
///
/// # Priority
///
/// Environment variables have a priority of 2: they override property files and are
/// overridden by system properties and hardcoded values.
///
/// # Examples
///
/// ```rust
/// use dyncfg::adapters::{EnvVarAdapter, MapEnvironment};
/// use dyncfg::ports::ConfigSource;
/// use std::sync::Arc;
///
/// let env = MapEnvironment::from_pairs([("PATH", "/usr/bin")]);
/// let adapter = EnvVarAdapter::with_access("PAT", Arc::new(env));
/// assert_eq!(adapter.get_str("H").unwrap().as_str(), "/usr/bin");
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarAdapter {
    prefix: String,
    env: Arc<dyn EnvironmentAccess>,
}

impl EnvVarAdapter {
    /// Creates an adapter over the process environment.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_access(prefix, Arc::new(ProcessEnvironment))
    }

    /// Creates an adapter over a custom environment accessor.
    pub fn with_access(prefix: impl Into<String>, env: Arc<dyn EnvironmentAccess>) -> Self {
        Self {
            prefix: prefix.into(),
            env,
        }
    }

    /// The variable-name prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl PartialEq for EnvVarAdapter {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn priority(&self) -> u8 {
        PRIORITY_ENVIRONMENT
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        let name = key.prefixed(&self.prefix);
        self.env.var(name.as_str()).map(ConfigValue::from)
    }

    fn contribute_all(&self, into: &mut IndexMap<String, String>) {
        let mut count = 0usize;
        for (name, value) in self.env.vars() {
            if let Some(stripped) = name.strip_prefix(self.prefix.as_str()) {
                into.insert(stripped.to_string(), value);
                count += 1;
            }
        }
        tracing::trace!(
            "Contributed {} environment variables (prefix={:?})",
            count,
            self.prefix
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to set and clean up environment variables
    struct EnvGuard {
        keys: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { keys: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.keys.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                env::remove_var(key);
            }
        }
    }

    fn adapter(prefix: &str) -> EnvVarAdapter {
        let env = MapEnvironment::new()
            .with_var("MYAPP_DATABASE_HOST", "localhost")
            .with_var("MYAPP_PORT", "5432")
            .with_var("OTHER_VAR", "should_not_appear");
        EnvVarAdapter::with_access(prefix, Arc::new(env))
    }

    #[test]
    fn test_env_adapter_name_and_priority() {
        let adapter = EnvVarAdapter::new("");
        assert_eq!(adapter.name(), "env");
        assert_eq!(adapter.priority(), 2);
    }

    #[test]
    fn test_env_adapter_get_with_prefix() {
        let adapter = adapter("MYAPP_");
        assert_eq!(
            adapter.get_str("DATABASE_HOST").unwrap().as_str(),
            "localhost"
        );
        assert!(adapter.get_str("OTHER_VAR").is_none());
    }

    #[test]
    fn test_env_adapter_get_without_prefix() {
        let adapter = adapter("");
        assert_eq!(adapter.get_str("OTHER_VAR").unwrap().as_str(), "should_not_appear");
        assert!(adapter.get_str("DATABASE_HOST").is_none());
    }

    #[test]
    fn test_env_adapter_contribute_all_strips_prefix() {
        let mut map = IndexMap::new();
        adapter("MYAPP_").contribute_all(&mut map);

        assert_eq!(map.len(), 2);
        assert_eq!(map["DATABASE_HOST"], "localhost");
        assert_eq!(map["PORT"], "5432");
    }

    #[test]
    fn test_env_adapter_contribute_all_empty_prefix_is_everything() {
        let mut map = IndexMap::new();
        adapter("").contribute_all(&mut map);

        assert_eq!(map.len(), 3);
        assert_eq!(map["MYAPP_PORT"], "5432");
    }

    #[test]
    fn test_env_adapter_equality_by_prefix() {
        assert_eq!(adapter("A_"), EnvVarAdapter::new("A_"));
        assert_ne!(adapter("A_"), adapter("B_"));
    }

    #[test]
    fn test_process_environment_lookup_is_live() {
        let adapter = EnvVarAdapter::new("DYNCFG_LIVE_TEST_");
        assert!(adapter.get_str("VALUE").is_none());

        let mut guard = EnvGuard::new();
        guard.set("DYNCFG_LIVE_TEST_VALUE", "now_set");

        assert_eq!(adapter.get_str("VALUE").unwrap().as_str(), "now_set");
    }

    #[test]
    fn test_process_environment_rejects_invalid_names() {
        assert!(ProcessEnvironment.var("").is_none());
        assert!(ProcessEnvironment.var("A=B").is_none());
        assert!(ProcessEnvironment.var("A\0B").is_none());
    }
}
