// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration lookup trait.
//!
//! `DynamicConfiguration` is the interface host applications program against. Point
//! lookups search sources in precedence order; `as_map` materializes every source
//! into one ordered map. Both views must agree on which value wins for a key.

use crate::domain::{ConfigError, ConfigValue, Result};
use indexmap::IndexMap;

/// Read access to a layered configuration.
///
/// Implementors provide [`evaluate`](Self::evaluate) and [`as_map`](Self::as_map);
/// the typed evaluators are derived from `evaluate`.
///
/// # Examples
///
/// ```rust
/// use dyncfg::domain::{ConfigValue, DynamicConfiguration};
/// use indexmap::IndexMap;
///
/// struct Fixed;
///
/// impl DynamicConfiguration for Fixed {
///     fn evaluate(&self, key: &str) -> Option<ConfigValue> {
///         (key == "server.port").then(|| ConfigValue::from("8080"))
///     }
///
///     fn as_map(&self) -> IndexMap<String, String> {
///         IndexMap::from([("server.port".to_string(), "8080".to_string())])
///     }
/// }
///
/// let config = Fixed;
/// assert_eq!(config.evaluate_to_int("server.port").unwrap(), 8080);
/// assert!(!config.evaluate_to_boolean("server.tls"));
/// ```
pub trait DynamicConfiguration {
    /// Returns the highest-precedence value for `key`, or `None` if no source has one.
    fn evaluate(&self, key: &str) -> Option<ConfigValue>;

    /// Materializes every source into one map.
    ///
    /// Sources are applied lowest precedence first, so for a key defined in several
    /// sources the entry holds the same value [`evaluate`](Self::evaluate) returns.
    /// Keys appear in the order they were first inserted during that merge.
    fn as_map(&self) -> IndexMap<String, String>;

    /// Returns the resolved value for `key` as a string.
    fn evaluate_to_string(&self, key: &str) -> Option<String> {
        self.evaluate(key).map(ConfigValue::into_string)
    }

    /// Resolves `key` and parses it as a base-10 `i32`.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::ConfigKeyNotFound`] if no source has a value
    /// * [`ConfigError::TypeConversionError`] if the value is not an integer literal
    fn evaluate_to_int(&self, key: &str) -> Result<i32> {
        self.evaluate(key)
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.to_string(),
            })?
            .as_i32(key)
    }

    /// Resolves `key` as a lenient boolean.
    ///
    /// Only a case-insensitive `"true"` yields `true`; missing values and every other
    /// token yield `false`.
    fn evaluate_to_boolean(&self, key: &str) -> bool {
        self.evaluate(key).is_some_and(|value| value.is_true())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MapConfiguration(IndexMap<String, String>);

    impl DynamicConfiguration for MapConfiguration {
        fn evaluate(&self, key: &str) -> Option<ConfigValue> {
            self.0.get(key).map(|v| ConfigValue::from(v.as_str()))
        }

        fn as_map(&self) -> IndexMap<String, String> {
            self.0.clone()
        }
    }

    fn config() -> MapConfiguration {
        MapConfiguration(IndexMap::from([
            ("port".to_string(), "8080".to_string()),
            ("name".to_string(), "svc".to_string()),
            ("enabled".to_string(), "True".to_string()),
            ("disabled".to_string(), "yes".to_string()),
        ]))
    }

    #[test]
    fn test_evaluate_to_string() {
        assert_eq!(config().evaluate_to_string("name").as_deref(), Some("svc"));
        assert_eq!(config().evaluate_to_string("missing"), None);
    }

    #[test]
    fn test_evaluate_to_int() {
        assert_eq!(config().evaluate_to_int("port").unwrap(), 8080);
    }

    #[test]
    fn test_evaluate_to_int_invalid() {
        assert!(matches!(
            config().evaluate_to_int("name"),
            Err(ConfigError::TypeConversionError { .. })
        ));
    }

    #[test]
    fn test_evaluate_to_int_missing() {
        assert!(matches!(
            config().evaluate_to_int("missing"),
            Err(ConfigError::ConfigKeyNotFound { .. })
        ));
    }

    #[test]
    fn test_evaluate_to_boolean() {
        assert!(config().evaluate_to_boolean("enabled"));
        assert!(!config().evaluate_to_boolean("disabled"));
        assert!(!config().evaluate_to_boolean("missing"));
    }
}
