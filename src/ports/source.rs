// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! `ConfigSource` is the port every origin of key/value data implements: property
//! resources, override files, the process environment, the runtime property table
//! and hardcoded literals.

use crate::domain::{ConfigKey, ConfigValue};
use indexmap::IndexMap;

/// Tier of property-file sources (bundled resources and override files).
pub const PRIORITY_FILES: u8 = 1;
/// Tier of the process environment.
pub const PRIORITY_ENVIRONMENT: u8 = 2;
/// Tier of the runtime system-property table.
pub const PRIORITY_SYSTEM_PROPERTIES: u8 = 3;
/// Tier of hardcoded literal values.
pub const PRIORITY_HARDCODED: u8 = 4;

/// A trait for configuration sources.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a built resolver can be shared across
/// threads for concurrent reads.
///
/// # Priority
///
/// Each source reports the tier it belongs to. Higher values take precedence:
///
/// - **4 (highest)**: hardcoded values
/// - **3**: system properties
/// - **2**: environment variables
/// - **1 (lowest)**: property resources and override files
///
/// # Examples
///
/// ```rust
/// use dyncfg::ports::ConfigSource;
/// use dyncfg::domain::{ConfigKey, ConfigValue};
/// use indexmap::IndexMap;
///
/// struct Single;
///
/// impl ConfigSource for Single {
///     fn name(&self) -> &str {
///         "single"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
///         (key.as_str() == "app.name").then(|| ConfigValue::from("MyApp"))
///     }
///
///     fn contribute_all(&self, into: &mut IndexMap<String, String>) {
///         into.insert("app.name".to_string(), "MyApp".to_string());
///     }
/// }
///
/// let source = Single;
/// assert_eq!(source.get_str("app.name").unwrap().as_str(), "MyApp");
/// ```
pub trait ConfigSource: Send + Sync {
    /// Short identifier used in logs and error messages, e.g. `"env"`.
    fn name(&self) -> &str;

    /// The precedence tier of this source. Higher values win.
    fn priority(&self) -> u8;

    /// Returns the value for `key`, or `None` if this source has none.
    ///
    /// Lookups never fail; a missing key is simply `None`.
    fn get(&self, key: &ConfigKey) -> Option<ConfigValue>;

    /// Inserts every key/value pair of this source into `into`.
    ///
    /// Existing entries for the same key are overwritten, so applying sources from
    /// lowest to highest precedence leaves the highest-precedence value in place.
    fn contribute_all(&self, into: &mut IndexMap<String, String>);

    /// Retrieves a value by string key.
    ///
    /// Equivalent to `get(&ConfigKey::from(key))`.
    fn get_str(&self, key: &str) -> Option<ConfigValue> {
        self.get(&ConfigKey::from(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestSource {
        values: IndexMap<String, String>,
    }

    impl ConfigSource for TestSource {
        fn name(&self) -> &str {
            "test-source"
        }

        fn priority(&self) -> u8 {
            PRIORITY_FILES
        }

        fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
            self.values
                .get(key.as_str())
                .map(|v| ConfigValue::from(v.as_str()))
        }

        fn contribute_all(&self, into: &mut IndexMap<String, String>) {
            into.extend(self.values.clone());
        }
    }

    fn source() -> TestSource {
        TestSource {
            values: IndexMap::from([
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ]),
        }
    }

    #[test]
    fn test_get_str_delegates_to_get() {
        assert_eq!(source().get_str("a").unwrap().as_str(), "1");
        assert!(source().get_str("missing").is_none());
    }

    #[test]
    fn test_contribute_all_overwrites_existing() {
        let mut map = IndexMap::from([
            ("b".to_string(), "old".to_string()),
            ("z".to_string(), "kept".to_string()),
        ]);
        source().contribute_all(&mut map);

        assert_eq!(map.get("b").map(String::as_str), Some("2"));
        assert_eq!(map.get("z").map(String::as_str), Some("kept"));
        // "b" keeps its original slot, "a" is appended
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "z", "a"]);
    }

    #[test]
    fn test_priority_tiers_are_ordered() {
        assert!(PRIORITY_HARDCODED > PRIORITY_SYSTEM_PROPERTIES);
        assert!(PRIORITY_SYSTEM_PROPERTIES > PRIORITY_ENVIRONMENT);
        assert!(PRIORITY_ENVIRONMENT > PRIORITY_FILES);
    }

    #[test]
    fn test_config_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn ConfigSource>>();
    }
}
