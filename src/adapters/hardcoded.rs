// SPDX-License-Identifier: MIT OR Apache-2.0

//! Literal key/value pairs supplied by the caller.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::source::PRIORITY_HARDCODED;
use crate::ports::ConfigSource;
use indexmap::IndexMap;

/// Configuration source holding hardcoded values.
///
/// # Priority
///
/// Hardcoded values have the highest priority, 4.
///
/// # Examples
///
/// ```rust
/// use dyncfg::adapters::HardcodedAdapter;
/// use dyncfg::ports::ConfigSource;
///
/// let adapter = HardcodedAdapter::from_pairs(["hardcodedKey", "Hardcoded Value"]).unwrap();
/// assert_eq!(adapter.get_str("hardcodedKey").unwrap().as_str(), "Hardcoded Value");
///
/// assert!(HardcodedAdapter::from_pairs(["dangling"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedAdapter {
    values: IndexMap<String, String>,
}

impl HardcodedAdapter {
    /// Builds the source from an alternating key, value, key, value sequence.
    ///
    /// A key given twice keeps its first position and takes the later value.
    ///
    /// # Errors
    ///
    /// `ConfigError::OddKeyValuePairs` if the sequence has an odd length.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let flat: Vec<String> = pairs.into_iter().map(Into::into).collect();
        if flat.len() % 2 != 0 {
            return Err(ConfigError::OddKeyValuePairs { len: flat.len() });
        }

        let mut values = IndexMap::with_capacity(flat.len() / 2);
        let mut iter = flat.into_iter();
        while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
            values.insert(key, value);
        }

        Ok(Self { values })
    }

    /// Builds the source from an existing map.
    pub fn from_map(values: IndexMap<String, String>) -> Self {
        Self { values }
    }

    /// The literal entries.
    pub fn values(&self) -> &IndexMap<String, String> {
        &self.values
    }
}

impl ConfigSource for HardcodedAdapter {
    fn name(&self) -> &str {
        "hardcoded"
    }

    fn priority(&self) -> u8 {
        PRIORITY_HARDCODED
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
    }

    fn contribute_all(&self, into: &mut IndexMap<String, String>) {
        into.extend(self.values.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let adapter = HardcodedAdapter::from_pairs(vec!["a", "1", "b", "2"]).unwrap();
        assert_eq!(adapter.values().len(), 2);
        assert_eq!(adapter.get_str("a").unwrap().as_str(), "1");
        assert_eq!(adapter.get_str("b").unwrap().as_str(), "2");
        assert!(adapter.get_str("c").is_none());
    }

    #[test]
    fn test_from_pairs_empty() {
        let adapter = HardcodedAdapter::from_pairs(Vec::<String>::new()).unwrap();
        assert!(adapter.values().is_empty());
    }

    #[test]
    fn test_from_pairs_odd_length() {
        let result = HardcodedAdapter::from_pairs(["a", "1", "b"]);
        assert!(matches!(
            result,
            Err(ConfigError::OddKeyValuePairs { len: 3 })
        ));
    }

    #[test]
    fn test_from_pairs_repeated_key() {
        let adapter = HardcodedAdapter::from_pairs(["a", "1", "b", "2", "a", "3"]).unwrap();
        assert_eq!(adapter.get_str("a").unwrap().as_str(), "3");
        let keys: Vec<&str> = adapter.values().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_equality_by_values() {
        let a = HardcodedAdapter::from_pairs(["x", "1", "y", "2"]).unwrap();
        let b = HardcodedAdapter::from_pairs(["y", "2", "x", "1"]).unwrap();
        let c = HardcodedAdapter::from_pairs(["x", "1"]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_name_and_priority() {
        let adapter = HardcodedAdapter::from_map(IndexMap::new());
        assert_eq!(adapter.name(), "hardcoded");
        assert_eq!(adapter.priority(), 4);
    }
}
