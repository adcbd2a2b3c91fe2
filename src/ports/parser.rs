// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! A `ConfigParser` turns the text of a configuration file into an ordered flat
//! key/value map. The property-file sources parse with `PropertiesParser`.

use crate::domain::Result;
use indexmap::IndexMap;

/// A trait for parsing configuration text.
///
/// Parsers return keys in the order they appear in the text. When a key occurs more
/// than once, the later value wins and the key keeps its first position.
///
/// # Examples
///
/// ```rust
/// use dyncfg::ports::ConfigParser;
/// use dyncfg::domain::Result;
/// use indexmap::IndexMap;
///
/// struct LineParser;
///
/// impl ConfigParser for LineParser {
///     fn parse(&self, content: &str) -> Result<IndexMap<String, String>> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.to_string(), v.to_string()))
///             .collect())
///     }
/// }
///
/// let parsed = LineParser.parse("a=1\nb=2").unwrap();
/// assert_eq!(parsed.get("b"), Some(&"2".to_string()));
/// ```
pub trait ConfigParser {
    /// Parses configuration content into an ordered key/value map.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` when the content is malformed.
    fn parse(&self, content: &str) -> Result<IndexMap<String, String>>;
}
