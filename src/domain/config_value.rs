// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with primitive conversions.
//!
//! Every source hands back values as strings. `ConfigValue` wraps those strings and
//! offers the small set of conversions the resolver exposes: base-10 integers,
//! floats, lenient booleans and anything implementing `FromStr`.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A resolved configuration value.
///
/// # Examples
///
/// ```
/// use dyncfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::new("42".to_string());
/// assert_eq!(value.as_str(), "42");
/// assert_eq!(value.as_i32("server.port").unwrap(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Lenient boolean interpretation.
    ///
    /// Returns `true` only when the value equals `"true"` ignoring ASCII case. Every
    /// other token is `false`; this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyncfg::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from("TRUE").is_true());
    /// assert!(!ConfigValue::from("yes").is_true());
    /// ```
    pub fn is_true(&self) -> bool {
        self.0.eq_ignore_ascii_case("true")
    }

    /// Base-10 `i32` with an optional leading sign.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyncfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("-17");
    /// assert_eq!(value.as_i32("retry.offset").unwrap(), -17);
    /// assert!(ConfigValue::from("0x10").as_i32("retry.offset").is_err());
    /// ```
    pub fn as_i32(&self, key: &str) -> Result<i32> {
        self.parse_as(key, "i32")
    }

    /// Base-10 `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.parse_as(key, "i64")
    }

    /// `f64` in Rust float syntax.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.parse_as(key, "f64")
    }

    /// Parses into any `FromStr` type; `key` only labels the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyncfg::domain::config_value::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let ip: IpAddr = ConfigValue::from("127.0.0.1").parse("server.bind").unwrap();
    /// assert!(ip.is_loopback());
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.parse_as(key, std::any::type_name::<T>())
    }

    fn parse_as<T>(&self, key: &str, target_type: &'static str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::conversion(key, target_type, e))
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_owned())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
