// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Every fallible operation in the crate returns [`ConfigError`]. Construction of a
//! resolver is all-or-nothing, so the first error encountered while loading a source
//! is the one reported.

use std::error::Error as StdError;
use std::fmt::Display;
use thiserror::Error;

type BoxedCause = Box<dyn StdError + Send + Sync>;

/// Everything that can go wrong while loading sources or converting values.
///
/// # Examples
///
/// ```
/// use dyncfg::domain::errors::ConfigError;
///
/// let err = ConfigError::OddKeyValuePairs { len: 3 };
/// assert_eq!(
///     err.to_string(),
///     "Hardcoded values must be key/value pairs, got 3 elements"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A typed lookup found no value in any source.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// Key that was looked up
        key: String,
    },

    /// A value could not be converted to the requested type.
    #[error("Cannot convert value of '{key}' to {target_type}: {source}")]
    TypeConversionError {
        /// Key whose value failed to convert
        key: String,
        /// Name of the requested type
        target_type: &'static str,
        /// Parse failure reported by the target type
        source: BoxedCause,
    },

    /// A property resource or file exists but could not be read.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// Name of the source being loaded
        source_name: String,
        /// What went wrong
        message: String,
        /// Underlying failure, when there is one
        #[source]
        source: Option<BoxedCause>,
    },

    /// Property text is malformed.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// What went wrong
        message: String,
        /// Underlying failure, when there is one
        #[source]
        source: Option<BoxedCause>,
    },

    /// A literal key/value sequence had an odd number of elements.
    #[error("Hardcoded values must be key/value pairs, got {len} elements")]
    OddKeyValuePairs {
        /// Number of elements supplied
        len: usize,
    },
}

impl ConfigError {
    /// Wraps a `FromStr` failure for `key`.
    pub fn conversion<E>(key: &str, target_type: &'static str, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ConfigError::TypeConversionError {
            key: key.to_string(),
            target_type,
            source: Box::new(err),
        }
    }

    /// Wraps an I/O failure of `source_name` while reading `what`.
    pub fn from_io_error(source_name: &str, what: impl Display, err: std::io::Error) -> Self {
        ConfigError::SourceError {
            source_name: source_name.to_string(),
            message: format!("Failed to read {}: {}", what, err),
            source: Some(Box::new(err)),
        }
    }

    /// A parse failure with no underlying cause.
    pub fn parse(message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            message: message.into(),
            source: None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
