// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the vocabulary shared by every other layer: keys, values,
//! errors and the lookup trait that resolvers implement.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod service;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use service::DynamicConfiguration;
