// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered dynamic configuration.
//!
//! This crate resolves configuration keys against an ordered set of sources:
//! bundled property resources, property files, environment variables, a runtime
//! system-property table and hardcoded literals. The first source that defines a key
//! answers for it.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, errors) and the
//!   `DynamicConfiguration` query trait
//! - **Ports**: Trait definitions (`ConfigSource`, `ConfigParser`, ambient accessors)
//! - **Adapters**: One implementation per source kind plus the `.properties` parser
//! - **Service**: The builder and the layered resolver
//!
//! # Precedence
//!
//! By default sources are grouped in tiers, highest first:
//!
//! 1. hardcoded values
//! 2. system properties
//! 3. environment variables
//! 4. property resources and files
//!
//! Within a tier the source added last wins. [`Precedence::CallOrder`](service::Precedence)
//! drops the tiers and orders sources purely by the order they were added.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dyncfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = LayeredConfiguration::builder()
//!     .properties_resource("application.properties")
//!     .environment("")
//!     .system_properties()
//!     .values(["feature.enabled", "true"])
//!     .build()?;
//!
//! let home = config.evaluate_to_string("user.home");
//! let enabled = config.evaluate_to_boolean("feature.enabled");
//! let workers = config.evaluate_to_int("workers").unwrap_or(4);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{
        EnvVarAdapter, HardcodedAdapter, MapEnvironment, MapProperties, PropertiesFileAdapter,
        PropertiesParser, PropertiesResourceAdapter, ResourceLocator, SystemPropertiesAdapter,
    };
    pub use crate::domain::{ConfigError, ConfigKey, ConfigValue, DynamicConfiguration, Result};
    pub use crate::ports::{ConfigParser, ConfigSource, EnvironmentAccess, PropertyAccess};
    pub use crate::service::{LayeredConfiguration, LayeredConfigurationBuilder, Precedence};
}
