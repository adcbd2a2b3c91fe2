// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed set of source variants a resolver is assembled from.

use crate::adapters::{
    EnvVarAdapter, HardcodedAdapter, PropertiesFileAdapter, PropertiesResourceAdapter,
    SystemPropertiesAdapter,
};
use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ConfigSource;
use indexmap::IndexMap;
use std::path::PathBuf;

/// One materialized source of a [`LayeredConfiguration`](super::LayeredConfiguration).
///
/// Equality compares configuration, not loaded data: resource path, file path,
/// environment prefix or literal map. All system-property sources are equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Bundled property resources plus their filesystem override.
    PropertiesResource(PropertiesResourceAdapter),
    /// A single filesystem property file.
    PropertiesFile(PropertiesFileAdapter),
    /// Environment variables under a prefix.
    Environment(EnvVarAdapter),
    /// The system-property table.
    SystemProperties(SystemPropertiesAdapter),
    /// Hardcoded literals.
    Hardcoded(HardcodedAdapter),
}

impl Source {
    fn inner(&self) -> &dyn ConfigSource {
        match self {
            Source::PropertiesResource(s) => s,
            Source::PropertiesFile(s) => s,
            Source::Environment(s) => s,
            Source::SystemProperties(s) => s,
            Source::Hardcoded(s) => s,
        }
    }
}

impl ConfigSource for Source {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn priority(&self) -> u8 {
        self.inner().priority()
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.inner().get(key)
    }

    fn contribute_all(&self, into: &mut IndexMap<String, String>) {
        self.inner().contribute_all(into)
    }
}

/// A source as recorded by the builder, before anything is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDescriptor {
    /// Relative path of bundled property resources.
    PropertiesResource(String),
    /// Filesystem path of a property file.
    PropertiesFile(PathBuf),
    /// Environment variable prefix.
    Environment(String),
    /// The system-property table.
    SystemProperties,
    /// Alternating key, value, ... literals, validated at build time.
    Values(Vec<String>),
}
