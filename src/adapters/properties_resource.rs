// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bundled property resources with a filesystem override.

use crate::adapters::properties_file::{PropertiesFileAdapter, PropertiesParser};
use crate::adapters::resources::ResourceLocator;
use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::source::PRIORITY_FILES;
use crate::ports::{ConfigParser, ConfigSource};
use indexmap::IndexMap;

const SOURCE_NAME: &str = "properties-resource";

/// Configuration source that merges every resource found for a relative path.
///
/// Loading happens once, at construction:
///
/// 1. every resource the [`ResourceLocator`] finds for the path is parsed in search
///    order, later resources overriding earlier ones key by key
/// 2. if a regular file exists at the same path relative to the working directory
///    (or at the absolute path), it is parsed last and overrides the resources
///
/// # Examples
///
/// ```rust
/// use dyncfg::adapters::{PropertiesResourceAdapter, ResourceLocator};
/// use dyncfg::ports::ConfigSource;
///
/// let locator = ResourceLocator::new()
///     .with_embedded("defaults.properties", "timeout=30\nretries=3\n")
///     .with_embedded("defaults.properties", "retries=5\n");
///
/// let adapter = PropertiesResourceAdapter::load("defaults.properties", &locator).unwrap();
/// assert_eq!(adapter.get_str("timeout").unwrap().as_str(), "30");
/// assert_eq!(adapter.get_str("retries").unwrap().as_str(), "5");
/// ```
#[derive(Debug, Clone)]
pub struct PropertiesResourceAdapter {
    resource_path: String,
    values: IndexMap<String, String>,
    origins: Vec<String>,
}

impl PropertiesResourceAdapter {
    /// Loads every resource and the override file for `resource_path`.
    ///
    /// Finding nothing is not an error; the source is then empty.
    ///
    /// # Errors
    ///
    /// * `ConfigError::SourceError` if a found resource or the override file cannot
    ///   be read
    /// * `ConfigError::ParseError` if any of them is malformed
    pub fn load(resource_path: impl Into<String>, locator: &ResourceLocator) -> Result<Self> {
        let resource_path = resource_path.into();
        let parser = PropertiesParser::new();
        let mut values = IndexMap::new();
        let mut origins = Vec::new();

        for resource in locator.find_all(&resource_path) {
            let content = resource.read_to_string(SOURCE_NAME)?;
            let parsed = parser.parse(&content)?;
            tracing::debug!("Loaded {} properties from {}", parsed.len(), resource);
            values.extend(parsed);
            origins.push(resource.to_string());
        }

        let override_file = PropertiesFileAdapter::from_path(&resource_path)?;
        if override_file.is_loaded() {
            override_file.contribute_all(&mut values);
            origins.push(override_file.path().display().to_string());
        }

        if origins.is_empty() {
            tracing::debug!("No resource or file found for '{}'", resource_path);
        }

        Ok(Self {
            resource_path,
            values,
            origins,
        })
    }

    /// The relative path this source was constructed with.
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// Where the loaded values came from, in load order.
    pub fn origins(&self) -> &[String] {
        &self.origins
    }

    /// The merged entries.
    pub fn values(&self) -> &IndexMap<String, String> {
        &self.values
    }
}

impl PartialEq for PropertiesResourceAdapter {
    fn eq(&self, other: &Self) -> bool {
        self.resource_path == other.resource_path
    }
}

impl ConfigSource for PropertiesResourceAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
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
        into.extend(self.values.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}
