// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration resolver and its builder.
//!
//! The builder records what sources to use; `build` loads them and orders them by
//! precedence. The resulting [`LayeredConfiguration`] is immutable.

use crate::adapters::{
    EnvVarAdapter, HardcodedAdapter, ProcessEnvironment, PropertiesFileAdapter,
    PropertiesResourceAdapter, ResourceLocator, RuntimeProperties, SystemPropertiesAdapter,
};
use crate::domain::{ConfigKey, ConfigValue, DynamicConfiguration, Result};
use crate::ports::{ConfigSource, EnvironmentAccess, PropertyAccess};
use crate::service::source::{Source, SourceDescriptor};
use indexmap::IndexMap;
use std::cmp::Reverse;
use std::path::PathBuf;
use std::sync::Arc;

/// How `build` orders sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Precedence {
    /// Hardcoded > system properties > environment > property files. Within a tier
    /// the source added last wins.
    #[default]
    Tiered,
    /// The source added last wins, whatever its kind.
    CallOrder,
}

/// A resolver over an ordered list of sources.
///
/// Sources are held highest precedence first. Point lookups walk the list front to
/// back; [`as_map`](DynamicConfiguration::as_map) applies it back to front.
///
/// # Examples
///
/// ```rust
/// use dyncfg::prelude::*;
///
/// # fn main() -> dyncfg::domain::Result<()> {
/// let config = LayeredConfiguration::builder()
///     .values(["server.port", "8080"])
///     .values(["server.port", "9090", "server.tls", "TRUE"])
///     .build()?;
///
/// assert_eq!(config.evaluate_to_int("server.port")?, 9090);
/// assert!(config.evaluate_to_boolean("server.tls"));
/// assert_eq!(config.evaluate_to_string("missing"), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredConfiguration {
    /// Sources in precedence order (highest first)
    sources: Vec<Source>,
}

impl LayeredConfiguration {
    /// Creates a new builder.
    pub fn builder() -> LayeredConfigurationBuilder {
        LayeredConfigurationBuilder::new()
    }

    /// The sources, highest precedence first.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Queries sources in precedence order and returns the first value found.
    fn query_sources(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.sources.iter().find_map(|source| {
            let value = source.get(key);
            if value.is_some() {
                tracing::trace!("Resolved '{}' from source '{}'", key, source.name());
            }
            value
        })
    }
}

impl DynamicConfiguration for LayeredConfiguration {
    fn evaluate(&self, key: &str) -> Option<ConfigValue> {
        self.query_sources(&ConfigKey::from(key))
    }

    fn as_map(&self) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        for source in self.sources.iter().rev() {
            source.contribute_all(&mut map);
        }
        map
    }
}

/// Builder for constructing a [`LayeredConfiguration`].
///
/// Each call records a source descriptor; nothing is read until
/// [`build`](Self::build). The builder can be copied, and the copy is fully
/// independent of the original.
///
/// Two builders are equal when they record the same descriptors under the same
/// [`Precedence`]. The resource locator and the ambient accessors do not take
/// part, just as built resolvers compare sources by configuration and not by
/// loaded data.
///
/// # Examples
///
/// ```rust,no_run
/// use dyncfg::prelude::*;
///
/// # fn main() -> dyncfg::domain::Result<()> {
/// let config = LayeredConfigurationBuilder::new()
///     .properties_resource("application.properties")
///     .environment("MYAPP_")
///     .system_properties()
///     .values(["app.name", "demo"])
///     .build()?;
///
/// let name = config.evaluate_to_string("app.name");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LayeredConfigurationBuilder {
    descriptors: Vec<SourceDescriptor>,
    precedence: Precedence,
    locator: ResourceLocator,
    env: Arc<dyn EnvironmentAccess>,
    properties: Arc<dyn PropertyAccess>,
}

impl LayeredConfigurationBuilder {
    /// Creates a new builder.
    ///
    /// Resources are looked up with [`ResourceLocator::from_env`]; the environment and
    /// system-property sources read the real process state.
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
            precedence: Precedence::default(),
            locator: ResourceLocator::from_env(),
            env: Arc::new(ProcessEnvironment),
            properties: Arc::new(RuntimeProperties),
        }
    }

    /// Adds bundled property resources found at `resource_path`, overridden by a file
    /// at the same path if one exists.
    pub fn properties_resource(mut self, resource_path: impl Into<String>) -> Self {
        self.descriptors
            .push(SourceDescriptor::PropertiesResource(resource_path.into()));
        self
    }

    /// Adds a single property file, used only if it exists.
    pub fn properties_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.descriptors
            .push(SourceDescriptor::PropertiesFile(path.into()));
        self
    }

    /// Adds the environment variables starting with `prefix`.
    pub fn environment(mut self, prefix: impl Into<String>) -> Self {
        self.descriptors
            .push(SourceDescriptor::Environment(prefix.into()));
        self
    }

    /// Adds the system-property table.
    pub fn system_properties(mut self) -> Self {
        self.descriptors.push(SourceDescriptor::SystemProperties);
        self
    }

    /// Adds hardcoded values given as key, value, key, value, ...
    ///
    /// An odd number of elements makes [`build`](Self::build) fail.
    pub fn values<I, S>(mut self, key_value_pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptors.push(SourceDescriptor::Values(
            key_value_pairs.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Sets how sources are ordered at build time.
    pub fn precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Replaces the resource locator.
    pub fn resource_locator(mut self, locator: ResourceLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Appends a search root to the resource locator.
    pub fn resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.locator = self.locator.with_root(root);
        self
    }

    /// Replaces the environment accessor used by environment sources.
    pub fn environment_access(mut self, env: Arc<dyn EnvironmentAccess>) -> Self {
        self.env = env;
        self
    }

    /// Replaces the property accessor used by system-property sources.
    pub fn property_access(mut self, properties: Arc<dyn PropertyAccess>) -> Self {
        self.properties = properties;
        self
    }

    /// The recorded descriptors, in call order.
    pub fn descriptors(&self) -> &[SourceDescriptor] {
        &self.descriptors
    }

    /// Returns an independent copy of this builder.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn materialize(&self, descriptor: &SourceDescriptor) -> Result<Source> {
        Ok(match descriptor {
            SourceDescriptor::PropertiesResource(path) => Source::PropertiesResource(
                PropertiesResourceAdapter::load(path.as_str(), &self.locator)?,
            ),
            SourceDescriptor::PropertiesFile(path) => {
                Source::PropertiesFile(PropertiesFileAdapter::from_path(path)?)
            }
            SourceDescriptor::Environment(prefix) => Source::Environment(
                EnvVarAdapter::with_access(prefix.as_str(), Arc::clone(&self.env)),
            ),
            SourceDescriptor::SystemProperties => Source::SystemProperties(
                SystemPropertiesAdapter::with_access(Arc::clone(&self.properties)),
            ),
            SourceDescriptor::Values(pairs) => {
                Source::Hardcoded(HardcodedAdapter::from_pairs(pairs.iter().cloned())?)
            }
        })
    }

    /// Loads every source and assembles the resolver.
    ///
    /// Sources are loaded in call order. Loading is all-or-nothing: the first failure
    /// is returned and no resolver is produced.
    ///
    /// # Errors
    ///
    /// * `ConfigError::SourceError` if a property resource or file cannot be read
    /// * `ConfigError::ParseError` if one is malformed
    /// * `ConfigError::OddKeyValuePairs` if a `values` call had an odd length
    pub fn build(&self) -> Result<LayeredConfiguration> {
        let mut sources = self
            .descriptors
            .iter()
            .map(|descriptor| self.materialize(descriptor))
            .collect::<Result<Vec<_>>>()?;

        // last added first; the sort below is stable so this order survives in a tier
        sources.reverse();
        if self.precedence == Precedence::Tiered {
            sources.sort_by_key(|source| Reverse(source.priority()));
        }

        tracing::debug!(
            "Built layered configuration with {} sources ({:?})",
            sources.len(),
            self.precedence
        );

        Ok(LayeredConfiguration { sources })
    }
}

impl Default for LayeredConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for LayeredConfigurationBuilder {
    fn eq(&self, other: &Self) -> bool {
        self.descriptors == other.descriptors && self.precedence == other.precedence
    }
}
