// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime system properties.
//!
//! The process keeps one global property table. It is seeded on first use with
//! facts about the running process:
//!
//! | Key | Value |
//! |---|---|
//! | `user.dir` | current working directory |
//! | `user.home` | home directory of the current user |
//! | `user.name` | `USER` or `USERNAME` from the environment |
//! | `os.name`, `os.arch`, `os.family` | `std::env::consts` |
//! | `file.separator`, `path.separator`, `line.separator` | platform separators |
//! | `tmp.dir` | `std::env::temp_dir()` |
//! | `exe.path` | path of the running executable |
//!
//! Entries that cannot be determined are left out. Applications may add or change
//! properties with [`set_property`] or from `-Dkey=value` arguments with
//! [`load_args`].

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::source::PRIORITY_SYSTEM_PROPERTIES;
use crate::ports::{ConfigSource, PropertyAccess};
use directories::BaseDirs;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::env;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

static SYSTEM_PROPERTIES: Lazy<RwLock<IndexMap<String, String>>> =
    Lazy::new(|| RwLock::new(default_properties()));

fn default_properties() -> IndexMap<String, String> {
    let mut props = IndexMap::new();

    if let Ok(dir) = env::current_dir() {
        props.insert("user.dir".to_string(), dir.display().to_string());
    }
    if let Some(dirs) = BaseDirs::new() {
        props.insert(
            "user.home".to_string(),
            dirs.home_dir().display().to_string(),
        );
    }
    if let Ok(user) = env::var("USER").or_else(|_| env::var("USERNAME")) {
        props.insert("user.name".to_string(), user);
    }

    props.insert("os.name".to_string(), env::consts::OS.to_string());
    props.insert("os.arch".to_string(), env::consts::ARCH.to_string());
    props.insert("os.family".to_string(), env::consts::FAMILY.to_string());
    props.insert(
        "file.separator".to_string(),
        std::path::MAIN_SEPARATOR.to_string(),
    );
    props.insert(
        "path.separator".to_string(),
        if cfg!(windows) { ";" } else { ":" }.to_string(),
    );
    props.insert(
        "line.separator".to_string(),
        if cfg!(windows) { "\r\n" } else { "\n" }.to_string(),
    );
    props.insert("tmp.dir".to_string(), env::temp_dir().display().to_string());
    if let Ok(exe) = env::current_exe() {
        props.insert("exe.path".to_string(), exe.display().to_string());
    }

    tracing::debug!("Initialized {} system properties", props.len());
    props
}

fn read_table() -> RwLockReadGuard<'static, IndexMap<String, String>> {
    SYSTEM_PROPERTIES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

fn write_table() -> RwLockWriteGuard<'static, IndexMap<String, String>> {
    SYSTEM_PROPERTIES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Returns the system property `key`.
pub fn property(key: &str) -> Option<String> {
    read_table().get(key).cloned()
}

/// Sets a system property, returning the previous value.
///
/// # Examples
///
/// ```rust
/// use dyncfg::adapters::system_properties;
///
/// system_properties::set_property("app.mode", "batch");
/// assert_eq!(system_properties::property("app.mode").as_deref(), Some("batch"));
/// ```
pub fn set_property(key: impl Into<String>, value: impl Into<String>) -> Option<String> {
    write_table().insert(key.into(), value.into())
}

/// Removes a system property, returning its value.
pub fn remove_property(key: &str) -> Option<String> {
    write_table().shift_remove(key)
}

/// Returns a copy of the whole table in insertion order.
pub fn snapshot() -> IndexMap<String, String> {
    read_table().clone()
}

/// Parses a `-Dkey=value` argument.
///
/// `-Dkey` without `=` sets `key` to the empty string. Anything not starting with
/// `-D`, or with an empty key, is not a property argument.
pub fn parse_property_arg(arg: &str) -> Option<(String, String)> {
    let definition = arg.strip_prefix("-D")?;
    let (key, value) = definition.split_once('=').unwrap_or((definition, ""));
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

/// Applies every `-Dkey=value` argument in `args` to the table.
///
/// Other arguments are ignored. Returns the number of properties set.
///
/// # Examples
///
/// ```rust
/// use dyncfg::adapters::system_properties;
///
/// let applied = system_properties::load_args(["run", "-Dloadargs.doc=1"]);
/// assert_eq!(applied, 1);
/// assert_eq!(system_properties::property("loadargs.doc").as_deref(), Some("1"));
/// ```
pub fn load_args<I, S>(args: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let definitions: Vec<(String, String)> = args
        .into_iter()
        .filter_map(|arg| parse_property_arg(arg.as_ref()))
        .collect();

    let count = definitions.len();
    write_table().extend(definitions);
    tracing::debug!("Applied {} system properties from arguments", count);
    count
}

/// Accessor for the global system-property table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeProperties;

impl PropertyAccess for RuntimeProperties {
    fn property(&self, key: &str) -> Option<String> {
        property(key)
    }

    fn properties(&self) -> Vec<(String, String)> {
        read_table()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Property accessor backed by a fixed map.
#[derive(Debug, Clone, Default)]
pub struct MapProperties {
    properties: IndexMap<String, String>,
}

impl MapProperties {
    /// Creates an empty property table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a property table from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            properties: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PropertyAccess for MapProperties {
    fn property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }

    fn properties(&self) -> Vec<(String, String)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Configuration source over a system-property table.
///
/// Lookups query the table at call time, without any key transformation.
///
/// # Priority
///
/// System properties have a priority of 3: only hardcoded values override them.
///
/// # Examples
///
/// ```rust
/// use dyncfg::adapters::SystemPropertiesAdapter;
/// use dyncfg::ports::ConfigSource;
///
/// let adapter = SystemPropertiesAdapter::new();
/// assert!(adapter.get_str("os.name").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct SystemPropertiesAdapter {
    access: Arc<dyn PropertyAccess>,
}

impl SystemPropertiesAdapter {
    /// Creates an adapter over the global property table.
    pub fn new() -> Self {
        Self::with_access(Arc::new(RuntimeProperties))
    }

    /// Creates an adapter over a custom property accessor.
    pub fn with_access(access: Arc<dyn PropertyAccess>) -> Self {
        Self { access }
    }
}

impl Default for SystemPropertiesAdapter {
    fn default() -> Self {
        Self::new()
    }
}

// all instances expose "the" system properties
impl PartialEq for SystemPropertiesAdapter {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl ConfigSource for SystemPropertiesAdapter {
    fn name(&self) -> &str {
        "system-properties"
    }

    fn priority(&self) -> u8 {
        PRIORITY_SYSTEM_PROPERTIES
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.access.property(key.as_str()).map(ConfigValue::from)
    }

    fn contribute_all(&self, into: &mut IndexMap<String, String>) {
        into.extend(self.access.properties());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_contain_platform_facts() {
        assert_eq!(property("os.name").as_deref(), Some(env::consts::OS));
        assert_eq!(property("os.arch").as_deref(), Some(env::consts::ARCH));
        assert_eq!(
            property("file.separator"),
            Some(std::path::MAIN_SEPARATOR.to_string())
        );
        assert!(property("tmp.dir").is_some());
    }

    #[test]
    fn test_set_and_remove_property() {
        assert_eq!(set_property("sysprop.test.set", "one"), None);
        assert_eq!(
            set_property("sysprop.test.set", "two").as_deref(),
            Some("one")
        );
        assert_eq!(property("sysprop.test.set").as_deref(), Some("two"));
        assert_eq!(remove_property("sysprop.test.set").as_deref(), Some("two"));
        assert_eq!(property("sysprop.test.set"), None);
    }

    #[test]
    fn test_snapshot_contains_set_property() {
        set_property("sysprop.test.snapshot", "yes");
        assert_eq!(
            snapshot().get("sysprop.test.snapshot").map(String::as_str),
            Some("yes")
        );
    }

    #[test]
    fn test_parse_property_arg() {
        assert_eq!(
            parse_property_arg("-Dkey=value"),
            Some(("key".to_string(), "value".to_string()))
        );
        assert_eq!(
            parse_property_arg("-Durl=a=b"),
            Some(("url".to_string(), "a=b".to_string()))
        );
        assert_eq!(
            parse_property_arg("-Dflag"),
            Some(("flag".to_string(), String::new()))
        );
        assert_eq!(parse_property_arg("-D=value"), None);
        assert_eq!(parse_property_arg("--define"), None);
        assert_eq!(parse_property_arg("key=value"), None);
    }

    #[test]
    fn test_load_args() {
        let applied = load_args(["program", "-Dsysprop.test.args=42", "--verbose"]);
        assert_eq!(applied, 1);
        assert_eq!(property("sysprop.test.args").as_deref(), Some("42"));
    }

    #[test]
    fn test_adapter_over_runtime_table_is_live() {
        let adapter = SystemPropertiesAdapter::new();
        assert!(adapter.get_str("sysprop.test.live").is_none());

        set_property("sysprop.test.live", "present");
        assert_eq!(
            adapter.get_str("sysprop.test.live").unwrap().as_str(),
            "present"
        );
    }

    #[test]
    fn test_adapter_over_map() {
        let props = MapProperties::from_pairs([("user.dir", "/work"), ("a", "1")]);
        let adapter = SystemPropertiesAdapter::with_access(Arc::new(props));

        assert_eq!(adapter.get_str("user.dir").unwrap().as_str(), "/work");
        assert_eq!(adapter.name(), "system-properties");
        assert_eq!(adapter.priority(), 3);

        let mut map = IndexMap::new();
        adapter.contribute_all(&mut map);
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["user.dir", "a"]);
    }

    #[test]
    fn test_adapters_are_always_equal() {
        let a = SystemPropertiesAdapter::new();
        let b = SystemPropertiesAdapter::with_access(Arc::new(MapProperties::new()));
        assert_eq!(a, b);
    }
}
