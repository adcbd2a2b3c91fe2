// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource lookup.
//!
//! A [`ResourceLocator`] finds every resource matching a relative path. Resources
//! come from two places, searched in this order:
//!
//! 1. embedded resources registered with [`ResourceLocator::with_embedded`], usually
//!    text compiled into the binary with `include_str!`
//! 2. `root/path` for each search root, in the order the roots were added
//!
//! The same relative path may match in several places; callers receive all matches
//! in search order.

use crate::adapters::properties_file::read_properties_text;
use crate::domain::Result;
use crate::ports::EnvironmentAccess;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the default resource search path.
///
/// The value uses the platform's path-list syntax (`:` separated on Unix, `;` on
/// Windows).
pub const RESOURCE_PATH_ENV: &str = "DYNCFG_RESOURCE_PATH";

/// One resource found by a [`ResourceLocator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    /// Text registered with the locator.
    Embedded {
        /// Relative path the text was registered under
        path: String,
        /// The resource text
        content: &'static str,
    },
    /// A file below one of the search roots.
    File(PathBuf),
}

impl Resource {
    /// Reads the resource as UTF-8 text.
    ///
    /// # Errors
    ///
    /// `ConfigError::SourceError` attributed to `source_name` if a file resource
    /// cannot be read.
    pub fn read_to_string(&self, source_name: &str) -> Result<String> {
        match self {
            Resource::Embedded { content, .. } => Ok((*content).to_string()),
            Resource::File(path) => read_properties_text(source_name, path),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Embedded { path, .. } => write!(f, "embedded:{}", path),
            Resource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Search path for bundled resources.
///
/// # Examples
///
/// ```rust
/// use dyncfg::adapters::ResourceLocator;
///
/// let locator = ResourceLocator::new()
///     .with_embedded("app.properties", "greeting=hello\n")
///     .with_root("/opt/myapp/resources");
///
/// let found = locator.find_all("app.properties");
/// assert_eq!(found[0].to_string(), "embedded:app.properties");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceLocator {
    embedded: Vec<(String, &'static str)>,
    roots: Vec<PathBuf>,
}

impl ResourceLocator {
    /// Creates a locator with no roots and no embedded resources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a locator whose roots come from [`RESOURCE_PATH_ENV`] in the process
    /// environment.
    pub fn from_env() -> Self {
        Self::from_env_access(&crate::adapters::ProcessEnvironment)
    }

    /// Creates a locator whose roots come from [`RESOURCE_PATH_ENV`] as seen through
    /// `env`. Empty entries are ignored.
    pub fn from_env_access(env: &dyn EnvironmentAccess) -> Self {
        let roots = env
            .var(RESOURCE_PATH_ENV)
            .map(|value| {
                std::env::split_paths(&value)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            embedded: Vec::new(),
            roots,
        }
    }

    /// Appends a search root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Registers `content` as the resource at `path`.
    ///
    /// Registering the same path twice keeps both; they are returned in
    /// registration order.
    pub fn with_embedded(mut self, path: impl Into<String>, content: &'static str) -> Self {
        self.embedded.push((path.into(), content));
        self
    }

    /// The search roots, in search order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Finds every resource matching `relative`, in search order.
    ///
    /// Absolute paths only match embedded resources registered under the exact same
    /// string; roots are not consulted for them.
    pub fn find_all(&self, relative: &str) -> Vec<Resource> {
        let mut found: Vec<Resource> = self
            .embedded
            .iter()
            .filter(|(path, _)| path == relative)
            .map(|(path, content)| Resource::Embedded {
                path: path.clone(),
                content: *content,
            })
            .collect();

        if !Path::new(relative).is_absolute() {
            found.extend(
                self.roots
                    .iter()
                    .map(|root| root.join(relative))
                    .filter(|candidate| candidate.is_file())
                    .map(Resource::File),
            );
        }

        tracing::trace!("Found {} resources for '{}'", found.len(), relative);
        found
    }
}
