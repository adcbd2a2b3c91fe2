// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-file parsing and the filesystem override source.
//!
//! The text format is the classic property list: one `key=value`, `key:value` or
//! `key value` entry per logical line, `#`/`!` comments, backslash line
//! continuations and backslash escapes including `\uXXXX`.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::source::PRIORITY_FILES;
use crate::ports::{ConfigParser, ConfigSource};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for a property file (10MB).
const MAX_PROPERTIES_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "properties-file";

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Parser for property-list text.
///
/// # Examples
///
/// ```rust
/// use dyncfg::adapters::PropertiesParser;
/// use dyncfg::ports::ConfigParser;
///
/// let text = "# comment\nIamKey=I'm a value\ngreeting : hello \\\n    world\n";
/// let parsed = PropertiesParser::new().parse(text).unwrap();
/// assert_eq!(parsed["IamKey"], "I'm a value");
/// assert_eq!(parsed["greeting"], "hello world");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertiesParser;

impl PropertiesParser {
    /// Creates a new properties parser.
    pub fn new() -> Self {
        PropertiesParser
    }

    /// Joins natural lines into logical lines.
    ///
    /// Comment and blank lines are dropped. A natural line ending in an odd number of
    /// backslashes continues onto the next one, whose leading whitespace is skipped.
    fn logical_lines(content: &str) -> Vec<String> {
        let normalized = content
            .strip_prefix('\u{feff}')
            .unwrap_or(content)
            .replace("\r\n", "\n");

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut continuing = false;

        for natural in normalized.split(|c: char| c == '\n' || c == '\r') {
            let trimmed = natural.trim_start_matches(is_blank);
            if !continuing
                && (trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!'))
            {
                continue;
            }

            let trailing = trimmed.chars().rev().take_while(|c| *c == '\\').count();
            if trailing % 2 == 1 {
                current.push_str(&trimmed[..trimmed.len() - 1]);
                continuing = true;
            } else {
                current.push_str(trimmed);
                lines.push(std::mem::take(&mut current));
                continuing = false;
            }
        }

        if continuing && !current.is_empty() {
            lines.push(current);
        }

        lines
    }

    /// Splits a logical line into its raw (still escaped) key and value.
    fn split_entry(line: &str) -> (&str, &str) {
        let mut escaped = false;
        let mut key_end = line.len();
        let mut value_start = line.len();
        let mut has_separator = false;

        for (i, c) in line.char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '=' | ':' => {
                    key_end = i;
                    value_start = i + 1;
                    has_separator = true;
                    break;
                }
                c if is_blank(c) => {
                    key_end = i;
                    value_start = i + 1;
                    break;
                }
                _ => {}
            }
        }

        let mut value = &line[value_start..];
        loop {
            value = value.trim_start_matches(is_blank);
            if !has_separator && (value.starts_with('=') || value.starts_with(':')) {
                value = &value[1..];
                has_separator = true;
            } else {
                break;
            }
        }

        (&line[..key_end], value)
    }

    /// Resolves backslash escapes.
    ///
    /// Consecutive `\uXXXX` escapes are decoded as UTF-16 so surrogate pairs combine;
    /// unpaired surrogates become U+FFFD.
    fn unescape(raw: &str) -> Result<String> {
        let mut out = String::with_capacity(raw.len());
        let mut units: Vec<u16> = Vec::new();
        let mut chars = raw.chars();

        while let Some(c) = chars.next() {
            if c != '\\' {
                Self::flush_utf16(&mut units, &mut out);
                out.push(c);
                continue;
            }

            match chars.next() {
                Some('u') => {
                    let hex: String = chars.by_ref().take(4).collect();
                    let unit = (hex.len() == 4 && hex.chars().all(|h| h.is_ascii_hexdigit()))
                        .then(|| u16::from_str_radix(&hex, 16).ok())
                        .flatten()
                        .ok_or_else(|| {
                            ConfigError::parse(format!("Malformed \\uxxxx encoding: \\u{}", hex))
                        })?;
                    units.push(unit);
                }
                Some(escaped) => {
                    Self::flush_utf16(&mut units, &mut out);
                    out.push(match escaped {
                        't' => '\t',
                        'n' => '\n',
                        'r' => '\r',
                        'f' => '\x0c',
                        other => other,
                    });
                }
                // dangling backslash at end of input
                None => {}
            }
        }

        Self::flush_utf16(&mut units, &mut out);
        Ok(out)
    }

    fn flush_utf16(units: &mut Vec<u16>, out: &mut String) {
        if units.is_empty() {
            return;
        }
        out.extend(
            char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
        );
    }
}

impl ConfigParser for PropertiesParser {
    fn parse(&self, content: &str) -> Result<IndexMap<String, String>> {
        let mut result = IndexMap::new();
        for line in Self::logical_lines(content) {
            let (raw_key, raw_value) = Self::split_entry(&line);
            let key = Self::unescape(raw_key)?;
            let value = Self::unescape(raw_value)?;
            result.insert(key, value);
        }
        Ok(result)
    }
}

/// Reads a UTF-8 property file, enforcing the size limit.
///
/// Malformed UTF-8 sequences decode to U+FFFD. Read failures are reported as
/// `SourceError` attributed to `source_name`.
pub(crate) fn read_properties_text(source_name: &str, path: &Path) -> Result<String> {
    let metadata =
        fs::metadata(path).map_err(|e| ConfigError::from_io_error(source_name, path.display(), e))?;

    if metadata.len() > MAX_PROPERTIES_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: source_name.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_PROPERTIES_FILE_SIZE
            ),
            source: None,
        });
    }

    let bytes =
        fs::read(path).map_err(|e| ConfigError::from_io_error(source_name, path.display(), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Configuration source backed by a single property file on the filesystem.
///
/// The file is read once at construction. If nothing exists at the path the source
/// is empty; a file that exists but cannot be read is an error.
///
/// # Examples
///
/// ```rust,no_run
/// use dyncfg::adapters::PropertiesFileAdapter;
/// use dyncfg::ports::ConfigSource;
///
/// let adapter = PropertiesFileAdapter::from_path("/etc/myapp/override.properties").unwrap();
/// if adapter.is_loaded() {
///     println!("{:?}", adapter.get_str("server.port"));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PropertiesFileAdapter {
    path: PathBuf,
    values: IndexMap<String, String>,
    loaded: bool,
}

impl PropertiesFileAdapter {
    /// Loads the property file at `path` if it exists.
    ///
    /// # Errors
    ///
    /// * `ConfigError::SourceError` if the file exists but cannot be read
    /// * `ConfigError::ParseError` if its content is malformed
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.is_file() {
            tracing::debug!("No override file at {}, skipping", path.display());
            return Ok(Self {
                path,
                values: IndexMap::new(),
                loaded: false,
            });
        }

        let content = read_properties_text(SOURCE_NAME, &path)?;
        let values = PropertiesParser::new().parse(&content)?;
        tracing::debug!("Loaded {} properties from {}", values.len(), path.display());

        Ok(Self {
            path,
            values,
            loaded: true,
        })
    }

    /// The path this source was constructed with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a file was found and read.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The parsed entries, in file order.
    pub fn values(&self) -> &IndexMap<String, String> {
        &self.values
    }
}

impl PartialEq for PropertiesFileAdapter {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl ConfigSource for PropertiesFileAdapter {
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
