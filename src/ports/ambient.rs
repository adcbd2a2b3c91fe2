// SPDX-License-Identifier: MIT OR Apache-2.0

//! Accessors for process-wide ambient state.
//!
//! The environment and the runtime property table are global. Sources reach them
//! through these traits so tests can substitute fixed maps instead of mutating real
//! process state.

use std::fmt::Debug;

/// Read access to environment variables.
pub trait EnvironmentAccess: Debug + Send + Sync {
    /// Returns the value of the variable `name`, if set and valid UTF-8.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns a snapshot of every variable with a UTF-8 name and value.
    fn vars(&self) -> Vec<(String, String)>;
}

/// Read access to a runtime property table.
pub trait PropertyAccess: Debug + Send + Sync {
    /// Returns the property `key`, if set.
    fn property(&self, key: &str) -> Option<String>;

    /// Returns a snapshot of every property in table order.
    fn properties(&self) -> Vec<(String, String)>;
}
