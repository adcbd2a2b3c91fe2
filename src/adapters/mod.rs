// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration source implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: the property-file parser, the resource locator, one adapter per
//! source variant, and the accessors for the process environment and the runtime
//! property table.

pub mod env_var;
pub mod hardcoded;
pub mod properties_file;
pub mod properties_resource;
pub mod resources;
pub mod system_properties;

pub use env_var::{EnvVarAdapter, MapEnvironment, ProcessEnvironment};
pub use hardcoded::HardcodedAdapter;
pub use properties_file::{PropertiesFileAdapter, PropertiesParser};
pub use properties_resource::PropertiesResourceAdapter;
pub use resources::{Resource, ResourceLocator, RESOURCE_PATH_ENV};
pub use system_properties::{MapProperties, RuntimeProperties, SystemPropertiesAdapter};
