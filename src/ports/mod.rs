// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the interfaces the adapters implement: configuration
//! sources, text parsers and accessors for process-wide ambient state.

pub mod ambient;
pub mod parser;
pub mod source;

// Re-export commonly used types
pub use ambient::{EnvironmentAccess, PropertyAccess};
pub use parser::ConfigParser;
pub use source::ConfigSource;
