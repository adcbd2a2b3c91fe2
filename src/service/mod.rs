// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer assembling sources into a resolver.
//!
//! [`LayeredConfigurationBuilder`] records sources, [`LayeredConfiguration`] answers
//! queries over them through the `DynamicConfiguration` trait.

pub mod layered;
pub mod source;

pub use layered::{LayeredConfiguration, LayeredConfigurationBuilder, Precedence};
pub use source::{Source, SourceDescriptor};
