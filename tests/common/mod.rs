// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use dyncfg::adapters::ResourceLocator;
use std::path::PathBuf;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Property resource shipped with the tests.
#[allow(dead_code)]
pub const TEST_RESOURCE: &str = "storebaseddynamicconfigurationtest.properties";

/// Second property resource defining the same keys.
#[allow(dead_code)]
pub const OTHER_RESOURCE: &str = "anotherfile.properties";

/// Installs a test-friendly tracing subscriber once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    });
}

/// Directory holding the test property resources.
pub fn resources_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("resources")
}

/// Locator rooted at the test resources directory.
#[allow(dead_code)]
pub fn test_locator() -> ResourceLocator {
    ResourceLocator::new().with_root(resources_dir())
}
