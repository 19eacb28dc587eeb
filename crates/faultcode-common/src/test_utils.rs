//! Test utilities shared by the faultcode crates.
//!
//! Enabled for other crates through the `testing` feature.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));

        // Another harness may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `content` to `relative` under `root`, creating parent directories.
pub fn write_file(root: &std::path::Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    std::fs::write(&path, content).expect("Failed to write test file");
}

/// Fluent template fixtures.
pub mod template_fixtures {
    /// Root collection for a three-code set.
    pub fn root_ftl() -> &'static str {
        r#"
ERROR_1 = Root error: { 0 }
ERROR_2 = Root two: { 0 }, { 1 }
"#
    }

    /// Swedish collection overriding one key of [`root_ftl`].
    pub fn swedish_ftl() -> &'static str {
        r#"
# Swedish messages
ERROR_1 = Fel med ett argument: { 0 }
"#
    }

    /// Collection with a syntax error.
    pub fn malformed_ftl() -> &'static str {
        "ERROR_1 = { 0\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
        tracing::debug!("logging initialized twice without panicking");
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a/b/Code.ftl", template_fixtures::root_ftl());
        let content = std::fs::read_to_string(dir.path().join("a/b/Code.ftl")).unwrap();
        assert!(content.contains("ERROR_1"));
    }
}
