//! Test utilities and shared test helpers for Cogbot.
//!
//! Fixtures here build throwaway cog trees and status files on disk so each
//! crate can exercise its filesystem-facing code against real directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Builds a cogs root directory with one subdirectory per cog.
pub struct CogTreeBuilder {
    root: PathBuf,
}

impl CogTreeBuilder {
    /// Starts a tree rooted at `root`, creating it if needed.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        fs::create_dir_all(&root).expect("Failed to create cogs root");
        Self { root }
    }

    /// Adds a cog directory without an options file.
    pub fn cog(self, name: &str) -> Self {
        fs::create_dir_all(self.root.join(name)).expect("Failed to create cog directory");
        self
    }

    /// Adds a cog directory with the given raw `options.json` contents.
    pub fn cog_with_options(self, name: &str, options: &str) -> Self {
        let dir = self.root.join(name);
        fs::create_dir_all(&dir).expect("Failed to create cog directory");
        fs::write(dir.join("options.json"), options).expect("Failed to write options.json");
        self
    }

    /// Adds a plain file to the root, which scanners must ignore.
    pub fn stray_file(self, name: &str) -> Self {
        fs::write(self.root.join(name), "not a cog").expect("Failed to write stray file");
        self
    }

    /// Returns the root path.
    pub fn build(self) -> PathBuf {
        self.root
    }
}

/// Status list fixtures.
pub mod status_fixtures {
    use super::*;

    /// A status list covering every prefix plus an unprefixed line.
    pub fn mixed_status_list() -> &'static str {
        "playing chess\n\
         watching the stars\n\
         \n\
         listening lo-fi beats\n\
         competing the cup\n\
         Custom Status\n"
    }

    /// Writes a status list file under `dir`, creating parent directories.
    pub fn write_status_file(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("Data").join("mainfiles").join("list.txt");
        fs::create_dir_all(path.parent().expect("status path has a parent"))
            .expect("Failed to create status directory");
        fs::write(&path, contents).expect("Failed to write status file");
        path
    }
}

/// Property-based testing utilities using proptest.
pub mod property_testing {
    use crate::ActivityKind;
    use proptest::prelude::*;

    /// Strategy for generating status labels.
    pub fn label_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z0-9 ,.!?'-]{0,40}"
    }

    /// Strategy for generating activity kinds.
    pub fn activity_kind_strategy() -> impl Strategy<Value = ActivityKind> {
        prop::sample::select(ActivityKind::ALL.to_vec())
    }

    /// Strategy for generating status lists of 1 to 20 distinct non-blank lines.
    pub fn status_lines_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::btree_set(r"[a-z]{1,12}( [a-z]{1,12}){0,3}", 1..20)
            .prop_map(|set| set.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_cog_tree_builder() {
        let temp = create_temp_dir();
        let root = CogTreeBuilder::new(temp.path().join("Cogs"))
            .cog("Music")
            .cog_with_options("Admin", r#"{"active": false}"#)
            .stray_file("README.md")
            .build();

        assert!(root.join("Music").is_dir());
        assert!(!root.join("Music").join("options.json").exists());
        assert!(root.join("Admin").join("options.json").is_file());
        assert!(root.join("README.md").is_file());
    }

    #[test]
    fn test_write_status_file() {
        let temp = create_temp_dir();
        let path = status_fixtures::write_status_file(temp.path(), "playing chess\n");
        assert!(path.ends_with("Data/mainfiles/list.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "playing chess\n");
    }
}
