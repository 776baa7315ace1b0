//! Cogs directory scanner.
//!
//! Every subdirectory of the cogs root is one cog. Its `options.json` decides
//! whether it is loaded; a folder named `Music` loads the registered cog
//! `music` under the extension identifier `Cogs.Music.music`. One cog failing
//! never stops the scan.

use crate::registry::{CogHost, CogRegistry};
use cogbot_common::{cog_module_path, format_elapsed, CogbotError};
use cogbot_config::{ensure_options, is_active, Config};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Result of processing one cog directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CogOutcome {
    /// The cog was active and loaded.
    Loaded {
        /// Time spent loading.
        elapsed: Duration,
    },
    /// The cog was inactive.
    Skipped,
    /// The cog was active but could not be loaded.
    Failed {
        /// Time spent before the failure.
        elapsed: Duration,
        /// Error text.
        error: String,
    },
}

/// Per-directory scan record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CogReport {
    /// Directory name as found on disk.
    pub folder: String,
    /// Extension identifier derived from the directory name.
    pub module_path: String,
    /// What happened.
    pub outcome: CogOutcome,
}

/// Outcome of a whole scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    entries: Vec<CogReport>,
}

impl ScanReport {
    /// All per-directory records in scan order.
    #[must_use]
    pub fn entries(&self) -> &[CogReport] {
        &self.entries
    }

    /// Looks up the record for a directory.
    #[must_use]
    pub fn get(&self, folder: &str) -> Option<&CogReport> {
        self.entries.iter().find(|r| r.folder == folder)
    }

    /// Number of cogs loaded.
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.count(|o| matches!(o, CogOutcome::Loaded { .. }))
    }

    /// Number of cogs skipped as inactive.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, CogOutcome::Skipped))
    }

    /// Number of cogs that failed to load.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, CogOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&CogOutcome) -> bool) -> usize {
        self.entries.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Walks the cogs directory and loads active cogs into a [`CogHost`].
pub struct CogScanner<'a> {
    config: &'a Config,
    registry: &'a CogRegistry,
}

impl<'a> CogScanner<'a> {
    /// Creates a scanner over `config.paths.cogs_dir`.
    #[must_use]
    pub const fn new(config: &'a Config, registry: &'a CogRegistry) -> Self {
        Self { config, registry }
    }

    /// Scans every cog directory once, in name order.
    pub async fn scan(&self, host: &mut CogHost) -> ScanReport {
        info!("Checking {} directory...", self.config.paths.cogs_dir.display());

        let mut report = ScanReport::default();
        for (folder, path) in self.cog_dirs() {
            let outcome = self.process(&folder, path, host).await;
            report.entries.push(CogReport {
                module_path: self.module_path(&folder),
                folder,
                outcome,
            });
        }

        info!(
            "Cog scan finished: {} loaded, {} skipped, {} failed",
            report.loaded(),
            report.skipped(),
            report.failed()
        );
        report
    }

    fn module_path(&self, folder: &str) -> String {
        cog_module_path(&self.config.cogs_module_root(), folder)
    }

    fn cog_dirs(&self) -> Vec<(String, PathBuf)> {
        let root = &self.config.paths.cogs_dir;
        let entries = match std::fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                error!("Could not read cogs directory {}: {}", root.display(), e);
                return Vec::new();
            }
        };

        let mut dirs: Vec<(String, PathBuf)> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .filter_map(|path| {
                let folder = path.file_name()?.to_string_lossy().into_owned();
                Some((folder, path))
            })
            .collect();
        dirs.sort();
        dirs
    }

    async fn process(&self, folder: &str, path: PathBuf, host: &mut CogHost) -> CogOutcome {
        let options_path = match ensure_options(&path, &self.config.paths.options_file_name) {
            Ok(options_path) => options_path,
            Err(e) => {
                error!("[!] Failed to prepare options for {}: {}", folder, e);
                return CogOutcome::Failed {
                    elapsed: Duration::ZERO,
                    error: e.to_string(),
                };
            }
        };

        if !is_active(&options_path) {
            info!("[ ] Skipped {} [INACTIVE]", folder);
            return CogOutcome::Skipped;
        }

        let module_path = self.module_path(folder);
        let start = Instant::now();
        let result = self.load(&module_path, folder, host).await;
        let elapsed = start.elapsed();

        match result {
            Ok(()) => {
                info!("[+] Loaded {} in {} [ACTIVE]", folder, format_elapsed(elapsed));
                CogOutcome::Loaded { elapsed }
            }
            Err(e) => {
                error!(
                    "[!] Failed to load {} in {} - Error: {}",
                    folder,
                    format_elapsed(elapsed),
                    e
                );
                CogOutcome::Failed {
                    elapsed,
                    error: e.to_string(),
                }
            }
        }
    }

    async fn load(
        &self,
        module_path: &str,
        folder: &str,
        host: &mut CogHost,
    ) -> Result<(), CogbotError> {
        let Some(cog) = self.registry.get(&folder.to_lowercase()) else {
            return Err(CogbotError::Cog(format!(
                "Extension '{module_path}' could not be found"
            )));
        };

        let checkpoint = host.command_count();
        let loaded = AssertUnwindSafe(host.load_extension(module_path, cog.as_ref()))
            .catch_unwind()
            .await;

        loaded.unwrap_or_else(|panic| {
            host.rollback(checkpoint);
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(CogbotError::Cog(format!(
                "Extension '{module_path}' panicked while loading: {reason}"
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cogbot_common::test_utils::{create_temp_dir, CogTreeBuilder};

    fn config_for(root: PathBuf) -> Config {
        let mut config = Config::default();
        config.paths.cogs_dir = root;
        config
    }

    #[tokio::test]
    async fn test_missing_root_yields_empty_report() {
        let temp = create_temp_dir();
        let config = config_for(temp.path().join("Cogs"));
        let registry = CogRegistry::builtin();
        let mut host = CogHost::new();

        let report = CogScanner::new(&config, &registry).scan(&mut host).await;
        assert!(report.entries().is_empty());
    }

    #[tokio::test]
    async fn test_scan_order_and_module_paths() {
        let temp = create_temp_dir();
        let root = CogTreeBuilder::new(temp.path().join("Cogs"))
            .cog("Uptime")
            .cog("About")
            .build();
        let config = config_for(root);
        let registry = CogRegistry::builtin();
        let mut host = CogHost::new();

        let report = CogScanner::new(&config, &registry).scan(&mut host).await;
        let paths: Vec<&str> = report.entries().iter().map(|r| r.module_path.as_str()).collect();

        assert_eq!(paths, vec!["Cogs.About.about", "Cogs.Uptime.uptime"]);
        assert_eq!(report.loaded(), 2);
        assert_eq!(host.extensions(), ["Cogs.About.about", "Cogs.Uptime.uptime"]);
    }

    #[tokio::test]
    async fn test_case_variant_folders_load_the_cog_once() {
        let temp = create_temp_dir();
        let root = CogTreeBuilder::new(temp.path().join("Cogs"))
            .cog("About")
            .cog("about")
            .build();
        let config = config_for(root);
        let registry = CogRegistry::builtin();
        let mut host = CogHost::new();

        let report = CogScanner::new(&config, &registry).scan(&mut host).await;

        assert_eq!(report.loaded(), 1);
        assert_eq!(report.failed(), 1);
        assert!(matches!(
            report.get("About").unwrap().outcome,
            CogOutcome::Loaded { .. }
        ));
        match &report.get("about").unwrap().outcome {
            CogOutcome::Failed { error, .. } => assert!(error.contains("already loaded")),
            other => panic!("unexpected outcome: {other:?}"),
        }

        let (commands, extensions) = host.into_parts();
        assert_eq!(extensions, vec!["Cogs.About.about".to_string()]);
        let names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["about"]);
    }

    #[tokio::test]
    async fn test_unregistered_cog_fails_with_not_found() {
        let temp = create_temp_dir();
        let root = CogTreeBuilder::new(temp.path().join("Cogs")).cog("Ghost").build();
        let config = config_for(root);
        let registry = CogRegistry::builtin();
        let mut host = CogHost::new();

        let report = CogScanner::new(&config, &registry).scan(&mut host).await;
        match &report.get("Ghost").unwrap().outcome {
            CogOutcome::Failed { error, .. } => {
                assert_eq!(error, "Extension 'Cogs.Ghost.ghost' could not be found");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
