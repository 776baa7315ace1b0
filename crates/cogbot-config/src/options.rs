//! Per-cog `options.json` toggles.

use cogbot_common::Result;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{error, info};

/// Contents of a cog's options file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CogOptions {
    /// Whether the cog is loaded at startup. Absent means inactive.
    #[serde(default)]
    pub active: bool,
}

impl Default for CogOptions {
    fn default() -> Self {
        Self { active: true }
    }
}

/// Serializes options the way they are stored on disk, indented by four spaces.
pub fn options_to_json(options: &CogOptions) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(b"    "));
    options.serialize(&mut serializer)?;
    Ok(body)
}

/// Makes sure `cog_dir/file_name` exists, writing `{"active": true}` when it
/// does not. An existing file is never touched. Returns the options path.
///
/// The file is written to a temporary sibling first and moved into place, so
/// a failed write never leaves a truncated options file behind.
pub fn ensure_options(cog_dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = cog_dir.join(file_name);
    if path.exists() {
        return Ok(path);
    }

    let body = options_to_json(&CogOptions::default())?;
    let mut staged = NamedTempFile::new_in(cog_dir)?;
    staged.write_all(&body)?;
    staged.flush()?;

    // noclobber so a file that appears concurrently wins
    match staged.persist_noclobber(&path) {
        Ok(_) => {
            let cog_name = cog_dir.file_name().map_or_else(
                || cog_dir.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            info!("Created default {} for {}", file_name, cog_name);
        }
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {}
        Err(e) => return Err(e.error.into()),
    }

    Ok(path)
}

/// Reads the options file and reports whether the cog is active.
///
/// Never fails: unreadable files and invalid JSON count as inactive.
#[must_use]
pub fn is_active(path: &Path) -> bool {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            error!("Could not read {}: {}", path.display(), e);
            return false;
        }
    };

    match serde_json::from_str::<CogOptions>(&contents) {
        Ok(options) => options.active,
        Err(e) => {
            error!("Invalid JSON in {}: {}", path.display(), e);
            false
        }
    }
}
