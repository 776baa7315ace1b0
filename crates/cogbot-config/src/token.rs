//! Bot token loading.

use cogbot_common::{CogbotError, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Reads the bot token from `path`, trimming surrounding whitespace.
///
/// A missing or blank file is an error; callers treat it as fatal.
pub fn read_token(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CogbotError::Config(format!(
            "{} not found. Please create it with your bot token.",
            path.display()
        )),
        _ => CogbotError::Io(e),
    })?;

    let token = contents.trim();
    if token.is_empty() {
        return Err(CogbotError::Config(format!(
            "{} is empty. Please put your bot token in it.",
            path.display()
        )));
    }

    Ok(token.to_string())
}
