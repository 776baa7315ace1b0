//! Status list reader.

use cogbot_common::Result;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the status list, returning trimmed non-blank lines.
///
/// A missing file is an empty list, not an error.
pub fn read_status_lines(path: &Path) -> Result<Vec<String>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_dropped() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("list.txt");
        std::fs::write(&path, "playing chess\n\n   \r\n  watching tv  \n").unwrap();

        assert_eq!(
            read_status_lines(&path).unwrap(),
            vec!["playing chess".to_string(), "watching tv".to_string()]
        );
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        assert!(read_status_lines(&temp.path().join("list.txt"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_directory_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        assert!(read_status_lines(temp.path()).is_err());
    }
}
