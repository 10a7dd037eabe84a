// schemapipe-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::path::Path;

/// Read the full contents of a SQL script file.
///
/// The path is not validated before use; a missing or unreadable file is
/// surfaced as the underlying IO error.
pub fn read_script<P: AsRef<Path>>(path: P) -> Result<String, InfrastructureError> {
    let content = fs::read_to_string(path.as_ref()).map_err(InfrastructureError::Io)?;
    Ok(content)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_read_script_returns_content() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("load.sql");
        fs::write(&file_path, "SELECT 1;")?;

        let content = read_script(&file_path)?;

        assert_eq!(content, "SELECT 1;");
        Ok(())
    }

    #[test]
    fn test_read_script_missing_file_is_io_error() {
        let result = read_script("does/not/exist.sql");

        assert!(matches!(result, Err(InfrastructureError::Io(_))));
    }

    #[test]
    fn test_read_script_empty_path_is_io_error() {
        // Mirrors the missing-argument fallthrough: the caller hands us an
        // empty path and the read step reports the failure.
        let result = read_script("");

        assert!(matches!(result, Err(InfrastructureError::Io(_))));
    }
}
