use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for graph exports and configuration files (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Upper bound for a single build manifest (10 MB)
pub const MAX_MANIFEST_SIZE: u64 = 10 * 1024 * 1024;

/// Rejects symbolic links.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not followed for {} operations.",
            path.display(),
            operation
        );
    }

    Ok(())
}

pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a regular, non-symlinked file no larger than `max_size`.
///
/// Every failure is reported as [`AnalyzerError::FileReadError`] for `path`.
pub fn read_checked(path: &Path, max_size: u64) -> Result<String> {
    let to_read_error = |details: String| AnalyzerError::FileReadError {
        path: path.to_path_buf(),
        details,
    };

    let metadata = fs::symlink_metadata(path).map_err(|e| to_read_error(e.to_string()))?;

    if metadata.is_symlink() {
        return Err(to_read_error(
            "Security: symbolic links are not allowed".to_string(),
        )
        .into());
    }
    if !metadata.is_file() {
        return Err(to_read_error("not a regular file".to_string()).into());
    }
    validate_file_size(metadata.len(), path, max_size)
        .map_err(|e| to_read_error(e.to_string()))?;

    fs::read_to_string(path).map_err(|e| to_read_error(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("graph.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/graph.json");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/pom.xml");
        let result = validate_file_size(MAX_MANIFEST_SIZE + 1, &path, MAX_MANIFEST_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_read_checked_returns_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("pom.xml");
        fs::write(&file_path, "<project/>").unwrap();

        assert_eq!(read_checked(&file_path, MAX_MANIFEST_SIZE).unwrap(), "<project/>");
    }

    #[test]
    fn test_read_checked_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_checked(temp_dir.path(), MAX_FILE_SIZE).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalyzerError>(),
            Some(AnalyzerError::FileReadError { .. })
        ));
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_read_checked_missing_file() {
        let result = read_checked(Path::new("/nonexistent/graph.json"), MAX_FILE_SIZE);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_checked_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = read_checked(&link, MAX_FILE_SIZE).unwrap_err();
        assert!(format!("{:?}", err).contains("symbolic links"));
    }
}
