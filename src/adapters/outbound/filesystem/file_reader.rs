use crate::adapters::outbound::memory::StoreFixture;
use crate::shared::error::TreeError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum fixture size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter reading store fixtures from the file system
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads and parses a JSON store fixture
    ///
    /// # Errors
    /// - `TreeError::FixtureReadError` if the file is missing, a symlink,
    ///   not a regular file or too large
    /// - `TreeError::FixtureParseError` if the JSON does not describe a fixture
    pub fn read_store_fixture(&self, path: &Path) -> Result<StoreFixture> {
        let content = self.safe_read_file(path).map_err(|e| TreeError::FixtureReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| {
            TreeError::FixtureParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }
        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }
        if metadata.len() > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                metadata.len(),
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_store_fixture_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(
            &path,
            r#"{"components":[{"id":1,"uuid":"u","key":"k","name":"P","qualifier":"TRK"}]}"#,
        )
        .unwrap();

        let fixture = FileSystemReader::new().read_store_fixture(&path).unwrap();

        assert_eq!(fixture.components.len(), 1);
        assert!(fixture.snapshots.is_empty());
    }

    #[test]
    fn test_read_store_fixture_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let error = FileSystemReader::new()
            .read_store_fixture(&temp_dir.path().join("missing.json"))
            .unwrap_err();

        assert!(matches!(
            error.downcast_ref::<TreeError>(),
            Some(TreeError::FixtureReadError { .. })
        ));
    }

    #[test]
    fn test_read_store_fixture_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "{ not json").unwrap();

        let error = FileSystemReader::new()
            .read_store_fixture(&path)
            .unwrap_err();

        assert!(matches!(
            error.downcast_ref::<TreeError>(),
            Some(TreeError::FixtureParseError { .. })
        ));
    }

    #[test]
    fn test_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let error = FileSystemReader::new()
            .read_store_fixture(temp_dir.path())
            .unwrap_err();

        assert!(error.to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("store.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let error = FileSystemReader::new()
            .read_store_fixture(&link)
            .unwrap_err();

        assert!(error.to_string().contains("symbolic link"));
    }
}
