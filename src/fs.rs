use std::path::{Path, PathBuf};

use eyre::Result;
use tokio::fs::metadata;
use tracing::{debug, instrument};

/// Find a given file in the given directory and its parent directories recursively
#[instrument(level = "debug")]
pub async fn find_file_in_previous_dirs(filename: &str, start: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = Some(start);

    while let Some(dir) = current_dir {
        let path = dir.join(filename);
        if let Ok(meta) = metadata(&path).await {
            if meta.is_file() {
                debug!(path = %path.display(), "Found file");
                return Ok(Some(path));
            }
        }

        // Move to the parent directory if the file was not found
        current_dir = dir.parent();
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_file_in_start_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docsite.toml");
        tokio::fs::write(&path, "").await.unwrap();

        let found = find_file_in_previous_dirs("docsite.toml", dir.path()).await.unwrap();
        assert_eq!(found, Some(path));
    }

    #[tokio::test]
    async fn finds_file_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guide");
        tokio::fs::create_dir_all(&nested).await.unwrap();
        let path = dir.path().join("docsite.toml");
        tokio::fs::write(&path, "").await.unwrap();

        let found = find_file_in_previous_dirs("docsite.toml", &nested).await.unwrap();
        assert_eq!(found, Some(path));
    }

    #[tokio::test]
    async fn directories_do_not_match() {
        let dir = tempfile::tempdir().unwrap();
        let name = "not-a-file-4f1c7e";
        tokio::fs::create_dir(dir.path().join(name)).await.unwrap();

        let found = find_file_in_previous_dirs(name, dir.path()).await.unwrap();
        assert_eq!(found, None);
    }
}
