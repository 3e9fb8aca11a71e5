//! Directory management for download destinations.

use std::path::Path;

use crate::error::Result;

/// Ensure a directory exists, creating it recursively if absent.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_ensure_dir_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");

        ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_ensure_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();

        ensure_dir(dir.path()).await.unwrap();
        ensure_dir(dir.path()).await.unwrap();
        assert!(dir.path().is_dir());
    }
}
