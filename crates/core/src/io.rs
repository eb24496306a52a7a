//! Stylesheet file I/O with path context on every error.

use std::{
    fs::{create_dir_all, metadata, read_to_string},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct StylesheetFile {
    path: PathBuf,
}

impl StylesheetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<String> {
        read_to_string(&self.path)
            .with_context(|| format!("Failed to read stylesheet: {}", self.path.display()))
    }

    pub fn size(&self) -> Result<u64> {
        Ok(metadata(&self.path)
            .with_context(|| format!("Failed to stat {}", self.path.display()))?
            .len())
    }

    /// Create parent directory if it doesn't exist.
    pub fn ensure_parent_dir(&self) -> Result<()> {
        ensure_parent_dir(&self.path)
    }
}

impl AsRef<Path> for StylesheetFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Create the parent directory of `path` if it doesn't exist.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("static/css/icons.css");
        ensure_parent_dir(&path).unwrap();
        assert!(dir.path().join("static/css").is_dir());
        assert!(!path.exists());
    }

    #[test]
    fn test_ensure_parent_dir_bare_file_name() {
        ensure_parent_dir(Path::new("icons.css")).unwrap();
        StylesheetFile::new("icons.css").ensure_parent_dir().unwrap();
    }
}
