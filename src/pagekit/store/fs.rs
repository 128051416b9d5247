use super::FileSystem;
use crate::error::{PageKitError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Production storage rooted at the site directory.
pub struct DiskStore;

impl DiskStore {
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(PageKitError::Io)?;
            }
        }
        Ok(())
    }
}

impl Default for DiskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for DiskStore {
    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(PageKitError::Io)
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.ensure_parent(path)?;
        fs::write(path, contents).map_err(PageKitError::Io)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove(&mut self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(PageKitError::Io)
    }

    fn rename(&mut self, from: &Path, to: &Path) -> Result<()> {
        self.ensure_parent(to)?;
        fs::rename(from, to).map_err(PageKitError::Io)
    }

    fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(false) {
            let entry = entry.map_err(|e| {
                PageKitError::Store(format!("failed to walk {}: {}", root.display(), e))
            })?;
            if entry.file_type().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }
}
