//! # Storage Layer
//!
//! The filesystem subtree of one generated site is the only state this tool
//! has: there is no cached index, and every operation reloads what it needs
//! from disk. The [`FileSystem`] trait abstracts that subtree so the
//! command layer can run against:
//!
//! - [`fs::DiskStore`]: production storage backed by `std::fs` + `walkdir`
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated tests
//!
//! Mutations are check-then-act, not atomic. The tool assumes exclusive
//! access to the site directory; concurrent invocation is out of scope.

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Abstract interface over the site directory.
///
/// `write` and `rename` create missing parent directories. `walk` returns
/// every regular file under `root` in ascending path order and treats an
/// absent root as empty.
pub trait FileSystem {
    fn read(&self, path: &Path) -> Result<String>;

    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn remove(&mut self, path: &Path) -> Result<()>;

    fn rename(&mut self, from: &Path, to: &Path) -> Result<()>;

    fn walk(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
