use super::FileSystem;
use crate::error::{PageKitError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: BTreeMap<PathBuf, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(path: &Path) -> PageKitError {
    PageKitError::Store(format!("file not found: {}", path.display()))
}

impl FileSystem for InMemoryStore {
    fn read(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn remove(&mut self, path: &Path) -> Result<()> {
        if self.files.remove(path).is_none() {
            return Err(not_found(path));
        }
        Ok(())
    }

    fn rename(&mut self, from: &Path, to: &Path) -> Result<()> {
        let contents = self.files.remove(from).ok_or_else(|| not_found(from))?;
        self.files.insert(to.to_path_buf(), contents);
        Ok(())
    }

    fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        // BTreeMap iteration keeps the ascending path order walk promises.
        Ok(self
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::commands::{init, SitePaths};
    use crate::config::SiteConfig;
    use crate::page::PageId;

    /// An initialized in-memory site plus its resolved paths.
    pub struct SiteFixture {
        pub store: InMemoryStore,
        pub paths: SitePaths,
    }

    impl Default for SiteFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SiteFixture {
        /// A site with the skeleton seeded (registries, base, nav, footer,
        /// home), as `pagekit init` leaves it.
        pub fn new() -> Self {
            let paths = SitePaths::new(PathBuf::from("/site"), &SiteConfig::default());
            let mut store = InMemoryStore::new();
            init::run(&mut store, &paths).expect("init fixture site");
            Self { store, paths }
        }

        /// Adds pages through the create command, panicking on invalid ids.
        pub fn with_pages(mut self, ids: &[&str]) -> Self {
            let ids: Vec<PageId> = ids
                .iter()
                .map(|raw| PageId::new(raw).expect("valid fixture page id"))
                .collect();
            crate::commands::create::run(&mut self.store, &self.paths, &ids)
                .expect("create fixture pages");
            self
        }
    }
}
