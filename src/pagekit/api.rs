//! # API Facade
//!
//! Single entry point for all pagekit operations, regardless of the UI in
//! front of it. The facade normalizes raw user input (free-form ids,
//! selector tokens) into validated [`PageId`]s, dispatches to the command
//! layer, and re-renders navigation after every mutating batch, keeping
//! the enumerate/mutate/re-render cycle out of the commands themselves.
//!
//! Generic over [`FileSystem`] so the whole stack runs against
//! `InMemoryStore` in tests and `DiskStore` in production. No stdout, no
//! stderr, no process exits: structured `Result<CmdResult>` only.

pub use crate::commands::{CmdMessage, CmdResult, ListedPage, MessageLevel, SitePaths};
use crate::commands::{self, helpers};
use crate::error::Result;
use crate::page::PageId;
use crate::store::FileSystem;

/// The main API facade for pagekit operations.
pub struct PageKitApi<S: FileSystem> {
    store: S,
    paths: SitePaths,
}

impl<S: FileSystem> PageKitApi<S> {
    pub fn new(store: S, paths: SitePaths) -> Self {
        Self { store, paths }
    }

    pub fn paths(&self) -> &SitePaths {
        &self.paths
    }

    /// Seed the site skeleton (registries, base, nav, footer, home).
    pub fn init_site(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store, &self.paths)
    }

    /// Create pages from raw identifiers. Invalid ids are warned about and
    /// skipped; the rest are created and navigation is refreshed.
    pub fn create_pages<I: AsRef<str>>(&mut self, raw_ids: &[I]) -> Result<CmdResult> {
        let mut result = CmdResult::default();

        let mut ids: Vec<PageId> = Vec::new();
        for raw in raw_ids {
            match PageId::new(raw.as_ref()) {
                Ok(id) => {
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
                Err(e) => result.add_message(CmdMessage::warning(format!("{}, skipped", e))),
            }
        }

        if !ids.is_empty() {
            result.merge(commands::create::run(&mut self.store, &self.paths, &ids)?);
            result.merge(commands::nav::run(&mut self.store, &self.paths)?);
        }
        Ok(result)
    }

    /// Delete pages selected by a mixed token list (names, 1-based
    /// indices, inclusive ranges), then refresh navigation.
    pub fn delete_pages<I: AsRef<str>>(&mut self, tokens: &[I]) -> Result<CmdResult> {
        let pages = helpers::list_pages(&self.store, &self.paths)?;
        let (ids, warnings) = helpers::resolve_selectors(&pages, tokens);

        let mut result = CmdResult::default();
        result.messages.extend(warnings);

        if !ids.is_empty() {
            result.merge(commands::delete::run(&mut self.store, &self.paths, &ids)?);
            result.merge(commands::nav::run(&mut self.store, &self.paths)?);
        }
        Ok(result)
    }

    /// Rename one page. `old_token` is a name or listing index; `new_name`
    /// is a bare segment (no `/`) that replaces the old last segment.
    pub fn rename_page(&mut self, old_token: &str, new_name: &str) -> Result<CmdResult> {
        let mut result = CmdResult::default();

        let new_name = new_name.trim();
        if new_name.contains('/') {
            result.add_message(CmdMessage::warning(
                "New name must be a bare page name without '/'",
            ));
            return Ok(result);
        }

        let pages = helpers::list_pages(&self.store, &self.paths)?;
        let (ids, warnings) = helpers::resolve_selectors(&pages, &[old_token]);
        result.messages.extend(warnings);
        let Some(old) = ids.into_iter().next() else {
            return Ok(result);
        };

        let new = match old.with_leaf(new_name) {
            Ok(new) => new,
            Err(e) => {
                result.add_message(CmdMessage::warning(format!("{}, skipped", e)));
                return Ok(result);
            }
        };

        result.merge(commands::rename::run(
            &mut self.store,
            &self.paths,
            &old,
            &new,
        )?);
        result.merge(commands::nav::run(&mut self.store, &self.paths)?);
        Ok(result)
    }

    /// Current page set with 1-based listing indices.
    pub fn list_pages(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.paths)
    }

    /// Regenerate the navigation block only.
    pub fn refresh_nav(&mut self) -> Result<CmdResult> {
        commands::nav::run(&mut self.store, &self.paths)
    }
}
