use crate::commands::{CmdMessage, CmdResult, SitePaths};
use crate::error::Result;
use crate::page::PageId;
use crate::store::FileSystem;
use crate::stubs;
use std::path::Path;

/// Seeds the site skeleton the other commands operate on: both registries,
/// the base layout, the nav and footer fragments, and the protected `home`
/// page. Every file is skipped when it already exists, so re-running init
/// over a live site is safe.
pub fn run<S: FileSystem>(store: &mut S, paths: &SitePaths) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let home = PageId::new("home")?;
    let home_ref = paths.template_ref(&home);

    seed(
        store,
        paths.handlers_file(),
        &stubs::handlers_skeleton(&home_ref),
        &mut result,
    )?;
    seed(
        store,
        paths.routes_file(),
        &stubs::routes_skeleton(),
        &mut result,
    )?;
    seed(
        store,
        &paths.base_template(),
        &stubs::base_skeleton(&paths.app, &paths.template_ext),
        &mut result,
    )?;
    seed(store, &paths.nav_template(), &stubs::nav_skeleton(), &mut result)?;
    seed(
        store,
        &paths.footer_template(),
        &stubs::footer_skeleton(),
        &mut result,
    )?;
    seed(
        store,
        &paths.template_file(&home),
        &stubs::home_skeleton(&paths.base_ref()),
        &mut result,
    )?;

    Ok(result)
}

fn seed<S: FileSystem>(
    store: &mut S,
    path: &Path,
    contents: &str,
    result: &mut CmdResult,
) -> Result<()> {
    if store.exists(path) {
        result.add_message(CmdMessage::info(format!(
            "{} exists, skipped",
            path.display()
        )));
        return Ok(());
    }
    store.write(path, contents)?;
    result.add_message(CmdMessage::success(format!("Created {}", path.display())));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::list_pages;
    use crate::config::SiteConfig;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn site() -> (InMemoryStore, SitePaths) {
        (
            InMemoryStore::new(),
            SitePaths::new(PathBuf::from("/site"), &SiteConfig::default()),
        )
    }

    #[test]
    fn init_seeds_the_full_skeleton() {
        let (mut store, paths) = site();
        run(&mut store, &paths).unwrap();

        assert!(store.exists(paths.handlers_file()));
        assert!(store.exists(paths.routes_file()));
        assert!(store.exists(&paths.base_template()));
        assert!(store.exists(&paths.nav_template()));
        assert!(store.exists(&paths.footer_template()));
        assert!(store.exists(&paths.template_file(&PageId::new("home").unwrap())));

        // A fresh site has no listable pages: home is protected.
        assert!(list_pages(&store, &paths).unwrap().is_empty());
    }

    #[test]
    fn init_is_idempotent() {
        let (mut store, paths) = site();
        run(&mut store, &paths).unwrap();

        let marker = "<!-- hand edit -->\n";
        store.write(&paths.base_template(), marker).unwrap();

        let result = run(&mut store, &paths).unwrap();
        assert!(result
            .messages
            .iter()
            .all(|m| m.content.contains("exists, skipped")));
        assert_eq!(store.read(&paths.base_template()).unwrap(), marker);
    }
}
