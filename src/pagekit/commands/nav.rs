use crate::commands::{CmdMessage, CmdResult, SitePaths};
use crate::error::Result;
use crate::nav;
use crate::store::FileSystem;
use crate::textedit::RegionOutcome;

use super::helpers::list_pages;

/// Re-renders the navigation block from a fresh enumeration of the page
/// set. Idempotent: rendering the same set twice leaves the file as is.
pub fn run<S: FileSystem>(store: &mut S, paths: &SitePaths) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let file = paths.nav_template();
    if !store.exists(&file) {
        result.add_message(CmdMessage::warning(format!(
            "Nav fragment {} not found; run `pagekit init` first",
            file.display()
        )));
        return Ok(result);
    }

    let pages = list_pages(store, paths)?;
    let text = store.read(&file)?;
    let (updated, outcome) = nav::update(&text, &pages);

    if updated == text {
        result.add_message(CmdMessage::info(format!(
            "Navigation already up to date ({} pages)",
            pages.len()
        )));
        return Ok(result);
    }

    store.write(&file, &updated)?;
    match outcome {
        RegionOutcome::Replaced => {
            result.add_message(CmdMessage::success(format!(
                "Navigation updated ({} pages)",
                pages.len()
            )));
        }
        RegionOutcome::InsertedAfterContainer => {
            result.add_message(CmdMessage::warning(
                "Nav markers were missing; block re-inserted after the list container",
            ));
        }
        RegionOutcome::Appended => {
            result.add_message(CmdMessage::warning(
                "Nav markers and list container were missing; block appended at end of file",
            ));
        }
    }
    Ok(result)
}
