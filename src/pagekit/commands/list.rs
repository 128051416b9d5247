use crate::commands::{CmdResult, SitePaths};
use crate::error::Result;
use crate::store::FileSystem;

use super::helpers::listed_pages;

pub fn run<S: FileSystem>(store: &S, paths: &SitePaths) -> Result<CmdResult> {
    let listed = listed_pages(store, paths)?;
    Ok(CmdResult::default().with_listed_pages(listed))
}
