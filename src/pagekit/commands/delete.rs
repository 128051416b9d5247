use crate::commands::{CmdMessage, CmdResult, SitePaths};
use crate::error::Result;
use crate::page::PageId;
use crate::store::FileSystem;
use crate::stubs;
use crate::textedit;

/// Removes the three artifacts for each page. Protected pages are refused
/// outright; missing artifacts are warned about and treated as done.
pub fn run<S: FileSystem>(store: &mut S, paths: &SitePaths, ids: &[PageId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for id in ids {
        if id.is_protected() {
            result.add_message(CmdMessage::error(format!(
                "Page '{}' is protected and cannot be deleted",
                id
            )));
            continue;
        }
        delete_handler(store, paths, id, &mut result)?;
        delete_template(store, paths, id, &mut result)?;
        delete_route(store, paths, id, &mut result)?;
        result.affected_pages.push(id.clone());
    }
    Ok(result)
}

fn delete_handler<S: FileSystem>(
    store: &mut S,
    paths: &SitePaths,
    id: &PageId,
    result: &mut CmdResult,
) -> Result<()> {
    let file = paths.handlers_file();
    if !store.exists(file) {
        result.add_message(CmdMessage::warning(format!(
            "Handler registry {} not found, nothing to delete for '{}'",
            file.display(),
            id
        )));
        return Ok(());
    }

    let text = store.read(file)?;
    let key = stubs::handler_key(id);
    match textedit::remove_block(
        &text,
        |line| line.starts_with(&key),
        |line| line.starts_with("pub async fn "),
    ) {
        Some(updated) => {
            store.write(file, &updated)?;
            result.add_message(CmdMessage::success(format!(
                "Handler {} removed",
                id.handler_name()
            )));
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Handler {} not found, skipped",
                id.handler_name()
            )));
        }
    }
    Ok(())
}

fn delete_template<S: FileSystem>(
    store: &mut S,
    paths: &SitePaths,
    id: &PageId,
    result: &mut CmdResult,
) -> Result<()> {
    let file = paths.template_file(id);
    if !store.exists(&file) {
        result.add_message(CmdMessage::warning(format!(
            "Template {} not found, skipped",
            paths.template_ref(id)
        )));
        return Ok(());
    }

    store.remove(&file)?;
    result.add_message(CmdMessage::success(format!(
        "Template {} removed",
        paths.template_ref(id)
    )));
    Ok(())
}

fn delete_route<S: FileSystem>(
    store: &mut S,
    paths: &SitePaths,
    id: &PageId,
    result: &mut CmdResult,
) -> Result<()> {
    let file = paths.routes_file();
    if !store.exists(file) {
        result.add_message(CmdMessage::warning(format!(
            "Route registry {} not found, nothing to delete for '{}'",
            file.display(),
            id
        )));
        return Ok(());
    }

    let text = store.read(file)?;
    let key = stubs::route_key(id);
    match textedit::remove_line(&text, |line| line.contains(&key)) {
        Some(updated) => {
            store.write(file, &updated)?;
            result.add_message(CmdMessage::success(format!("Route {} removed", id.url())));
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Route {} not found, skipped",
                id.url()
            )));
        }
    }
    Ok(())
}
