use crate::commands::{CmdMessage, CmdResult, SitePaths};
use crate::error::Result;
use crate::page::PageId;
use crate::store::FileSystem;
use crate::stubs;
use crate::textedit;

/// Renames a page across its three artifacts.
///
/// Registry entries are updated by textual substitution of the derived
/// names; the template file is physically moved so its content survives.
/// Each artifact is handled independently: a missing one produces a
/// warning while the others still update. The whole rename is refused
/// when the old page is protected, old and new are equal, or a file
/// already occupies the destination template path.
pub fn run<S: FileSystem>(
    store: &mut S,
    paths: &SitePaths,
    old: &PageId,
    new: &PageId,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if old.is_protected() {
        result.add_message(CmdMessage::error(format!(
            "Page '{}' is protected and cannot be renamed",
            old
        )));
        return Ok(result);
    }
    if old == new {
        result.add_message(CmdMessage::warning(format!(
            "'{}' already has that name, nothing to do",
            old
        )));
        return Ok(result);
    }
    if store.exists(&paths.template_file(new)) {
        result.add_message(CmdMessage::warning(format!(
            "Template {} already exists, rename refused",
            paths.template_ref(new)
        )));
        return Ok(result);
    }

    rename_handler(store, paths, old, new, &mut result)?;
    rename_route(store, paths, old, new, &mut result)?;
    rename_template(store, paths, old, new, &mut result)?;

    result.affected_pages.push(new.clone());
    result.add_message(CmdMessage::success(format!("Renamed {} -> {}", old, new)));
    Ok(result)
}

fn rename_handler<S: FileSystem>(
    store: &mut S,
    paths: &SitePaths,
    old: &PageId,
    new: &PageId,
    result: &mut CmdResult,
) -> Result<()> {
    let file = paths.handlers_file();
    if !store.exists(file) {
        result.add_message(CmdMessage::warning(format!(
            "Handler registry {} not found, skipped",
            file.display()
        )));
        return Ok(());
    }

    let text = store.read(file)?;
    let Some(mut updated) =
        textedit::replace_first(&text, &stubs::handler_key(old), &stubs::handler_key(new))
    else {
        result.add_message(CmdMessage::warning(format!(
            "Handler {} not found, registry left untouched",
            old.handler_name()
        )));
        return Ok(());
    };

    let old_ref = format!("\"{}\"", paths.template_ref(old));
    let new_ref = format!("\"{}\"", paths.template_ref(new));
    if let Some(with_ref) = textedit::replace_first(&updated, &old_ref, &new_ref) {
        updated = with_ref;
    }

    store.write(file, &updated)?;
    result.add_message(CmdMessage::success(format!(
        "Handler {} -> {}",
        old.handler_name(),
        new.handler_name()
    )));
    Ok(())
}

fn rename_route<S: FileSystem>(
    store: &mut S,
    paths: &SitePaths,
    old: &PageId,
    new: &PageId,
    result: &mut CmdResult,
) -> Result<()> {
    let file = paths.routes_file();
    if !store.exists(file) {
        result.add_message(CmdMessage::warning(format!(
            "Route registry {} not found, skipped",
            file.display()
        )));
        return Ok(());
    }

    let text = store.read(file)?;
    let Some(mut updated) =
        textedit::replace_first(&text, &stubs::route_key(old), &stubs::route_key(new))
    else {
        result.add_message(CmdMessage::warning(format!(
            "Route {} not found, registry left untouched",
            old.url()
        )));
        return Ok(());
    };

    let old_url = format!("\"{}\"", old.url());
    let new_url = format!("\"{}\"", new.url());
    if let Some(with_url) = textedit::replace_first(&updated, &old_url, &new_url) {
        updated = with_url;
    }
    if let Some(with_handler) = textedit::replace_first(
        &updated,
        &stubs::route_handler_ref(old),
        &stubs::route_handler_ref(new),
    ) {
        updated = with_handler;
    }

    store.write(file, &updated)?;
    result.add_message(CmdMessage::success(format!(
        "Route {} -> {}",
        old.url(),
        new.url()
    )));
    Ok(())
}

fn rename_template<S: FileSystem>(
    store: &mut S,
    paths: &SitePaths,
    old: &PageId,
    new: &PageId,
    result: &mut CmdResult,
) -> Result<()> {
    let from = paths.template_file(old);
    if !store.exists(&from) {
        result.add_message(CmdMessage::warning(format!(
            "Template {} not found, skipped",
            paths.template_ref(old)
        )));
        return Ok(());
    }

    store.rename(&from, &paths.template_file(new))?;
    result.add_message(CmdMessage::success(format!(
        "Template {} -> {}",
        paths.template_ref(old),
        paths.template_ref(new)
    )));
    Ok(())
}
