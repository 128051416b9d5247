use crate::commands::{CmdMessage, CmdResult, SitePaths};
use crate::error::Result;
use crate::page::PageId;
use crate::store::FileSystem;
use crate::stubs;
use crate::textedit;

/// Creates the three artifacts for each page. Every artifact is checked
/// against current state first, so re-running over existing pages is a
/// reported no-op, and one conflicting artifact never blocks the others.
pub fn run<S: FileSystem>(store: &mut S, paths: &SitePaths, ids: &[PageId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for id in ids {
        create_handler(store, paths, id, &mut result)?;
        create_template(store, paths, id, &mut result)?;
        create_route(store, paths, id, &mut result)?;
        result.affected_pages.push(id.clone());
    }
    Ok(result)
}

fn create_handler<S: FileSystem>(
    store: &mut S,
    paths: &SitePaths,
    id: &PageId,
    result: &mut CmdResult,
) -> Result<()> {
    let file = paths.handlers_file();
    if !store.exists(file) {
        result.add_message(CmdMessage::warning(format!(
            "Handler registry {} not found, skipped handler for '{}'",
            file.display(),
            id
        )));
        return Ok(());
    }

    let text = store.read(file)?;
    let key = stubs::handler_key(id);
    if textedit::has_line(&text, |line| line.starts_with(&key)) {
        result.add_message(CmdMessage::info(format!(
            "Handler {} already exists, skipped",
            id.handler_name()
        )));
        return Ok(());
    }

    let block = stubs::handler_block(id, &paths.template_ref(id));
    store.write(file, &textedit::append_block(&text, &block))?;
    result.add_message(CmdMessage::success(format!(
        "Handler {} added",
        id.handler_name()
    )));
    Ok(())
}

fn create_template<S: FileSystem>(
    store: &mut S,
    paths: &SitePaths,
    id: &PageId,
    result: &mut CmdResult,
) -> Result<()> {
    let file = paths.template_file(id);
    if store.exists(&file) {
        result.add_message(CmdMessage::info(format!(
            "Template {} already exists, skipped",
            paths.template_ref(id)
        )));
        return Ok(());
    }

    store.write(&file, &stubs::page_template(id, &paths.base_ref()))?;
    result.add_message(CmdMessage::success(format!(
        "Template {} created",
        paths.template_ref(id)
    )));
    Ok(())
}

fn create_route<S: FileSystem>(
    store: &mut S,
    paths: &SitePaths,
    id: &PageId,
    result: &mut CmdResult,
) -> Result<()> {
    let file = paths.routes_file();
    if !store.exists(file) {
        result.add_message(CmdMessage::warning(format!(
            "Route registry {} not found, skipped route for '{}'",
            file.display(),
            id
        )));
        return Ok(());
    }

    let text = store.read(file)?;
    let key = stubs::route_key(id);
    if textedit::has_line(&text, |line| line.contains(&key)) {
        result.add_message(CmdMessage::info(format!(
            "Route {} already exists, skipped",
            id.url()
        )));
        return Ok(());
    }

    match textedit::insert_before(&text, stubs::is_route_anchor, &stubs::route_line(id)) {
        Some(updated) => {
            store.write(file, &updated)?;
            result.add_message(CmdMessage::success(format!("Route {} added", id.url())));
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Route registry {} has no closing ] anchor, skipped route for '{}'",
                file.display(),
                id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::list_pages;
    use crate::store::memory::fixtures::SiteFixture;

    fn id(raw: &str) -> PageId {
        PageId::new(raw).unwrap()
    }

    #[test]
    fn create_produces_all_three_artifacts() {
        let mut fixture = SiteFixture::new();
        run(
            &mut fixture.store,
            &fixture.paths,
            &[id("reports/monthly")],
        )
        .unwrap();

        let handlers = fixture.store.read(fixture.paths.handlers_file()).unwrap();
        assert!(handlers.contains("pub async fn reports_monthly()"));
        assert!(handlers.contains("render(\"app/reports/monthly.html\")"));

        let routes = fixture.store.read(fixture.paths.routes_file()).unwrap();
        assert!(routes.contains("PageRoute::new(\"reports_monthly\", \"/reports/monthly\""));

        let template = fixture
            .store
            .read(&fixture.paths.template_file(&id("reports/monthly")))
            .unwrap();
        assert!(template.contains("{% extends \"app/base.html\" %}"));
        assert!(template.contains("<h1>Monthly</h1>"));

        let pages = list_pages(&fixture.store, &fixture.paths).unwrap();
        assert_eq!(pages, vec![id("reports/monthly")]);
    }

    #[test]
    fn routes_are_inserted_before_the_anchor_in_order() {
        let mut fixture = SiteFixture::new();
        run(&mut fixture.store, &fixture.paths, &[id("alpha"), id("beta")]).unwrap();

        let routes = fixture.store.read(fixture.paths.routes_file()).unwrap();
        let alpha = routes.find("\"alpha\"").unwrap();
        let beta = routes.find("\"beta\"").unwrap();
        let anchor = routes.rfind("    ]").unwrap();
        assert!(alpha < beta && beta < anchor);
    }

    #[test]
    fn second_create_is_a_reported_noop() {
        let mut fixture = SiteFixture::new();
        run(&mut fixture.store, &fixture.paths, &[id("about")]).unwrap();

        let handlers_before = fixture.store.read(fixture.paths.handlers_file()).unwrap();
        let routes_before = fixture.store.read(fixture.paths.routes_file()).unwrap();
        let template_before = fixture
            .store
            .read(&fixture.paths.template_file(&id("about")))
            .unwrap();

        let result = run(&mut fixture.store, &fixture.paths, &[id("about")]).unwrap();
        assert!(result
            .messages
            .iter()
            .all(|m| m.content.contains("already exists")));

        assert_eq!(
            fixture.store.read(fixture.paths.handlers_file()).unwrap(),
            handlers_before
        );
        assert_eq!(
            fixture.store.read(fixture.paths.routes_file()).unwrap(),
            routes_before
        );
        assert_eq!(
            fixture
                .store
                .read(&fixture.paths.template_file(&id("about")))
                .unwrap(),
            template_before
        );
    }

    #[test]
    fn missing_registries_warn_but_template_is_still_written() {
        let mut fixture = SiteFixture::new();
        fixture.store.remove(fixture.paths.handlers_file()).unwrap();
        fixture.store.remove(fixture.paths.routes_file()).unwrap();

        let result = run(&mut fixture.store, &fixture.paths, &[id("about")]).unwrap();
        let warnings = result
            .messages
            .iter()
            .filter(|m| m.content.contains("not found"))
            .count();
        assert_eq!(warnings, 2);
        assert!(fixture
            .store
            .exists(&fixture.paths.template_file(&id("about"))));
    }

    #[test]
    fn prefix_handler_names_do_not_collide() {
        let mut fixture = SiteFixture::new().with_pages(&["reports"]);
        let result = run(&mut fixture.store, &fixture.paths, &[id("reports/monthly")]).unwrap();
        assert!(result
            .messages
            .iter()
            .all(|m| !m.content.contains("already exists")));

        let handlers = fixture.store.read(fixture.paths.handlers_file()).unwrap();
        assert!(handlers.contains("pub async fn reports()"));
        assert!(handlers.contains("pub async fn reports_monthly()"));
    }
}
