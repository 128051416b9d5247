//! Literal text of the generated artifacts.
//!
//! Everything the synthesizer writes into a target site is assembled here:
//! the per-page handler block, route line and template stub, the delimited
//! keys used to find them again, and the skeleton files `init` seeds.

use crate::nav::{NAV_END, NAV_START};
use crate::page::PageId;

/// Handler stub appended to the handler registry for one page.
pub fn handler_block(id: &PageId, template_ref: &str) -> String {
    format!(
        "pub async fn {}() -> PageResponse {{\n    render(\"{}\")\n}}",
        id.handler_name(),
        template_ref
    )
}

/// The line prefix a handler is located by. The trailing `(` keeps a name
/// from matching handlers it is a prefix of.
pub fn handler_key(id: &PageId) -> String {
    format!("pub async fn {}(", id.handler_name())
}

/// Route line inserted before the registry's closing `]`.
pub fn route_line(id: &PageId) -> String {
    format!(
        "        PageRoute::new(\"{}\", \"{}\", handlers::{}),",
        id.handler_name(),
        id.url(),
        id.handler_name()
    )
}

/// The quoted route name a route entry is located by. The quotes keep a
/// name from matching entries it is a prefix of.
pub fn route_key(id: &PageId) -> String {
    format!("\"{}\"", id.handler_name())
}

/// The route registry's insertion anchor: a line containing only `]`.
pub fn is_route_anchor(line: &str) -> bool {
    line.trim() == "]"
}

/// Handler reference inside a route line, delimiter included.
pub fn route_handler_ref(id: &PageId) -> String {
    format!("handlers::{})", id.handler_name())
}

/// Template stub for a new page: extends the base layout and shows a
/// heading derived from the last path segment.
pub fn page_template(id: &PageId, base_ref: &str) -> String {
    let label = id.label();
    format!(
        "{{% extends \"{base}\" %}}\n\n{{% block title %}}{label}{{% endblock %}}\n\n{{% block content %}}\n<h1>{label}</h1>\n{{% endblock %}}\n",
        base = base_ref,
        label = label
    )
}

/// Handler registry skeleton, seeded with the protected `home` page.
pub fn handlers_skeleton(home_ref: &str) -> String {
    format!(
        "use crate::page::{{render, PageResponse}};\n\npub async fn home() -> PageResponse {{\n    render(\"{}\")\n}}\n",
        home_ref
    )
}

/// Route registry skeleton. The closing `]` line is the insertion anchor
/// every later route is placed before.
pub fn routes_skeleton() -> String {
    "use crate::handlers;\nuse crate::page::PageRoute;\n\npub fn page_routes() -> Vec<PageRoute> {\n    vec![\n        PageRoute::new(\"home\", \"/\", handlers::home),\n    ]\n}\n".to_string()
}

/// Base layout skeleton.
pub fn base_skeleton(app: &str, ext: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>{{% block title %}}Site{{% endblock %}}</title>\n  <link rel=\"stylesheet\" href=\"/static/css/site.css\">\n</head>\n<body>\n  {{% include \"{app}/nav{ext}\" %}}\n  <main class=\"container\">\n    {{% block content %}}{{% endblock %}}\n  </main>\n  {{% include \"{app}/footer{ext}\" %}}\n</body>\n</html>\n",
        app = app,
        ext = ext
    )
}

/// Nav fragment skeleton: markers present, block empty.
pub fn nav_skeleton() -> String {
    format!(
        "<nav class=\"navbar navbar-expand-lg\">\n  <a class=\"navbar-brand\" href=\"/\">Home</a>\n  <ul class=\"navbar-nav\">\n{start}\n{end}\n  </ul>\n</nav>\n",
        start = NAV_START,
        end = NAV_END
    )
}

pub fn footer_skeleton() -> String {
    "<footer class=\"footer\">\n  <span class=\"text-muted\">Built with pagekit.</span>\n</footer>\n".to_string()
}

/// Template for the protected `home` page.
pub fn home_skeleton(base_ref: &str) -> String {
    format!(
        "{{% extends \"{}\" %}}\n\n{{% block title %}}Home{{% endblock %}}\n\n{{% block content %}}\n<h1>Home</h1>\n<p>Your site is ready. Add pages with <code>pagekit create</code>.</p>\n{{% endblock %}}\n",
        base_ref
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> PageId {
        PageId::new(raw).unwrap()
    }

    #[test]
    fn handler_block_renders_template_ref() {
        let block = handler_block(&id("reports/monthly"), "app/reports/monthly.html");
        assert!(block.starts_with("pub async fn reports_monthly() -> PageResponse {"));
        assert!(block.contains("render(\"app/reports/monthly.html\")"));
        assert!(block.ends_with('}'));
    }

    #[test]
    fn keys_are_delimited() {
        assert_eq!(handler_key(&id("reports")), "pub async fn reports(");
        assert_eq!(route_key(&id("reports")), "\"reports\"");
        assert_eq!(route_handler_ref(&id("reports")), "handlers::reports)");
    }

    #[test]
    fn route_line_uses_dashed_url() {
        let line = route_line(&id("annual_report/q1"));
        assert_eq!(
            line.trim(),
            "PageRoute::new(\"annual_report_q1\", \"/annual-report/q1\", handlers::annual_report_q1),"
        );
    }

    #[test]
    fn skeletons_carry_their_anchors() {
        assert!(routes_skeleton().lines().any(is_route_anchor));
        assert!(nav_skeleton().contains(NAV_START));
        assert!(nav_skeleton().contains(NAV_END));
        assert!(base_skeleton("app", ".html").contains("{% include \"app/nav.html\" %}"));
    }

    #[test]
    fn page_template_extends_base() {
        let stub = page_template(&id("reports/monthly"), "app/base.html");
        assert!(stub.starts_with("{% extends \"app/base.html\" %}"));
        assert!(stub.contains("<h1>Monthly</h1>"));
        assert!(stub.contains("{% block title %}Monthly{% endblock %}"));
    }
}
