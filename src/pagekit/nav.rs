//! Navigation rendering.
//!
//! [`render`] is a pure function from the current page set to the markup
//! that lives between the two nav markers. [`update`] splices that markup
//! into the nav fragment, preserving everything outside the markers.

use crate::page::{title_case, PageId};
use crate::textedit::{self, RegionOutcome};
use std::collections::BTreeMap;

pub const NAV_START: &str = "<!-- pagekit:nav -->";
pub const NAV_END: &str = "<!-- /pagekit:nav -->";

/// Renders the navigation block for the given pages.
///
/// Grouped pages (more than one segment) become one dropdown per first
/// segment, emitted in ascending key order with children in ascending id
/// order. A single-segment page whose name is also a group key renders as
/// the first entry of that dropdown, linking to its own route. Remaining
/// single pages follow all groups as plain links, ascending.
pub fn render(pages: &[PageId]) -> String {
    let mut groups: BTreeMap<&str, Vec<&PageId>> = BTreeMap::new();
    for page in pages.iter().filter(|p| p.is_grouped()) {
        groups.entry(page.group_key()).or_default().push(page);
    }

    let mut roots: BTreeMap<&str, &PageId> = BTreeMap::new();
    let mut singles: Vec<&PageId> = Vec::new();
    for page in pages.iter().filter(|p| !p.is_grouped()) {
        if groups.contains_key(page.as_str()) {
            roots.insert(page.as_str(), page);
        } else {
            singles.push(page);
        }
    }
    singles.sort();

    let mut lines: Vec<String> = Vec::new();
    for (key, children) in &mut groups {
        let mut children: Vec<&PageId> = std::mem::take(children);
        children.sort();

        lines.push("<li class=\"nav-item dropdown\">".to_string());
        lines.push(format!(
            "  <a class=\"nav-link dropdown-toggle\" href=\"#\" role=\"button\" data-toggle=\"dropdown\">{}</a>",
            title_case(key)
        ));
        lines.push("  <div class=\"dropdown-menu\">".to_string());
        if let Some(root) = roots.get(key) {
            lines.push(format!(
                "    <a class=\"dropdown-item\" href=\"{}\">{}</a>",
                root.url(),
                root.label()
            ));
        }
        for child in children {
            lines.push(format!(
                "    <a class=\"dropdown-item\" href=\"{}\">{}</a>",
                child.url(),
                child.label()
            ));
        }
        lines.push("  </div>".to_string());
        lines.push("</li>".to_string());
    }

    for page in singles {
        lines.push("<li class=\"nav-item\">".to_string());
        lines.push(format!(
            "  <a class=\"nav-link\" href=\"{}\">{}</a>",
            page.url(),
            page.label()
        ));
        lines.push("</li>".to_string());
    }

    lines.join("\n")
}

/// Replaces the marker-delimited nav block in `text` with a fresh render.
/// Falls back to inserting after the first `<ul` line, then to appending
/// at end of file, when the markers are missing.
pub fn update(text: &str, pages: &[PageId]) -> (String, RegionOutcome) {
    textedit::replace_region(text, NAV_START, NAV_END, &render(pages), |line| {
        line.trim_start().starts_with("<ul")
    })
}
