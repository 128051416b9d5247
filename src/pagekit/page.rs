//! Page identifiers and the names derived from them.
//!
//! A [`PageId`] is the single source of truth for one page. The handler
//! function name, the URL path and the template path are all pure functions
//! of the id, so the three artifact files can always be located again from
//! the template directory alone.

use crate::error::{PageKitError, Result};
use std::fmt;
use std::str::FromStr;

/// Pages that can never be deleted or renamed and are excluded from
/// enumeration: the site skeleton owns them.
pub const PROTECTED_PAGES: &[&str] = &["home", "nav", "footer", "sidebar"];

/// Canonicalizes free-form user input: trims whitespace, lower-cases, and
/// drops leading, trailing and repeated slashes.
///
/// Total function: always yields *some* string (possibly empty). Validity
/// is checked separately by [`is_valid`].
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Checks the identifier grammar: every `/`-separated segment must start
/// with a letter and continue with letters, digits or underscores. The
/// empty string is invalid.
pub fn is_valid(id: &str) -> bool {
    !id.is_empty() && id.split('/').all(is_valid_segment)
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Canonical hierarchical identifier for one page, e.g. `reports/monthly`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(String);

impl PageId {
    /// Normalizes and validates raw input into a canonical id.
    pub fn new(raw: &str) -> Result<Self> {
        let id = normalize(raw);
        if !is_valid(&id) {
            return Err(PageKitError::InvalidPageId(raw.trim().to_string()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    pub fn is_protected(&self) -> bool {
        PROTECTED_PAGES.contains(&self.0.as_str())
    }

    /// `true` for ids with more than one segment.
    pub fn is_grouped(&self) -> bool {
        self.0.contains('/')
    }

    /// First segment; for grouped pages this is the navigation group key.
    pub fn group_key(&self) -> &str {
        self.0.split('/').next().unwrap_or(self.0.as_str())
    }

    /// Last segment.
    pub fn leaf(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(self.0.as_str())
    }

    /// All segments but the last, or `None` for single-segment ids.
    pub fn parent(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(parent, _)| parent)
    }

    /// A sibling id with the last segment replaced. Used by rename, whose
    /// new name is a bare segment without path separators.
    pub fn with_leaf(&self, leaf: &str) -> Result<Self> {
        match self.parent() {
            Some(parent) => Self::new(&format!("{}/{}", parent, leaf)),
            None => Self::new(leaf),
        }
    }

    /// Handler function name: segments joined by `_`. Unique key in the
    /// handler registry.
    pub fn handler_name(&self) -> String {
        self.0.replace('/', "_")
    }

    /// Externally visible URL path, without the leading slash: segments
    /// joined by `/`, each segment's `_` replaced by `-`.
    pub fn route_path(&self) -> String {
        self.segments()
            .map(|segment| segment.replace('_', "-"))
            .collect::<Vec<_>>()
            .join("/")
    }

    /// URL with the leading slash, as written into route entries and
    /// navigation links.
    pub fn url(&self) -> String {
        format!("/{}", self.route_path())
    }

    /// Template path relative to the templates root, e.g.
    /// `app/reports/monthly.html`. This is also the string handlers
    /// reference.
    pub fn template_ref(&self, app: &str, ext: &str) -> String {
        format!("{}/{}{}", app, self.0, ext)
    }

    /// Human-facing label: last segment with `_` → space, title-cased.
    pub fn label(&self) -> String {
        title_case(self.leaf())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageId {
    type Err = PageKitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// `_`-separated words capitalized and joined by spaces.
pub fn title_case(segment: &str) -> String {
    segment
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_collapses() {
        assert_eq!(normalize("  //Reports//Monthly/ "), "reports/monthly");
        assert_eq!(normalize("about"), "about");
        assert_eq!(normalize("/about/"), "about");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["  //Reports//Monthly/ ", "About", "a//b///c", "x_y/z"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn validity_grammar() {
        assert!(is_valid("about"));
        assert!(is_valid("reports/monthly"));
        assert!(is_valid("a1_b2/c3"));
        assert!(!is_valid(""));
        assert!(!is_valid("1abc"));
        assert!(!is_valid("reports/2024"));
        assert!(!is_valid("has space"));
        assert!(!is_valid("bad-dash"));
        assert!(!is_valid("dot.name"));
    }

    #[test]
    fn normalized_ids_stay_valid() {
        let id = PageId::new("  //Reports//Monthly/ ").unwrap();
        assert!(is_valid(id.as_str()));
        assert_eq!(normalize(id.as_str()), id.as_str());
    }

    #[test]
    fn derived_names() {
        let id = PageId::new("  //Reports//Monthly/ ").unwrap();
        assert_eq!(id.as_str(), "reports/monthly");
        assert_eq!(id.handler_name(), "reports_monthly");
        assert_eq!(id.route_path(), "reports/monthly");
        assert_eq!(id.url(), "/reports/monthly");
        assert_eq!(id.template_ref("app", ".html"), "app/reports/monthly.html");
    }

    #[test]
    fn route_path_rewrites_underscores() {
        let id = PageId::new("annual_report/q1_summary").unwrap();
        assert_eq!(id.handler_name(), "annual_report_q1_summary");
        assert_eq!(id.route_path(), "annual-report/q1-summary");
    }

    #[test]
    fn labels_are_title_cased_leaves() {
        assert_eq!(PageId::new("reports/monthly").unwrap().label(), "Monthly");
        assert_eq!(
            PageId::new("annual_report").unwrap().label(),
            "Annual Report"
        );
    }

    #[test]
    fn parent_and_leaf() {
        let id = PageId::new("reports/monthly").unwrap();
        assert_eq!(id.parent(), Some("reports"));
        assert_eq!(id.leaf(), "monthly");
        assert_eq!(id.group_key(), "reports");
        assert!(id.is_grouped());

        let flat = PageId::new("about").unwrap();
        assert_eq!(flat.parent(), None);
        assert_eq!(flat.leaf(), "about");
        assert!(!flat.is_grouped());
    }

    #[test]
    fn with_leaf_keeps_parent_path() {
        let id = PageId::new("reports/monthly").unwrap();
        assert_eq!(
            id.with_leaf("annual").unwrap().as_str(),
            "reports/annual"
        );
        let flat = PageId::new("about").unwrap();
        assert_eq!(flat.with_leaf("contact").unwrap().as_str(), "contact");
        assert!(id.with_leaf("9bad").is_err());
    }

    #[test]
    fn protected_set() {
        assert!(PageId::new("home").unwrap().is_protected());
        assert!(PageId::new("nav").unwrap().is_protected());
        assert!(PageId::new("footer").unwrap().is_protected());
        assert!(PageId::new("sidebar").unwrap().is_protected());
        assert!(!PageId::new("about").unwrap().is_protected());
        // Only whole ids are protected, not segments of grouped ids.
        assert!(!PageId::new("home/archive").unwrap().is_protected());
    }

    #[test]
    fn invalid_input_is_rejected() {
        assert!(PageId::new("").is_err());
        assert!(PageId::new("  / // ").is_err());
        assert!(PageId::new("1st").is_err());
        assert!(PageId::new("no spaces allowed").is_err());
    }
}
