//! Selection of pages by name, 1-based listing index, or index range.
//!
//! Delete (and the old side of rename) accept a mixed list of tokens:
//! page names, positions in the sorted listing, and inclusive ranges like
//! `3-5`. Parsing is total: anything that is not a number or a numeric
//! range is treated as a name and validated at resolution time, so one bad
//! token never aborts the rest of a batch.

use std::fmt;

/// One user token selecting pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelector {
    /// A page name; validity checked at resolution.
    Name(String),
    /// 1-based position in the sorted listing.
    Index(usize),
    /// Inclusive 1-based range.
    Range(usize, usize),
}

impl fmt::Display for PageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSelector::Name(name) => write!(f, "\"{}\"", name),
            PageSelector::Index(n) => write!(f, "{}", n),
            PageSelector::Range(a, b) => write!(f, "{}-{}", a, b),
        }
    }
}

/// Parses a single token. Never fails: non-numeric input is a name.
pub fn parse_token(token: &str) -> PageSelector {
    let token = token.trim();
    if let Ok(n) = token.parse::<usize>() {
        return PageSelector::Index(n);
    }
    if let Some((start, end)) = token.split_once('-') {
        if let (Ok(start), Ok(end)) = (start.parse::<usize>(), end.parse::<usize>()) {
            return PageSelector::Range(start, end);
        }
    }
    PageSelector::Name(token.to_string())
}
