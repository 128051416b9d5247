use crate::commands::{CmdMessage, ListedPage, SitePaths};
use crate::error::Result;
use crate::page::{PageId, PROTECTED_PAGES};
use crate::selector::{parse_token, PageSelector};
use crate::store::FileSystem;
use std::path::Path;

/// Recovers the authoritative page set from the template directory.
///
/// Every file under `<templates>/<app>` with the template extension is a
/// page, except the literal base and nav fragment files and the protected
/// set. Returned sorted ascending; an absent directory means no pages.
pub fn list_pages<S: FileSystem>(store: &S, paths: &SitePaths) -> Result<Vec<PageId>> {
    let root = paths.app_templates_dir();
    let mut pages = Vec::new();

    for file in store.walk(&root)? {
        let Ok(relative) = file.strip_prefix(&root) else {
            continue;
        };
        let Some(stem) = template_stem(relative, &paths.template_ext) else {
            continue;
        };
        if stem == "base" || stem == "nav" {
            continue;
        }
        if PROTECTED_PAGES.contains(&stem.as_str()) {
            continue;
        }
        // Files that don't fit the id grammar are someone else's; skip them.
        if let Ok(id) = PageId::new(&stem) {
            if id.as_str() == stem {
                pages.push(id);
            }
        }
    }

    pages.sort();
    pages.dedup();
    Ok(pages)
}

/// Relative path → slash-joined stem without the template extension, or
/// `None` for files with a different extension.
fn template_stem(relative: &Path, ext: &str) -> Option<String> {
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    joined.strip_suffix(ext).map(str::to_string)
}

/// Pages paired with their 1-based listing positions.
pub fn listed_pages<S: FileSystem>(store: &S, paths: &SitePaths) -> Result<Vec<ListedPage>> {
    Ok(list_pages(store, paths)?
        .into_iter()
        .enumerate()
        .map(|(i, id)| ListedPage { index: i + 1, id })
        .collect())
}

/// Resolves a mixed token list (names, indices, ranges) against the
/// current sorted page set. Invalid and out-of-range tokens produce
/// warnings and are skipped; duplicates are silently dropped. Name tokens
/// resolve even when no such page exists, so downstream operations can
/// report not-found per artifact.
pub fn resolve_selectors<I: AsRef<str>>(
    pages: &[PageId],
    tokens: &[I],
) -> (Vec<PageId>, Vec<CmdMessage>) {
    let mut selected: Vec<PageId> = Vec::new();
    let mut messages = Vec::new();

    let select_index = |n: usize, selected: &mut Vec<PageId>, messages: &mut Vec<CmdMessage>| {
        if n >= 1 && n <= pages.len() {
            let id = pages[n - 1].clone();
            if !selected.contains(&id) {
                selected.push(id);
            }
        } else {
            messages.push(CmdMessage::warning(format!(
                "Index {} out of range (1-{}), skipped",
                n,
                pages.len()
            )));
        }
    };

    for token in tokens {
        match parse_token(token.as_ref()) {
            PageSelector::Index(n) => select_index(n, &mut selected, &mut messages),
            PageSelector::Range(start, end) => {
                if start == 0 || start > end {
                    messages.push(CmdMessage::warning(format!(
                        "Invalid range {}-{}, skipped",
                        start, end
                    )));
                    continue;
                }
                for n in start..=end {
                    select_index(n, &mut selected, &mut messages);
                }
            }
            PageSelector::Name(raw) => match PageId::new(&raw) {
                Ok(id) => {
                    if !selected.contains(&id) {
                        selected.push(id);
                    }
                }
                Err(e) => messages.push(CmdMessage::warning(format!("{}, skipped", e))),
            },
        }
    }

    (selected, messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::SiteFixture;

    fn ids(raw: &[&str]) -> Vec<PageId> {
        raw.iter().map(|r| PageId::new(r).unwrap()).collect()
    }

    #[test]
    fn enumeration_excludes_skeleton_and_protected() {
        let fixture = SiteFixture::new().with_pages(&["about", "reports/monthly"]);
        let pages = list_pages(&fixture.store, &fixture.paths).unwrap();
        assert_eq!(pages, ids(&["about", "reports/monthly"]));
    }

    #[test]
    fn enumeration_is_sorted_and_repeatable() {
        let fixture = SiteFixture::new().with_pages(&["zeta", "alpha", "mid/one"]);
        let first = list_pages(&fixture.store, &fixture.paths).unwrap();
        let second = list_pages(&fixture.store, &fixture.paths).unwrap();
        assert_eq!(first, ids(&["alpha", "mid/one", "zeta"]));
        assert_eq!(first, second);
    }

    #[test]
    fn absent_template_dir_means_no_pages() {
        let fixture = SiteFixture::new();
        let empty = crate::store::memory::InMemoryStore::new();
        let pages = list_pages(&empty, &fixture.paths).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn foreign_extensions_are_ignored() {
        let mut fixture = SiteFixture::new().with_pages(&["about"]);
        let stray = fixture.paths.app_templates_dir().join("notes.txt");
        fixture.store.write(&stray, "not a page").unwrap();
        let pages = list_pages(&fixture.store, &fixture.paths).unwrap();
        assert_eq!(pages, ids(&["about"]));
    }

    #[test]
    fn listing_is_one_based() {
        let fixture = SiteFixture::new().with_pages(&["b", "a"]);
        let listed = listed_pages(&fixture.store, &fixture.paths).unwrap();
        assert_eq!(listed[0].index, 1);
        assert_eq!(listed[0].id.as_str(), "a");
        assert_eq!(listed[1].index, 2);
        assert_eq!(listed[1].id.as_str(), "b");
    }

    #[test]
    fn resolves_mixed_tokens() {
        let pages = ids(&["a", "b", "c", "d", "e"]);
        let (selected, messages) = resolve_selectors(&pages, &["3-4", "a", "9"]);
        assert_eq!(selected, ids(&["c", "d", "a"]));
        assert_eq!(messages.len(), 1);
        assert!(messages[0].content.contains("9"));
    }

    #[test]
    fn range_duplicates_are_dropped() {
        let pages = ids(&["a", "b", "c", "d", "e"]);
        let (selected, messages) = resolve_selectors(&pages, &["3-4", "3", "d"]);
        assert_eq!(selected, ids(&["c", "d"]));
        assert!(messages.is_empty());
    }

    #[test]
    fn invalid_tokens_warn_but_do_not_abort() {
        let pages = ids(&["a", "b"]);
        let (selected, messages) = resolve_selectors(&pages, &["5-3", "0", "9 bad", "b"]);
        assert_eq!(selected, ids(&["b"]));
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn name_tokens_resolve_even_when_page_is_missing() {
        let pages = ids(&["a"]);
        let (selected, messages) = resolve_selectors(&pages, &["ghost"]);
        assert_eq!(selected, ids(&["ghost"]));
        assert!(messages.is_empty());
    }
}
