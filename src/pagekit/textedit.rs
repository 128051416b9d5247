//! Line-oriented editing primitives for the generated registry files.
//!
//! Registry entries are located by exact substring match on derived names
//! rather than structured parsing, so hand-edited files keep working. All
//! matching and splicing rules live here; callers pass predicates and the
//! delimited keys that make a match unambiguous (a `(` after a handler
//! name, quotes around a route name).
//!
//! Output always ends with a single trailing newline.

/// How [`replace_region`] placed the rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionOutcome {
    /// Both markers were present; content strictly between them replaced.
    Replaced,
    /// Markers were missing; block inserted after the container line.
    InsertedAfterContainer,
    /// Markers and container both missing; block appended at end of file.
    Appended,
}

fn join(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn split(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Index of the first line matching `pred`.
pub fn find_line<P: Fn(&str) -> bool>(text: &str, pred: P) -> Option<usize> {
    text.lines().position(pred)
}

pub fn has_line<P: Fn(&str) -> bool>(text: &str, pred: P) -> bool {
    find_line(text, pred).is_some()
}

/// Appends a block separated from existing content by one blank line.
pub fn append_block(text: &str, block: &str) -> String {
    let body = text.trim_end();
    let block = block.trim_end();
    if body.is_empty() {
        format!("{}\n", block)
    } else {
        format!("{}\n\n{}\n", body, block)
    }
}

/// Inserts `line` immediately before the first line matching `anchor`,
/// preserving everything else. `None` when no anchor line exists.
pub fn insert_before<P: Fn(&str) -> bool>(text: &str, anchor: P, line: &str) -> Option<String> {
    let mut lines = split(text);
    let at = lines.iter().position(|l| anchor(l))?;
    lines.insert(at, line.to_string());
    Some(join(&lines))
}

/// Removes the first line matching `pred`. `None` when no line matches.
pub fn remove_line<P: Fn(&str) -> bool>(text: &str, pred: P) -> Option<String> {
    let mut lines = split(text);
    let at = lines.iter().position(|l| pred(l))?;
    lines.remove(at);
    Some(join(&lines))
}

/// Removes a definition block: from the line matching `is_header` up to,
/// but not including, the next line matching `is_boundary` (or end of
/// file), trailing blank lines included. `None` when no header matches.
pub fn remove_block<H, B>(text: &str, is_header: H, is_boundary: B) -> Option<String>
where
    H: Fn(&str) -> bool,
    B: Fn(&str) -> bool,
{
    let mut lines = split(text);
    let start = lines.iter().position(|l| is_header(l))?;
    let end = lines[start + 1..]
        .iter()
        .position(|l| is_boundary(l))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());
    lines.drain(start..end);
    Some(join(&lines))
}

/// Replaces the first occurrence of `needle`. `None` when absent.
pub fn replace_first(text: &str, needle: &str, replacement: &str) -> Option<String> {
    let at = text.find(needle)?;
    let mut out = String::with_capacity(text.len() - needle.len() + replacement.len());
    out.push_str(&text[..at]);
    out.push_str(replacement);
    out.push_str(&text[at + needle.len()..]);
    Some(out)
}

/// Replaces the text strictly between the two marker lines with `body`,
/// leaving everything outside untouched. Markers are matched by trimmed
/// equality, so indentation around them does not matter.
///
/// When the markers are missing, the whole marked block is inserted after
/// the first line matching `container`; when that is missing too, it is
/// appended at end of file. Either fallback re-establishes the markers for
/// the next run.
pub fn replace_region<P: Fn(&str) -> bool>(
    text: &str,
    start_marker: &str,
    end_marker: &str,
    body: &str,
    container: P,
) -> (String, RegionOutcome) {
    let mut lines = split(text);
    let start = lines.iter().position(|l| l.trim() == start_marker);
    let end = start.and_then(|s| {
        lines[s + 1..]
            .iter()
            .position(|l| l.trim() == end_marker)
            .map(|offset| s + 1 + offset)
    });

    if let (Some(s), Some(e)) = (start, end) {
        let mut out = lines[..=s].to_vec();
        out.extend(body.lines().map(str::to_string));
        out.extend_from_slice(&lines[e..]);
        return (join(&out), RegionOutcome::Replaced);
    }

    let mut block: Vec<String> = Vec::with_capacity(body.lines().count() + 2);
    block.push(start_marker.to_string());
    block.extend(body.lines().map(str::to_string));
    block.push(end_marker.to_string());

    if let Some(at) = lines.iter().position(|l| container(l)) {
        lines.splice(at + 1..at + 1, block);
        (join(&lines), RegionOutcome::InsertedAfterContainer)
    } else {
        lines.extend(block);
        (join(&lines), RegionOutcome::Appended)
    }
}
