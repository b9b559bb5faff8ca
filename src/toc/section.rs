use lazy_static::lazy_static;
use regex::Regex;

/// Opening marker pair of a generated TOC section. Kept byte-identical
/// to the markers doctoc writes, so documents maintained with either
/// tool keep round-tripping.
pub const START: &str = "<!-- START doctoc generated TOC please keep comment here to allow auto update -->\n<!-- DON'T EDIT THIS SECTION, INSTEAD RE-RUN doctoc TO UPDATE -->";

/// Closing marker of a generated TOC section
pub const END: &str = "<!-- END doctoc generated TOC please keep comment here to allow auto update -->";

lazy_static! {
    static ref START_MARKER: Regex = Regex::new(r"<!-- START doctoc ").unwrap();
    static ref END_MARKER: Regex = Regex::new(r"<!-- END doctoc ").unwrap();
}

/// Location of an existing TOC section within a document's lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionInfo {
    pub start_idx: Option<usize>,
    pub end_idx: Option<usize>,
}

impl SectionInfo {
    pub fn has_start(&self) -> bool {
        self.start_idx.is_some()
    }

    pub fn has_end(&self) -> bool {
        self.end_idx.is_some()
    }
}

/// Whether a line is the canonical start marker
pub fn matches_start(line: &str) -> bool {
    START_MARKER.is_match(line)
}

/// Whether a line is the canonical end marker
pub fn matches_end(line: &str) -> bool {
    END_MARKER.is_match(line)
}

/// Find the first start and end marker in `lines` using the given
/// predicates. Scanning stops at the first end match, so when both
/// markers are present the start index precedes the end index.
pub fn locate<S, E>(lines: &[&str], matches_start: S, matches_end: E) -> SectionInfo
where
    S: Fn(&str) -> bool,
    E: Fn(&str) -> bool,
{
    let mut info = SectionInfo::default();

    for (idx, line) in lines.iter().enumerate() {
        if info.start_idx.is_none() && matches_start(line) {
            info.start_idx = Some(idx);
        } else if matches_end(line) {
            info.end_idx = Some(idx);
            break;
        }
    }

    info
}

/// Rendered text of an existing TOC section, without the marker lines.
/// Only known for a well-formed marker pair.
pub fn current_toc_text(lines: &[&str], info: &SectionInfo) -> Option<String> {
    let (start, end) = match (info.start_idx, info.end_idx) {
        (Some(start), Some(end)) => (start, end),
        _ => return None,
    };

    // the section body sits below the two opening marker lines
    let inner_start = start + 2;
    if inner_start >= end {
        return Some(String::new());
    }

    Some(lines[inner_start..end].join("\n"))
}

/// Lines eligible for header extraction: everything after an existing
/// well-formed TOC section, or the whole document when there is none.
/// Headers inside or before a previous TOC never make it into a
/// regenerated one.
pub fn toc_eligible_lines<'a>(lines: &'a [&'a str], info: &SectionInfo) -> &'a [&'a str] {
    match (info.start_idx, info.end_idx) {
        (Some(_), Some(end)) => &lines[end + 1..],
        _ => lines,
    }
}

/// Wrap a rendered TOC in the canonical markers
pub fn wrap(toc: &str) -> String {
    format!("{}\n{}\n{}", START, toc, END)
}

/// Replace an existing TOC section with `section_text`, or insert it at
/// the top of the document when no start marker is present. Every other
/// line is preserved verbatim. Content carrying a start marker without
/// an end marker is returned unchanged, since the extent of the stale
/// section is unknown.
pub fn update(content: &str, section_text: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let info = locate(&lines, matches_start, matches_end);

    match (info.start_idx, info.end_idx) {
        (None, _) => format!("{}\n\n{}", section_text, content),
        (Some(_), None) => content.to_string(),
        (Some(start), Some(end)) => {
            let mut updated: Vec<&str> = Vec::with_capacity(lines.len());
            updated.extend_from_slice(&lines[..start]);
            updated.extend(section_text.split('\n'));
            updated.extend_from_slice(&lines[end + 1..]);
            updated.join("\n")
        }
    }
}
