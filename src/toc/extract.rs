use std::collections::HashMap;

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};
use lazy_static::lazy_static;
use regex::Regex;

use crate::toc::types::Header;

/// HTML headings deeper than this are skipped unless a limit is given
pub const DEFAULT_HTML_MAX_LEVEL: usize = 4;

lazy_static! {
    static ref HTML_HEADING: Regex =
        Regex::new(r"(?i)<h([1-6])(?:[^>]*)>(.*?)</h[1-6]\s*>").unwrap();

    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Comrak options for header scanning (GitHub Flavored Markdown).
/// Smart punctuation stays off: anchor slugs are derived from the raw
/// heading text.
fn scan_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    options
}

/// Extract markdown headers from `lines` via the comrak AST.
/// Markdown headings are unlimited by default; `max_header_level`
/// caps the included depth when given.
pub fn markdown_headers(lines: &[&str], max_header_level: Option<usize>) -> Vec<Header> {
    let arena = Arena::new();
    let options = scan_options();
    let root = parse_document(&arena, &lines.join("\n"), &options);

    let mut headers = Vec::new();
    for node in root.children() {
        let data = node.data.borrow();
        if let NodeValue::Heading(heading) = &data.value {
            let rank = heading.level as usize;
            if max_header_level.map_or(true, |max| rank <= max) {
                headers.push(Header {
                    rank,
                    text: flatten_heading(node),
                    line: data.sourcepos.start.line,
                    path: None,
                    instance: 0,
                });
            }
        }
    }

    headers
}

/// Extract single-line HTML headings (`<h1>`..`<h6>`) from `lines`,
/// capped at level 4 unless `max_header_level` overrides it
pub fn html_headers(lines: &[&str], max_header_level: Option<usize>) -> Vec<Header> {
    let max = max_header_level.unwrap_or(DEFAULT_HTML_MAX_LEVEL);

    let mut headers = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        for cap in HTML_HEADING.captures_iter(line) {
            let rank: usize = cap[1].parse().unwrap_or(0);
            if rank == 0 || rank > max {
                continue;
            }

            headers.push(Header {
                rank,
                text: TAG.replace_all(&cap[2], "").trim().to_string(),
                line: idx + 1,
                path: None,
                instance: 0,
            });
        }
    }

    headers
}

/// Both header scans merged, sorted ascending by source line. The sort
/// is stable so headers sharing a line keep their input order.
pub fn all_headers(lines: &[&str], max_header_level: Option<usize>) -> Vec<Header> {
    let mut headers = markdown_headers(lines, max_header_level);
    headers.append(&mut html_headers(lines, max_header_level));
    headers.sort_by_key(|h| h.line);
    headers
}

/// Number repeated header names in document order, grouped by origin
/// path. The resulting instance index keeps anchors for same-named
/// headers distinct.
pub fn count_instances(mut headers: Vec<Header>) -> Vec<Header> {
    let mut instances: HashMap<(String, String), usize> = HashMap::new();

    for header in &mut headers {
        let path = header.path.clone().unwrap_or_else(|| "*".to_string());
        let count = instances.entry((path, header.text.clone())).or_insert(0);
        header.instance = *count;
        *count += 1;
    }

    headers
}

/// Shift ranks so the shallowest header becomes rank 1, preserving
/// relative nesting. Applied per source document before headers from
/// several files are merged into one TOC.
pub fn normalize_ranks(headers: Vec<Header>) -> Vec<Header> {
    let lowest = match headers.iter().map(|h| h.rank).min() {
        Some(rank) => rank,
        None => return headers,
    };

    headers
        .into_iter()
        .map(|h| Header { rank: h.rank - lowest + 1, ..h })
        .collect()
}

/// Flatten a heading's inline content into display text: links keep
/// only their inner text, images degrade to a literal `*` (the anchor
/// ends up with a dash in its place), code spans and emphasis keep
/// their delimiters.
fn flatten_heading<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.children() {
        flatten_inline(child, &mut text);
    }
    text
}

fn flatten_inline<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => out.push_str(text),
        NodeValue::Code(code) => {
            out.push('`');
            out.push_str(&code.literal);
            out.push('`');
        }
        NodeValue::HtmlInline(html) => out.push_str(html),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
        NodeValue::Image(_) => out.push('*'),
        NodeValue::Link(_) => {
            for child in node.children() {
                flatten_inline(child, out);
            }
        }
        NodeValue::Emph => {
            out.push('*');
            for child in node.children() {
                flatten_inline(child, out);
            }
            out.push('*');
        }
        NodeValue::Strong => {
            out.push_str("**");
            for child in node.children() {
                flatten_inline(child, out);
            }
            out.push_str("**");
        }
        NodeValue::Strikethrough => {
            out.push_str("~~");
            for child in node.children() {
                flatten_inline(child, out);
            }
            out.push_str("~~");
        }
        // anything else contributes the text of its children, if any
        _ => {
            for child in node.children() {
                flatten_inline(child, out);
            }
        }
    }
}
