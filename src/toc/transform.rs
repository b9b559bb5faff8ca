use crate::toc::extract::{self, count_instances};
use crate::toc::platform::anchor_markdown;
use crate::toc::render::{self, DEFAULT_TITLE};
use crate::toc::section::{self, matches_end, matches_start, SectionInfo};
use crate::toc::types::{Header, TransformOptions, TransformResult};
use crate::utils::error::BoxResult;

/// Insert or refresh the TOC section of a markdown document.
///
/// With `main_headers` supplied, extraction is skipped and the given
/// list (already rank-normalized per source file and tagged with its
/// origin paths) is rendered instead. That is how an aggregate TOC
/// spanning several documents is produced.
///
/// Returns `transformed: false` when the document already carries an
/// identical TOC, so a second run over its own output is always a
/// byte-for-byte no-op.
pub fn transform(
    content: &str,
    options: &TransformOptions,
    main_headers: Option<Vec<Header>>,
) -> BoxResult<TransformResult> {
    let lines: Vec<&str> = content.split('\n').collect();
    let info = section::locate(&lines, matches_start, matches_end);

    if info.has_start() && !info.has_end() {
        log::warn!(
            "found a TOC start marker without a matching end marker, leaving the document untouched"
        );
        return Ok(no_change(None));
    }

    let current_toc = section::current_toc_text(&lines, &info);

    let headers = match main_headers {
        Some(headers) => headers,
        None => {
            let eligible = section::toc_eligible_lines(&lines, &info);
            extract::all_headers(eligible, options.max_header_level)
        }
    };
    let headers = count_instances(headers);

    if headers.is_empty() {
        return Ok(no_change(current_toc));
    }

    let anchored: Vec<_> = headers
        .iter()
        .map(|h| anchor_markdown(h, options.platform))
        .collect();

    let title = determine_title(options, &lines, &info);
    let toc = match render::render(
        &title,
        &anchored,
        &options.entry_prefix,
        options.platform.indent_unit(),
    ) {
        Some(toc) => toc,
        None => return Ok(no_change(current_toc)),
    };

    if current_toc.as_deref() == Some(toc.as_str()) {
        return Ok(TransformResult {
            transformed: false,
            data: None,
            toc: Some(toc),
        });
    }

    let data = section::update(content, &section::wrap(&toc));
    Ok(TransformResult {
        transformed: true,
        data: Some(data),
        toc: Some(toc),
    })
}

/// Collect every TOC-eligible header of a document, markdown and HTML
/// scans merged in source order. This is the harvesting entry point
/// for aggregate mode; the caller tags the results with the source
/// path and normalizes their ranks per file.
pub fn get_all_headers(content: &str, max_header_level: Option<usize>) -> Vec<Header> {
    let lines: Vec<&str> = content.split('\n').collect();
    let info = section::locate(&lines, matches_start, matches_end);
    let eligible = section::toc_eligible_lines(&lines, &info);

    extract::all_headers(eligible, max_header_level)
}

fn no_change(toc: Option<String>) -> TransformResult {
    TransformResult {
        transformed: false,
        data: None,
        toc,
    }
}

// An existing section's title line sits two lines below the start
// marker; reusing it preserves a user-customized title across runs.
fn determine_title(options: &TransformOptions, lines: &[&str], info: &SectionInfo) -> String {
    if options.no_title {
        return String::new();
    }
    if let Some(title) = &options.title {
        return title.clone();
    }

    match info.start_idx {
        Some(start) => lines
            .get(start + 2)
            .map_or_else(|| DEFAULT_TITLE.to_string(), |line| line.to_string()),
        None => DEFAULT_TITLE.to_string(),
    }
}
