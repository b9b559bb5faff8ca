use serde::{Deserialize, Serialize};

use crate::toc::platform::Platform;

/// A single header harvested from a document, before anchor generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Heading depth, 1 = top level
    pub rank: usize,
    /// Display text with inline markup flattened
    pub text: String,
    /// 1-based line number within the scanned region
    pub line: usize,
    /// Origin document, set only when aggregating across files
    pub path: Option<String>,
    /// 0-based count of earlier same-named headers in the same document
    pub instance: usize,
}

/// A header together with its rendered markdown link
#[derive(Debug, Clone, PartialEq)]
pub struct AnchoredHeader {
    pub rank: usize,
    pub anchor: String,
}

/// Options accepted by the transform pipeline
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Anchor dialect to generate links for
    pub platform: Platform,
    /// Deepest markdown heading level to include (HTML headings are
    /// capped at 4 when this is not set)
    pub max_header_level: Option<usize>,
    /// Custom title for the generated section
    pub title: Option<String>,
    /// Omit the title line entirely
    pub no_title: bool,
    /// Bullet placed in front of every entry
    pub entry_prefix: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            platform: Platform::Github,
            max_header_level: None,
            title: None,
            no_title: false,
            entry_prefix: "-".to_string(),
        }
    }
}

/// Outcome of a transform run
#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    /// Whether the document text changed
    pub transformed: bool,
    /// Full updated document, present only when `transformed` is true
    pub data: Option<String>,
    /// Rendered TOC text, without the wrapping markers
    pub toc: Option<String>,
}
