use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::toc::types::{AnchoredHeader, Header};
use crate::utils::error::MdtocError;

lazy_static! {
    // Percent escape sequences are dropped before slugging
    static ref ESCAPE_CODE: Regex = Regex::new(r"(?i)%[0-9a-f]{2}").unwrap();

    static ref PUNCTUATION: Regex =
        Regex::new(r#"[/?!:\[\]`.,()*"';{}+=<>~$|#@&–—]"#).unwrap();

    static ref CJK_PUNCTUATION: Regex =
        Regex::new("[。？！，、；：“”【】（）〔〕［］﹃﹄‘’﹁﹂—…－～《》〈〉「」　]").unwrap();

    static ref NODEJS_PUNCTUATION: Regex =
        Regex::new(r#"[/?!:\[\]`.,()*"';{}+=<>~$|#@]"#).unwrap();

    static ref GHOST_PUNCTUATION: Regex =
        Regex::new(r#"[/?!:\[\]`.,()*"';{}\-+=<>~$|#@&^%\\]"#).unwrap();

    static ref DASH_RUN: Regex = Regex::new(r"-{2,}").unwrap();
}

/// Anchor-slug dialects of the supported hosting platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Github,
    Bitbucket,
    Gitlab,
    Nodejs,
    Ghost,
}

impl Platform {
    /// Canonical identifier used to select this platform
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Github => "github.com",
            Platform::Bitbucket => "bitbucket.org",
            Platform::Gitlab => "gitlab.com",
            Platform::Nodejs => "nodejs.org",
            Platform::Ghost => "ghost.org",
        }
    }

    /// Indentation for one nesting level of a rendered entry.
    /// Bitbucket and GitLab require four spaces.
    pub fn indent_unit(&self) -> &'static str {
        match self {
            Platform::Bitbucket | Platform::Gitlab => "    ",
            _ => "  ",
        }
    }

    /// Derive the anchor slug for a header text. `instance` is the
    /// 0-based occurrence index disambiguating repeated header names
    /// within one document.
    pub fn slug(&self, text: &str, instance: usize) -> String {
        let text = ascii_lowercase(text.trim());

        match self {
            Platform::Github => {
                let mut slug = basic_id(&text);
                if instance > 0 {
                    slug.push_str(&format!("-{}", instance));
                }
                strip_emoji(&slug)
            }
            Platform::Gitlab => {
                let mut slug = basic_id(&text);
                if instance > 0 {
                    slug.push_str(&format!("-{}", instance));
                }
                // gitlab collapses consecutive hyphens
                DASH_RUN.replace_all(&slug, "-").into_owned()
            }
            Platform::Bitbucket => {
                let mut slug = format!("markdown-header-{}", basic_id(&text));
                if instance > 0 {
                    slug.push_str(&format!("_{}", instance));
                }
                slug
            }
            Platform::Nodejs => {
                let mut slug = nodejs_id(&text);
                if instance > 0 {
                    slug.push_str(&format!("_{}", instance));
                }
                slug
            }
            Platform::Ghost => {
                let mut slug = ghost_id(&text);
                if instance > 0 {
                    slug.push_str(&format!("-{}", instance));
                }
                slug
            }
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Platform {
    type Err = MdtocError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id {
            "github.com" => Ok(Platform::Github),
            "bitbucket.org" => Ok(Platform::Bitbucket),
            "gitlab.com" => Ok(Platform::Gitlab),
            "nodejs.org" => Ok(Platform::Nodejs),
            "ghost.org" => Ok(Platform::Ghost),
            other => Err(MdtocError::UnsupportedPlatform(other.to_string())),
        }
    }
}

/// Render the markdown link for a header on the given platform
pub fn anchor_markdown(header: &Header, platform: Platform) -> AnchoredHeader {
    let slug = platform.slug(&header.text, header.instance);
    let mut href = urlencoding::encode(&slug).into_owned();

    if platform == Platform::Github {
        // github keeps the zero width joiner intact in its anchors
        href = href.replace("%E2%80%8D", "\u{200D}");
    }

    let anchor = match &header.path {
        Some(path) => format!("[{}]({}#{})", header.text, path, href),
        None => format!("[{}](#{})", header.text, href),
    };

    AnchoredHeader { rank: header.rank, anchor }
}

// Only A-Z is folded; the platforms leave non-ASCII case alone.
fn ascii_lowercase(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c })
        .collect()
}

fn basic_id(text: &str) -> String {
    let hyphenated = text.replace(' ', "-");
    let stripped = ESCAPE_CODE.replace_all(&hyphenated, "");
    let stripped = PUNCTUATION.replace_all(&stripped, "");
    CJK_PUNCTUATION.replace_all(&stripped, "").into_owned()
}

fn nodejs_id(text: &str) -> String {
    let underscored = text.replace(' ', "_");
    let stripped = ESCAPE_CODE.replace_all(&underscored, "");
    NODEJS_PUNCTUATION.replace_all(&stripped, "").into_owned()
}

fn ghost_id(text: &str) -> String {
    let joined = text.replace(' ', "");
    GHOST_PUNCTUATION.replace_all(&joined, "").into_owned()
}

fn strip_emoji(text: &str) -> String {
    text.chars().filter(|&c| !is_emoji(c)).collect()
}

fn is_emoji(c: char) -> bool {
    matches!(c,
        '\u{1F1E6}'..='\u{1F1FF}'
        | '\u{1F300}'..='\u{1F5FF}'
        | '\u{1F600}'..='\u{1F64F}'
        | '\u{1F680}'..='\u{1F6FF}'
        | '\u{1F900}'..='\u{1F9FF}'
        | '\u{1FA70}'..='\u{1FAFF}'
        | '\u{2700}'..='\u{27BF}'
        | '\u{FE0F}')
}
