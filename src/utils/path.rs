use std::path::{Path, PathBuf};

/// Extensions treated as markdown documents
const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Expand a leading tilde to the user's home directory
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();

    match path.to_str() {
        Some(text) if text == "~" || text.starts_with("~/") => match std::env::var("HOME") {
            Ok(home) => PathBuf::from(text.replacen('~', &home, 1)),
            Err(_) => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Check whether a path looks like a markdown file
pub fn is_markdown_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| MARKDOWN_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_markdown_file() {
        assert!(is_markdown_file("README.md"));
        assert!(is_markdown_file("docs/guide.markdown"));
        assert!(is_markdown_file("UPPER.MD"));

        assert!(!is_markdown_file("main.rs"));
        assert!(!is_markdown_file("Makefile"));
        assert!(!is_markdown_file("notes.md.bak"));
    }

    #[test]
    fn test_expand_tilde() {
        std::env::set_var("HOME", "/home/tester");

        assert_eq!(expand_tilde("~/docs"), PathBuf::from("/home/tester/docs"));
        assert_eq!(expand_tilde("~"), PathBuf::from("/home/tester"));
        // only a leading tilde is expanded
        assert_eq!(expand_tilde("docs/~tmp"), PathBuf::from("docs/~tmp"));
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    }
}
