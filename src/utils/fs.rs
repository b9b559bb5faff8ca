use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::utils::error::BoxResult;
use crate::utils::path::is_markdown_file;

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    entry
        .file_name()
        .to_str()
        .map(|name| name == "node_modules" || name.starts_with('.'))
        .unwrap_or(false)
}

/// List all markdown files under `dir` in a stable sorted order,
/// skipping node_modules and hidden directories
pub fn find_markdown_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_ignored_dir(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && is_markdown_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_write_round_trip() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("README.md");

        write_file(&target, "# Hello\n").unwrap();
        assert_eq!(read_file(&target).unwrap(), "# Hello\n");
    }

    #[test]
    fn test_find_markdown_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();

        write_file(&dir.path().join("README.md"), "# a\n").unwrap();
        write_file(&dir.path().join("docs/guide.markdown"), "# b\n").unwrap();
        write_file(&dir.path().join("docs/notes.txt"), "not markdown").unwrap();
        write_file(&dir.path().join("node_modules/pkg/README.md"), "# c\n").unwrap();
        write_file(&dir.path().join(".git/HEAD.md"), "# d\n").unwrap();

        let found = find_markdown_files(dir.path());
        let names: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["README.md", "docs/guide.markdown"]);
    }
}
