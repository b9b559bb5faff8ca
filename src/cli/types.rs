use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::toc::Platform;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "mdtoc")]
#[command(about = "Generates and updates tables of contents in markdown files", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("platform").args(["github", "bitbucket", "gitlab", "nodejs", "ghost"])))]
pub struct Cli {
    /// Files or directories to process
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Generate anchors for github.com (the default)
    #[arg(long, default_value_t = false)]
    pub github: bool,

    /// Generate anchors for bitbucket.org
    #[arg(long, default_value_t = false)]
    pub bitbucket: bool,

    /// Generate anchors for gitlab.com
    #[arg(long, default_value_t = false)]
    pub gitlab: bool,

    /// Generate anchors for nodejs.org API docs
    #[arg(long, default_value_t = false)]
    pub nodejs: bool,

    /// Generate anchors for ghost.org
    #[arg(long, default_value_t = false)]
    pub ghost: bool,

    /// Custom title for the generated section
    #[arg(short = 't', long, value_name = "TITLE", conflicts_with = "notitle")]
    pub title: Option<String>,

    /// Omit the title line entirely
    #[arg(short = 'T', long, default_value_t = false)]
    pub notitle: bool,

    /// Deepest markdown heading level to include (HTML headings are
    /// capped at 4 unless this is set)
    #[arg(short = 'm', long, value_name = "LEVEL")]
    pub maxlevel: Option<usize>,

    /// Bullet placed in front of every entry
    #[arg(long, value_name = "PREFIX", default_value = "-")]
    pub entryprefix: String,

    /// Print the rendered tables of contents instead of rewriting files
    #[arg(short = 's', long, default_value_t = false)]
    pub stdout: bool,

    /// Combine the headers of all inputs into one TOC written to FILE
    #[arg(long, value_name = "FILE")]
    pub main: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

impl Cli {
    /// Resolve the platform flag set to an anchor dialect
    pub fn platform(&self) -> Platform {
        if self.bitbucket {
            Platform::Bitbucket
        } else if self.gitlab {
            Platform::Gitlab
        } else if self.nodejs {
            Platform::Nodejs
        } else if self.ghost {
            Platform::Ghost
        } else {
            Platform::Github
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_defaults_to_github() {
        let cli = Cli::try_parse_from(["mdtoc", "README.md"]).unwrap();
        assert_eq!(cli.platform(), Platform::Github);
    }

    #[test]
    fn test_platform_flags() {
        let cli = Cli::try_parse_from(["mdtoc", "--gitlab", "README.md"]).unwrap();
        assert_eq!(cli.platform(), Platform::Gitlab);

        let cli = Cli::try_parse_from(["mdtoc", "--bitbucket", "README.md"]).unwrap();
        assert_eq!(cli.platform(), Platform::Bitbucket);
    }

    #[test]
    fn test_platform_flags_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["mdtoc", "--github", "--gitlab", "README.md"]).is_err());
    }

    #[test]
    fn test_title_conflicts_with_notitle() {
        assert!(Cli::try_parse_from(["mdtoc", "-t", "Contents", "-T", "README.md"]).is_err());
    }

    #[test]
    fn test_at_least_one_path_is_required() {
        assert!(Cli::try_parse_from(["mdtoc"]).is_err());
    }

    #[test]
    fn test_non_numeric_maxlevel_is_rejected() {
        assert!(Cli::try_parse_from(["mdtoc", "-m", "three", "README.md"]).is_err());
    }
}
