pub mod logging;
pub mod types;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use crate::toc::{self, Header, TransformOptions, TransformResult};
use crate::utils::error::{BoxResult, MdtocError};
use crate::utils::{fs, path};

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    if cli.maxlevel == Some(0) {
        log::error!("Max. heading level must be a positive number");
        process::exit(2);
    }

    let options = TransformOptions {
        platform: cli.platform(),
        max_header_level: cli.maxlevel,
        title: cli.title.clone(),
        no_title: cli.notitle,
        entry_prefix: cli.entryprefix.clone(),
    };

    let mut main_headers: Vec<Header> = Vec::new();

    for target in &cli.paths {
        let target = path::expand_tilde(target);

        let files = match collect_targets(&target, options.platform) {
            Ok(files) => files,
            Err(e) => {
                log::error!("Skipping \"{}\": {}", target.display(), e);
                continue;
            }
        };

        if cli.main.is_some() {
            main_headers.extend(harvest_headers(&files, cli.maxlevel));
        } else {
            for file in &files {
                process_file(file, &options, cli.stdout, None);
            }
        }
    }

    if let Some(main_target) = &cli.main {
        let main_target = path::expand_tilde(main_target);
        log::info!(
            "Updating main TOC file \"{}\" for {}",
            main_target.display(),
            options.platform
        );
        process_file(&main_target, &options, cli.stdout, Some(main_headers));
    }
}

/// Expand a target into the markdown files to process
fn collect_targets(target: &Path, platform: toc::Platform) -> BoxResult<Vec<PathBuf>> {
    if target.is_dir() {
        log::info!(
            "Scanning \"{}\" and its subdirectories for {}",
            target.display(),
            platform
        );
        return Ok(fs::find_markdown_files(target));
    }

    if target.is_file() {
        log::info!("Processing single file \"{}\" for {}", target.display(), platform);
        return Ok(vec![target.to_path_buf()]);
    }

    Err(Box::new(MdtocError::Generic(format!(
        "\"{}\" is neither a file nor a directory",
        target.display()
    ))))
}

/// Harvest the headers of every file for an aggregate TOC: ranks are
/// normalized per file and each header is tagged with its origin path
fn harvest_headers(files: &[PathBuf], max_header_level: Option<usize>) -> Vec<Header> {
    let mut collected = Vec::new();

    for file in files {
        let content = match fs::read_file(file) {
            Ok(content) => content,
            Err(e) => {
                log::error!("Could not read \"{}\": {}", file.display(), e);
                continue;
            }
        };

        let headers = toc::get_all_headers(&content, max_header_level);
        if let Ok(json) = serde_json::to_string_pretty(&headers) {
            log::debug!("Headers found in \"{}\": {}", file.display(), json);
        }

        let origin = file.to_string_lossy().into_owned();
        let tagged: Vec<Header> = headers
            .into_iter()
            .map(|h| Header {
                path: Some(origin.clone()),
                ..h
            })
            .collect();

        collected.extend(toc::normalize_ranks(tagged));
    }

    collected
}

/// Transform one file and write it back when it changed. With
/// `std_out` set, the rendered TOC is printed and nothing is written.
/// Failures are logged so one bad document never aborts the batch.
fn process_file(
    file: &Path,
    options: &TransformOptions,
    std_out: bool,
    main_headers: Option<Vec<Header>>,
) {
    let content = match fs::read_file(file) {
        Ok(content) => content,
        Err(e) => {
            log::error!("Could not read \"{}\": {}", file.display(), e);
            return;
        }
    };

    let result = match toc::transform(&content, options, main_headers) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Could not update \"{}\": {}", file.display(), e);
            return;
        }
    };

    save_result(file, &result, std_out);
}

fn save_result(file: &Path, result: &TransformResult, std_out: bool) {
    if std_out {
        if let Some(toc_text) = &result.toc {
            println!("{}", toc_text);
        }
    }

    if !result.transformed {
        log::info!("\"{}\" is up to date", file.display());
        return;
    }

    if std_out {
        log::info!("\"{}\" should be updated", file.display());
        return;
    }

    log::info!("\"{}\" will be updated", file.display());
    if let Some(data) = &result.data {
        if let Err(e) = fs::write_file(file, data) {
            log::error!("Could not write \"{}\": {}", file.display(), e);
        }
    }
}
