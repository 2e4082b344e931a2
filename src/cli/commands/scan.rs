use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::ScanCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{pluralize, print_complete, print_findings, print_note};
use crate::{
    config::load_config,
    core::{Scanner, file_scanner::scan_files, parsers::SwcParser, resolve_input_path},
    report::write_report,
};

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let root = resolve_input_path(cmd.path.as_deref())?;
    let loaded = load_config(&root)?;
    let config = loaded.config;

    if cmd.verbose {
        match &loaded.path {
            Some(path) => print_note(&format!("Using config {}", path.display())),
            None => print_note("No config file found, using defaults"),
        }
    }

    let output = cmd.output.unwrap_or(config.output);
    let output: PathBuf = std::path::absolute(&output)
        .with_context(|| format!("Failed to resolve path: {}", output.display()))?;

    let files = scan_files(
        &root,
        &config.extensions,
        &config.ignores,
        config.ignore_test_files,
        cmd.verbose,
    );
    if files.skipped_count > 0 {
        eprintln!(
            "{} {} could not be accessed",
            "warning:".bold().yellow(),
            pluralize(files.skipped_count, "path", "paths")
        );
    }

    let result = Scanner::new(SwcParser::default()).scan(&files.files);
    write_report(&result.findings, &output)?;

    if cmd.verbose {
        print_findings(&result.findings);
        print_note(&format!(
            "Checked {}, found {}",
            pluralize(result.files_checked, "file", "files"),
            pluralize(result.findings.len(), "unwrapped text", "unwrapped texts")
        ));
    }
    print_complete(&output);

    Ok(ExitStatus::Success)
}
