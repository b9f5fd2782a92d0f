//! Report formatting and printing utilities.
//!
//! Separate from the extraction logic so autoref can be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::listing::{ModelCounts, ModuleListing};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print one line per file followed by the totals, to stdout.
pub fn print_scan_summary(listing: &ModuleListing) {
    print_scan_summary_to(listing, &mut io::stdout().lock());
}

/// Print the scan summary to a custom writer.
///
/// Paths are padded by display width so the counts line up for non-ASCII paths too.
pub fn print_scan_summary_to<W: Write>(listing: &ModuleListing, writer: &mut W) {
    let width = listing
        .files
        .iter()
        .map(|file| UnicodeWidthStr::width(file.include_path.as_str()))
        .max()
        .unwrap_or(0);

    for file in &listing.files {
        let padding = width - UnicodeWidthStr::width(file.include_path.as_str());
        let _ = writeln!(
            writer,
            "  {}{}  {}",
            file.include_path.cyan(),
            " ".repeat(padding),
            describe_counts(file.counts()).dimmed()
        );
    }

    if !listing.is_empty() {
        let _ = writeln!(writer);
    }
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {}: {}",
            plural(listing.files.len(), "file", "files"),
            describe_counts(listing.totals())
        )
        .green()
    );
}

/// Print the files written by `export`.
pub fn print_export_summary(written: &[String], output_dir: &str) {
    print_export_summary_to(written, output_dir, &mut io::stdout().lock());
}

pub fn print_export_summary_to<W: Write>(written: &[String], output_dir: &str, writer: &mut W) {
    for name in written {
        let _ = writeln!(writer, "  {}", name.cyan());
    }
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} to {}",
            plural(written.len(), "file", "files"),
            output_dir
        )
        .green()
    );
}

/// Tell the user there was nothing to process, on stderr.
pub fn print_no_input() {
    print_no_input_to(&mut io::stderr().lock());
}

pub fn print_no_input_to<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        "No input files found".red()
    );
    let _ = writeln!(
        writer,
        "  {} check basePath, includes and extensions in your config",
        "help:".bold().cyan()
    );
}

/// Confirm the config file written by `init`.
pub fn print_config_created(path: &Path) {
    print_config_created_to(path, &mut io::stdout().lock());
}

pub fn print_config_created_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", path.display()).green()
    );
}

/// Refuse to overwrite an existing config, on stderr.
pub fn print_config_exists(path: &Path) {
    print_config_exists_to(path, &mut io::stderr().lock());
}

pub fn print_config_exists_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!("{} already exists", path.display()).red()
    );
    let _ = writeln!(
        writer,
        "  {} edit it directly or remove it first",
        "help:".bold().cyan()
    );
}

fn describe_counts(counts: ModelCounts) -> String {
    format!(
        "{}, {}, {}, {}",
        plural(counts.classes, "class", "classes"),
        plural(counts.enums, "enum", "enums"),
        plural(counts.functions, "function", "functions"),
        plural(counts.properties, "property", "properties"),
    )
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}
