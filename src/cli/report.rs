//! Report formatting and printing utilities.
//!
//! Progress goes to stdout, skipped files are printed to stderr in
//! cargo-style format. Separate from core logic so the extraction engine can
//! be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, PotSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_progress(file: &str) {
    println!("{} {}", "Parsing...".dimmed(), file);
}

pub fn print_output_path(output: &str) {
    println!("Outputting to {}...", output);
}

/// Print skipped files to stderr.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stderr().lock());
}

/// Print skipped files to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    for issue in issues {
        print_issue(issue, writer);
    }
}

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Pot(summary) => {
            report(&result.issues);
            print_pot(summary, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "warning".bold().yellow(),
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());
}

fn print_pot<W: Write>(summary: &PotSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} {}",
            summary.message_count,
            if summary.message_count == 1 { "string" } else { "strings" },
            summary.extracted_file_count,
            if summary.extracted_file_count == 1 { "file" } else { "files" }
        )
        .green()
    );

    let skipped = summary.file_count - summary.extracted_file_count;
    if skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.yellow(),
            format!("{} file(s) skipped", skipped).yellow()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}
