use crate::document::Document;
use crate::error::{Result, TfmvError};
use crate::rewriter::{LineRewriter, RewriteReport};
use crate::utils::path_validator::PathValidator;
use crate::utils::verbose;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Execute the rewrite workflow against stdout
pub fn execute_rewrite<P: AsRef<Path>>(
    input_file: P,
    source_substring: &str,
    new_version: &str,
    dry_run: bool,
) -> Result<RewriteReport> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_rewrite_to(input_file, source_substring, new_version, dry_run, &mut out)
}

/// Execute the rewrite workflow, sending dry-run content to `out`.
///
/// In dry-run mode `out` receives the transformed document and nothing else;
/// status lines go to stderr so the output can be piped.
pub fn execute_rewrite_to<P: AsRef<Path>, W: Write>(
    input_file: P,
    source_substring: &str,
    new_version: &str,
    dry_run: bool,
    out: &mut W,
) -> Result<RewriteReport> {
    let path = PathValidator::validate_input_file(input_file)?;

    let document = Document::load(&path)?;
    if verbose::enabled() {
        eprintln!(
            "[VERBOSE] Read {} lines from {}",
            document.lines().len(),
            path.display()
        );
    }

    let rewriter = LineRewriter::new(source_substring, new_version)?;
    let rewrite = rewriter.rewrite(document.lines());
    let report = rewrite.report;
    let updated = document.with_lines(rewrite.lines);

    if verbose::enabled() {
        log_report(&report);
    }

    if dry_run {
        // Content is written verbatim, with no newline appended after the last line.
        out.write_all(updated.render().as_bytes())
            .and_then(|()| out.flush())
            .map_err(TfmvError::Output)?;
        eprintln!("{}", summary_line(&report).dimmed());
        return Ok(report);
    }

    let written = updated.save()?;
    if verbose::enabled() {
        eprintln!(
            "[VERBOSE] Wrote {} bytes to {}",
            written,
            updated.path().display()
        );
    }

    print_report(&report, updated.path());
    Ok(report)
}

fn summary_line(report: &RewriteReport) -> String {
    if report.blocks_matched == 0 {
        return "No matching module blocks found".to_string();
    }

    if report.is_empty() {
        return format!(
            "{} matching module block(s) already up to date",
            report.blocks_matched
        );
    }

    format!(
        "Updated {} version line(s) in {} module block(s)",
        report.total_replacements(),
        report.blocks_matched
    )
}

fn print_report(report: &RewriteReport, path: &Path) {
    let summary = summary_line(report);
    if report.blocks_matched == 0 {
        println!("{}", summary.yellow());
        return;
    }

    println!(
        "{} {}",
        format!("✓ {}", summary).green(),
        path.display().to_string().dimmed()
    );
    for replacement in &report.replacements {
        println!(
            "   • line {}: {} {} {}",
            replacement.line_number,
            replacement.old_line.trim().red(),
            "→".dimmed(),
            replacement.new_line.trim().green()
        );
    }
}

fn log_report(report: &RewriteReport) {
    eprintln!(
        "[VERBOSE] {} module block(s) seen, {} matched",
        report.blocks_seen, report.blocks_matched
    );
    for replacement in &report.replacements {
        eprintln!(
            "[VERBOSE] Line {}: {} -> {}",
            replacement.line_number,
            replacement.old_line.trim_end(),
            replacement.new_line.trim_end()
        );
    }
    for line_number in &report.reopened_lines {
        eprintln!(
            "[VERBOSE] Line {}: module starts before previous block closed",
            line_number
        );
    }
    for line_number in &report.skipped_lines {
        eprintln!(
            "[VERBOSE] Line {}: version has no quoted value, left unchanged",
            line_number
        );
    }
}
