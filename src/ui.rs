//! Console display helpers for the release-scout binary.
//!
//! Everything here is advisory output; no correctness test depends on it.

use crate::analyzer::AnalysisResult;
use crate::warnings::ScanWarning;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a scan warning to the user.
pub fn display_warning(warning: &ScanWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the analysis outcome.
///
/// Shows up to `limit` commits from the computed range, newest first, then
/// a count of any remaining commits.
///
/// # Arguments
/// * `result` - The completed analysis
/// * `limit` - Maximum number of commits to list
pub fn display_analysis(result: &AnalysisResult, limit: usize) {
    println!(
        "\n{}",
        style(format!("Commits since {}:", result.last_tag)).bold()
    );

    for commit in result.commits.iter().take(limit) {
        println!(
            "  {} {}",
            style(commit.short_id()).cyan(),
            commit.summary()
        );
    }

    if result.commits.len() > limit {
        println!("  ... and {} more commits", result.commits.len() - limit);
    }
}
