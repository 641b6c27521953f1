pub mod apply;
pub mod preview;

use colored::Colorize;

use crate::config::PatchConfig;
use crate::patch::PatchReport;

/// File to patch: the command-line argument wins over the configured path
pub fn resolve_target(target: Option<&str>, config: &PatchConfig) -> String {
    target
        .map(str::to_string)
        .unwrap_or_else(|| config.target.path.clone())
}

/// Print per-stage counts for `--verbose`
pub fn print_report(file_path: &str, report: &PatchReport) {
    println!("{} {} ({} lines)", "info:".blue().bold(), file_path, report.total_lines);
    println!("  {} {} leading line(s)", "Skipped".green(), report.skipped_lines);
    println!("  {} {} line(s)", "Dedented".green(), report.dedented_lines);
    println!("  {} {} line(s) of inline component", "Removed".green(), report.removed_lines);
    println!("  {} props at {} anchor(s)", "Injected".green(), report.injections);

    if report.injections == 0 {
        println!(
            "{} no injection anchor found, props were not added",
            "warning:".yellow().bold()
        );
    }
}
