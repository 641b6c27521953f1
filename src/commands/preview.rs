use anyhow::{Context, Result};
use colored::Colorize;
use similar::TextDiff;
use std::fs;

use crate::commands::{print_report, resolve_target};
use crate::config::PatchConfig;
use crate::patch;

/// Show what `apply` would change without writing anything
pub fn execute(target: Option<&str>, config: &PatchConfig, verbose: bool) -> Result<()> {
    let file_path = resolve_target(target, config);

    let source = fs::read_to_string(&file_path)
        .context(format!("Failed to read {}", file_path))?;

    let output = patch::patch(&source, config)?;

    if verbose {
        print_report(&file_path, &output.report);
    }

    let diff = render_diff(&source, &output.content, &file_path);
    if diff.is_empty() {
        println!("{} No changes", "info:".blue().bold());
        return Ok(());
    }

    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Unified diff between the current and patched file, empty when identical
pub fn render_diff(old: &str, new: &str, path: &str) -> String {
    if old == new {
        return String::new();
    }

    let original = format!("{} (original)", path);
    let patched = format!("{} (patched)", path);

    let diff = TextDiff::from_lines(old, new);
    let mut unified = diff.unified_diff();
    unified.context_radius(3).header(&original, &patched);
    unified.to_string()
}
