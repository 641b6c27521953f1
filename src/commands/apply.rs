use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::commands::{print_report, resolve_target};
use crate::config::PatchConfig;
use crate::patch::{self, PatchError};

/// Patch the target file in place
///
/// A file that is too short is left untouched. The write truncates the
/// original directly: no backup, no temp file, no read-back.
pub fn execute(target: Option<&str>, config: &PatchConfig, verbose: bool) -> Result<()> {
    let file_path = resolve_target(target, config);
    let path = Path::new(&file_path);

    let source = fs::read_to_string(path)
        .context(format!("Failed to read {}", file_path))?;

    let output = match patch::patch(&source, config) {
        Ok(output) => output,
        Err(e @ PatchError::InputTooShort { .. }) => {
            println!("{}", "File too short!".red().bold());
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    if verbose {
        print_report(&file_path, &output.report);
    }

    fs::write(path, &output.content)
        .context(format!("Failed to write {}", file_path))?;

    println!("{}", "File fixed successfully.".green().bold());

    Ok(())
}
