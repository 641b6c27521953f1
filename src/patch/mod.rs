//! Repair pipeline for the generated DreamInputPage source
//!
//! Trim garbage lines, dedent, drop the inline GenerationResult component,
//! prepend imports, then wire the shared component's props in.

pub mod filter;
pub mod inject;
pub mod lines;

use thiserror::Error;

use crate::config::PatchConfig;
use crate::patch::inject::PropInjector;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("file too short: {lines} line(s), need at least {required}")]
    InputTooShort { lines: usize, required: usize },

    /// Element and key are escaped, so in practice only the regex size limit trips this
    #[error("invalid anchor pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// What each stage did to the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    pub total_lines: usize,
    pub skipped_lines: usize,
    pub dedented_lines: usize,
    pub removed_lines: usize,
    pub injections: usize,
}

#[derive(Debug, Clone)]
pub struct PatchOutput {
    pub content: String,
    pub report: PatchReport,
}

/// Run every stage over `source`. No I/O happens here.
///
/// Not idempotent: feeding the output back in trims another batch of
/// leading lines off already-fixed code.
pub fn patch(source: &str, config: &PatchConfig) -> Result<PatchOutput, PatchError> {
    // Build the injector first so a bad pattern fails before any work
    let injector = PropInjector::new(
        &config.props.element,
        &config.props.key,
        &config.props.attributes,
        config.props.indent,
    )?;

    let raw = lines::split_lines(source);
    let total_lines = raw.len();

    let payload = lines::trim_prefix(raw, config.trim.skip_lines)?;
    let (unindented, dedented_lines) = lines::dedent(payload, config.dedent.width);
    let (filtered, removed_lines) =
        filter::remove_block(unindented, &config.block.start, &config.block.end);

    let content = inject::prepend_imports(&config.imports.lines, &filtered);
    let (content, injections) = injector.inject(&content);

    Ok(PatchOutput {
        content,
        report: PatchReport {
            total_lines,
            skipped_lines: config.trim.skip_lines,
            dedented_lines,
            removed_lines,
            injections,
        },
    })
}
