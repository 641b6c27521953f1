//! Line-level passes: splitting, garbage trimming, dedenting

use crate::patch::PatchError;

/// Split source into lines, each keeping its `\n` terminator.
/// The last line has no terminator when the file doesn't end with one.
///
/// `\r\n` and lone `\r` endings become `\n` first, so the patched file
/// never mixes endings with the LF-terminated imports and props.
pub fn split_lines(source: &str) -> Vec<String> {
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
    normalized.split_inclusive('\n').map(str::to_string).collect()
}

/// Drop the first `skip` lines
///
/// Fails when the file has `skip` lines or fewer, since there would be no
/// payload left to keep.
pub fn trim_prefix(mut lines: Vec<String>, skip: usize) -> Result<Vec<String>, PatchError> {
    if lines.len() <= skip {
        return Err(PatchError::InputTooShort {
            lines: lines.len(),
            required: skip + 1,
        });
    }

    Ok(lines.split_off(skip))
}

/// Remove exactly `width` leading spaces from every line that starts with them.
/// Returns the lines and how many were changed.
pub fn dedent(lines: Vec<String>, width: usize) -> (Vec<String>, usize) {
    let prefix = " ".repeat(width);
    let mut dedented = 0;

    let lines = lines
        .into_iter()
        .map(|line| match line.strip_prefix(prefix.as_str()) {
            Some(rest) => {
                dedented += 1;
                rest.to_string()
            }
            None => line,
        })
        .collect();

    (lines, dedented)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_keeps_terminators() {
        let lines = split_lines("a\nb\n\nc");
        assert_eq!(lines, owned(&["a\n", "b\n", "\n", "c"]));
    }

    #[test]
    fn test_split_normalizes_crlf() {
        let lines = split_lines("a\r\nb\rc\r\n\r\nd");
        assert_eq!(lines, owned(&["a\n", "b\n", "c\n", "\n", "d"]));
    }

    #[test]
    fn test_split_empty() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_trim_drops_prefix() {
        let lines = owned(&["x\n", "y\n", "z\n"]);
        let trimmed = trim_prefix(lines, 2).unwrap();
        assert_eq!(trimmed, owned(&["z\n"]));
    }

    #[test]
    fn test_trim_too_short() {
        // Exactly `skip` lines is still too short
        let lines = owned(&["x\n", "y\n"]);
        let err = trim_prefix(lines, 2).unwrap_err();
        assert!(matches!(err, PatchError::InputTooShort { lines: 2, required: 3 }));

        let err = trim_prefix(Vec::new(), 55).unwrap_err();
        assert!(matches!(err, PatchError::InputTooShort { lines: 0, .. }));
    }

    #[test]
    fn test_dedent_strips_exactly_six() {
        let lines = owned(&["        two extra\n", "      flush\n"]);
        let (out, count) = dedent(lines, 6);
        assert_eq!(out, owned(&["  two extra\n", "flush\n"]));
        assert_eq!(count, 2);
    }

    #[test]
    fn test_dedent_leaves_short_indent_alone() {
        let lines = owned(&["     five\n", "\tfoo\n", "\n", "bare"]);
        let (out, count) = dedent(lines.clone(), 6);
        assert_eq!(out, lines);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_dedent_whitespace_only_line() {
        // Six spaces and a newline dedents to a bare newline
        let (out, _) = dedent(owned(&["      \n"]), 6);
        assert_eq!(out, owned(&["\n"]));
    }
}
