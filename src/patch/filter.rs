/// Delete the run of lines opened by `start` and closed by `end`
///
/// The line containing `start` is removed and the line containing `end` is
/// kept. Without an `end` line everything from `start` to the end of input
/// goes. Returns the kept lines and the number removed.
pub fn remove_block(lines: Vec<String>, start: &str, end: &str) -> (Vec<String>, usize) {
    let mut kept = Vec::with_capacity(lines.len());
    let mut removed = 0;
    let mut skipping = false;

    for line in lines {
        if line.contains(start) {
            skipping = true;
        }

        // Checked after `start` so the end marker line itself survives
        if skipping && line.contains(end) {
            skipping = false;
        }

        if skipping {
            removed += 1;
        } else {
            kept.push(line);
        }
    }

    (kept, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "const GenerationResult = ({";
    const END: &str = "// --- Main Page ---";

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_removes_block_keeps_end_marker() {
        let lines = owned(&["A", "const GenerationResult = ({", "B", "// --- Main Page ---", "C"]);
        let (out, removed) = remove_block(lines, START, END);
        assert_eq!(out, owned(&["A", "// --- Main Page ---", "C"]));
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_no_start_marker_is_noop() {
        let lines = owned(&["A\n", "// --- Main Page ---\n", "B\n"]);
        let (out, removed) = remove_block(lines.clone(), START, END);
        assert_eq!(out, lines);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_missing_end_marker_removes_to_eof() {
        let lines = owned(&["A\n", "const GenerationResult = ({\n", "B\n", "C\n"]);
        let (out, removed) = remove_block(lines, START, END);
        assert_eq!(out, owned(&["A\n"]));
        assert_eq!(removed, 3);
    }

    #[test]
    fn test_both_markers_on_one_line() {
        let lines = owned(&["const GenerationResult = ({ // --- Main Page ---\n", "B\n"]);
        let (out, removed) = remove_block(lines.clone(), START, END);
        assert_eq!(out, lines);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_end_marker_before_start_is_kept() {
        let lines = owned(&["// --- Main Page ---\n", "const GenerationResult = ({\n", "x\n"]);
        let (out, _) = remove_block(lines, START, END);
        assert_eq!(out, owned(&["// --- Main Page ---\n"]));
    }
}
