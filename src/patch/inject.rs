use regex::{Captures, Regex};

use crate::patch::PatchError;

/// Join the import block, a blank separator line and the page body
pub fn prepend_imports(imports: &[String], lines: &[String]) -> String {
    let mut content = String::new();

    for import in imports {
        content.push_str(import);
        content.push('\n');
    }
    content.push('\n');

    for line in lines {
        content.push_str(line);
    }

    content
}

/// Appends a fixed set of props right after `<Element key="...">` openings
#[derive(Debug, Clone)]
pub struct PropInjector {
    anchor: Regex,
    block: String,
}

impl PropInjector {
    pub fn new(element: &str, key: &str, props: &[String], indent: usize) -> Result<Self, PatchError> {
        // Pattern: <Element, any whitespace (newlines included), key="value"
        let pattern = format!(
            r#"(<{}\s+key="{}")"#,
            regex::escape(element),
            regex::escape(key)
        );
        let anchor = Regex::new(&pattern).map_err(|e| PatchError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;

        let padding = " ".repeat(indent);
        let block = props
            .iter()
            .map(|prop| format!("\n{}{}", padding, prop))
            .collect();

        Ok(Self { anchor, block })
    }

    /// Insert the props after every anchor match. Returns the new text and
    /// the number of matches; text without a match comes back unchanged.
    pub fn inject(&self, content: &str) -> (String, usize) {
        let mut injections = 0;

        let updated = self.anchor.replace_all(content, |caps: &Captures| {
            injections += 1;
            format!("{}{}", &caps[1], self.block)
        });

        (updated.into_owned(), injections)
    }
}
