//! Escaping for Markdown output.
//!
//! Catalog text is data, not markup: names like `Privacy & Policy` or
//! `ICD/SNOMED/LOINC` must not be interpreted by a Markdown renderer. Loaded
//! catalogs can contain arbitrary text, so everything from the catalog goes
//! through one of these before it is embedded.

/// Escape a string for a Markdown table cell.
///
/// # Examples
///
/// ```
/// use ehr_compliance::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a|b"), "a\\|b");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for Markdown inline content.
///
/// # Examples
///
/// ```
/// use ehr_compliance::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
/// ```
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '!' => result.push_str("\\!"),
            '~' => result.push_str("\\~"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_escape_keeps_plain_text() {
        assert_eq!(
            escape_markdown_table("ICD/SNOMED/LOINC correctness"),
            "ICD/SNOMED/LOINC correctness"
        );
        assert_eq!(escape_markdown_table("line\r\nbreak"), "line break");
    }

    #[test]
    fn test_inline_escape() {
        assert_eq!(escape_markdown_inline("Privacy & Policy"), "Privacy & Policy");
        assert_eq!(escape_markdown_inline("<script>"), "\\<script\\>");
        assert_eq!(escape_markdown_inline("a_b"), "a\\_b");
    }
}
