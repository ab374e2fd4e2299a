//! Escaping utilities for safe report generation.
//!
//! Paths, frontmatter-derived notes and parser error messages are
//! untrusted: a description containing `|` or a newline would otherwise
//! break a Markdown table. Escape them before embedding.

/// Escape a string for safe inclusion in a Markdown table cell.
///
/// Pipes and backticks are escaped, link brackets neutralized, and line
/// breaks flattened to spaces.
///
/// # Examples
///
/// ```
/// use agent_grader::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
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

/// Escape a string for safe inclusion in Markdown running text or headings.
///
/// # Examples
///
/// ```
/// use agent_grader::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("skills/_draft/SKILL.md"), "skills/\\_draft/SKILL.md");
/// ```
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
    fn test_table_cell_cannot_add_columns() {
        let escaped = escape_markdown_table("Reviews | Approves\r\nthen [merges](x)");
        assert_eq!(escaped, "Reviews \\| Approves then \\[merges\\](x)");
        assert_eq!(escaped.matches('|').count(), escaped.matches("\\|").count());
    }

    #[test]
    fn test_inline_neutralizes_markup() {
        assert_eq!(escape_markdown_inline("# Title"), "\\# Title");
        assert_eq!(escape_markdown_inline("<b>**x**</b>"), "\\<b\\>\\*\\*x\\*\\*\\</b\\>");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_markdown_table("agents/reviewer.md"), "agents/reviewer.md");
        assert_eq!(escape_markdown_inline("Line count"), "Line count");
    }
}
