//! Content normalization
//!
//! Canonicalizes raw marketing copy before tokenization: unifies line
//! endings, strips per-line trailing whitespace, and collapses runs of
//! blank lines so downstream heuristics see a stable shape.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of three or more newlines (two or more blank lines) collapse to one blank line
static EXCESS_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize raw copy into canonical form.
///
/// - CRLF and lone CR become LF
/// - trailing whitespace is stripped from every line
/// - runs of blank lines collapse to exactly one blank line
/// - leading and trailing whitespace of the whole text is trimmed
///
/// Total: empty input yields an empty string (the pipeline's default
/// skeleton handles that case, not this function).
pub fn normalize(input: &str) -> String {
    let unified = input.replace("\r\n", "\n").replace('\r', "\n");

    let stripped: Vec<&str> = unified.lines().map(|line| line.trim_end()).collect();
    let joined = stripped.join("\n");

    EXCESS_BLANK_LINES
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_collapse_blank_runs() {
        assert_eq!(normalize("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_single_blank_line_preserved() {
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_trailing_whitespace_stripped() {
        assert_eq!(normalize("hello   \nworld\t"), "hello\nworld");
    }

    #[test]
    fn test_outer_whitespace_trimmed() {
        assert_eq!(normalize("\n\n  hello  \n\n"), "hello");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\n  "), "");
    }
}
