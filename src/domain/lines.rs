//! Meaningful-line detection for plain text.

/// Default marker for comment lines.
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// A line is meaningful when, once trimmed, it is neither blank nor a comment.
pub fn is_meaningful_line(line: &str, comment_prefix: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with(comment_prefix)
}

/// Count meaningful lines in already-loaded text.
pub fn count_meaningful(content: &str, comment_prefix: &str) -> usize {
    content
        .lines()
        .filter(|line| is_meaningful_line(line, comment_prefix))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("code", true)]
    #[case("   indented code   ", true)]
    #[case("", false)]
    #[case(" \t ", false)]
    #[case("# comment", false)]
    #[case("    # indented comment", false)]
    #[case("x = 1 # trailing comment", true)]
    fn test_is_meaningful_line(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_meaningful_line(line, DEFAULT_COMMENT_PREFIX), expected);
    }

    #[test]
    fn test_count_meaningful() {
        let content = "\
# header
first

   second
\t# tabbed comment
third\r
";
        assert_eq!(count_meaningful(content, DEFAULT_COMMENT_PREFIX), 3);
    }

    #[test]
    fn test_count_meaningful_custom_prefix() {
        let content = "-- sql comment\nSELECT 1;\n# not a comment here\n";
        assert_eq!(count_meaningful(content, "--"), 2);
    }

    #[test]
    fn test_count_meaningful_empty() {
        assert_eq!(count_meaningful("", DEFAULT_COMMENT_PREFIX), 0);
    }
}
