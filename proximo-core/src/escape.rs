//! Display-safe text.

/// Strip control characters so event text cannot drive the terminal.
///
/// Tabs become spaces and newlines are kept; everything else in the
/// control range (ESC included) is dropped.
pub fn escape_text(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            '\n' => Some('\n'),
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_text("Rust & <Friends>"), "Rust & <Friends>");
    }

    #[test]
    fn test_ansi_sequences_are_defused() {
        assert_eq!(escape_text("\u{1b}[31mred\u{1b}[0m"), "[31mred[0m");
    }

    #[test]
    fn test_whitespace_handling() {
        assert_eq!(escape_text("a\tb\r\nc"), "a b\nc");
    }
}
