use super::indent_of;

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one quote marker: up to three spaces, `>`, and one optional space.
    ///
    /// Nested quotes are handled by the tokenizer re-entering on the stripped
    /// lines, so only a single level is removed here.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let indent = indent_of(line);
        if indent > 3 {
            return None;
        }
        let rest = line[indent..].strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn strip_leaves_inner_level() {
        assert_eq!(BlockQuote::strip_prefix("> > hello"), Some("> hello"));
        assert_eq!(BlockQuote::strip_prefix(">> hello"), Some("> hello"));
    }

    #[test]
    fn strip_empty_marker() {
        assert_eq!(BlockQuote::strip_prefix(">"), Some(""));
    }

    #[test]
    fn four_spaces_is_not_a_quote() {
        assert_eq!(BlockQuote::strip_prefix("    > code"), None);
    }
}
