use crate::{parsing::inline::registry::SpanMatch, tree::SpanToken};

/// Newlines inside inline text.
///
/// Emits a soft break for a bare newline and a hard break for backslash
/// plus newline. The tokenizer upgrades a soft break to hard when the text
/// before it ends in two spaces, since only it sees the accumulated text.
pub struct LineBreak;

impl LineBreak {
    pub const NEWLINE: u8 = b'\n';
    pub const BACKSLASH: u8 = b'\\';
    /// Trailing spaces that turn a newline into a hard break.
    pub const HARD_SPACES: &'static str = "  ";

    pub fn try_match(text: &str, at: usize) -> Option<SpanMatch> {
        let bytes = text.as_bytes();
        match bytes.get(at)? {
            &Self::NEWLINE => Some(SpanMatch::new(1, SpanToken::LineBreak { soft: true })),
            &Self::BACKSLASH if bytes.get(at + 1) == Some(&Self::NEWLINE) => {
                Some(SpanMatch::new(2, SpanToken::LineBreak { soft: false }))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_is_soft() {
        assert_eq!(
            LineBreak::try_match("a\nb", 1),
            Some(SpanMatch::new(1, SpanToken::LineBreak { soft: true }))
        );
    }

    #[test]
    fn backslash_newline_is_hard() {
        assert_eq!(
            LineBreak::try_match("a\\\nb", 1),
            Some(SpanMatch::new(2, SpanToken::LineBreak { soft: false }))
        );
        assert_eq!(LineBreak::try_match("a\\b", 1), None);
    }
}
