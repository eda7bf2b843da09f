use crate::{parsing::inline::registry::SpanMatch, tree::SpanToken};

/// Backslash escapes of ASCII punctuation.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    pub fn try_match(text: &str, at: usize) -> Option<SpanMatch> {
        let bytes = text.as_bytes();
        if bytes.get(at) != Some(&Self::BACKSLASH) {
            return None;
        }
        let next = *bytes.get(at + 1)?;
        next.is_ascii_punctuation()
            .then(|| SpanMatch::new(2, SpanToken::EscapeSequence(next as char)))
    }
}

/// Resolves backslash escapes in attribute text such as link targets.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && next.is_ascii_punctuation()
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_punctuation_only() {
        assert_eq!(
            Escape::try_match("\\*", 0),
            Some(SpanMatch::new(2, SpanToken::EscapeSequence('*')))
        );
        assert_eq!(Escape::try_match("\\a", 0), None);
        assert_eq!(Escape::try_match("\\", 0), None);
        assert_eq!(Escape::try_match("a\\", 0), None);
    }

    #[test]
    fn unescape_keeps_other_backslashes() {
        assert_eq!(unescape(r"a\*b\c\\"), r"a*b\c\");
        assert_eq!(unescape("plain"), "plain");
    }
}
