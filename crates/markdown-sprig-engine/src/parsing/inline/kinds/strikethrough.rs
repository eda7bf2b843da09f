use crate::{
    parsing::inline::{parser::SpanTokenizer, registry::SpanMatch},
    tree::SpanToken,
};

use super::code_span::CodeSpan;

/// `~~struck~~` text.
pub struct Strikethrough;

impl Strikethrough {
    pub const DELIMITER: &'static str = "~~";

    pub fn try_match(text: &str, at: usize, tokenizer: &SpanTokenizer<'_>) -> Option<SpanMatch> {
        if !text[at..].starts_with(Self::DELIMITER) {
            return None;
        }
        let from = at + Self::DELIMITER.len();
        let close = Self::find_closer(text, from)?;
        let inner = &text[from..close];
        if inner.trim().is_empty() {
            return None;
        }
        let token = SpanToken::Strikethrough {
            children: tokenizer.tokenize(inner),
        };
        Some(SpanMatch::new(close + Self::DELIMITER.len() - at, token))
    }

    fn find_closer(text: &str, from: usize) -> Option<usize> {
        let bytes = text.as_bytes();
        let mut i = from;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                CodeSpan::TICK => {
                    i = CodeSpan::closing(text, i).map_or(i + 1, |(_, _, end)| end);
                }
                b'~' if text[i..].starts_with(Self::DELIMITER) => return Some(i),
                _ => i += 1,
            }
        }
        None
    }
}
