use crate::{
    parsing::inline::{cursor::Cursor, registry::SpanMatch},
    tree::SpanToken,
};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Byte index just past the closing run for an opening run at `at`.
    ///
    /// The closer must be a run of exactly the opener's length.
    pub fn closing(text: &str, at: usize) -> Option<(usize, usize, usize)> {
        let mut cur = Cursor::at(text, at);
        let open = cur.run_len(Self::TICK);
        if open == 0 {
            return None;
        }
        cur.bump_n(open);
        let inner_start = cur.pos();
        while !cur.eof() {
            if cur.peek() == Some(Self::TICK) {
                let run = cur.run_len(Self::TICK);
                if run == open {
                    return Some((inner_start, cur.pos(), cur.pos() + run));
                }
                cur.bump_n(run);
            } else {
                cur.bump();
            }
        }
        None
    }

    pub fn try_match(text: &str, at: usize) -> Option<SpanMatch> {
        let cur = Cursor::at(text, at);
        if cur.peek() != Some(Self::TICK) {
            return None;
        }
        let Some((inner_start, inner_end, end)) = Self::closing(text, at) else {
            // A run with no closer is literal; consuming it whole stops the
            // rest of the run from opening a shorter span.
            let run = cur.run_len(Self::TICK);
            return Some(SpanMatch::new(
                run,
                SpanToken::RawText(text[at..at + run].to_string()),
            ));
        };
        let content = normalize(&text[inner_start..inner_end]);
        Some(SpanMatch::new(end - at, SpanToken::InlineCode(content)))
    }
}

fn normalize(raw: &str) -> String {
    let content = raw.replace('\n', " ");
    let strip = content.len() >= 2
        && content.starts_with(' ')
        && content.ends_with(' ')
        && !content.bytes().all(|b| b == b' ');
    if strip {
        content[1..content.len() - 1].to_string()
    } else {
        content
    }
}
