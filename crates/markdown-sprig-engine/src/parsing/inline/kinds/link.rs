use crate::{
    parsing::inline::{cursor::Cursor, parser::SpanTokenizer, registry::SpanMatch},
    tree::{LinkRefs, SpanToken},
};

use super::{code_span::CodeSpan, escape::unescape};

/// Bracketed links and images, inline or by reference.
pub struct LinkSyntax;

/// A resolved link destination.
struct Destination {
    target: String,
    title: Option<String>,
    /// Byte index just past the construct.
    end: usize,
}

impl LinkSyntax {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const BANG: u8 = b'!';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';

    pub fn try_match_link(text: &str, at: usize, tokenizer: &SpanTokenizer<'_>) -> Option<SpanMatch> {
        if text.as_bytes().get(at) != Some(&Self::OPEN) {
            return None;
        }
        let (label, dest) = Self::bracketed(text, at, tokenizer.refs)?;
        let token = SpanToken::Link {
            target: dest.target,
            title: dest.title,
            children: tokenizer.tokenize(label),
        };
        Some(SpanMatch::new(dest.end - at, token))
    }

    pub fn try_match_image(text: &str, at: usize, tokenizer: &SpanTokenizer<'_>) -> Option<SpanMatch> {
        let bytes = text.as_bytes();
        if bytes.get(at) != Some(&Self::BANG) || bytes.get(at + 1) != Some(&Self::OPEN) {
            return None;
        }
        let (alt, dest) = Self::bracketed(text, at + 1, tokenizer.refs)?;
        let token = SpanToken::Image {
            src: dest.target,
            title: dest.title,
            children: tokenizer.tokenize(alt),
        };
        Some(SpanMatch::new(dest.end - at, token))
    }

    /// Label text and destination for a `[` at `open`.
    fn bracketed<'t>(text: &'t str, open: usize, refs: &LinkRefs) -> Option<(&'t str, Destination)> {
        let close = find_label_end(text, open + 1)?;
        let label = &text[open + 1..close];
        let after = close + 1;
        let bytes = text.as_bytes();

        if bytes.get(after) == Some(&Self::DEST_OPEN)
            && let Some(dest) = inline_destination(text, after + 1)
        {
            return Some((label, dest));
        }

        if bytes.get(after) == Some(&Self::OPEN) {
            let ref_close = find_label_end(text, after + 1)?;
            let ref_label = &text[after + 1..ref_close];
            let key = if ref_label.trim().is_empty() { label } else { ref_label };
            let def = refs.get(key)?;
            let dest = Destination {
                target: def.target.clone(),
                title: def.title.clone(),
                end: ref_close + 1,
            };
            return Some((label, dest));
        }

        let def = refs.get(label)?;
        let dest = Destination {
            target: def.target.clone(),
            title: def.title.clone(),
            end: after,
        };
        Some((label, dest))
    }
}

/// Index of the `]` balancing a `[` just before `from`.
///
/// Escaped brackets and brackets inside code spans do not count.
pub fn find_label_end(text: &str, from: usize) -> Option<usize> {
    let mut cur = Cursor::at(text, from);
    let mut depth = 1usize;
    while let Some(b) = cur.peek() {
        match b {
            b'\\' => {
                cur.bump();
                cur.bump_char();
            }
            CodeSpan::TICK => match CodeSpan::closing(text, cur.pos()) {
                Some((_, _, end)) => cur.i = end,
                None => cur.bump_n(cur.run_len(CodeSpan::TICK)),
            },
            LinkSyntax::OPEN => {
                depth += 1;
                cur.bump();
            }
            LinkSyntax::CLOSE => {
                depth -= 1;
                if depth == 0 {
                    return Some(cur.pos());
                }
                cur.bump();
            }
            _ => {
                cur.bump_char();
            }
        }
    }
    None
}

fn skip_whitespace(cur: &mut Cursor<'_>) -> bool {
    let start = cur.pos();
    while cur.peek().is_some_and(|b| b.is_ascii_whitespace()) {
        cur.bump();
    }
    cur.pos() > start
}

/// Parses `dest "title")` starting just after the `(`.
fn inline_destination(text: &str, from: usize) -> Option<Destination> {
    let mut cur = Cursor::at(text, from);
    skip_whitespace(&mut cur);

    let target = if cur.peek() == Some(b'<') {
        cur.bump();
        let start = cur.pos();
        loop {
            match cur.peek()? {
                b'>' => break,
                b'<' | b'\n' => return None,
                b'\\' => {
                    cur.bump();
                    cur.bump_char();
                }
                _ => {
                    cur.bump_char();
                }
            }
        }
        let raw = cur.since(start);
        cur.bump();
        raw
    } else {
        let start = cur.pos();
        let mut depth = 0usize;
        while let Some(b) = cur.peek() {
            match b {
                b'\\' => {
                    cur.bump();
                    cur.bump_char();
                    continue;
                }
                LinkSyntax::DEST_OPEN => depth += 1,
                LinkSyntax::DEST_CLOSE if depth == 0 => break,
                LinkSyntax::DEST_CLOSE => depth -= 1,
                b if b.is_ascii_whitespace() || b.is_ascii_control() => break,
                _ => {}
            }
            cur.bump_char();
        }
        if depth != 0 {
            return None;
        }
        cur.since(start)
    };

    let spaced = skip_whitespace(&mut cur);
    let title = match cur.peek()? {
        q @ (b'"' | b'\'' | b'(') if spaced => {
            let close = if q == b'(' { b')' } else { q };
            cur.bump();
            let start = cur.pos();
            loop {
                match cur.peek()? {
                    b if b == close => break,
                    b'\\' => {
                        cur.bump();
                        cur.bump_char();
                    }
                    _ => {
                        cur.bump_char();
                    }
                }
            }
            let raw = cur.since(start);
            cur.bump();
            skip_whitespace(&mut cur);
            Some(unescape(raw))
        }
        _ => None,
    };

    if cur.peek()? != LinkSyntax::DEST_CLOSE {
        return None;
    }
    cur.bump();
    Some(Destination {
        target: unescape(target),
        title,
        end: cur.pos(),
    })
}
