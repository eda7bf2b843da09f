use std::collections::HashMap;

use markdown_sprig_config::Flanking;

use crate::{
    parsing::inline::{parser::SpanTokenizer, registry::SpanMatch},
    tree::SpanToken,
};

use super::code_span::CodeSpan;

/// Emphasis and strong emphasis delimited by `*` or `_` runs.
pub struct Emphasis;

/// Whether a delimiter run may open and/or close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunFlags {
    pub can_open: bool,
    pub can_close: bool,
}

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    /// Nested delimiter runs followed while looking for a closer.
    pub const MAX_NESTING: usize = 32;

    pub fn is_delimiter(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }

    /// Opens Strong for a run of two or more, then falls back to Emphasis.
    ///
    /// The opener uses the first `n` delimiters of its run; any surplus
    /// becomes part of the inner text and is tokenized with it.
    pub fn try_match(text: &str, at: usize, tokenizer: &SpanTokenizer<'_>) -> Option<SpanMatch> {
        let ch = *text.as_bytes().get(at)?;
        if !Self::is_delimiter(ch) {
            return None;
        }
        let run = run_len(text, at, ch);
        if !Self::flags(text, at, run, tokenizer.flanking).can_open {
            return None;
        }
        for n in [2, 1] {
            if n > run {
                continue;
            }
            let Some(close) = Self::find_closer(text, at + n, ch, n, tokenizer.flanking) else {
                continue;
            };
            let children = tokenizer.tokenize(&text[at + n..close]);
            let token = if n == 2 {
                SpanToken::Strong { children }
            } else {
                SpanToken::Emphasis { children }
            };
            return Some(SpanMatch::new(close + n - at, token));
        }
        None
    }

    /// Start of the first run of `ch` after `from` that closes an `n`-wide opener.
    ///
    /// Escapes and code spans are skipped, and so are nested runs that find
    /// a closer of their own. Nested searches are memoized per call, so each
    /// `(position, delimiter, width)` is scanned at most once.
    pub fn find_closer(text: &str, from: usize, ch: u8, n: usize, flanking: Flanking) -> Option<usize> {
        if !Self::has_candidate_closer(text, from, ch, n, flanking) {
            return None;
        }
        let mut seen = HashMap::new();
        Self::search_closer(text, from, ch, n, flanking, 0, &mut seen)
    }

    fn search_closer(
        text: &str,
        from: usize,
        ch: u8,
        n: usize,
        flanking: Flanking,
        depth: usize,
        seen: &mut HashMap<(usize, u8, usize), Option<usize>>,
    ) -> Option<usize> {
        if let Some(&known) = seen.get(&(from, ch, n)) {
            return known;
        }
        let bytes = text.as_bytes();
        let mut found = None;
        let mut i = from;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                CodeSpan::TICK => i = skip_code(text, i),
                b if Self::is_delimiter(b) => {
                    let run = run_len(text, i, b);
                    let flags = Self::flags(text, i, run, flanking);
                    if b == ch && flags.can_close && run >= n && i > from {
                        found = Some(i);
                        break;
                    }
                    if flags.can_open && depth < Self::MAX_NESTING {
                        let m = run.min(2);
                        if let Some(close) =
                            Self::search_closer(text, i + m, b, m, flanking, depth + 1, seen)
                        {
                            i = close + m;
                            continue;
                        }
                    }
                    i += run;
                }
                _ => i += 1,
            }
        }
        seen.insert((from, ch, n), found);
        found
    }

    /// Cheap pre-check: some later run of `ch` could close an `n`-wide opener.
    ///
    /// Ignores escapes, code spans and nesting, so it never rejects a text in
    /// which the full search would succeed.
    fn has_candidate_closer(text: &str, from: usize, ch: u8, n: usize, flanking: Flanking) -> bool {
        let bytes = text.as_bytes();
        let closes = |at: usize, len: usize| {
            at > from && len >= n && Self::flags(text, at, len, flanking).can_close
        };
        let mut i = from;
        while i < bytes.len() {
            if bytes[i] != ch {
                i += 1;
                continue;
            }
            let run = run_len(text, i, ch);
            // A nested closer or an escape can leave the scan partway into a
            // run; every interior position shares the flags of the first one.
            if closes(i, run) || (run > 1 && closes(i + 1, run - 1)) {
                return true;
            }
            i += run;
        }
        false
    }

    /// Open/close flags of the run of `len` delimiters at `start`.
    pub fn flags(text: &str, start: usize, len: usize, flanking: Flanking) -> RunFlags {
        let before = text[..start].chars().next_back();
        let after = text.get(start + len..).and_then(|s| s.chars().next());
        match flanking {
            Flanking::Whitespace => RunFlags {
                can_open: after.is_some_and(|c| !c.is_whitespace()),
                can_close: before.is_some_and(|c| !c.is_whitespace()),
            },
            Flanking::CommonMark => {
                let left = is_left_flanking(before, after);
                let right = is_left_flanking(after, before);
                if text.as_bytes()[start] == Self::STAR {
                    RunFlags {
                        can_open: left,
                        can_close: right,
                    }
                } else {
                    RunFlags {
                        can_open: left && (!right || before.is_some_and(is_punctuation)),
                        can_close: right && (!left || after.is_some_and(is_punctuation)),
                    }
                }
            }
        }
    }
}

/// End of the code span opening at `at`, or of its backtick run if unclosed.
fn skip_code(text: &str, at: usize) -> usize {
    match CodeSpan::closing(text, at) {
        Some((_, _, end)) => end,
        None => at + run_len(text, at, CodeSpan::TICK),
    }
}

fn run_len(text: &str, at: usize, b: u8) -> usize {
    text.as_bytes()[at..].iter().take_while(|&&x| x == b).count()
}

/// Not followed by whitespace, and not followed by punctuation unless
/// preceded by whitespace or punctuation. Text edges count as whitespace.
///
/// Right-flanking is the same test with the neighbours swapped.
fn is_left_flanking(before: Option<char>, after: Option<char>) -> bool {
    let Some(after) = after.filter(|c| !c.is_whitespace()) else {
        return false;
    };
    !is_punctuation(after) || before.is_none_or(|c| c.is_whitespace() || is_punctuation(c))
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || (!c.is_ascii() && !c.is_alphanumeric() && !c.is_whitespace())
}
