use log::trace;
use markdown_sprig_config::Flanking;

use crate::tree::{LinkRefs, SpanToken};

use super::{kinds::LineBreak as LineBreakSyntax, registry::SpanRegistry};

/// Resolves inline text into span tokens.
///
/// Scans left to right; at each position the registry's rules are tried in
/// priority order and the first match wins. Text no rule claims is collected
/// into a single [`SpanToken::RawText`] per run.
///
/// # Raw Zone Precedence
/// Escapes run before everything else and code spans right after, so
/// `` `[[not a link]]` `` is one InlineCode and `\*` never opens emphasis.
pub struct SpanTokenizer<'a> {
    pub registry: &'a SpanRegistry,
    pub refs: &'a LinkRefs,
    pub flanking: Flanking,
}

impl<'a> SpanTokenizer<'a> {
    pub fn new(registry: &'a SpanRegistry, refs: &'a LinkRefs, flanking: Flanking) -> Self {
        Self {
            registry,
            refs,
            flanking,
        }
    }

    /// Tokenizes `text` into a span sequence covering all of it.
    pub fn tokenize(&self, text: &str) -> Vec<SpanToken> {
        let mut out = vec![];
        let mut pending = String::new();
        let mut at = 0;

        'scan: while at < text.len() {
            for rule in self.registry.rules() {
                let Some(m) = rule.try_match(text, at, self) else {
                    continue;
                };
                if m.len == 0 {
                    continue;
                }
                trace!("{} matched {} bytes at {at}", rule.name(), m.len);
                at += m.len;
                match m.token {
                    SpanToken::RawText(s) => pending.push_str(&s),
                    SpanToken::LineBreak { soft } => {
                        let hard = !soft || pending.ends_with(LineBreakSyntax::HARD_SPACES);
                        let kept = pending.trim_end_matches(' ').len();
                        pending.truncate(kept);
                        flush_text(&mut out, &mut pending);
                        out.push(SpanToken::LineBreak { soft: !hard });
                    }
                    token => {
                        flush_text(&mut out, &mut pending);
                        out.push(token);
                    }
                }
                continue 'scan;
            }
            let Some(c) = text[at..].chars().next() else {
                break;
            };
            pending.push(c);
            at += c.len_utf8();
        }

        flush_text(&mut out, &mut pending);
        out
    }
}

fn flush_text(out: &mut Vec<SpanToken>, pending: &mut String) {
    if !pending.is_empty() {
        out.push(SpanToken::RawText(std::mem::take(pending)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spans(text: &str) -> Vec<SpanToken> {
        let registry = SpanRegistry::default();
        let refs = LinkRefs::new();
        SpanTokenizer::new(&registry, &refs, Flanking::CommonMark).tokenize(text)
    }

    fn raw(s: &str) -> SpanToken {
        SpanToken::RawText(s.into())
    }

    #[test]
    fn plain_text_is_one_token() {
        assert_eq!(spans("abc"), vec![raw("abc")]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(spans("").is_empty());
    }

    #[test]
    fn multibyte_text_is_coalesced() {
        assert_eq!(spans("héllo wörld"), vec![raw("héllo wörld")]);
    }

    #[test]
    fn escapes_suppress_emphasis() {
        assert_eq!(
            spans("\\*not emphasis\\*"),
            vec![
                SpanToken::EscapeSequence('*'),
                raw("not emphasis"),
                SpanToken::EscapeSequence('*'),
            ]
        );
    }

    #[test]
    fn code_span_suppresses_everything_inside() {
        assert_eq!(
            spans("`[x](y) *z*`"),
            vec![SpanToken::InlineCode("[x](y) *z*".into())]
        );
    }

    #[test]
    fn strong_wraps_emphasis() {
        assert_eq!(
            spans("**_bold italic_**"),
            vec![SpanToken::Strong {
                children: vec![SpanToken::Emphasis {
                    children: vec![raw("bold italic")]
                }]
            }]
        );
    }

    #[test]
    fn soft_and_hard_breaks() {
        assert_eq!(
            spans("one\ntwo  \nthree\\\nfour"),
            vec![
                raw("one"),
                SpanToken::LineBreak { soft: true },
                raw("two"),
                SpanToken::LineBreak { soft: false },
                raw("three"),
                SpanToken::LineBreak { soft: false },
                raw("four"),
            ]
        );
    }

    #[test]
    fn stray_delimiters_stay_text() {
        assert_eq!(spans("a * b ~~ c"), vec![raw("a * b ~~ c")]);
        assert_eq!(spans("[open"), vec![raw("[open")]);
        assert_eq!(spans("``unclosed"), vec![raw("``unclosed")]);
    }

    #[test]
    fn strikethrough_with_nested_code() {
        assert_eq!(
            spans("~~gone `x`~~"),
            vec![SpanToken::Strikethrough {
                children: vec![raw("gone "), SpanToken::InlineCode("x".into())]
            }]
        );
    }

    #[test]
    fn emphasis_inside_link_text() {
        assert_eq!(
            spans("[*hi*](/u)"),
            vec![SpanToken::Link {
                target: "/u".into(),
                title: None,
                children: vec![SpanToken::Emphasis {
                    children: vec![raw("hi")]
                }]
            }]
        );
    }

    #[test]
    fn autolink_is_a_leaf() {
        assert_eq!(
            spans("see <https://example.com>."),
            vec![
                raw("see "),
                SpanToken::AutoLink {
                    target: "https://example.com".into(),
                    content: "https://example.com".into()
                },
                raw("."),
            ]
        );
    }
}
