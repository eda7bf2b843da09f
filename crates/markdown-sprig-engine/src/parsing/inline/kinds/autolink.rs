use std::sync::OnceLock;

use regex::Regex;

use crate::{parsing::inline::registry::SpanMatch, tree::SpanToken};

static URI_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// `<scheme:...>` and `<user@host>` autolinks.
pub struct AutoLink;

impl AutoLink {
    pub const OPEN: u8 = b'<';
    pub const MAILTO: &'static str = "mailto:";

    fn uri_regex() -> &'static Regex {
        URI_REGEX.get_or_init(|| {
            Regex::new(r"^<([A-Za-z][A-Za-z0-9+.\-]{1,31}:[^<>\x00-\x20]*)>")
                .expect("Invalid autolink URI regex")
        })
    }

    fn email_regex() -> &'static Regex {
        EMAIL_REGEX.get_or_init(|| {
            Regex::new(
                r"^<([a-zA-Z0-9.!#$%&'*+/=?^_`{|}~\-]+@[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*)>",
            )
            .expect("Invalid autolink email regex")
        })
    }

    pub fn try_match(text: &str, at: usize) -> Option<SpanMatch> {
        if text.as_bytes().get(at) != Some(&Self::OPEN) {
            return None;
        }
        let rest = &text[at..];
        if let Some(caps) = Self::uri_regex().captures(rest) {
            let content = caps[1].to_string();
            let token = SpanToken::AutoLink {
                target: content.clone(),
                content,
            };
            return Some(SpanMatch::new(caps[0].len(), token));
        }
        let caps = Self::email_regex().captures(rest)?;
        let content = caps[1].to_string();
        let token = SpanToken::AutoLink {
            target: format!("{}{content}", Self::MAILTO),
            content,
        };
        Some(SpanMatch::new(caps[0].len(), token))
    }
}
