//! `[[label|target]]` links, shipped as a span extension.
//!
//! Not part of the default registry: enable it with
//! `ParserConfig::with_extension(WikiLinkExtension::new())` or scoped via
//! `ParserConfig::enable`, or list `"wiki_link"` in the config file.

use std::any::Any;

use crate::{
    parsing::inline::{
        cursor::Cursor,
        parser::SpanTokenizer,
        registry::{SpanExtension, SpanMatch},
    },
    tree::{ExtensionToken, SpanToken, plain_text},
};

pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const SEPARATOR: u8 = b'|';
    pub const TAG: &'static str = "WikiLink";
    pub const NAME: &'static str = "wiki_link";
    pub const DEFAULT_PRIORITY: u8 = 75;
}

/// A parsed wiki link. The label is span-tokenized into `children`.
#[derive(Debug, Clone, PartialEq)]
pub struct WikiLinkToken {
    pub target: String,
    pub children: Vec<SpanToken>,
}

impl WikiLinkToken {
    pub fn label(&self) -> String {
        plain_text(&self.children)
    }
}

impl ExtensionToken for WikiLinkToken {
    fn tag(&self) -> &'static str {
        WikiLink::TAG
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![("label", self.label()), ("target", self.target.clone())]
    }

    fn children(&self) -> &[SpanToken] {
        &self.children
    }

    fn children_mut(&mut self) -> Option<&mut Vec<SpanToken>> {
        Some(&mut self.children)
    }

    fn is_container(&self) -> bool {
        true
    }

    fn clone_token(&self) -> Box<dyn ExtensionToken> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Matches `[[label|target]]` and `[[target]]`.
#[derive(Debug, Clone)]
pub struct WikiLinkExtension {
    priority: u8,
}

impl Default for WikiLinkExtension {
    fn default() -> Self {
        Self {
            priority: WikiLink::DEFAULT_PRIORITY,
        }
    }
}

impl WikiLinkExtension {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_priority(priority: u8) -> Self {
        Self { priority }
    }
}

impl SpanExtension for WikiLinkExtension {
    fn name(&self) -> &'static str {
        WikiLink::NAME
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    /// Returns `None` if not at `[[`, if the link isn't closed, or if the
    /// target is empty.
    fn try_match(&self, text: &str, at: usize, tokenizer: &SpanTokenizer<'_>) -> Option<SpanMatch> {
        let mut cur = Cursor::at(text, at);
        if !cur.starts_with(WikiLink::OPEN) {
            return None;
        }
        cur.bump_n(WikiLink::OPEN.len());
        let first_start = cur.pos();

        while !cur.eof() && cur.peek() != Some(WikiLink::SEPARATOR) && !cur.starts_with(WikiLink::CLOSE) {
            if cur.peek() == Some(b'\n') {
                return None;
            }
            cur.bump_char();
        }
        let first = cur.since(first_start);

        let second = if cur.peek() == Some(WikiLink::SEPARATOR) {
            cur.bump();
            let start = cur.pos();
            while !cur.eof() && !cur.starts_with(WikiLink::CLOSE) {
                if cur.peek() == Some(b'\n') {
                    return None;
                }
                cur.bump_char();
            }
            Some(cur.since(start))
        } else {
            None
        };

        if !cur.starts_with(WikiLink::CLOSE) {
            return None;
        }
        cur.bump_n(WikiLink::CLOSE.len());

        let (label, target) = match second {
            Some(target) => (first.trim(), target.trim()),
            None => (first.trim(), first.trim()),
        };
        if target.is_empty() {
            return None;
        }
        let token = WikiLinkToken {
            target: target.to_string(),
            children: tokenizer.tokenize(label),
        };
        Some(SpanMatch::new(
            cur.pos() - at,
            SpanToken::Extension(Box::new(token)),
        ))
    }
}

/// HTML hook for [`WikiLinkToken`]: `<a href="target">label</a>`.
///
/// Returns `None` for other extension tokens.
pub fn render_wiki_link_html(token: &dyn ExtensionToken, inner: &str) -> Option<String> {
    let link = token.as_any().downcast_ref::<WikiLinkToken>()?;
    Some(format!(
        "<a href=\"{}\">{inner}</a>",
        html_escape::encode_double_quoted_attribute(&link.target)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parsing::inline::registry::SpanRegistry, tree::LinkRefs};
    use markdown_sprig_config::Flanking;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn wiki(text: &str) -> Option<SpanMatch> {
        let registry = SpanRegistry::default();
        let refs = LinkRefs::new();
        let tokenizer = SpanTokenizer::new(&registry, &refs, Flanking::CommonMark);
        WikiLinkExtension::new().try_match(text, 0, &tokenizer)
    }

    fn parts(m: &SpanMatch) -> (String, String) {
        let SpanToken::Extension(ext) = &m.token else {
            panic!("expected extension token, got {:?}", m.token);
        };
        let link = ext.as_any().downcast_ref::<WikiLinkToken>().unwrap();
        (link.label(), link.target.clone())
    }

    #[test]
    fn label_and_target() {
        let m = wiki("[[wiki|target]] after").unwrap();
        assert_eq!(m.len, 15);
        assert_eq!(parts(&m), ("wiki".into(), "target".into()));
    }

    #[test]
    fn wiki_link_is_a_container() {
        let m = wiki("[[Page]]").unwrap();
        assert!(m.token.is_container());
        assert_eq!(m.token.children(), &[SpanToken::RawText("Page".into())]);
    }

    #[test]
    fn whitespace_around_separator_is_trimmed() {
        let m = wiki("[[wiki | target]]").unwrap();
        assert_eq!(parts(&m), ("wiki".into(), "target".into()));
    }

    #[test]
    fn target_only_uses_target_as_label() {
        let m = wiki("[[Some Page]]").unwrap();
        assert_eq!(parts(&m), ("Some Page".into(), "Some Page".into()));
    }

    #[test]
    fn label_is_span_tokenized() {
        let m = wiki("[[*big*|t]]").unwrap();
        let SpanToken::Extension(ext) = &m.token else {
            panic!("expected extension token");
        };
        assert_eq!(
            ext.children(),
            &[SpanToken::Emphasis {
                children: vec![SpanToken::RawText("big".into())]
            }]
        );
    }

    #[test]
    fn rejects_unclosed_and_empty() {
        assert!(wiki("[[unclosed link").is_none());
        assert!(wiki("[[label|]]").is_none());
        assert!(wiki("[[]]").is_none());
        assert!(wiki("[single]").is_none());
        assert!(wiki("[[across\nlines]]").is_none());
    }

    #[test]
    fn attributes_in_stable_order() {
        let token = WikiLinkToken {
            target: "t".into(),
            children: vec![SpanToken::RawText("l".into())],
        };
        assert_eq!(
            token.attributes(),
            vec![("label", "l".to_string()), ("target", "t".to_string())]
        );
    }

    #[test]
    fn html_hook_escapes_target() {
        let token = WikiLinkToken {
            target: "a\"b".into(),
            children: vec![],
        };
        assert_eq!(
            render_wiki_link_html(&token, "x").as_deref(),
            Some("<a href=\"a&quot;b\">x</a>")
        );
    }

    #[test]
    fn registers_ahead_of_links() {
        let mut registry = SpanRegistry::default();
        registry.register(Arc::new(WikiLinkExtension::new())).unwrap();
        let names = registry.names();
        let wiki = names.iter().position(|n| *n == WikiLink::NAME).unwrap();
        let link = names.iter().position(|n| *n == "link").unwrap();
        assert!(wiki < link);
    }
}
