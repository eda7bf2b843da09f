use std::any::Any;
use std::fmt::Debug;

use super::kind::TokenKind;

/// An inline token produced by the span tokenizer.
///
/// Container variants own their children by value; cloning a token is a
/// full structural copy with nothing shared with the source.
#[derive(Debug, Clone)]
pub enum SpanToken {
    /// Literal text matched by no other rule. Adjacent runs are coalesced.
    RawText(String),
    Strong {
        children: Vec<SpanToken>,
    },
    Emphasis {
        children: Vec<SpanToken>,
    },
    Strikethrough {
        children: Vec<SpanToken>,
    },
    /// Code span content, taken verbatim.
    InlineCode(String),
    Link {
        target: String,
        title: Option<String>,
        children: Vec<SpanToken>,
    },
    /// `<scheme:...>` or `<user@host>`; `content` is the text between the brackets.
    AutoLink {
        target: String,
        content: String,
    },
    Image {
        src: String,
        title: Option<String>,
        /// Alt text, span-tokenized.
        children: Vec<SpanToken>,
    },
    /// The character following a backslash escape.
    EscapeSequence(char),
    LineBreak {
        /// False for hard breaks (two trailing spaces or a backslash).
        soft: bool,
    },
    Extension(Box<dyn ExtensionToken>),
}

impl SpanToken {
    pub fn kind(&self) -> TokenKind {
        match self {
            SpanToken::RawText(_) => TokenKind::RawText,
            SpanToken::Strong { .. } => TokenKind::Strong,
            SpanToken::Emphasis { .. } => TokenKind::Emphasis,
            SpanToken::Strikethrough { .. } => TokenKind::Strikethrough,
            SpanToken::InlineCode(_) => TokenKind::InlineCode,
            SpanToken::Link { .. } => TokenKind::Link,
            SpanToken::AutoLink { .. } => TokenKind::AutoLink,
            SpanToken::Image { .. } => TokenKind::Image,
            SpanToken::EscapeSequence(_) => TokenKind::EscapeSequence,
            SpanToken::LineBreak { .. } => TokenKind::LineBreak,
            SpanToken::Extension(ext) => TokenKind::Extension(ext.tag()),
        }
    }

    /// Nested children of container variants; empty for leaves.
    pub fn children(&self) -> &[SpanToken] {
        match self {
            SpanToken::Strong { children }
            | SpanToken::Emphasis { children }
            | SpanToken::Strikethrough { children }
            | SpanToken::Link { children, .. }
            | SpanToken::Image { children, .. } => children,
            SpanToken::Extension(ext) => ext.children(),
            _ => &[],
        }
    }

    /// Mutable access to children, for in-place transformations by callers.
    pub fn children_mut(&mut self) -> Option<&mut Vec<SpanToken>> {
        match self {
            SpanToken::Strong { children }
            | SpanToken::Emphasis { children }
            | SpanToken::Strikethrough { children }
            | SpanToken::Link { children, .. }
            | SpanToken::Image { children, .. } => Some(children),
            SpanToken::Extension(ext) => ext.children_mut(),
            _ => None,
        }
    }

    /// Literal content of leaf variants.
    pub fn content(&self) -> Option<String> {
        match self {
            SpanToken::RawText(s) | SpanToken::InlineCode(s) => Some(s.clone()),
            SpanToken::AutoLink { content, .. } => Some(content.clone()),
            SpanToken::EscapeSequence(c) => Some(c.to_string()),
            SpanToken::LineBreak { .. } => Some("\n".to_string()),
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        match self {
            SpanToken::Extension(ext) => ext.is_container(),
            other => other.content().is_none(),
        }
    }
}

/// A span token type contributed by an extension.
///
/// Implementors expose a stable tag and their rendering attributes so any
/// renderer can recognise them, and must clone into a fully independent box.
pub trait ExtensionToken: Debug + Send + Sync + 'static {
    fn tag(&self) -> &'static str;

    /// Named scalar attributes, in a stable order.
    fn attributes(&self) -> Vec<(&'static str, String)>;

    fn children(&self) -> &[SpanToken] {
        &[]
    }

    fn children_mut(&mut self) -> Option<&mut Vec<SpanToken>> {
        None
    }

    /// Whether this type owns span children. Leaf types keep the default.
    fn is_container(&self) -> bool {
        false
    }

    fn clone_token(&self) -> Box<dyn ExtensionToken>;

    fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn ExtensionToken> {
    fn clone(&self) -> Self {
        self.clone_token()
    }
}

fn extension_eq(a: &dyn ExtensionToken, b: &dyn ExtensionToken) -> bool {
    a.tag() == b.tag() && a.attributes() == b.attributes() && a.children() == b.children()
}

impl PartialEq for SpanToken {
    fn eq(&self, other: &Self) -> bool {
        use SpanToken::*;
        match (self, other) {
            (RawText(a), RawText(b)) | (InlineCode(a), InlineCode(b)) => a == b,
            (Strong { children: a }, Strong { children: b })
            | (Emphasis { children: a }, Emphasis { children: b })
            | (Strikethrough { children: a }, Strikethrough { children: b }) => a == b,
            (
                Link {
                    target: ta,
                    title: ha,
                    children: a,
                },
                Link {
                    target: tb,
                    title: hb,
                    children: b,
                },
            )
            | (
                Image {
                    src: ta,
                    title: ha,
                    children: a,
                },
                Image {
                    src: tb,
                    title: hb,
                    children: b,
                },
            ) => ta == tb && ha == hb && a == b,
            (
                AutoLink {
                    target: ta,
                    content: ca,
                },
                AutoLink {
                    target: tb,
                    content: cb,
                },
            ) => ta == tb && ca == cb,
            (EscapeSequence(a), EscapeSequence(b)) => a == b,
            (LineBreak { soft: a }, LineBreak { soft: b }) => a == b,
            (Extension(a), Extension(b)) => extension_eq(a.as_ref(), b.as_ref()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Marker {
        name: String,
        children: Vec<SpanToken>,
    }

    impl ExtensionToken for Marker {
        fn tag(&self) -> &'static str {
            "Marker"
        }

        fn attributes(&self) -> Vec<(&'static str, String)> {
            vec![("name", self.name.clone())]
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

    #[test]
    fn extension_clone_is_independent() {
        let original = SpanToken::Extension(Box::new(Marker {
            name: "m".into(),
            children: vec![SpanToken::RawText("inner".into())],
        }));
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.children_mut()
            .unwrap()
            .push(SpanToken::RawText("more".into()));

        assert_ne!(copy, original);
        assert_eq!(original.children().len(), 1);
    }

    #[test]
    fn kind_of_extension_uses_tag() {
        let token = SpanToken::Extension(Box::new(Marker {
            name: "m".into(),
            children: vec![],
        }));
        assert_eq!(token.kind(), TokenKind::Extension("Marker"));
    }

    #[derive(Debug, Clone)]
    struct Emoji(&'static str);

    impl ExtensionToken for Emoji {
        fn tag(&self) -> &'static str {
            "Emoji"
        }

        fn attributes(&self) -> Vec<(&'static str, String)> {
            vec![("name", self.0.to_string())]
        }

        fn clone_token(&self) -> Box<dyn ExtensionToken> {
            Box::new(self.clone())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn extensions_report_their_own_shape() {
        let leaf = SpanToken::Extension(Box::new(Emoji("smile")));
        assert!(!leaf.is_container());
        assert!(leaf.children().is_empty());

        let empty_container = SpanToken::Extension(Box::new(Marker {
            name: "m".into(),
            children: vec![],
        }));
        assert!(empty_container.is_container());
    }

    #[test]
    fn leaves_have_content() {
        assert_eq!(SpanToken::EscapeSequence('*').content().as_deref(), Some("*"));
        assert!(SpanToken::Strong { children: vec![] }.is_container());
    }
}
