use std::fmt;

/// Stable type tag for every node in the token tree.
///
/// Renderers and traversal utilities dispatch on this rather than on the
/// concrete enum layout, so registered extension types get a tag too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Heading,
    Paragraph,
    Quote,
    List,
    ListItem,
    CodeFence,
    BlockCode,
    Table,
    ThematicBreak,
    RawText,
    Strong,
    Emphasis,
    Strikethrough,
    InlineCode,
    Link,
    AutoLink,
    Image,
    EscapeSequence,
    LineBreak,
    /// A span type contributed by a registered extension, named by its tag.
    Extension(&'static str),
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Heading => "Heading",
            TokenKind::Paragraph => "Paragraph",
            TokenKind::Quote => "Quote",
            TokenKind::List => "List",
            TokenKind::ListItem => "ListItem",
            TokenKind::CodeFence => "CodeFence",
            TokenKind::BlockCode => "BlockCode",
            TokenKind::Table => "Table",
            TokenKind::ThematicBreak => "ThematicBreak",
            TokenKind::RawText => "RawText",
            TokenKind::Strong => "Strong",
            TokenKind::Emphasis => "Emphasis",
            TokenKind::Strikethrough => "Strikethrough",
            TokenKind::InlineCode => "InlineCode",
            TokenKind::Link => "Link",
            TokenKind::AutoLink => "AutoLink",
            TokenKind::Image => "Image",
            TokenKind::EscapeSequence => "EscapeSequence",
            TokenKind::LineBreak => "LineBreak",
            TokenKind::Extension(tag) => tag,
        }
    }

    /// Returns true for block-level kinds.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            TokenKind::Heading
                | TokenKind::Paragraph
                | TokenKind::Quote
                | TokenKind::List
                | TokenKind::ListItem
                | TokenKind::CodeFence
                | TokenKind::BlockCode
                | TokenKind::Table
                | TokenKind::ThematicBreak
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
