use crate::error::LookupError;

use super::{
    Document,
    block::{BlockToken, TableRow},
    kind::TokenKind,
    span::SpanToken,
};

/// A borrowed node anywhere in the token tree.
#[derive(Debug, Clone, Copy)]
pub enum TokenRef<'a> {
    Block(&'a BlockToken),
    Span(&'a SpanToken),
}

/// An owned, free-standing node produced by cloning a [`TokenRef`].
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Block(BlockToken),
    Span(SpanToken),
}

impl<'a> TokenRef<'a> {
    pub fn kind(self) -> TokenKind {
        match self {
            TokenRef::Block(b) => b.kind(),
            TokenRef::Span(s) => s.kind(),
        }
    }

    /// Direct children in document order. Table cells contribute their spans.
    pub fn children(self) -> Vec<TokenRef<'a>> {
        match self {
            TokenRef::Block(BlockToken::Table { header, rows, .. }) => TableRow::all(header, rows)
                .flat_map(|row| row.cells.iter())
                .flat_map(|cell| cell.children.iter().map(TokenRef::Span))
                .collect(),
            TokenRef::Block(b) => b
                .blocks()
                .iter()
                .map(TokenRef::Block)
                .chain(b.spans().iter().map(TokenRef::Span))
                .collect(),
            TokenRef::Span(s) => s.children().iter().map(TokenRef::Span).collect(),
        }
    }

    /// Deep-clones the node into a self-contained tree rooted at it.
    pub fn to_owned_token(self) -> Token {
        match self {
            TokenRef::Block(b) => Token::Block(b.clone()),
            TokenRef::Span(s) => Token::Span(s.clone()),
        }
    }

    pub fn find_first(self, kind: TokenKind) -> Result<TokenRef<'a>, LookupError> {
        Walk::new(vec![self])
            .find(|t| t.kind() == kind)
            .ok_or(LookupError::NotFound(kind))
    }
}

impl Token {
    pub fn as_token_ref(&self) -> TokenRef<'_> {
        match self {
            Token::Block(b) => TokenRef::Block(b),
            Token::Span(s) => TokenRef::Span(s),
        }
    }
}

/// Depth-first, pre-order iterator over a token tree.
pub struct Walk<'a> {
    stack: Vec<TokenRef<'a>>,
}

impl<'a> Walk<'a> {
    fn new(mut roots: Vec<TokenRef<'a>>) -> Self {
        roots.reverse();
        Self { stack: roots }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = TokenRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children().into_iter().rev());
        Some(next)
    }
}

/// Visits every node of `doc` (not the document itself) in document order.
pub fn walk(doc: &Document) -> Walk<'_> {
    Walk::new(doc.children.iter().map(TokenRef::Block).collect())
}

/// Visits `root` and all of its descendants.
pub fn walk_from(root: TokenRef<'_>) -> Walk<'_> {
    Walk::new(vec![root])
}

/// Returns the first node of `kind` in document order.
pub fn find_first(doc: &Document, kind: TokenKind) -> Result<TokenRef<'_>, LookupError> {
    walk(doc)
        .find(|t| t.kind() == kind)
        .ok_or(LookupError::NotFound(kind))
}

/// Concatenates the literal text carried by `spans` and their descendants.
pub fn plain_text(spans: &[SpanToken]) -> String {
    let mut out = String::new();
    push_plain_text(spans, &mut out);
    out
}

fn push_plain_text(spans: &[SpanToken], out: &mut String) {
    for span in spans {
        match span.content() {
            Some(text) => out.push_str(&text),
            None => push_plain_text(span.children(), out),
        }
    }
}
