use serde::Serialize;

use super::{kind::TokenKind, span::SpanToken};

/// A block token: a structural unit covering one or more whole lines.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockToken {
    Heading {
        /// 1 to 6.
        level: u8,
        children: Vec<SpanToken>,
    },
    Paragraph {
        children: Vec<SpanToken>,
    },
    Quote {
        children: Vec<BlockToken>,
    },
    List {
        /// `Some(n)` for ordered lists starting at `n`, `None` for bullets.
        start: Option<u64>,
        /// Items separated by blank lines render as separate paragraphs.
        loose: bool,
        /// Always `ListItem`s.
        children: Vec<BlockToken>,
    },
    ListItem {
        /// The marker as written, e.g. `-` or `3.`.
        leader: String,
        children: Vec<BlockToken>,
    },
    CodeFence {
        /// First word of the info string, empty when absent.
        language: String,
        code: String,
    },
    BlockCode {
        code: String,
    },
    Table {
        alignments: Vec<Alignment>,
        header: TableRow,
        rows: Vec<TableRow>,
    },
    ThematicBreak,
}

/// Column alignment from a table delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub align: Alignment,
    pub children: Vec<SpanToken>,
}

impl BlockToken {
    pub fn kind(&self) -> TokenKind {
        match self {
            BlockToken::Heading { .. } => TokenKind::Heading,
            BlockToken::Paragraph { .. } => TokenKind::Paragraph,
            BlockToken::Quote { .. } => TokenKind::Quote,
            BlockToken::List { .. } => TokenKind::List,
            BlockToken::ListItem { .. } => TokenKind::ListItem,
            BlockToken::CodeFence { .. } => TokenKind::CodeFence,
            BlockToken::BlockCode { .. } => TokenKind::BlockCode,
            BlockToken::Table { .. } => TokenKind::Table,
            BlockToken::ThematicBreak => TokenKind::ThematicBreak,
        }
    }

    /// Nested block children of container variants.
    pub fn blocks(&self) -> &[BlockToken] {
        match self {
            BlockToken::Quote { children }
            | BlockToken::List { children, .. }
            | BlockToken::ListItem { children, .. } => children,
            _ => &[],
        }
    }

    pub fn blocks_mut(&mut self) -> Option<&mut Vec<BlockToken>> {
        match self {
            BlockToken::Quote { children }
            | BlockToken::List { children, .. }
            | BlockToken::ListItem { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Span children of inline-bearing variants (headings and paragraphs).
    pub fn spans(&self) -> &[SpanToken] {
        match self {
            BlockToken::Heading { children, .. } | BlockToken::Paragraph { children } => children,
            _ => &[],
        }
    }

    pub fn spans_mut(&mut self) -> Option<&mut Vec<SpanToken>> {
        match self {
            BlockToken::Heading { children, .. } | BlockToken::Paragraph { children } => {
                Some(children)
            }
            _ => None,
        }
    }

    /// True for lists with a starting index.
    pub fn is_ordered(&self) -> bool {
        matches!(self, BlockToken::List { start: Some(_), .. })
    }
}

impl TableRow {
    /// Header row first, then body rows.
    pub fn all<'a>(header: &'a TableRow, rows: &'a [TableRow]) -> impl Iterator<Item = &'a TableRow> {
        std::iter::once(header).chain(rows.iter())
    }
}
