//! # Parsing
//!
//! Source text to [`Document`] in two strict phases:
//!
//! 1. **Blocks** (`blocks`): the whole document is split into [`RawBlock`]s and
//!    every link-reference definition is collected into the document's table
//! 2. **Spans** (`inline`): each raw inline payload is tokenized against the
//!    now complete table and the configured span registry
//!
//! Parsing is total: every input, including the empty string, yields a
//! document.

pub mod blocks;
pub mod config;
pub mod inline;
pub mod rope;

#[cfg(test)]
mod invariants;

use log::trace;
use xi_rope::Rope;

use crate::tree::{BlockToken, Document, LinkRefs, TableCell, TableRow};

use blocks::{BlockTokenizer, RawBlock};
use config::ParserConfig;
use inline::SpanTokenizer;
use rope::source_lines;

/// Parses the rope into a fully resolved token tree.
pub fn parse_document(rope: &Rope, config: &ParserConfig) -> Document {
    let lines = source_lines(rope, config.tab_width);
    let mut link_refs = LinkRefs::new();
    let raw = BlockTokenizer::new(&mut link_refs).tokenize(&lines);
    trace!(
        "block pass: {} lines, {} blocks, {} link definitions",
        lines.len(),
        raw.len(),
        link_refs.len()
    );

    let spans = SpanTokenizer::new(&config.registry, &link_refs, config.flanking);
    let children = raw.into_iter().map(|b| resolve(b, &spans)).collect();
    Document {
        children,
        link_refs,
    }
}

/// Turns a block-pass node into a block token, tokenizing its inline text.
fn resolve(raw: RawBlock, spans: &SpanTokenizer<'_>) -> BlockToken {
    match raw {
        RawBlock::Heading { level, content } => BlockToken::Heading {
            level,
            children: spans.tokenize(&content),
        },
        RawBlock::Paragraph { content } => BlockToken::Paragraph {
            children: spans.tokenize(&content),
        },
        RawBlock::Quote { children } => BlockToken::Quote {
            children: children.into_iter().map(|b| resolve(b, spans)).collect(),
        },
        RawBlock::List { start, loose, items } => BlockToken::List {
            start,
            loose,
            children: items
                .into_iter()
                .map(|item| BlockToken::ListItem {
                    leader: item.leader,
                    children: item.children.into_iter().map(|b| resolve(b, spans)).collect(),
                })
                .collect(),
        },
        RawBlock::CodeFence { language, code } => BlockToken::CodeFence { language, code },
        RawBlock::BlockCode { code } => BlockToken::BlockCode { code },
        RawBlock::Table {
            alignments,
            header,
            rows,
        } => {
            let row = |cells: Vec<String>| TableRow {
                cells: cells
                    .iter()
                    .zip(&alignments)
                    .map(|(text, &align)| TableCell {
                        align,
                        children: spans.tokenize(text),
                    })
                    .collect(),
            };
            let header = row(header);
            let rows = rows.into_iter().map(row).collect();
            BlockToken::Table {
                alignments,
                header,
                rows,
            }
        }
        RawBlock::ThematicBreak => BlockToken::ThematicBreak,
    }
}

impl Document {
    /// Parses `source` with the built-in span rules only.
    pub fn parse(source: &str) -> Document {
        Self::parse_with(source, &ParserConfig::default())
    }

    pub fn parse_with(source: &str, config: &ParserConfig) -> Document {
        parse_document(&Rope::from(source), config)
    }
}

impl ParserConfig {
    /// Parses `source` with this configuration.
    pub fn parse(&self, source: &str) -> Document {
        Document::parse_with(source, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Alignment, SpanToken};
    use pretty_assertions::assert_eq;

    fn raw(s: &str) -> SpanToken {
        SpanToken::RawText(s.into())
    }

    #[test]
    fn empty_source_yields_empty_document() {
        let doc = Document::parse("");
        assert!(doc.children.is_empty());
        assert!(doc.link_refs.is_empty());
    }

    #[test]
    fn crlf_and_tabs_are_normalized() {
        let doc = Document::parse("\tcode\r\n\r\npara\r\n");
        assert_eq!(
            doc.children,
            vec![
                BlockToken::BlockCode {
                    code: "code\n".into()
                },
                BlockToken::Paragraph {
                    children: vec![raw("para")]
                }
            ]
        );
    }

    #[test]
    fn references_resolve_when_defined_after_use() {
        let doc = Document::parse("[text][later]\n\n[later]: /u");
        assert_eq!(
            doc.children,
            vec![BlockToken::Paragraph {
                children: vec![SpanToken::Link {
                    target: "/u".into(),
                    title: None,
                    children: vec![raw("text")]
                }]
            }]
        );
    }

    #[test]
    fn table_cells_carry_column_alignment() {
        let doc = Document::parse("| a | *b* |\n| :-: | --- |\n| 1 | 2 |");
        let BlockToken::Table { header, rows, .. } = &doc.children[0] else {
            panic!("expected table, got {:?}", doc.children);
        };
        assert_eq!(header.cells[0].align, Alignment::Center);
        assert_eq!(header.cells[1].align, Alignment::None);
        assert_eq!(
            header.cells[1].children,
            vec![SpanToken::Emphasis {
                children: vec![raw("b")]
            }]
        );
        assert_eq!(rows[0].cells[0].children, vec![raw("1")]);
    }

    #[test]
    fn headings_tokenize_their_text() {
        let doc = Document::parse("## A `b`");
        assert_eq!(
            doc.children,
            vec![BlockToken::Heading {
                level: 2,
                children: vec![raw("A "), SpanToken::InlineCode("b".into())]
            }]
        );
    }
}
