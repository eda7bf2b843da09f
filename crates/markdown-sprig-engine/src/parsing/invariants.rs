//! Structural invariants every parsed [`Document`] satisfies.

use crate::tree::{BlockToken, Document, SpanToken, TableRow};

use super::config::ParserConfig;

/// Validates parser output invariants.
///
/// Asserts that:
/// - No `RawText` is empty and no two `RawText` siblings are adjacent
/// - List children are all `ListItem`s and list items only appear in lists
/// - Every table row has one cell per alignment, aligned like its column
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for block in &doc.children {
        check_block(block, false);
    }
}

fn check_block(block: &BlockToken, in_list: bool) {
    match block {
        BlockToken::List { children, .. } => {
            for child in children {
                assert!(
                    matches!(child, BlockToken::ListItem { .. }),
                    "list child is not a list item: {child:?}"
                );
                check_block(child, true);
            }
        }
        BlockToken::ListItem { children, .. } => {
            assert!(in_list, "list item outside a list: {block:?}");
            children.iter().for_each(|c| check_block(c, false));
        }
        BlockToken::Quote { children } => children.iter().for_each(|c| check_block(c, false)),
        BlockToken::Heading { level, children } => {
            assert!((1..=6).contains(level), "heading level out of range: {level}");
            check_spans(children);
        }
        BlockToken::Paragraph { children } => check_spans(children),
        BlockToken::Table {
            alignments,
            header,
            rows,
        } => {
            for row in TableRow::all(header, rows) {
                assert_eq!(row.cells.len(), alignments.len(), "ragged table row: {row:?}");
                for (cell, align) in row.cells.iter().zip(alignments) {
                    assert_eq!(cell.align, *align, "cell alignment differs from column");
                    check_spans(&cell.children);
                }
            }
        }
        BlockToken::CodeFence { .. } | BlockToken::BlockCode { .. } | BlockToken::ThematicBreak => {}
    }
}

fn check_spans(spans: &[SpanToken]) {
    for pair in spans.windows(2) {
        assert!(
            !matches!(pair, [SpanToken::RawText(_), SpanToken::RawText(_)]),
            "adjacent raw text: {pair:?}"
        );
    }
    for span in spans {
        if let SpanToken::RawText(text) = span {
            assert!(!text.is_empty(), "empty raw text");
        }
        check_spans(span.children());
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::parsing::inline::kinds::WikiLinkExtension;

    #[rstest]
    #[case("")]
    #[case("plain words")]
    #[case("**a* b_ c__ ~~d~ `e")]
    #[case("***strong em*** and _x **y** z_")]
    #[case("[a](b) [c][d] ![e](f \"g\") <h@i.jk> <http://l>")]
    #[case("a  \nb\\\nc\nd")]
    #[case("> - a\n>   1. b\n>\n> c")]
    #[case("- a\n\n  b\n- c\n\n\n3) d")]
    #[case("| a | b |\n| :-: | -: |\n| 1 |\n| 1 | 2 | 3 |")]
    #[case("```\n*x*\n```\n    *y*\n***\n# *h* #")]
    #[case("[[a|b]] [[ ]] [[c\nd]] [[e]]")]
    #[case("\\*\\_\\` \\[x\\] \\\\")]
    fn parsed_trees_hold_invariants(#[case] source: &str) {
        check(&Document::parse(source));
        let wiki = ParserConfig::default()
            .with_extension(WikiLinkExtension::new())
            .unwrap();
        check(&wiki.parse(source));
    }

    #[test]
    #[should_panic(expected = "adjacent raw text")]
    fn adjacent_raw_text_is_rejected() {
        check(&Document {
            children: vec![BlockToken::Paragraph {
                children: vec![SpanToken::RawText("a".into()), SpanToken::RawText("b".into())],
            }],
            ..Document::default()
        });
    }
}
