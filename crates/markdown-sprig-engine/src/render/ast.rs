use std::collections::BTreeMap;

use serde::Serialize;

use crate::tree::{
    Alignment, BlockToken, Document, ExtensionToken, SpanToken, TableCell, TableRow,
};

use super::Renderer;

/// Structural form of a node: type tag, attributes, literal content and
/// children. Two trees render to equal `AstNode`s exactly when they have the
/// same shape, attributes and text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AstNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstNode>,
}

impl AstNode {
    fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            attributes: BTreeMap::new(),
            content: None,
            children: vec![],
        }
    }

    fn attr(mut self, key: &str, value: impl ToString) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    fn children(mut self, children: Vec<AstNode>) -> Self {
        self.children = children;
        self
    }
}

pub fn alignment_name(align: Alignment) -> &'static str {
    match align {
        Alignment::None => "none",
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AstRenderer;

impl AstRenderer {
    pub fn new() -> Self {
        Self
    }

    fn spans(&mut self, children: &[SpanToken]) -> Vec<AstNode> {
        children.iter().map(|c| self.render_span(c)).collect()
    }

    fn blocks(&mut self, children: &[BlockToken]) -> Vec<AstNode> {
        children.iter().map(|c| self.render_block(c)).collect()
    }

    fn row(&mut self, row: &TableRow, header: bool) -> AstNode {
        let cells = row.cells.iter().map(|c| self.cell(c)).collect();
        let node = AstNode::new("TableRow").children(cells);
        if header { node.attr("header", true) } else { node }
    }

    fn cell(&mut self, cell: &TableCell) -> AstNode {
        AstNode::new("TableCell")
            .attr("align", alignment_name(cell.align))
            .children(self.spans(&cell.children))
    }
}

impl Renderer for AstRenderer {
    type Output = AstNode;

    fn render_document(&mut self, doc: &Document) -> AstNode {
        AstNode::new("Document").children(self.blocks(&doc.children))
    }

    fn render_heading(&mut self, level: u8, children: &[SpanToken]) -> AstNode {
        AstNode::new("Heading")
            .attr("level", level)
            .children(self.spans(children))
    }

    fn render_paragraph(&mut self, children: &[SpanToken]) -> AstNode {
        AstNode::new("Paragraph").children(self.spans(children))
    }

    fn render_quote(&mut self, children: &[BlockToken]) -> AstNode {
        AstNode::new("Quote").children(self.blocks(children))
    }

    fn render_list(&mut self, start: Option<u64>, loose: bool, items: &[BlockToken]) -> AstNode {
        let node = AstNode::new("List")
            .attr("loose", loose)
            .attr("ordered", start.is_some())
            .children(self.blocks(items));
        match start {
            Some(n) => node.attr("start", n),
            None => node,
        }
    }

    fn render_list_item(&mut self, leader: &str, children: &[BlockToken]) -> AstNode {
        AstNode::new("ListItem")
            .attr("leader", leader)
            .children(self.blocks(children))
    }

    fn render_code_fence(&mut self, language: &str, code: &str) -> AstNode {
        AstNode::new("CodeFence")
            .attr("language", language)
            .content(code)
    }

    fn render_block_code(&mut self, code: &str) -> AstNode {
        AstNode::new("BlockCode").content(code)
    }

    fn render_table(&mut self, alignments: &[Alignment], header: &TableRow, rows: &[TableRow]) -> AstNode {
        let column_align = alignments
            .iter()
            .map(|a| alignment_name(*a))
            .collect::<Vec<_>>()
            .join(",");
        let mut children = vec![self.row(header, true)];
        children.extend(rows.iter().map(|r| self.row(r, false)));
        AstNode::new("Table")
            .attr("column_align", column_align)
            .children(children)
    }

    fn render_thematic_break(&mut self) -> AstNode {
        AstNode::new("ThematicBreak")
    }

    fn render_raw_text(&mut self, text: &str) -> AstNode {
        AstNode::new("RawText").content(text)
    }

    fn render_strong(&mut self, children: &[SpanToken]) -> AstNode {
        AstNode::new("Strong").children(self.spans(children))
    }

    fn render_emphasis(&mut self, children: &[SpanToken]) -> AstNode {
        AstNode::new("Emphasis").children(self.spans(children))
    }

    fn render_strikethrough(&mut self, children: &[SpanToken]) -> AstNode {
        AstNode::new("Strikethrough").children(self.spans(children))
    }

    fn render_inline_code(&mut self, code: &str) -> AstNode {
        AstNode::new("InlineCode").content(code)
    }

    fn render_link(&mut self, target: &str, title: Option<&str>, children: &[SpanToken]) -> AstNode {
        let node = AstNode::new("Link")
            .attr("target", target)
            .children(self.spans(children));
        match title {
            Some(title) => node.attr("title", title),
            None => node,
        }
    }

    fn render_auto_link(&mut self, target: &str, content: &str) -> AstNode {
        AstNode::new("AutoLink")
            .attr("target", target)
            .content(content)
    }

    fn render_image(&mut self, src: &str, title: Option<&str>, children: &[SpanToken]) -> AstNode {
        let node = AstNode::new("Image")
            .attr("src", src)
            .children(self.spans(children));
        match title {
            Some(title) => node.attr("title", title),
            None => node,
        }
    }

    fn render_escape_sequence(&mut self, escaped: char) -> AstNode {
        AstNode::new("EscapeSequence").content(escaped.to_string())
    }

    fn render_line_break(&mut self, soft: bool) -> AstNode {
        AstNode::new("LineBreak").attr("soft", soft).content("\n")
    }

    fn render_extension(&mut self, token: &dyn ExtensionToken) -> AstNode {
        let mut node = AstNode::new(token.tag()).children(self.spans(token.children()));
        for (key, value) in token.attributes() {
            node = node.attr(key, value);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_node() {
        let node = AstRenderer.render_heading(2, &[SpanToken::RawText("Hi".into())]);
        assert_eq!(node.kind, "Heading");
        assert_eq!(node.attributes.get("level").map(String::as_str), Some("2"));
        assert_eq!(node.children[0].content.as_deref(), Some("Hi"));
    }

    #[test]
    fn list_records_start_and_order() {
        let node = AstRenderer.render_list(Some(3), false, &[]);
        assert_eq!(node.attributes.get("start").map(String::as_str), Some("3"));
        assert_eq!(node.attributes.get("ordered").map(String::as_str), Some("true"));
        let node = AstRenderer.render_list(None, true, &[]);
        assert!(!node.attributes.contains_key("start"));
        assert_eq!(node.attributes.get("loose").map(String::as_str), Some("true"));
    }

    #[test]
    fn table_rows_become_nodes() {
        let header = TableRow {
            cells: vec![TableCell {
                align: Alignment::Right,
                children: vec![SpanToken::RawText("h".into())],
            }],
        };
        let node = AstRenderer.render_table(&[Alignment::Right], &header, &[]);
        assert_eq!(
            node.attributes.get("column_align").map(String::as_str),
            Some("right")
        );
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].kind, "TableRow");
        assert_eq!(node.children[0].children[0].kind, "TableCell");
    }
}
