use std::collections::HashMap;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    parsing::inline::kinds::{WikiLink, render_wiki_link_html},
    tree::{
        Alignment, BlockToken, Document, ExtensionToken, SpanToken, TableRow, plain_text,
    },
};

use super::{Renderer, ast::alignment_name};

/// Renders an extension token given its already rendered children.
/// Returning `None` falls back to the bare children.
pub type ExtensionHook = fn(&dyn ExtensionToken, &str) -> Option<String>;

/// Minimal HTML output.
///
/// Paragraphs directly inside tight list items render without `<p>`.
pub struct HtmlRenderer {
    hooks: HashMap<&'static str, ExtensionHook>,
    /// One entry per open list or quote; `true` for tight lists.
    tight: Vec<bool>,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new().with_hook(WikiLink::TAG, render_wiki_link_html)
    }
}

impl HtmlRenderer {
    /// A renderer with no extension hooks.
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
            tight: vec![],
        }
    }

    pub fn with_hook(mut self, tag: &'static str, hook: ExtensionHook) -> Self {
        self.hooks.insert(tag, hook);
        self
    }

    fn spans(&mut self, children: &[SpanToken]) -> String {
        children.iter().map(|c| self.render_span(c)).collect()
    }

    fn blocks(&mut self, children: &[BlockToken]) -> String {
        children.iter().map(|c| self.render_block(c)).collect()
    }

    fn in_tight_list(&self) -> bool {
        self.tight.last().copied().unwrap_or(false)
    }

    fn row(&mut self, row: &TableRow, cell_tag: &str) -> String {
        let mut out = String::from("<tr>\n");
        for cell in &row.cells {
            let inner = self.spans(&cell.children);
            let open = match cell.align {
                Alignment::None => format!("<{cell_tag}>"),
                align => format!("<{cell_tag} align=\"{}\">", alignment_name(align)),
            };
            out.push_str(&format!("{open}{inner}</{cell_tag}>\n"));
        }
        out.push_str("</tr>\n");
        out
    }
}

fn title_attr(title: Option<&str>) -> String {
    title
        .map(|t| format!(" title=\"{}\"", encode_double_quoted_attribute(t)))
        .unwrap_or_default()
}

impl Renderer for HtmlRenderer {
    type Output = String;

    fn render_document(&mut self, doc: &Document) -> String {
        self.tight.clear();
        self.blocks(&doc.children)
    }

    fn render_heading(&mut self, level: u8, children: &[SpanToken]) -> String {
        format!("<h{level}>{}</h{level}>\n", self.spans(children))
    }

    fn render_paragraph(&mut self, children: &[SpanToken]) -> String {
        let inner = self.spans(children);
        if self.in_tight_list() {
            inner
        } else {
            format!("<p>{inner}</p>\n")
        }
    }

    fn render_quote(&mut self, children: &[BlockToken]) -> String {
        self.tight.push(false);
        let inner = self.blocks(children);
        self.tight.pop();
        format!("<blockquote>\n{inner}</blockquote>\n")
    }

    fn render_list(&mut self, start: Option<u64>, loose: bool, items: &[BlockToken]) -> String {
        self.tight.push(!loose);
        let inner = self.blocks(items);
        self.tight.pop();
        match start {
            None => format!("<ul>\n{inner}</ul>\n"),
            Some(1) => format!("<ol>\n{inner}</ol>\n"),
            Some(n) => format!("<ol start=\"{n}\">\n{inner}</ol>\n"),
        }
    }

    fn render_list_item(&mut self, _leader: &str, children: &[BlockToken]) -> String {
        if !self.in_tight_list() {
            return format!("<li>\n{}</li>\n", self.blocks(children));
        }
        let mut out = String::from("<li>");
        for (i, child) in children.iter().enumerate() {
            out.push_str(&self.render_block(child));
            let is_paragraph = matches!(child, BlockToken::Paragraph { .. });
            if is_paragraph && i + 1 < children.len() {
                out.push('\n');
            }
        }
        out.push_str("</li>\n");
        out
    }

    fn render_code_fence(&mut self, language: &str, code: &str) -> String {
        let class = if language.is_empty() {
            String::new()
        } else {
            format!(" class=\"language-{}\"", encode_double_quoted_attribute(language))
        };
        format!("<pre><code{class}>{}</code></pre>\n", encode_text(code))
    }

    fn render_block_code(&mut self, code: &str) -> String {
        format!("<pre><code>{}</code></pre>\n", encode_text(code))
    }

    fn render_table(&mut self, _alignments: &[Alignment], header: &TableRow, rows: &[TableRow]) -> String {
        let mut out = String::from("<table>\n<thead>\n");
        out.push_str(&self.row(header, "th"));
        out.push_str("</thead>\n");
        if !rows.is_empty() {
            out.push_str("<tbody>\n");
            for row in rows {
                out.push_str(&self.row(row, "td"));
            }
            out.push_str("</tbody>\n");
        }
        out.push_str("</table>\n");
        out
    }

    fn render_thematic_break(&mut self) -> String {
        "<hr />\n".to_string()
    }

    fn render_raw_text(&mut self, text: &str) -> String {
        encode_text(text).into_owned()
    }

    fn render_strong(&mut self, children: &[SpanToken]) -> String {
        format!("<strong>{}</strong>", self.spans(children))
    }

    fn render_emphasis(&mut self, children: &[SpanToken]) -> String {
        format!("<em>{}</em>", self.spans(children))
    }

    fn render_strikethrough(&mut self, children: &[SpanToken]) -> String {
        format!("<del>{}</del>", self.spans(children))
    }

    fn render_inline_code(&mut self, code: &str) -> String {
        format!("<code>{}</code>", encode_text(code))
    }

    fn render_link(&mut self, target: &str, title: Option<&str>, children: &[SpanToken]) -> String {
        format!(
            "<a href=\"{}\"{}>{}</a>",
            encode_double_quoted_attribute(target),
            title_attr(title),
            self.spans(children)
        )
    }

    fn render_auto_link(&mut self, target: &str, content: &str) -> String {
        format!(
            "<a href=\"{}\">{}</a>",
            encode_double_quoted_attribute(target),
            encode_text(content)
        )
    }

    fn render_image(&mut self, src: &str, title: Option<&str>, children: &[SpanToken]) -> String {
        format!(
            "<img src=\"{}\" alt=\"{}\"{} />",
            encode_double_quoted_attribute(src),
            encode_double_quoted_attribute(&plain_text(children)),
            title_attr(title)
        )
    }

    fn render_escape_sequence(&mut self, escaped: char) -> String {
        encode_text(&escaped.to_string()).into_owned()
    }

    fn render_line_break(&mut self, soft: bool) -> String {
        let out = if soft { "\n" } else { "<br />\n" };
        out.to_string()
    }

    fn render_extension(&mut self, token: &dyn ExtensionToken) -> String {
        let inner = self.spans(token.children());
        self.hooks
            .get(token.tag())
            .and_then(|hook| hook(token, &inner))
            .unwrap_or(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(source: &str) -> String {
        HtmlRenderer::default().render_document(&Document::parse(source))
    }

    #[test]
    fn paragraphs_and_headings() {
        assert_eq!(html("# Title\n\nSome *text*"), "<h1>Title</h1>\n<p>Some <em>text</em></p>\n");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(html("a < b & c"), "<p>a &lt; b &amp; c</p>\n");
    }

    #[test]
    fn tight_list_omits_paragraph_tags() {
        assert_eq!(html("- a\n- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
    }

    #[test]
    fn loose_list_keeps_paragraph_tags() {
        assert_eq!(
            html("1. a\n\n2. b"),
            "<ol>\n<li>\n<p>a</p>\n</li>\n<li>\n<p>b</p>\n</li>\n</ol>\n"
        );
    }

    #[test]
    fn ordered_list_start_attribute() {
        assert_eq!(html("3. c"), "<ol start=\"3\">\n<li>c</li>\n</ol>\n");
    }

    #[test]
    fn code_fence_language_class() {
        assert_eq!(
            html("```rust\nlet a = 1 < 2;\n```"),
            "<pre><code class=\"language-rust\">let a = 1 &lt; 2;\n</code></pre>\n"
        );
    }

    #[test]
    fn links_and_images() {
        assert_eq!(
            html("[a](/u \"t\") ![b](/i.png)"),
            "<p><a href=\"/u\" title=\"t\">a</a> <img src=\"/i.png\" alt=\"b\" /></p>\n"
        );
    }

    #[test]
    fn hard_break() {
        assert_eq!(html("a  \nb"), "<p>a<br />\nb</p>\n");
    }

    #[test]
    fn table_alignment() {
        assert_eq!(
            html("| a | b |\n| :- | - |\n| 1 | 2 |"),
            "<table>\n<thead>\n<tr>\n<th align=\"left\">a</th>\n<th>b</th>\n</tr>\n</thead>\n<tbody>\n<tr>\n<td align=\"left\">1</td>\n<td>2</td>\n</tr>\n</tbody>\n</table>\n"
        );
    }

    #[test]
    fn table_cells_carry_each_alignment() {
        assert_eq!(
            html("| a | b |\n| :-: | -: |"),
            "<table>\n<thead>\n<tr>\n<th align=\"center\">a</th>\n<th align=\"right\">b</th>\n</tr>\n</thead>\n</table>\n"
        );
    }
}
