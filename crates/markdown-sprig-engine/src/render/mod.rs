//! # Rendering
//!
//! The [`Renderer`] trait is the visitor side of the token tree: one method
//! per variant, with default `render_block` / `render_span` dispatch so an
//! implementation only writes the per-variant output.
//!
//! - **`ast`**: `AstRenderer`, a serializable structural form for comparison and snapshots
//! - **`html`**: `HtmlRenderer`, minimal HTML with per-tag hooks for extension tokens

pub mod ast;
pub mod html;

pub use ast::{AstNode, AstRenderer};
pub use html::{ExtensionHook, HtmlRenderer};

use crate::tree::{
    Alignment, BlockToken, Document, ExtensionToken, SpanToken, TableRow, Token, TokenRef,
};

pub trait Renderer {
    type Output;

    fn render_document(&mut self, doc: &Document) -> Self::Output;

    fn render_heading(&mut self, level: u8, children: &[SpanToken]) -> Self::Output;
    fn render_paragraph(&mut self, children: &[SpanToken]) -> Self::Output;
    fn render_quote(&mut self, children: &[BlockToken]) -> Self::Output;
    fn render_list(&mut self, start: Option<u64>, loose: bool, items: &[BlockToken]) -> Self::Output;
    fn render_list_item(&mut self, leader: &str, children: &[BlockToken]) -> Self::Output;
    fn render_code_fence(&mut self, language: &str, code: &str) -> Self::Output;
    fn render_block_code(&mut self, code: &str) -> Self::Output;
    fn render_table(
        &mut self,
        alignments: &[Alignment],
        header: &TableRow,
        rows: &[TableRow],
    ) -> Self::Output;
    fn render_thematic_break(&mut self) -> Self::Output;

    fn render_raw_text(&mut self, text: &str) -> Self::Output;
    fn render_strong(&mut self, children: &[SpanToken]) -> Self::Output;
    fn render_emphasis(&mut self, children: &[SpanToken]) -> Self::Output;
    fn render_strikethrough(&mut self, children: &[SpanToken]) -> Self::Output;
    fn render_inline_code(&mut self, code: &str) -> Self::Output;
    fn render_link(&mut self, target: &str, title: Option<&str>, children: &[SpanToken]) -> Self::Output;
    fn render_auto_link(&mut self, target: &str, content: &str) -> Self::Output;
    fn render_image(&mut self, src: &str, title: Option<&str>, children: &[SpanToken]) -> Self::Output;
    fn render_escape_sequence(&mut self, escaped: char) -> Self::Output;
    fn render_line_break(&mut self, soft: bool) -> Self::Output;
    /// Extension tokens expose only their tag, attributes and children.
    fn render_extension(&mut self, token: &dyn ExtensionToken) -> Self::Output;

    fn render_block(&mut self, token: &BlockToken) -> Self::Output {
        match token {
            BlockToken::Heading { level, children } => self.render_heading(*level, children),
            BlockToken::Paragraph { children } => self.render_paragraph(children),
            BlockToken::Quote { children } => self.render_quote(children),
            BlockToken::List {
                start,
                loose,
                children,
            } => self.render_list(*start, *loose, children),
            BlockToken::ListItem { leader, children } => self.render_list_item(leader, children),
            BlockToken::CodeFence { language, code } => self.render_code_fence(language, code),
            BlockToken::BlockCode { code } => self.render_block_code(code),
            BlockToken::Table {
                alignments,
                header,
                rows,
            } => self.render_table(alignments, header, rows),
            BlockToken::ThematicBreak => self.render_thematic_break(),
        }
    }

    fn render_span(&mut self, token: &SpanToken) -> Self::Output {
        match token {
            SpanToken::RawText(text) => self.render_raw_text(text),
            SpanToken::Strong { children } => self.render_strong(children),
            SpanToken::Emphasis { children } => self.render_emphasis(children),
            SpanToken::Strikethrough { children } => self.render_strikethrough(children),
            SpanToken::InlineCode(code) => self.render_inline_code(code),
            SpanToken::Link {
                target,
                title,
                children,
            } => self.render_link(target, title.as_deref(), children),
            SpanToken::AutoLink { target, content } => self.render_auto_link(target, content),
            SpanToken::Image {
                src,
                title,
                children,
            } => self.render_image(src, title.as_deref(), children),
            SpanToken::EscapeSequence(c) => self.render_escape_sequence(*c),
            SpanToken::LineBreak { soft } => self.render_line_break(*soft),
            SpanToken::Extension(ext) => self.render_extension(ext.as_ref()),
        }
    }

    /// Renders any node on its own, without its parent or document.
    fn render_token(&mut self, token: TokenRef<'_>) -> Self::Output {
        match token {
            TokenRef::Block(b) => self.render_block(b),
            TokenRef::Span(s) => self.render_span(s),
        }
    }

    fn render_owned(&mut self, token: &Token) -> Self::Output {
        self.render_token(token.as_token_ref())
    }
}
