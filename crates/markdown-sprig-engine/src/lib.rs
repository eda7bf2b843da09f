//! Markdown to an owned, cloneable token tree.
//!
//! ```rust
//! use markdown_sprig_engine::{Document, HtmlRenderer, Renderer};
//!
//! let doc = Document::parse("Some **bold** text");
//! let html = HtmlRenderer::default().render_document(&doc);
//! assert_eq!(html, "<p>Some <strong>bold</strong> text</p>\n");
//! ```

pub mod error;
pub mod parsing;
pub mod render;
pub mod tree;

// Re-export key types for easier usage
pub use error::{LookupError, RegistryError};
pub use markdown_sprig_config::{Config, Flanking};
pub use parsing::{
    config::{ExtensionScope, ParserConfig},
    inline::{
        BuiltinSpan, SpanExtension, SpanMatch, SpanRegistry, SpanRule, SpanTokenizer,
        kinds::{WikiLinkExtension, WikiLinkToken},
    },
    parse_document,
};
pub use render::{AstNode, AstRenderer, HtmlRenderer, Renderer};
pub use tree::*;
