//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Escape`**: backslash + ASCII punctuation, matched before everything else
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`LinkSyntax`**: `[text](dest "title")`, `[text][label]`, `[text]` and the `!` image forms
//! - **`AutoLink`**: `<scheme:...>` and `<user@host>`
//! - **`Emphasis`**: `*`/`_` delimiter runs with selectable flanking rules
//! - **`Strikethrough`**: `~~`
//! - **`LineBreak`**: newlines inside inline text
//! - **`WikiLink`**: `OPEN = b"[["`, `CLOSE = b"]]"`, `SEPARATOR = b'|'`, an opt-in extension
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The tokenizer only walks the registry; it never hardcodes `[[` or `` ` ``.

pub mod autolink;
pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod line_break;
pub mod link;
pub mod strikethrough;
pub mod wikilink;

pub use autolink::AutoLink;
pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, RunFlags};
pub use escape::{Escape, unescape};
pub use line_break::LineBreak;
pub use link::LinkSyntax;
pub use strikethrough::Strikethrough;
pub use wikilink::{WikiLink, WikiLinkExtension, WikiLinkToken, render_wiki_link_html};
