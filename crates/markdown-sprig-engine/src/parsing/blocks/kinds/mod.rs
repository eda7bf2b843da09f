//! Block-specific types that own their syntax delimiters.
//!
//! The tokenizer asks these types whether a line opens, continues or closes
//! a construct; it never hardcodes `>`, ```` ``` ````, `#` or list markers itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod link_def;
pub mod list;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceOpen};
pub use heading::{AtxHeading, SetextHeading};
pub use link_def::LinkReferenceDefinition;
pub use list::ListMarker;
pub use table::Table;
pub use thematic_break::ThematicBreak;

/// Number of leading spaces. Tabs are expanded before lines reach the tokenizer.
pub fn indent_of(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}
