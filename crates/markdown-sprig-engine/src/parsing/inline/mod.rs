//! # Inline Parsing
//!
//! Second phase of parsing: the raw text of headings, paragraphs and table
//! cells becomes span tokens.
//!
//! ## Architecture
//!
//! Inline parsing runs only after the whole block pass, so reference links
//! can resolve against definitions that appear later in the document.
//!
//! The tokenizer is a left-to-right scan over an ordered rule list:
//! - Each position tries the registry's rules, highest priority first
//! - Container rules (emphasis, links, strikethrough, extensions) re-enter
//!   the tokenizer on their inner text
//! - Text no rule claims is coalesced into one `RawText` per run
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with save/restore
//! - **`registry`**: `SpanRegistry`, `SpanRule` and the `SpanExtension` contract
//! - **`parser`**: `SpanTokenizer`, the scan loop
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence over every rule but escapes:
//! `` `[[not a link]]` `` parses as a single InlineCode, not as text
//! containing a WikiLink.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod registry;

pub use parser::SpanTokenizer;
pub use registry::{BuiltinSpan, SpanExtension, SpanMatch, SpanRegistry, SpanRule};
