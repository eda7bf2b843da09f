//! # Block Parsing
//!
//! First phase of parsing: source lines become a tree of [`RawBlock`]s whose
//! inline payloads are still unparsed strings.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (indentation, heading, fence, quote and list markers)
//!
//! 2. **Block Construction** (`tokenizer`): A `BlockTokenizer` walks the lines with a
//!    cursor and re-enters itself on the stripped contents of quotes and list items
//!
//! ## Modules
//!
//! - **`types`**: Block-pass output (`RawBlock`, `RawListItem`)
//! - **`kinds`**: Block-specific types with owned delimiters (BlockQuote, CodeFence, Table, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`tokenizer`**: `BlockTokenizer` turns lines into blocks and collects link definitions
//!
//! ## Key Invariants
//!
//! - Nesting depth is unbounded (lists in blockquotes in lists, etc.)
//! - Fenced and indented code are raw zones: no block/inline parsing inside
//! - Every input line is consumed by exactly one block, or skipped as blank

pub mod classify;
pub mod kinds;
pub mod tokenizer;
pub mod types;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use tokenizer::BlockTokenizer;
pub use types::{RawBlock, RawListItem};
