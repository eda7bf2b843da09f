//! # Token Tree
//!
//! The owned data model produced by parsing.
//!
//! - **`block`**: `BlockToken` and the table row/cell types
//! - **`span`**: `SpanToken` and the `ExtensionToken` contract for pluggable span types
//! - **`kind`**: `TokenKind`, the stable type tag renderers dispatch on
//! - **`refs`**: `LinkRefs`, the link-reference side table
//! - **`walk`**: traversal, lookup and subtree cloning via `TokenRef`
//!
//! Every container owns its children by value, so `Clone` on any node is a
//! deep copy that can be spliced into another tree without aliasing.

pub mod block;
pub mod kind;
pub mod refs;
pub mod span;
pub mod walk;

pub use block::{Alignment, BlockToken, TableCell, TableRow};
pub use kind::TokenKind;
pub use refs::{LinkDefinition, LinkRefs};
pub use span::{ExtensionToken, SpanToken};
pub use walk::{Token, TokenRef, Walk, find_first, plain_text, walk, walk_from};

/// Root of a parsed token tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub children: Vec<BlockToken>,
    /// Definitions collected during the block pass.
    pub link_refs: LinkRefs,
}

impl Document {
    pub fn find_first(&self, kind: TokenKind) -> Result<TokenRef<'_>, crate::error::LookupError> {
        find_first(self, kind)
    }

    pub fn walk(&self) -> Walk<'_> {
        walk(self)
    }
}
