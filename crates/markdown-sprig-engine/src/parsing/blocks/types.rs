use crate::tree::Alignment;

/// Output of the block pass: block structure with inline payloads still raw.
///
/// Inline text is resolved only after the whole document has been
/// block-tokenized, because reference definitions may follow their first use.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBlock {
    Heading {
        level: u8,
        content: String,
    },
    Paragraph {
        content: String,
    },
    Quote {
        children: Vec<RawBlock>,
    },
    List {
        start: Option<u64>,
        loose: bool,
        items: Vec<RawListItem>,
    },
    CodeFence {
        language: String,
        code: String,
    },
    BlockCode {
        code: String,
    },
    Table {
        alignments: Vec<Alignment>,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    ThematicBreak,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawListItem {
    pub leader: String,
    pub children: Vec<RawBlock>,
}
