use super::kinds::{
    AtxHeading, BlockQuote, CodeFence, FenceOpen, ListMarker, ThematicBreak, indent_of,
};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; the tokenizer combines these facts
/// with its cursor position to decide where blocks open and close.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    pub text: &'a str,
    /// Leading spaces.
    pub indent: usize,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    pub thematic_break: bool,
    /// ATX heading level and raw content.
    pub heading: Option<(u8, String)>,
    /// If the line opens a code fence.
    pub fence: Option<FenceOpen>,
    /// Whether the line starts with a `>` marker.
    pub quote: bool,
    pub list_marker: Option<ListMarker>,
}

impl LineClass<'_> {
    pub fn is_indented_code(&self) -> bool {
        !self.is_blank && self.indent >= 4
    }

    /// Whether this line ends an open paragraph instead of continuing it.
    pub fn interrupts_paragraph(&self) -> bool {
        self.is_blank
            || self.thematic_break
            || self.heading.is_some()
            || self.fence.is_some()
            || self.quote
            || self
                .list_marker
                .as_ref()
                .is_some_and(ListMarker::can_interrupt_paragraph)
    }
}

/// Classifies individual lines for the block tokenizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let is_blank = line.trim().is_empty();
        let thematic_break = ThematicBreak::matches(line);
        LineClass {
            text: line,
            indent: indent_of(line),
            is_blank,
            thematic_break,
            heading: AtxHeading::parse(line),
            fence: CodeFence::open(line),
            quote: BlockQuote::strip_prefix(line).is_some(),
            list_marker: if thematic_break {
                None
            } else {
                ListMarker::parse(line)
            },
        }
    }
}
