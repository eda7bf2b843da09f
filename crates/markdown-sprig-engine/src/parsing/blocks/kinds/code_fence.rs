use super::indent_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn char(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// An opening fence line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    pub kind: FenceKind,
    /// Length of the opening run; the closer must be at least this long.
    pub len: usize,
    /// Indentation of the opener, removed from content lines.
    pub indent: usize,
    /// First word of the info string.
    pub language: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    pub fn open(line: &str) -> Option<FenceOpen> {
        let indent = indent_of(line);
        if indent > 3 {
            return None;
        }
        let rest = &line[indent..];
        let kind = if rest.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if rest.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };
        let len = rest.chars().take_while(|&c| c == kind.char()).count();
        let info = rest[len..].trim();
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        let language = info.split_whitespace().next().unwrap_or_default();
        Some(FenceOpen {
            kind,
            len,
            indent,
            language: crate::parsing::inline::kinds::escape::unescape(language),
        })
    }

    pub fn closes(open: &FenceOpen, line: &str) -> bool {
        let indent = indent_of(line);
        if indent > 3 {
            return false;
        }
        let rest = &line[indent..];
        let len = rest.chars().take_while(|&c| c == open.kind.char()).count();
        len >= open.len && rest[len..].trim().is_empty()
    }

    /// Removes up to `indent` leading spaces from a content line.
    pub fn strip_indent(line: &str, indent: usize) -> &str {
        let n = indent_of(line).min(indent);
        &line[n..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        let open = CodeFence::open("```rust").unwrap();
        assert_eq!(open.kind, FenceKind::Backticks);
        assert_eq!(open.language, "rust");
        assert_eq!(open.len, 3);
    }

    #[test]
    fn detect_tilde_fence() {
        let open = CodeFence::open("~~~~").unwrap();
        assert_eq!(open.kind, FenceKind::Tildes);
        assert_eq!(open.len, 4);
        assert_eq!(open.language, "");
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::open("hello"), None);
        assert_eq!(CodeFence::open("``not a fence"), None);
    }

    #[test]
    fn backtick_info_may_not_contain_backticks() {
        assert_eq!(CodeFence::open("``` a`b"), None);
    }

    #[test]
    fn closes_matching_fence() {
        let open = CodeFence::open("```").unwrap();
        assert!(CodeFence::closes(&open, "```"));
        assert!(CodeFence::closes(&open, "`````  "));
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        let open = CodeFence::open("````").unwrap();
        assert!(!CodeFence::closes(&open, "```"));
        assert!(!CodeFence::closes(&open, "~~~~"));
        assert!(!CodeFence::closes(&open, "```` x"));
    }

    #[test]
    fn strip_indent_is_bounded() {
        assert_eq!(CodeFence::strip_indent("    x", 2), "  x");
        assert_eq!(CodeFence::strip_indent(" x", 3), "x");
    }
}
