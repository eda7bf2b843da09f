use super::indent_of;

/// `#`-prefixed headings.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the level and the raw inline content with any closing `#` run removed.
    pub fn parse(line: &str) -> Option<(u8, String)> {
        let indent = indent_of(line);
        if indent > 3 {
            return None;
        }
        let rest = &line[indent..];
        let level = rest.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let after = &rest[level..];
        if !after.is_empty() && !after.starts_with([' ', '\t']) {
            return None;
        }
        let content = after.trim();
        let stripped = content.trim_end_matches(Self::MARKER);
        let content = if stripped.is_empty() {
            ""
        } else if stripped.len() < content.len() && stripped.ends_with([' ', '\t']) {
            stripped.trim_end()
        } else {
            content
        };
        Some((level as u8, content.to_string()))
    }
}

/// Underlines that turn the preceding paragraph into a heading.
pub struct SetextHeading;

impl SetextHeading {
    /// `=` underlines give level 1, `-` underlines level 2.
    pub fn underline(line: &str) -> Option<u8> {
        if indent_of(line) > 3 {
            return None;
        }
        let t = line.trim();
        if t.is_empty() {
            None
        } else if t.chars().all(|c| c == '=') {
            Some(1)
        } else if t.chars().all(|c| c == '-') {
            Some(2)
        } else {
            None
        }
    }
}
