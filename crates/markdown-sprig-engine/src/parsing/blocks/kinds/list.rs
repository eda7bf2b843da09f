use super::indent_of;

/// A list item marker at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    /// The marker as written: `-`, `*`, `+`, `1.`, `2)`.
    pub leader: String,
    /// Ordinal of an ordered marker, `None` for bullets.
    pub start: Option<u64>,
    /// Bullet character, or `.`/`)` for ordered markers.
    pub delimiter: char,
    /// Column where the item's content begins; continuation lines must reach it.
    pub content_offset: usize,
    /// Nothing follows the marker on this line.
    pub empty: bool,
}

impl ListMarker {
    pub const BULLETS: [char; 3] = ['-', '+', '*'];
    pub const MAX_ORDINAL_DIGITS: usize = 9;

    pub fn parse(line: &str) -> Option<ListMarker> {
        let indent = indent_of(line);
        if indent > 3 {
            return None;
        }
        let rest = &line[indent..];
        let first = rest.chars().next()?;

        let (leader_len, start, delimiter) = if Self::BULLETS.contains(&first) {
            (1, None, first)
        } else {
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 || digits > Self::MAX_ORDINAL_DIGITS {
                return None;
            }
            let delimiter = rest[digits..].chars().next()?;
            if delimiter != '.' && delimiter != ')' {
                return None;
            }
            let n = rest[..digits].parse::<u64>().ok()?;
            (digits + 1, Some(n), delimiter)
        };

        let after = &rest[leader_len..];
        let marker_end = indent + leader_len;
        let (content_offset, empty) = if after.trim().is_empty() {
            (marker_end + 1, true)
        } else if !after.starts_with(' ') {
            return None;
        } else {
            let spaces = indent_of(after);
            if spaces > 4 {
                (marker_end + 1, false)
            } else {
                (marker_end + spaces, false)
            }
        };

        Some(ListMarker {
            leader: rest[..leader_len].to_string(),
            start,
            delimiter,
            content_offset,
            empty,
        })
    }

    /// Items continue the same list only with the same bullet or delimiter.
    pub fn same_list(&self, other: &ListMarker) -> bool {
        self.start.is_some() == other.start.is_some() && self.delimiter == other.delimiter
    }

    /// An ordered list interrupts a paragraph only when it starts at 1, and
    /// an empty item never does.
    pub fn can_interrupt_paragraph(&self) -> bool {
        !self.empty && self.start.is_none_or(|n| n == 1)
    }
}
