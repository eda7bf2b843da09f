use super::indent_of;

pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];

    /// Three or more of one marker, optionally separated by spaces or tabs.
    pub fn matches(line: &str) -> bool {
        if indent_of(line) > 3 {
            return false;
        }
        let mut marks = line.chars().filter(|c| !matches!(c, ' ' | '\t'));
        let Some(first) = marks.next() else {
            return false;
        };
        if !Self::MARKERS.contains(&first) {
            return false;
        }
        let mut count = 1;
        for c in marks {
            if c != first {
                return false;
            }
            count += 1;
        }
        count >= 3
    }
}
