use crate::tree::Alignment;

/// GFM pipe tables.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Splits a row into trimmed cell strings.
    ///
    /// Outer pipes are optional; `\|` stays in the cell as a literal pipe.
    pub fn split_row(line: &str) -> Vec<String> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = match t.strip_suffix(Self::PIPE) {
            Some(inner) if !inner.ends_with('\\') => inner,
            _ => t,
        };

        let mut cells = vec![];
        let mut cell = String::new();
        let mut chars = t.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&Self::PIPE) => {
                    cell.push(Self::PIPE);
                    chars.next();
                }
                Self::PIPE => cells.push(std::mem::take(&mut cell).trim().to_string()),
                _ => cell.push(c),
            }
        }
        cells.push(cell.trim().to_string());
        cells
    }

    /// Parses a delimiter row such as `| :--- | :-: | --: |`.
    pub fn delimiter_row(line: &str) -> Option<Vec<Alignment>> {
        if !line.contains('-') {
            return None;
        }
        Self::split_row(line)
            .iter()
            .map(|cell| {
                let left = cell.starts_with(':');
                let right = cell.ends_with(':') && cell.len() > 1;
                let dashes = cell.trim_start_matches(':').trim_end_matches(':');
                if dashes.is_empty() || !dashes.chars().all(|c| c == '-') {
                    return None;
                }
                Some(match (left, right) {
                    (true, true) => Alignment::Center,
                    (true, false) => Alignment::Left,
                    (false, true) => Alignment::Right,
                    (false, false) => Alignment::None,
                })
            })
            .collect()
    }

    /// Header line plus delimiter row with a matching column count.
    pub fn header(header: &str, delimiter: &str) -> Option<(Vec<String>, Vec<Alignment>)> {
        if !header.contains(Self::PIPE) {
            return None;
        }
        let alignments = Self::delimiter_row(delimiter)?;
        let cells = Self::split_row(header);
        (cells.len() == alignments.len()).then_some((cells, alignments))
    }

    /// Splits a body row and pads or truncates it to `columns` cells.
    pub fn body_row(line: &str, columns: usize) -> Vec<String> {
        let mut cells = Self::split_row(line);
        cells.resize(columns, String::new());
        cells
    }
}
