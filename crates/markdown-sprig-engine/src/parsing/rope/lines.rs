use xi_rope::Rope;

/// Splits the rope into lines with their line endings (`\n` or `\r\n`)
/// removed and leading tabs expanded to `tab_width` columns.
///
/// Uses `lines_raw` so a trailing `\r` is seen and stripped here rather than
/// leaking into block content.
pub fn source_lines(rope: &Rope, tab_width: usize) -> Vec<String> {
    rope.lines_raw(..)
        .map(|line| expand_leading_tabs(line.trim_end_matches(['\r', '\n']), tab_width))
        .collect()
}

/// Replaces tabs in the leading whitespace with spaces up to the next tab stop.
pub fn expand_leading_tabs(line: &str, tab_width: usize) -> String {
    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(line.len());
    let mut col = 0usize;
    for (i, ch) in line.char_indices() {
        match ch {
            ' ' => {
                out.push(' ');
                col += 1;
            }
            '\t' => {
                let pad = tab_width - (col % tab_width);
                out.extend(std::iter::repeat_n(' ', pad));
                col += pad;
            }
            _ => {
                out.push_str(&line[i..]);
                return out;
            }
        }
    }
    out
}
