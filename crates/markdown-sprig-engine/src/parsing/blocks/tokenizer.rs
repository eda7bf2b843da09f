use log::trace;

use crate::tree::LinkRefs;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{
        BlockQuote, CodeFence, FenceOpen, LinkReferenceDefinition, ListMarker, SetextHeading,
        Table, indent_of,
    },
    types::{RawBlock, RawListItem},
};

/// Width of the indentation that makes a line indented code.
const CODE_INDENT: usize = 4;

/// Line-oriented block tokenizer.
///
/// Works over a slice of lines with an explicit cursor. Quotes and list items
/// strip their prefixes into a fresh line vector and re-enter [`tokenize`],
/// so nesting depth is unbounded and no cursor state is shared between levels.
/// Link-reference definitions found at any depth go into `refs`.
///
/// [`tokenize`]: BlockTokenizer::tokenize
pub struct BlockTokenizer<'r> {
    classifier: MarkdownLineClassifier,
    refs: &'r mut LinkRefs,
}

impl<'r> BlockTokenizer<'r> {
    pub fn new(refs: &'r mut LinkRefs) -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            refs,
        }
    }

    /// Tokenizes `lines` into blocks, covering every line.
    pub fn tokenize<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<RawBlock> {
        let mut out = vec![];
        let mut i = 0;
        while i < lines.len() {
            let line = self.classifier.classify(lines[i].as_ref());
            if line.is_blank {
                i += 1;
                continue;
            }
            let (block, next) = self.read_block(lines, i, &line);
            debug_assert!(next > i, "block reader must consume at least one line");
            if let Some(block) = block {
                out.push(block);
            }
            i = next;
        }
        out
    }

    /// Tries block openers in precedence order at line `i`.
    fn read_block<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        i: usize,
        line: &LineClass<'_>,
    ) -> (Option<RawBlock>, usize) {
        if line.thematic_break {
            return (Some(RawBlock::ThematicBreak), i + 1);
        }
        if let Some((level, content)) = &line.heading {
            let heading = RawBlock::Heading {
                level: *level,
                content: content.clone(),
            };
            return (Some(heading), i + 1);
        }
        if let Some(open) = &line.fence {
            return self.read_fence(lines, i, open);
        }
        if line.is_indented_code() {
            return self.read_block_code(lines, i);
        }
        if line.quote {
            return self.read_quote(lines, i);
        }
        if self.read_link_def(line.text) {
            return (None, i + 1);
        }
        if let Some(read) = self.read_table(lines, i) {
            return read;
        }
        if let Some(marker) = &line.list_marker {
            return self.read_list(lines, i, marker);
        }
        self.read_paragraph(lines, i)
    }

    fn read_fence<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        i: usize,
        open: &FenceOpen,
    ) -> (Option<RawBlock>, usize) {
        let mut code = String::new();
        let mut j = i + 1;
        while j < lines.len() {
            let l = lines[j].as_ref();
            if CodeFence::closes(open, l) {
                j += 1;
                break;
            }
            code.push_str(CodeFence::strip_indent(l, open.indent));
            code.push('\n');
            j += 1;
        }
        trace!("code fence over lines {i}..{j}");
        let block = RawBlock::CodeFence {
            language: open.language.clone(),
            code,
        };
        (Some(block), j)
    }

    fn read_block_code<S: AsRef<str>>(&mut self, lines: &[S], i: usize) -> (Option<RawBlock>, usize) {
        let mut body: Vec<&str> = vec![];
        let mut j = i;
        while j < lines.len() {
            let l = lines[j].as_ref();
            if l.trim().is_empty() {
                body.push(l.get(CODE_INDENT..).unwrap_or(""));
            } else if indent_of(l) >= CODE_INDENT {
                body.push(&l[CODE_INDENT..]);
            } else {
                break;
            }
            j += 1;
        }
        while body.last().is_some_and(|l| l.trim().is_empty()) {
            body.pop();
        }
        let mut code = body.join("\n");
        code.push('\n');
        (Some(RawBlock::BlockCode { code }), j)
    }

    fn read_quote<S: AsRef<str>>(&mut self, lines: &[S], i: usize) -> (Option<RawBlock>, usize) {
        let mut inner: Vec<String> = vec![];
        let mut j = i;
        while j < lines.len() {
            let l = lines[j].as_ref();
            if let Some(rest) = BlockQuote::strip_prefix(l) {
                inner.push(rest.to_string());
                j += 1;
                continue;
            }
            if self.is_lazy_continuation(&inner, l) {
                inner.push(l.to_string());
                j += 1;
                continue;
            }
            break;
        }
        trace!("quote over lines {i}..{j}");
        let children = self.tokenize(&inner);
        (Some(RawBlock::Quote { children }), j)
    }

    /// A non-blank line that would not interrupt a paragraph continues the
    /// paragraph left open at the end of `collected`.
    fn is_lazy_continuation(&self, collected: &[String], line: &str) -> bool {
        if !self.ends_in_paragraph(collected) {
            return false;
        }
        let cur = self.classifier.classify(line);
        !cur.interrupts_paragraph() && cur.list_marker.is_none()
    }

    /// Whether the last of `lines` leaves a paragraph open. Fenced code is
    /// tracked so lines inside an unclosed fence never count as paragraph text,
    /// and quote or list item runs are checked against their own contents.
    fn ends_in_paragraph(&self, lines: &[String]) -> bool {
        let mut fence: Option<FenceOpen> = None;
        let mut open = false;
        let mut k = 0;
        while k < lines.len() {
            let l = lines[k].as_str();
            k += 1;
            if let Some(f) = &fence {
                if CodeFence::closes(f, l) {
                    fence = None;
                }
                continue;
            }
            let class = self.classifier.classify(l);
            if class.is_blank || class.heading.is_some() || class.thematic_break {
                open = false;
            } else if let Some(f) = &class.fence {
                fence = Some(f.clone());
                open = false;
            } else if open && !class.interrupts_paragraph() {
                open = SetextHeading::underline(l).is_none();
            } else if let Some(rest) = BlockQuote::strip_prefix(l) {
                let mut inner = vec![rest.to_string()];
                while let Some(rest) = lines.get(k).and_then(|n| BlockQuote::strip_prefix(n)) {
                    inner.push(rest.to_string());
                    k += 1;
                }
                open = self.ends_in_paragraph(&inner);
            } else if let Some(marker) = &class.list_marker {
                let offset = marker.content_offset;
                let mut inner = vec![l.get(offset..).unwrap_or("").to_string()];
                while let Some(n) = lines.get(k) {
                    if n.trim().is_empty() {
                        inner.push(String::new());
                    } else if indent_of(n) >= offset {
                        inner.push(n[offset..].to_string());
                    } else {
                        break;
                    }
                    k += 1;
                }
                open = self.ends_in_paragraph(&inner);
            } else {
                open = !class.is_indented_code();
            }
        }
        open && fence.is_none()
    }

    fn read_link_def(&mut self, line: &str) -> bool {
        let Some((label, def)) = LinkReferenceDefinition::parse(line) else {
            return false;
        };
        trace!("link reference definition [{label}] -> {}", def.target);
        if !self.refs.insert(&label, def) {
            trace!("ignoring duplicate definition of [{label}]");
        }
        true
    }

    fn read_table<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        i: usize,
    ) -> Option<(Option<RawBlock>, usize)> {
        let delimiter = lines.get(i + 1)?.as_ref();
        let (header, alignments) = Table::header(lines[i].as_ref(), delimiter)?;
        let mut rows = vec![];
        let mut j = i + 2;
        while j < lines.len() {
            let l = lines[j].as_ref();
            if l.trim().is_empty() || !l.contains(Table::PIPE) {
                break;
            }
            rows.push(Table::body_row(l, alignments.len()));
            j += 1;
        }
        trace!("table with {} columns, {} rows", alignments.len(), rows.len());
        let table = RawBlock::Table {
            alignments,
            header,
            rows,
        };
        Some((Some(table), j))
    }

    fn read_list<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        i: usize,
        first: &ListMarker,
    ) -> (Option<RawBlock>, usize) {
        let mut items = vec![];
        let mut loose = false;
        let mut j = i;
        let mut marker = first.clone();

        loop {
            let offset = marker.content_offset;
            let opening = lines[j].as_ref();
            let mut item_lines: Vec<String> =
                vec![opening.get(offset..).unwrap_or("").to_string()];
            j += 1;

            while j < lines.len() {
                let l = lines[j].as_ref();
                if l.trim().is_empty() {
                    item_lines.push(String::new());
                    j += 1;
                    continue;
                }
                if indent_of(l) >= offset {
                    item_lines.push(l[offset..].to_string());
                    j += 1;
                    continue;
                }
                let prev_blank = item_lines.last().is_some_and(|p| p.trim().is_empty());
                if !prev_blank && self.is_lazy_continuation(&item_lines, l) {
                    item_lines.push(l.trim_start().to_string());
                    j += 1;
                    continue;
                }
                break;
            }

            let mut trailing_blanks = 0;
            while item_lines.len() > 1 && item_lines.last().is_some_and(|l| l.trim().is_empty()) {
                item_lines.pop();
                trailing_blanks += 1;
            }
            if has_interior_blank(&item_lines) {
                loose = true;
            }

            trace!("list item {} with {} lines", marker.leader, item_lines.len());
            items.push(RawListItem {
                leader: marker.leader.clone(),
                children: self.tokenize(&item_lines),
            });

            let next = lines.get(j).map(|l| self.classifier.classify(l.as_ref()));
            match next.and_then(|c| c.list_marker) {
                Some(next_marker) if next_marker.same_list(first) => {
                    if trailing_blanks > 0 {
                        loose = true;
                    }
                    marker = next_marker;
                }
                _ => break,
            }
        }

        let list = RawBlock::List {
            start: first.start,
            loose,
            items,
        };
        (Some(list), j)
    }

    fn read_paragraph<S: AsRef<str>>(&mut self, lines: &[S], i: usize) -> (Option<RawBlock>, usize) {
        let mut content: Vec<&str> = vec![lines[i].as_ref().trim_start()];
        let mut j = i + 1;
        while j < lines.len() {
            let l = lines[j].as_ref();
            if let Some(level) = SetextHeading::underline(l) {
                let heading = RawBlock::Heading {
                    level,
                    content: content.join("\n").trim().to_string(),
                };
                return (Some(heading), j + 1);
            }
            let class = self.classifier.classify(l);
            if class.interrupts_paragraph() || self.table_starts(lines, j) {
                break;
            }
            content.push(l.trim_start());
            j += 1;
        }
        let paragraph = RawBlock::Paragraph {
            content: content.join("\n").trim_end().to_string(),
        };
        (Some(paragraph), j)
    }

    fn table_starts<S: AsRef<str>>(&self, lines: &[S], j: usize) -> bool {
        lines
            .get(j + 1)
            .is_some_and(|d| Table::header(lines[j].as_ref(), d.as_ref()).is_some())
    }
}

/// A blank line between two non-blank lines of the same item.
fn has_interior_blank(lines: &[String]) -> bool {
    let mut seen_text = false;
    let mut pending_blank = false;
    for l in lines {
        if l.trim().is_empty() {
            pending_blank = seen_text;
        } else {
            if pending_blank {
                return true;
            }
            seen_text = true;
        }
    }
    false
}
