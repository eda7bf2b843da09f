use std::sync::OnceLock;

use regex::Regex;

use crate::{parsing::inline::kinds::escape::unescape, tree::LinkDefinition};

/// `[label]: destination "title"` lines.
pub struct LinkReferenceDefinition;

impl LinkReferenceDefinition {
    fn regex() -> &'static Regex {
        static DEF_REGEX: OnceLock<Regex> = OnceLock::new();
        DEF_REGEX.get_or_init(|| {
            Regex::new(concat!(
                r#"^ {0,3}\[((?:[^\[\]\\]|\\.)+)\]:[ \t]*"#,
                r#"(?:<([^<>]*)>|(\S+))"#,
                r#"(?:[ \t]+(?:"((?:[^"\\]|\\.)*)"|'((?:[^'\\]|\\.)*)'|\(((?:[^()\\]|\\.)*)\)))?"#,
                r#"[ \t]*$"#,
            ))
            .expect("Invalid link reference definition regex")
        })
    }

    /// Returns the raw label and its definition.
    pub fn parse(line: &str) -> Option<(String, LinkDefinition)> {
        let caps = Self::regex().captures(line)?;
        let label = caps.get(1)?.as_str();
        if label.trim().is_empty() {
            return None;
        }
        let target = caps.get(2).or_else(|| caps.get(3))?.as_str();
        let title = caps
            .get(4)
            .or_else(|| caps.get(5))
            .or_else(|| caps.get(6))
            .map(|m| unescape(m.as_str()));
        Some((
            label.to_string(),
            LinkDefinition {
                target: unescape(target),
                title,
            },
        ))
    }
}
