use std::fmt::Debug;
use std::sync::Arc;

use log::debug;

use crate::{error::RegistryError, tree::SpanToken};

use super::{
    kinds::{AutoLink, CodeSpan, Emphasis, Escape, LineBreak, LinkSyntax, Strikethrough},
    parser::SpanTokenizer,
};

/// A successful match at a scan position.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanMatch {
    /// Bytes consumed from the scan position.
    pub len: usize,
    pub token: SpanToken,
}

impl SpanMatch {
    pub fn new(len: usize, token: SpanToken) -> Self {
        Self { len, token }
    }
}

/// A span rule contributed from outside the engine.
///
/// `try_match` is called at every scan position where no higher-priority
/// rule matched. Container extensions tokenize their inner text through
/// `tokenizer`, so nested spans see the same registry and link table.
pub trait SpanExtension: Debug + Send + Sync {
    /// Unique rule name, also used to deregister.
    fn name(&self) -> &'static str;

    /// Higher runs first.
    fn priority(&self) -> u8;

    fn try_match(&self, text: &str, at: usize, tokenizer: &SpanTokenizer<'_>) -> Option<SpanMatch>;
}

/// The built-in span rules. RawText is the implicit fallback and has no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinSpan {
    Escape,
    InlineCode,
    Image,
    Link,
    AutoLink,
    Emphasis,
    Strikethrough,
    LineBreak,
}

impl BuiltinSpan {
    pub const ALL: [BuiltinSpan; 8] = [
        BuiltinSpan::Escape,
        BuiltinSpan::InlineCode,
        BuiltinSpan::Image,
        BuiltinSpan::Link,
        BuiltinSpan::AutoLink,
        BuiltinSpan::Emphasis,
        BuiltinSpan::Strikethrough,
        BuiltinSpan::LineBreak,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinSpan::Escape => "escape",
            BuiltinSpan::InlineCode => "inline_code",
            BuiltinSpan::Image => "image",
            BuiltinSpan::Link => "link",
            BuiltinSpan::AutoLink => "auto_link",
            BuiltinSpan::Emphasis => "emphasis",
            BuiltinSpan::Strikethrough => "strikethrough",
            BuiltinSpan::LineBreak => "line_break",
        }
    }

    pub fn priority(self) -> u8 {
        match self {
            BuiltinSpan::Escape => 100,
            BuiltinSpan::InlineCode => 90,
            BuiltinSpan::Image => 80,
            BuiltinSpan::Link => 70,
            BuiltinSpan::AutoLink => 60,
            BuiltinSpan::Emphasis => 50,
            BuiltinSpan::Strikethrough => 40,
            BuiltinSpan::LineBreak => 30,
        }
    }

    fn try_match(self, text: &str, at: usize, tokenizer: &SpanTokenizer<'_>) -> Option<SpanMatch> {
        match self {
            BuiltinSpan::Escape => Escape::try_match(text, at),
            BuiltinSpan::InlineCode => CodeSpan::try_match(text, at),
            BuiltinSpan::Image => LinkSyntax::try_match_image(text, at, tokenizer),
            BuiltinSpan::Link => LinkSyntax::try_match_link(text, at, tokenizer),
            BuiltinSpan::AutoLink => AutoLink::try_match(text, at),
            BuiltinSpan::Emphasis => Emphasis::try_match(text, at, tokenizer),
            BuiltinSpan::Strikethrough => Strikethrough::try_match(text, at, tokenizer),
            BuiltinSpan::LineBreak => LineBreak::try_match(text, at),
        }
    }
}

#[derive(Debug, Clone)]
pub enum SpanRule {
    Builtin(BuiltinSpan),
    Extension(Arc<dyn SpanExtension>),
}

impl SpanRule {
    pub fn name(&self) -> &'static str {
        match self {
            SpanRule::Builtin(b) => b.name(),
            SpanRule::Extension(ext) => ext.name(),
        }
    }

    pub fn priority(&self) -> u8 {
        match self {
            SpanRule::Builtin(b) => b.priority(),
            SpanRule::Extension(ext) => ext.priority(),
        }
    }

    pub fn try_match(
        &self,
        text: &str,
        at: usize,
        tokenizer: &SpanTokenizer<'_>,
    ) -> Option<SpanMatch> {
        match self {
            SpanRule::Builtin(b) => b.try_match(text, at, tokenizer),
            SpanRule::Extension(ext) => ext.try_match(text, at, tokenizer),
        }
    }
}

/// Ordered span rules, highest priority first.
///
/// Rules of equal priority keep registration order, and built-ins are
/// present from construction, so they win ties against extensions.
#[derive(Debug, Clone)]
pub struct SpanRegistry {
    rules: Vec<SpanRule>,
}

impl Default for SpanRegistry {
    fn default() -> Self {
        let mut rules: Vec<SpanRule> = BuiltinSpan::ALL.into_iter().map(SpanRule::Builtin).collect();
        rules.sort_by_key(|r| std::cmp::Reverse(r.priority()));
        Self { rules }
    }
}

impl SpanRegistry {
    /// A registry with only the built-in rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `ext` after every rule with priority at least its own.
    pub fn register(&mut self, ext: Arc<dyn SpanExtension>) -> Result<(), RegistryError> {
        let name = ext.name();
        if self.contains(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        let priority = ext.priority();
        let slot = self
            .rules
            .iter()
            .position(|r| r.priority() < priority)
            .unwrap_or(self.rules.len());
        debug!("registering span rule {name} at priority {priority} (slot {slot})");
        self.rules.insert(slot, SpanRule::Extension(ext));
        Ok(())
    }

    /// Removes the rule called `name`, built-in or extension.
    pub fn deregister(&mut self, name: &str) -> Result<SpanRule, RegistryError> {
        let idx = self
            .rules
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| RegistryError::NotRegistered(name.to_string()))?;
        debug!("deregistering span rule {name}");
        Ok(self.rules.remove(idx))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name() == name)
    }

    pub fn rules(&self) -> &[SpanRule] {
        &self.rules
    }

    /// Rule names in match order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(SpanRule::name).collect()
    }
}
