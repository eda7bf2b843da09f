use std::collections::HashMap;

/// Target and optional title of a link-reference definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDefinition {
    pub target: String,
    pub title: Option<String>,
}

/// Link-reference side table, keyed by normalized label.
///
/// Populated during the block pass and read-only during the span pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRefs {
    defs: HashMap<String, LinkDefinition>,
}

impl LinkRefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-folds and collapses internal whitespace.
    pub fn normalize_label(label: &str) -> String {
        label
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Records a definition; the first definition of a label wins.
    ///
    /// Returns false when the label was already defined or normalizes to nothing.
    pub fn insert(&mut self, label: &str, def: LinkDefinition) -> bool {
        let key = Self::normalize_label(label);
        if key.is_empty() || self.defs.contains_key(&key) {
            return false;
        }
        self.defs.insert(key, def);
        true
    }

    pub fn get(&self, label: &str) -> Option<&LinkDefinition> {
        self.defs.get(&Self::normalize_label(label))
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
