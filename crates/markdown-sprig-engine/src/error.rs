use thiserror::Error;

use crate::tree::TokenKind;

/// Misuse of the span registry. These are programming errors on the caller
/// managing extension scopes, never produced by parsing itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("span rule already registered: {0}")]
    Duplicate(String),
    #[error("span rule not registered: {0}")]
    NotRegistered(String),
    #[error("unknown extension in configuration: {0}")]
    UnknownExtension(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no {0} token in tree")]
    NotFound(TokenKind),
}
