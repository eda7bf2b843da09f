use std::ops::Deref;
use std::sync::Arc;

use log::{debug, warn};
use markdown_sprig_config::{Config, Flanking};

use crate::error::RegistryError;

use super::inline::{
    SpanExtension, SpanRegistry,
    kinds::{WikiLink, WikiLinkExtension},
};

/// Everything a parse needs besides the source text.
///
/// An ordinary value handed to each parse call; two parses with different
/// configurations never observe each other's extensions.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub registry: SpanRegistry,
    pub flanking: Flanking,
    /// Columns a leading tab expands to.
    pub tab_width: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            registry: SpanRegistry::default(),
            flanking: Flanking::default(),
            tab_width: Config::default().tab_width,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`SpanRegistry::register`].
    pub fn with_extension<E: SpanExtension + 'static>(mut self, ext: E) -> Result<Self, RegistryError> {
        self.registry.register(Arc::new(ext))?;
        Ok(self)
    }

    pub fn with_flanking(mut self, flanking: Flanking) -> Self {
        self.flanking = flanking;
        self
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Registers `ext` until the returned guard is dropped.
    ///
    /// Parse through the guard while it is alive:
    ///
    /// ```rust
    /// # use markdown_sprig_engine::{ParserConfig, WikiLinkExtension, TokenKind};
    /// let mut config = ParserConfig::default();
    /// {
    ///     let scope = config.enable(WikiLinkExtension::new()).unwrap();
    ///     let doc = scope.parse("[[wiki|target]]");
    ///     assert!(doc.find_first(TokenKind::Extension("WikiLink")).is_ok());
    /// }
    /// let doc = config.parse("[[wiki|target]]");
    /// assert!(doc.find_first(TokenKind::Extension("WikiLink")).is_err());
    /// ```
    pub fn enable<E: SpanExtension + 'static>(
        &mut self,
        ext: E,
    ) -> Result<ExtensionScope<'_>, RegistryError> {
        let name = ext.name();
        self.registry.register(Arc::new(ext))?;
        debug!("extension {name} enabled for scope");
        Ok(ExtensionScope { config: self, name })
    }

    /// Builds a parser configuration from on-disk settings.
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let mut parser = Self::default()
            .with_flanking(config.flanking)
            .with_tab_width(config.tab_width);
        for name in &config.extensions {
            let ext = extension_by_name(name)?;
            parser.registry.register(ext)?;
        }
        Ok(parser)
    }
}

/// Extensions that can be enabled by name from a config file.
pub fn extension_by_name(name: &str) -> Result<Arc<dyn SpanExtension>, RegistryError> {
    match name {
        WikiLink::NAME => Ok(Arc::new(WikiLinkExtension::new())),
        other => Err(RegistryError::UnknownExtension(other.to_string())),
    }
}

/// Guard returned by [`ParserConfig::enable`]; deregisters its extension on drop.
pub struct ExtensionScope<'a> {
    config: &'a mut ParserConfig,
    name: &'static str,
}

impl ExtensionScope<'_> {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Deref for ExtensionScope<'_> {
    type Target = ParserConfig;

    fn deref(&self) -> &ParserConfig {
        self.config
    }
}

impl Drop for ExtensionScope<'_> {
    fn drop(&mut self) {
        match self.config.registry.deregister(self.name) {
            Ok(_) => debug!("extension {} released", self.name),
            Err(e) => warn!("extension scope release failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_registers_then_releases() {
        let mut config = ParserConfig::default();
        {
            let scope = config.enable(WikiLinkExtension::new()).unwrap();
            assert_eq!(scope.name(), WikiLink::NAME);
            assert!(scope.registry.contains(WikiLink::NAME));
        }
        assert!(!config.registry.contains(WikiLink::NAME));
    }

    #[test]
    fn enabling_twice_is_duplicate() {
        let mut config = ParserConfig::default()
            .with_extension(WikiLinkExtension::new())
            .unwrap();
        let err = config.enable(WikiLinkExtension::new()).err();
        assert_eq!(err, Some(RegistryError::Duplicate(WikiLink::NAME.into())));
        assert!(config.registry.contains(WikiLink::NAME));
    }

    #[test]
    fn from_config_resolves_names() {
        let config = Config {
            extensions: vec!["wiki_link".into()],
            flanking: Flanking::Whitespace,
            tab_width: 2,
        };
        let parser = ParserConfig::from_config(&config).unwrap();
        assert!(parser.registry.contains(WikiLink::NAME));
        assert_eq!(parser.flanking, Flanking::Whitespace);
        assert_eq!(parser.tab_width, 2);
    }

    #[test]
    fn from_config_rejects_unknown_names() {
        let config = Config {
            extensions: vec!["footnotes".into()],
            ..Config::default()
        };
        assert_eq!(
            ParserConfig::from_config(&config).err(),
            Some(RegistryError::UnknownExtension("footnotes".into()))
        );
    }
}
