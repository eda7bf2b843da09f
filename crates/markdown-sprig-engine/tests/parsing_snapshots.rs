use markdown_sprig_engine::{
    AstRenderer, Document, ParserConfig, Renderer, TokenKind, WikiLinkExtension,
};

#[test]
fn fixture_heading_and_paragraph() {
    assert_fixture("heading_and_paragraph", &ParserConfig::default());
}

#[test]
fn fixture_nested_list() {
    assert_fixture("nested_list", &ParserConfig::default());
}

#[test]
fn fixture_wiki_links() {
    let config = ParserConfig::default()
        .with_extension(WikiLinkExtension::new())
        .unwrap();
    assert_fixture("wiki_links", &config);
}

fn assert_fixture(name: &str, config: &ParserConfig) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let rope = xi_rope::Rope::from(md.as_str());

    let doc = markdown_sprig_engine::parse_document(&rope, config);
    let ast = AstRenderer.render_document(&doc);
    insta::assert_yaml_snapshot!(name, ast);
}

/// Code spans are raw zones even with the wiki-link rule active
#[test]
fn raw_zones_suppress_inline_parsing() {
    let config = ParserConfig::default()
        .with_extension(WikiLinkExtension::new())
        .unwrap();
    let doc = config.parse("`[[not a link]]`");

    assert_eq!(doc.children.len(), 1);
    assert!(doc.find_first(TokenKind::InlineCode).is_ok());
    assert!(doc.find_first(TokenKind::Extension("WikiLink")).is_err());
}

#[test]
fn same_input_same_tree() {
    let md = "# A\n\n> - b *c*\n\n```\nd\n```\n";
    assert_eq!(Document::parse(md), Document::parse(md));
}
