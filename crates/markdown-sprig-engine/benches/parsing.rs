use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use markdown_sprig_engine::{
    AstRenderer, Document, HtmlRenderer, ParserConfig, Renderer, WikiLinkExtension,
};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(20);

    let content = common::generate_markdown_content(100);
    group.bench_function("mixed_blocks", |b| {
        b.iter(|| black_box(Document::parse(black_box(&content))));
    });

    let inline = common::generate_inline_heavy(200);
    let config = ParserConfig::default()
        .with_extension(WikiLinkExtension::new())
        .expect("wiki link registers once");
    group.bench_function("inline_heavy_with_wiki_links", |b| {
        b.iter(|| black_box(config.parse(black_box(&inline))));
    });

    group.finish();
}

fn bench_clone_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    group.sample_size(20);

    let doc = Document::parse(&common::generate_markdown_content(100));
    group.bench_function("deep_clone", |b| {
        b.iter(|| black_box(doc.clone()));
    });
    group.bench_function("render_html", |b| {
        b.iter(|| black_box(HtmlRenderer::default().render_document(&doc)));
    });
    group.bench_function("render_ast", |b| {
        b.iter(|| black_box(AstRenderer.render_document(&doc)));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_clone_and_render);
criterion_main!(benches);
