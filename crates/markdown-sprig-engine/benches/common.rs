// Helpers shared by bench targets; each target only uses some of them.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and `code`.\n\n- Bullet point\n  - Nested item\n- Another [item](/target \"t\")\n\n> quoted ~~text~~\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n| a | b |\n| :- | -: |\n| 1 | 2 |\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(size: usize) -> String {
    let line = "Text with **strong _nested em_**, \\*escapes\\*, <https://example.com>, [[Wiki | page]] and ![img](/i.png).\n";
    line.repeat(size)
}
