use comrak::{parse_document, Arena, Options};
use insta::assert_snapshot;
use mdex::render;

fn render_str(source: &str) -> String {
    let arena = Arena::new();
    let root = parse_document(&arena, source, &Options::default());
    render(root)
}

#[test]
fn test_hello_world_scenario() {
    // Paragraph closes with "\n\n"; only the last newline is trimmed.
    assert_eq!(render_str("Hello *world*"), "Hello *world*\n");
}

#[test]
fn test_emphasis_bracketing() {
    assert_eq!(render_str("_inner_").trim_end(), "*inner*");
    assert_eq!(render_str("__inner__").trim_end(), "**inner**");
    assert_eq!(render_str("***both***").trim_end(), "***both***");
}

#[test]
fn test_ordered_item_marker() {
    assert_eq!(render_str("7. seven"), "1. seven\n");
    assert_eq!(render_str("2) two"), "1) two\n");
}

#[test]
fn test_bullet_markers_are_normalized() {
    assert_eq!(render_str("- a\n+ b\n"), "* a\n\n* b\n");
}

#[test]
fn test_code_block_scenario() {
    let out = render_str("intro\n\n```go\nfmt.Println()\n```\n\nafter");
    assert!(out.contains("``` go\nfmt.Println()\n```\n\nafter"));
}

#[test]
fn test_code_block_at_end_keeps_one_newline() {
    assert_eq!(
        render_str("```go\nfmt.Println()\n```"),
        "``` go\nfmt.Println()\n```\n"
    );
}

#[test]
fn test_indented_code_block_has_empty_info() {
    assert_eq!(render_str("    let x = 1;\n"), "``` \nlet x = 1;\n```\n");
}

#[test]
fn test_heading_has_no_closing_newline() {
    // Headings have no leaving handler, so following text runs on.
    assert_eq!(render_str("## Title\n\nBody\n"), "## TitleBody\n");
}

#[test]
fn test_block_quote_prefixes_first_line_only() {
    assert_eq!(render_str("> one\n> two\n"), "> one\ntwo\n");
}

#[test]
fn test_thematic_break() {
    assert_eq!(render_str("a\n\n***\n\nb"), "a\n\n---\n\nb\n");
}

#[test]
fn test_kitchen_sink() {
    let source = r#"Some *emphasis*, **strong** and `code`.
A [link](https://example.com) on a second line.

> quoted

* one
* two

3) three

```rust
fn main() {}
```

***
"#;
    let rendered = render_str(source);
    assert_snapshot!(rendered.trim_end(), @r#"
Some *emphasis*, **strong** and `code`.
A [link](https://example.com) on a second line.

> quoted

* one

* two

1) three

``` rust
fn main() {}
```

---
"#);
}
