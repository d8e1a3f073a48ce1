//! Rendering is a pure function of the AST, and its output is a fixed point after one pass
//! for the constructs generated here.

use comrak::{parse_document, Arena, Options};
use mdex::{render, round_trip, ParseOptions};
use proptest::prelude::*;

fn render_str(source: &str) -> String {
    let arena = Arena::new();
    let root = parse_document(&arena, source, &Options::default());
    render(root)
}

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn inline() -> impl Strategy<Value = String> {
    prop_oneof![
        word(),
        word().prop_map(|w| format!("*{w}*")),
        word().prop_map(|w| format!("**{w}**")),
        word().prop_map(|w| format!("`{w}`")),
        word().prop_map(|w| format!("[{w}](https://example.com/{w})")),
    ]
}

fn line() -> impl Strategy<Value = String> {
    prop::collection::vec(inline(), 1..6).prop_map(|parts| parts.join(" "))
}

fn list(marker: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(line(), 1..4).prop_map(move |items| {
        items
            .iter()
            .map(|item| format!("{marker} {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn block() -> impl Strategy<Value = String> {
    prop_oneof![
        line(),
        list("*"),
        list("1."),
        line().prop_map(|l| format!("> {l}")),
        (word(), prop::collection::vec(word(), 1..4))
            .prop_map(|(info, lines)| format!("```{info}\n{}\n```", lines.join("\n"))),
        Just("---".to_string()),
    ]
}

fn document() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(block(), 1..6),
        prop::option::of(line()),
    )
        .prop_map(|(blocks, heading)| {
            let mut source = blocks.join("\n\n");
            // Headings emit no closing newline, so one is only stable as the last block.
            if let Some(heading) = heading {
                source.push_str(&format!("\n\n# {heading}"));
            }
            source
        })
}

proptest! {
    #[test]
    fn rendering_stabilizes_after_one_pass(source in document()) {
        let once = render_str(&source);
        let twice = render_str(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn header_survives_round_trip(key in "[a-z]{1,8}", value in "[a-z]{1,8}", body in line()) {
        let header = format!("{key}: {value}");
        let text = format!("---\n{header}\n---\n{body}\n");
        let out = round_trip(&text, &ParseOptions::default()).unwrap();
        let prefix = format!("---\n{header}\n---\n");
        prop_assert!(out.starts_with(&prefix));
    }
}

#[test]
fn test_round_trip_is_deterministic() {
    let text = "---\ntitle: x\n---\n* a\n* b\n";
    let first = round_trip(text, &ParseOptions::default()).unwrap();
    let second = round_trip(text, &ParseOptions::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "---\ntitle: x\n---\n* a\n\n* b\n");
}

#[test]
fn test_round_trip_output_round_trips() {
    let text = "---\ntitle: x\n---\nSome *text*.\n\n1. one\n2. two\n";
    let once = round_trip(text, &ParseOptions::default()).unwrap();
    let twice = round_trip(&once, &ParseOptions::default()).unwrap();
    assert_eq!(once, twice);
}
