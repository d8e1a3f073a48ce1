use comrak::Arena;
use mdex::{parse_document, serialize, split, DocumentError, ParseOptions};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq)]
struct PostMeta {
    title: String,
    #[serde(default)]
    draft: bool,
}

#[test]
fn test_header_is_prefixed_verbatim() {
    let arena = Arena::new();
    let doc = parse_document(
        &arena,
        "---\ntitle: Export Test\ntags: [a, b]\n---\n\nContent.\n",
        &ParseOptions::default(),
    )
    .expect("Failed to parse document");

    let output = serialize(&doc);
    assert!(output.starts_with("---\ntitle: Export Test\ntags: [a, b]\n---\n"));
    assert_eq!(output, "---\ntitle: Export Test\ntags: [a, b]\n---\nContent.\n");
}

#[test]
fn test_no_header_has_no_fence() {
    let arena = Arena::new();
    let doc = parse_document(&arena, "Just text.\n", &ParseOptions::default()).unwrap();
    assert!(doc.header.is_none());
    assert!(!serialize(&doc).starts_with("---"));
}

#[test]
fn test_header_built_by_hand() {
    let arena = Arena::new();
    let mut doc = parse_document(&arena, "# Title", &ParseOptions::default()).unwrap();
    doc.header = Some("layout: post".to_string());
    assert_eq!(serialize(&doc), "---\nlayout: post\n---\n# Title");
    assert_eq!(doc.to_markdown(), serialize(&doc));
}

#[test]
fn test_header_is_opaque_when_not_validated() {
    let options = ParseOptions {
        validate_header: false,
        ..ParseOptions::default()
    };
    let arena = Arena::new();
    let doc = parse_document(&arena, "---\n{{ not yaml\n---\nx", &options).unwrap();
    assert_eq!(serialize(&doc), "---\n{{ not yaml\n---\nx\n");
}

#[test]
fn test_malformed_header_fails() {
    let arena = Arena::new();
    let err = parse_document(&arena, "---\n{{ not yaml\n---\nx", &ParseOptions::default())
        .unwrap_err();
    assert!(matches!(err, DocumentError::Split(_)));
    assert!(err.to_string().starts_with("Invalid front matter"));
}

#[test]
fn test_typed_attributes() {
    let arena = Arena::new();
    let doc = parse_document(
        &arena,
        "---\ntitle: Hello\ndraft: true\n---\nbody",
        &ParseOptions::default(),
    )
    .unwrap();
    let meta: PostMeta = doc.attributes().unwrap();
    assert_eq!(
        meta,
        PostMeta {
            title: "Hello".to_string(),
            draft: true
        }
    );
}

#[test]
fn test_attributes_without_header_default() {
    let arena = Arena::new();
    let doc = parse_document(&arena, "body", &ParseOptions::default()).unwrap();
    assert_eq!(doc.attributes::<PostMeta>().unwrap(), PostMeta::default());
}

#[test]
fn test_body_begin_points_past_header() {
    let text = "---\na: 1\nb: 2\n---\nfirst body line\n";
    let split = split(text);
    assert_eq!(split.body_begin, 5);
    assert_eq!(text.lines().nth(split.body_begin - 1), Some("first body line"));
}

#[test]
fn test_leading_thematic_break_is_read_as_header() {
    // A body that starts with "---" and has a later "---" line is indistinguishable from
    // front matter.
    let split = split("---\n\ntext\n\n---\n\nmore");
    assert_eq!(split.header.as_deref(), Some("text"));
    assert_eq!(split.body, "more");
}
