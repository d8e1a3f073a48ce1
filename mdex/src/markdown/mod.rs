//! CommonMark round-tripping
//!
//! Parsing is delegated to `comrak`; this module adds what comrak does not give us: a walker
//! with CommonMark's entering/leaving contract ([`walker`]) and a renderer that maps each node
//! type back to Markdown text ([`serializer`]).
//!
//! # Node Mapping
//!
//! | Node           | Entering                         | Leaving        |
//! |----------------|----------------------------------|----------------|
//! | Text           | literal                          |                |
//! | SoftBreak      | `\n`                             |                |
//! | LineBreak      | `\n`                             |                |
//! | Emph           | `*`                              | `*`            |
//! | Strong         | `**`                             | `**`           |
//! | HtmlInline     | `` ` ``                          |                |
//! | Link           | `[`                              | `](url)`       |
//! | Image          | nothing (alt text still renders) |                |
//! | Code           | `` `literal` ``                  |                |
//! | Paragraph      | nothing                          | `\n\n`         |
//! | BlockQuote     | `> `                             |                |
//! | Item           | `* ` or `1. ` / `1) `            |                |
//! | Heading        | `#` × level, space               |                |
//! | CodeBlock      | fenced, info string after fence  |                |
//! | HtmlBlock      | literal                          |                |
//! | ThematicBreak  | `---\n\n`                        |                |
//!
//! Anything else (tables, strikethrough, footnotes, ...) renders only its children's text.
//!
//! # Lossy Conversions
//!
//! - Nested block quotes and list items are not indented on continuation lines
//! - Inline HTML tags collapse to a single backtick each
//! - Ordered lists lose their numbering (every item is `1.`)
//! - Image destinations are dropped

pub mod kind;
pub mod parser;
pub mod serializer;
pub mod walker;
