//! Markdown serialization (AST → text)
//!
//! Rendering walks the tree with [`Walker`] and hands each visit to one of two handler
//! tables: [`entering`] for pre-order visits and [`leaving`] for post-order ones. A handler
//! returns the text for that visit; bracketing constructs (emphasis, links) emit their opening
//! token entering and their closing token leaving, so no explicit state is carried.
//!
//! The output is a normalized form, not the original source: bullets become `*`, ordered
//! items are all numbered `1`, and headings are always ATX.

use super::kind::NodeKind;
use super::walker::Walker;
use crate::document::Document;
use comrak::nodes::{AstNode, ListDelimType, ListType, NodeValue};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Serialize a document: header block (if any) followed by the rendered body.
pub fn serialize(document: &Document<'_>) -> String {
    let body = render(document.body);
    match &document.header {
        None => body,
        Some(header) => format!("---\n{header}\n---\n{body}"),
    }
}

/// Render an AST back to Markdown.
///
/// Exactly one trailing newline is removed from the result.
pub fn render<'a>(root: &'a AstNode<'a>) -> String {
    let mut output = String::new();
    let mut events = 0usize;

    for event in Walker::new(root) {
        events += 1;
        let ast = event.node.data.borrow();
        let handled = if event.entering {
            entering(&ast.value)
        } else {
            leaving(&ast.value)
        };
        match handled {
            Some(text) => output.push_str(&text),
            None if event.entering => {
                trace!(target: "mdex::render", kind = %NodeKind::of(&ast.value), "no handler, skipping");
            }
            None => {}
        }
    }

    if output.ends_with('\n') {
        output.pop();
    }
    debug!(target: "mdex::render", events, bytes = output.len(), "rendered document");
    output
}

/// Output for a node visited in pre-order. `None` when the node type has no entering handler.
fn entering(value: &NodeValue) -> Option<Cow<'_, str>> {
    let text = match value {
        NodeValue::Text(literal) => Cow::Borrowed(literal.as_str()),
        NodeValue::SoftBreak | NodeValue::LineBreak => Cow::Borrowed("\n"),
        NodeValue::Emph => Cow::Borrowed("*"),
        NodeValue::Strong => Cow::Borrowed("**"),
        NodeValue::HtmlInline(_) => Cow::Borrowed("`"),
        NodeValue::Link(_) => Cow::Borrowed("["),
        NodeValue::Image(_) => Cow::Borrowed(""),
        NodeValue::Code(code) => Cow::Owned(format!("`{}`", code.literal)),
        NodeValue::Document | NodeValue::Paragraph | NodeValue::List(_) => Cow::Borrowed(""),
        NodeValue::BlockQuote => Cow::Borrowed("> "),
        NodeValue::Item(list) => Cow::Owned(item_marker(list.list_type, list.delimiter)),
        NodeValue::Heading(heading) => {
            Cow::Owned(format!("{} ", "#".repeat(usize::from(heading.level))))
        }
        NodeValue::CodeBlock(block) => {
            Cow::Owned(format!("``` {}\n{}```\n\n", block.info, block.literal))
        }
        NodeValue::HtmlBlock(html) => Cow::Borrowed(html.literal.as_str()),
        NodeValue::ThematicBreak => Cow::Borrowed("---\n\n"),
        _ => return None,
    };
    Some(text)
}

/// Output for a node visited in post-order. Only bracketing constructs close anything.
fn leaving(value: &NodeValue) -> Option<Cow<'_, str>> {
    let text = match value {
        NodeValue::Paragraph => Cow::Borrowed("\n\n"),
        NodeValue::Link(link) => Cow::Owned(format!("]({})", link.url)),
        NodeValue::Strong => Cow::Borrowed("**"),
        NodeValue::Emph => Cow::Borrowed("*"),
        _ => return None,
    };
    Some(text)
}

fn item_marker(list_type: ListType, delimiter: ListDelimType) -> String {
    match list_type {
        ListType::Bullet => "* ".to_string(),
        ListType::Ordered => {
            let delimiter = match delimiter {
                ListDelimType::Period => '.',
                ListDelimType::Paren => ')',
            };
            format!("1{delimiter} ")
        }
    }
}
