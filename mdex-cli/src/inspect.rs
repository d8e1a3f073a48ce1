//! Inspection views of a parsed document
//!
//! Each view renders the body AST as text for debugging the round trip:
//!
//! - `events`: the raw walk, one `enter`/`leave` line per traversal event
//! - `tree`: the node hierarchy, with literal text shown for leaves

use comrak::nodes::{AstNode, NodeValue};
use mdex::{NodeKind, Walker};

/// Views accepted by `mdex inspect`.
pub const AVAILABLE_VIEWS: &[&str] = &["events", "tree"];

/// Render `root` with the named view. Unknown names are an error.
pub fn execute_view<'a>(root: &'a AstNode<'a>, view: &str) -> Result<String, String> {
    match view {
        "events" => Ok(events(root)),
        "tree" => Ok(tree(root)),
        other => Err(format!(
            "Unknown view '{other}'. Available: {}",
            AVAILABLE_VIEWS.join(", ")
        )),
    }
}

fn events<'a>(root: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for event in Walker::new(root) {
        let kind = event.kind();
        if !event.entering {
            depth = depth.saturating_sub(1);
        }
        let verb = if event.entering { "enter" } else { "leave" };
        out.push_str(&format!("{}{verb} {kind}\n", "  ".repeat(depth)));
        if event.entering && NodeKind::opens(event.node) {
            depth += 1;
        }
    }
    out
}

fn tree<'a>(root: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for event in Walker::new(root) {
        let kind = event.kind();
        if !event.entering {
            depth = depth.saturating_sub(1);
            continue;
        }
        out.push_str(&"  ".repeat(depth));
        out.push_str(kind.name());
        if let Some(literal) = literal(&event.node.data.borrow().value) {
            out.push_str(&format!(" {literal:?}"));
        }
        out.push('\n');
        if NodeKind::opens(event.node) {
            depth += 1;
        }
    }
    out
}

fn literal(value: &NodeValue) -> Option<&str> {
    match value {
        NodeValue::Text(text) | NodeValue::HtmlInline(text) => Some(text.as_str()),
        NodeValue::Code(code) => Some(code.literal.as_str()),
        NodeValue::CodeBlock(block) => Some(block.literal.as_str()),
        NodeValue::HtmlBlock(html) => Some(html.literal.as_str()),
        NodeValue::Link(link) | NodeValue::Image(link) => Some(link.url.as_str()),
        _ => None,
    }
}
