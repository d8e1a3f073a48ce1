//! Node type tags
//!
//! comrak's [`NodeValue`] carries both the type of a node and its attributes. [`NodeKind`]
//! is just the tag: the closed set of CommonMark constructs the renderer knows, plus
//! [`NodeKind::Other`] for everything an extension may add.

use comrak::nodes::{AstNode, NodeValue};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    BlockQuote,
    List,
    Item,
    Paragraph,
    Heading,
    CodeBlock,
    HtmlBlock,
    ThematicBreak,
    Text,
    SoftBreak,
    LineBreak,
    Code,
    HtmlInline,
    Emph,
    Strong,
    Link,
    Image,
    /// Extension nodes (tables, strikethrough, footnotes, ...)
    Other,
}

impl NodeKind {
    pub fn of(value: &NodeValue) -> Self {
        match value {
            NodeValue::Document => NodeKind::Document,
            NodeValue::BlockQuote => NodeKind::BlockQuote,
            NodeValue::List(_) => NodeKind::List,
            NodeValue::Item(_) => NodeKind::Item,
            NodeValue::Paragraph => NodeKind::Paragraph,
            NodeValue::Heading(_) => NodeKind::Heading,
            NodeValue::CodeBlock(_) => NodeKind::CodeBlock,
            NodeValue::HtmlBlock(_) => NodeKind::HtmlBlock,
            NodeValue::ThematicBreak => NodeKind::ThematicBreak,
            NodeValue::Text(_) => NodeKind::Text,
            NodeValue::SoftBreak => NodeKind::SoftBreak,
            NodeValue::LineBreak => NodeKind::LineBreak,
            NodeValue::Code(_) => NodeKind::Code,
            NodeValue::HtmlInline(_) => NodeKind::HtmlInline,
            NodeValue::Emph => NodeKind::Emph,
            NodeValue::Strong => NodeKind::Strong,
            NodeValue::Link(_) => NodeKind::Link,
            NodeValue::Image(_) => NodeKind::Image,
            _ => NodeKind::Other,
        }
    }

    pub fn of_node<'a>(node: &'a AstNode<'a>) -> Self {
        Self::of(&node.data.borrow().value)
    }

    /// CommonMark name of the construct, as used in logs and `mdex inspect`.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::BlockQuote => "block_quote",
            NodeKind::List => "list",
            NodeKind::Item => "item",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::CodeBlock => "code_block",
            NodeKind::HtmlBlock => "html_block",
            NodeKind::ThematicBreak => "thematic_break",
            NodeKind::Text => "text",
            NodeKind::SoftBreak => "softbreak",
            NodeKind::LineBreak => "linebreak",
            NodeKind::Code => "code",
            NodeKind::HtmlInline => "html_inline",
            NodeKind::Emph => "emph",
            NodeKind::Strong => "strong",
            NodeKind::Link => "link",
            NodeKind::Image => "image",
            NodeKind::Other => "other",
        }
    }

    /// Whether nodes of this kind can hold children. `None` for [`NodeKind::Other`], which
    /// can be either.
    pub fn is_container(self) -> Option<bool> {
        match self {
            NodeKind::Text
            | NodeKind::SoftBreak
            | NodeKind::LineBreak
            | NodeKind::Code
            | NodeKind::HtmlInline
            | NodeKind::CodeBlock
            | NodeKind::HtmlBlock
            | NodeKind::ThematicBreak => Some(false),
            NodeKind::Other => None,
            _ => Some(true),
        }
    }

    /// Whether a walk opens `node`, i.e. emits a leaving event for it after its children.
    /// Extension nodes open only when they have children.
    pub fn opens<'a>(node: &'a AstNode<'a>) -> bool {
        Self::of_node(node)
            .is_container()
            .unwrap_or_else(|| node.first_child().is_some())
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
