//! The in-memory document: an optional header and a Markdown AST

use crate::error::DocumentError;
use crate::frontmatter;
use crate::markdown::kind::NodeKind;
use crate::markdown::parser::parse_document;
use crate::markdown::serializer::serialize;
use crate::options::ParseOptions;
use comrak::nodes::AstNode;
use comrak::Arena;
use serde::de::DeserializeOwned;
use std::fmt;

/// A parsed document.
///
/// `header` is `None` when the source had no front matter block at all, and `Some("")` when
/// it had an empty one; the two serialize differently. The body borrows the arena it was
/// parsed into.
#[derive(Clone)]
pub struct Document<'a> {
    pub header: Option<String>,
    pub body: &'a AstNode<'a>,
    /// 1-based line of the source on which the body starts. Source positions inside `body`
    /// are relative to this line.
    pub body_begin: usize,
}

impl<'a> Document<'a> {
    /// Deserialize the header as YAML.
    ///
    /// Documents without a header (or with an empty one) yield `T::default()`.
    pub fn attributes<T>(&self) -> Result<T, DocumentError>
    where
        T: DeserializeOwned + Default,
    {
        frontmatter::attributes(self.header.as_deref())
    }

    pub fn to_markdown(&self) -> String {
        serialize(self)
    }
}

impl fmt::Debug for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("header", &self.header)
            .field("body", &NodeKind::of_node(self.body))
            .field("body_begin", &self.body_begin)
            .finish()
    }
}

/// Parse and re-serialize `text` in one go.
pub fn round_trip(text: &str, options: &ParseOptions) -> Result<String, DocumentError> {
    let arena = Arena::new();
    let document = parse_document(&arena, text, options)?;
    Ok(serialize(&document))
}
