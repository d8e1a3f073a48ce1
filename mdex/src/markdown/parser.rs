//! Markdown parsing (text → Document)
//!
//! Pipeline: raw text → front matter split → comrak AST (allocated in the caller's arena)

use crate::document::Document;
use crate::error::DocumentError;
use crate::frontmatter;
use crate::options::ParseOptions;
use comrak::nodes::AstNode;
use comrak::{parse_document as parse_commonmark, Arena};
use tracing::debug;

/// Parse a document with an optional front matter header.
///
/// The AST is allocated in `arena`, which must outlive the returned [`Document`].
pub fn parse_document<'a>(
    arena: &'a Arena<AstNode<'a>>,
    text: &str,
    options: &ParseOptions,
) -> Result<Document<'a>, DocumentError> {
    let split = frontmatter::split(text);
    if options.validate_header {
        split.validate()?;
    }
    debug!(
        target: "mdex::parse",
        has_header = split.header.is_some(),
        body_begin = split.body_begin,
        "split front matter"
    );

    let body = parse_commonmark(arena, split.body, &options.to_comrak());

    Ok(Document {
        header: split.header,
        body,
        body_begin: split.body_begin,
    })
}
