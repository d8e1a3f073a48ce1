//! Front matter aware Markdown round-tripping
//!
//!     mdex reads a document made of an optional metadata header (YAML front matter) and a
//!     CommonMark body, and writes it back out:
//!
//!         raw text → frontmatter::split → (header, body)
//!                  → comrak → AST
//!                  → markdown::serializer::render → Markdown
//!                  → header block + Markdown
//!
//!     The library never parses Markdown itself; comrak does. What lives here is the glue
//!     around it and the renderer, which maps each CommonMark node type back to text through
//!     an entering/leaving walk (see ./markdown/mod.rs for the node table).
//!
//!     This is a pure lib: no file or terminal access. The mdex-cli crate is the shell around
//!     it.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── options.rs              # Parser knobs → comrak options
//!     ├── frontmatter.rs          # Header/body splitting, YAML attributes
//!     ├── document.rs             # Document model, round_trip
//!     ├── markdown
//!     │   ├── kind.rs             # Node type tags
//!     │   ├── walker.rs           # Entering/leaving traversal
//!     │   ├── parser.rs           # text → Document
//!     │   ├── serializer.rs       # Document → text
//!     │   └── mod.rs
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
pub mod document;
pub mod error;
pub mod frontmatter;
pub mod markdown;
pub mod options;

pub use document::{round_trip, Document};
pub use error::DocumentError;
pub use frontmatter::{split, Split};
pub use markdown::kind::NodeKind;
pub use markdown::parser::parse_document;
pub use markdown::serializer::{render, serialize};
pub use markdown::walker::{TraversalEvent, Walker};
pub use options::ParseOptions;
