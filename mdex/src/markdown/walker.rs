//! Depth-first traversal of a comrak AST
//!
//! [`Walker`] yields every node twice, once entering (pre-order) and once leaving
//! (post-order), except leaves, which are only entered. This is the CommonMark reference
//! walker's contract and differs from [`comrak::arena_tree::Node::traverse`], which closes
//! every node including leaves.
//!
//! The walk is lazy and single-use: it keeps no state besides the current position, and never
//! touches node contents.

use super::kind::NodeKind;
use comrak::nodes::AstNode;

/// One visit of a node during a walk.
#[derive(Clone, Copy)]
pub struct TraversalEvent<'a> {
    pub node: &'a AstNode<'a>,
    pub entering: bool,
}

impl TraversalEvent<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::of_node(self.node)
    }
}

impl std::fmt::Debug for TraversalEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraversalEvent")
            .field("kind", &self.kind())
            .field("entering", &self.entering)
            .finish()
    }
}

pub struct Walker<'a> {
    root: &'a AstNode<'a>,
    current: Option<&'a AstNode<'a>>,
    entering: bool,
}

impl<'a> Walker<'a> {
    pub fn new(root: &'a AstNode<'a>) -> Self {
        Self {
            root,
            current: Some(root),
            entering: true,
        }
    }
}

impl<'a> Iterator for Walker<'a> {
    type Item = TraversalEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        let entering = self.entering;

        if entering && NodeKind::opens(node) {
            match node.first_child() {
                Some(child) => self.current = Some(child),
                None => self.entering = false,
            }
        } else if std::ptr::eq(node, self.root) {
            self.current = None;
        } else if let Some(sibling) = node.next_sibling() {
            self.current = Some(sibling);
            self.entering = true;
        } else {
            self.current = node.parent();
            self.entering = false;
        }

        Some(TraversalEvent { node, entering })
    }
}
