//! Display surface seam
//!
//! The ordered container cards are inserted into. The surrounding host owns
//! any real surface; [`MemorySurface`] is the provided implementation and
//! what the tests and the CLI use.

use crate::node::Node;

/// Ordered container of rendered cards
///
/// # Contract
/// - `prepend` inserts at the start, `append` at the end
/// - `children` enumerates in display order (first child displays on top)
pub trait DisplaySurface {
    /// Insert a node before all current children
    fn prepend(&mut self, node: Node);

    /// Insert a node after all current children
    fn append(&mut self, node: Node);

    /// Current children in display order
    fn children(&self) -> &[Node];

    /// Remove all children
    fn clear(&mut self);
}

/// In-memory display surface
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    children: Vec<Node>,
}

impl MemorySurface {
    /// Create empty surface
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for MemorySurface {
    fn prepend(&mut self, node: Node) {
        self.children.insert(0, node);
    }

    fn append(&mut self, node: Node) {
        self.children.push(node);
    }

    fn children(&self) -> &[Node] {
        &self.children
    }

    fn clear(&mut self) {
        self.children.clear();
    }
}
