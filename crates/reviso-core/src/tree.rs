use crate::NodeId;
use serde::{Deserialize, Serialize};

/// Maximum supported tree depth.
///
/// Generated study documents stay in the single digits; this bound exists so
/// malformed input fails at ingestion instead of overflowing the layout
/// recursion.
pub const MAX_TREE_DEPTH: u32 = 64;

/// One node of the mind-map tree as delivered by the backend.
///
/// The tree is constructed once by the document-generation pipeline and is
/// read-only to the layout engine: every layout pass borrows it and produces
/// a fresh positioned-node list. Child order is significant; it determines
/// angular order in the radial layout and vertical order in the tree layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindMapNode {
    pub id: NodeId,
    pub label: String,
    #[serde(default)]
    pub children: Vec<MindMapNode>,
}

impl MindMapNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(id),
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(
        id: impl Into<String>,
        label: impl Into<String>,
        children: Vec<MindMapNode>,
    ) -> Self {
        Self {
            id: NodeId::new(id),
            label: label.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(MindMapNode::node_count)
            .sum::<usize>()
    }

    /// Depth of this subtree; a lone leaf has depth 0.
    pub fn depth(&self) -> u32 {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
