use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

pub mod tree;

pub use tree::{MAX_TREE_DEPTH, MindMapNode};

/// Opaque unique identifier for a mind-map node.
///
/// Ids are assigned by the document-generation backend and are treated as
/// plain strings here; the engine never inspects their structure.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Which layout strategy the engine should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Tree,
    Radial,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Tree => write!(f, "tree"),
            LayoutMode::Radial => write!(f, "radial"),
        }
    }
}

/// Error type for tree ingestion failures.
///
/// The layout engine assumes a valid tree; callers run
/// [`MindMapNode::validate`] once when a tree arrives from the backend and
/// reject bad input before any layout pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("root node has an empty label")]
    EmptyLabel,
    #[error("duplicate node id in tree: {0}")]
    DuplicateId(NodeId),
    #[error("tree depth exceeds maximum of {max}")]
    DepthExceeded { max: u32 },
}

impl MindMapNode {
    /// Validate a freshly ingested tree.
    ///
    /// Checks the preconditions the layout algorithms rely on: a non-empty
    /// root label, globally unique ids (a shared child or cycle in the
    /// backend's JSON surfaces as a repeated id once parsed into an owned
    /// tree), and a bounded depth so layout recursion cannot run away.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.label.trim().is_empty() {
            return Err(TreeError::EmptyLabel);
        }
        let mut seen = HashSet::new();
        self.check_subtree(&mut seen, 0)
    }

    fn check_subtree<'a>(
        &'a self,
        seen: &mut HashSet<&'a str>,
        depth: u32,
    ) -> Result<(), TreeError> {
        if depth > MAX_TREE_DEPTH {
            return Err(TreeError::DepthExceeded {
                max: MAX_TREE_DEPTH,
            });
        }
        if !seen.insert(self.id.as_str()) {
            return Err(TreeError::DuplicateId(self.id.clone()));
        }
        for child in &self.children {
            child.check_subtree(seen, depth + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, label: &str) -> MindMapNode {
        MindMapNode {
            id: NodeId::from(id),
            label: label.to_string(),
            children: Vec::new(),
        }
    }

    #[test]
    fn test_wire_shape_roundtrip() {
        let json = r#"{
            "id": "root",
            "label": "Photosynthesis",
            "children": [
                { "id": "a", "label": "Light reactions", "children": [] },
                { "id": "b", "label": "Calvin cycle" }
            ]
        }"#;

        let tree: MindMapNode = serde_json::from_str(json).unwrap();
        assert_eq!(tree.id, NodeId::from("root"));
        assert_eq!(tree.children.len(), 2);
        // `children` may be omitted on the wire for leaves.
        assert!(tree.children[1].is_leaf());

        let back = serde_json::to_string(&tree).unwrap();
        let again: MindMapNode = serde_json::from_str(&back).unwrap();
        assert_eq!(again, tree);
    }

    #[test]
    fn test_validate_accepts_well_formed_tree() {
        let mut root = leaf("root", "Topic");
        root.children.push(leaf("a", "A"));
        root.children.push(leaf("b", "B"));
        assert!(root.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_root_label() {
        let root = leaf("root", "   ");
        assert_eq!(root.validate(), Err(TreeError::EmptyLabel));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut root = leaf("root", "Topic");
        root.children.push(leaf("a", "A"));
        root.children.push(leaf("a", "Also A"));
        assert_eq!(
            root.validate(),
            Err(TreeError::DuplicateId(NodeId::from("a")))
        );
    }

    #[test]
    fn test_validate_rejects_excessive_depth() {
        let mut node = leaf("deepest", "leaf");
        for i in 0..=MAX_TREE_DEPTH {
            let mut parent = leaf(&format!("n{i}"), "n");
            parent.children.push(node);
            node = parent;
        }
        assert_eq!(
            node.validate(),
            Err(TreeError::DepthExceeded {
                max: MAX_TREE_DEPTH
            })
        );
    }

    #[test]
    fn test_layout_mode_serde_labels() {
        assert_eq!(serde_json::to_string(&LayoutMode::Tree).unwrap(), "\"tree\"");
        assert_eq!(
            serde_json::from_str::<LayoutMode>("\"radial\"").unwrap(),
            LayoutMode::Radial
        );
        assert_eq!(LayoutMode::default(), LayoutMode::Tree);
    }
}
