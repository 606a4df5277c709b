use serde::{Deserialize, Serialize};

use super::{CompositeNode, SceneNode};

/// Root of one aspect's visualization subtree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualizationTree {
    /// Id of the aspect owning this subtree.
    pub aspect_id: String,
    /// Top-level nodes in insertion order.
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl VisualizationTree {
    /// Empty subtree owned by `aspect_id`.
    #[must_use]
    pub fn new(aspect_id: impl Into<String>) -> Self {
        Self {
            aspect_id: aspect_id.into(),
            children: Vec::new(),
        }
    }

    /// Append a top-level node.
    pub fn add_child(&mut self, child: impl Into<SceneNode>) {
        self.children.push(child.into());
    }

    /// First top-level node with the given id.
    #[must_use]
    pub fn child(&self, id: &str) -> Option<&SceneNode> {
        self.children.iter().find(|c| c.id() == id)
    }

    /// Append `node` to the top-level composite `composite_id`, creating
    /// the composite (id and name = `composite_id`) if none exists.
    pub fn add_to_composite(&mut self, composite_id: &str, node: SceneNode) {
        for child in &mut self.children {
            if let SceneNode::Composite(composite) = child {
                if composite.id == composite_id {
                    composite.add_child(node);
                    return;
                }
            }
        }
        let mut composite = CompositeNode::new(composite_id, composite_id);
        composite.add_child(node);
        self.add_child(composite);
    }

    /// Total number of nodes below the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.children.iter().map(SceneNode::node_count).sum()
    }

    /// Whether nothing has been attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Where a generated node is appended: straight under a visualization
/// subtree root, or inside a nested composite.
#[derive(Debug)]
pub enum AttachTarget<'t> {
    /// The subtree root.
    Root(&'t mut VisualizationTree),
    /// A composite below the root.
    Composite(&'t mut CompositeNode),
}

impl AttachTarget<'_> {
    /// Append a node to the target.
    pub fn add_child(&mut self, node: SceneNode) {
        match self {
            Self::Root(tree) => tree.add_child(node),
            Self::Composite(composite) => composite.add_child(node),
        }
    }

    /// Place `node` in `tree` at the position matching this target: at the
    /// root for [`AttachTarget::Root`], inside the same-id composite
    /// (created on demand) for [`AttachTarget::Composite`].
    pub fn mirror_into(&self, tree: &mut VisualizationTree, node: SceneNode) {
        match self {
            Self::Root(_) => tree.add_child(node),
            Self::Composite(composite) => {
                tree.add_to_composite(&composite.id, node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::VisualRegionNode;

    fn region(id: &str) -> SceneNode {
        VisualRegionNode::new(id, id).into()
    }

    #[test]
    fn add_to_composite_creates_once() {
        let mut tree = VisualizationTree::new("electrical");
        tree.add_to_composite("net", region("a"));
        tree.add_to_composite("net", region("b"));

        assert_eq!(tree.children.len(), 1);
        let net = tree.child("net").and_then(SceneNode::as_composite).unwrap();
        assert_eq!(net.name, "net");
        let ids: Vec<&str> = net.children.iter().map(SceneNode::id).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn add_to_composite_skips_non_composites_with_same_id() {
        let mut tree = VisualizationTree::new("electrical");
        tree.add_child(region("net"));
        tree.add_to_composite("net", region("a"));

        assert_eq!(tree.children.len(), 2);
        assert!(tree.children[1].as_composite().is_some());
    }

    #[test]
    fn mirror_follows_target_shape() {
        let mut root = VisualizationTree::new("electrical");
        let mut nested = CompositeNode::new("net", "net");
        let mut other = VisualizationTree::new("electrical");

        AttachTarget::Root(&mut root).mirror_into(&mut other, region("x"));
        AttachTarget::Composite(&mut nested)
            .mirror_into(&mut other, region("y"));

        assert_eq!(other.children[0].id(), "x");
        let net = other.children[1].as_composite().unwrap();
        assert_eq!(net.children[0].id(), "y");
        assert!(root.is_empty());
        assert!(nested.children.is_empty());
    }

    #[test]
    fn node_count_includes_elements() {
        let mut tree = VisualizationTree::new("a");
        let mut composite = CompositeNode::new("c", "c");
        composite.add_child(region("r"));
        tree.add_child(composite);
        assert_eq!(tree.node_count(), 2);
    }
}
