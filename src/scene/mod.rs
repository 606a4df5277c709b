//! Destination scene tree: primitive, grouping and metadata nodes plus the
//! per-aspect visualization subtree they are attached to.
//!
//! Everything is a [`SceneNode`]. Nodes are created fresh by each
//! transformation and are owned by the subtree once attached; nothing in the
//! crate mutates a node after attaching it other than appending children.

mod node;
mod tree;

pub use node::{
    CompositeNode, CylinderNode, PhysicalQuantity, SceneNode, SphereNode,
    VisualElementNode, VisualRegionNode,
};
pub use tree::{AttachTarget, VisualizationTree};
