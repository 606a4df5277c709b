use glam::Vec3;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereNode {
    /// Node identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sphere radius.
    pub radius: f32,
    /// Sphere center.
    pub position: Vec3,
    /// Segment groups this primitive belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}

/// A (possibly tapered) cylinder between two endpoints.
///
/// `height` is always zero: the renderer derives the true height from
/// `position` and `distal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderNode {
    /// Node identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Radius at the proximal end, when the proximal point is known.
    pub bottom_radius: Option<f32>,
    /// Radius at the distal end.
    pub top_radius: f32,
    /// Proximal endpoint, when known.
    pub position: Option<Vec3>,
    /// Distal endpoint.
    pub distal: Vec3,
    /// Always 0.0.
    pub height: f32,
    /// Segment groups this primitive belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}

// ---------------------------------------------------------------------------
// Grouping and metadata
// ---------------------------------------------------------------------------

/// A named list of child nodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompositeNode {
    /// Node identifier, unique among its siblings.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Children in insertion order.
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl CompositeNode {
    /// Empty composite.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a child.
    pub fn add_child(&mut self, child: impl Into<SceneNode>) {
        self.children.push(child.into());
    }

    /// First direct child with the given id.
    #[must_use]
    pub fn child(&self, id: &str) -> Option<&SceneNode> {
        self.children.iter().find(|c| c.id() == id)
    }
}

/// A numeric value with a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalQuantity {
    /// Magnitude.
    pub value: f64,
    /// Unit text, possibly empty.
    pub unit: String,
}

/// One colorable member of a [`VisualRegionNode`], targeting a segment
/// group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualElementNode {
    /// Element identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Color used until a value-driven color is applied.
    pub default_color: [f32; 3],
    /// Value carried by the element, if any.
    #[serde(default)]
    pub parameter: Option<PhysicalQuantity>,
    /// Segment group whose primitives this element colors.
    pub target_group: String,
}

/// A named set of visual elements (anatomical regions, one ion channel's
/// densities).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualRegionNode {
    /// Region identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Presentation kind tag (e.g. `static`), if any.
    #[serde(default)]
    pub kind: Option<String>,
    /// Spectrum end colors `(low, high)` for value-driven coloring.
    #[serde(default)]
    pub spectrum: Option<([f32; 3], [f32; 3])>,
    /// Elements in insertion order.
    #[serde(default)]
    pub elements: Vec<VisualElementNode>,
}

impl VisualRegionNode {
    /// Empty region with no kind or spectrum.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: None,
            spectrum: None,
            elements: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// SceneNode
// ---------------------------------------------------------------------------

/// Any node of the destination scene tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneNode {
    /// Sphere primitive.
    Sphere(SphereNode),
    /// Cylinder primitive.
    Cylinder(CylinderNode),
    /// Grouping node.
    Composite(CompositeNode),
    /// Region metadata node.
    VisualRegion(VisualRegionNode),
    /// Single region element.
    VisualElement(VisualElementNode),
}

impl SceneNode {
    /// Node identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Sphere(n) => &n.id,
            Self::Cylinder(n) => &n.id,
            Self::Composite(n) => &n.id,
            Self::VisualRegion(n) => &n.id,
            Self::VisualElement(n) => &n.id,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Sphere(n) => &n.name,
            Self::Cylinder(n) => &n.name,
            Self::Composite(n) => &n.name,
            Self::VisualRegion(n) => &n.name,
            Self::VisualElement(n) => &n.name,
        }
    }

    /// Rename the node in place, keeping its id in sync.
    pub fn relabel(&mut self, label: &str) {
        let (id, name) = match self {
            Self::Sphere(n) => (&mut n.id, &mut n.name),
            Self::Cylinder(n) => (&mut n.id, &mut n.name),
            Self::Composite(n) => (&mut n.id, &mut n.name),
            Self::VisualRegion(n) => (&mut n.id, &mut n.name),
            Self::VisualElement(n) => (&mut n.id, &mut n.name),
        };
        label.clone_into(id);
        label.clone_into(name);
    }

    /// The node as a composite, if it is one.
    #[must_use]
    pub fn as_composite(&self) -> Option<&CompositeNode> {
        match self {
            Self::Composite(n) => Some(n),
            _ => None,
        }
    }

    /// Segment groups attached to a primitive; empty for other nodes.
    #[must_use]
    pub fn groups(&self) -> &[String] {
        match self {
            Self::Sphere(n) => &n.groups,
            Self::Cylinder(n) => &n.groups,
            _ => &[],
        }
    }

    /// Number of nodes in this subtree, including `self`. Region elements
    /// count as nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Composite(n) => {
                1 + n.children.iter().map(Self::node_count).sum::<usize>()
            }
            Self::VisualRegion(n) => 1 + n.elements.len(),
            _ => 1,
        }
    }
}

impl From<SphereNode> for SceneNode {
    fn from(n: SphereNode) -> Self {
        Self::Sphere(n)
    }
}

impl From<CylinderNode> for SceneNode {
    fn from(n: CylinderNode) -> Self {
        Self::Cylinder(n)
    }
}

impl From<CompositeNode> for SceneNode {
    fn from(n: CompositeNode) -> Self {
        Self::Composite(n)
    }
}

impl From<VisualRegionNode> for SceneNode {
    fn from(n: VisualRegionNode) -> Self {
        Self::VisualRegion(n)
    }
}

impl From<VisualElementNode> for SceneNode {
    fn from(n: VisualElementNode) -> Self {
        Self::VisualElement(n)
    }
}
