use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A 3-D sample point with a diameter, as found at segment endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiamPoint {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
    /// Diameter at this point.
    pub diameter: f32,
}

impl DiamPoint {
    /// Construct a point from its four components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, diameter: f32) -> Self {
        Self { x, y, z, diameter }
    }

    /// Position without the diameter.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Half the diameter.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// Exact component-wise equality (position and diameter, no tolerance).
    #[must_use]
    pub fn coincides_with(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.z == other.z
            && self.diameter == other.diameter
    }
}

/// A single tapered cylinder (or point) of a cell's morphology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment identifier, unique within its morphology.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Proximal endpoint. When absent the parent's distal point is used.
    #[serde(default)]
    pub proximal: Option<DiamPoint>,
    /// Distal endpoint.
    pub distal: DiamPoint,
    /// Identifier of the parent segment; `None` for roots.
    #[serde(default)]
    pub parent: Option<String>,
}

impl Segment {
    /// Display name, falling back to the identifier.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A named, possibly nested set of segments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentGroup {
    /// Group identifier.
    pub id: String,
    /// Segment ids that are direct members of this group.
    #[serde(default)]
    pub members: Vec<String>,
    /// Ids of groups included by this group.
    #[serde(default)]
    pub includes: Vec<String>,
}

impl SegmentGroup {
    /// Group with direct members only.
    #[must_use]
    pub fn with_members<S: AsRef<str>>(id: &str, members: &[S]) -> Self {
        Self {
            id: id.to_owned(),
            members: members.iter().map(|m| m.as_ref().to_owned()).collect(),
            includes: Vec::new(),
        }
    }

    /// Group with include edges only.
    #[must_use]
    pub fn with_includes<S: AsRef<str>>(id: &str, includes: &[S]) -> Self {
        Self {
            id: id.to_owned(),
            members: Vec::new(),
            includes: includes.iter().map(|g| g.as_ref().to_owned()).collect(),
        }
    }
}

/// Segments plus the groups classifying them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Morphology {
    /// Morphology identifier.
    pub id: String,
    /// Segments in declaration order.
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Segment groups in declaration order.
    #[serde(default)]
    pub segment_groups: Vec<SegmentGroup>,
}
