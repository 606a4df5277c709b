//! Anatomical region classification.
//!
//! Three reserved group ids (soma, axon and dendrite groups) become
//! color-tagged elements of a single `Cell Regions` visual region. The
//! region is built once per source document no matter how many morphologies
//! declare the reserved groups.

use crate::model::SegmentGroup;
use crate::options::{ColorOptions, GroupOptions};
use crate::scene::{VisualElementNode, VisualRegionNode};

/// Id of the anatomical region node.
pub const CELL_REGIONS_ID: &str = "CellRegions";
/// Display name of the anatomical region node.
pub const CELL_REGIONS_NAME: &str = "Cell Regions";

/// The three reserved anatomical regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Cell body.
    Soma,
    /// Axonal arbor.
    Axon,
    /// Dendritic arbor.
    Dendrite,
}

impl Region {
    /// Display name of the region element.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Soma => "Soma",
            Self::Axon => "Axons",
            Self::Dendrite => "Dendrites",
        }
    }

    /// Palette color of the region.
    #[must_use]
    pub fn color(self, colors: &ColorOptions) -> [f32; 3] {
        match self {
            Self::Soma => colors.soma,
            Self::Axon => colors.axons,
            Self::Dendrite => colors.dendrites,
        }
    }

    /// Classify a group id against the reserved ids.
    #[must_use]
    pub fn classify(group_id: &str, groups: &GroupOptions) -> Option<Self> {
        if group_id == groups.soma_group {
            Some(Self::Soma)
        } else if group_id == groups.axon_group {
            Some(Self::Axon)
        } else if group_id == groups.dendrite_group {
            Some(Self::Dendrite)
        } else {
            None
        }
    }
}

/// Accumulates reserved groups across morphologies and emits the
/// `Cell Regions` node.
pub struct RegionClassifier<'o> {
    groups: &'o GroupOptions,
    colors: &'o ColorOptions,
    elements: Vec<VisualElementNode>,
}

impl<'o> RegionClassifier<'o> {
    /// Classifier using the given reserved ids and palette.
    #[must_use]
    pub fn new(groups: &'o GroupOptions, colors: &'o ColorOptions) -> Self {
        Self {
            groups,
            colors,
            elements: Vec::new(),
        }
    }

    /// Record the reserved groups among `segment_groups`. A group already
    /// recorded by an earlier morphology is not added again.
    pub fn observe(&mut self, segment_groups: &[SegmentGroup]) {
        for group in segment_groups {
            let Some(region) = Region::classify(&group.id, self.groups) else {
                continue;
            };
            if self.elements.iter().any(|e| e.target_group == group.id) {
                continue;
            }
            self.elements.push(VisualElementNode {
                id: group.id.clone(),
                name: region.label().to_owned(),
                default_color: region.color(self.colors),
                parameter: None,
                target_group: group.id.clone(),
            });
        }
    }

    /// The `Cell Regions` node, or `None` when no reserved group was seen.
    #[must_use]
    pub fn finish(self) -> Option<VisualRegionNode> {
        if self.elements.is_empty() {
            return None;
        }
        let mut region =
            VisualRegionNode::new(CELL_REGIONS_ID, CELL_REGIONS_NAME);
        region.elements = self.elements;
        Some(region)
    }
}
