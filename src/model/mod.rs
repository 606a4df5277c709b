//! Source object model: morphologies, cells and networks as handed over by
//! the description-format parser.
//!
//! Every type here is an immutable snapshot for the duration of one
//! transformation. Optional or missing lists deserialize as empty so a
//! sparse JSON document loads without ceremony.

mod cell;
mod morphology;
mod network;

use std::path::Path;

pub use cell::{BiophysicalProperties, Cell, ChannelDensity};
pub use morphology::{DiamPoint, Morphology, Segment, SegmentGroup};
pub use network::{Instance, Network, Population, PopulationLayout};
use serde::{Deserialize, Serialize};

use crate::error::MorphovizError;

/// A component that has no morphology of its own (an abstract point
/// neuron, a spike source, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointComponent {
    /// Component identifier.
    pub id: String,
}

/// A resolved component definition a population can instantiate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    /// A cell with a morphology, rendered segment by segment.
    Cell(Cell),
    /// Anything else, rendered as a placeholder sphere.
    Point(PointComponent),
}

impl Component {
    /// Component identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Cell(cell) => &cell.id,
            Self::Point(point) => &point.id,
        }
    }
}

/// Top-level fragments of one source document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelDocument {
    /// Standalone morphologies.
    pub morphologies: Vec<Morphology>,
    /// Cells.
    pub cells: Vec<Cell>,
    /// Networks.
    pub networks: Vec<Network>,
}

impl ModelDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, MorphovizError> {
        serde_json::from_str(text)
            .map_err(|e| MorphovizError::ModelParse(e.to_string()))
    }

    /// Load a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, MorphovizError> {
        let content =
            std::fs::read_to_string(path).map_err(MorphovizError::Io)?;
        Self::from_json(&content)
    }

    /// All morphologies in the document: standalone ones first, then those
    /// owned by cells.
    pub fn all_morphologies(&self) -> impl Iterator<Item = &Morphology> {
        self.morphologies
            .iter()
            .chain(self.cells.iter().map(|c| &c.morphology))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    const DOC: &str = r#"{
        "cells": [{
            "id": "pyr",
            "morphology": {
                "id": "pyr_morph",
                "segments": [
                    {"id": "0", "name": "soma",
                     "proximal": {"x": 0, "y": 0, "z": 0, "diameter": 10},
                     "distal": {"x": 0, "y": 10, "z": 0, "diameter": 10}},
                    {"id": "1", "parent": "0",
                     "distal": {"x": 0, "y": 30, "z": 0, "diameter": 2}}
                ],
                "segment_groups": [
                    {"id": "soma_group", "members": ["0"]},
                    {"id": "all", "includes": ["soma_group"]}
                ]
            },
            "biophysical_properties": {
                "channel_densities": [{
                    "id": "na_soma", "ion_channel": "na",
                    "segment_group": "soma_group",
                    "cond_density": "120 mS_per_cm2"
                }]
            }
        }],
        "networks": [{
            "id": "net",
            "populations": [
                {"id": "pop", "component": "pyr",
                 "layout": {"type": "grid", "size": 4}},
                {"id": "pts", "component": "iaf",
                 "layout": {"type": "instances",
                            "instances": [{}, {"location": [1, 2, 3]}]}}
            ]
        }]
    }"#;

    #[test]
    fn parses_sparse_document() {
        let doc = ModelDocument::from_json(DOC).unwrap();
        assert!(doc.morphologies.is_empty());
        assert_eq!(doc.cells.len(), 1);

        let cell = &doc.cells[0];
        assert_eq!(cell.morphology.segments[1].parent.as_deref(), Some("0"));
        assert!(cell.morphology.segments[1].proximal.is_none());
        assert_eq!(cell.morphology.segments[1].display_name(), "1");
        assert!(cell.morphology.segment_groups[0].includes.is_empty());
        assert_eq!(cell.channel_densities().len(), 1);

        let pops = &doc.networks[0].populations;
        assert_eq!(pops[0].layout, PopulationLayout::Grid { size: 4 });
        match &pops[1].layout {
            PopulationLayout::Instances { instances } => {
                assert_eq!(instances[0].location, None);
                assert_eq!(
                    instances[1].location,
                    Some(Vec3::new(1.0, 2.0, 3.0))
                );
            }
            PopulationLayout::Grid { .. } => panic!("expected instances"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ModelDocument::from_json("{\"cells\": [").unwrap_err();
        assert!(matches!(err, MorphovizError::ModelParse(_)));
    }

    #[test]
    fn all_morphologies_covers_cells() {
        let mut doc = ModelDocument::from_json(DOC).unwrap();
        doc.morphologies.push(Morphology {
            id: "loose".to_owned(),
            ..Default::default()
        });
        let ids: Vec<&str> =
            doc.all_morphologies().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["loose", "pyr_morph"]);
    }

    #[test]
    fn instance_names_are_indexed() {
        let pop = Population {
            id: "pop".to_owned(),
            component: "c".to_owned(),
            layout: PopulationLayout::Grid { size: 2 },
        };
        assert_eq!(pop.instance_name(0), "pop[0]");
        assert_eq!(pop.instance_name(12), "pop[12]");
        assert_eq!(pop.layout.len(), 2);
    }

    #[test]
    fn component_kind_tag() {
        let c: Component =
            serde_json::from_str(r#"{"kind": "point", "id": "iaf"}"#).unwrap();
        assert_eq!(c.id(), "iaf");
        assert!(matches!(c, Component::Point(_)));
    }
}
