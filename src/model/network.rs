use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One explicitly listed member of a population.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Instance {
    /// Placement of the instance, if declared.
    #[serde(default)]
    pub location: Option<Vec3>,
}

impl Instance {
    /// Instance placed at `location`.
    #[must_use]
    pub fn at(location: Vec3) -> Self {
        Self {
            location: Some(location),
        }
    }
}

/// How the members of a population are declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PopulationLayout {
    /// Every member listed, each with an optional location.
    Instances {
        /// Members in declaration order.
        #[serde(default)]
        instances: Vec<Instance>,
    },
    /// `size` identical members with no location information.
    Grid {
        /// Member count.
        size: u32,
    },
}

impl PopulationLayout {
    /// Number of members this layout expands to.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Instances { instances } => instances.len(),
            Self::Grid { size } => *size as usize,
        }
    }

    /// Whether the layout expands to no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A set of repeated instances of one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Population {
    /// Population identifier.
    pub id: String,
    /// Id of the component every member instantiates.
    pub component: String,
    /// Member declaration.
    pub layout: PopulationLayout,
}

impl Population {
    /// Destination name of the `index`-th member, e.g. `pop[3]`.
    #[must_use]
    pub fn instance_name(&self, index: usize) -> String {
        format!("{}[{index}]", self.id)
    }
}

/// An ordered set of populations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Network {
    /// Network identifier.
    pub id: String,
    /// Populations in declaration order.
    #[serde(default)]
    pub populations: Vec<Population>,
}
