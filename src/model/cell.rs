use serde::{Deserialize, Serialize};

use super::Morphology;

/// Conductance density of one ion channel over a segment group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDensity {
    /// Record identifier.
    pub id: String,
    /// Ion channel this density configures.
    pub ion_channel: String,
    /// Segment group the density applies to.
    pub segment_group: String,
    /// Free text such as `"120 mS_per_cm2"`.
    #[serde(default)]
    pub cond_density: String,
}

/// Biophysical annotations of a cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BiophysicalProperties {
    /// Channel densities in declaration order.
    #[serde(default)]
    pub channel_densities: Vec<ChannelDensity>,
}

/// A compound cell: a morphology plus optional biophysics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell identifier.
    pub id: String,
    /// The cell's morphology.
    pub morphology: Morphology,
    /// Optional biophysical properties.
    #[serde(default)]
    pub biophysical_properties: Option<BiophysicalProperties>,
}

impl Cell {
    /// Channel-density records, empty when no biophysics are declared.
    #[must_use]
    pub fn channel_densities(&self) -> &[ChannelDensity] {
        self.biophysical_properties
            .as_ref()
            .map(|b| b.channel_densities.as_slice())
            .unwrap_or_default()
    }
}
