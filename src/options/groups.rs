use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reserved identifiers recognized in the source model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Groups", inline)]
#[serde(default)]
pub struct GroupOptions {
    /// Segment group classified as the soma region.
    #[schemars(title = "Soma Group")]
    pub soma_group: String,
    /// Segment group classified as the axon region.
    #[schemars(title = "Axon Group")]
    pub axon_group: String,
    /// Segment group classified as the dendrite region.
    #[schemars(title = "Dendrite Group")]
    pub dendrite_group: String,
    /// Channel-density record id that never produces an overlay element.
    #[schemars(title = "Leak Density Id")]
    pub leak_density_id: String,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            soma_group: "soma_group".to_owned(),
            axon_group: "axon_group".to_owned(),
            dendrite_group: "dendrite_group".to_owned(),
            leak_density_id: "Leak_all".to_owned(),
        }
    }
}
