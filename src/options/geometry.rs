use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Geometry and overlay presentation options.
pub struct GeometryOptions {
    /// Radius of the sphere standing in for a point (non-morphological)
    /// component.
    #[schemars(title = "Placeholder Radius", range(min = 0.0))]
    pub placeholder_radius: f32,
    /// Rendering kind tag attached to channel-density regions.
    #[schemars(title = "Density Overlay Kind")]
    pub density_overlay_kind: String,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            placeholder_radius: 1.0,
            density_overlay_kind: "static".to_owned(),
        }
    }
}
