//! Centralized transformation options with TOML preset support.
//!
//! Reserved group identifiers, the region/overlay color palette and
//! placeholder geometry are consolidated here. Options serialize to/from TOML
//! so a deployment can override, say, only the `[colors]` table.

mod colors;
mod geometry;
mod groups;

use std::path::Path;

pub use colors::{hex_rgb, ColorOptions};
pub use geometry::GeometryOptions;
pub use groups::GroupOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MorphovizError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[groups]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Reserved group and record identifiers.
    pub groups: GroupOptions,
    /// Region and overlay color palette.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Placeholder geometry and overlay presentation.
    pub geometry: GeometryOptions,
}

impl Options {
    /// Generate JSON Schema describing the exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MorphovizError> {
        let content =
            std::fs::read_to_string(path).map_err(MorphovizError::Io)?;
        toml::from_str(&content)
            .map_err(|e| MorphovizError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MorphovizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MorphovizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MorphovizError::Io)?;
        }
        std::fs::write(path, content).map_err(MorphovizError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
