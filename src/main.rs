//! Command-line front end: bundle JSON in, visualization trees JSON out.
//!
//! Options helpers: `--schema <out.json>` writes the options JSON schema,
//! `--defaults <out.toml>` writes the default options, and
//! `--presets <dir>` lists the TOML presets found in `dir`.

use std::path::Path;

use morphoviz::model::{Component, ModelDocument};
use morphoviz::options::Options;
use morphoviz::registry::{ComponentRegistry, EntityRegistry};
use morphoviz::scene::VisualizationTree;
use morphoviz::{populate_visual_tree, MorphovizError, PopulateContext, PopulateStats};
use serde::{Deserialize, Serialize};

/// Input file: the document plus everything the transformation consults.
#[derive(Deserialize)]
struct Bundle {
    #[serde(default = "default_aspect")]
    aspect_id: String,
    #[serde(default)]
    document: ModelDocument,
    /// Components beyond the document's own cells.
    #[serde(default)]
    components: Vec<Component>,
    #[serde(default)]
    entities: EntityRegistry,
}

fn default_aspect() -> String {
    "electrical".to_owned()
}

#[derive(Serialize)]
struct Output<'a> {
    stats: PopulateStats,
    tree: &'a VisualizationTree,
    entities: &'a EntityRegistry,
}

fn run(
    bundle_path: &Path,
    out_path: &Path,
    options_path: Option<&Path>,
) -> Result<(), MorphovizError> {
    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let text = std::fs::read_to_string(bundle_path)?;
    let bundle: Bundle = serde_json::from_str(&text)
        .map_err(|e| MorphovizError::ModelParse(e.to_string()))?;

    let mut components = ComponentRegistry::from_document(&bundle.document);
    for component in bundle.components {
        components.register(component);
    }
    let mut entities = bundle.entities;

    let mut tree = VisualizationTree::new(bundle.aspect_id);
    let mut ctx = PopulateContext {
        components: &components,
        entities: &mut entities,
        options: &options,
    };
    let stats = populate_visual_tree(&mut tree, &bundle.document, &mut ctx)?;

    let output = Output {
        stats,
        tree: &tree,
        entities: &entities,
    };
    let json =
        serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
    std::fs::write(out_path, json)?;
    log::info!(
        "wrote {} nodes to {}",
        tree.node_count(),
        out_path.display()
    );
    Ok(())
}

fn write_schema(out_path: &Path) -> Result<(), MorphovizError> {
    let json = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(std::io::Error::other)?;
    std::fs::write(out_path, json)?;
    log::info!("wrote options schema to {}", out_path.display());
    Ok(())
}

fn list_presets(dir: &Path) {
    let presets = Options::list_presets(dir);
    if presets.is_empty() {
        log::warn!("no presets in {}", dir.display());
    }
    for name in presets {
        log::info!("preset: {name}");
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [flag, path] if flag == "--schema" => write_schema(Path::new(path)),
        [flag, path] if flag == "--defaults" => {
            Options::default().save(Path::new(path))
        }
        [flag, dir] if flag == "--presets" => {
            list_presets(Path::new(dir));
            Ok(())
        }
        [bundle, out] => run(Path::new(bundle), Path::new(out), None),
        [bundle, out, options] => run(
            Path::new(bundle),
            Path::new(out),
            Some(Path::new(options)),
        ),
        _ => {
            log::error!(
                "Usage: morphoviz <bundle.json> <out.json> [options.toml] \
                 | --schema <out.json> | --defaults <out.toml> | --presets <dir>"
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
