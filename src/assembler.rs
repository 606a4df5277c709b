//! Scene tree assembly: the single entry point that walks one source
//! document and fills a visualization subtree.

use serde::Serialize;

use crate::density::build_channel_density_overlay;
use crate::error::MorphovizError;
use crate::geometry::build_segment_nodes;
use crate::membership::SegmentMembership;
use crate::model::{Component, ModelDocument, Network};
use crate::network::{expand_network, ExpansionStats};
use crate::options::Options;
use crate::regions::RegionClassifier;
use crate::registry::{ComponentRegistry, EntityRegistry};
use crate::scene::{AttachTarget, CompositeNode, VisualizationTree};

/// Everything a transformation consults besides the document itself and
/// the destination subtree, whose aspect id nested entities are matched
/// against.
#[derive(Debug)]
pub struct PopulateContext<'a> {
    /// Definitions population components resolve against.
    pub components: &'a ComponentRegistry,
    /// Nested entities; their subtrees are created on first redirect.
    pub entities: &'a mut EntityRegistry,
    /// Reserved ids, palette and geometry defaults.
    pub options: &'a Options,
}

/// What one [`populate_visual_tree`] call attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PopulateStats {
    /// Whether the `Cell Regions` node was emitted.
    pub cell_regions: bool,
    /// Standalone morphology composites.
    pub morphologies: usize,
    /// Cell geometry composites.
    pub cells: usize,
    /// Channel-density overlays.
    pub overlays: usize,
    /// Network population members, redirected ones included.
    pub instances: usize,
    /// Members placed in nested entity subtrees.
    pub redirected: usize,
}

/// Convert `document` into visual nodes appended to `tree`.
///
/// The `Cell Regions` node covers the document's morphologies and those of
/// registry cells instantiated by its populations. Nested entities are
/// matched against `tree.aspect_id`.
///
/// Order of attachment: the `Cell Regions` node, one composite per
/// standalone morphology, then per cell its channel-density overlay
/// followed by its geometry composite, then network populations.
///
/// A single network expands straight into `tree`; with several, each gets
/// its own composite named after the network. Calling this twice appends
/// everything twice.
///
/// # Errors
///
/// [`MorphovizError::UnknownComponent`] when a population references a
/// component missing from `ctx.components`. Nodes attached before the
/// failing population stay in `tree`.
pub fn populate_visual_tree(
    tree: &mut VisualizationTree,
    document: &ModelDocument,
    ctx: &mut PopulateContext<'_>,
) -> Result<PopulateStats, MorphovizError> {
    let options = ctx.options;
    let mut stats = PopulateStats::default();

    let mut classifier = RegionClassifier::new(&options.groups, &options.colors);
    for morphology in document.all_morphologies() {
        classifier.observe(&morphology.segment_groups);
    }
    // Cells known only to the registry are rendered by their populations.
    for population in document.networks.iter().flat_map(|n| &n.populations) {
        if let Some(Component::Cell(cell)) =
            ctx.components.get(&population.component)
        {
            classifier.observe(&cell.morphology.segment_groups);
        }
    }
    if let Some(region) = classifier.finish() {
        tree.add_child(region);
        stats.cell_regions = true;
    }

    for morphology in &document.morphologies {
        let membership = SegmentMembership::resolve(&morphology.segment_groups);
        tree.add_child(build_segment_nodes(
            &morphology.id,
            &morphology.segments,
            &membership,
        ));
        stats.morphologies += 1;
        log::debug!(
            "morphology '{}': {} segments",
            morphology.id,
            morphology.segments.len()
        );
    }

    for cell in &document.cells {
        let membership =
            SegmentMembership::resolve(&cell.morphology.segment_groups);
        if let Some(overlay) = build_channel_density_overlay(cell, options) {
            tree.add_child(overlay);
            stats.overlays += 1;
        }
        tree.add_child(build_segment_nodes(
            &cell.id,
            &cell.morphology.segments,
            &membership,
        ));
        stats.cells += 1;
        log::debug!(
            "cell '{}': {} segments, {} channel densities",
            cell.id,
            cell.morphology.segments.len(),
            cell.channel_densities().len()
        );
    }

    let expansion = expand_networks(tree, &document.networks, ctx)?;
    stats.instances = expansion.instances;
    stats.redirected = expansion.redirected;

    log::info!(
        "populated '{}': {} morphologies, {} cells, {} instances \
         ({} redirected)",
        tree.aspect_id,
        stats.morphologies,
        stats.cells,
        stats.instances,
        stats.redirected
    );
    Ok(stats)
}

fn expand_networks(
    tree: &mut VisualizationTree,
    networks: &[Network],
    ctx: &mut PopulateContext<'_>,
) -> Result<ExpansionStats, MorphovizError> {
    let aspect_id = tree.aspect_id.clone();
    let mut stats = ExpansionStats::default();
    match networks {
        [] => {}
        [network] => {
            stats += expand_network(
                network,
                &aspect_id,
                &mut AttachTarget::Root(tree),
                ctx,
            )?;
        }
        many => {
            for network in many {
                let mut composite = CompositeNode::new(&network.id, &network.id);
                stats += expand_network(
                    network,
                    &aspect_id,
                    &mut AttachTarget::Composite(&mut composite),
                    ctx,
                )?;
                tree.add_child(composite);
            }
        }
    }
    Ok(stats)
}
