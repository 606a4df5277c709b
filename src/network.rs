//! Network population expansion.
//!
//! Every population member becomes one scene branch named
//! `<population-id>[<index>]`. Compound cells expand to their full segment
//! geometry (plus channel-density overlay); point components become a
//! placeholder sphere. A member whose name is registered as a nested entity
//! is redirected into that entity's own visualization subtree.

use glam::Vec3;

use crate::assembler::PopulateContext;
use crate::density::build_channel_density_overlay;
use crate::error::MorphovizError;
use crate::geometry::build_segment_nodes;
use crate::membership::SegmentMembership;
use crate::model::{Component, Network, Population, PopulationLayout};
use crate::options::Options;
use crate::scene::{AttachTarget, SceneNode, SphereNode};

/// Counts gathered while expanding networks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionStats {
    /// Population members emitted.
    pub instances: usize,
    /// Members placed in a nested entity's subtree instead of the target.
    pub redirected: usize,
}

impl std::ops::AddAssign for ExpansionStats {
    fn add_assign(&mut self, rhs: Self) {
        self.instances += rhs.instances;
        self.redirected += rhs.redirected;
    }
}

/// Visual object for one member of `component`, before naming.
///
/// Point components sit at `location`, or at the origin when it is `None`.
/// Compound cells keep their morphology's own coordinates.
#[must_use]
pub fn component_visual(
    component: &Component,
    location: Option<Vec3>,
    options: &Options,
) -> SceneNode {
    match component {
        Component::Cell(cell) => {
            let membership =
                SegmentMembership::resolve(&cell.morphology.segment_groups);
            let mut composite = build_segment_nodes(
                &cell.id,
                &cell.morphology.segments,
                &membership,
            );
            if let Some(overlay) = build_channel_density_overlay(cell, options)
            {
                composite.add_child(overlay);
            }
            composite.into()
        }
        Component::Point(point) => SphereNode {
            id: point.id.clone(),
            name: point.id.clone(),
            radius: options.geometry.placeholder_radius,
            position: location.unwrap_or(Vec3::ZERO),
            groups: Vec::new(),
        }
        .into(),
    }
}

/// Expand every population of `network` into `target`. Nested entities are
/// matched against `aspect_id`, the aspect owning the top-level subtree.
///
/// Fails on the first population whose component is not registered.
pub fn expand_network(
    network: &Network,
    aspect_id: &str,
    target: &mut AttachTarget<'_>,
    ctx: &mut PopulateContext<'_>,
) -> Result<ExpansionStats, MorphovizError> {
    let mut stats = ExpansionStats::default();
    for population in &network.populations {
        stats += expand_population(population, aspect_id, target, ctx)?;
    }
    log::debug!(
        "network '{}': {} instances, {} redirected",
        network.id,
        stats.instances,
        stats.redirected
    );
    Ok(stats)
}

fn expand_population(
    population: &Population,
    aspect_id: &str,
    target: &mut AttachTarget<'_>,
    ctx: &mut PopulateContext<'_>,
) -> Result<ExpansionStats, MorphovizError> {
    let components = ctx.components;
    let options = ctx.options;
    let component = components.resolve(&population.component)?;

    // Cell geometry does not depend on the member, so build it once.
    let template = component_visual(component, None, options);
    let mut stats = ExpansionStats::default();

    let mut emit = |index: usize, location: Option<Vec3>| {
        let name = population.instance_name(index);
        let mut node = template.clone();
        node.relabel(&name);
        if let (SceneNode::Sphere(sphere), Some(location)) = (&mut node, location)
        {
            sphere.position = location;
        }
        stats.instances += 1;
        if attach_instance(&name, node, aspect_id, target, ctx) {
            stats.redirected += 1;
        }
    };

    match &population.layout {
        PopulationLayout::Instances { instances } => {
            for (i, instance) in instances.iter().enumerate() {
                emit(i, instance.location);
            }
        }
        PopulationLayout::Grid { size } => {
            for i in 0..*size as usize {
                emit(i, None);
            }
        }
    }

    log::debug!(
        "population '{}' ({}): {} members",
        population.id,
        population.component,
        stats.instances
    );
    Ok(stats)
}

/// Place one named member. Returns `true` when it was redirected into a
/// nested entity's subtree.
fn attach_instance(
    name: &str,
    node: SceneNode,
    aspect_id: &str,
    target: &mut AttachTarget<'_>,
    ctx: &mut PopulateContext<'_>,
) -> bool {
    if let Some(entity) = ctx.entities.get_mut(name) {
        if let Some(aspect) = entity.aspect_mut(aspect_id) {
            target.mirror_into(aspect.visualization_tree_mut(), node);
            return true;
        }
        log::warn!(
            "entity '{}' mapped to '{name}' has no aspect '{aspect_id}'; \
             attaching to the current tree",
            entity.id,
        );
    }
    target.add_child(node);
    false
}
