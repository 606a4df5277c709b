//! Channel-density overlays.
//!
//! Each distinct ion channel of a cell becomes one [`VisualRegionNode`];
//! every density record targeting that channel adds a
//! [`VisualElementNode`] pointing at the record's segment group. The
//! free-text conductance density (`"120 mS_per_cm2"`) is parsed into a
//! [`PhysicalQuantity`] when it carries a number.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::model::Cell;
use crate::options::Options;
use crate::scene::{
    CompositeNode, PhysicalQuantity, VisualElementNode, VisualRegionNode,
};

/// Display name of the overlay composite.
pub const CHANNEL_DENSITIES_NAME: &str = "Channel Densities";

/// Optional signed decimal/exponential number, optional whitespace,
/// optional word-character unit.
static CONDUCTANCE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^\s*([-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?)?\s*(\w*)",
    )
    .ok()
});

/// Parse conductance-density text such as `"2.5e-2 S_per_m2"`.
///
/// Returns `None` when the text has no leading number; the unit may be
/// empty.
#[must_use]
pub fn parse_conductance_density(text: &str) -> Option<PhysicalQuantity> {
    let captures = CONDUCTANCE_PATTERN.as_ref()?.captures(text)?;
    let value = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let unit = captures.get(2).map_or("", |m| m.as_str());
    Some(PhysicalQuantity {
        value,
        unit: unit.to_owned(),
    })
}

/// Id of the overlay composite built for `cell_id`.
#[must_use]
pub fn overlay_id(cell_id: &str) -> String {
    format!("{cell_id}_ChannelDensities")
}

/// Build the channel-density overlay of `cell`, or `None` when the cell
/// declares no channel densities.
///
/// Records whose id equals the configured leak id contribute no element,
/// but still register their ion channel's region.
#[must_use]
pub fn build_channel_density_overlay(
    cell: &Cell,
    options: &Options,
) -> Option<CompositeNode> {
    let densities = cell.channel_densities();
    if densities.is_empty() {
        return None;
    }

    let mut regions: Vec<VisualRegionNode> = Vec::new();
    let mut region_index: FxHashMap<&str, usize> = FxHashMap::default();

    for density in densities {
        let idx = *region_index
            .entry(density.ion_channel.as_str())
            .or_insert_with(|| {
                regions.push(channel_region(&density.ion_channel, options));
                regions.len() - 1
            });

        if density.id == options.groups.leak_density_id {
            continue;
        }

        let parameter = parse_conductance_density(&density.cond_density);
        if parameter.is_none() {
            log::warn!(
                "channel density '{}' of cell '{}': no value in '{}'",
                density.id,
                cell.id,
                density.cond_density
            );
        }
        regions[idx].elements.push(VisualElementNode {
            id: density.id.clone(),
            name: density.id.clone(),
            default_color: options.colors.density_default,
            parameter,
            target_group: density.segment_group.clone(),
        });
    }

    let mut overlay =
        CompositeNode::new(overlay_id(&cell.id), CHANNEL_DENSITIES_NAME);
    for region in regions {
        overlay.add_child(region);
    }
    Some(overlay)
}

fn channel_region(ion_channel: &str, options: &Options) -> VisualRegionNode {
    let mut region = VisualRegionNode::new(ion_channel, ion_channel);
    region.kind = Some(options.geometry.density_overlay_kind.clone());
    region.spectrum =
        Some((options.colors.low_spectrum, options.colors.high_spectrum));
    region
}
