//! Segment → primitive conversion.
//!
//! Each segment becomes exactly one node: a [`SphereNode`] when its
//! effective proximal and distal points coincide exactly, a
//! [`CylinderNode`] otherwise. A segment without its own proximal point
//! starts at its parent's distal point.

use rustc_hash::FxHashMap;

use crate::membership::SegmentMembership;
use crate::model::{DiamPoint, Segment};
use crate::scene::{CompositeNode, CylinderNode, SceneNode, SphereNode};

/// Convert `segments` into a composite holding one primitive per segment, in
/// input order. The composite takes `id` as both id and name.
///
/// Parent distal points are indexed before the pass, so a child may appear
/// before its parent. A segment whose parent is missing from `segments` (or
/// that has neither proximal point nor parent) has no proximal point.
#[must_use]
pub fn build_segment_nodes(
    id: &str,
    segments: &[Segment],
    membership: &SegmentMembership,
) -> CompositeNode {
    let distal_by_id: FxHashMap<&str, &DiamPoint> = segments
        .iter()
        .map(|s| (s.id.as_str(), &s.distal))
        .collect();

    let mut composite = CompositeNode::new(id, id);
    composite.children.reserve(segments.len());
    for segment in segments {
        let proximal = segment.proximal.as_ref().or_else(|| {
            segment
                .parent
                .as_deref()
                .and_then(|parent| distal_by_id.get(parent).copied())
        });
        let groups = membership.groups_of(&segment.id).to_vec();
        composite.add_child(segment_primitive(segment, proximal, groups));
    }
    composite
}

/// Primitive for one segment given its effective proximal point.
#[must_use]
pub fn segment_primitive(
    segment: &Segment,
    proximal: Option<&DiamPoint>,
    groups: Vec<String>,
) -> SceneNode {
    let distal = &segment.distal;
    match proximal {
        Some(p) if p.coincides_with(distal) => SphereNode {
            id: segment.id.clone(),
            name: segment.display_name().to_owned(),
            radius: p.radius(),
            position: p.position(),
            groups,
        }
        .into(),
        _ => CylinderNode {
            id: segment.id.clone(),
            name: segment.display_name().to_owned(),
            bottom_radius: proximal.map(DiamPoint::radius),
            top_radius: distal.radius(),
            position: proximal.map(DiamPoint::position),
            distal: distal.position(),
            height: 0.0,
            groups,
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::model::SegmentGroup;

    fn segment(
        id: &str,
        proximal: Option<DiamPoint>,
        distal: DiamPoint,
        parent: Option<&str>,
    ) -> Segment {
        Segment {
            id: id.to_owned(),
            name: None,
            proximal,
            distal,
            parent: parent.map(str::to_owned),
        }
    }

    fn no_groups() -> SegmentMembership {
        SegmentMembership::default()
    }

    #[test]
    fn coincident_endpoints_make_a_sphere() {
        let p = DiamPoint::new(1.0, 2.0, 3.0, 8.0);
        let segments = [segment("0", Some(p), p, None)];
        let composite = build_segment_nodes("m", &segments, &no_groups());

        match &composite.children[0] {
            SceneNode::Sphere(s) => {
                assert_eq!(s.radius, 4.0);
                assert_eq!(s.position, Vec3::new(1.0, 2.0, 3.0));
                assert_eq!(s.id, "0");
            }
            other => panic!("expected sphere, got {other:?}"),
        }
    }

    #[test]
    fn diameter_difference_alone_makes_a_cylinder() {
        let segments = [segment(
            "0",
            Some(DiamPoint::new(0.0, 0.0, 0.0, 2.0)),
            DiamPoint::new(0.0, 0.0, 0.0, 2.000_001),
            None,
        )];
        let composite = build_segment_nodes("m", &segments, &no_groups());
        assert!(matches!(composite.children[0], SceneNode::Cylinder(_)));
    }

    #[test]
    fn cylinder_fields() {
        let segments = [segment(
            "0",
            Some(DiamPoint::new(0.0, 0.0, 0.0, 4.0)),
            DiamPoint::new(0.0, 10.0, 0.0, 2.0),
            None,
        )];
        let composite = build_segment_nodes("m", &segments, &no_groups());
        let SceneNode::Cylinder(c) = &composite.children[0] else {
            panic!("expected cylinder");
        };
        assert_eq!(c.bottom_radius, Some(2.0));
        assert_eq!(c.top_radius, 1.0);
        assert_eq!(c.position, Some(Vec3::ZERO));
        assert_eq!(c.distal, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(c.height, 0.0);
    }

    #[test]
    fn missing_proximal_uses_parent_distal() {
        let segments = [
            segment(
                "0",
                Some(DiamPoint::new(0.0, 0.0, 0.0, 4.0)),
                DiamPoint::new(0.0, 10.0, 0.0, 4.0),
                None,
            ),
            segment("1", None, DiamPoint::new(0.0, 20.0, 0.0, 1.0), Some("0")),
        ];
        let composite = build_segment_nodes("m", &segments, &no_groups());
        let SceneNode::Cylinder(c) = &composite.children[1] else {
            panic!("expected cylinder");
        };
        assert_eq!(c.position, Some(Vec3::new(0.0, 10.0, 0.0)));
        assert_eq!(c.bottom_radius, Some(2.0));
    }

    #[test]
    fn child_before_parent_still_resolves() {
        let segments = [
            segment("1", None, DiamPoint::new(0.0, 20.0, 0.0, 1.0), Some("0")),
            segment(
                "0",
                Some(DiamPoint::new(0.0, 0.0, 0.0, 4.0)),
                DiamPoint::new(0.0, 10.0, 0.0, 4.0),
                None,
            ),
        ];
        let composite = build_segment_nodes("m", &segments, &no_groups());
        let SceneNode::Cylinder(c) = &composite.children[0] else {
            panic!("expected cylinder");
        };
        assert_eq!(c.position, Some(Vec3::new(0.0, 10.0, 0.0)));
    }

    #[test]
    fn unknown_parent_leaves_proximal_undefined() {
        let segments = [segment(
            "5",
            None,
            DiamPoint::new(1.0, 1.0, 1.0, 1.0),
            Some("missing"),
        )];
        let composite = build_segment_nodes("m", &segments, &no_groups());
        let SceneNode::Cylinder(c) = &composite.children[0] else {
            panic!("expected cylinder");
        };
        assert_eq!(c.position, None);
        assert_eq!(c.bottom_radius, None);
        assert_eq!(c.top_radius, 0.5);
    }

    #[test]
    fn one_primitive_per_segment_with_groups() {
        let segments: Vec<Segment> = (0..6)
            .map(|i| {
                let y = i as f32;
                segment(
                    &i.to_string(),
                    None,
                    DiamPoint::new(0.0, y + 1.0, 0.0, 1.0),
                    (i > 0).then_some("0"),
                )
            })
            .collect();
        let membership = SegmentMembership::resolve(&[
            SegmentGroup::with_members("soma_group", &["0"]),
            SegmentGroup::with_members("dendrite_group", &["1", "2", "3"]),
            SegmentGroup::with_includes("all", &["soma_group", "dendrite_group"]),
        ]);

        let composite = build_segment_nodes("cell", &segments, &membership);
        assert_eq!(composite.id, "cell");
        assert_eq!(composite.name, "cell");
        assert_eq!(composite.children.len(), segments.len());
        let ids: Vec<&str> = composite.children.iter().map(SceneNode::id).collect();
        assert_eq!(ids, ["0", "1", "2", "3", "4", "5"]);
        assert_eq!(composite.children[0].groups(), ["soma_group", "all"]);
        assert_eq!(composite.children[2].groups(), ["dendrite_group", "all"]);
        assert!(composite.children[5].groups().is_empty());
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let mut named = segment(
            "0",
            None,
            DiamPoint::new(0.0, 1.0, 0.0, 1.0),
            None,
        );
        let node = segment_primitive(&named, None, Vec::new());
        assert_eq!(node.name(), "0");

        named.name = Some("Soma".to_owned());
        let node = segment_primitive(&named, None, Vec::new());
        assert_eq!(node.name(), "Soma");
    }
}
