//! Segment → segment-group membership, closed over group inclusion.
//!
//! A group includes other groups by id. Inclusion is transitive: a segment
//! that belongs to `C` also belongs to every group that includes `C`
//! directly or through any chain of includes. The include graph comes from
//! the source model unchecked, so it may contain cycles, self-includes and
//! references to undeclared groups; every traversal here carries a visited
//! set.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::model::SegmentGroup;

// ---------------------------------------------------------------------------
// IncludeGraph
// ---------------------------------------------------------------------------

/// Index over a morphology's segment groups and their include edges.
pub struct IncludeGraph<'m> {
    groups: &'m [SegmentGroup],
    /// Group id → position in `groups`. First declaration wins.
    index: FxHashMap<&'m str, usize>,
}

impl<'m> IncludeGraph<'m> {
    /// Index `groups`. Includes naming undeclared groups are logged and
    /// ignored during traversal.
    #[must_use]
    pub fn new(groups: &'m [SegmentGroup]) -> Self {
        let mut index = FxHashMap::default();
        for (i, group) in groups.iter().enumerate() {
            let _ = index.entry(group.id.as_str()).or_insert(i);
        }
        for group in groups {
            for target in &group.includes {
                if !index.contains_key(target.as_str()) {
                    log::warn!(
                        "segment group '{}' includes undeclared group '{target}'",
                        group.id
                    );
                }
            }
        }
        Self { groups, index }
    }

    /// Number of indexed groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Positions of every group reachable from `start` over include edges,
    /// `start` first, each at most once.
    #[must_use]
    pub fn reachable(&self, start: usize) -> Vec<usize> {
        let mut visited = vec![false; self.groups.len()];
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(i) = stack.pop() {
            if visited[i] {
                continue;
            }
            visited[i] = true;
            order.push(i);
            // Reverse so includes are visited in declaration order.
            for target in self.groups[i].includes.iter().rev() {
                if let Some(&j) = self.index.get(target.as_str()) {
                    if !visited[j] {
                        stack.push(j);
                    }
                }
            }
        }
        order
    }

    /// Ids of every group that includes `group_id`, directly or
    /// transitively, in declaration order. A group only contains itself if
    /// it does so through an explicit cycle, and is then not reported.
    #[must_use]
    pub fn containers_of(&self, group_id: &str) -> Vec<&'m str> {
        let Some(&target) = self.index.get(group_id) else {
            return Vec::new();
        };
        (0..self.groups.len())
            .filter(|&i| i != target && self.reachable(i).contains(&target))
            .map(|i| self.groups[i].id.as_str())
            .collect()
    }

    /// Semicolon-separated list of [`containers_of`](Self::containers_of),
    /// e.g. `"dendrite_group; all"`. Empty when nothing includes the group.
    #[must_use]
    pub fn describe_containers(&self, group_id: &str) -> String {
        self.containers_of(group_id).join("; ")
    }
}

// ---------------------------------------------------------------------------
// SegmentMembership
// ---------------------------------------------------------------------------

/// Segment id → ids of the groups the segment belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentMembership {
    groups_by_segment: FxHashMap<String, Vec<String>>,
}

impl SegmentMembership {
    /// Resolve membership for `groups`.
    ///
    /// Each segment lists its groups in group declaration order, each group
    /// once, whether the segment is a direct member or arrives through any
    /// number of includes.
    #[must_use]
    pub fn resolve(groups: &[SegmentGroup]) -> Self {
        let graph = IncludeGraph::new(groups);
        let mut groups_by_segment: FxHashMap<String, Vec<String>> =
            FxHashMap::default();

        for (i, group) in groups.iter().enumerate() {
            let mut seen: FxHashSet<&str> = FxHashSet::default();
            for reached in graph.reachable(i) {
                for segment in &groups[reached].members {
                    if seen.insert(segment.as_str()) {
                        groups_by_segment
                            .entry(segment.clone())
                            .or_default()
                            .push(group.id.clone());
                    }
                }
            }
        }

        if log::log_enabled!(log::Level::Debug) {
            for group in groups {
                let containers = graph.describe_containers(&group.id);
                if !containers.is_empty() {
                    log::debug!(
                        "segment group '{}' is included by: {containers}",
                        group.id
                    );
                }
            }
        }
        log::debug!(
            "resolved membership of {} segments over {} groups",
            groups_by_segment.len(),
            graph.len()
        );
        Self { groups_by_segment }
    }

    /// Groups of `segment_id`; empty for segments in no group.
    #[must_use]
    pub fn groups_of(&self, segment_id: &str) -> &[String] {
        self.groups_by_segment
            .get(segment_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `segment_id` belongs to `group_id`.
    #[must_use]
    pub fn is_member(&self, segment_id: &str, group_id: &str) -> bool {
        self.groups_of(segment_id).iter().any(|g| g == group_id)
    }

    /// Number of segments belonging to at least one group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups_by_segment.len()
    }

    /// Whether no segment belongs to any group.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups_by_segment.is_empty()
    }
}
