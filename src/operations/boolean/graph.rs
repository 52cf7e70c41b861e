use slotmap::SlotMap;
use tracing::debug;

use crate::math::intersect_2d::IntersectionInfo;
use crate::math::{points_coincide, Point2, TOLERANCE};

use super::classify::{Crossing, EdgeStatus};

slotmap::new_key_type! {
    /// Identifier of a node in the augmented traversal graph.
    pub struct NodeId;
}

/// Which input polyline a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourSource {
    A,
    B,
}

impl ContourSource {
    fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// A vertex or intersection point in one of the two circular node lists.
#[derive(Debug, Clone)]
pub struct AugmentedNode {
    /// Coordinates of the node.
    pub point: Point2,
    /// Polyline whose list owns this node.
    pub source: ContourSource,
    /// Previous node in the same circular list.
    pub prev: NodeId,
    /// Next node in the same circular list.
    pub next: NodeId,
    /// The same intersection point on the other list.
    pub partner: Option<NodeId>,
    /// `true` if the node is an original vertex of its polyline.
    pub is_vertex: bool,
    /// Entering/exiting label on paired nodes of list A; unset at touch points.
    pub crossing: Option<Crossing>,
    /// Status of the edge from this node to `next` against the other polyline.
    pub edge: EdgeStatus,
    /// Set once the outgoing edge has been emitted by a trace.
    pub visited: bool,
    events: Vec<usize>,
}

impl AugmentedNode {
    /// Returns `true` if this node is paired with a node on the other list.
    #[must_use]
    pub fn is_intersection(&self) -> bool {
        self.partner.is_some()
    }
}

/// Two circular node lists built from polylines A and B, cross-linked at
/// their intersection points.
///
/// Nodes live in a single arena for the duration of one operation; links are
/// arena keys rather than references.
#[derive(Debug, Default)]
pub struct AugmentedGraph {
    nodes: SlotMap<NodeId, AugmentedNode>,
    heads: [Option<NodeId>; 2],
}

/// Pending list entry before insertion into the arena.
struct Entry {
    point: Point2,
    is_vertex: bool,
    events: Vec<usize>,
}

impl AugmentedGraph {
    /// Builds the graph from two deduplicated rings and their intersections.
    ///
    /// Each ring becomes a circular list of its vertices interleaved with the
    /// intersection points on each segment, ordered by segment parameter.
    /// Points that coincide within tolerance share one node. Intersection
    /// nodes are paired through the intersection events they share; nodes
    /// left without a partner stay in the list as plain points.
    #[must_use]
    pub fn build(a: &[Point2], b: &[Point2], hits: &[IntersectionInfo]) -> Self {
        let mut graph = Self::default();

        let entries_a = build_entries(
            a,
            hits.iter()
                .enumerate()
                .map(|(k, h)| (h.seg_a, h.t_a, h.point, k)),
        );
        let entries_b = build_entries(
            b,
            hits.iter()
                .enumerate()
                .map(|(k, h)| (h.seg_b, h.t_b, h.point, k)),
        );

        let ids_a = graph.insert_list(entries_a, ContourSource::A);
        let ids_b = graph.insert_list(entries_b, ContourSource::B);

        graph.pair_intersections(&ids_a, &ids_b, hits.len());
        graph
    }

    /// Inserts a circular list and returns its node ids in order.
    fn insert_list(&mut self, entries: Vec<Entry>, source: ContourSource) -> Vec<NodeId> {
        let ids: Vec<NodeId> = entries
            .into_iter()
            .map(|e| {
                self.nodes.insert(AugmentedNode {
                    point: e.point,
                    source,
                    prev: NodeId::default(),
                    next: NodeId::default(),
                    partner: None,
                    is_vertex: e.is_vertex,
                    crossing: None,
                    edge: EdgeStatus::Outside,
                    visited: false,
                    events: e.events,
                })
            })
            .collect();

        let len = ids.len();
        for (i, &id) in ids.iter().enumerate() {
            if let Some(node) = self.nodes.get_mut(id) {
                node.next = ids[(i + 1) % len];
                node.prev = ids[(i + len - 1) % len];
            }
        }
        self.heads[source.index()] = ids.first().copied();
        ids
    }

    /// Pairs nodes of the two lists that record the same intersection event.
    fn pair_intersections(&mut self, ids_a: &[NodeId], ids_b: &[NodeId], event_count: usize) {
        let mut event_owner: Vec<Option<NodeId>> = vec![None; event_count];
        for &id in ids_b {
            for &ev in &self.nodes[id].events {
                if event_owner[ev].is_none() {
                    event_owner[ev] = Some(id);
                }
            }
        }

        for &id in ids_a {
            let candidate = self.nodes[id]
                .events
                .iter()
                .filter_map(|&ev| event_owner[ev])
                .find(|&b_id| self.nodes[b_id].partner.is_none());
            if let Some(b_id) = candidate {
                self.nodes[id].partner = Some(b_id);
                self.nodes[b_id].partner = Some(id);
            }
        }

        for id in ids_a.iter().chain(ids_b) {
            let node = &mut self.nodes[*id];
            if !node.events.is_empty() && node.partner.is_none() {
                debug!(
                    x = node.point.x,
                    y = node.point.y,
                    source = ?node.source,
                    "demoting unpaired intersection to plain vertex"
                );
                node.is_vertex = true;
            }
        }
    }

    /// Returns the node with the given id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&AugmentedNode> {
        self.nodes.get(id)
    }

    /// Returns a mutable reference to the node with the given id.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut AugmentedNode> {
        self.nodes.get_mut(id)
    }

    /// Returns the node ids of one list in traversal order.
    #[must_use]
    pub fn list(&self, source: ContourSource) -> Vec<NodeId> {
        let Some(head) = self.heads[source.index()] else {
            return Vec::new();
        };
        let mut ids = vec![head];
        let mut current = head;
        while let Some(node) = self.nodes.get(current) {
            if node.next == head || ids.len() > self.nodes.len() {
                break;
            }
            current = node.next;
            ids.push(current);
        }
        ids
    }

    /// Total number of nodes in both lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of paired intersection nodes on list A.
    #[must_use]
    pub fn intersection_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|n| n.source == ContourSource::A && n.is_intersection())
            .count()
    }
}

/// Interleaves ring vertices with intersection hits `(segment, t, point, event)`.
fn build_entries(
    ring: &[Point2],
    hits: impl Iterator<Item = (usize, f64, Point2, usize)>,
) -> Vec<Entry> {
    let n = ring.len();
    let mut per_segment: Vec<Vec<(f64, Point2, usize)>> = vec![Vec::new(); n];
    for (seg, t, point, event) in hits {
        // A hit at the end of a segment belongs to the start of the next one.
        let next = (seg + 1) % n;
        if t >= 1.0 - TOLERANCE || points_coincide(&point, &ring[next]) {
            per_segment[next].push((0.0, point, event));
        } else {
            per_segment[seg].push((t, point, event));
        }
    }

    let capacity = n + per_segment.iter().map(Vec::len).sum::<usize>();
    let mut entries: Vec<Entry> = Vec::with_capacity(capacity);
    for (i, vertex) in ring.iter().enumerate() {
        push_or_merge(&mut entries, *vertex, true, None);
        let hits = &mut per_segment[i];
        hits.sort_by(|x, y| x.0.total_cmp(&y.0));
        for &(_, point, event) in hits.iter() {
            push_or_merge(&mut entries, point, false, Some(event));
        }
    }

    // Close the ring: a trailing entry on top of the first vertex merges into it.
    if entries.len() > 1 {
        let coincides = entries
            .first()
            .zip(entries.last())
            .is_some_and(|(f, l)| points_coincide(&f.point, &l.point));
        if coincides {
            if let Some(last) = entries.pop() {
                entries[0].is_vertex |= last.is_vertex;
                entries[0].events.extend(last.events);
            }
        }
    }
    entries
}

fn push_or_merge(entries: &mut Vec<Entry>, point: Point2, is_vertex: bool, event: Option<usize>) {
    if let Some(last) = entries.last_mut() {
        if points_coincide(&last.point, &point) {
            last.is_vertex |= is_vertex;
            last.events.extend(event);
            return;
        }
    }
    entries.push(Entry {
        point,
        is_vertex,
        events: event.into_iter().collect(),
    });
}
