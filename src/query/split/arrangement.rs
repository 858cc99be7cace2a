//! Planar overlay of the boundary rings of a polygon and of a splitter.

use crate::math::{Point, Real};
use crate::query::split::SplitError;
use crate::shape::Segment;
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::{self, SortedPair};
use alloc::vec::Vec;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

pub(crate) type NodeId = usize;
pub(crate) type EdgeId = usize;
/// Half-edge `2 * e` runs along the edge `e`, half-edge `2 * e + 1` runs against it.
pub(crate) type HalfEdgeId = usize;

bitflags::bitflags! {
    /// Origin of a node of the arrangement.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub(crate) struct NodeFlags: u8 {
        /// The node is a vertex of one of the input curves.
        const ORIGINAL = 1 << 0;
        /// The node is an intersection between the splitter and a ring, or between the
        /// splitter and itself.
        const INTERSECTION = 1 << 1;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum EdgeKind {
    /// A portion of the ring with the given index (0 for the exterior ring, `i + 1` for the
    /// `i`-th hole). The polygon interior is on the left of the edge direction.
    Boundary { ring: usize },
    Splitter,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Node {
    pub point: Point<Real>,
    pub flags: NodeFlags,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Edge {
    pub nodes: [NodeId; 2],
    pub kind: EdgeKind,
    pub alive: bool,
}

/// A closed cycle of half-edges, with its face on the left.
#[derive(Clone, Debug)]
pub(crate) struct Face {
    pub half_edges: Vec<HalfEdgeId>,
}

impl Face {
    /// The smallest id of the edges of this face.
    pub fn min_edge(&self) -> EdgeId {
        self.half_edges
            .iter()
            .map(|h| h / 2)
            .min()
            .unwrap_or(usize::MAX)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Arrangement {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    edge_ids: HashMap<SortedPair<NodeId>, EdgeId>,
    epsilon: Real,
}

impl Arrangement {
    pub fn new(epsilon: Real) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            edge_ids: HashMap::default(),
            epsilon,
        }
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[cfg(test)]
    pub fn num_alive_edges(&self) -> usize {
        self.edges.iter().filter(|e| e.alive).count()
    }

    #[inline]
    pub fn tail(&self, h: HalfEdgeId) -> NodeId {
        self.edges[h / 2].nodes[h % 2]
    }

    #[inline]
    pub fn head(&self, h: HalfEdgeId) -> NodeId {
        self.edges[h / 2].nodes[1 - h % 2]
    }

    pub fn segment(&self, e: EdgeId) -> Segment {
        let [a, b] = self.edges[e].nodes;
        Segment::new(self.nodes[a].point, self.nodes[b].point)
    }

    /// Inserts a node, or returns the existing node closer than epsilon to `point`.
    pub fn insert_node(&mut self, point: Point<Real>, flags: NodeFlags) -> NodeId {
        // TODO: linear scan. A grid keyed by the snapped coordinates would make this constant.
        if let Some(id) = self
            .nodes
            .iter()
            .position(|n| na::distance(&n.point, &point) <= self.epsilon)
        {
            self.nodes[id].flags |= flags;
            return id;
        }

        self.nodes.push(Node { point, flags });
        self.nodes.len() - 1
    }

    fn insert_edge(&mut self, a: NodeId, b: NodeId, kind: EdgeKind) {
        if a == b {
            return;
        }

        // Edges inserted first win: rings are inserted before the splitter so a splitter
        // portion running along a ring never duplicates it.
        if let Entry::Vacant(entry) = self.edge_ids.entry(SortedPair::new(a, b)) {
            let _ = entry.insert(self.edges.len());
            self.edges.push(Edge {
                nodes: [a, b],
                kind,
                alive: true,
            });
        }
    }

    /// Inserts the polyline `points` split at the given parameters (see
    /// [`crate::query::Contact`]).
    pub fn insert_curve(
        &mut self,
        points: &[Point<Real>],
        mut breaks: Vec<(Real, Point<Real>)>,
        kind: EdgeKind,
    ) {
        breaks.sort_by_key(|b| OrderedFloat(b.0));
        let mut breaks = breaks.into_iter().peekable();
        let mut chain = Vec::with_capacity(points.len() + breaks.len());

        for (i, pt) in points.iter().enumerate() {
            let vertex_param = i as Real;

            while let Some((_, bpt)) = breaks.next_if(|b| b.0 < vertex_param) {
                chain.push(self.insert_node(bpt, NodeFlags::INTERSECTION));
            }

            let mut flags = NodeFlags::ORIGINAL;
            while breaks.next_if(|b| b.0 == vertex_param).is_some() {
                flags |= NodeFlags::INTERSECTION;
            }
            chain.push(self.insert_node(*pt, flags));
        }

        for w in chain.windows(2) {
            self.insert_edge(w[0], w[1], kind);
        }
    }

    /// Removes the splitter edges for which `keep` returns `false`.
    pub fn retain_splitter_edges(&mut self, mut keep: impl FnMut(&Segment) -> bool) {
        for e in 0..self.edges.len() {
            if self.edges[e].alive && self.edges[e].kind == EdgeKind::Splitter {
                let segment = self.segment(e);
                self.edges[e].alive = keep(&segment);
            }
        }
    }

    /// Iteratively removes the splitter edges with an endpoint connected to nothing else.
    ///
    /// Returns the number of removed edges.
    pub fn prune_dangling_edges(&mut self) -> usize {
        let mut incident: Vec<SmallVec<[EdgeId; 4]>> =
            alloc::vec![SmallVec::new(); self.nodes.len()];
        let mut degree = alloc::vec![0usize; self.nodes.len()];

        for (e, edge) in self.edges.iter().enumerate().filter(|(_, e)| e.alive) {
            for n in edge.nodes {
                incident[n].push(e);
                degree[n] += 1;
            }
        }

        let mut worklist: Vec<NodeId> = (0..self.nodes.len()).filter(|n| degree[*n] == 1).collect();
        let mut removed = 0;

        while let Some(n) = worklist.pop() {
            if degree[n] != 1 {
                continue;
            }

            let Some(e) = incident[n].iter().copied().find(|e| self.edges[*e].alive) else {
                continue;
            };

            if self.edges[e].kind != EdgeKind::Splitter {
                continue;
            }

            self.edges[e].alive = false;
            removed += 1;

            for m in self.edges[e].nodes {
                degree[m] -= 1;
                if degree[m] == 1 {
                    worklist.push(m);
                }
            }
        }

        removed
    }

    /// Traces all the faces of the arrangement.
    ///
    /// From each half-edge, the next one is the outgoing half-edge that comes just before its
    /// twin in the counter-clockwise order around their common node. Every face then lies on
    /// the left of its half-edges.
    pub fn faces(&self) -> Result<Vec<Face>, SplitError> {
        let num_half_edges = self.edges.len() * 2;
        let mut outgoing: Vec<SmallVec<[HalfEdgeId; 4]>> =
            alloc::vec![SmallVec::new(); self.nodes.len()];

        for (e, edge) in self.edges.iter().enumerate().filter(|(_, e)| e.alive) {
            outgoing[edge.nodes[0]].push(2 * e);
            outgoing[edge.nodes[1]].push(2 * e + 1);
        }

        let mut position = alloc::vec![usize::MAX; num_half_edges];
        for out in &mut outgoing {
            out.sort_by_key(|h| {
                let dir = self.nodes[self.head(*h)].point - self.nodes[self.tail(*h)].point;
                OrderedFloat(utils::pseudo_angle(&dir))
            });

            for (i, h) in out.iter().enumerate() {
                position[*h] = i;
            }
        }

        let next = |h: HalfEdgeId| {
            let around = &outgoing[self.head(h)];
            let twin_pos = position[h ^ 1];
            around[(twin_pos + around.len() - 1) % around.len()]
        };

        let mut visited = alloc::vec![false; num_half_edges];
        let mut faces = Vec::new();

        for start in 0..num_half_edges {
            if visited[start] || !self.edges[start / 2].alive {
                continue;
            }

            let mut half_edges = Vec::new();
            let mut curr = start;

            for loop_id in 0.. {
                if loop_id > num_half_edges {
                    return Err(SplitError::InfiniteLoop);
                }

                visited[curr] = true;
                half_edges.push(curr);
                curr = next(curr);

                if curr == start {
                    break;
                }

                if visited[curr] {
                    // Reached a half-edge from another cycle: the topology is broken.
                    return Err(SplitError::InfiniteLoop);
                }
            }

            faces.push(Face { half_edges });
        }

        Ok(faces)
    }

    /// Splits `face` at the nodes it visits more than once into simple cycles.
    ///
    /// A face pinched at a node, e.g., a shell touching a hole at a single vertex, yields one
    /// cycle per loop around that node.
    pub fn simple_cycles(&self, face: &Face) -> Vec<Face> {
        let mut cycles = Vec::new();
        let mut stack: Vec<HalfEdgeId> = Vec::with_capacity(face.half_edges.len());
        let mut position: HashMap<NodeId, usize> = HashMap::default();

        for &h in &face.half_edges {
            let _ = position.insert(self.tail(h), stack.len());
            stack.push(h);

            if let Some(start) = position.get(&self.head(h)).copied() {
                let half_edges = stack.split_off(start);
                for h in &half_edges {
                    let _ = position.remove(&self.tail(*h));
                }
                cycles.push(Face { half_edges });
            }
        }

        cycles
    }

    /// Removes the splitter edges that have the same face on both sides.
    ///
    /// Returns the number of removed edges.
    pub fn remove_bridges(&mut self, faces: &[Face]) -> usize {
        let mut face_of = alloc::vec![usize::MAX; self.edges.len() * 2];
        for (f, face) in faces.iter().enumerate() {
            for h in &face.half_edges {
                face_of[*h] = f;
            }
        }

        let mut removed = 0;
        for (e, edge) in self.edges.iter_mut().enumerate() {
            if edge.alive && edge.kind == EdgeKind::Splitter && face_of[2 * e] == face_of[2 * e + 1]
            {
                edge.alive = false;
                removed += 1;
            }
        }

        removed
    }

    /// Does `face` lie outside of the polygon, i.e., does it run against a ring edge?
    pub fn is_exterior_face(&self, face: &Face) -> bool {
        face.half_edges
            .iter()
            .any(|h| h % 2 == 1 && matches!(self.edges[h / 2].kind, EdgeKind::Boundary { .. }))
    }

    /// The positions of the nodes of `face`, starting from the tail of its half-edge with the
    /// smallest id.
    pub fn face_nodes(&self, face: &Face) -> Vec<NodeId> {
        let start = face
            .half_edges
            .iter()
            .enumerate()
            .min_by_key(|(_, h)| **h)
            .map(|(i, _)| i)
            .unwrap_or(0);
        let n = face.half_edges.len();
        (0..n)
            .map(|i| self.tail(face.half_edges[(start + i) % n]))
            .collect()
    }

    /// The signed area enclosed by `face`, positive if it is counter-clockwise.
    pub fn face_area(&self, face: &Face) -> Real {
        let points: Vec<_> = face
            .half_edges
            .iter()
            .map(|h| self.nodes[self.tail(*h)].point)
            .collect();
        utils::signed_area(&points)
    }

    /// The total length of the edges of `face`.
    pub fn face_perimeter(&self, face: &Face) -> Real {
        face.half_edges
            .iter()
            .map(|h| self.segment(h / 2).length())
            .sum()
    }

    /// The indices of the rings contributing edges to `face`.
    pub fn face_rings(&self, face: &Face) -> Vec<usize> {
        let mut rings: Vec<usize> = face
            .half_edges
            .iter()
            .filter_map(|h| match self.edges[h / 2].kind {
                EdgeKind::Boundary { ring } => Some(ring),
                EdgeKind::Splitter => None,
            })
            .collect();
        rings.sort_unstable();
        rings.dedup();
        rings
    }
}
