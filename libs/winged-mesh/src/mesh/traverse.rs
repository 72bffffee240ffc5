//! # Traversal
//!
//! Boundary-loop and vertex-fan walks.
//!
//! ## Overview
//!
//! - [`FaceEdges`] follows `next` from a face's anchor half-edge;
//! - [`VertexEdges`] follows `twin` then `next` from a vertex's anchor,
//!   visiting every outgoing half-edge.
//!
//! Both are lazy, restartable and side-effect free. They stop when they get
//! back to the start, when they meet a dead handle, or after the configured
//! loop limit, so walking a corrupted surface always terminates.
//!
//! The crate-internal `Surface::walk` collects a whole walk and reports
//! *why* it stopped; operators use it to check their preconditions and the
//! validator uses it to diagnose broken loops.

use slotmap::Key;

use crate::core::half_edge::{FaceId, HalfEdgeId, VertexId};
use crate::error::{TopologyError, TopologyResult};
use crate::mesh::Surface;

// =============================================================================
// ITERATORS
// =============================================================================

/// Iterator over the half-edges of a face boundary.
pub struct FaceEdges<'a> {
    surface: &'a Surface,
    start: HalfEdgeId,
    current: HalfEdgeId,
    first: bool,
    remaining: usize,
}

impl<'a> Iterator for FaceEdges<'a> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || (!self.first && self.current == self.start) {
            return None;
        }
        let edge = self.surface.edges.get(self.current)?;

        self.first = false;
        self.remaining -= 1;
        let result = self.current;
        self.current = edge.next;

        Some(result)
    }
}

/// Iterator over the outgoing half-edges of a vertex.
pub struct VertexEdges<'a> {
    surface: &'a Surface,
    start: HalfEdgeId,
    current: HalfEdgeId,
    first: bool,
    remaining: usize,
}

impl<'a> Iterator for VertexEdges<'a> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || (!self.first && self.current == self.start) {
            return None;
        }
        let edge = self.surface.edges.get(self.current)?;

        self.first = false;
        self.remaining -= 1;
        let result = self.current;

        // Move to next outgoing half-edge: twin -> next
        self.current = match self.surface.edges.get(edge.twin) {
            Some(twin) => twin.next,
            None => HalfEdgeId::null(),
        };

        Some(result)
    }
}

// =============================================================================
// WALKS
// =============================================================================

/// Which link a walk follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Around {
    /// `next`: the boundary loop of a face.
    Face,
    /// `twin` then `next`: the outgoing fan of a vertex.
    Vertex,
}

/// Outcome of collecting a whole walk.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Walk {
    /// The walk came back to its start.
    Closed(Vec<HalfEdgeId>),
    /// The start handle itself is dead (or null).
    DeadStart,
    /// A visited half-edge links to a dead half-edge.
    Dangling {
        edge: HalfEdgeId,
        link: &'static str,
    },
    /// The walk exceeded the loop limit without returning to its start.
    Unclosed,
}

impl Walk {
    /// Converts the walk into the closed edge list or the matching error.
    pub(crate) fn closed(self, start: HalfEdgeId) -> TopologyResult<Vec<HalfEdgeId>> {
        match self {
            Walk::Closed(edges) => Ok(edges),
            Walk::DeadStart => Err(TopologyError::InvalidHalfEdge(start)),
            Walk::Dangling { edge, link } => Err(TopologyError::DanglingReference { edge, link }),
            Walk::Unclosed => Err(TopologyError::UnclosedLoop { start }),
        }
    }
}

impl Surface {
    /// Iterate over the boundary half-edges of a face, starting at its anchor.
    ///
    /// Yields nothing for a dead face handle.
    pub fn face_edges(&self, face: FaceId) -> FaceEdges<'_> {
        let start = self
            .faces
            .get(face)
            .map_or_else(HalfEdgeId::null, |f| f.edge);
        FaceEdges {
            surface: self,
            start,
            current: start,
            first: true,
            remaining: self.config().max_loop_iterations,
        }
    }

    /// Iterate over the boundary loop containing `edge`, starting at `edge`.
    pub fn loop_edges(&self, edge: HalfEdgeId) -> FaceEdges<'_> {
        FaceEdges {
            surface: self,
            start: edge,
            current: edge,
            first: true,
            remaining: self.config().max_loop_iterations,
        }
    }

    /// Iterate over the half-edges leaving a vertex, starting at its anchor.
    ///
    /// Yields nothing for a dead vertex handle.
    pub fn vertex_edges(&self, vertex: VertexId) -> VertexEdges<'_> {
        let start = self
            .vertices
            .get(vertex)
            .map_or_else(HalfEdgeId::null, |v| v.edge);
        VertexEdges {
            surface: self,
            start,
            current: start,
            first: true,
            remaining: self.config().max_loop_iterations,
        }
    }

    /// Collects the walk starting at `start`, reporting how it ended.
    pub(crate) fn walk(&self, start: HalfEdgeId, around: Around) -> Walk {
        self.walk_within(start, around, self.config().max_loop_iterations)
    }

    /// [`Surface::walk`] with an explicit step limit.
    pub(crate) fn walk_within(&self, start: HalfEdgeId, around: Around, limit: usize) -> Walk {
        if !self.edges.contains_key(start) {
            return Walk::DeadStart;
        }
        let mut visited = Vec::new();
        let mut current = start;
        loop {
            if visited.len() >= limit {
                return Walk::Unclosed;
            }
            visited.push(current);

            let edge = &self.edges[current];
            let (holder, step) = match around {
                Around::Face => (current, edge.next),
                Around::Vertex => match self.edges.get(edge.twin) {
                    Some(twin) => (edge.twin, twin.next),
                    None => {
                        return Walk::Dangling {
                            edge: current,
                            link: "twin",
                        }
                    }
                },
            };
            if !self.edges.contains_key(step) {
                return Walk::Dangling {
                    edge: holder,
                    link: "next",
                };
            }
            if step == start {
                return Walk::Closed(visited);
            }
            current = step;
        }
    }

    /// Boundary loop of a live face, or why it cannot be walked.
    pub(crate) fn checked_face_loop(&self, face: FaceId) -> TopologyResult<Vec<HalfEdgeId>> {
        let start = self.face(face)?.edge;
        self.walk(start, Around::Face).closed(start)
    }

    /// Outgoing fan of a live vertex, or why it cannot be walked.
    pub(crate) fn checked_vertex_fan(&self, vertex: VertexId) -> TopologyResult<Vec<HalfEdgeId>> {
        let start = self.vertex(vertex)?.edge;
        self.walk(start, Around::Vertex).closed(start)
    }
}
