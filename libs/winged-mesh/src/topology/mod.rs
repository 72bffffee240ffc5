//! # Topology Accessors
//!
//! Read-only questions about the half-edge graph: which member of a twin
//! pair is canonical, which way a face points, and how to step from one
//! half-edge to a neighbouring one.
//!
//! Normals are computed on demand with Newell's method and never cached, so
//! they always reflect the current vertex positions.

use crate::core::half_edge::{FaceId, HalfEdgeId, VertexId};
use crate::core::vec3::Vec3;
use crate::error::{TopologyError, TopologyResult};
use crate::mesh::Surface;

/// A move from one half-edge to a neighbouring one.
///
/// ```text
///   AroundVertex      = twin.next   (next edge leaving the same vertex)
///   AroundVertexBack  = prev.twin   (previous edge leaving the same vertex)
///   AcrossNext        = next.twin
///   AcrossPrev        = twin.prev
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// The opposite half-edge.
    Twin,
    /// The following half-edge on the same face.
    Next,
    /// The preceding half-edge on the same face.
    Prev,
    /// `twin.next`: the next half-edge leaving the same origin.
    AroundVertex,
    /// `prev.twin`: the previous half-edge leaving the same origin.
    AroundVertexBack,
    /// `next.twin`: onto the neighbouring face across the next edge.
    AcrossNext,
    /// `twin.prev`: onto the neighbouring face, ending at this origin.
    AcrossPrev,
}

impl Surface {
    /// The canonical member of the twin pair `{edge, edge.twin}`.
    ///
    /// The half-edge created first is primary; the answer never changes
    /// while both half-edges are alive.
    pub fn primary(&self, edge: HalfEdgeId) -> TopologyResult<HalfEdgeId> {
        let he = self.half_edge(edge)?;
        let twin = self
            .edges
            .get(he.twin)
            .ok_or(TopologyError::DanglingReference { edge, link: "twin" })?;
        Ok(if he.serial < twin.serial { edge } else { he.twin })
    }

    /// Whether `edge` is the primary member of its pair.
    pub fn is_primary(&self, edge: HalfEdgeId) -> TopologyResult<bool> {
        Ok(self.primary(edge)? == edge)
    }

    /// Area-weighted face normal (Newell's method). Twice the vector area.
    pub fn normal_non_unit(&self, face: FaceId) -> TopologyResult<Vec3> {
        let boundary = self.checked_face_loop(face)?;
        let mut normal = Vec3::ZERO;
        for &edge in &boundary {
            let he = &self.edges[edge];
            let p0 = self.vertex(he.vert)?.position;
            let p1 = self.vertex(self.edges[he.next].vert)?.position;
            let sum = p0 + p1;
            let diff = p0 - p1;
            normal += Vec3::new(diff.y * sum.z, diff.z * sum.x, diff.x * sum.y);
        }
        Ok(normal)
    }

    /// Unit face normal; the zero vector for a face with no area.
    pub fn normal(&self, face: FaceId) -> TopologyResult<Vec3> {
        Ok(self.normal_non_unit(face)?.normalize_or_zero())
    }

    /// Origins of the boundary half-edges of a face, in loop order.
    pub fn face_vertices(&self, face: FaceId) -> TopologyResult<Vec<VertexId>> {
        Ok(self
            .checked_face_loop(face)?
            .into_iter()
            .map(|e| self.edges[e].vert)
            .collect())
    }

    /// Number of boundary half-edges of a face.
    pub fn face_side_count(&self, face: FaceId) -> TopologyResult<usize> {
        Ok(self.checked_face_loop(face)?.len())
    }

    /// Number of half-edges leaving a vertex.
    pub fn vertex_degree(&self, vertex: VertexId) -> TopologyResult<usize> {
        Ok(self.checked_vertex_fan(vertex)?.len())
    }

    /// The vertex a half-edge points to (its twin's origin).
    pub fn destination(&self, edge: HalfEdgeId) -> TopologyResult<VertexId> {
        let twin = self.half_edge(edge)?.twin;
        self.edges
            .get(twin)
            .map(|t| t.vert)
            .ok_or(TopologyError::DanglingReference { edge, link: "twin" })
    }

    /// Moves from `edge` to a neighbouring half-edge.
    pub fn step(&self, edge: HalfEdgeId, step: Step) -> TopologyResult<HalfEdgeId> {
        match step {
            Step::Twin => self.follow(edge, Link::Twin),
            Step::Next => self.follow(edge, Link::Next),
            Step::Prev => self.follow(edge, Link::Prev),
            Step::AroundVertex => self.follow(self.follow(edge, Link::Twin)?, Link::Next),
            Step::AroundVertexBack => self.follow(self.follow(edge, Link::Prev)?, Link::Twin),
            Step::AcrossNext => self.follow(self.follow(edge, Link::Next)?, Link::Twin),
            Step::AcrossPrev => self.follow(self.follow(edge, Link::Twin)?, Link::Prev),
        }
    }

    fn follow(&self, from: HalfEdgeId, link: Link) -> TopologyResult<HalfEdgeId> {
        let he = self.half_edge(from)?;
        let (to, name) = match link {
            Link::Twin => (he.twin, "twin"),
            Link::Next => (he.next, "next"),
            Link::Prev => (he.prev, "prev"),
        };
        if self.contains_half_edge(to) {
            Ok(to)
        } else {
            Err(TopologyError::DanglingReference {
                edge: from,
                link: name,
            })
        }
    }
}

#[derive(Clone, Copy)]
enum Link {
    Twin,
    Next,
    Prev,
}
