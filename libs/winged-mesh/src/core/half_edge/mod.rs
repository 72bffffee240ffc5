//! Core half-edge entity records.
//!
//! Entities refer to each other through generation-checked handles rather
//! than pointers. A handle whose slot has been removed from its arena is
//! detected by the [`Surface`](crate::Surface) instead of dangling, and a
//! freshly created entity holds *null* handles until an operator wires it.
//!
//! ```text
//!            twin
//!   B <------------- A        `vert` is the origin of a half-edge,
//!   ---------------->         `face` is the face on its left,
//!          edge                `next`/`prev` walk that face's boundary.
//! ```

use crate::core::vec3::Vec3;
use slotmap::new_key_type;

new_key_type! {
    /// Handle of a vertex stored in a [`Surface`](crate::Surface).
    pub struct VertexId;

    /// Handle of a face stored in a [`Surface`](crate::Surface).
    pub struct FaceId;

    /// Handle of a half-edge stored in a [`Surface`](crate::Surface).
    pub struct HalfEdgeId;
}

/// A point of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in 3D space.
    pub position: Vec3,
    /// Any half-edge leaving this vertex.
    pub edge: HalfEdgeId,
}

impl Vertex {
    /// Creates a vertex at `position` with no outgoing half-edge yet.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            edge: HalfEdgeId::default(),
        }
    }
}

/// A simple polygon bounded by a counter-clockwise loop of half-edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Face {
    /// Any half-edge on the boundary loop.
    pub edge: HalfEdgeId,
}

/// One direction of an undirected edge.
///
/// The `serial` is stamped by the store when the half-edge is created and
/// never changes; the member of a twin pair with the smaller serial is the
/// primary one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfEdge {
    /// Opposite half-edge sharing the same two vertices.
    pub twin: HalfEdgeId,
    /// Following half-edge on the owning face's loop.
    pub next: HalfEdgeId,
    /// Preceding half-edge on the owning face's loop.
    pub prev: HalfEdgeId,
    /// Origin vertex.
    pub vert: VertexId,
    /// Owning face (on the left).
    pub face: FaceId,
    pub(crate) serial: u64,
}

impl HalfEdge {
    pub(crate) fn new(serial: u64) -> Self {
        Self {
            twin: HalfEdgeId::default(),
            next: HalfEdgeId::default(),
            prev: HalfEdgeId::default(),
            vert: VertexId::default(),
            face: FaceId::default(),
            serial,
        }
    }

    /// Creation sequence number, unique within one surface.
    pub fn serial(&self) -> u64 {
        self.serial
    }
}

#[cfg(test)]
mod tests;
