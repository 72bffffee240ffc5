//! # Mesh Store
//!
//! [`Surface`] owns every vertex, face and half-edge of a polyhedral surface.
//!
//! ## Structure
//!
//! - three `slotmap` arenas, one per entity kind, each the sole owner of its
//!   entities;
//! - every reference between entities is a generation-checked handle, so a
//!   handle to a removed entity is detected instead of dangling;
//! - `traverse` - boundary-loop and vertex-fan iterators.
//!
//! Creation and removal are O(1). Arena slot order is not an identity: hosts
//! keep handles, never positions.
//!
//! ## Example
//!
//! ```rust
//! use winged_mesh::{Surface, Vec3};
//!
//! let mut surface = Surface::new();
//! let v = surface.new_vertex(Vec3::new(0.0, 1.0, 0.0));
//! assert_eq!(surface.vertex_count(), 1);
//! assert!(surface.delete_vertex(v));
//! assert!(!surface.delete_vertex(v));
//! ```

pub mod traverse;

use std::collections::HashSet;
use std::ops::Index;

use slotmap::SlotMap;
use tracing::warn;

use crate::config::KernelConfig;
use crate::core::half_edge::{Face, FaceId, HalfEdge, HalfEdgeId, Vertex, VertexId};
use crate::core::vec3::Vec3;
use crate::error::{TopologyError, TopologyResult};

// =============================================================================
// SURFACE STRUCT
// =============================================================================

/// Owning store of a half-edge surface.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    pub(crate) vertices: SlotMap<VertexId, Vertex>,
    pub(crate) faces: SlotMap<FaceId, Face>,
    pub(crate) edges: SlotMap<HalfEdgeId, HalfEdge>,
    next_serial: u64,
    config: KernelConfig,
}

impl Surface {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Create an empty surface with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty surface with an explicit configuration.
    #[must_use]
    pub fn with_config(config: KernelConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create an empty surface with pre-allocated arenas.
    #[must_use]
    pub fn with_capacity(vertices: usize, faces: usize, half_edges: usize) -> Self {
        Self {
            vertices: SlotMap::with_capacity_and_key(vertices),
            faces: SlotMap::with_capacity_and_key(faces),
            edges: SlotMap::with_capacity_and_key(half_edges),
            ..Self::default()
        }
    }

    /// Configuration used by traversals and the validator.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: KernelConfig) {
        self.config = config;
    }

    // =========================================================================
    // CREATION / DELETION
    // =========================================================================

    /// Add a vertex with no outgoing half-edge yet. O(1).
    pub fn new_vertex(&mut self, position: Vec3) -> VertexId {
        self.vertices.insert(Vertex::new(position))
    }

    /// Add a face with no boundary yet. O(1).
    pub fn new_face(&mut self) -> FaceId {
        self.faces.insert(Face::default())
    }

    /// Add an unlinked half-edge stamped with the next creation serial. O(1).
    pub fn new_edge(&mut self) -> HalfEdgeId {
        let serial = self.next_serial;
        self.next_serial += 1;
        self.edges.insert(HalfEdge::new(serial))
    }

    /// Remove a vertex. Returns whether it was present.
    ///
    /// The caller must already have rewired every half-edge that used it.
    pub fn delete_vertex(&mut self, id: VertexId) -> bool {
        let found = self.vertices.remove(id).is_some();
        if !found {
            warn!(?id, "vertex could not be removed");
        }
        found
    }

    /// Remove a face. Returns whether it was present.
    pub fn delete_face(&mut self, id: FaceId) -> bool {
        let found = self.faces.remove(id).is_some();
        if !found {
            warn!(?id, "face could not be removed");
        }
        found
    }

    /// Remove a half-edge. Returns whether it was present.
    pub fn delete_edge(&mut self, id: HalfEdgeId) -> bool {
        let found = self.edges.remove(id).is_some();
        if !found {
            warn!(?id, "half-edge could not be removed");
        }
        found
    }

    // =========================================================================
    // WIRING
    // =========================================================================

    pub(crate) fn link_twins(&mut self, a: HalfEdgeId, b: HalfEdgeId) {
        self.edges[a].twin = b;
        self.edges[b].twin = a;
    }

    pub(crate) fn link_next(&mut self, prev: HalfEdgeId, next: HalfEdgeId) {
        self.edges[prev].next = next;
        self.edges[next].prev = prev;
    }

    pub(crate) fn set_origin(&mut self, edge: HalfEdgeId, vert: VertexId) {
        self.edges[edge].vert = vert;
    }

    pub(crate) fn set_face(&mut self, edge: HalfEdgeId, face: FaceId) {
        self.edges[edge].face = face;
    }

    pub(crate) fn anchor_vertex(&mut self, vert: VertexId, edge: HalfEdgeId) {
        self.vertices[vert].edge = edge;
    }

    pub(crate) fn anchor_face(&mut self, face: FaceId, edge: HalfEdgeId) {
        self.faces[face].edge = edge;
    }

    // =========================================================================
    // ACCESS
    // =========================================================================

    /// Get a vertex by handle.
    pub fn vertex(&self, id: VertexId) -> TopologyResult<&Vertex> {
        self.vertices.get(id).ok_or(TopologyError::InvalidVertex(id))
    }

    /// Get a face by handle.
    pub fn face(&self, id: FaceId) -> TopologyResult<&Face> {
        self.faces.get(id).ok_or(TopologyError::InvalidFace(id))
    }

    /// Get a half-edge by handle.
    pub fn half_edge(&self, id: HalfEdgeId) -> TopologyResult<&HalfEdge> {
        self.edges.get(id).ok_or(TopologyError::InvalidHalfEdge(id))
    }

    /// Whether the vertex handle is live.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(id)
    }

    /// Whether the face handle is live.
    pub fn contains_face(&self, id: FaceId) -> bool {
        self.faces.contains_key(id)
    }

    /// Whether the half-edge handle is live.
    pub fn contains_half_edge(&self, id: HalfEdgeId) -> bool {
        self.edges.contains_key(id)
    }

    /// Move a vertex.
    pub fn set_position(&mut self, id: VertexId, position: Vec3) -> TopologyResult<()> {
        let vertex = self
            .vertices
            .get_mut(id)
            .ok_or(TopologyError::InvalidVertex(id))?;
        vertex.position = position;
        Ok(())
    }

    /// Move several vertices by the same offset. Nothing moves if any handle
    /// is dead. A handle listed twice moves once.
    pub fn translate_vertices(&mut self, ids: &[VertexId], delta: Vec3) -> TopologyResult<()> {
        if let Some(&dead) = ids.iter().find(|&&id| !self.contains_vertex(id)) {
            return Err(TopologyError::InvalidVertex(dead));
        }
        let mut moved = HashSet::with_capacity(ids.len());
        for &id in ids {
            if moved.insert(id) {
                self.vertices[id].position += delta;
            }
        }
        Ok(())
    }

    // =========================================================================
    // COUNTS / ITERATION
    // =========================================================================

    /// Check if the surface holds no entities at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty() && self.edges.is_empty()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of half-edges.
    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of undirected edges (twin pairs).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Handles of all vertices, in arena order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys()
    }

    /// Handles of all faces, in arena order.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.keys()
    }

    /// Handles of all half-edges, in arena order.
    pub fn half_edge_ids(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.edges.keys()
    }

    /// All vertices with their handles.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter()
    }

    /// All faces with their handles.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face)> {
        self.faces.iter()
    }

    /// All half-edges with their handles.
    pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdge)> {
        self.edges.iter()
    }
}

// =============================================================================
// INDEXING
// =============================================================================

impl Index<VertexId> for Surface {
    type Output = Vertex;

    fn index(&self, id: VertexId) -> &Vertex {
        &self.vertices[id]
    }
}

impl Index<FaceId> for Surface {
    type Output = Face;

    fn index(&self, id: FaceId) -> &Face {
        &self.faces[id]
    }
}

impl Index<HalfEdgeId> for Surface {
    type Output = HalfEdge;

    fn index(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.edges[id]
    }
}
