//! # Query Interface
//!
//! Read-only views a renderer or picker needs: points, one segment per
//! undirected edge, face polygons with normals, and a flat triangle buffer.
//!
//! Faces that cannot be walked are skipped rather than reported; run the
//! validator when that matters.

use crate::core::half_edge::{FaceId, HalfEdgeId, VertexId};
use crate::core::vec3::{BoundingBox, Vec3};
use crate::error::TopologyResult;
use crate::mesh::Surface;

/// A face boundary with its unit normal.
#[derive(Debug, Clone, PartialEq)]
pub struct FacePolygon {
    /// The face.
    pub face: FaceId,
    /// Corner positions in boundary order.
    pub corners: Vec<Vec3>,
    /// Unit normal, zero for a face with no area.
    pub normal: Vec3,
}

impl Surface {
    /// Every vertex handle with its position.
    pub fn vertex_positions(&self) -> Vec<(VertexId, Vec3)> {
        self.vertices().map(|(id, v)| (id, v.position)).collect()
    }

    /// The primary half-edge of every twin pair.
    pub fn primary_edges(&self) -> Vec<HalfEdgeId> {
        self.half_edge_ids()
            .filter(|&e| self.is_primary(e).unwrap_or(false))
            .collect()
    }

    /// One line segment per undirected edge, from origin to destination of
    /// its primary half-edge.
    pub fn edge_segments(&self) -> Vec<(Vec3, Vec3)> {
        self.primary_edges()
            .into_iter()
            .filter_map(|e| {
                let start = self.vertices.get(self.edges[e].vert)?;
                let end = self.vertices.get(self.destination(e).ok()?)?;
                Some((start.position, end.position))
            })
            .collect()
    }

    /// Corner positions of a face in boundary order.
    pub fn face_polygon(&self, face: FaceId) -> TopologyResult<Vec<Vec3>> {
        self.face_vertices(face)?
            .into_iter()
            .map(|v| self.vertex(v).map(|v| v.position))
            .collect()
    }

    /// Every walkable face as a polygon with its normal.
    pub fn faces_with_normals(&self) -> Vec<FacePolygon> {
        self.face_ids()
            .filter_map(|face| {
                let corners = self.face_polygon(face).ok()?;
                let normal = self.normal(face).ok()?;
                Some(FacePolygon {
                    face,
                    corners,
                    normal,
                })
            })
            .collect()
    }

    /// Fan-triangulates every face into a flat coordinate buffer.
    ///
    /// Each triangle is represented by 9 f64 values (3 vertices * 3
    /// coordinates). A face with `n` corners is fanned from its first
    /// corner into `n - 2` triangles. The fan covers the face exactly only
    /// when every corner is visible from that first one, as in a convex
    /// face. Otherwise the output is approximate and triangles may overlap
    /// or fall outside the polygon.
    pub fn triangulate(&self) -> Vec<f64> {
        let mut out = Vec::new();
        for polygon in self.faces_with_normals() {
            let Some((&apex, rest)) = polygon.corners.split_first() else {
                continue;
            };
            for pair in rest.windows(2) {
                for p in [apex, pair[0], pair[1]] {
                    out.extend_from_slice(&[p.x, p.y, p.z]);
                }
            }
        }
        out
    }

    /// Axis-aligned box around every vertex; [`BoundingBox::empty`] for a
    /// surface without vertices.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::empty();
        for (_, vertex) in self.vertices() {
            bbox.expand(vertex.position);
        }
        bbox
    }
}
