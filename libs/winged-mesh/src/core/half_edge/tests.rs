//! Tests for the entity records.

use super::*;
use slotmap::Key;

#[test]
fn test_vertex_creation() {
    let pos = Vec3::new(1.0, 2.0, 3.0);
    let vertex = Vertex::new(pos);

    assert_eq!(vertex.position, pos);
    assert!(vertex.edge.is_null());
}

#[test]
fn test_half_edge_creation() {
    let he = HalfEdge::new(7);

    assert_eq!(he.serial(), 7);
    assert!(he.twin.is_null());
    assert!(he.next.is_null());
    assert!(he.prev.is_null());
    assert!(he.vert.is_null());
    assert!(he.face.is_null());
}

#[test]
fn test_face_creation() {
    let face = Face::default();
    assert!(face.edge.is_null());
}
