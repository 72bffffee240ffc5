//! Tests for the tetrahedron primitive.

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_tetrahedron_counts() {
    let t = tetrahedron();
    assert_eq!(t.vertex_count(), 4);
    assert_eq!(t.face_count(), 4);
    assert_eq!(t.half_edge_count(), 12);
    assert!(t.validate());
}

#[test]
fn test_every_vertex_touches_three_faces() {
    let t = tetrahedron();
    for v in t.vertex_ids() {
        assert_eq!(t.vertex_degree(v).unwrap(), 3);
    }
}

#[test]
fn test_normals_point_away_from_opposite_corner() {
    let t = tetrahedron();
    let corners: Vec<_> = t.vertices().map(|(_, v)| v.position).collect();
    for (i, f) in t.face_ids().enumerate() {
        let n = t.normal(f).unwrap();
        let opposite = corners[3 - i];
        assert_relative_eq!(n.dot(opposite), -(3.0_f64.sqrt()), epsilon = 1e-12);
    }
}

#[test]
fn test_all_edges_have_equal_length() {
    let t = tetrahedron();
    for (a, b) in t.edge_segments() {
        assert_relative_eq!(a.distance(b), 8.0_f64.sqrt(), epsilon = 1e-12);
    }
}
