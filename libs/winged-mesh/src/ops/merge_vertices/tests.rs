//! Tests for edge contraction and same-face vertex merging.

use super::*;
use crate::core::vec3::Vec3;
use crate::core::half_edge::{Face, FaceId, HalfEdge, Vertex};
use crate::ops::{add_face_vertex, split_edge};
use crate::primitives::{build_polyhedron, cube, tetrahedron};

/// A square with a front and a back face.
fn pillow() -> Surface {
    let square = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    build_polyhedron(&square, &[vec![0, 1, 2, 3], vec![3, 2, 1, 0]]).unwrap()
}

/// The half-edge of `face` leaving `vertex`.
fn corner(surface: &Surface, face: FaceId, vertex: VertexId) -> HalfEdgeId {
    surface
        .face_edges(face)
        .find(|&e| surface[e].vert == vertex)
        .unwrap()
}

type Snapshot = (
    Vec<(VertexId, Vertex)>,
    Vec<(FaceId, Face)>,
    Vec<(HalfEdgeId, HalfEdge)>,
);

fn snapshot(surface: &Surface) -> Snapshot {
    (
        surface.vertices().map(|(id, v)| (id, *v)).collect(),
        surface.faces().map(|(id, f)| (id, *f)).collect(),
        surface.half_edges().map(|(id, e)| (id, *e)).collect(),
    )
}

/// Splits `face` along the diagonal from `a` to `b`.
fn diagonal(surface: &mut Surface, face: FaceId, a: VertexId, b: VertexId) {
    let (e1, e2) = (corner(surface, face, a), corner(surface, face, b));
    split_face(surface, e1, e2).unwrap();
}

#[test]
fn split_then_merge_restores_counts() {
    let mut surface = cube(1.0);
    let e = surface.half_edge_ids().next().unwrap();
    let start = surface[e].vert;
    let end = surface.destination(e).unwrap();
    split_edge(&mut surface, e).unwrap();

    let kept = merge_vertices_along_edge(&mut surface, e).unwrap();

    assert_eq!(kept, Some(start));
    assert_eq!(surface.vertex_count(), 8);
    assert_eq!(surface.half_edge_count(), 24);
    assert_eq!(surface.face_count(), 6);
    assert!(surface.validate());
    assert!(surface
        .vertex_edges(start)
        .any(|out| surface.destination(out).unwrap() == end));
}

#[test]
fn contracting_cube_edge_turns_quads_into_triangles() {
    let mut surface = cube(1.0);
    let e = surface.half_edge_ids().next().unwrap();
    let twin = surface[e].twin;
    let (f, g) = (surface[e].face, surface[twin].face);

    merge_vertices_along_edge(&mut surface, e).unwrap();

    assert_eq!(surface.vertex_count(), 7);
    assert_eq!(surface.half_edge_count(), 22);
    assert_eq!(surface.face_count(), 6);
    assert_eq!(surface.face_side_count(f).unwrap(), 3);
    assert_eq!(surface.face_side_count(g).unwrap(), 3);
    assert!(surface.validate());
}

#[test]
fn tetrahedron_collapses_to_nothing() {
    let mut surface = tetrahedron();
    let e = surface.half_edge_ids().next().unwrap();

    let kept = merge_vertices_along_edge(&mut surface, e).unwrap();
    assert!(kept.is_some());
    assert_eq!(surface.vertex_count(), 3);
    assert_eq!(surface.face_count(), 2);
    assert_eq!(surface.half_edge_count(), 6);
    assert!(surface.validate());

    let e = surface.half_edge_ids().next().unwrap();
    let kept = merge_vertices_along_edge(&mut surface, e).unwrap();
    assert_eq!(kept, None);
    assert!(surface.is_empty());
    assert!(surface.validate());
}

#[test]
fn contracts_spur_onto_its_corner() {
    let mut surface = cube(1.0);
    let e = surface.half_edge_ids().next().unwrap();
    let corner = surface[e].vert;
    let v = add_face_vertex(&mut surface, e).unwrap();
    let outward = surface[surface[v].edge].twin;

    let kept = merge_vertices_along_edge(&mut surface, outward).unwrap();

    assert_eq!(kept, Some(corner));
    assert!(!surface.contains_vertex(v));
    assert_eq!(surface.half_edge_count(), 24);
    assert!(surface.validate());
}

#[test]
fn rejects_isolated_edge() {
    let mut surface = Surface::new();
    let a = surface.new_vertex(Vec3::ZERO);
    let b = surface.new_vertex(Vec3::Z);
    let e = surface.new_edge();
    let t = surface.new_edge();
    let face = surface.new_face();
    surface.link_twins(e, t);
    surface.link_next(e, t);
    surface.link_next(t, e);
    surface.set_origin(e, a);
    surface.set_origin(t, b);
    surface.set_face(e, face);
    surface.set_face(t, face);
    surface.anchor_face(face, e);
    surface.anchor_vertex(a, e);
    surface.anchor_vertex(b, t);

    let err = merge_vertices_along_edge(&mut surface, e).unwrap_err();

    assert_eq!(err, TopologyError::IsolatedEdge(e));
    assert_eq!(surface.vertex_count(), 2);
    assert_eq!(surface.half_edge_count(), 2);
}

#[test]
fn merges_opposite_corners_of_a_face() {
    let mut surface = cube(1.0);
    let face = surface.face_ids().next().unwrap();
    let e1 = surface[face].edge;
    let e2 = surface[surface[e1].next].next;
    let keep = surface[e1].vert;

    let kept = merge_vertices_on_face(&mut surface, e1, e2).unwrap();

    assert_eq!(kept, Some(keep));
    assert_eq!(surface.vertex_count(), 7);
    assert_eq!(surface.face_count(), 5);
    assert_eq!(surface.half_edge_count(), 20);
    assert!(!surface.contains_face(face));
    assert!(surface.validate());
}

#[test]
fn merge_on_face_rejects_like_split_face() {
    let mut surface = cube(1.0);
    let e = surface.half_edge_ids().next().unwrap();
    let next = surface[e].next;
    let twin = surface[e].twin;

    assert!(matches!(
        merge_vertices_on_face(&mut surface, e, next),
        Err(TopologyError::EdgeAlreadyExists { .. })
    ));
    assert!(matches!(
        merge_vertices_on_face(&mut surface, e, twin),
        Err(TopologyError::DifferentFaces { .. })
    ));
    assert_eq!(surface.vertex_count(), 8);
    assert_eq!(surface.half_edge_count(), 24);
}

#[test]
fn refuses_to_fold_a_parallel_edge() {
    let mut surface = pillow();
    let v: Vec<_> = surface.vertex_ids().collect();
    let faces: Vec<_> = surface.face_ids().collect();
    let (front, back) = (faces[0], faces[1]);
    diagonal(&mut surface, front, v[0], v[2]);
    diagonal(&mut surface, back, v[0], v[2]);
    assert!(surface.validate());

    // Both faces are anchored on their new half-edge from v0 to v2.
    let front_diagonal = surface[front].edge;
    let back_return = surface[surface[back].edge].twin;
    let before = snapshot(&surface);

    let err = merge_vertices_along_edge(&mut surface, front_diagonal).unwrap_err();

    assert_eq!(
        err,
        TopologyError::WouldFoldEdge {
            keep: v[0],
            discard: v[2],
            edge: back_return,
        }
    );
    assert_eq!(snapshot(&surface), before);
    assert!(surface.validate());
}

#[test]
fn merge_on_face_checks_everything_before_splitting() {
    let mut surface = pillow();
    let v: Vec<_> = surface.vertex_ids().collect();
    let faces: Vec<_> = surface.face_ids().collect();
    let (front, back) = (faces[0], faces[1]);
    diagonal(&mut surface, back, v[0], v[2]);
    let (e1, e2) = (corner(&surface, front, v[0]), corner(&surface, front, v[2]));
    let before = snapshot(&surface);

    let err = merge_vertices_on_face(&mut surface, e1, e2).unwrap_err();

    assert!(matches!(err, TopologyError::WouldFoldEdge { keep, discard, .. }
        if keep == v[0] && discard == v[2]));
    assert_eq!(snapshot(&surface), before);
    assert_eq!(surface.face_count(), 3);
}

#[test]
fn contraction_beside_a_diagonal_is_allowed() {
    let mut surface = pillow();
    let v: Vec<_> = surface.vertex_ids().collect();
    let front = surface.face_ids().next().unwrap();
    diagonal(&mut surface, front, v[0], v[2]);

    // Only the front triangle and the back quad join v0 and v3.
    let e = corner(&surface, front, v[0]);
    assert_eq!(surface.destination(e).unwrap(), v[2]);
    let side = surface[surface[e].prev].twin;
    assert_eq!(surface[side].vert, v[0]);

    let kept = merge_vertices_along_edge(&mut surface, side).unwrap();

    assert_eq!(kept, Some(v[0]));
    assert_eq!(surface.vertex_count(), 3);
    assert_eq!(surface.face_count(), 2);
    assert!(surface.validate());
}
