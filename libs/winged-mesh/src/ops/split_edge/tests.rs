//! Tests for edge subdivision.

use super::*;
use crate::error::TopologyError;
use crate::ops::add_face_vertex;
use crate::primitives::cube;

#[test]
fn split_cube_edge_counts() {
    let mut surface = cube(1.0);
    let e = surface.half_edge_ids().next().unwrap();

    split_edge(&mut surface, e).unwrap();

    assert_eq!(surface.vertex_count(), 9);
    assert_eq!(surface.half_edge_count(), 26);
    assert_eq!(surface.face_count(), 6);
    assert!(surface.validate());
}

#[test]
fn new_vertex_sits_at_midpoint_between_endpoints() {
    let mut surface = cube(1.0);
    let e = surface.half_edge_ids().next().unwrap();
    let start = surface[e].vert;
    let end = surface.destination(e).unwrap();
    let expected = (surface[start].position + surface[end].position) / 2.0;

    let v = split_edge(&mut surface, e).unwrap();

    assert_eq!(surface[v].position, expected);
    assert_eq!(surface.destination(e).unwrap(), v);
    assert_eq!(surface[e].vert, start);
    assert_eq!(surface.vertex_degree(v).unwrap(), 2);
}

#[test]
fn both_adjacent_faces_gain_a_side() {
    let mut surface = cube(1.0);
    let e = surface.half_edge_ids().next().unwrap();
    let twin = surface[e].twin;
    let (f, g) = (surface[e].face, surface[twin].face);

    split_edge(&mut surface, e).unwrap();

    assert_eq!(surface.face_side_count(f).unwrap(), 5);
    assert_eq!(surface.face_side_count(g).unwrap(), 5);
}

#[test]
fn splits_spur_edge() {
    let mut surface = cube(1.0);
    let e = surface.half_edge_ids().next().unwrap();
    let face = surface[e].face;
    let vertex = add_face_vertex(&mut surface, e).unwrap();
    // The spur runs from the duplicate back to the original corner.
    let spur = surface[vertex].edge;
    let spur_twin = surface[spur].twin;
    assert_eq!(surface[spur_twin].next, spur);

    let mid = split_edge(&mut surface, spur_twin).unwrap();

    assert_eq!(surface.face_side_count(face).unwrap(), 8);
    assert_eq!(surface[mid].position, surface[vertex].position);
    assert!(surface.validate());
}

#[test]
fn rejects_dead_edge_without_mutation() {
    let mut surface = cube(1.0);
    let e = surface.half_edge_ids().next().unwrap();
    let twin = surface[e].twin;
    surface.edges.remove(twin);
    let half_edges = surface.half_edge_count();

    let err = split_edge(&mut surface, e).unwrap_err();

    assert_eq!(err, TopologyError::DanglingReference { edge: e, link: "twin" });
    assert_eq!(surface.half_edge_count(), half_edges);
    assert_eq!(surface.vertex_count(), 8);
}

#[test]
fn split_zero_length_edge_keeps_position() {
    let mut surface = cube(1.0);
    let e = surface.half_edge_ids().next().unwrap();
    let start = surface[e].vert;
    let end = surface.destination(e).unwrap();
    surface.set_position(end, surface[start].position).unwrap();

    let v = split_edge(&mut surface, e).unwrap();

    assert_eq!(surface[v].position, surface[start].position);
    assert!(surface[v].position.is_finite());
}
