//! End-to-end editing scenarios against the public API.

use approx::assert_relative_eq;
use winged_mesh::command::{execute, Command, ExecuteOptions, Outcome};
use winged_mesh::{
    cube, ops, polygon_sheet, tetrahedron, Face, FaceId, HalfEdge, HalfEdgeId, Surface,
    TopologyError, Vec3, Vertex, VertexId,
};

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

fn euler(surface: &Surface) -> i64 {
    surface.vertex_count() as i64 - surface.edge_count() as i64 + surface.face_count() as i64
}

#[test]
fn cube_construction() {
    let surface = cube(1.0);

    assert_eq!(surface.vertex_count(), 8);
    assert_eq!(surface.face_count(), 6);
    assert_eq!(surface.half_edge_count(), 24);
    assert_eq!(surface.primary_edges().len(), 12);
    assert_eq!(euler(&surface), 2);
    assert!(surface.validate());
}

#[test]
fn edge_split_on_a_cube() {
    let mut surface = cube(1.0);
    let e = surface.half_edge_ids().next().unwrap();
    let (left, right) = (surface[e].face, surface[surface[e].twin].face);
    let a = surface[surface[e].vert].position;
    let b = surface[surface.destination(e).unwrap()].position;

    let mid = ops::split_edge(&mut surface, e).unwrap();

    assert_eq!(surface.vertex_count(), 9);
    assert_eq!(surface.half_edge_count(), 26);
    assert_eq!(surface[mid].position, (a + b) / 2.0);
    assert_eq!(surface.vertex_degree(mid).unwrap(), 2);
    assert_eq!(surface.face_side_count(left).unwrap(), 5);
    assert_eq!(surface.face_side_count(right).unwrap(), 5);
    assert!(surface.validate());
}

#[test]
fn split_and_merge_round_trip() {
    let mut surface = cube(1.0);
    let positions_before: Vec<_> = surface.vertex_positions();
    let e = surface.half_edge_ids().next().unwrap();

    let mid = ops::split_edge(&mut surface, e).unwrap();
    let kept = ops::merge_vertices_along_edge(&mut surface, e).unwrap();

    assert!(!surface.contains_vertex(mid));
    assert_eq!(kept, Some(surface[e].vert));
    assert_eq!(surface.vertex_positions(), positions_before);
    assert_eq!(surface.half_edge_count(), 24);
    assert!(surface.faces().all(|(f, _)| surface.face_side_count(f).unwrap() == 4));
    assert!(surface.validate());
}

#[test]
fn face_split_and_delete_round_trip() {
    let mut surface = cube(1.0);
    let face = surface.face_ids().next().unwrap();
    let e1 = surface[face].edge;
    let e2 = surface[surface[e1].next].next;

    let new_face = ops::split_face(&mut surface, e1, e2).unwrap();
    assert_eq!(surface.face_side_count(face).unwrap(), 3);
    assert_eq!(surface.face_side_count(new_face).unwrap(), 3);

    let diagonal = surface[face].edge;
    ops::delete_edge(&mut surface, diagonal).unwrap();

    assert_eq!(surface.face_count(), 6);
    assert_eq!(surface.face_side_count(face).unwrap(), 4);
    assert!(!surface.contains_face(new_face));
    assert!(surface.validate());
}

#[test]
fn extrude_a_cube_face() {
    let mut surface = cube(1.0);
    let top = surface.face_ids().last().unwrap();

    let sides = ops::extrude_face_along_normal(&mut surface, top, 2.0).unwrap();

    assert_eq!(sides.len(), 4);
    assert_eq!(surface.vertex_count(), 12);
    assert_eq!(surface.face_count(), 10);
    assert_eq!(euler(&surface), 2);
    for corner in surface.face_polygon(top).unwrap() {
        assert_relative_eq!(corner.z, 3.0, epsilon = 1e-12);
    }
    let bbox = surface.bounding_box();
    assert_eq!(bbox.max, Vec3::new(1.0, 1.0, 3.0));
    assert!(surface.validate());
}

#[test]
fn rejected_operators_leave_the_surface_unchanged() {
    let mut surface = cube(1.0);
    let faces: Vec<_> = surface.face_ids().collect();
    let e = surface[faces[0]].edge;
    let next = surface[e].next;
    let elsewhere = surface[faces[1]].edge;
    let before = snapshot(&surface);

    assert!(matches!(
        ops::split_face(&mut surface, e, next),
        Err(TopologyError::EdgeAlreadyExists { .. })
    ));
    assert!(matches!(
        ops::split_face(&mut surface, e, elsewhere),
        Err(TopologyError::DifferentFaces { .. })
    ));
    assert!(matches!(
        ops::split_face(&mut surface, e, e),
        Err(TopologyError::DegenerateEdge(_))
    ));
    assert!(matches!(
        ops::remove_two_sided_face(&mut surface, faces[2]),
        Err(TopologyError::NotTwoSided { sides: 4, .. })
    ));
    assert!(matches!(
        ops::merge_vertices_on_face(&mut surface, e, elsewhere),
        Err(TopologyError::DifferentFaces { .. })
    ));

    assert_eq!(snapshot(&surface), before);
}

#[test]
fn dead_handles_are_rejected_without_mutation() {
    let mut surface = cube(1.0);
    let mut scratch = cube(1.0);
    let e = scratch.half_edge_ids().next().unwrap();
    let mid = ops::split_edge(&mut scratch, e).unwrap();
    let foreign = scratch[mid].edge;
    let before = snapshot(&surface);

    assert!(ops::split_edge(&mut surface, foreign).is_err());
    assert!(ops::delete_edge(&mut surface, foreign).is_err());
    assert!(ops::add_face_vertex(&mut surface, foreign).is_err());

    assert_eq!(snapshot(&surface), before);
}

#[test]
fn tetrahedron_collapses_to_empty() {
    let mut surface = tetrahedron();

    let mut steps = 0;
    while let Some(e) = { let next = surface.half_edge_ids().next(); next } {
        let result = ops::merge_vertices_along_edge(&mut surface, e).unwrap();
        assert!(surface.validate(), "invalid after step {steps}");
        steps += 1;
        if result.is_none() {
            break;
        }
    }

    assert_eq!(steps, 2);
    assert!(surface.is_empty());
    assert!(surface.validate());
}

#[test]
fn sheet_session_through_commands() {
    let outline = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let mut surface = polygon_sheet(&outline).unwrap();
    let options = ExecuteOptions {
        validate_after: true,
    };
    let front = surface.face_ids().next().unwrap();

    let done = execute(&mut surface, Command::ExtrudeFace(front), &options).unwrap();
    assert!(matches!(done.outcome, Outcome::Extruded(ref sides) if sides.len() == 4));
    assert!(done.report.unwrap().is_valid());

    let e = surface[front].edge;
    let done = execute(&mut surface, Command::AddFaceVertex(e), &options).unwrap();
    let Outcome::Vertex(v) = done.outcome else {
        panic!("unexpected outcome {:?}", done.outcome);
    };
    assert_eq!(surface.vertex_degree(v).unwrap(), 1);
    assert!(done.report.unwrap().is_valid());

    let spur = surface[v].edge;
    let done = execute(&mut surface, Command::DeleteEdge(spur), &options).unwrap();
    assert_eq!(done.outcome, Outcome::Done);
    assert!(!surface.contains_vertex(v));
    assert_eq!(surface.vertex_count(), 8);
    assert!(done.report.unwrap().is_valid());
}
