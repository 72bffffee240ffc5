//! Face extrusion.
//!
//! Extrusion lifts a face off the surface: the face itself becomes the top
//! cap and a ring of quads joins it to the original boundary.
//!
//! ```text
//!        top[i]                      top loop keeps the face
//!   T[i] -----> T[i+1]
//!    |           ^                   each side quad:
//!  join[i]       | join[i+1]           top_twin[i] -> join[i] -> base[i]
//!    v           |                     -> join_twin[i+1]
//!   B[i] -----> B[i+1]
//!        base[i]
//! ```
//!
//! New vertices start at the positions of the base corners they were copied
//! from; [`extrude_face_along_normal`] also moves them.

use tracing::trace;

use crate::core::half_edge::{FaceId, HalfEdgeId};
use crate::error::TopologyResult;
use crate::mesh::Surface;
use crate::ops::{check_wired, rejected};

const OPERATION: &str = "extrude_face";

/// Extrudes `face`, returning the new side faces in boundary order.
///
/// For an n-sided face this adds n vertices, n side faces and 4n half-edges.
/// `face` keeps its side count and orientation and becomes the top face.
///
/// # Example
///
/// ```rust
/// use winged_mesh::{cube, ops};
///
/// let mut surface = cube(1.0);
/// let top = surface.face_ids().next().unwrap();
/// let sides = ops::extrude_face(&mut surface, top).unwrap();
/// assert_eq!(sides.len(), 4);
/// assert_eq!(surface.face_count(), 10);
/// assert!(surface.validate());
/// ```
///
/// # Errors
///
/// A handle or loop error when the face boundary is not fully wired.
pub fn extrude_face(surface: &mut Surface, face: FaceId) -> TopologyResult<Vec<FaceId>> {
    let base = surface
        .checked_face_loop(face)
        .map_err(|err| rejected(OPERATION, err))?;
    for &edge in &base {
        check_wired(surface, edge).map_err(|err| rejected(OPERATION, err))?;
    }

    // Pass one: per base edge a top edge, a join edge, a copied corner and a
    // side face whose loop is still open.
    let mut tops: Vec<HalfEdgeId> = Vec::with_capacity(base.len());
    let mut sides = Vec::with_capacity(base.len());
    for &base_edge in &base {
        let top = surface.new_edge();
        let top_twin = surface.new_edge();
        surface.link_twins(top, top_twin);
        let join = surface.new_edge();
        let join_twin = surface.new_edge();
        surface.link_twins(join, join_twin);

        surface.link_next(top_twin, join);
        surface.link_next(join, base_edge);
        if let Some(&top_prev) = tops.last() {
            surface.link_next(top_prev, top);
        }

        let corner = surface[base_edge].vert;
        let vertex = surface.new_vertex(surface[corner].position);
        surface.anchor_vertex(vertex, join);
        surface.set_origin(join, vertex);
        surface.set_origin(top, vertex);
        surface.set_origin(join_twin, corner);

        let side = surface.new_face();
        surface.anchor_face(side, join);
        surface.set_face(join, side);
        surface.set_face(top_twin, side);
        surface.set_face(base_edge, side);
        surface.set_face(top, face);

        tops.push(top);
        sides.push(side);
    }
    if let (Some(&first), Some(&last)) = (tops.first(), tops.last()) {
        surface.link_next(last, first);
        surface.anchor_face(face, first);
    }

    // Pass two: close each side loop through the neighbouring join edge and
    // point each top twin at the following top vertex.
    for &top in &tops {
        let top_twin = surface[top].twin;
        let next_top = surface[top].next;
        let next_join = surface[surface[next_top].twin].next;
        let next_join_twin = surface[next_join].twin;
        surface.link_next(next_join_twin, top_twin);

        let base_edge = surface[surface[top_twin].next].next;
        surface.link_next(base_edge, next_join_twin);

        let side = surface[top_twin].face;
        surface.set_face(next_join_twin, side);
        let next_vertex = surface[next_top].vert;
        surface.set_origin(top_twin, next_vertex);
    }

    trace!(?face, sides = sides.len(), "extruded face");
    Ok(sides)
}

/// Extrudes `face` and moves the new top by `distance` along the face normal.
///
/// # Errors
///
/// The same as [`extrude_face`].
pub fn extrude_face_along_normal(
    surface: &mut Surface,
    face: FaceId,
    distance: f64,
) -> TopologyResult<Vec<FaceId>> {
    let normal = surface
        .normal(face)
        .map_err(|err| rejected(OPERATION, err))?;
    let sides = extrude_face(surface, face)?;
    let top = surface.face_vertices(face)?;
    surface.translate_vertices(&top, normal * distance)?;
    Ok(sides)
}
