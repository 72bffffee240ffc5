//! Face subdivision by a new diagonal edge.

use tracing::trace;

use crate::core::half_edge::{FaceId, HalfEdgeId};
use crate::error::{TopologyError, TopologyResult};
use crate::mesh::Surface;
use crate::ops::{check_wired, rejected};

const OPERATION: &str = "split_face";

/// Divides the face shared by `e1` and `e2` with a new edge from the origin
/// of `e1` to the origin of `e2`.
///
/// The loop through `e2` keeps the original face, re-anchored on the new
/// half-edge leaving `e1`'s origin. The loop through `e1` becomes the new
/// face, which is returned.
///
/// ```text
///        e2 ->                         e2 ->
///   +-----------+                 +-----------+
///   |           |                 |  original |
///   |   face    |      ==>        +-----------+
///   |           |                 |    new    |
///   +-----------+                 +-----------+
///        <- e1                         <- e1
/// ```
///
/// # Errors
///
/// - [`TopologyError::DifferentFaces`] if the half-edges bound different faces
/// - [`TopologyError::DegenerateEdge`] if both start at the same vertex
/// - [`TopologyError::EdgeAlreadyExists`] if a boundary half-edge of the face
///   already joins the two vertices (this includes `e1.next == e2`)
pub fn split_face(surface: &mut Surface, e1: HalfEdgeId, e2: HalfEdgeId) -> TopologyResult<FaceId> {
    check(surface, e1, e2).map_err(|err| rejected(OPERATION, err))?;

    let face = surface[e1].face;
    let (v1, v2) = (surface[e1].vert, surface[e2].vert);
    let (e1_prev, e2_prev) = (surface[e1].prev, surface[e2].prev);

    let n1 = surface.new_edge();
    let n2 = surface.new_edge();
    surface.link_twins(n1, n2);
    surface.set_origin(n1, v1);
    surface.set_origin(n2, v2);

    surface.link_next(n1, e2);
    surface.link_next(n2, e1);
    surface.link_next(e1_prev, n1);
    surface.link_next(e2_prev, n2);

    surface.set_face(n1, face);
    surface.anchor_face(face, n1);

    let new_face = surface.new_face();
    surface.anchor_face(new_face, n2);
    let moved: Vec<_> = surface.loop_edges(n2).collect();
    for edge in moved {
        surface.set_face(edge, new_face);
    }

    trace!(?face, ?new_face, "split face");
    Ok(new_face)
}

/// Preconditions of [`split_face`], without logging.
pub(crate) fn check(surface: &Surface, e1: HalfEdgeId, e2: HalfEdgeId) -> TopologyResult<()> {
    check_wired(surface, e1)?;
    check_wired(surface, e2)?;

    let (first_face, second_face) = (surface[e1].face, surface[e2].face);
    if first_face != second_face {
        return Err(TopologyError::DifferentFaces {
            first: e1,
            first_face,
            second: e2,
            second_face,
        });
    }

    let (v1, v2) = (surface[e1].vert, surface[e2].vert);
    if v1 == v2 {
        return Err(TopologyError::DegenerateEdge(v1));
    }

    for edge in surface.checked_face_loop(first_face)? {
        let from = surface[edge].vert;
        let to = surface[surface[edge].next].vert;
        if (from == v1 && to == v2) || (from == v2 && to == v1) {
            return Err(TopologyError::EdgeAlreadyExists { from: v1, to: v2 });
        }
    }
    Ok(())
}
