//! Removal of degenerate two-sided faces.
//!
//! A face bounded by just two half-edges `a -> b -> a` has no area. It is
//! removed by twinning the half-edges on the far side of each boundary edge
//! directly with each other.

use tracing::debug;

use crate::core::half_edge::{FaceId, HalfEdgeId};
use crate::error::{TopologyError, TopologyResult};
use crate::mesh::Surface;
use crate::ops::{check_wired, rejected};

const OPERATION: &str = "remove_two_sided_face";

/// Collapses a face with exactly two boundary half-edges.
///
/// The partners across both sides become each other's twins. When the two
/// boundary half-edges are already each other's twins the face is an isolated
/// component and its vertices are deleted with it.
///
/// # Errors
///
/// [`TopologyError::NotTwoSided`] when the face has any other number of
/// sides, or a handle error when the face or its boundary is not wired.
pub fn remove_two_sided_face(surface: &mut Surface, face: FaceId) -> TopologyResult<()> {
    let boundary = surface
        .checked_face_loop(face)
        .map_err(|err| rejected(OPERATION, err))?;
    if boundary.len() != 2 {
        return Err(rejected(
            OPERATION,
            TopologyError::NotTwoSided {
                face,
                sides: boundary.len(),
            },
        ));
    }
    for &edge in &boundary {
        check_wired(surface, edge).map_err(|err| rejected(OPERATION, err))?;
    }

    collapse(surface, face, boundary[0], boundary[1]);
    Ok(())
}

/// Collapses an already checked two-sided face bounded by `first -> second`.
pub(crate) fn collapse(surface: &mut Surface, face: FaceId, first: HalfEdgeId, second: HalfEdgeId) {
    let first_twin = surface[first].twin;
    let second_twin = surface[second].twin;
    let first_vert = surface[first].vert;
    let second_vert = surface[second].vert;

    if first_twin == second {
        debug!(?face, "removing isolated two-sided face with its vertices");
        surface.delete_edge(first);
        surface.delete_edge(second);
        surface.delete_face(face);
        surface.delete_vertex(first_vert);
        surface.delete_vertex(second_vert);
        return;
    }

    debug!(?face, "removing two-sided face");
    // `second_twin` leaves `first_vert` and `first_twin` leaves `second_vert`.
    surface.anchor_vertex(first_vert, second_twin);
    surface.anchor_vertex(second_vert, first_twin);
    surface.link_twins(first_twin, second_twin);

    surface.delete_edge(first);
    surface.delete_edge(second);
    surface.delete_face(face);
}
