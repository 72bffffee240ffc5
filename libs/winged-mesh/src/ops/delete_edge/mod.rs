//! Edge deletion.
//!
//! Removing an edge either merges the two faces on its sides or, when both
//! sides belong to the same face, retracts a spur. Removing any other edge
//! whose sides share a face would split that boundary into two loops, which
//! faces cannot represent, so it is refused.

use tracing::{debug, trace};

use crate::core::half_edge::HalfEdgeId;
use crate::error::{TopologyError, TopologyResult};
use crate::mesh::Surface;
use crate::ops::{check_wired, collapse_if_two_sided, rejected};

const OPERATION: &str = "delete_edge";

/// Deletes `edge` and its twin.
///
/// - Different faces on each side: the face of `edge` survives and takes over
///   every half-edge of the other face.
/// - A spur: the dangling endpoint vertex is deleted as well.
///
/// Vertex and face anchors that pointed at the removed half-edges are moved
/// to surviving ones, and a face left with only two sides is collapsed.
///
/// # Errors
///
/// [`TopologyError::WouldCreateHole`] when both sides belong to one face and
/// `edge` is neither directly followed nor preceded by its twin.
pub fn delete_edge(surface: &mut Surface, edge: HalfEdgeId) -> TopologyResult<()> {
    check_wired(surface, edge).map_err(|err| rejected(OPERATION, err))?;
    let twin = surface[edge].twin;
    check_wired(surface, twin).map_err(|err| rejected(OPERATION, err))?;

    let keep_face = surface[edge].face;
    let old_face = surface[twin].face;
    let spur_at_end = surface[edge].next == twin;
    let spur_at_start = surface[twin].next == edge;

    if keep_face == old_face {
        if !spur_at_end && !spur_at_start {
            return Err(rejected(OPERATION, TopologyError::WouldCreateHole(edge)));
        }
        if spur_at_end && spur_at_start {
            debug!(?edge, "deleting isolated edge component");
            let (start, end) = (surface[edge].vert, surface[twin].vert);
            surface.delete_edge(edge);
            surface.delete_edge(twin);
            surface.delete_face(keep_face);
            surface.delete_vertex(start);
            surface.delete_vertex(end);
            return Ok(());
        }
    } else {
        let moved = surface
            .checked_face_loop(old_face)
            .map_err(|err| rejected(OPERATION, err))?;
        debug!(?keep_face, ?old_face, "merging faces");
        for e in moved {
            surface.set_face(e, keep_face);
        }
        surface.delete_face(old_face);
    }

    let (start, end) = (surface[edge].vert, surface[twin].vert);
    let (edge_prev, edge_next) = (surface[edge].prev, surface[edge].next);
    let (twin_prev, twin_next) = (surface[twin].prev, surface[twin].next);

    if spur_at_end {
        surface.delete_vertex(end);
        surface.anchor_face(keep_face, edge_prev);
    } else {
        surface.anchor_vertex(end, edge_next);
        surface.anchor_face(keep_face, edge_next);
    }
    if spur_at_start {
        surface.delete_vertex(start);
    } else {
        surface.anchor_vertex(start, twin_next);
    }

    surface.link_next(edge_prev, twin_next);
    surface.link_next(twin_prev, edge_next);
    surface.delete_edge(edge);
    surface.delete_edge(twin);

    collapse_if_two_sided(surface, keep_face);
    trace!(?edge, "deleted edge");
    Ok(())
}
