//! Vertex merging (edge contraction).
//!
//! Contracting an edge pulls its destination onto its origin. Faces on
//! either side lose one corner; a triangle that drops to two sides is
//! collapsed, so repeated contraction shrinks a closed surface down to a
//! double-sided triangle and then to nothing.

use tracing::{debug, trace};

use crate::core::half_edge::{HalfEdgeId, VertexId};
use crate::error::{TopologyError, TopologyResult};
use crate::mesh::Surface;
use crate::ops::split_face::check as check_split;
use crate::ops::{check_wired, collapse_if_two_sided, rejected, split_face};

const OPERATION: &str = "merge_vertices_along_edge";
const ON_FACE: &str = "merge_vertices_on_face";

/// Contracts `edge`, keeping its origin and discarding its destination.
///
/// Every half-edge leaving the discarded vertex is moved onto the kept one,
/// `edge` and its twin are spliced out of their loops, and faces left with
/// two sides are collapsed.
///
/// Returns the kept vertex, or `None` when the contraction removed the last
/// face of its component and the whole component was deleted.
///
/// # Example
///
/// ```rust
/// use winged_mesh::{ops, tetrahedron};
///
/// let mut surface = tetrahedron();
/// let e = surface.half_edge_ids().next().unwrap();
/// let kept = ops::merge_vertices_along_edge(&mut surface, e).unwrap();
/// assert!(kept.is_some());
/// assert_eq!(surface.vertex_count(), 3);
/// assert_eq!(surface.face_count(), 2);
/// assert!(surface.validate());
/// ```
///
/// # Errors
///
/// - [`TopologyError::DegenerateEdge`] if both ends are already the same vertex
/// - [`TopologyError::IsolatedEdge`] if the edge and its twin form a loop of
///   their own
/// - [`TopologyError::WouldFoldEdge`] if another edge also joins the two ends
/// - a handle or loop error if the neighbourhood is not wired
pub fn merge_vertices_along_edge(
    surface: &mut Surface,
    edge: HalfEdgeId,
) -> TopologyResult<Option<VertexId>> {
    check_wired(surface, edge).map_err(|err| rejected(OPERATION, err))?;
    let twin = surface[edge].twin;
    check_wired(surface, twin).map_err(|err| rejected(OPERATION, err))?;

    let keep = surface[edge].vert;
    let old = surface[twin].vert;
    if keep == old {
        return Err(rejected(OPERATION, TopologyError::DegenerateEdge(keep)));
    }
    let spur_at_end = surface[edge].next == twin;
    let spur_at_start = surface[twin].next == edge;
    if spur_at_end && spur_at_start {
        return Err(rejected(OPERATION, TopologyError::IsolatedEdge(edge)));
    }
    let fan =
        foldable_fan(surface, keep, old, Some(twin)).map_err(|err| rejected(OPERATION, err))?;

    for e in fan {
        surface.set_origin(e, keep);
    }
    surface.delete_vertex(old);

    let (edge_face, twin_face) = (surface[edge].face, surface[twin].face);
    let (edge_prev, edge_next) = (surface[edge].prev, surface[edge].next);
    let (twin_prev, twin_next) = (surface[twin].prev, surface[twin].next);
    if spur_at_end {
        surface.anchor_vertex(keep, twin_next);
        surface.anchor_face(edge_face, edge_prev);
    } else {
        surface.anchor_vertex(keep, edge_next);
        surface.anchor_face(edge_face, edge_next);
    }
    surface.anchor_face(twin_face, if spur_at_start { twin_prev } else { twin_next });

    // Splice one side at a time; the second splice must see the first.
    surface.link_next(edge_prev, edge_next);
    let (twin_prev, twin_next) = (surface[twin].prev, surface[twin].next);
    surface.link_next(twin_prev, twin_next);

    collapse_if_two_sided(surface, edge_face);
    collapse_if_two_sided(surface, twin_face);
    surface.delete_edge(edge);
    surface.delete_edge(twin);

    if surface.contains_vertex(keep) {
        trace!(?edge, ?keep, "merged vertices");
        Ok(Some(keep))
    } else {
        debug!(?edge, "contraction removed the whole component");
        Ok(None)
    }
}

/// Merges the origins of two half-edges on the same face.
///
/// Equivalent to [`split_face`] between them followed by
/// [`merge_vertices_along_edge`] on the new edge; the origin of `e1` is kept.
///
/// Every precondition of both steps is checked before the face is split.
///
/// # Errors
///
/// - whatever [`split_face`] rejects
/// - [`TopologyError::WouldFoldEdge`] if the two vertices are already joined
///   by an edge of another face
pub fn merge_vertices_on_face(
    surface: &mut Surface,
    e1: HalfEdgeId,
    e2: HalfEdgeId,
) -> TopologyResult<Option<VertexId>> {
    check_split(surface, e1, e2).map_err(|err| rejected(ON_FACE, err))?;
    let (keep, old) = (surface[e1].vert, surface[e2].vert);
    foldable_fan(surface, keep, old, None).map_err(|err| rejected(ON_FACE, err))?;

    let new_face = split_face(surface, e1, e2)?;
    // The new face is anchored on the half-edge from `e2`'s origin to `e1`'s.
    let bridge = surface[surface[new_face].edge].twin;
    merge_vertices_along_edge(surface, bridge)
}

/// Outgoing fan of `old`, provided no half-edge in it other than `skip`
/// ends at `keep`.
fn foldable_fan(
    surface: &Surface,
    keep: VertexId,
    old: VertexId,
    skip: Option<HalfEdgeId>,
) -> TopologyResult<Vec<HalfEdgeId>> {
    let fan = surface.checked_vertex_fan(old)?;
    for &edge in &fan {
        if Some(edge) != skip && surface.destination(edge)? == keep {
            return Err(TopologyError::WouldFoldEdge {
                keep,
                discard: old,
                edge,
            });
        }
    }
    Ok(fan)
}

#[cfg(test)]
mod tests;
