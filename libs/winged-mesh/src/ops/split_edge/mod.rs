//! Edge subdivision.
//!
//! ```text
//!   before:   A ---------edge--------> B
//!             A <--------twin--------- B
//!
//!   after:    A --edge--> M --new----> B
//!             A <--twin-- M <--new---- B
//! ```

use tracing::trace;

use crate::core::half_edge::{HalfEdgeId, VertexId};
use crate::core::vec3::midpoint;
use crate::error::TopologyResult;
use crate::mesh::Surface;
use crate::ops::{check_wired, rejected};

const OPERATION: &str = "split_edge";

/// Inserts a vertex at the midpoint of `edge`.
///
/// `edge` and its twin keep their origins and now end at the new vertex; one
/// new half-edge per side carries on to the old destination. Both adjacent
/// loops grow by one and keep their faces. A spur edge (one directly followed
/// by its own twin) is handled as well.
///
/// # Example
///
/// ```rust
/// use winged_mesh::{cube, ops};
///
/// let mut surface = cube(1.0);
/// let e = surface.half_edge_ids().next().unwrap();
/// ops::split_edge(&mut surface, e).unwrap();
/// assert_eq!(surface.vertex_count(), 9);
/// assert_eq!(surface.half_edge_count(), 26);
/// ```
///
/// # Errors
///
/// A handle error when `edge` or its twin is not fully wired.
pub fn split_edge(surface: &mut Surface, edge: HalfEdgeId) -> TopologyResult<VertexId> {
    check_wired(surface, edge).map_err(|err| rejected(OPERATION, err))?;
    let twin = surface[edge].twin;
    check_wired(surface, twin).map_err(|err| rejected(OPERATION, err))?;

    let start = surface[edge].vert;
    let end = surface[twin].vert;
    let mid = midpoint(surface[start].position, surface[end].position);

    let new_edge = surface.new_edge();
    let new_twin = surface.new_edge();
    surface.link_twins(new_edge, new_twin);

    let (after, before) = if surface[edge].next == twin {
        (new_twin, new_edge)
    } else {
        (surface[edge].next, surface[twin].prev)
    };
    surface.link_next(new_edge, after);
    surface.link_next(before, new_twin);
    surface.link_next(edge, new_edge);
    surface.link_next(new_twin, twin);

    let vertex = surface.new_vertex(mid);
    surface.anchor_vertex(vertex, new_edge);
    surface.set_origin(new_edge, vertex);
    surface.set_origin(new_twin, end);
    surface.anchor_vertex(end, new_twin);
    surface.set_origin(twin, vertex);

    let (edge_face, twin_face) = (surface[edge].face, surface[twin].face);
    surface.set_face(new_edge, edge_face);
    surface.set_face(new_twin, twin_face);

    trace!(?edge, ?vertex, "split edge");
    Ok(vertex)
}

#[cfg(test)]
mod tests;
