//! Vertex insertion on a face boundary.
//!
//! The new vertex starts as a copy of the corner it grew from, joined to it
//! by a zero-length spur that lies entirely inside one face:
//!
//! ```text
//!   prev --> corner --edge-->        prev --> corner --edge-->
//!                                 ==>           |  ^
//!                                               v  |
//!                                               new
//! ```

use tracing::trace;

use crate::core::half_edge::{HalfEdgeId, VertexId};
use crate::error::TopologyResult;
use crate::mesh::Surface;
use crate::ops::{check_wired, rejected};

const OPERATION: &str = "add_face_vertex";

/// Adds a vertex at the origin of `edge`, connected to it by a spur edge
/// inserted just before `edge` on the same face.
///
/// The host typically moves the returned vertex afterwards.
///
/// # Errors
///
/// A handle error when `edge` is not fully wired.
pub fn add_face_vertex(surface: &mut Surface, edge: HalfEdgeId) -> TopologyResult<VertexId> {
    check_wired(surface, edge).map_err(|err| rejected(OPERATION, err))?;

    let corner = surface[edge].vert;
    let face = surface[edge].face;
    let prev = surface[edge].prev;

    let inward = surface.new_edge();
    let outward = surface.new_edge();
    surface.link_twins(inward, outward);

    surface.link_next(outward, inward);
    surface.link_next(prev, outward);
    surface.link_next(inward, edge);

    let vertex = surface.new_vertex(surface[corner].position);
    surface.anchor_vertex(vertex, inward);
    surface.set_origin(inward, vertex);
    surface.set_origin(outward, corner);
    surface.anchor_vertex(corner, outward);

    surface.set_face(inward, face);
    surface.set_face(outward, face);

    trace!(?edge, ?vertex, "added face vertex");
    Ok(vertex)
}
