//! # Editing Operators
//!
//! Local topological edits on a [`Surface`]. Each operator lives in its own
//! submodule and follows the same contract:
//!
//! 1. every precondition is checked before the first mutation;
//! 2. a rejected call logs one `warn!` line naming the operator and returns
//!    the [`TopologyError`], leaving the surface untouched;
//! 3. an accepted call rewires only the neighbourhood of its arguments and
//!    leaves a surface that passes validation.
//!
//! Operators that can leave a two-sided face behind collapse it before they
//! return.

pub mod add_face_vertex;
pub mod delete_edge;
pub mod extrude;
pub mod merge_vertices;
pub mod remove_two_sided_face;
pub mod split_edge;
pub mod split_face;

pub use add_face_vertex::add_face_vertex;
pub use delete_edge::delete_edge;
pub use extrude::{extrude_face, extrude_face_along_normal};
pub use merge_vertices::{merge_vertices_along_edge, merge_vertices_on_face};
pub use remove_two_sided_face::remove_two_sided_face;
pub use split_edge::split_edge;
pub use split_face::split_face;

use tracing::warn;

use crate::core::half_edge::{FaceId, HalfEdgeId};
use crate::error::{TopologyError, TopologyResult};
use crate::mesh::traverse::{Around, Walk};
use crate::mesh::Surface;

/// Logs a rejected precondition and hands the error back for `?`.
pub(crate) fn rejected(operation: &'static str, err: TopologyError) -> TopologyError {
    warn!(operation, "{err}");
    err
}

/// Checks that `edge` and every handle it holds are live.
pub(crate) fn check_wired(surface: &Surface, edge: HalfEdgeId) -> TopologyResult<()> {
    let he = surface.half_edge(edge)?;
    let dangling = |link| TopologyError::DanglingReference { edge, link };
    if !surface.contains_half_edge(he.twin) {
        return Err(dangling("twin"));
    }
    if !surface.contains_half_edge(he.next) {
        return Err(dangling("next"));
    }
    if !surface.contains_half_edge(he.prev) {
        return Err(dangling("prev"));
    }
    if !surface.contains_vertex(he.vert) {
        return Err(dangling("vert"));
    }
    if !surface.contains_face(he.face) {
        return Err(dangling("face"));
    }
    Ok(())
}

/// Collapses `face` if it is still alive and has exactly two sides.
/// Returns whether it was collapsed.
pub(crate) fn collapse_if_two_sided(surface: &mut Surface, face: FaceId) -> bool {
    let Some(anchor) = surface.faces.get(face).map(|f| f.edge) else {
        return false;
    };
    match surface.walk(anchor, Around::Face) {
        Walk::Closed(edges) if edges.len() == 2 => {
            remove_two_sided_face::collapse(surface, face, edges[0], edges[1]);
            true
        }
        _ => false,
    }
}
