//! # Commands
//!
//! A host-facing way to run one editing operator per user action. The host
//! keeps its own selection state, turns a key press into a [`Command`] and
//! hands it to [`execute`], optionally checking the surface afterwards.
//!
//! ## Example
//!
//! ```rust
//! use winged_mesh::command::{execute, Command, ExecuteOptions, Outcome};
//! use winged_mesh::cube;
//!
//! let mut surface = cube(1.0);
//! let edge = surface.half_edge_ids().next().unwrap();
//! let options = ExecuteOptions { validate_after: true };
//!
//! let done = execute(&mut surface, Command::SplitEdge(edge), &options).unwrap();
//! assert!(matches!(done.outcome, Outcome::Vertex(_)));
//! assert!(done.report.unwrap().is_valid());
//! ```

use tracing::debug;

use crate::core::half_edge::{FaceId, HalfEdgeId, VertexId};
use crate::error::TopologyResult;
use crate::mesh::Surface;
use crate::ops;
use crate::validate::{ValidationReport, Validator};

/// One editing operator with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// [`ops::split_edge`].
    SplitEdge(HalfEdgeId),
    /// [`ops::split_face`].
    SplitFace(HalfEdgeId, HalfEdgeId),
    /// [`ops::add_face_vertex`].
    AddFaceVertex(HalfEdgeId),
    /// [`ops::delete_edge`].
    DeleteEdge(HalfEdgeId),
    /// [`ops::merge_vertices_along_edge`].
    MergeVerticesAlongEdge(HalfEdgeId),
    /// [`ops::merge_vertices_on_face`].
    MergeVerticesOnFace(HalfEdgeId, HalfEdgeId),
    /// [`ops::extrude_face`].
    ExtrudeFace(FaceId),
    /// [`ops::remove_two_sided_face`].
    RemoveTwoSidedFace(FaceId),
}

impl Command {
    /// Name of the operator this command runs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SplitEdge(_) => "split_edge",
            Command::SplitFace(..) => "split_face",
            Command::AddFaceVertex(_) => "add_face_vertex",
            Command::DeleteEdge(_) => "delete_edge",
            Command::MergeVerticesAlongEdge(_) => "merge_vertices_along_edge",
            Command::MergeVerticesOnFace(..) => "merge_vertices_on_face",
            Command::ExtrudeFace(_) => "extrude_face",
            Command::RemoveTwoSidedFace(_) => "remove_two_sided_face",
        }
    }
}

/// What an accepted command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new vertex (split edge, add face vertex).
    Vertex(VertexId),
    /// A new face (split face).
    Face(FaceId),
    /// The kept vertex of a merge, or `None` if the component collapsed.
    Merged(Option<VertexId>),
    /// The new side faces of an extrusion.
    Extruded(Vec<FaceId>),
    /// Nothing new (delete edge, remove two-sided face).
    Done,
}

/// Options for [`execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Run the validator after an accepted command.
    pub validate_after: bool,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            validate_after: cfg!(debug_assertions),
        }
    }
}

/// Result of an accepted command.
#[derive(Debug, Clone, PartialEq)]
pub struct Executed {
    /// What the operator produced.
    pub outcome: Outcome,
    /// The validation report, when requested.
    pub report: Option<ValidationReport>,
}

/// Runs `command` against `surface`.
///
/// # Errors
///
/// Whatever the operator rejects; the surface is then unchanged and no
/// validation runs.
pub fn execute(
    surface: &mut Surface,
    command: Command,
    options: &ExecuteOptions,
) -> TopologyResult<Executed> {
    debug!(command = command.name(), "executing");
    let outcome = match command {
        Command::SplitEdge(e) => Outcome::Vertex(ops::split_edge(surface, e)?),
        Command::SplitFace(e1, e2) => Outcome::Face(ops::split_face(surface, e1, e2)?),
        Command::AddFaceVertex(e) => Outcome::Vertex(ops::add_face_vertex(surface, e)?),
        Command::DeleteEdge(e) => {
            ops::delete_edge(surface, e)?;
            Outcome::Done
        }
        Command::MergeVerticesAlongEdge(e) => {
            Outcome::Merged(ops::merge_vertices_along_edge(surface, e)?)
        }
        Command::MergeVerticesOnFace(e1, e2) => {
            Outcome::Merged(ops::merge_vertices_on_face(surface, e1, e2)?)
        }
        Command::ExtrudeFace(f) => Outcome::Extruded(ops::extrude_face(surface, f)?),
        Command::RemoveTwoSidedFace(f) => {
            ops::remove_two_sided_face(surface, f)?;
            Outcome::Done
        }
    };

    let report = options
        .validate_after
        .then(|| Validator::new(*surface.config()).check(surface));
    Ok(Executed { outcome, report })
}
