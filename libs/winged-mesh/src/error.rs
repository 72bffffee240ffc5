//! # Error Types
//!
//! Error types for surface construction and editing. Every error is a
//! rejected precondition: an operator that returns one has not touched the
//! surface.
//!
//! ## Error Policy
//!
//! - Preconditions are checked before the first mutation
//! - No rollback paths exist, because nothing is committed before the checks pass
//! - Errors carry the handles or indices needed for debugging

use crate::core::half_edge::{FaceId, HalfEdgeId, VertexId};
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors reported by the kernel's construction and editing entry points.
///
/// ## Example
///
/// ```rust
/// use winged_mesh::{cube, ops, TopologyError};
///
/// let mut surface = cube(1.0);
/// let e = surface.half_edge_ids().next().unwrap();
/// let next = surface[e].next;
///
/// match ops::split_face(&mut surface, e, next) {
///     Err(TopologyError::EdgeAlreadyExists { .. }) => {}
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TopologyError {
    /// The vertex handle does not refer to a live vertex.
    #[error("Invalid vertex reference: {0:?}")]
    InvalidVertex(VertexId),

    /// The face handle does not refer to a live face.
    #[error("Invalid face reference: {0:?}")]
    InvalidFace(FaceId),

    /// The half-edge handle does not refer to a live half-edge.
    #[error("Invalid half-edge reference: {0:?}")]
    InvalidHalfEdge(HalfEdgeId),

    /// A live half-edge links to an entity that no longer exists.
    #[error("Half-edge {edge:?} has a dangling {link} reference")]
    DanglingReference {
        /// The half-edge holding the reference.
        edge: HalfEdgeId,
        /// Name of the field (`twin`, `next`, `prev`, `vert` or `face`).
        link: &'static str,
    },

    /// A boundary loop or vertex fan does not return to its start.
    #[error("Walk starting at {start:?} does not close")]
    UnclosedLoop {
        /// Half-edge the walk started from.
        start: HalfEdgeId,
    },

    /// Two half-edges were expected to bound the same face.
    #[error("Edges must share a common face ({first:?} is on {first_face:?}, {second:?} is on {second_face:?})")]
    DifferentFaces {
        /// First half-edge.
        first: HalfEdgeId,
        /// Face of the first half-edge.
        first_face: FaceId,
        /// Second half-edge.
        second: HalfEdgeId,
        /// Face of the second half-edge.
        second_face: FaceId,
    },

    /// An edge between the two vertices already lies on the face boundary.
    #[error("Edge already exists between vertices {from:?} and {to:?}")]
    EdgeAlreadyExists {
        /// Start of the requested edge.
        from: VertexId,
        /// End of the requested edge.
        to: VertexId,
    },

    /// The requested edge would start and end at the same vertex.
    #[error("Edge would connect vertex {0:?} to itself")]
    DegenerateEdge(VertexId),

    /// Removing the edge would split a face boundary into two loops.
    #[error("Deleting edge {0:?} would create a hole in the face")]
    WouldCreateHole(HalfEdgeId),

    /// The face is not a two-sided degenerate face.
    #[error("Face {face:?} has {sides} sides, expected 2")]
    NotTwoSided {
        /// The face.
        face: FaceId,
        /// Number of boundary half-edges found.
        sides: usize,
    },

    /// The edge and its twin form a loop of their own with nothing attached.
    #[error("Edge {0:?} is isolated and cannot be contracted")]
    IsolatedEdge(HalfEdgeId),

    /// Another edge already joins the two vertices being merged and would
    /// become a loop at a single vertex.
    #[error("Merging {discard:?} into {keep:?} would fold edge {edge:?} into a loop")]
    WouldFoldEdge {
        /// The vertex that survives the merge.
        keep: VertexId,
        /// The vertex that would be removed.
        discard: VertexId,
        /// A half-edge from `discard` to `keep` other than the one contracted.
        edge: HalfEdgeId,
    },

    /// A face given to the builder has fewer than three corners.
    #[error("Face {face} has {sides} corners, at least 3 are required")]
    TooFewSides {
        /// Index of the face in the input.
        face: usize,
        /// Number of corners supplied.
        sides: usize,
    },

    /// A face given to the builder references a vertex that does not exist.
    #[error("Face {face} references invalid vertex index {index}")]
    InvalidVertexIndex {
        /// Index of the face in the input.
        face: usize,
        /// The out-of-range vertex index.
        index: usize,
    },

    /// A face given to the builder visits the same vertex twice.
    #[error("Face {face} visits vertex {index} more than once")]
    DegenerateFace {
        /// Index of the face in the input.
        face: usize,
        /// The repeated vertex index.
        index: usize,
    },

    /// The same directed edge appears in more than one face.
    #[error("Directed edge ({from}, {to}) is used by more than one face")]
    NonManifoldEdge {
        /// Start vertex index.
        from: usize,
        /// End vertex index.
        to: usize,
    },

    /// An edge has no opposite half-edge and boundaries are not being capped.
    #[error("Edge ({from}, {to}) has no opposite half-edge")]
    OpenBoundary {
        /// Start vertex index.
        from: usize,
        /// End vertex index.
        to: usize,
    },

    /// The edges around a vertex do not form a single fan, for example
    /// because it lies on two boundary loops or joins two closed shapes.
    #[error("Vertex {0} is not surrounded by a single fan of edges")]
    NonManifoldVertex(usize),

    /// A vertex given to the builder is not used by any face.
    #[error("Vertex {0} is not used by any face")]
    IsolatedVertex(usize),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for kernel operations.
pub type TopologyResult<T> = Result<T, TopologyError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = TopologyError::TooFewSides { face: 3, sides: 2 };
        assert_eq!(
            err.to_string(),
            "Face 3 has 2 corners, at least 3 are required"
        );

        let err = TopologyError::OpenBoundary { from: 1, to: 4 };
        assert!(err.to_string().contains("(1, 4)"));
    }

    /// Test error types are Send + Sync so hosts can move them across threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TopologyError>();
    }
}
