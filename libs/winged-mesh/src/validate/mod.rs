//! # Validator
//!
//! Consistency checker for a [`Surface`]. It walks all three arenas once,
//! collects every structural violation it finds and never repairs or panics,
//! however broken the graph is.
//!
//! Findings are data ([`Violation`]), not errors: a host may log them, assert
//! on them in tests, or ignore them in release builds.
//!
//! ## Checks
//!
//! | Entity    | Check |
//! |-----------|-------|
//! | vertex    | live anchor, fan closes, fan edges start at the vertex, finite position |
//! | face      | live anchor, loop closes, loop edges belong to the face, more than two sides |
//! | half-edge | live links, twin symmetry, `next`/`prev` symmetry, reachable from its face and vertex, distinct endpoints |
//!
//! A vertex with a very large coordinate is only reported through
//! [`ValidationReport::suspicious_vertices`] and a warning; it is not a
//! violation.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, warn};

use crate::config::KernelConfig;
use crate::core::half_edge::{FaceId, HalfEdgeId, VertexId};
use crate::core::vec3::Vec3;
use crate::mesh::traverse::{Around, Walk};
use crate::mesh::Surface;

// =============================================================================
// VIOLATIONS
// =============================================================================

/// One broken invariant found by the [`Validator`].
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The vertex's anchor half-edge is dead.
    VertexAnchorDangling {
        /// The vertex.
        vertex: VertexId,
    },
    /// A half-edge in the vertex's fan starts at another vertex.
    FanEdgeHasOtherOrigin {
        /// The vertex whose fan was walked.
        vertex: VertexId,
        /// The offending half-edge.
        edge: HalfEdgeId,
    },
    /// The vertex's fan reaches a dead half-edge.
    FanDangling {
        /// The vertex whose fan was walked.
        vertex: VertexId,
        /// The half-edge holding the dead link.
        edge: HalfEdgeId,
    },
    /// The vertex's fan does not return to its anchor.
    FanUnclosed {
        /// The vertex whose fan was walked.
        vertex: VertexId,
    },
    /// The vertex position has a NaN or infinite coordinate.
    NonFinitePosition {
        /// The vertex.
        vertex: VertexId,
        /// Its position.
        position: Vec3,
    },
    /// The face's anchor half-edge is dead.
    FaceAnchorDangling {
        /// The face.
        face: FaceId,
    },
    /// A half-edge on the face's loop is owned by another face.
    LoopEdgeHasOtherFace {
        /// The face whose loop was walked.
        face: FaceId,
        /// The offending half-edge.
        edge: HalfEdgeId,
    },
    /// The face's loop reaches a dead half-edge.
    LoopDangling {
        /// The face whose loop was walked.
        face: FaceId,
        /// The half-edge holding the dead link.
        edge: HalfEdgeId,
    },
    /// The face's loop does not return to its anchor.
    LoopUnclosed {
        /// The face whose loop was walked.
        face: FaceId,
    },
    /// The face has only two sides.
    TwoSidedFace {
        /// The face.
        face: FaceId,
    },
    /// A half-edge field refers to a dead entity.
    DanglingLink {
        /// The half-edge.
        edge: HalfEdgeId,
        /// Name of the field.
        link: &'static str,
    },
    /// The half-edge is its own twin.
    SelfTwin {
        /// The half-edge.
        edge: HalfEdgeId,
    },
    /// The twin's twin is not the half-edge.
    AsymmetricTwin {
        /// The half-edge.
        edge: HalfEdgeId,
    },
    /// `next` or `prev` is the half-edge itself.
    SelfLink {
        /// The half-edge.
        edge: HalfEdgeId,
        /// `next` or `prev`.
        link: &'static str,
    },
    /// `next.prev` or `prev.next` is not the half-edge.
    AsymmetricLink {
        /// The half-edge.
        edge: HalfEdgeId,
        /// `next` or `prev`.
        link: &'static str,
    },
    /// The half-edge is not on the loop of the face it names.
    UnreachableFromFace {
        /// The half-edge.
        edge: HalfEdgeId,
    },
    /// The half-edge is not in the fan of the vertex it names.
    UnreachableFromVertex {
        /// The half-edge.
        edge: HalfEdgeId,
    },
    /// The half-edge and its twin start at the same vertex.
    SingleVertexEdge {
        /// The half-edge.
        edge: HalfEdgeId,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::VertexAnchorDangling { vertex } => {
                write!(f, "vertex {vertex:?} has an invalid edge reference")
            }
            Violation::FanEdgeHasOtherOrigin { vertex, edge } => {
                write!(f, "edge {edge:?} in the fan of vertex {vertex:?} starts elsewhere")
            }
            Violation::FanDangling { vertex, edge } => write!(
                f,
                "fan of vertex {vertex:?} reaches a dead link at edge {edge:?}"
            ),
            Violation::FanUnclosed { vertex } => {
                write!(f, "fan of vertex {vertex:?} does not close")
            }
            Violation::NonFinitePosition { vertex, position } => {
                write!(f, "vertex {vertex:?} has a non-finite position {position}")
            }
            Violation::FaceAnchorDangling { face } => {
                write!(f, "face {face:?} has an invalid edge reference")
            }
            Violation::LoopEdgeHasOtherFace { face, edge } => {
                write!(f, "edge {edge:?} on the loop of face {face:?} names another face")
            }
            Violation::LoopDangling { face, edge } => write!(
                f,
                "loop of face {face:?} reaches a dead link at edge {edge:?}"
            ),
            Violation::LoopUnclosed { face } => write!(f, "loop of face {face:?} does not close"),
            Violation::TwoSidedFace { face } => write!(f, "face {face:?} only has two edges"),
            Violation::DanglingLink { edge, link } => {
                write!(f, "edge {edge:?} has an invalid {link} reference")
            }
            Violation::SelfTwin { edge } => write!(f, "edge {edge:?} is its own twin"),
            Violation::AsymmetricTwin { edge } => {
                write!(f, "edge {edge:?} and its twin are not twins of each other")
            }
            Violation::SelfLink { edge, link } => {
                write!(f, "edge {edge:?} has itself as {link}")
            }
            Violation::AsymmetricLink { edge, link } => {
                write!(f, "edge {edge:?} is not linked back from its {link}")
            }
            Violation::UnreachableFromFace { edge } => {
                write!(f, "edge {edge:?} cannot be reached from its face")
            }
            Violation::UnreachableFromVertex { edge } => {
                write!(f, "edge {edge:?} cannot be reached from its vertex")
            }
            Violation::SingleVertexEdge { edge } => {
                write!(f, "edge {edge:?} starts and ends at the same vertex")
            }
        }
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// Everything one validation pass found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
    suspicious: Vec<VertexId>,
}

impl ValidationReport {
    /// True when no violation was found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations, grouped by vertices, faces, then half-edges.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Vertices with a coordinate above the configured threshold.
    pub fn suspicious_vertices(&self) -> &[VertexId] {
        &self.suspicious
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "surface is valid");
        }
        writeln!(f, "surface is not valid ({} violations)", self.violations.len())?;
        for violation in &self.violations {
            writeln!(f, "  - {violation}")?;
        }
        Ok(())
    }
}

// =============================================================================
// VALIDATOR
// =============================================================================

/// Checks every structural invariant of a surface.
///
/// # Example
///
/// ```rust
/// use winged_mesh::{cube, KernelConfig, Validator};
///
/// let surface = cube(1.0);
/// let report = Validator::new(KernelConfig::default()).check(&surface);
/// assert!(report.is_valid(), "{report}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: KernelConfig,
}

impl Validator {
    /// Creates a validator using `config` for walk limits and thresholds.
    pub fn new(config: KernelConfig) -> Self {
        Self { config }
    }

    /// Validates `surface`, logging each violation.
    pub fn check(&self, surface: &Surface) -> ValidationReport {
        let mut report = ValidationReport::default();
        let limit = self.config.max_loop_iterations;

        // (half-edge, owner) pairs actually reached by fan and loop walks.
        let mut in_fan: HashSet<(HalfEdgeId, VertexId)> = HashSet::new();
        let mut on_loop: HashSet<(HalfEdgeId, FaceId)> = HashSet::new();

        for (vertex, v) in surface.vertices() {
            match surface.walk_within(v.edge, Around::Vertex, limit) {
                Walk::Closed(fan) => {
                    for edge in fan {
                        if surface[edge].vert != vertex {
                            report
                                .violations
                                .push(Violation::FanEdgeHasOtherOrigin { vertex, edge });
                        }
                        in_fan.insert((edge, vertex));
                    }
                }
                Walk::DeadStart => report
                    .violations
                    .push(Violation::VertexAnchorDangling { vertex }),
                Walk::Dangling { edge, .. } => {
                    report.violations.push(Violation::FanDangling { vertex, edge })
                }
                Walk::Unclosed => report.violations.push(Violation::FanUnclosed { vertex }),
            }

            let position = v.position;
            if !position.is_finite() {
                report
                    .violations
                    .push(Violation::NonFinitePosition { vertex, position });
            } else if position.abs().max_element() > self.config.large_coordinate_threshold {
                warn!(?vertex, %position, "vertex has a very large coordinate, may be uninitialized");
                report.suspicious.push(vertex);
            }
        }

        for (face, f) in surface.faces() {
            match surface.walk_within(f.edge, Around::Face, limit) {
                Walk::Closed(boundary) => {
                    if boundary.len() == 2 {
                        report.violations.push(Violation::TwoSidedFace { face });
                    }
                    for edge in boundary {
                        if surface[edge].face != face {
                            report
                                .violations
                                .push(Violation::LoopEdgeHasOtherFace { face, edge });
                        }
                        on_loop.insert((edge, face));
                    }
                }
                Walk::DeadStart => report.violations.push(Violation::FaceAnchorDangling { face }),
                Walk::Dangling { edge, .. } => {
                    report.violations.push(Violation::LoopDangling { face, edge })
                }
                Walk::Unclosed => report.violations.push(Violation::LoopUnclosed { face }),
            }
        }

        for (edge, he) in surface.half_edges() {
            Self::check_half_edge(surface, edge, &mut report.violations);
            if surface.contains_face(he.face) && !on_loop.contains(&(edge, he.face)) {
                report.violations.push(Violation::UnreachableFromFace { edge });
            }
            if surface.contains_vertex(he.vert) && !in_fan.contains(&(edge, he.vert)) {
                report.violations.push(Violation::UnreachableFromVertex { edge });
            }
        }

        for violation in &report.violations {
            warn!(%violation, "surface violation");
        }
        if report.is_valid() {
            debug!(
                vertices = surface.vertex_count(),
                faces = surface.face_count(),
                half_edges = surface.half_edge_count(),
                "surface is valid"
            );
        } else {
            warn!(count = report.violations.len(), "surface is not valid");
        }
        report
    }

    fn check_half_edge(surface: &Surface, edge: HalfEdgeId, out: &mut Vec<Violation>) {
        let he = &surface[edge];

        match surface.edges.get(he.twin) {
            None => out.push(Violation::DanglingLink { edge, link: "twin" }),
            Some(_) if he.twin == edge => out.push(Violation::SelfTwin { edge }),
            Some(twin) => {
                if twin.twin != edge {
                    out.push(Violation::AsymmetricTwin { edge });
                }
                if surface.contains_vertex(he.vert) && twin.vert == he.vert {
                    out.push(Violation::SingleVertexEdge { edge });
                }
            }
        }

        match surface.edges.get(he.next) {
            None => out.push(Violation::DanglingLink { edge, link: "next" }),
            Some(_) if he.next == edge => out.push(Violation::SelfLink { edge, link: "next" }),
            Some(next) if next.prev != edge => {
                out.push(Violation::AsymmetricLink { edge, link: "next" })
            }
            Some(_) => {}
        }

        match surface.edges.get(he.prev) {
            None => out.push(Violation::DanglingLink { edge, link: "prev" }),
            Some(_) if he.prev == edge => out.push(Violation::SelfLink { edge, link: "prev" }),
            Some(prev) if prev.next != edge => {
                out.push(Violation::AsymmetricLink { edge, link: "prev" })
            }
            Some(_) => {}
        }

        if !surface.contains_face(he.face) {
            out.push(Violation::DanglingLink { edge, link: "face" });
        }
        if !surface.contains_vertex(he.vert) {
            out.push(Violation::DanglingLink { edge, link: "vert" });
        }
    }
}

impl Surface {
    /// Runs the [`Validator`] with this surface's configuration.
    pub fn validate(&self) -> bool {
        Validator::new(*self.config()).check(self).is_valid()
    }

    /// Runs the [`Validator`] and returns the full report.
    pub fn validation_report(&self) -> ValidationReport {
        Validator::new(*self.config()).check(self)
    }
}
