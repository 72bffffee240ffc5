//! # Winged Mesh
//!
//! Half-edge boundary-representation kernel for interactive polygon
//! modelling. A [`Surface`] stores vertices, faces and half-edges in arenas
//! and a small set of local Euler-style operators edit it in place.
//!
//! ## Architecture
//!
//! ```text
//! primitives (build) → Surface ⇄ ops (edit) → query (render)
//!                         ↓
//!                      validate
//! ```
//!
//! - **mesh**: the owning store plus loop and fan iterators
//! - **topology**: primary edges, face normals, edge navigation
//! - **ops**: split/merge/extrude operators; a rejected operator leaves the
//!   surface untouched
//! - **validate**: full structural check, findings returned as data
//! - **query** and **command**: the host-facing read and edit surfaces
//!
//! ## Usage
//!
//! ```rust
//! use winged_mesh::{cube, ops};
//!
//! let mut surface = cube(1.0);
//! let face = surface.face_ids().next().unwrap();
//!
//! ops::extrude_face_along_normal(&mut surface, face, 0.5).unwrap();
//! assert_eq!(surface.face_count(), 10);
//! assert!(surface.validate());
//! ```

pub mod command;
pub mod config;
pub mod core;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod query;
pub mod topology;
pub mod validate;

pub use crate::config::KernelConfig;
pub use crate::core::half_edge::{Face, FaceId, HalfEdge, HalfEdgeId, Vertex, VertexId};
pub use crate::core::vec3::{BoundingBox, Vec3};
pub use error::{TopologyError, TopologyResult};
pub use mesh::traverse::{FaceEdges, VertexEdges};
pub use mesh::Surface;
pub use primitives::{build_polyhedron, cube, polygon_sheet, tetrahedron, PolyhedronBuilder};
pub use query::FacePolygon;
pub use topology::Step;
pub use validate::{ValidationReport, Validator, Violation};
