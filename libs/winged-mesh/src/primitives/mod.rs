//! Construction of surfaces.
//!
//! [`build_polyhedron`] and [`PolyhedronBuilder`] wire a surface from an
//! indexed face list. The reference shapes are built the same way from
//! fixed tables.

pub mod cube;
pub mod polygon;
pub mod polyhedron;
pub mod tetrahedron;

pub use cube::cube;
pub use polygon::polygon_sheet;
pub use polyhedron::{build_polyhedron, PolyhedronBuilder};
pub use tetrahedron::tetrahedron;
