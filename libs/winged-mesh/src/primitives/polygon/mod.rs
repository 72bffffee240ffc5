//! Flat polygon with a front and a back face.

use crate::core::vec3::Vec3;
use crate::error::TopologyResult;
use crate::mesh::Surface;
use crate::primitives::polyhedron::PolyhedronBuilder;

/// Creates a two-sided sheet from a counter-clockwise outline.
///
/// The first face follows `points` in order; the second runs the same
/// outline backwards so that every edge has a twin. The result is a closed
/// surface of zero volume that can be edited like any other.
///
/// # Errors
///
/// [`TopologyError::TooFewSides`](crate::TopologyError::TooFewSides) for
/// fewer than 3 points.
///
/// # Examples
/// ```
/// use winged_mesh::{polygon_sheet, Vec3};
///
/// let sheet = polygon_sheet(&[
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(2.0, 0.0, 0.0),
///     Vec3::new(1.0, 2.0, 0.0),
/// ])
/// .unwrap();
/// assert_eq!(sheet.face_count(), 2);
/// assert_eq!(sheet.half_edge_count(), 6);
/// ```
pub fn polygon_sheet(points: &[Vec3]) -> TopologyResult<Surface> {
    let outline: Vec<usize> = (0..points.len()).collect();
    PolyhedronBuilder::new()
        .cap_open_boundaries(true)
        .build(points, &[outline])
}
