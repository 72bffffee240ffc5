//! Regular tetrahedron, the smallest closed surface.

use crate::core::vec3::Vec3;
use crate::mesh::Surface;
use crate::primitives::polyhedron::wire;

const CORNERS: [[f64; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
];

/// Face `i` lies opposite corner `3 - i`.
const FACES: [[usize; 3]; 4] = [[0, 1, 2], [1, 0, 3], [2, 1, 3], [0, 2, 3]];

/// Creates a regular tetrahedron inscribed in the cube `[-1, 1]³`.
///
/// 4 vertices, 4 triangles, 12 half-edges, every face wound outward.
///
/// # Examples
/// ```
/// use winged_mesh::tetrahedron;
///
/// let t = tetrahedron();
/// assert_eq!(t.face_count(), 4);
/// assert!(t.validate());
/// ```
pub fn tetrahedron() -> Surface {
    let positions = CORNERS.map(Vec3::from_array);
    let mut surface = Surface::with_capacity(4, 4, 12);
    wire(&mut surface, &positions, &FACES);
    surface
}

#[cfg(test)]
mod tests;
