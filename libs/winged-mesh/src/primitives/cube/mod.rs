//! Axis-aligned reference cube.

use crate::core::vec3::Vec3;
use crate::mesh::Surface;
use crate::primitives::polyhedron::wire;

/// Corner windings, counter-clockwise seen from outside.
///
/// Corner `i` sits at `x = ±h` from bit 0, `y` from bit 1 and `z` from
/// bit 2. Faces come in normal order `-X, +X, -Y, +Y, -Z, +Z`.
const FACES: [[usize; 4]; 6] = [
    [0b000, 0b100, 0b110, 0b010],
    [0b001, 0b011, 0b111, 0b101],
    [0b000, 0b001, 0b101, 0b100],
    [0b010, 0b110, 0b111, 0b011],
    [0b000, 0b010, 0b011, 0b001],
    [0b100, 0b101, 0b111, 0b110],
];

/// Creates a cube centred on the origin with corners at `±half_extent`.
///
/// The result has 8 vertices, 6 quads and 24 half-edges. A non-positive
/// `half_extent` turns the cube inside out or flattens it; the topology is
/// the same either way.
///
/// # Examples
/// ```
/// use winged_mesh::{cube, Vec3};
///
/// let c = cube(1.0);
/// assert_eq!(c.vertex_count(), 8);
/// assert_eq!(c.edge_count(), 12);
/// assert_eq!(c.bounding_box().min, Vec3::splat(-1.0));
/// ```
pub fn cube(half_extent: f64) -> Surface {
    let corner = |i: usize, bit: usize| {
        if i & bit == 0 {
            -half_extent
        } else {
            half_extent
        }
    };
    let positions: Vec<Vec3> = (0..8)
        .map(|i| Vec3::new(corner(i, 0b001), corner(i, 0b010), corner(i, 0b100)))
        .collect();

    let mut surface = Surface::with_capacity(8, 6, 24);
    wire(&mut surface, &positions, &FACES);
    surface
}
