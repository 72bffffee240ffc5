//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! Also holds the bounding box used by the query interface.

pub use glam::DVec3 as Vec3;

/// Returns the point halfway between `a` and `b`.
///
/// # Examples
/// ```
/// use winged_mesh::core::vec3::{midpoint, Vec3};
/// let m = midpoint(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 0.0));
/// assert_eq!(m, Vec3::new(0.0, 1.0, 0.0));
/// ```
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) / 2.0
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl BoundingBox {
    /// Creates a box from two corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates an inverted box that any `expand` call will overwrite.
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f64::INFINITY),
            max: Vec3::splat(f64::NEG_INFINITY),
        }
    }

    /// Grows the box to contain `point`.
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Returns true when the box contains at least one point.
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Returns the extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}
