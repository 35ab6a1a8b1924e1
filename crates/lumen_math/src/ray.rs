use crate::Vec3;

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The constructor normalizes the direction, so `at(t)` measures `t` in
/// world units. Everything downstream (sphere roots, shadow distances,
/// the sky gradient) relies on that.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. `direction` does not need to be normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
