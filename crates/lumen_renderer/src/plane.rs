//! Infinite plane primitive.

use lumen_math::{Interval, Ray, Vec3};

use crate::hit::HitRecord;
use crate::material::Material;

/// A plane extending infinitely, described by a point on it and a normal.
#[derive(Debug, Clone)]
pub struct InfinitePlane {
    pub position: Vec3,
    pub normal: Vec3,
    pub material: Material,
}

impl InfinitePlane {
    pub fn new(position: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            position,
            normal: normal.normalize(),
            material,
        }
    }

    /// Parametric ray-plane solve.
    ///
    /// A grazing ray makes the denominator vanish and `t` non-finite;
    /// the positive accept condition lets that fall through to no-hit.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let t = self.normal.dot(self.position - ray.origin) / self.normal.dot(ray.direction);
        if t > 0.0 && ray_t.surrounds(t) {
            Some(HitRecord {
                t,
                point: ray.at(t),
                normal: self.normal,
                material: &self.material,
            })
        } else {
            None
        }
    }
}
