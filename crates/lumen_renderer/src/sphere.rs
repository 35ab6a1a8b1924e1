//! Sphere primitive.

use lumen_math::{Interval, Ray, Vec3};

use crate::hit::HitRecord;
use crate::material::Material;

/// A sphere with an owned material.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(origin: Vec3, radius: f32, material: Material) -> Self {
        Self {
            origin,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Analytic ray-sphere intersection.
    ///
    /// The ray direction is unit length, so the quadratic's leading
    /// coefficient is 1 and roots are world distances. The normal always
    /// points outward; whoever cares about sidedness checks the dot sign.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin - self.origin;
        let half_b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        // Origin outside and moving away: both roots behind the ray
        if c > 0.0 && half_b > 0.0 {
            return None;
        }

        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearer root first; a ray starting inside needs the far one
        let mut root = -half_b - sqrtd;
        if !ray_t.surrounds(root) {
            root = -half_b + sqrtd;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        let normal = (point - self.origin) / self.radius;
        Some(HitRecord {
            t: root,
            point,
            normal,
            material: &self.material,
        })
    }
}
