//! Intersection records.

use lumen_math::{Ray, Vec3};

use crate::material::Material;

/// Record of a ray-object intersection.
///
/// Borrows the hit object's material so shading can dispatch without
/// copying anything; records never outlive the scene they came from.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Distance along the ray, in world units.
    pub t: f32,
    /// World-space intersection point.
    pub point: Vec3,
    /// Unit surface normal. Orientation is fixed per primitive: spheres
    /// point outward, triangles face their winding, planes as declared.
    pub normal: Vec3,
    /// Material of the hit object.
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    pub fn new(ray: &Ray, t: f32, normal: Vec3, material: &'a Material) -> Self {
        Self {
            t,
            point: ray.at(t),
            normal,
            material,
        }
    }
}
